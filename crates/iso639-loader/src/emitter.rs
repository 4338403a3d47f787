//! Rust source emitter for the lookup tables.
//!
//! The generated module defines three statics, `LANGUAGES_PART3`,
//! `LANGUAGES_PART2` and `LANGUAGES_PART1`, each a key-sorted slice of
//! `(&str, Language)` pairs so lookups can binary search. One entry per
//! line keeps the output diffable. Empty string fields are left out of the
//! struct literal and filled from `Language::EMPTY`.

use std::io::Write;

use iso639_types::LanguageRecord;

use crate::tables::LookupTables;
use crate::types::{CodeTableError, CodeTableResult, EmitConfig, TableKind};

/// Writes the generated module for `tables`.
///
/// # Errors
/// Returns an error if the writer fails.
pub fn emit<W: Write>(
    tables: &LookupTables,
    config: &EmitConfig,
    mut writer: W,
) -> CodeTableResult<()> {
    match &config.source_label {
        // escaped so a line break in the label can't end the comment
        Some(label) => writeln!(
            writer,
            "// @generated by iso639-gen from {}. Do not edit.",
            label.escape_debug()
        )?,
        None => writeln!(writer, "// @generated by iso639-gen. Do not edit.")?,
    }
    writeln!(writer)?;
    writeln!(
        writer,
        "use {}::{{Language, LanguageScope, LanguageType}};",
        config.type_path
    )?;

    for kind in TableKind::ALL {
        writeln!(writer)?;
        writeln!(writer, "/// Languages keyed by {} code, sorted by key.", kind.standard())?;
        writeln!(
            writer,
            "pub static {}: &[(&str, Language)] = &[",
            kind.static_name()
        )?;
        for (key, record) in tables.entries(kind) {
            writeln!(writer, "    ({:?}, {}),", key, language_literal(record))?;
        }
        writeln!(writer, "];")?;
    }

    writer.flush()?;
    Ok(())
}

/// Renders the generated module into a string.
pub fn emit_to_string(tables: &LookupTables, config: &EmitConfig) -> CodeTableResult<String> {
    let mut buffer = Vec::new();
    emit(tables, config, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| CodeTableError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Renders one record as a `Language { .. }` struct literal.
///
/// Scope and language type are always written. String fields are written
/// only when non-empty, using Rust debug escaping.
pub fn language_literal(record: &LanguageRecord) -> String {
    let strings = [
        ("part3", record.part3.as_str()),
        ("part2b", record.part2b.as_str()),
        ("part2t", record.part2t.as_str()),
        ("part1", record.part1.as_str()),
    ];
    let trailing = [
        ("name", record.name.as_str()),
        ("comment", record.comment.as_str()),
    ];

    let mut fields: Vec<String> = Vec::with_capacity(8);
    let mut omitted = false;

    for (name, value) in strings {
        push_string_field(&mut fields, &mut omitted, name, value);
    }
    fields.push(format!("scope: LanguageScope::{}", record.scope.variant_name()));
    fields.push(format!(
        "language_type: LanguageType::{}",
        record.language_type.variant_name()
    ));
    for (name, value) in trailing {
        push_string_field(&mut fields, &mut omitted, name, value);
    }

    if omitted {
        fields.push("..Language::EMPTY".to_string());
    }

    format!("Language {{ {} }}", fields.join(", "))
}

fn push_string_field(fields: &mut Vec<String>, omitted: &mut bool, name: &str, value: &str) {
    if value.is_empty() {
        *omitted = true;
    } else {
        fields.push(format!("{}: {:?}", name, value));
    }
}
