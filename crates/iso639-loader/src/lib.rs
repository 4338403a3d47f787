//! # iso639-loader
//!
//! Parser and code generator for the ISO 639-3 code table.
//!
//! The pipeline reads the tab-separated `iso-639-3.tab` file published by
//! SIL, builds three lookup tables (ISO 639-3, ISO 639-2 and ISO 639-1 keys)
//! and emits them as a Rust module of static data.
//!
//! ```ignore
//! use iso639_loader::{generate, EmitConfig, LoaderConfig, Source};
//!
//! let source = Source::parse("data/iso-639-3.tab");
//! let stats = generate(&source, &LoaderConfig::default(), &EmitConfig::default(), std::io::stdout())?;
//! println!("{} languages", stats.records);
//! ```
//!
//! ## Features
//!
//! - `http` (default): download the code table from a URL with `reqwest`.
//!   Build scripts that only read local files can turn it off.

#![warn(missing_docs)]

pub mod emitter;
pub mod parser;
mod record;
pub mod source;
pub mod tables;
pub mod types;

use std::io::Write;

use tracing::info;

pub use emitter::{emit, emit_to_string};
pub use parser::{parse_rows, RawRow};
pub use source::{Source, DEFAULT_SOURCE_URL};
pub use tables::LookupTables;
pub use types::{
    CodeTableError, CodeTableResult, EmitConfig, LoaderConfig, TableKind, TableStats,
};

// Re-export iso639-types for convenience
pub use iso639_types;

/// Parses raw code table bytes and builds the lookup tables.
pub fn load_tables(bytes: &[u8]) -> CodeTableResult<LookupTables> {
    let rows = parse_rows(bytes)?;
    LookupTables::build(&rows)
}

/// Runs the whole pipeline: fetch, parse, build, emit.
///
/// The module is written to `writer` only after it has been fully
/// generated, so a failure never leaves partial output behind.
pub fn generate<W: Write>(
    source: &Source,
    loader: &LoaderConfig,
    emit_config: &EmitConfig,
    mut writer: W,
) -> CodeTableResult<TableStats> {
    let bytes = source.fetch(loader)?;
    let tables = load_tables(&bytes)?;

    let module = emit_to_string(&tables, emit_config)?;
    writer.write_all(module.as_bytes())?;
    writer.flush()?;

    let stats = tables.stats();
    info!(
        source = %source,
        records = stats.records,
        bytes = module.len(),
        "generated lookup module"
    );
    Ok(stats)
}
