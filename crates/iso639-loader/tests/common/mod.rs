//! Reader for generated lookup modules.
//!
//! Parses the output of `iso639_loader::emit` with `syn` and rebuilds the
//! records, so tests check both that the module is valid Rust and that
//! generation loses nothing.

#![allow(dead_code)]

use std::collections::BTreeMap;

use iso639_loader::iso639_types::{LanguageRecord, LanguageScope, LanguageType};
use syn::{Expr, Item, Lit, Member};

/// Table name -> entries in file order.
pub type ParsedModule = BTreeMap<String, Vec<(String, LanguageRecord)>>;

/// Parses a generated module, panicking if it is not valid Rust or not of
/// the generated shape.
pub fn parse_module(source: &str) -> ParsedModule {
    let file = syn::parse_file(source)
        .unwrap_or_else(|e| panic!("generated module is not valid Rust: {e}\n{source}"));

    let mut module = ParsedModule::new();
    for item in file.items {
        match item {
            Item::Use(_) => {}
            Item::Static(table) => {
                let entries = match *table.expr {
                    Expr::Reference(reference) => match *reference.expr {
                        Expr::Array(array) => {
                            array.elems.into_iter().map(parse_entry).collect()
                        }
                        other => panic!("expected array, got {other:?}"),
                    },
                    other => panic!("expected slice reference, got {other:?}"),
                };
                module.insert(table.ident.to_string(), entries);
            }
            other => panic!("unexpected item {other:?}"),
        }
    }

    module
}

fn parse_entry(entry: Expr) -> (String, LanguageRecord) {
    let tuple = match entry {
        Expr::Tuple(tuple) => tuple,
        other => panic!("expected (key, Language) tuple, got {other:?}"),
    };
    let mut elems = tuple.elems.into_iter();
    let key = string_value(&elems.next().expect("missing key"));
    let language = elems.next().expect("missing language");
    assert!(elems.next().is_none(), "entry has extra elements");

    let literal = match language {
        Expr::Struct(literal) => literal,
        other => panic!("expected Language literal, got {other:?}"),
    };
    assert!(literal.path.is_ident("Language"));

    let mut strings: BTreeMap<String, String> = BTreeMap::new();
    let mut scope = None;
    let mut language_type = None;

    for field in literal.fields {
        let name = match field.member {
            Member::Named(name) => name,
            Member::Unnamed(_) => panic!("unnamed field in Language literal"),
        };
        match name.to_string().as_str() {
            "scope" => scope = Some(parse_scope(&variant(&field.expr, "LanguageScope"))),
            "language_type" => {
                language_type = Some(parse_type(&variant(&field.expr, "LanguageType")))
            }
            other => {
                let value = string_value(&field.expr);
                assert!(!value.is_empty(), "empty {other} should be omitted");
                strings.insert(other.to_string(), value);
            }
        }
    }

    let has_rest = match literal.rest.as_deref() {
        Some(Expr::Path(path)) => {
            let segments: Vec<String> =
                path.path.segments.iter().map(|s| s.ident.to_string()).collect();
            assert_eq!(segments, ["Language", "EMPTY"]);
            true
        }
        Some(other) => panic!("unexpected struct base {other:?}"),
        None => false,
    };
    assert_eq!(
        has_rest,
        strings.len() < 6,
        "`..Language::EMPTY` iff a field was omitted"
    );

    let mut take = |name: &str| strings.remove(name).unwrap_or_default();
    let record = LanguageRecord {
        part3: take("part3"),
        part2b: take("part2b"),
        part2t: take("part2t"),
        part1: take("part1"),
        scope: scope.expect("scope is always emitted"),
        language_type: language_type.expect("language_type is always emitted"),
        name: take("name"),
        comment: take("comment"),
    };
    (key, record)
}

fn string_value(expr: &Expr) -> String {
    match expr {
        Expr::Lit(syn::ExprLit {
            lit: Lit::Str(lit), ..
        }) => lit.value(),
        other => panic!("expected string literal, got {other:?}"),
    }
}

/// Returns the variant name of an `Enum::Variant` path.
fn variant(expr: &Expr, enum_name: &str) -> String {
    let path = match expr {
        Expr::Path(path) => path,
        other => panic!("expected {enum_name} path, got {other:?}"),
    };
    let segments: Vec<String> =
        path.path.segments.iter().map(|s| s.ident.to_string()).collect();
    match segments.as_slice() {
        [ty, name] if ty == enum_name => name.clone(),
        other => panic!("expected {enum_name}::Variant, got {other:?}"),
    }
}

fn parse_scope(variant: &str) -> LanguageScope {
    LanguageScope::ALL
        .into_iter()
        .find(|s| s.variant_name() == variant)
        .unwrap_or_else(|| panic!("unknown scope {variant}"))
}

fn parse_type(variant: &str) -> LanguageType {
    LanguageType::ALL
        .into_iter()
        .find(|t| t.variant_name() == variant)
        .unwrap_or_else(|| panic!("unknown language type {variant}"))
}
