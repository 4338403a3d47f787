//! # iso639
//!
//! Static lookup of ISO 639 language codes.
//!
//! The three lookup tables (ISO 639-3, ISO 639-2 bibliographic and
//! terminology, ISO 639-1) are generated at build time from the SIL
//! `iso-639-3.tab` code table by `iso639-loader` and embedded as `'static`
//! data. Lookups never allocate and never fail: a missing code is `None`.
//!
//! ## Usage
//!
//! ```rust
//! use iso639::{from_code, from_name, LanguageScope};
//!
//! let german = from_code("ger").unwrap();
//! assert_eq!(german.part3, "deu");
//! assert_eq!(german.part1, "de");
//!
//! let arabic = from_name("Arabic").unwrap();
//! assert_eq!(arabic.scope, LanguageScope::Macrolanguage);
//!
//! assert!(from_code("elvish").is_none());
//! ```
//!
//! ## Data
//!
//! The build script reads `data/iso-639-3.tab`, the complete table of active
//! ISO 639-3 codes in the SIL layout (7,910 languages). Reference comments
//! are not included, so `Language::comment` is empty for every entry. Point
//! the `ISO639_DATA` environment variable at another copy of the file (for
//! example a newer SIL release) to embed that instead. The build warns when
//! the file holds fewer than 7,000 languages, since a partial table makes
//! valid codes look unknown.

#![warn(missing_docs)]

mod language;

mod lang_db {
    include!(concat!(env!("OUT_DIR"), "/lang_db.rs"));
}

pub use iso639_types::{LanguageRecord, LanguageScope, LanguageType, TagParseError};
pub use language::Language;

/// The raw generated tables, sorted by key.
pub mod tables {
    pub use crate::lang_db::{LANGUAGES_PART1, LANGUAGES_PART2, LANGUAGES_PART3};
}

use lang_db::{LANGUAGES_PART1, LANGUAGES_PART2, LANGUAGES_PART3};

type Table = &'static [(&'static str, Language)];

fn lookup(table: Table, code: &str) -> Option<&'static Language> {
    table
        .binary_search_by(|(key, _)| (*key).cmp(code))
        .ok()
        .map(|index| &table[index].1)
}

fn find_by_name(table: Table, name: &str) -> Option<&'static Language> {
    table
        .iter()
        .map(|(_, language)| language)
        .find(|language| language.name == name)
}

/// Looks up a language by its three-letter ISO 639-3 code.
pub fn from_part3_code(code: &str) -> Option<&'static Language> {
    lookup(LANGUAGES_PART3, code)
}

/// Looks up a language by its three-letter ISO 639-2 code.
///
/// Both bibliographic (`ger`) and terminology (`deu`) codes are accepted.
pub fn from_part2_code(code: &str) -> Option<&'static Language> {
    lookup(LANGUAGES_PART2, code)
}

/// Looks up a language by its two-letter ISO 639-1 code.
pub fn from_part1_code(code: &str) -> Option<&'static Language> {
    lookup(LANGUAGES_PART1, code)
}

/// Looks up a language by any code.
///
/// Three-byte codes are tried as ISO 639-3 first, then as ISO 639-2.
/// Two-byte codes are tried as ISO 639-1. Any other length is `None`
/// without consulting a table.
///
/// # Examples
///
/// ```
/// assert_eq!(iso639::from_code("fre").unwrap().name, "French");
/// assert_eq!(iso639::from_code("fr").unwrap().name, "French");
/// assert!(iso639::from_code("fren").is_none());
/// ```
pub fn from_code(code: &str) -> Option<&'static Language> {
    match code.len() {
        3 => from_part3_code(code).or_else(|| from_part2_code(code)),
        2 => from_part1_code(code),
        _ => None,
    }
}

/// Looks up a language by its exact, case-sensitive reference name.
///
/// Entries are scanned in ISO 639-3 code order, so when several languages
/// share a name the one with the lowest ISO 639-3 code wins.
pub fn from_name(name: &str) -> Option<&'static Language> {
    find_by_name(LANGUAGES_PART3, name)
}

/// Iterates over every language in ISO 639-3 code order.
pub fn languages() -> impl Iterator<Item = &'static Language> {
    LANGUAGES_PART3.iter().map(|(_, language)| language)
}
