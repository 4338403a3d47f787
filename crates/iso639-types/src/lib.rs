//! # iso639-types
//!
//! Type definitions for ISO 639 language codes.
//!
//! This crate provides Rust type definitions for the records of the ISO 639-3
//! code table, which also carries the matching ISO 639-2 and ISO 639-1 codes.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use iso639_types::{LanguageRecord, LanguageScope, LanguageType};
//!
//! let record = LanguageRecord {
//!     part3: "rus".to_string(),
//!     part2b: "rus".to_string(),
//!     part2t: "rus".to_string(),
//!     part1: "ru".to_string(),
//!     scope: LanguageScope::from_code('I').unwrap(),
//!     language_type: LanguageType::from_code('L').unwrap(),
//!     name: "Russian".to_string(),
//!     comment: String::new(),
//! };
//!
//! assert_eq!(record.part2_keys(), vec!["rus"]);
//! ```

#![warn(missing_docs)]

mod enums;
mod record;

// Re-export all public types at crate root
pub use enums::{LanguageScope, LanguageType, TagParseError};
pub use record::LanguageRecord;
