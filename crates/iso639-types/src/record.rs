//! ISO 639-3 language record type.
//!
//! This module provides the `LanguageRecord` struct representing one row
//! of the ISO 639-3 code table.

use crate::{LanguageScope, LanguageType};

/// A language from the ISO 639-3 code table.
///
/// Represents a row from the `iso-639-3.tab` file published by SIL.
///
/// # Examples
///
/// ```
/// use iso639_types::{LanguageRecord, LanguageScope, LanguageType};
///
/// let german = LanguageRecord {
///     part3: "deu".to_string(),
///     part2b: "ger".to_string(),
///     part2t: "deu".to_string(),
///     part1: "de".to_string(),
///     scope: LanguageScope::Individual,
///     language_type: LanguageType::Living,
///     name: "German".to_string(),
///     comment: String::new(),
/// };
///
/// assert_eq!(german.part2_keys(), vec!["ger", "deu"]);
/// assert!(german.has_part1());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LanguageRecord {
    /// ISO 639-3 code, unique across the table.
    pub part3: String,
    /// ISO 639-2 bibliographic code (may be empty).
    pub part2b: String,
    /// ISO 639-2 terminology code (may be empty).
    pub part2t: String,
    /// ISO 639-1 two-letter code (may be empty).
    pub part1: String,
    /// Individual language, macrolanguage or special code.
    pub scope: LanguageScope,
    /// Living, extinct, constructed, etc.
    pub language_type: LanguageType,
    /// Reference name of the language.
    pub name: String,
    /// Free-text comment (usually empty).
    pub comment: String,
}

impl LanguageRecord {
    /// Returns true if the record carries an ISO 639-2 code.
    pub fn has_part2(&self) -> bool {
        !self.part2b.is_empty()
    }

    /// Returns true if the record carries an ISO 639-1 code.
    pub fn has_part1(&self) -> bool {
        !self.part1.is_empty()
    }

    /// Returns the keys this record is reachable under in the ISO 639-2 table.
    ///
    /// The bibliographic code comes first. The terminology code is added only
    /// when it is non-empty and differs from the bibliographic one. A record
    /// without a bibliographic code has no ISO 639-2 keys at all.
    pub fn part2_keys(&self) -> Vec<&str> {
        let mut keys = Vec::with_capacity(2);
        if self.part2b.is_empty() {
            return keys;
        }
        keys.push(self.part2b.as_str());
        if !self.part2t.is_empty() && self.part2t != self.part2b {
            keys.push(self.part2t.as_str());
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(part3: &str, part2b: &str, part2t: &str, part1: &str) -> LanguageRecord {
        LanguageRecord {
            part3: part3.to_string(),
            part2b: part2b.to_string(),
            part2t: part2t.to_string(),
            part1: part1.to_string(),
            scope: LanguageScope::Individual,
            language_type: LanguageType::Living,
            name: "Test".to_string(),
            comment: String::new(),
        }
    }

    #[test]
    fn test_part2_keys_equal_codes_collapse() {
        let russian = make_record("rus", "rus", "rus", "ru");
        assert_eq!(russian.part2_keys(), vec!["rus"]);
    }

    #[test]
    fn test_part2_keys_distinct_codes() {
        let french = make_record("fra", "fre", "fra", "fr");
        assert_eq!(french.part2_keys(), vec!["fre", "fra"]);
    }

    #[test]
    fn test_part2_keys_missing() {
        let ghotuo = make_record("aaa", "", "", "");
        assert!(ghotuo.part2_keys().is_empty());
        assert!(!ghotuo.has_part2());
        assert!(!ghotuo.has_part1());

        // Terminology code alone is never a key.
        let odd = make_record("zzz", "", "zzz", "");
        assert!(odd.part2_keys().is_empty());
    }
}
