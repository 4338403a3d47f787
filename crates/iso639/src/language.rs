//! Static language entry type.

use iso639_types::{LanguageRecord, LanguageScope, LanguageType};

/// A language from the embedded ISO 639-3 code table.
///
/// All string fields are borrowed from static data. Codes a language doesn't
/// have are empty strings.
///
/// # Examples
///
/// ```
/// let russian = iso639::from_part1_code("ru").unwrap();
/// assert_eq!(russian.part3, "rus");
/// assert_eq!(russian.name, "Russian");
/// assert!(russian.comment.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Language {
    /// ISO 639-3 code.
    pub part3: &'static str,
    /// ISO 639-2 bibliographic code.
    pub part2b: &'static str,
    /// ISO 639-2 terminology code.
    pub part2t: &'static str,
    /// ISO 639-1 code.
    pub part1: &'static str,
    /// Individual language, macrolanguage or special code.
    pub scope: LanguageScope,
    /// Living, extinct, constructed, etc.
    pub language_type: LanguageType,
    /// Reference name.
    pub name: &'static str,
    /// Free-text comment.
    pub comment: &'static str,
}

impl Language {
    /// Base for struct update syntax in the generated tables.
    ///
    /// String fields are empty. Generated entries always set scope and
    /// language type explicitly, so their values here carry no meaning.
    pub const EMPTY: Language = Language {
        part3: "",
        part2b: "",
        part2t: "",
        part1: "",
        scope: LanguageScope::Individual,
        language_type: LanguageType::Living,
        name: "",
        comment: "",
    };

    /// Returns true if this entry is a macrolanguage.
    pub fn is_macrolanguage(&self) -> bool {
        self.scope == LanguageScope::Macrolanguage
    }

    /// Returns true if the language is still spoken.
    pub fn is_living(&self) -> bool {
        self.language_type == LanguageType::Living
    }

    /// Copies the entry into an owned record.
    pub fn to_record(&self) -> LanguageRecord {
        LanguageRecord::from(self)
    }
}

impl From<&Language> for LanguageRecord {
    fn from(language: &Language) -> Self {
        LanguageRecord {
            part3: language.part3.to_string(),
            part2b: language.part2b.to_string(),
            part2t: language.part2t.to_string(),
            part1: language.part1.to_string(),
            scope: language.scope,
            language_type: language.language_type,
            name: language.name.to_string(),
            comment: language.comment.to_string(),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.part3)
    }
}
