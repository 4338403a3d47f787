//! ISO 639-3 enumeration types.
//!
//! The code table stores scope and language type as single-character tags.
//! This module turns those tags into closed enums.

/// Error returned when a scope or language type tag is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagParseError {
    /// The tag was not exactly one character long.
    InvalidLength(String),
    /// The tag character is not a known value.
    UnknownTag(char),
}

impl std::fmt::Display for TagParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLength(s) => write!(f, "invalid tag: '{}' (expected one character)", s),
            Self::UnknownTag(c) => write!(f, "unknown tag: '{}'", c),
        }
    }
}

impl std::error::Error for TagParseError {}

/// Scope of a language code.
///
/// # Examples
///
/// ```
/// use iso639_types::LanguageScope;
///
/// assert_eq!(LanguageScope::from_code('M'), Some(LanguageScope::Macrolanguage));
/// assert_eq!(LanguageScope::Individual.code(), 'I');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LanguageScope {
    /// An individual language.
    Individual,
    /// A special code (`mis`, `mul`, `und`, `zxx`).
    Special,
    /// A macrolanguage grouping several individual languages.
    Macrolanguage,
}

impl LanguageScope {
    /// All scopes in declaration order.
    pub const ALL: [LanguageScope; 3] = [Self::Individual, Self::Special, Self::Macrolanguage];

    /// Creates a scope from its tag character.
    ///
    /// Returns `None` if the character doesn't match a known scope.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'I' => Some(Self::Individual),
            'S' => Some(Self::Special),
            'M' => Some(Self::Macrolanguage),
            _ => None,
        }
    }

    /// Parses a scope from a one-character tag string.
    pub fn from_tag(tag: &str) -> Result<Self, TagParseError> {
        let code = single_char(tag)?;
        Self::from_code(code).ok_or(TagParseError::UnknownTag(code))
    }

    /// Returns the tag character for this scope.
    pub fn code(self) -> char {
        match self {
            Self::Individual => 'I',
            Self::Special => 'S',
            Self::Macrolanguage => 'M',
        }
    }

    /// Returns the Rust variant name, as written in generated code.
    pub fn variant_name(self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::Special => "Special",
            Self::Macrolanguage => "Macrolanguage",
        }
    }
}

/// Type (vitality) of a language.
///
/// # Examples
///
/// ```
/// use iso639_types::LanguageType;
///
/// assert_eq!(LanguageType::from_tag("E"), Ok(LanguageType::Extinct));
/// assert!(LanguageType::from_tag("X").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LanguageType {
    /// Living language.
    Living,
    /// Historical language, distinct ancestor of a modern language.
    Historical,
    /// Ancient language, extinct for more than a millennium.
    Ancient,
    /// Extinct language.
    Extinct,
    /// Constructed language.
    Constructed,
    /// Special code.
    Special,
}

impl LanguageType {
    /// All language types in declaration order.
    pub const ALL: [LanguageType; 6] = [
        Self::Living,
        Self::Historical,
        Self::Ancient,
        Self::Extinct,
        Self::Constructed,
        Self::Special,
    ];

    /// Creates a language type from its tag character.
    ///
    /// Returns `None` if the character doesn't match a known type.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'L' => Some(Self::Living),
            'H' => Some(Self::Historical),
            'A' => Some(Self::Ancient),
            'E' => Some(Self::Extinct),
            'C' => Some(Self::Constructed),
            'S' => Some(Self::Special),
            _ => None,
        }
    }

    /// Parses a language type from a one-character tag string.
    pub fn from_tag(tag: &str) -> Result<Self, TagParseError> {
        let code = single_char(tag)?;
        Self::from_code(code).ok_or(TagParseError::UnknownTag(code))
    }

    /// Returns the tag character for this language type.
    pub fn code(self) -> char {
        match self {
            Self::Living => 'L',
            Self::Historical => 'H',
            Self::Ancient => 'A',
            Self::Extinct => 'E',
            Self::Constructed => 'C',
            Self::Special => 'S',
        }
    }

    /// Returns the Rust variant name, as written in generated code.
    pub fn variant_name(self) -> &'static str {
        match self {
            Self::Living => "Living",
            Self::Historical => "Historical",
            Self::Ancient => "Ancient",
            Self::Extinct => "Extinct",
            Self::Constructed => "Constructed",
            Self::Special => "Special",
        }
    }
}

fn single_char(tag: &str) -> Result<char, TagParseError> {
    let mut chars = tag.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(TagParseError::InvalidLength(tag.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_conversion() {
        assert_eq!(LanguageScope::from_code('I'), Some(LanguageScope::Individual));
        assert_eq!(LanguageScope::from_code('S'), Some(LanguageScope::Special));
        assert_eq!(LanguageScope::from_code('M'), Some(LanguageScope::Macrolanguage));
        assert_eq!(LanguageScope::from_code('L'), None);

        for scope in LanguageScope::ALL {
            assert_eq!(LanguageScope::from_code(scope.code()), Some(scope));
        }
    }

    #[test]
    fn test_language_type_conversion() {
        assert_eq!(LanguageType::from_code('L'), Some(LanguageType::Living));
        assert_eq!(LanguageType::from_code('C'), Some(LanguageType::Constructed));
        assert_eq!(LanguageType::from_code('i'), None);

        for kind in LanguageType::ALL {
            assert_eq!(LanguageType::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn test_from_tag_rejects_bad_length() {
        assert_eq!(
            LanguageScope::from_tag(""),
            Err(TagParseError::InvalidLength(String::new()))
        );
        assert_eq!(
            LanguageType::from_tag("LL"),
            Err(TagParseError::InvalidLength("LL".to_string()))
        );
        assert_eq!(LanguageScope::from_tag("Q"), Err(TagParseError::UnknownTag('Q')));
    }

    #[test]
    fn test_variant_names_match_debug() {
        for scope in LanguageScope::ALL {
            assert_eq!(scope.variant_name(), format!("{:?}", scope));
        }
        for kind in LanguageType::ALL {
            assert_eq!(kind.variant_name(), format!("{:?}", kind));
        }
    }
}
