//! Conversion of raw code table rows into language records.

use iso639_types::{LanguageRecord, LanguageScope, LanguageType};

use crate::parser::{Column, RawRow};
use crate::types::{CodeTableError, CodeTableResult};

impl TryFrom<&RawRow> for LanguageRecord {
    type Error = CodeTableError;

    /// Builds a record from the eight positional fields.
    ///
    /// String fields are copied verbatim. Scope and language type must be
    /// known tags, and the ISO 639-3 code must be present.
    fn try_from(row: &RawRow) -> CodeTableResult<Self> {
        let part3 = row.field(Column::Id);
        if part3.is_empty() {
            return Err(CodeTableError::EmptyPrimaryCode { line: row.line });
        }

        let scope_tag = row.field(Column::Scope);
        let scope =
            LanguageScope::from_tag(scope_tag).map_err(|_| CodeTableError::InvalidScope {
                line: row.line,
                value: scope_tag.to_string(),
            })?;

        let type_tag = row.field(Column::LanguageType);
        let language_type =
            LanguageType::from_tag(type_tag).map_err(|_| CodeTableError::InvalidLanguageType {
                line: row.line,
                value: type_tag.to_string(),
            })?;

        Ok(LanguageRecord {
            part3: part3.to_string(),
            part2b: row.field(Column::Part2b).to_string(),
            part2t: row.field(Column::Part2t).to_string(),
            part1: row.field(Column::Part1).to_string(),
            scope,
            language_type,
            name: row.field(Column::RefName).to_string(),
            comment: row.field(Column::Comment).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_row() {
        let row = RawRow::new(2, ["deu", "ger", "deu", "de", "I", "L", "German", ""]);
        let record = LanguageRecord::try_from(&row).unwrap();

        assert_eq!(record.part3, "deu");
        assert_eq!(record.part2b, "ger");
        assert_eq!(record.part2t, "deu");
        assert_eq!(record.part1, "de");
        assert_eq!(record.scope, LanguageScope::Individual);
        assert_eq!(record.language_type, LanguageType::Living);
        assert_eq!(record.name, "German");
        assert!(record.comment.is_empty());
    }

    #[test]
    fn test_macrolanguage_row() {
        let row = RawRow::new(
            5,
            ["ara", "ara", "ara", "ar", "M", "L", "Arabic", ""],
        );
        let record = LanguageRecord::try_from(&row).unwrap();
        assert_eq!(record.scope, LanguageScope::Macrolanguage);
    }

    #[test]
    fn test_invalid_scope() {
        let row = RawRow::new(7, ["aaa", "", "", "", "X", "L", "Ghotuo", ""]);
        match LanguageRecord::try_from(&row) {
            Err(CodeTableError::InvalidScope { line, value }) => {
                assert_eq!(line, 7);
                assert_eq!(value, "X");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_language_type() {
        let row = RawRow::new(9, ["aaa", "", "", "", "I", "", "Ghotuo", ""]);
        assert!(matches!(
            LanguageRecord::try_from(&row),
            Err(CodeTableError::InvalidLanguageType { line: 9, .. })
        ));
    }

    #[test]
    fn test_empty_primary_code() {
        let row = RawRow::new(4, ["", "ger", "deu", "de", "I", "L", "German", ""]);
        assert!(matches!(
            LanguageRecord::try_from(&row),
            Err(CodeTableError::EmptyPrimaryCode { line: 4 })
        ));
    }
}
