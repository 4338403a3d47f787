//! Tab-separated code table parser.
//!
//! Splits the `iso-639-3.tab` payload into raw rows of exactly eight fields.
//! The header row is checked for shape and then dropped.

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use crate::types::{CodeTableError, CodeTableResult};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Column names of the code table, in file order.
pub const COLUMNS: &[&str] = &[
    "Id",
    "Part2b",
    "Part2t",
    "Part1",
    "Scope",
    "Language_Type",
    "Ref_Name",
    "Comment",
];

/// Position of a field within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// ISO 639-3 code.
    Id = 0,
    /// ISO 639-2 bibliographic code.
    Part2b = 1,
    /// ISO 639-2 terminology code.
    Part2t = 2,
    /// ISO 639-1 code.
    Part1 = 3,
    /// Scope tag.
    Scope = 4,
    /// Language type tag.
    LanguageType = 5,
    /// Reference name.
    RefName = 6,
    /// Comment.
    Comment = 7,
}

/// One data row of the code table, not yet interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    /// 1-based line number in the source.
    pub line: u64,
    /// The eight fields of the row.
    pub fields: StringRecord,
}

impl RawRow {
    /// Creates a row from field values. Mostly useful in tests.
    pub fn new<I, S>(line: u64, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut record = StringRecord::new();
        for field in fields {
            record.push_field(field.as_ref());
        }
        Self {
            line,
            fields: record,
        }
    }

    /// Returns the value of a column.
    pub fn field(&self, column: Column) -> &str {
        self.fields.get(column as usize).unwrap_or("")
    }
}

/// Parses the code table payload into raw rows.
///
/// A leading UTF-8 byte-order mark is ignored. Every data row must have
/// exactly [`COLUMNS`]`.len()` fields; the first row that doesn't aborts
/// the parse.
///
/// # Errors
/// Returns an error for an empty payload, a malformed header, a row of
/// the wrong shape, or invalid UTF-8.
pub fn parse_rows(bytes: &[u8]) -> CodeTableResult<Vec<RawRow>> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    if bytes.is_empty() {
        return Err(CodeTableError::EmptySource);
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::None)
        .from_reader(bytes);

    validate_header(reader.headers()?)?;

    let expected = COLUMNS.len();
    let mut rows = Vec::new();
    let mut record = StringRecord::new();

    while reader.read_record(&mut record)? {
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        if record.len() != expected {
            return Err(CodeTableError::RowShape {
                line,
                expected,
                found: record.len(),
            });
        }
        rows.push(RawRow {
            line,
            fields: record.clone(),
        });
    }

    debug!(rows = rows.len(), "parsed code table rows");
    Ok(rows)
}

/// Checks the header row shape.
///
/// Only the column count is enforced. Unexpected names are logged, since
/// the rows are read positionally.
fn validate_header(headers: &StringRecord) -> CodeTableResult<()> {
    if headers.is_empty() {
        return Err(CodeTableError::MissingHeader);
    }

    if headers.len() != COLUMNS.len() {
        return Err(CodeTableError::InvalidHeader {
            expected: COLUMNS.len(),
            found: headers.len(),
        });
    }

    for (position, (found, expected)) in headers.iter().zip(COLUMNS).enumerate() {
        let found = found.trim_start_matches('\u{feff}');
        if !found.eq_ignore_ascii_case(expected) {
            warn!(position, found, expected, "unexpected column name");
        }
    }

    Ok(())
}
