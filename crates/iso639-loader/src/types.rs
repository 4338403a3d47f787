//! Loader-specific types for ISO 639-3 code table processing.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while loading the code table or generating code.
#[derive(Error, Debug)]
pub enum CodeTableError {
    /// I/O error reading the source or writing the output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// HTTP error downloading the code table.
    #[cfg(feature = "http")]
    #[error("HTTP error downloading code table: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote source requested but the loader was built without HTTP support.
    #[error("Cannot download {url}: built without the `http` feature")]
    HttpUnsupported {
        /// The URL that was requested.
        url: String,
    },

    /// File not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The source contained no bytes at all.
    #[error("Code table source is empty")]
    EmptySource,

    /// The source has no header row.
    #[error("Code table has no header row")]
    MissingHeader,

    /// Header has the wrong number of columns.
    #[error("Invalid header: expected {expected} columns, found {found}")]
    InvalidHeader {
        /// Expected column count.
        expected: usize,
        /// Found column count.
        found: usize,
    },

    /// A data row has the wrong number of fields.
    #[error("Malformed row at line {line}: expected {expected} fields, found {found}")]
    RowShape {
        /// 1-based line number of the row.
        line: u64,
        /// Expected field count.
        expected: usize,
        /// Found field count.
        found: usize,
    },

    /// Unknown scope tag.
    #[error("Invalid scope '{value}' at line {line}")]
    InvalidScope {
        /// 1-based line number of the row.
        line: u64,
        /// The invalid tag.
        value: String,
    },

    /// Unknown language type tag.
    #[error("Invalid language type '{value}' at line {line}")]
    InvalidLanguageType {
        /// 1-based line number of the row.
        line: u64,
        /// The invalid tag.
        value: String,
    },

    /// A row without an ISO 639-3 code.
    #[error("Empty ISO 639-3 code at line {line}")]
    EmptyPrimaryCode {
        /// 1-based line number of the row.
        line: u64,
    },

    /// Two different records claim the same key in one table.
    #[error("Duplicate key '{key}' in {table} table: already used by '{existing}', claimed again by '{incoming}'")]
    DuplicateKey {
        /// The table the collision happened in.
        table: TableKind,
        /// The colliding key.
        key: String,
        /// ISO 639-3 code of the record that holds the key.
        existing: String,
        /// ISO 639-3 code of the record that tried to take it.
        incoming: String,
    },
}

/// Result type for code table operations.
pub type CodeTableResult<T> = Result<T, CodeTableError>;

/// Identifies one of the three lookup tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// Keyed by ISO 639-3 code.
    Part3,
    /// Keyed by ISO 639-2 bibliographic and terminology codes.
    Part2,
    /// Keyed by ISO 639-1 code.
    Part1,
}

impl TableKind {
    /// All tables in emission order.
    pub const ALL: [TableKind; 3] = [Self::Part3, Self::Part2, Self::Part1];

    /// Name of the generated static holding this table.
    pub fn static_name(self) -> &'static str {
        match self {
            Self::Part3 => "LANGUAGES_PART3",
            Self::Part2 => "LANGUAGES_PART2",
            Self::Part1 => "LANGUAGES_PART1",
        }
    }

    /// Human-readable standard name.
    pub fn standard(self) -> &'static str {
        match self {
            Self::Part3 => "ISO 639-3",
            Self::Part2 => "ISO 639-2",
            Self::Part1 => "ISO 639-1",
        }
    }
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.standard())
    }
}

/// Configuration for fetching the code table.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Timeout for the whole HTTP request.
    pub http_timeout: Duration,
}

impl LoaderConfig {
    /// Default download timeout.
    pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(60);
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            http_timeout: Self::DEFAULT_HTTP_TIMEOUT,
        }
    }
}

/// Configuration for the generated module.
#[derive(Debug, Clone)]
pub struct EmitConfig {
    /// Path that `Language`, `LanguageScope` and `LanguageType` are imported from.
    pub type_path: String,
    /// Source description written into the header comment.
    pub source_label: Option<String>,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            type_path: "crate".to_string(),
            source_label: None,
        }
    }
}

/// Statistics about built lookup tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableStats {
    /// Number of records (equals ISO 639-3 table size).
    pub records: usize,
    /// Entries in the ISO 639-3 table.
    pub part3_entries: usize,
    /// Entries in the ISO 639-2 table.
    pub part2_entries: usize,
    /// Entries in the ISO 639-1 table.
    pub part1_entries: usize,
}
