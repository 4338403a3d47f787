//! Code table source resolution and fetching.
//!
//! A source location is either a URL (downloaded once over HTTP) or a
//! local file path. Either way the whole payload is read into memory
//! before parsing starts.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use url::Url;

use crate::types::{CodeTableError, CodeTableResult, LoaderConfig};

/// Official download location of the ISO 639-3 code table.
pub const DEFAULT_SOURCE_URL: &str =
    "https://iso639-3.sil.org/sites/iso639-3/files/downloads/iso-639-3.tab";

/// Where the code table comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Remote file fetched with a single HTTP GET.
    Url(Url),
    /// Local file.
    Path(PathBuf),
}

impl Source {
    /// Resolves a location string.
    ///
    /// Anything that parses as a URL with a scheme is treated as remote,
    /// everything else as a file path. Single-letter schemes are Windows
    /// drive letters (`C:\data\iso-639-3.tab`) and stay paths, and `file:`
    /// URLs are read from disk.
    pub fn parse(location: &str) -> Self {
        match Url::parse(location) {
            Ok(url) if url.scheme() == "file" => match url.to_file_path() {
                Ok(path) => Self::Path(path),
                Err(()) => Self::Path(PathBuf::from(location)),
            },
            Ok(url) if url.scheme().len() > 1 => Self::Url(url),
            _ => Self::Path(PathBuf::from(location)),
        }
    }

    /// Returns true if fetching this source needs the network.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Url(_))
    }

    /// Reads the full source payload into memory.
    ///
    /// # Errors
    /// Fails on a missing file, any network error, a non-success HTTP
    /// status or a timeout. There is no retry.
    pub fn fetch(&self, config: &LoaderConfig) -> CodeTableResult<Vec<u8>> {
        let bytes = match self {
            Self::Path(path) => read_file(path)?,
            Self::Url(url) => download(url, config)?,
        };

        info!(source = %self, bytes = bytes.len(), "fetched code table");
        Ok(bytes)
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{}", url),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

fn read_file(path: &Path) -> CodeTableResult<Vec<u8>> {
    if !path.exists() {
        return Err(CodeTableError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    debug!(path = %path.display(), "reading code table from file");
    Ok(fs::read(path)?)
}

#[cfg(feature = "http")]
fn download(url: &Url, config: &LoaderConfig) -> CodeTableResult<Vec<u8>> {
    debug!(%url, timeout_secs = config.http_timeout.as_secs(), "downloading code table");

    let client = reqwest::blocking::Client::builder()
        .timeout(config.http_timeout)
        .build()?;

    let response = client.get(url.as_str()).send()?.error_for_status()?;
    Ok(response.bytes()?.to_vec())
}

#[cfg(not(feature = "http"))]
fn download(url: &Url, _config: &LoaderConfig) -> CodeTableResult<Vec<u8>> {
    Err(CodeTableError::HttpUnsupported {
        url: url.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_source() {
        let source = Source::parse(DEFAULT_SOURCE_URL);
        assert!(source.is_remote());
        assert_eq!(source.to_string(), DEFAULT_SOURCE_URL);
    }

    #[test]
    fn test_parse_path_sources() {
        assert_eq!(
            Source::parse("data/iso-639-3.tab"),
            Source::Path(PathBuf::from("data/iso-639-3.tab"))
        );
        assert_eq!(
            Source::parse("/tmp/iso-639-3.tab"),
            Source::Path(PathBuf::from("/tmp/iso-639-3.tab"))
        );
        assert!(!Source::parse(r"C:\data\iso-639-3.tab").is_remote());
    }

    #[cfg(unix)]
    #[test]
    fn test_parse_file_url() {
        assert_eq!(
            Source::parse("file:///tmp/iso-639-3.tab"),
            Source::Path(PathBuf::from("/tmp/iso-639-3.tab"))
        );
    }

    #[test]
    fn test_missing_file() {
        let source = Source::parse("/definitely/not/here/iso-639-3.tab");
        let err = source.fetch(&LoaderConfig::default()).unwrap_err();
        assert!(matches!(err, CodeTableError::FileNotFound { .. }));
    }
}
