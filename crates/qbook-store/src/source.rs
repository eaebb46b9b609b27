//! Where the dataset document comes from.
//!
//! A source is either a local file or an `http://`/`https://` URL. URLs are
//! fetched with a blocking client; there is no caching and no retry.

use std::convert::Infallible;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use tracing::debug;

use crate::error::{LoadError, Result};

/// Default dataset location, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    /// Classify a user-supplied location. Anything that is not an HTTP(S)
    /// URL is treated as a filesystem path.
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Url(_))
    }

    /// Retrieve the raw document bytes.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] for unreadable files, [`LoadError::Network`]
    /// when a request fails, and [`LoadError::Status`] for non-success
    /// responses.
    pub fn fetch(&self) -> Result<Vec<u8>> {
        match self {
            Self::File(path) => read_file(path),
            Self::Url(url) => fetch_url(url),
        }
    }
}

impl Default for DataSource {
    fn default() -> Self {
        Self::File(PathBuf::from(DEFAULT_DATA_FILE))
    }
}

impl FromStr for DataSource {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    debug!(path = %path.display(), "reading dataset file");
    std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn fetch_url(url: &str) -> Result<Vec<u8>> {
    debug!(url, "fetching dataset");
    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| LoadError::Network(e.to_string()))?;

    let response = client
        .get(url)
        .header(USER_AGENT, concat!("qbook/", env!("CARGO_PKG_VERSION")))
        .header(ACCEPT, "application/json")
        .send()
        .map_err(|e| LoadError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status(status.as_u16()));
    }

    let body = response
        .bytes()
        .map_err(|e| LoadError::Network(e.to_string()))?;
    debug!(url, bytes = body.len(), "dataset fetched");
    Ok(body.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_locations() {
        assert_eq!(
            DataSource::parse("https://example.com/data.json"),
            DataSource::Url("https://example.com/data.json".to_string())
        );
        assert!(DataSource::parse("HTTP://example.com/d.json").is_remote());
        assert_eq!(
            DataSource::parse(" fixtures/data.json "),
            DataSource::File(PathBuf::from("fixtures/data.json"))
        );
        assert!(!DataSource::parse("httpdocs/data.json").is_remote());
    }

    #[test]
    fn default_is_local_data_file() {
        assert_eq!(DataSource::default().to_string(), DEFAULT_DATA_FILE);
    }

    #[test]
    fn missing_file_is_io_error() {
        let source = DataSource::parse("/definitely/not/here/data.json");
        let error = source.fetch().unwrap_err();
        assert!(matches!(error, LoadError::Io { .. }));
        assert!(error.is_retrieval());
    }
}
