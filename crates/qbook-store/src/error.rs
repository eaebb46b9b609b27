//! Error types for dataset loading.

use std::path::PathBuf;

use thiserror::Error;

/// Message shown in place of the content when the dataset cannot be loaded.
pub const LOAD_FAILURE_MESSAGE: &str = "加载面试题数据失败，请检查data.json文件或网络连接。";

/// Errors that can occur while retrieving or parsing the dataset.
///
/// Every variant is terminal for the session: there is no retry.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    /// The dataset file could not be read.
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The request could not be sent or the body could not be received.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The document is not a valid dataset.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl LoadError {
    /// Returns the user-facing message for the load failure page.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILURE_MESSAGE
    }

    /// Returns true when the failure happened before any document was received.
    #[must_use]
    pub fn is_retrieval(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::Network(_) | Self::Status(_))
    }
}

pub type Result<T> = std::result::Result<T, LoadError>;
