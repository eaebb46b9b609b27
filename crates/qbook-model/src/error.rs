use thiserror::Error;

/// A lookup that found no matching entity.
///
/// Not-found is an ordinary outcome: renderers turn it into an inline error
/// page and navigation carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFound {
    #[error("subject not found: {0}")]
    Subject(String),
    #[error("question not found: {0}")]
    Question(String),
}

impl NotFound {
    /// The id that failed to resolve.
    pub fn id(&self) -> &str {
        match self {
            Self::Subject(id) | Self::Question(id) => id,
        }
    }
}
