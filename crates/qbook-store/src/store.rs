//! The process-wide dataset holder.
//!
//! The store starts `Unset` and becomes `Loaded` exactly once. After that the
//! dataset is read-only for the lifetime of the store, so callers can hold
//! plain `&Dataset` borrows without any locking.

use std::sync::OnceLock;

use qbook_model::Dataset;
use tracing::{debug, info, info_span, warn};

use crate::error::Result;
use crate::source::DataSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    Unset,
    Loaded,
}

#[derive(Debug, Default)]
pub struct DataStore {
    dataset: OnceLock<Dataset>,
}

impl DataStore {
    pub const fn new() -> Self {
        Self {
            dataset: OnceLock::new(),
        }
    }

    /// Build a store that is already loaded with `dataset`.
    pub fn with_dataset(dataset: Dataset) -> Self {
        let store = Self::new();
        let _ = store.dataset.set(dataset);
        store
    }

    /// Retrieve and parse the dataset from `source`.
    ///
    /// Returns the loaded dataset. Once loaded, later calls return the same
    /// dataset without touching any source. On failure the store stays unset.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`](crate::LoadError) when retrieval or parsing
    /// fails.
    pub fn load(&self, source: &DataSource) -> Result<&Dataset> {
        if let Some(dataset) = self.dataset.get() {
            debug!(source = %source, "dataset already loaded");
            return Ok(dataset);
        }

        let span = info_span!("load", source = %source, remote = source.is_remote());
        let _guard = span.enter();

        let bytes = source.fetch()?;
        let dataset = parse_dataset(&bytes)?;
        info!(
            subjects = dataset.subject_count(),
            questions = dataset.question_count(),
            "dataset loaded"
        );
        if dataset.is_empty() {
            warn!("dataset has no subjects");
        }
        Ok(self.dataset.get_or_init(|| dataset))
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.get()
    }

    pub fn state(&self) -> StoreState {
        if self.dataset.get().is_some() {
            StoreState::Loaded
        } else {
            StoreState::Unset
        }
    }
}

/// Parse a dataset document.
///
/// # Errors
///
/// Returns [`LoadError::Parse`](crate::LoadError::Parse) when the bytes are
/// not a dataset document.
pub fn parse_dataset(bytes: &[u8]) -> Result<Dataset> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use qbook_model::Subject;

    #[test]
    fn new_store_is_unset() {
        let store = DataStore::new();
        assert_eq!(store.state(), StoreState::Unset);
        assert!(store.dataset().is_none());
    }

    #[test]
    fn preloaded_store_ignores_source() {
        let store =
            DataStore::with_dataset(Dataset::new(vec![Subject::new("os", "OS", vec![])]));
        assert_eq!(store.state(), StoreState::Loaded);
        let dataset = store
            .load(&DataSource::parse("/no/such/file.json"))
            .expect("already loaded");
        assert_eq!(dataset.subject_count(), 1);
    }

    #[test]
    fn parse_failure_is_parse_error() {
        let error = parse_dataset(b"{\"subjects\": 3}").unwrap_err();
        assert!(matches!(error, LoadError::Parse(_)));
        assert!(!error.is_retrieval());
    }
}
