//! Dataset loading and the process-wide store that holds it.

pub mod error;
pub mod source;
pub mod store;

pub use error::{LOAD_FAILURE_MESSAGE, LoadError, Result};
pub use source::DataSource;
pub use store::{DataStore, StoreState, parse_dataset};
