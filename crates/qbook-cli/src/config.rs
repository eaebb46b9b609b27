//! Settings shared by the viewer commands.

use qbook_store::DataSource;
use qbook_view::Fragment;

/// How pages are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text with tables for lists.
    #[default]
    Text,
    /// A standalone markup document.
    Html,
    /// The page description as JSON.
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewerConfig {
    pub source: DataSource,
    /// Fragment dispatched right after loading.
    pub initial: Fragment,
    pub format: OutputFormat,
    /// Whether terminal styling (colors, bold) may be used.
    pub styled: bool,
}

impl ViewerConfig {
    pub fn new(source: DataSource) -> Self {
        Self {
            source,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_initial(mut self, fragment: Fragment) -> Self {
        self.initial = fragment;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_styling(mut self, enable: bool) -> Self {
        self.styled = enable;
        self
    }
}
