//! Fragment dispatch.
//!
//! A [`Router`] borrows a loaded dataset, so it cannot run before loading has
//! finished. Invalid fragments are never shown as errors; they produce a
//! redirect to the subject list instead.

use qbook_model::Dataset;
use tracing::{debug, warn};

use crate::page::Page;
use crate::render::render_route;
use crate::route::{Fragment, Route};

/// Result of dispatching one fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Render { route: Route, page: Page },
    /// The fragment was not a valid route; the location should become `to`.
    Redirect { to: Route },
}

#[derive(Debug, Clone, Copy)]
pub struct Router<'a> {
    dataset: &'a Dataset,
}

impl<'a> Router<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    pub fn dispatch(&self, fragment: &Fragment) -> Dispatch {
        match Route::parse(fragment) {
            Ok(route) => {
                let page = self.render(&route);
                debug!(fragment = %fragment, ?route, not_found = page.is_error(), "dispatch");
                Dispatch::Render { route, page }
            }
            Err(error) => {
                warn!(%error, "redirecting to home");
                Dispatch::Redirect { to: Route::Home }
            }
        }
    }

    pub fn render(&self, route: &Route) -> Page {
        render_route(self.dataset, route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qbook_model::Subject;

    #[test]
    fn invalid_fragment_redirects_home() {
        let dataset = Dataset::new(vec![Subject::new("os", "OS", vec![])]);
        let router = Router::new(&dataset);
        assert_eq!(
            router.dispatch(&Fragment::new("#nope")),
            Dispatch::Redirect { to: Route::Home }
        );
    }

    #[test]
    fn valid_fragment_renders() {
        let dataset = Dataset::new(vec![Subject::new("os", "OS", vec![])]);
        let router = Router::new(&dataset);
        match router.dispatch(&Fragment::new("#subject/os")) {
            Dispatch::Render { route, page } => {
                assert_eq!(route, Route::subject("os"));
                assert_eq!(page.title, "OS 面试题");
            }
            other => panic!("expected render, got {other:?}"),
        }
    }
}
