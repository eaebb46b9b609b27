//! The current location and the page rendered for it.
//!
//! The location is the single source of truth for what is on screen: every
//! navigation event changes the location and then dispatches it. Only the
//! latest location matters; there is no history and no queue.

use qbook_model::Dataset;
use tracing::debug;

use crate::page::Page;
use crate::route::Fragment;
use crate::router::{Dispatch, Router};

/// A navigation event delivered by the hosting surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// Set the location to the given fragment.
    Navigate(Fragment),
    /// Activate the item at this 0-based index of the current page.
    Activate(usize),
    /// Activate the back control.
    Back,
    /// Dispatch the current location again.
    Refresh,
}

#[derive(Debug, Clone)]
pub struct Navigator<'a> {
    router: Router<'a>,
    location: Fragment,
    page: Page,
}

impl<'a> Navigator<'a> {
    /// Perform the first dispatch at `initial`.
    pub fn start(dataset: &'a Dataset, initial: Fragment) -> Self {
        let router = Router::new(dataset);
        let (location, page) = settle(&router, initial);
        Self {
            router,
            location,
            page,
        }
    }

    pub fn location(&self) -> &Fragment {
        &self.location
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Set the location and dispatch it.
    pub fn navigate(&mut self, fragment: Fragment) -> &Page {
        let (location, page) = settle(&self.router, fragment);
        self.location = location;
        self.page = page;
        &self.page
    }

    /// Follow the `index`-th (0-based) item of the current page.
    ///
    /// Returns `None` and leaves the location untouched when there is no such
    /// item.
    pub fn activate(&mut self, index: usize) -> Option<&Page> {
        let target = self.page.items().get(index)?.target.clone();
        Some(self.navigate(target))
    }

    /// Follow the back control. Returns `None` when it is hidden.
    pub fn back(&mut self) -> Option<&Page> {
        let target = self.page.back_target()?.clone();
        Some(self.navigate(target))
    }

    pub fn refresh(&mut self) -> &Page {
        let location = self.location.clone();
        self.navigate(location)
    }

    /// Apply one event. Returns true when the event was accepted.
    pub fn apply(&mut self, event: NavEvent) -> bool {
        match event {
            NavEvent::Navigate(fragment) => {
                self.navigate(fragment);
                true
            }
            NavEvent::Activate(index) => self.activate(index).is_some(),
            NavEvent::Back => self.back().is_some(),
            NavEvent::Refresh => {
                self.refresh();
                true
            }
        }
    }
}

/// Dispatch `fragment`, following a redirect if the router asks for one.
fn settle(router: &Router<'_>, fragment: Fragment) -> (Fragment, Page) {
    match router.dispatch(&fragment) {
        Dispatch::Render { page, .. } => (fragment, page),
        Dispatch::Redirect { to } => {
            let location = to.fragment();
            debug!(from = %fragment, to = %location, "location replaced");
            (location, router.render(&to))
        }
    }
}
