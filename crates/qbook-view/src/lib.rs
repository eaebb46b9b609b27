//! Routing, rendering and navigation for the question bank viewer.
//!
//! Renderers are pure functions from the dataset to a [`Page`]; the
//! [`Navigator`] owns the current location and re-dispatches it on every
//! navigation event. Presenters (see [`markup`]) turn pages into output.

pub mod markup;
pub mod navigator;
pub mod page;
pub mod render;
pub mod route;
pub mod router;

pub use markup::Markup;
pub use navigator::{NavEvent, Navigator};
pub use page::{AnswerDetail, BackControl, Body, Link, Page};
pub use route::{Fragment, Route, RouteError};
pub use router::{Dispatch, Router};
