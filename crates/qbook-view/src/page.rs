//! View descriptions produced by the renderers.
//!
//! A [`Page`] says what the title area, the back control and the main content
//! area should show. Presenters apply it to an actual display.

use serde::Serialize;

use crate::route::Fragment;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub title: String,
    pub back: BackControl,
    pub body: Body,
}

/// State of the back-navigation control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum BackControl {
    Hidden,
    Shown { target: Fragment },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Body {
    SubjectList { items: Vec<Link> },
    QuestionList { items: Vec<Link> },
    Answer(AnswerDetail),
    NotFound { message: String },
    LoadFailed { message: String },
}

/// An activatable list entry. Activating it navigates to `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Id of the subject or question the entry stands for.
    pub id: String,
    pub label: String,
    pub target: Fragment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerDetail {
    pub subject_name: String,
    pub question: String,
    /// Answer text, already split at its newline markers.
    pub answer_lines: Vec<String>,
}

impl Page {
    /// Activatable entries of the main content area, in display order.
    pub fn items(&self) -> &[Link] {
        match &self.body {
            Body::SubjectList { items } | Body::QuestionList { items } => items,
            Body::Answer(_) | Body::NotFound { .. } | Body::LoadFailed { .. } => &[],
        }
    }

    /// Where the back control leads, or `None` when it is hidden.
    pub fn back_target(&self) -> Option<&Fragment> {
        match &self.back {
            BackControl::Hidden => None,
            BackControl::Shown { target } => Some(target),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.body, Body::NotFound { .. } | Body::LoadFailed { .. })
    }
}
