//! Navigation fragments and the routes they name.
//!
//! Three fragment shapes are meaningful:
//! - `` (or a bare `#`): the subject list
//! - `subject/<sid>`: the questions of one subject
//! - `subject/<sid>/<qid>`: one question with its answer
//!
//! Everything else is an invalid route.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

const SUBJECT_PREFIX: &str = "subject/";

/// The portion of a location after `#`, stored without the marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Fragment(String);

impl Fragment {
    /// Build a fragment, dropping one leading `#` if present.
    pub fn new(raw: impl AsRef<str>) -> Self {
        let raw = raw.as_ref();
        Self(raw.strip_prefix('#').unwrap_or(raw).to_string())
    }

    /// The empty fragment, which names the subject list.
    pub fn home() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_home(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<&str> for Fragment {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("unrecognized fragment: {0}")]
    Unrecognized(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    SubjectQuestions {
        subject_id: String,
    },
    QuestionAnswer {
        subject_id: String,
        question_id: String,
    },
}

impl Route {
    pub fn subject(subject_id: impl Into<String>) -> Self {
        Self::SubjectQuestions {
            subject_id: subject_id.into(),
        }
    }

    pub fn question(subject_id: impl Into<String>, question_id: impl Into<String>) -> Self {
        Self::QuestionAnswer {
            subject_id: subject_id.into(),
            question_id: question_id.into(),
        }
    }

    /// Parse a fragment into a route.
    ///
    /// A trailing empty question segment (`subject/<sid>/`) still names the
    /// subject's question list.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Unrecognized`] for any shape other than the three
    /// listed in the module docs, including an empty subject id and extra
    /// path segments.
    pub fn parse(fragment: &Fragment) -> Result<Self, RouteError> {
        let raw = fragment.as_str();
        if raw.is_empty() {
            return Ok(Self::Home);
        }
        let unrecognized = || RouteError::Unrecognized(raw.to_string());

        let rest = raw.strip_prefix(SUBJECT_PREFIX).ok_or_else(unrecognized)?;
        let mut segments = rest.split('/');
        let subject_id = segments.next().unwrap_or_default();
        let question_id = segments.next();
        if segments.next().is_some() || subject_id.is_empty() {
            return Err(unrecognized());
        }

        match question_id {
            None | Some("") => Ok(Self::subject(subject_id)),
            Some(question_id) => Ok(Self::question(subject_id, question_id)),
        }
    }

    /// The canonical fragment for this route.
    pub fn fragment(&self) -> Fragment {
        match self {
            Self::Home => Fragment::home(),
            Self::SubjectQuestions { subject_id } => {
                Fragment(format!("{SUBJECT_PREFIX}{subject_id}"))
            }
            Self::QuestionAnswer {
                subject_id,
                question_id,
            } => Fragment(format!("{SUBJECT_PREFIX}{subject_id}/{question_id}")),
        }
    }
}
