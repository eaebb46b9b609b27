use serde::{Deserialize, Serialize};

use crate::error::NotFound;

/// The full question bank: an ordered list of subjects.
///
/// A `Dataset` is built once from the JSON document and never mutated
/// afterwards; every accessor borrows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub subjects: Vec<Subject>,
}

/// A named category grouping an ordered set of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Opaque identifier, embedded verbatim in navigation fragments.
    pub id: String,
    /// Display label.
    pub name: String,
    pub questions: Vec<Question>,
}

/// A prompt/answer pair belonging to exactly one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    /// Prompt text.
    pub question: String,
    /// Answer text. Embedded `\n` markers render as line breaks.
    pub answer: String,
}

impl Dataset {
    pub fn new(subjects: Vec<Subject>) -> Self {
        Self { subjects }
    }

    /// Find a subject by exact id match. The first match wins when ids repeat.
    pub fn find_subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|subject| subject.id == id)
    }

    /// Find a question by subject id and question id.
    pub fn find_question(&self, subject_id: &str, question_id: &str) -> Option<&Question> {
        self.find_subject(subject_id)?.find_question(question_id)
    }

    /// Like [`Dataset::find_subject`], but reports which id was missing.
    pub fn resolve_subject(&self, id: &str) -> Result<&Subject, NotFound> {
        self.find_subject(id)
            .ok_or_else(|| NotFound::Subject(id.to_string()))
    }

    /// Resolve the subject first, then the question inside it.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound::Subject`] when the subject is absent, otherwise
    /// [`NotFound::Question`] when the question is absent from that subject.
    pub fn resolve_question(
        &self,
        subject_id: &str,
        question_id: &str,
    ) -> Result<(&Subject, &Question), NotFound> {
        let subject = self.resolve_subject(subject_id)?;
        let question = subject
            .find_question(question_id)
            .ok_or_else(|| NotFound::Question(question_id.to_string()))?;
        Ok((subject, question))
    }

    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    /// Total number of questions across all subjects.
    pub fn question_count(&self) -> usize {
        self.subjects.iter().map(Subject::question_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

impl Subject {
    pub fn new(id: impl Into<String>, name: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            questions,
        }
    }

    pub fn find_question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

impl Question {
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Split the answer at its newline markers.
    ///
    /// A `\r\n` pair counts as a single marker. An empty answer yields one
    /// empty line so that renderers always have something to show.
    pub fn answer_lines(&self) -> Vec<&str> {
        self.answer
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::new(vec![
            Subject::new(
                "os",
                "Operating Systems",
                vec![
                    Question::new("os-q1", "What is a process?", "A process is...\nIt has state."),
                    Question::new("os-q2", "What is a thread?", "A unit of scheduling."),
                ],
            ),
            Subject::new("net", "Networking", vec![]),
        ])
    }

    #[test]
    fn find_subject_by_exact_id() {
        let dataset = sample();
        assert_eq!(dataset.find_subject("net").map(|s| s.name.as_str()), Some("Networking"));
        assert!(dataset.find_subject("NET").is_none());
        assert!(dataset.find_subject("").is_none());
    }

    #[test]
    fn find_question_requires_matching_subject() {
        let dataset = sample();
        assert!(dataset.find_question("os", "os-q2").is_some());
        assert!(dataset.find_question("net", "os-q2").is_none());
    }

    #[test]
    fn resolve_question_reports_missing_level() {
        let dataset = sample();
        assert_eq!(
            dataset.resolve_question("db", "os-q1"),
            Err(NotFound::Subject("db".to_string()))
        );
        assert_eq!(
            dataset.resolve_question("os", "os-q9"),
            Err(NotFound::Question("os-q9".to_string()))
        );
        let (subject, question) = dataset.resolve_question("os", "os-q1").unwrap();
        assert_eq!(subject.id, "os");
        assert_eq!(question.question, "What is a process?");
    }

    #[test]
    fn counts() {
        let dataset = sample();
        assert_eq!(dataset.subject_count(), 2);
        assert_eq!(dataset.question_count(), 2);
        assert!(!dataset.is_empty());
        assert!(Dataset::default().is_empty());
    }

    #[test]
    fn answer_lines_split_on_markers() {
        let question = Question::new("q", "?", "one\r\ntwo\nthree");
        assert_eq!(question.answer_lines(), vec!["one", "two", "three"]);
        assert_eq!(Question::new("q", "?", "").answer_lines(), vec![""]);
    }
}
