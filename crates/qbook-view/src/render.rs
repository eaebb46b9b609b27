//! The three views plus the load-failure page.
//!
//! Every function here is pure: same dataset and ids in, same [`Page`] out.
//! Navigation is expressed as target fragments on links and on the back
//! control, never as a call into another renderer.

use qbook_model::{Dataset, NotFound};

use crate::page::{AnswerDetail, BackControl, Body, Link, Page};
use crate::route::{Fragment, Route};

/// Title of the subject list, also the default document title.
pub const HOME_TITLE: &str = "面试题宝典";

/// Title shown on not-found pages.
pub const ERROR_TITLE: &str = "错误";

pub fn subject_title(subject_name: &str) -> String {
    format!("{subject_name} 面试题")
}

pub fn detail_title(subject_name: &str) -> String {
    format!("{subject_name} - 题目详情")
}

pub fn not_found_message(missing: &NotFound) -> String {
    let label = match missing {
        NotFound::Subject(_) => "找不到学科",
        NotFound::Question(_) => "找不到题目",
    };
    format!("{label}：{}", missing.id())
}

/// The subject list. The back control is hidden.
pub fn render_home(dataset: &Dataset) -> Page {
    let items = dataset
        .subjects
        .iter()
        .map(|subject| Link {
            id: subject.id.clone(),
            label: subject.name.clone(),
            target: Route::subject(subject.id.as_str()).fragment(),
        })
        .collect();

    Page {
        title: HOME_TITLE.to_string(),
        back: BackControl::Hidden,
        body: Body::SubjectList { items },
    }
}

/// The questions of one subject. Back leads to the subject list.
pub fn render_subject_questions(dataset: &Dataset, subject_id: &str) -> Page {
    let subject = match dataset.resolve_subject(subject_id) {
        Ok(subject) => subject,
        Err(missing) => return render_not_found(&missing),
    };

    let items = subject
        .questions
        .iter()
        .map(|question| Link {
            id: question.id.clone(),
            label: question.question.clone(),
            target: Route::question(subject.id.as_str(), question.id.as_str()).fragment(),
        })
        .collect();

    Page {
        title: subject_title(&subject.name),
        back: BackControl::Shown {
            target: Fragment::home(),
        },
        body: Body::QuestionList { items },
    }
}

/// One question with its answer. Back leads to the subject's question list.
pub fn render_question_answer(dataset: &Dataset, subject_id: &str, question_id: &str) -> Page {
    let (subject, question) = match dataset.resolve_question(subject_id, question_id) {
        Ok(found) => found,
        Err(missing) => return render_not_found(&missing),
    };

    Page {
        title: detail_title(&subject.name),
        back: BackControl::Shown {
            target: Route::subject(subject.id.as_str()).fragment(),
        },
        body: Body::Answer(AnswerDetail {
            subject_name: subject.name.clone(),
            question: question.question.clone(),
            answer_lines: question
                .answer_lines()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }),
    }
}

/// Inline error for an unknown subject or question.
///
/// The back control stays visible and leads to the subject list.
pub fn render_not_found(missing: &NotFound) -> Page {
    Page {
        title: ERROR_TITLE.to_string(),
        back: BackControl::Shown {
            target: Fragment::home(),
        },
        body: Body::NotFound {
            message: not_found_message(missing),
        },
    }
}

/// Terminal page shown when the dataset could not be loaded.
pub fn render_load_failure(message: &str) -> Page {
    Page {
        title: HOME_TITLE.to_string(),
        back: BackControl::Hidden,
        body: Body::LoadFailed {
            message: message.to_string(),
        },
    }
}

/// Render the page for an already-parsed route.
pub fn render_route(dataset: &Dataset, route: &Route) -> Page {
    match route {
        Route::Home => render_home(dataset),
        Route::SubjectQuestions { subject_id } => render_subject_questions(dataset, subject_id),
        Route::QuestionAnswer {
            subject_id,
            question_id,
        } => render_question_answer(dataset, subject_id, question_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qbook_model::{Question, Subject};

    fn dataset() -> Dataset {
        Dataset::new(vec![Subject::new(
            "os",
            "Operating Systems",
            vec![Question::new(
                "os-q1",
                "What is a process?",
                "A process is...\nIt has state.",
            )],
        )])
    }

    #[test]
    fn home_lists_subjects_and_hides_back() {
        let page = render_home(&dataset());
        assert_eq!(page.title, HOME_TITLE);
        assert_eq!(page.back, BackControl::Hidden);
        assert_eq!(page.items().len(), 1);
        assert_eq!(page.items()[0].label, "Operating Systems");
        assert_eq!(page.items()[0].target, Fragment::new("subject/os"));
    }

    #[test]
    fn subject_page_links_questions() {
        let page = render_subject_questions(&dataset(), "os");
        assert_eq!(page.title, "Operating Systems 面试题");
        assert_eq!(page.back_target(), Some(&Fragment::home()));
        assert_eq!(page.items()[0].target, Fragment::new("subject/os/os-q1"));
    }

    #[test]
    fn unknown_subject_is_not_found() {
        let page = render_subject_questions(&dataset(), "db");
        assert_eq!(page.title, ERROR_TITLE);
        assert!(page.back_target().is_some());
        assert_eq!(
            page.body,
            Body::NotFound {
                message: "找不到学科：db".to_string()
            }
        );
    }

    #[test]
    fn answer_page_splits_lines() {
        let page = render_question_answer(&dataset(), "os", "os-q1");
        assert_eq!(page.title, "Operating Systems - 题目详情");
        assert_eq!(page.back_target(), Some(&Fragment::new("subject/os")));
        let Body::Answer(detail) = &page.body else {
            panic!("expected answer body, got {:?}", page.body);
        };
        assert_eq!(detail.answer_lines, vec!["A process is...", "It has state."]);
    }

    #[test]
    fn unknown_question_is_not_found() {
        let page = render_question_answer(&dataset(), "os", "os-q9");
        assert_eq!(
            page.body,
            Body::NotFound {
                message: "找不到题目：os-q9".to_string()
            }
        );
        let page = render_question_answer(&dataset(), "db", "os-q1");
        assert_eq!(
            page.body,
            Body::NotFound {
                message: "找不到学科：db".to_string()
            }
        );
    }
}
