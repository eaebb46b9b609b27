//! Markup presentation of a [`Page`].
//!
//! Text fields from the dataset are inserted as-is. The dataset is a trusted
//! local file, so no escaping is done.

use crate::page::{AnswerDetail, BackControl, Body, Link, Page};

const INDENT: &str = "    ";

/// Label of the back control.
pub const BACK_LABEL: &str = "返回";

/// The three document regions a page touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup {
    pub title: String,
    pub back_hidden: bool,
    /// Href of the back control, when it is shown.
    pub back_href: Option<String>,
    /// Contents of the main content area.
    pub main: String,
}

impl Markup {
    pub fn from_page(page: &Page) -> Self {
        let back_href = match &page.back {
            BackControl::Hidden => None,
            BackControl::Shown { target } => Some(target.to_string()),
        };
        Self {
            title: page.title.clone(),
            back_hidden: back_href.is_none(),
            back_href,
            main: main_markup(&page.body),
        }
    }

    /// A standalone document with the title area, the back control and the
    /// main content area.
    pub fn to_document(&self) -> String {
        let back = match &self.back_href {
            Some(href) => format!(r#"<a id="back-button" href="{href}">{BACK_LABEL}</a>"#),
            None => format!(r#"<a id="back-button" class="hidden">{BACK_LABEL}</a>"#),
        };
        [
            "<!DOCTYPE html>".to_string(),
            r#"<html lang="zh-CN">"#.to_string(),
            "<head>".to_string(),
            r#"<meta charset="utf-8">"#.to_string(),
            format!("<title>{}</title>", self.title),
            "</head>".to_string(),
            "<body>".to_string(),
            "<header>".to_string(),
            back,
            format!(r#"<h1 id="page-title">{}</h1>"#, self.title),
            "</header>".to_string(),
            r#"<main id="main-view">"#.to_string(),
            self.main.clone(),
            "</main>".to_string(),
            "</body>".to_string(),
            "</html>".to_string(),
        ]
        .join("\n")
    }
}

/// Markup for the main content area only.
pub fn main_markup(body: &Body) -> String {
    match body {
        Body::SubjectList { items } => list("subject-list", items, subject_item),
        Body::QuestionList { items } => list("question-list", items, question_item),
        Body::Answer(detail) => answer(detail),
        Body::NotFound { message } => format!("<p>{message}</p>"),
        Body::LoadFailed { message } => format!(r#"<p style="color: red;">{message}</p>"#),
    }
}

fn list(class: &str, items: &[Link], item: fn(&Link) -> String) -> String {
    let mut lines = Vec::with_capacity(items.len() + 2);
    lines.push(format!(r#"<ul class="{class}">"#));
    lines.extend(items.iter().map(|link| format!("{INDENT}{}", item(link))));
    lines.push("</ul>".to_string());
    lines.join("\n")
}

fn subject_item(link: &Link) -> String {
    format!(
        r#"<li class="subject-list-item"><button data-subject-id="{}">{}</button></li>"#,
        link.id, link.label
    )
}

fn question_item(link: &Link) -> String {
    format!(
        r#"<li class="question-list-item"><a href="{}"><h3>{}</h3></a></li>"#,
        link.target, link.label
    )
}

fn answer(detail: &AnswerDetail) -> String {
    [
        r#"<div class="answer-view">"#.to_string(),
        format!(r#"{INDENT}<h2 class="subject-name">{}</h2>"#, detail.subject_name),
        format!(r#"{INDENT}<h3 class="question-text">{}</h3>"#, detail.question),
        format!(r#"{INDENT}<div class="answer-text">"#),
        format!("{INDENT}{INDENT}<p>{}</p>", detail.answer_lines.join("<br>")),
        format!("{INDENT}</div>"),
        "</div>".to_string(),
    ]
    .join("\n")
}
