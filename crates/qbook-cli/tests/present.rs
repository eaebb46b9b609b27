//! Tests for terminal, markup and JSON presentation.

use qbook_cli::config::OutputFormat;
use qbook_cli::present::Presenter;
use qbook_model::{Dataset, NotFound, Question, Subject};
use qbook_view::render::{render_home, render_not_found, render_question_answer};

fn dataset() -> Dataset {
    Dataset::new(vec![
        Subject::new(
            "os",
            "Operating Systems",
            vec![Question::new(
                "os-q1",
                "What is a process?",
                "A process is...\nIt has state.",
            )],
        ),
        Subject::new("net", "Networking", vec![]),
    ])
}

#[test]
fn answer_page_as_text() {
    let presenter = Presenter::new(OutputFormat::Text, false);
    let page = render_question_answer(&dataset(), "os", "os-q1");
    insta::assert_snapshot!(presenter.render(&page).unwrap(), @r"
Operating Systems - 题目详情

Operating Systems
What is a process?

A process is...
It has state.

[b] 返回 (#subject/os)
");
}

#[test]
fn not_found_page_as_text() {
    let presenter = Presenter::new(OutputFormat::Text, false);
    let page = render_not_found(&NotFound::Subject("db".to_string()));
    insta::assert_snapshot!(presenter.render(&page).unwrap(), @r"
错误

找不到学科：db

[b] 返回 (#)
");
}

#[test]
fn home_page_lists_numbered_subjects() {
    let presenter = Presenter::new(OutputFormat::Text, false);
    let text = presenter.render(&render_home(&dataset())).unwrap();
    assert!(text.starts_with("面试题宝典\n"));
    let os_row = text
        .lines()
        .find(|line| line.contains("Operating Systems"))
        .expect("row for os");
    assert!(os_row.contains('1'));
    let net_row = text
        .lines()
        .find(|line| line.contains("Networking"))
        .expect("row for net");
    assert!(net_row.contains('2'));
    assert!(!text.contains("[b]"));
    assert!(!text.contains('\u{1b}'), "unstyled output has no escapes");
}

#[test]
fn html_and_json_formats() {
    let page = render_question_answer(&dataset(), "os", "os-q1");

    let html = Presenter::new(OutputFormat::Html, false).render(&page).unwrap();
    assert!(html.contains("<p>A process is...<br>It has state.</p>"));
    assert!(html.contains(r##"href="#subject/os""##));

    let json = Presenter::new(OutputFormat::Json, false).render(&page).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["body"]["answer_lines"][1], "It has state.");
}

#[test]
fn subjects_table_counts_questions() {
    let presenter = Presenter::new(OutputFormat::Text, false);
    let table = presenter.subjects_table(&dataset()).to_string();
    let os_row = table.lines().find(|line| line.contains("os ")).expect("os row");
    assert!(os_row.contains("Operating Systems"));
    assert!(os_row.contains('1'));
    let net_row = table.lines().find(|line| line.contains("Networking")).expect("net row");
    assert!(net_row.contains('0'));
}
