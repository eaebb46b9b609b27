//! Tests for the dataset document shape.

use qbook_model::Dataset;

const DOCUMENT: &str = r#"{
    "subjects": [
        {
            "id": "os",
            "name": "Operating Systems",
            "questions": [
                { "id": "os-q1", "question": "What is a process?", "answer": "A process is...\nIt has state." }
            ]
        },
        {
            "id": "net",
            "name": "Networking",
            "questions": []
        }
    ]
}"#;

#[test]
fn parses_document_in_order() {
    let dataset: Dataset = serde_json::from_str(DOCUMENT).expect("parse dataset");
    let ids: Vec<&str> = dataset.subjects.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["os", "net"]);

    let question = dataset.find_question("os", "os-q1").expect("question");
    assert_eq!(question.answer_lines(), vec!["A process is...", "It has state."]);
}

#[test]
fn ignores_unknown_fields() {
    let json = r#"{
        "version": 2,
        "subjects": [
            { "id": "a", "name": "A", "color": "red", "questions": [
                { "id": "q", "question": "?", "answer": "!", "tags": ["x"] }
            ] }
        ]
    }"#;
    let dataset: Dataset = serde_json::from_str(json).expect("parse dataset");
    assert_eq!(dataset.question_count(), 1);
}

#[test]
fn rejects_missing_required_fields() {
    let missing_answer = r#"{ "subjects": [ { "id": "a", "name": "A", "questions": [
        { "id": "q", "question": "?" }
    ] } ] }"#;
    assert!(serde_json::from_str::<Dataset>(missing_answer).is_err());
    assert!(serde_json::from_str::<Dataset>("{}").is_err());
}

#[test]
fn duplicate_ids_resolve_to_first() {
    let json = r#"{ "subjects": [
        { "id": "dup", "name": "First", "questions": [] },
        { "id": "dup", "name": "Second", "questions": [] }
    ] }"#;
    let dataset: Dataset = serde_json::from_str(json).expect("parse dataset");
    assert_eq!(dataset.find_subject("dup").map(|s| s.name.as_str()), Some("First"));
}
