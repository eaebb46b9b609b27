//! Writes pages to the terminal.
//!
//! Lists become tables; the answer view is plain text with one line per
//! answer line. `--format html` and `--format json` bypass the terminal
//! layout entirely.

use std::io::{self, Write};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use qbook_model::Dataset;
use qbook_view::markup::BACK_LABEL;
use qbook_view::{AnswerDetail, Body, Link, Markup, Page};

use crate::config::OutputFormat;

/// Applies pages to a writer in one output format.
#[derive(Debug, Clone, Copy)]
pub struct Presenter {
    format: OutputFormat,
    styled: bool,
}

impl Presenter {
    pub fn new(format: OutputFormat, styled: bool) -> Self {
        Self { format, styled }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Render `page` to a string in the configured format.
    ///
    /// # Errors
    ///
    /// Returns an error only if JSON serialization fails.
    pub fn render(&self, page: &Page) -> serde_json::Result<String> {
        match self.format {
            OutputFormat::Text => Ok(self.text(page)),
            OutputFormat::Html => Ok(Markup::from_page(page).to_document()),
            OutputFormat::Json => serde_json::to_string_pretty(page),
        }
    }

    pub fn write_page<W: Write>(&self, out: &mut W, page: &Page) -> io::Result<()> {
        let rendered = self.render(page).map_err(io::Error::other)?;
        writeln!(out, "{rendered}")?;
        out.flush()
    }

    fn text(&self, page: &Page) -> String {
        let mut lines = vec![page.title.clone(), String::new()];
        match &page.body {
            Body::SubjectList { items } => lines.push(self.list_table("学科", items).to_string()),
            Body::QuestionList { items } => lines.push(self.list_table("题目", items).to_string()),
            Body::Answer(detail) => lines.extend(answer_lines(detail)),
            Body::NotFound { message } | Body::LoadFailed { message } => {
                lines.push(message.clone());
            }
        }
        if let Some(target) = page.back_target() {
            lines.push(String::new());
            lines.push(format!("[b] {BACK_LABEL} ({target})"));
        }
        lines.join("\n")
    }

    fn list_table(&self, label: &str, items: &[Link]) -> Table {
        let mut table = Table::new();
        table.set_header(vec![self.header_cell("#"), self.header_cell(label)]);
        apply_table_style(&mut table);
        self.apply_styling(&mut table);
        for (index, link) in items.iter().enumerate() {
            table.add_row(vec![
                Cell::new(index + 1).set_alignment(CellAlignment::Right),
                Cell::new(&link.label),
            ]);
        }
        table
    }

    /// One row per subject with its question count.
    pub fn subjects_table(&self, dataset: &Dataset) -> Table {
        let mut table = Table::new();
        table.set_header(vec![
            self.header_cell("ID"),
            self.header_cell("学科"),
            self.header_cell("题目数"),
        ]);
        apply_table_style(&mut table);
        self.apply_styling(&mut table);
        for subject in &dataset.subjects {
            table.add_row(vec![
                Cell::new(&subject.id),
                Cell::new(&subject.name),
                Cell::new(subject.question_count()).set_alignment(CellAlignment::Right),
            ]);
        }
        table
    }

    fn header_cell(&self, label: &str) -> Cell {
        if self.styled {
            Cell::new(label)
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(label)
        }
    }

    fn apply_styling(&self, table: &mut Table) {
        if self.styled {
            table.enforce_styling();
        } else {
            table.force_no_tty();
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn answer_lines(detail: &AnswerDetail) -> Vec<String> {
    let mut lines = vec![detail.subject_name.clone(), detail.question.clone(), String::new()];
    lines.extend(detail.answer_lines.iter().cloned());
    lines
}
