//! Startup sequence and the interactive navigation loop.
//!
//! Loading happens first and blocks; the first dispatch runs only after the
//! dataset is in the store. A load failure is terminal: the failure page is
//! shown and no navigation input is ever read.

use std::io::{self, BufRead, Write};

use qbook_store::{DataStore, LoadError};
use qbook_view::render::render_load_failure;
use qbook_view::{Fragment, NavEvent, Navigator};
use tracing::{error, warn};

use crate::config::{OutputFormat, ViewerConfig};
use crate::present::Presenter;

/// Load the dataset and perform the first dispatch.
///
/// # Errors
///
/// Returns the [`LoadError`] when the dataset cannot be loaded.
pub fn bootstrap<'a>(
    store: &'a DataStore,
    config: &ViewerConfig,
) -> Result<Navigator<'a>, LoadError> {
    let dataset = store.load(&config.source).inspect_err(|e| {
        error!(
            source = %config.source,
            retrieval = e.is_retrieval(),
            error = %e,
            "failed to load dataset"
        );
    })?;
    Ok(Navigator::start(dataset, config.initial.clone()))
}

/// Show the terminal load-failure page.
pub fn present_load_failure<W: Write>(
    presenter: &Presenter,
    out: &mut W,
    error: &LoadError,
) -> io::Result<()> {
    presenter.write_page(out, &render_load_failure(error.user_message()))
}

/// One line of user input in the navigation loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Event(NavEvent),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub const HELP: &str = "<n> open item n | b back | #<fragment> or go <fragment> | h home | r reload | q quit";

pub fn parse_input(line: &str) -> Input {
    let line = line.trim();
    match line {
        "" => return Input::Empty,
        "q" | "quit" | "exit" => return Input::Quit,
        "?" | "help" => return Input::Help,
        "b" | "back" => return Input::Event(NavEvent::Back),
        "h" | "home" => return Input::Event(NavEvent::Navigate(Fragment::home())),
        "r" | "reload" => return Input::Event(NavEvent::Refresh),
        _ => {}
    }
    if line.starts_with('#') {
        return Input::Event(NavEvent::Navigate(Fragment::new(line)));
    }
    if let Some(target) = line.strip_prefix("go ") {
        return Input::Event(NavEvent::Navigate(Fragment::new(target.trim())));
    }
    match line.parse::<usize>() {
        Ok(n) if n > 0 => Input::Event(NavEvent::Activate(n - 1)),
        _ => Input::Unknown(line.to_string()),
    }
}

/// Read navigation input until end of input or `q`, re-presenting the page
/// after every accepted event.
///
/// Prompts and hints are written only in text mode; in markup and JSON modes
/// `out` receives nothing but pages, and rejected input is logged instead.
///
/// # Errors
///
/// Returns an error when reading input or writing output fails.
pub fn browse<R: BufRead, W: Write>(
    navigator: &mut Navigator<'_>,
    presenter: &Presenter,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    let interactive = presenter.format() == OutputFormat::Text;
    presenter.write_page(out, navigator.page())?;
    prompt(out, interactive)?;

    for line in input.lines() {
        let line = line?;
        match parse_input(&line) {
            Input::Quit => break,
            Input::Empty => {}
            Input::Help => hint(out, interactive, HELP)?,
            Input::Unknown(text) => {
                warn!(input = %text, "unrecognized navigation input");
                hint(out, interactive, &format!("? {text}  ({HELP})"))?;
            }
            Input::Event(event) => {
                if navigator.apply(event) {
                    presenter.write_page(out, navigator.page())?;
                } else {
                    warn!(location = %navigator.location(), "navigation event rejected");
                    hint(out, interactive, "nothing to open there")?;
                }
            }
        }
        prompt(out, interactive)?;
    }
    Ok(())
}

/// Text-mode feedback. Other formats keep stdout to pages only.
fn hint<W: Write>(out: &mut W, interactive: bool, text: &str) -> io::Result<()> {
    if interactive {
        writeln!(out, "{text}")?;
    }
    Ok(())
}

fn prompt<W: Write>(out: &mut W, interactive: bool) -> io::Result<()> {
    if interactive {
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}
