use std::io;

use anyhow::{Context, Result};
use tracing::info;

use qbook_cli::config::{OutputFormat, ViewerConfig};
use qbook_cli::present::Presenter;
use qbook_cli::session::{bootstrap, browse, present_load_failure};
use qbook_store::{DataSource, DataStore};
use qbook_view::Fragment;

use crate::cli::{DataArgs, OutputFormatArg, ViewArgs};

/// Exit status of a command that ran to completion.
pub type ExitCode = i32;

pub fn run_show(args: &ViewArgs, styled: bool) -> Result<ExitCode> {
    let config = view_config(args, styled);
    let presenter = Presenter::new(config.format, config.styled);
    let store = DataStore::new();
    let mut out = io::stdout().lock();

    match bootstrap(&store, &config) {
        Ok(navigator) => {
            presenter
                .write_page(&mut out, navigator.page())
                .context("write page")?;
            Ok(0)
        }
        Err(error) => {
            present_load_failure(&presenter, &mut out, &error).context("write page")?;
            Ok(1)
        }
    }
}

pub fn run_browse(args: &ViewArgs, styled: bool) -> Result<ExitCode> {
    let config = view_config(args, styled);
    let presenter = Presenter::new(config.format, config.styled);
    let store = DataStore::new();
    let mut out = io::stdout().lock();

    let mut navigator = match bootstrap(&store, &config) {
        Ok(navigator) => navigator,
        Err(error) => {
            present_load_failure(&presenter, &mut out, &error).context("write page")?;
            return Ok(1);
        }
    };
    info!(location = %navigator.location(), "listening for navigation");
    browse(&mut navigator, &presenter, io::stdin().lock(), &mut out)
        .context("navigation loop")?;
    Ok(0)
}

pub fn run_subjects(args: &DataArgs, styled: bool) -> Result<ExitCode> {
    let source = DataSource::parse(&args.data);
    let store = DataStore::new();
    let dataset = store
        .load(&source)
        .with_context(|| format!("load dataset from {source}"))?;
    let presenter = Presenter::new(OutputFormat::Text, styled);
    println!("{}", presenter.subjects_table(dataset));
    println!(
        "{} subjects, {} questions",
        dataset.subject_count(),
        dataset.question_count()
    );
    Ok(0)
}

fn view_config(args: &ViewArgs, styled: bool) -> ViewerConfig {
    ViewerConfig::new(DataSource::parse(&args.data.data))
        .with_initial(Fragment::new(&args.fragment))
        .with_format(match args.format {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Html => OutputFormat::Html,
            OutputFormatArg::Json => OutputFormat::Json,
        })
        .with_styling(styled)
}
