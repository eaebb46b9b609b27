//! CLI argument definitions for the question bank viewer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "qbook",
    version,
    about = "Browse a subject/question/answer dataset",
    long_about = "Browse a static question bank organized as subjects, questions and answers.\n\n\
                  Pages are addressed by fragments: empty for the subject list,\n\
                  subject/<id> for a subject's questions, subject/<id>/<id> for an answer."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the page for one fragment and exit.
    Show(ViewArgs),

    /// Navigate interactively, reading commands from stdin.
    Browse(ViewArgs),

    /// List subjects with their question counts.
    Subjects(DataArgs),
}

#[derive(Args)]
pub struct DataArgs {
    /// Dataset location: a JSON file path or an http(s) URL.
    #[arg(long = "data", value_name = "SOURCE", default_value = "data.json")]
    pub data: String,
}

#[derive(Args)]
pub struct ViewArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Fragment to open first, e.g. "subject/os" or "#subject/os/os-q1".
    #[arg(value_name = "FRAGMENT", default_value = "")]
    pub fragment: String,

    /// Output format for pages.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Text,
    Html,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
