//! CLI argument definitions for `docver`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "docver",
    version,
    about = "Render and mount the documentation version switcher",
    long_about = "Render the version/branch switcher shown in the sidebar of \
                  Read the Docs themed documentation.\n\n\
                  The release string has the form `<version>` or \
                  `<version> - <branch>`; the branch defaults to `master`."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Render the widget for a release string.
    Render(RenderArgs),

    /// Mount the widget into the sidebar of generated HTML pages.
    Inject(InjectArgs),

    /// List remote branches (default branch first) and optionally store them.
    Branches(BranchesArgs),
}

#[derive(Parser)]
pub struct RenderArgs {
    /// Release string, e.g. "1.2.0" or "1.2.0 - feature/lxd-nodes".
    #[arg(long = "release", value_name = "RELEASE", allow_hyphen_values = true)]
    pub release: String,

    /// Switcher config file (default: ./docver.toml when present).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "html")]
    pub format: RenderFormatArg,

    /// Write to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct InjectArgs {
    /// Release string, e.g. "1.2.0" or "1.2.0 - feature/lxd-nodes".
    #[arg(long = "release", value_name = "RELEASE", allow_hyphen_values = true)]
    pub release: String,

    /// Switcher config file (default: ./docver.toml when present).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// HTML pages to modify in place.
    #[arg(value_name = "PAGE", required = true)]
    pub pages: Vec<PathBuf>,
}

#[derive(Parser)]
pub struct BranchesArgs {
    /// Git repository to inspect.
    #[arg(long = "repo", value_name = "DIR", default_value = ".")]
    pub repo: PathBuf,

    /// Remote whose branches are listed.
    #[arg(long = "remote", default_value = "origin")]
    pub remote: String,

    /// Store the branch list and default branch in this config file.
    #[arg(long = "write", value_name = "PATH")]
    pub write: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RenderFormatArg {
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
