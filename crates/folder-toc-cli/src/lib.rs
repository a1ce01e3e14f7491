use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use folder_toc_config::{Config, LoadOptions};
use folder_toc_core::{
    render_report, update_toc, ExitCode, ReportFormat, TocError, TocMode, UpdateRequest,
};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "update-folder-toc",
    version,
    about = "Regenerate the sub-folder table of contents in a README",
    long_about = None
)]
pub struct Cli {
    /// Root directory whose README.md is updated (defaults to $ROOT_DIR)
    #[arg(long, value_name = "PATH")]
    root: Option<PathBuf>,

    /// Exit non-zero if the TOC is stale instead of rewriting it
    #[arg(long, conflicts_with = "diff")]
    check: bool,

    /// Print a unified diff of the pending change without writing
    #[arg(long)]
    diff: bool,

    /// Output format for the run report
    #[arg(long, value_enum, default_value_t = FormatValue::Plain)]
    format: FormatValue,

    /// Suppress the run report and informational logging
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatValue {
    Plain,
    Json,
}

/// Entry point for CLI execution. Returns the desired exit code.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_tracing(&cli);
    execute(cli)
}

fn execute(cli: Cli) -> Result<i32> {
    let mut load = LoadOptions::default();
    if let Some(root) = cli.root.clone() {
        load = load.with_root(root);
    }
    let config = Config::load(load).map_err(TocError::from)?;
    debug!(root = %config.root.display(), source = %config.source, "resolved root");

    let mode = if cli.check {
        TocMode::Check
    } else if cli.diff {
        TocMode::Diff
    } else {
        TocMode::Update
    };

    let outcome = update_toc(&UpdateRequest::from_config(&config, mode))?;

    if !cli.quiet {
        let format = match cli.format {
            FormatValue::Plain => ReportFormat::Plain,
            FormatValue::Json => ReportFormat::Json,
        };
        let rendered = render_report(&outcome, format).context("failed to render report")?;
        emit(&rendered)?;
    }

    Ok(outcome.exit_code() as i32)
}

/// Map a fatal error onto the process exit code the automation sees.
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    err.downcast_ref::<TocError>()
        .map(TocError::exit_code)
        .unwrap_or(ExitCode::Io)
}

fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 if cli.quiet => EnvFilter::new("error"),
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(cli.verbose >= 2),
        )
        .try_init();
}

fn emit(text: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{text}")?;
    handle.flush()
}
