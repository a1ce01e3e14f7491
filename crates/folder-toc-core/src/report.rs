//! Renders run outcomes for the invoking automation.

use serde::Serialize;

use crate::engine::{TocMode, TocStatus, UpdateOutcome};
use crate::scan::FolderEntry;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    status: TocStatus,
    root: String,
    readme: String,
    entries: &'a [FolderEntry],
    #[serde(skip_serializing_if = "Option::is_none")]
    diff: Option<&'a str>,
}

pub fn render_report(outcome: &UpdateOutcome, format: ReportFormat) -> serde_json::Result<String> {
    match format {
        ReportFormat::Plain => Ok(render_plain(outcome)),
        ReportFormat::Json => serde_json::to_string_pretty(&JsonReport {
            status: outcome.status,
            root: outcome.root.display().to_string(),
            readme: outcome.readme.display().to_string(),
            entries: &outcome.entries,
            diff: outcome.diff.as_deref(),
        }),
    }
}

fn render_plain(outcome: &UpdateOutcome) -> String {
    let readme = outcome.readme.display();
    match outcome.status {
        TocStatus::MissingReadme => format!("{readme} missing; skipping."),
        TocStatus::NoEntries => format!(
            "No sub-folder READMEs inside {}; nothing to update.",
            outcome.root.display()
        ),
        TocStatus::Updated => format!("Updated TOC in {readme}"),
        TocStatus::Unchanged => format!("TOC in {readme} is already up to date"),
        TocStatus::OutOfDate => match (&outcome.mode, &outcome.diff) {
            (TocMode::Diff, Some(diff)) => diff.trim_end().to_string(),
            _ => format!("TOC in {readme} is out of date"),
        },
    }
}
