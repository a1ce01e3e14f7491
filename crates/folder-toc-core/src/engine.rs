use std::fs;
use std::path::PathBuf;

use folder_toc_config::{Config, README_FILE_NAME};
use serde::Serialize;
use tracing::{debug, info};

use crate::diff::build_unified_diff;
use crate::error::{ExitCode, TocError, TocResult};
use crate::fs::replace_readme;
use crate::scan::{collect_entries, FolderEntry};
use crate::toc::{render_block, render_items, splice, TOC_MARKER};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TocMode {
    /// Rewrite the README when its TOC is stale.
    #[default]
    Update,
    /// Report staleness without writing.
    Check,
    /// Produce a unified diff without writing.
    Diff,
}

#[derive(Debug, Clone)]
pub struct UpdateRequest {
    pub root: PathBuf,
    pub readme_path: PathBuf,
    pub mode: TocMode,
}

impl UpdateRequest {
    pub fn new(root: impl Into<PathBuf>, mode: TocMode) -> Self {
        let root = root.into();
        let readme_path = root.join(README_FILE_NAME);
        Self {
            root,
            readme_path,
            mode,
        }
    }

    pub fn from_config(config: &Config, mode: TocMode) -> Self {
        Self {
            root: config.root.clone(),
            readme_path: config.readme_path.clone(),
            mode,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TocStatus {
    Updated,
    Unchanged,
    OutOfDate,
    MissingReadme,
    NoEntries,
}

#[derive(Debug)]
pub struct UpdateOutcome {
    pub status: TocStatus,
    pub mode: TocMode,
    pub root: PathBuf,
    pub readme: PathBuf,
    pub entries: Vec<FolderEntry>,
    pub diff: Option<String>,
    /// New README content, when a TOC could be computed.
    pub result: Option<String>,
}

impl UpdateOutcome {
    fn skipped(request: &UpdateRequest, status: TocStatus) -> Self {
        Self {
            status,
            mode: request.mode,
            root: request.root.clone(),
            readme: request.readme_path.clone(),
            entries: Vec::new(),
            diff: None,
            result: None,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        match self.status {
            TocStatus::OutOfDate => ExitCode::OutOfDate,
            _ => ExitCode::Success,
        }
    }
}

/// Regenerate the sub-folder TOC in the root README.
pub fn update_toc(request: &UpdateRequest) -> TocResult<UpdateOutcome> {
    if !request.readme_path.exists() {
        debug!(readme = %request.readme_path.display(), "root README missing");
        return Ok(UpdateOutcome::skipped(request, TocStatus::MissingReadme));
    }

    let entries = collect_entries(&request.root)?;
    if entries.is_empty() {
        debug!(root = %request.root.display(), "no sub-folder READMEs");
        return Ok(UpdateOutcome::skipped(request, TocStatus::NoEntries));
    }

    let original = fs::read_to_string(&request.readme_path).map_err(|source| TocError::Read {
        path: request.readme_path.clone(),
        source,
    })?;

    let block = render_block(TOC_MARKER, &render_items(&entries));
    let updated = splice(&original, TOC_MARKER, &block);
    let changed = updated != original;

    let diff = match request.mode {
        TocMode::Diff => build_unified_diff(&original, &updated, README_FILE_NAME),
        TocMode::Update | TocMode::Check => None,
    };

    let status = match (request.mode, changed) {
        (_, false) => TocStatus::Unchanged,
        (TocMode::Update, true) => {
            replace_readme(&request.readme_path, &updated).map_err(|source| TocError::Write {
                path: request.readme_path.clone(),
                source,
            })?;
            info!(
                readme = %request.readme_path.display(),
                entries = entries.len(),
                "rewrote TOC"
            );
            TocStatus::Updated
        }
        (TocMode::Check | TocMode::Diff, true) => TocStatus::OutOfDate,
    };

    Ok(UpdateOutcome {
        status,
        mode: request.mode,
        root: request.root.clone(),
        readme: request.readme_path.clone(),
        entries,
        diff,
        result: Some(updated),
    })
}
