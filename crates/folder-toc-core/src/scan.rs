//! Discovery of qualifying sub-folders and their README titles.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use folder_toc_config::README_FILE_NAME;
use serde::Serialize;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{TocError, TocResult};

/// One immediate child directory of the root that carries its own README.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FolderEntry {
    pub name: String,
    pub link: String,
    pub title: String,
}

impl FolderEntry {
    /// Markdown list item linking to the child README.
    pub fn render(&self) -> String {
        format!("- [{}]({})", self.title, self.link)
    }
}

/// Collect every immediate sub-directory of `root` that holds a README, sorted
/// by directory name.
pub fn collect_entries(root: &Path) -> TocResult<Vec<FolderEntry>> {
    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    let mut entries = Vec::new();
    for item in walker {
        let item = match item {
            Ok(item) => item,
            Err(err) if err.depth() > 0 => {
                // Dangling symlinks and the like are simply not directories.
                debug!(error = %err, "skipping unreadable child");
                continue;
            }
            Err(err) => {
                return Err(TocError::Scan {
                    path: root.to_path_buf(),
                    source: err.into(),
                })
            }
        };

        if !item.file_type().is_dir() {
            continue;
        }

        let readme = item.path().join(README_FILE_NAME);
        if !readme.is_file() {
            debug!(dir = %item.path().display(), "no README; not listed");
            continue;
        }

        let Some(name) = item.file_name().to_str().map(str::to_owned) else {
            debug!(dir = %item.path().display(), "name is not UTF-8; not listed");
            continue;
        };
        let title = read_title(&readme)?;
        let link = format!("{name}/{README_FILE_NAME}");
        debug!(%name, %title, "found sub-folder README");
        entries.push(FolderEntry { name, link, title });
    }

    Ok(entries)
}

fn read_title(path: &Path) -> TocResult<String> {
    let read_error = |source: io::Error| TocError::Read {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(read_error)?;
    extract_title(BufReader::new(file)).map_err(read_error)
}

/// First line with non-whitespace content, minus any leading `#` markers.
/// `\n`, `\r\n` and a lone `\r` all end a line. Empty when the reader holds
/// nothing but blank lines.
pub fn extract_title<R: BufRead>(reader: R) -> io::Result<String> {
    for line in reader.lines() {
        let line = line?;
        for segment in line.split('\r') {
            let clean = segment.trim();
            if !clean.is_empty() {
                return Ok(clean.trim_start_matches('#').trim().to_string());
            }
        }
    }
    Ok(String::new())
}
