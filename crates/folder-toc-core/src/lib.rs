//! Core engine that keeps a root README's sub-folder table of contents current.

pub mod diff;
pub mod engine;
pub mod error;
pub mod fs;
pub mod report;
pub mod scan;
pub mod toc;

pub use engine::{update_toc, TocMode, TocStatus, UpdateOutcome, UpdateRequest};
pub use error::{ExitCode, TocError, TocResult};
pub use report::{render_report, ReportFormat};
pub use scan::{collect_entries, extract_title, FolderEntry};
pub use toc::{locate_region, render_block, render_items, splice, MarkerRegion, TOC_MARKER};
