//! Marker-delimited TOC region handling.

use crate::scan::FolderEntry;

/// Literal used for both the opening and the closing delimiter.
pub const TOC_MARKER: &str = "<!-- AUTO-GENERATED TOC -->";

/// Byte span covering an opening marker through the next closing marker,
/// both markers included.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkerRegion {
    pub start: usize,
    pub end: usize,
}

/// Locate the first marker and the next occurrence of the same marker after it.
pub fn locate_region(contents: &str, marker: &str) -> Option<MarkerRegion> {
    let start = contents.find(marker)?;
    let after_open = start + marker.len();
    let close = contents[after_open..].find(marker)?;
    Some(MarkerRegion {
        start,
        end: after_open + close + marker.len(),
    })
}

/// Join rendered entries with single newlines.
pub fn render_items(entries: &[FolderEntry]) -> String {
    entries
        .iter()
        .map(FolderEntry::render)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap a TOC block in markers, separated by blank lines.
pub fn render_block(marker: &str, toc: &str) -> String {
    format!("{marker}\n\n{toc}\n\n{marker}")
}

/// Replace every marker region with `block`, or append `block` after a blank
/// line when no complete region exists. Regions are matched left to right and
/// never overlap.
pub fn splice(contents: &str, marker: &str, block: &str) -> String {
    let mut output = String::with_capacity(contents.len() + block.len());
    let mut cursor = 0usize;
    let mut replaced = false;

    while let Some(region) = locate_region(&contents[cursor..], marker) {
        output.push_str(&contents[cursor..cursor + region.start]);
        output.push_str(block);
        cursor += region.end;
        replaced = true;
    }

    if !replaced {
        return format!("{}\n\n{block}\n", contents.trim_end());
    }

    output.push_str(&contents[cursor..]);
    output
}
