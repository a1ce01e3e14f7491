//! Shared test harness utilities for folder-toc crates.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Write `contents` to `relative` under `dir`, creating parent directories.
pub fn write_file(dir: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directory");
    }
    let mut file = fs::File::create(&path).expect("create file");
    file.write_all(contents.as_bytes()).expect("write file");
    path
}

/// Temporary documentation tree with a root README and titled sub-folders.
pub struct DocTree {
    temp: TempDir,
}

impl DocTree {
    /// Empty tree without a root README.
    pub fn empty() -> Self {
        Self {
            temp: TempDir::new().expect("tempdir"),
        }
    }

    /// Tree whose root README holds `contents`.
    pub fn with_readme(contents: &str) -> Self {
        let tree = Self::empty();
        tree.write("README.md", contents);
        tree
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn readme_path(&self) -> PathBuf {
        self.root().join("README.md")
    }

    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        write_file(self.root(), relative, contents)
    }

    /// Add `<name>/README.md` with the given contents.
    pub fn child(&self, name: &str, contents: &str) -> &Self {
        self.write(&format!("{name}/README.md"), contents);
        self
    }

    /// Add a sub-folder with no README.
    pub fn bare_child(&self, name: &str) -> &Self {
        fs::create_dir_all(self.root().join(name)).expect("create directory");
        self
    }

    pub fn readme(&self) -> String {
        fs::read_to_string(self.readme_path()).expect("read root README")
    }
}
