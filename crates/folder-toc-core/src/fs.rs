use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::Builder;

/// Replace the README at `path` with `contents` in one step.
///
/// A symlinked README is followed, so the link survives and its target gets
/// the new text. The replacement is staged next to the target and renamed
/// over it, carrying the target's Unix permissions across.
pub fn replace_readme(path: &Path, contents: &str) -> io::Result<()> {
    let target = write_target(path);
    let dir = target
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut staged = Builder::new().prefix(".folder-toc").tempfile_in(dir)?;
    staged.write_all(contents.as_bytes())?;
    staged.as_file().sync_all()?;

    #[cfg(unix)]
    {
        if let Ok(metadata) = fs::metadata(&target) {
            let _ = fs::set_permissions(staged.path(), metadata.permissions());
        }
    }

    staged.persist(&target).map_err(|err| err.error)?;
    Ok(())
}

fn write_target(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn replaces_contents_without_leaving_temp_files() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("README.md");
        fs::write(&file_path, "hello").unwrap();

        replace_readme(&file_path, "updated").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "updated");
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_name().to_string_lossy().starts_with(".folder-toc"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn preserves_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let file_path = dir.path().join("README.md");
        fs::write(&file_path, "hello").unwrap();
        fs::set_permissions(&file_path, fs::Permissions::from_mode(0o640)).unwrap();

        replace_readme(&file_path, "updated").unwrap();

        let mode = fs::metadata(&file_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
    }

    #[cfg(unix)]
    #[test]
    fn writes_through_symlink() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        let target = dir.path().join("docs").join("real.md");
        let link = dir.path().join("README.md");
        fs::write(&target, "# Real\n").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        replace_readme(&link, "# Updated\n").unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&target).unwrap(), "# Updated\n");
    }
}
