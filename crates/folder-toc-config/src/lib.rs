//! Root-directory resolution for the folder-toc toolkit.
//!
//! The root is taken from an explicit override when one is supplied, and from
//! the `ROOT_DIR` environment variable otherwise. Relative paths are anchored
//! at the working directory. A root that does not exist is still a valid
//! configuration; it simply has no README to update.

use std::env;
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

/// Environment variable consulted when no explicit root is given.
pub const ROOT_DIR_VAR: &str = "ROOT_DIR";

/// File name of the README maintained at the root and read from each child.
pub const README_FILE_NAME: &str = "README.md";

/// Resolved configuration for a single run.
#[derive(Clone, Debug)]
pub struct Config {
    pub root: PathBuf,
    pub readme_path: PathBuf,
    pub source: RootSource,
}

/// Where the root directory came from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RootSource {
    Override,
    Environment { var: String },
}

impl fmt::Display for RootSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootSource::Override => f.write_str("--root override"),
            RootSource::Environment { var } => write!(f, "environment variable {var}"),
        }
    }
}

/// Loader options, typically supplied by the CLI layer.
#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub root_override: Option<PathBuf>,
    pub env_var: Option<String>,
    pub working_dir: Option<PathBuf>,
}

impl LoadOptions {
    pub fn with_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root_override = Some(path.into());
        self
    }

    pub fn with_env_var(mut self, name: impl Into<String>) -> Self {
        self.env_var = Some(name.into());
        self
    }

    pub fn with_working_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(path.into());
        self
    }

    fn env_var_name(&self) -> &str {
        self.env_var.as_deref().unwrap_or(ROOT_DIR_VAR)
    }
}

/// Errors surfaced while resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} environment variable not set")]
    MissingRoot { var: String },
    #[error("failed to resolve working directory {attempted}: {source}")]
    WorkingDirectory {
        attempted: PathBuf,
        source: io::Error,
    },
}

impl Config {
    /// Resolves the root directory and the README path beneath it.
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let var = options.env_var_name().to_owned();
        let (raw, source) = match options.root_override {
            Some(path) => (path, RootSource::Override),
            None => match env::var_os(&var) {
                Some(value) => (raw_path(value), RootSource::Environment { var }),
                None => return Err(ConfigError::MissingRoot { var }),
            },
        };

        let working_dir = resolve_working_dir(options.working_dir)?;
        let root = resolve_root(&raw, &working_dir);
        let readme_path = root.join(README_FILE_NAME);

        Ok(Config {
            root,
            readme_path,
            source,
        })
    }
}

fn raw_path(value: OsString) -> PathBuf {
    if value.is_empty() {
        PathBuf::from(".")
    } else {
        PathBuf::from(value)
    }
}

fn resolve_working_dir(override_dir: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    match override_dir {
        Some(path) => fs::canonicalize(&path).map_err(|source| ConfigError::WorkingDirectory {
            attempted: path,
            source,
        }),
        None => env::current_dir().map_err(|source| ConfigError::WorkingDirectory {
            attempted: PathBuf::from("."),
            source,
        }),
    }
}

fn resolve_root(raw: &Path, working_dir: &Path) -> PathBuf {
    let absolute = if raw.is_absolute() {
        raw.to_path_buf()
    } else {
        working_dir.join(raw)
    };
    fs::canonicalize(&absolute).unwrap_or_else(|_| normalize_path(&absolute))
}

/// Canonicalise `.` and `..` path segments without touching the filesystem.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::ParentDir => {
                normalized.pop();
            }
            Component::CurDir => {}
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
