use std::io;
use std::path::PathBuf;

use folder_toc_config::ConfigError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    OutOfDate = 1,
    Config = 2,
    Io = 3,
}

#[derive(Debug, Error)]
pub enum TocError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to list {path}: {source}")]
    Scan { path: PathBuf, source: io::Error },
}

impl TocError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Config(_) => ExitCode::Config,
            Self::Read { .. } | Self::Write { .. } | Self::Scan { .. } => ExitCode::Io,
        }
    }
}

pub type TocResult<T> = Result<T, TocError>;
