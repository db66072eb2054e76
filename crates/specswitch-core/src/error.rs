use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::host::HostError;

#[derive(Debug, Error)]
pub enum SwitchError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error(transparent)]
    Host(#[from] HostError),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("command already registered: {0}")]
    DuplicateCommand(String),
}

impl SwitchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SwitchError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SwitchError>;
