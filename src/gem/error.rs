use std::path::PathBuf;

use thiserror::Error;

use crate::command::CommandError;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Failed to create cache directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to store {from:?} at {to:?}: {source}")]
    Store {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Package not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("{package} has {count} published version(s); at least two are needed")]
    NotEnoughVersions { package: String, count: usize },
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("Fetch command exited with status {code:?} for {name} version {version}")]
    CommandFailed {
        name: String,
        version: String,
        code: Option<i32>,
    },

    #[error("Expected archive {path:?} was not produced")]
    MissingArchive { path: PathBuf },

    #[error(transparent)]
    Cache(#[from] CacheError),
}
