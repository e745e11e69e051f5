//! Error types shared by the scraping pipeline.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("failed to start browser session")]
    SessionStart(#[source] anyhow::Error),
    #[error("failed to load {url}")]
    Navigation {
        url: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("failed to read rendered page {url}")]
    PageRead {
        url: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("failed to write dataset to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
    #[error("failed to read dataset from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ScrapeError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: impl Into<anyhow::Error>) -> Self {
        Self::Write {
            path: path.into(),
            source: source.into(),
        }
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: impl Into<anyhow::Error>) -> Self {
        Self::Read {
            path: path.into(),
            source: source.into(),
        }
    }
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;
