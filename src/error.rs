use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a generation run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("fixtures database unavailable: {0}")]
    DataSourceUnavailable(String),

    #[error("fixture query failed: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("failed to write {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize {what}: {source}")]
    Serialize {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl PipelineError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PipelineError::OutputWrite { path: path.into(), source }
    }
}

/// Why an external competition mapping could not be used. Never fatal.
#[derive(Debug, Error)]
pub enum AllowListError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed league map {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("league map key {0:?} is not an integer id")]
    InvalidId(String),

    #[error("league map {0} contains no competitions")]
    Empty(PathBuf),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DAYS_AHEAD must be a non-negative integer, got {0:?}")]
    DaysAhead(String),

    #[error("unknown SITE_TIMEZONE {0:?}")]
    Timezone(String),
}
