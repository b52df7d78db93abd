use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModelError {
    #[error("default branch must not be empty")]
    EmptyDefaultBranch,

    #[error("base url must not be empty")]
    EmptyBaseUrl,

    #[error("sidebar class must not be empty")]
    EmptySidebarClass,

    /// Branch names become URL path segments, so whitespace-only names are rejected.
    #[error("branch name at position {position} is blank")]
    BlankBranch { position: usize },

    #[error("failed to read config {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config {path}: {source}")]
    WriteConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    SerializeConfig(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
