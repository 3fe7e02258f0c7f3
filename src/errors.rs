use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the githooks installer
#[derive(Error, Debug)]
pub enum GitHooksError {
    #[error("Not a git directory")]
    NotRepository { stderr: Vec<u8> },

    #[error("Error while configuring git config core.hooksPath")]
    HooksPathConfig { stderr: Vec<u8> },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl GitHooksError {
    /// Raw diagnostic output captured from git, if this error came from a git invocation.
    ///
    /// The CLI echoes these bytes untouched so the user sees exactly what git said.
    #[must_use]
    pub fn stderr(&self) -> Option<&[u8]> {
        match self {
            Self::NotRepository { stderr } | Self::HooksPathConfig { stderr } => Some(stderr),
            Self::Io(_) | Self::Config(_) => None,
        }
    }
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error while accessing config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration at {path} - please check your config.toml syntax: {source}")]
    InvalidConfig {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Type alias for Result using `GitHooksError`
pub type Result<T> = std::result::Result<T, GitHooksError>;
