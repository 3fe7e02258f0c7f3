//! Configuration Management Module for githooks
//!
//! githooks reads an optional TOML file at
//! `${XDG_CONFIG_HOME:-$HOME/.config}/githooks/config.toml`.
//! The same directory holds the global `init` script that the installed
//! dispatch script sources before running any hook.
//!
//! # Configuration Structure
//!
//! ```toml
//! # Command written into .githooks/pre-commit the first time it is created
//! self_check = "cargo clippy -- -D warnings"
//! ```
//!
//! A missing file means defaults.

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use log::debug;
use serde::Deserialize;

use crate::errors::{ConfigError, Result};

/// Name of the per-user configuration folder, below the config home.
pub const CONFIG_FOLDER_NAME: &str = "githooks";

/// Name of the configuration file inside [`CONFIG_FOLDER_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Name of the global init script sourced by the dispatch script.
pub const INIT_SCRIPT_NAME: &str = "init";

/// Command the self-check hook runs unless configured otherwise.
pub const DEFAULT_SELF_CHECK: &str = "cargo check";

/// User settings that shape what `init` writes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Body of the self-check hook created at `.githooks/pre-commit`.
    pub self_check: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            self_check: DEFAULT_SELF_CHECK.to_string(),
        }
    }
}

/// Locates and reads the per-user configuration
pub struct Config {
    root: PathBuf,
}

impl Config {
    /// Creates a new Config rooted at the user's config home.
    ///
    /// `XDG_CONFIG_HOME` wins when set and non-empty, otherwise `$HOME/.config`,
    /// mirroring the lookup the dispatch script performs at hook time.
    ///
    /// # Errors
    /// * When neither `XDG_CONFIG_HOME` nor a home directory can be determined
    pub fn new() -> Result<Self> {
        let root = Config::get_config_root()?;
        Ok(Config { root })
    }

    /// Creates a new Config instance with a custom config home
    ///
    /// # Arguments
    /// * `root` - Directory playing the role of `XDG_CONFIG_HOME`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Config { root: root.into() }
    }

    /// Returns the `githooks` folder inside the config home.
    #[must_use]
    pub fn folder_path(&self) -> PathBuf {
        self.root.join(CONFIG_FOLDER_NAME)
    }

    /// Returns the path of `config.toml`.
    #[must_use]
    pub fn file_path(&self) -> PathBuf {
        self.folder_path().join(CONFIG_FILE_NAME)
    }

    /// Returns the path of the global init script sourced before every hook.
    #[must_use]
    pub fn init_script_path(&self) -> PathBuf {
        self.folder_path().join(INIT_SCRIPT_NAME)
    }

    /// Loads the settings, falling back to defaults when no file exists.
    ///
    /// # Errors
    /// * If the file exists but cannot be read
    /// * If the file is not valid TOML for [`Settings`]
    pub fn load(&self) -> Result<Settings> {
        let path = self.file_path();

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No configuration at {}, using defaults", path.display());
                return Ok(Settings::default());
            }
            Err(e) => return Err(ConfigError::Io(e).into()),
        };

        parse_settings(&path, &content)
    }

    fn get_config_root() -> Result<PathBuf> {
        if let Some(xdg) = env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(xdg));
        }

        dirs::home_dir()
            .map(|home| home.join(".config"))
            .ok_or_else(|| {
                ConfigError::Io(io::Error::new(
                    io::ErrorKind::NotFound,
                    "could not determine home directory - please set HOME or XDG_CONFIG_HOME",
                ))
                .into()
            })
    }
}

fn parse_settings(path: &Path, content: &str) -> Result<Settings> {
    let settings = toml::from_str(content).map_err(|source| ConfigError::InvalidConfig {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Loaded configuration from {}", path.display());

    Ok(settings)
}
