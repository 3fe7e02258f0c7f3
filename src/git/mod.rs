//! Git Operations Module
//!
//! Everything githooks asks of git: locating the repository root and pointing
//! `core.hooksPath` at the dispatch directory.

pub mod command;
pub mod repository;

pub use command::{GitOutput, GitRunner, SystemGit};
pub use repository::{HOOKS_PATH_KEY, configure_hooks_path, resolve_root};
