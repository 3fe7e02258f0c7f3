//! Hooks Module
//!
//! The `.githooks/` layout, the shell scripts that make up the dispatch
//! protocol, and the installer that writes them.

pub mod constants;
pub mod install;
pub mod script;

use std::path::Path;

pub use install::{Installation, Installer};

use crate::{
    config::{Config, Settings},
    errors::Result,
    git::{GitRunner, SystemGit, resolve_root},
};

/// Installs githooks for the repository enclosing `start_dir`, using the
/// system `git` and the user's configuration.
///
/// # Errors
/// * `GitHooksError::NotRepository` if `start_dir` is not in a git work tree,
///   whatever the state of the user configuration
/// * If the user configuration is unreadable or malformed
/// * Any error from [`Installer::init`]
///
/// # Examples
///
/// ```no_run
/// let installation = githooks::hooks::init(&std::env::current_dir()?)?;
/// println!("hooks live in {}", installation.hooks_dir.display());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn init(start_dir: &Path) -> Result<Installation> {
    init_with(SystemGit, start_dir, || Config::new()?.load())
}

/// Like [`init`], with an explicit git runner and settings source.
///
/// The repository root is resolved first; `load_settings` only runs once
/// `start_dir` is known to be inside a work tree.
///
/// # Errors
/// * `GitHooksError::NotRepository` before `load_settings` is ever called
/// * Whatever `load_settings` returns
/// * Any error from [`Installer::init`]
pub fn init_with<G, F>(git: G, start_dir: &Path, load_settings: F) -> Result<Installation>
where
    G: GitRunner,
    F: FnOnce() -> Result<Settings>,
{
    let root = resolve_root(&git, start_dir)?;
    let settings = load_settings()?;

    Installer::new(git, settings).install(root)
}
