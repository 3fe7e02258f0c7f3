//! Repository Operations
//!
//! Repository detection and the one piece of git configuration the installer
//! writes: `core.hooksPath`.

use std::path::{Path, PathBuf};

use log::debug;

use crate::errors::{GitHooksError, Result};

use super::command::{GitRunner, git_args};

/// Git configuration key redirecting hook lookup.
pub const HOOKS_PATH_KEY: &str = "core.hooksPath";

/// Retrieves the top-level path of the git repository enclosing `start_dir`.
///
/// Works from any subdirectory of the work tree, since it delegates to
/// `git rev-parse --show-toplevel`.
///
/// # Errors
///
/// Returns `GitHooksError::NotRepository` carrying git's raw stderr if:
/// - `start_dir` is not inside a git work tree
/// - git could not be run at all
///
/// # Examples
///
/// ```no_run
/// use githooks::git::{SystemGit, resolve_root};
///
/// let root = resolve_root(&SystemGit, &std::env::current_dir()?)?;
/// println!("Repository root: {}", root.display());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn resolve_root(git: &impl GitRunner, start_dir: &Path) -> Result<PathBuf> {
    let output = git
        .run(start_dir, &git_args(&["rev-parse", "--show-toplevel"]))
        .map_err(|e| GitHooksError::NotRepository {
            stderr: format!("{e}\n").into_bytes(),
        })?;

    if !output.success {
        return Err(GitHooksError::NotRepository {
            stderr: output.stderr,
        });
    }

    let root = PathBuf::from(String::from_utf8_lossy(&output.stdout).trim());
    debug!("Repository root: {}", root.display());

    Ok(root)
}

/// Sets `core.hooksPath` in the repository-local configuration of `root`.
///
/// # Errors
///
/// Returns `GitHooksError::HooksPathConfig` carrying git's raw stderr if the
/// configuration write fails or git could not be run.
pub fn configure_hooks_path(git: &impl GitRunner, root: &Path, hooks_path: &str) -> Result<()> {
    let output = git
        .run(root, &git_args(&["config", HOOKS_PATH_KEY, hooks_path]))
        .map_err(|e| GitHooksError::HooksPathConfig {
            stderr: format!("{e}\n").into_bytes(),
        })?;

    if !output.success {
        return Err(GitHooksError::HooksPathConfig {
            stderr: output.stderr,
        });
    }

    debug!("{HOOKS_PATH_KEY} set to {hooks_path}");

    Ok(())
}
