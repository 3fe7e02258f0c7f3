//! Installer
//!
//! Materializes the `.githooks/` layout under the repository root and points
//! `core.hooksPath` at `.githooks/_`.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, info};
use rayon::prelude::*;

use crate::{
    config::Settings,
    errors::Result,
    git::{GitRunner, configure_hooks_path, resolve_root},
};

use super::{
    constants::{
        DISPATCH_DIRNAME, DISPATCH_SCRIPT_NAME, HOOK_NAMES, HOOKS_DIRNAME, IGNORE_FILE_CONTENT,
        IGNORE_FILE_NAME, SELF_CHECK_HOOK,
    },
    script::{DISPATCH_SCRIPT, proxy_script, self_check_script},
};

/// What a successful `init` left on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installation {
    /// Top of the work tree.
    pub root: PathBuf,
    /// `.githooks`, owned by the user.
    pub hooks_dir: PathBuf,
    /// `.githooks/_`, owned by githooks.
    pub dispatch_dir: PathBuf,
    /// Whether the self-check hook was written on this run.
    /// `false` means an existing file was preserved.
    pub self_check_created: bool,
}

impl Installation {
    /// Path of the self-check hook.
    #[must_use]
    pub fn self_check_path(&self) -> PathBuf {
        self.hooks_dir.join(SELF_CHECK_HOOK)
    }
}

/// Sets up githooks in a repository.
pub struct Installer<G: GitRunner> {
    git: G,
    settings: Settings,
}

impl<G: GitRunner> Installer<G> {
    pub fn new(git: G, settings: Settings) -> Self {
        Self { git, settings }
    }

    /// Installs (or reinstalls) githooks for the repository enclosing `start_dir`.
    ///
    /// Idempotent: everything under `.githooks/_` and `core.hooksPath` are
    /// rewritten on every call, while `.githooks/pre-commit` is only written
    /// when it does not exist yet.
    ///
    /// # Errors
    /// * `GitHooksError::NotRepository` if `start_dir` is not in a git work tree.
    ///   Nothing is written in that case.
    /// * `GitHooksError::HooksPathConfig` if `core.hooksPath` cannot be set
    /// * `GitHooksError::Io` for any filesystem failure, unwrapped
    pub fn init(&self, start_dir: &Path) -> Result<Installation> {
        let root = resolve_root(&self.git, start_dir)?;
        self.install(root)
    }

    /// Writes the layout under an already resolved repository root.
    pub(crate) fn install(&self, root: PathBuf) -> Result<Installation> {
        let hooks_dir = root.join(HOOKS_DIRNAME);
        let dispatch_dir = root.join(DISPATCH_DIRNAME);

        match fs::create_dir_all(&dispatch_dir) {
            Err(e) if e.kind() != io::ErrorKind::AlreadyExists => return Err(e.into()),
            _ => {}
        }

        let self_check_created = self.ensure_self_check(&hooks_dir)?;

        fs::write(dispatch_dir.join(IGNORE_FILE_NAME), IGNORE_FILE_CONTENT)?;

        HOOK_NAMES.par_iter().try_for_each(|hook| {
            write_executable(&dispatch_dir.join(hook), &proxy_script(hook))
        })?;
        debug!("Wrote {} proxy hooks", HOOK_NAMES.len());

        // Only switch git over once every proxy and the dispatcher are in place.
        write_executable(&dispatch_dir.join(DISPATCH_SCRIPT_NAME), DISPATCH_SCRIPT)?;

        configure_hooks_path(&self.git, &root, DISPATCH_DIRNAME)?;

        info!("githooks installed in {}", root.display());

        Ok(Installation {
            root,
            hooks_dir,
            dispatch_dir,
            self_check_created,
        })
    }

    /// Writes the self-check hook unless something already sits at its path.
    fn ensure_self_check(&self, hooks_dir: &Path) -> Result<bool> {
        let path = hooks_dir.join(SELF_CHECK_HOOK);

        match fs::symlink_metadata(&path) {
            Ok(_) => {
                debug!("Keeping existing {}", path.display());
                Ok(false)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                write_executable(&path, &self_check_script(&self.settings.self_check))?;
                debug!("Created {}", path.display());
                Ok(true)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Writes `content` to `path` (truncating) and marks it `0o755`.
fn write_executable(path: &Path, content: &str) -> io::Result<()> {
    fs::write(path, content)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
    }

    Ok(())
}
