//! Git Command Runner
//!
//! The single capability the installer needs from git: run it with some arguments
//! in a given working directory and capture what it printed.

use std::{io, path::Path, process::Command};

use log::debug;

/// Captured result of one git invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitOutput {
    pub success: bool,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// Runs git subcommands.
///
/// Implemented by [`SystemGit`] for real use and mocked in tests.
#[cfg_attr(test, mockall::automock)]
pub trait GitRunner {
    /// Runs `git <args>` with `cwd` as working directory.
    ///
    /// # Errors
    /// * If the git process cannot be spawned (e.g. git is not installed)
    fn run(&self, cwd: &Path, args: &[String]) -> io::Result<GitOutput>;
}

/// Runs the `git` binary found on `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemGit;

impl GitRunner for SystemGit {
    fn run(&self, cwd: &Path, args: &[String]) -> io::Result<GitOutput> {
        debug!("git {} (in {})", args.join(" "), cwd.display());

        let output = Command::new("git").args(args).current_dir(cwd).output()?;

        Ok(GitOutput {
            success: output.status.success(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

/// Builds an owned argument list from string literals.
pub(crate) fn git_args(args: &[&str]) -> Vec<String> {
    args.iter().map(ToString::to_string).collect()
}
