//! Shared helpers for integration tests: sandboxed git repositories with an
//! isolated home and config directory.

#![allow(dead_code)]

use std::{
    fs, io,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use githooks::{
    config::Settings,
    git::{GitOutput, GitRunner},
    hooks::{Installation, Installer},
};
use tempfile::TempDir;

/// Marker the self-check hook prints, so tests can tell it ran.
pub const SELF_CHECK_MARKER: &str = "Checked 1 file";

/// A throwaway repository plus its own `HOME` and `XDG_CONFIG_HOME`.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(dir.path().join("home")).expect("Failed to create home");
        fs::create_dir_all(dir.path().join("repo")).expect("Failed to create repo");
        Self { dir }
    }

    /// Working tree root, canonicalized to match what git reports.
    pub fn repo(&self) -> PathBuf {
        fs::canonicalize(self.dir.path().join("repo")).expect("Failed to canonicalize repo")
    }

    pub fn root(&self) -> PathBuf {
        fs::canonicalize(self.dir.path()).expect("Failed to canonicalize sandbox")
    }

    pub fn home(&self) -> PathBuf {
        self.dir.path().join("home")
    }

    pub fn config_home(&self) -> PathBuf {
        self.dir.path().join("xdg")
    }

    /// A directory outside any repository.
    pub fn outside(&self) -> PathBuf {
        self.home()
    }

    /// Applies the sandbox environment to a command.
    pub fn isolate<'a>(&self, command: &'a mut Command) -> &'a mut Command {
        command
            .env("HOME", self.home())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("GIT_CEILING_DIRECTORIES", self.root())
            .env_remove("GITHOOKS")
            .env_remove("GITHOOKS_TRIGGER")
            .env_remove("GIT_DIR")
            .env_remove("GIT_WORK_TREE")
    }

    /// Runs git in `cwd` with the sandbox environment.
    pub fn git(&self, cwd: &Path, args: &[&str]) -> Output {
        let mut command = Command::new("git");
        self.isolate(&mut command)
            .args(args)
            .current_dir(cwd)
            .output()
            .expect("Failed to run git")
    }

    /// A [`GitRunner`] that runs git inside the sandbox environment.
    pub fn runner(&self) -> SandboxGit<'_> {
        SandboxGit { sandbox: self }
    }

    /// `git init` plus the identity needed to commit.
    pub fn init_git(&self) {
        let repo = self.repo();
        for args in [
            &["init", "--quiet"][..],
            &["config", "user.email", "tester@example.com"][..],
            &["config", "user.name", "Githooks Tester"][..],
            &["config", "commit.gpgsign", "false"][..],
        ] {
            let output = self.git(&repo, args);
            assert!(output.status.success(), "git {args:?} failed: {output:?}");
        }
    }

    /// Installs githooks with a self-check hook that only prints [`SELF_CHECK_MARKER`].
    pub fn install(&self) -> Installation {
        let settings = Settings {
            self_check: format!("echo \"{SELF_CHECK_MARKER}\" >&2"),
        };
        Installer::new(self.runner(), settings)
            .init(&self.repo())
            .expect("Failed to install githooks")
    }

    /// Writes a user hook at `.githooks/<hook>`.
    pub fn write_hook(&self, hook: &str, body: &str) {
        fs::write(
            self.repo().join(".githooks").join(hook),
            format!("#!/usr/bin/env sh\n{body}\n"),
        )
        .expect("Failed to write hook");
    }

    /// Writes and stages a file, then commits it with `message`.
    pub fn commit(&self, message: &str, envs: &[(&str, &str)]) -> Output {
        let repo = self.repo();
        fs::write(repo.join("main.rs"), format!("// {message}\nfn main() {{}}\n"))
            .expect("Failed to write source file");

        let add = self.git(&repo, &["add", "main.rs"]);
        assert!(add.status.success(), "git add failed: {add:?}");

        let mut command = Command::new("git");
        self.isolate(&mut command)
            .args(["commit", "--quiet", "-m", message])
            .current_dir(&repo);
        for (key, value) in envs {
            command.env(key, value);
        }
        command.output().expect("Failed to run git commit")
    }

    /// Runs a generated script from the repository root, the way git would.
    ///
    /// Goes through `sh` instead of exec'ing the file, since tests writing
    /// scripts in parallel can otherwise hit `ETXTBSY`.
    pub fn run_script(&self, relative: &str, args: &[&str], envs: &[(&str, &str)]) -> Output {
        let repo = self.repo();
        let mut command = Command::new("sh");
        self.isolate(&mut command)
            .arg(relative)
            .args(args)
            .current_dir(&repo);
        for (key, value) in envs {
            command.env(key, value);
        }
        command.output().expect("Failed to run script")
    }
}

/// Runs git with the sandbox environment applied.
pub struct SandboxGit<'a> {
    sandbox: &'a Sandbox,
}

impl GitRunner for SandboxGit<'_> {
    fn run(&self, cwd: &Path, args: &[String]) -> io::Result<GitOutput> {
        let mut command = Command::new("git");
        let output = self
            .sandbox
            .isolate(&mut command)
            .args(args)
            .current_dir(cwd)
            .output()?;

        Ok(GitOutput {
            success: output.status.success(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
