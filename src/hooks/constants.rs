//! Layout and naming constants shared by the installer and the generated scripts.

/// Every hook git knows about. See <https://git-scm.com/docs/githooks#_hooks>.
///
/// One proxy script is generated per entry.
pub const HOOK_NAMES: [&str; 28] = [
    "applypatch-msg",
    "pre-applypatch",
    "post-applypatch",
    "pre-commit",
    "pre-merge-commit",
    "prepare-commit-msg",
    "commit-msg",
    "post-commit",
    "pre-rebase",
    "post-checkout",
    "post-merge",
    "pre-push",
    "pre-receive",
    "update",
    "proc-receive",
    "post-receive",
    "post-update",
    "reference-transaction",
    "push-to-checkout",
    "pre-auto-gc",
    "post-rewrite",
    "sendemail-validate",
    "fsmonitor-watchman",
    "p4-changelist",
    "p4-prepare-changelist",
    "p4-post-changelist",
    "p4-pre-submit",
    "post-index-change",
];

/// Where user-defined hooks live, relative to the repository root.
pub const HOOKS_DIRNAME: &str = ".githooks";

/// Internals, relative to the repository root. `core.hooksPath` points here.
pub const DISPATCH_DIRNAME: &str = ".githooks/_";

/// Shared script every proxy sources.
pub const DISPATCH_SCRIPT_NAME: &str = "hook.sh";

/// Keeps the dispatch directory out of `git status`.
pub const IGNORE_FILE_NAME: &str = ".gitignore";

/// Content of [`IGNORE_FILE_NAME`].
pub const IGNORE_FILE_CONTENT: &str = "*\n";

/// The user hook pre-populated on first install.
pub const SELF_CHECK_HOOK: &str = "pre-commit";

/// Variable each proxy exports with its own hook name.
pub const TRIGGER_ENV: &str = "GITHOOKS_TRIGGER";

/// Mode switch read by the dispatch script.
pub const MODE_ENV: &str = "GITHOOKS";

/// [`MODE_ENV`] value that skips user hooks.
pub const MODE_SKIP: &str = "0";

/// [`MODE_ENV`] value that turns on `set -x` tracing.
pub const MODE_DEBUG: &str = "2";
