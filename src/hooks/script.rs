//! Shell artifacts written by the installer.
//!
//! Git executes these, not us. The flow for a hook firing is:
//!
//! 1. git runs `.githooks/_/<hook>` (a proxy) from the top of the work tree.
//! 2. The proxy exports `GITHOOKS_TRIGGER=<hook>` and sources `hook.sh`.
//!    Sourcing keeps the proxy's `$0` and positional parameters.
//! 3. `hook.sh` looks for `.githooks/<hook>`. Absent means exit 0.
//! 4. It sources the global init script if present, honors `GITHOOKS=0`,
//!    then runs the user hook with `sh -e` and exits with its status.

use super::constants::DISPATCH_SCRIPT_NAME;

/// The shared dispatcher, written to `.githooks/_/hook.sh`.
///
/// `GITHOOKS=2` traces with `set -x`, `GITHOOKS=0` skips the user hook.
/// Messages go to stderr so hooks with a stdout protocol
/// (`fsmonitor-watchman`, `proc-receive`) are left intact.
pub const DISPATCH_SCRIPT: &str = r#"#!/usr/bin/env sh
# Generated by `githooks init`. Rewritten on every install, do not edit.
[ "$GITHOOKS" = "2" ] && set -x

hook_name="${GITHOOKS_TRIGGER:-$(basename -- "$0")}"
hook_script="$(dirname -- "$(dirname -- "$0")")/$hook_name"

# no user hook for this event
[ -f "$hook_script" ] || exit 0

if [ -z "$GITHOOKS_TRIGGER" ]; then
	printf '\033[33m%s\033[0m\n' "Warning: unset GITHOOKS_TRIGGER. Hook may not function properly. Check .githooks/_/$(basename -- "$0")" >&2
fi

init_script="${XDG_CONFIG_HOME:-$HOME/.config}/githooks/init"
[ -f "$init_script" ] && . "$init_script"

if [ "$GITHOOKS" = "0" ]; then
	echo "Found GITHOOKS=0. Skipping $hook_name..." >&2
	exit 0
fi

sh -e "$hook_script" "$@"
exit_status=$?

exit $exit_status
"#;

/// Proxy for one hook name, written to `.githooks/_/<hook>`.
#[must_use]
pub fn proxy_script(hook: &str) -> String {
    format!(
        "#!/usr/bin/env sh\n\
         export GITHOOKS_TRIGGER=\"{hook}\"\n\
         . \"$(dirname -- \"$0\")/{DISPATCH_SCRIPT_NAME}\"\n"
    )
}

/// Initial content of the self-check hook at `.githooks/pre-commit`.
#[must_use]
pub fn self_check_script(command: &str) -> String {
    format!("#!/usr/bin/env sh\n{}\n", command.trim_end())
}
