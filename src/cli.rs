use std::{
    ffi::OsString,
    io::{self, Write},
};

use clap::{
    CommandFactory, Parser, Subcommand,
    error::{ContextKind, ErrorKind},
};

use crate::{
    config::Config,
    errors::GitHooksError,
    hooks::{
        self, Installation,
        constants::{DISPATCH_DIRNAME, MODE_DEBUG, MODE_ENV, MODE_SKIP},
    },
    logger::init_logger,
    utils::{format_list, print_error, print_info, print_success},
};

/// Exit code for success, including the no-op usage screen.
pub const EXIT_OK: i32 = 0;
/// Exit code when `init` fails.
pub const EXIT_FAILURE: i32 = 1;
/// Exit code for an unsupported subcommand or other usage error.
pub const EXIT_UNSUPPORTED: i32 = 128;

#[derive(Subcommand)]
enum Commands {
    /// Set up the .githooks directory and point git's core.hooksPath at it
    Init,
}

#[derive(Parser)]
#[command(about = "Lightweight git hooks: drop shell scripts in .githooks/ and git runs them.")]
#[command(author = "Tom Planche <tomplanche@proton.me>")]
#[command(help_template = "{name} {version}\n{about}\nMade by: {author}\n\nUSAGE:\n{usage}\n\n{all-args}\n")]
#[command(name = "githooks", version)]
pub struct Cli {
    /// Commands
    #[command(subcommand)]
    command: Option<Commands>,

    /// Print each installation step and where the global init script is looked up
    #[arg(short, long, global = true, default_value = "false")]
    verbose: bool,
}

/// # `run`
/// Runs the program with the process arguments.
///
/// ## Returns
/// The process exit code.
#[must_use]
pub fn run() -> i32 {
    run_from(std::env::args_os())
}

/// # `run_from`
/// Runs the program with explicit arguments (the first one being the binary name).
///
/// ## Returns
/// * `EXIT_OK` - usage printed, or `init` succeeded
/// * `EXIT_FAILURE` - `init` failed
/// * `EXIT_UNSUPPORTED` - unknown subcommand or flag
pub fn run_from<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(err) => return handle_parse_error(&err, &args),
    };

    match cli.command {
        None => {
            println!("{}", Cli::command().render_help());
            EXIT_OK
        }
        Some(Commands::Init) => {
            init_logger(cli.verbose);
            init_command(cli.verbose)
        }
    }
}

fn handle_parse_error(err: &clap::Error, args: &[OsString]) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            EXIT_OK
        }
        ErrorKind::InvalidSubcommand => {
            let command = err
                .get(ContextKind::InvalidSubcommand)
                .map(ToString::to_string)
                .or_else(|| first_positional(args))
                .unwrap_or_default();

            eprintln!("\"{command}\" command is not supported.");
            EXIT_UNSUPPORTED
        }
        _ => {
            let _ = err.print();
            EXIT_UNSUPPORTED
        }
    }
}

fn first_positional(args: &[OsString]) -> Option<String> {
    args.iter()
        .skip(1)
        .map(|arg| arg.to_string_lossy())
        .find(|arg| !arg.starts_with('-'))
        .map(|arg| arg.into_owned())
}

fn init_command(verbose: bool) -> i32 {
    let result = std::env::current_dir()
        .map_err(GitHooksError::from)
        .and_then(|cwd| hooks::init(&cwd));

    match result {
        Ok(installation) => {
            report_success(&installation, verbose);
            EXIT_OK
        }
        Err(err) => {
            report_error(&err);
            EXIT_FAILURE
        }
    }
}

fn report_success(installation: &Installation, verbose: bool) {
    let self_check = if installation.self_check_created {
        format!("created {}", installation.self_check_path().display())
    } else {
        format!("kept existing {}", installation.self_check_path().display())
    };

    print_success(
        "githooks installed",
        &format_list(&[
            format!("core.hooksPath set to {DISPATCH_DIRNAME}"),
            self_check,
            format!(
                "add hooks as executable scripts in {}",
                installation.hooks_dir.display()
            ),
        ]),
    );

    if verbose {
        let init_script = Config::new().map_or_else(
            |_| "<unresolved: set HOME or XDG_CONFIG_HOME>".to_string(),
            |config| config.init_script_path().display().to_string(),
        );

        print_info(
            "Runtime switches",
            &format_list(&[
                format!("{MODE_ENV}={MODE_SKIP} skips hooks"),
                format!("{MODE_ENV}={MODE_DEBUG} traces the dispatcher"),
                format!("global init script: {init_script}"),
            ]),
        );
    }
}

/// Typed git errors are echoed byte for byte, anything else by its message.
fn report_error(err: &GitHooksError) {
    if let Some(stderr) = err.stderr() {
        let mut handle = io::stderr().lock();
        let _ = handle.write_all(stderr);
        let _ = handle.flush();
    } else {
        print_error(&err.to_string(), "");
    }
}
