//! # hello-demo-cli
//!
//! Command-line adapter around [`hello_demo_core`].
//!
//! An invocation is a single linear pass: parse the arguments, compute the
//! greeting, print it, and return the process exit code. Help requests are
//! printed to stdout without reaching the greeter; argument errors go to
//! stderr with exit code 2.
//!
//! Parsing is lenient in two ways: a repeated `--name` keeps the last value,
//! and any unambiguous prefix of a long flag (`--na`) is accepted.

mod error;
pub mod logging;

pub use error::{CliError, FAILURE_EXIT_CODE, Result, USAGE_EXIT_CODE};

use clap::Parser;
use clap::error::ErrorKind;
use hello_demo_core::{effective_name, greet};
use std::ffi::OsString;
use std::io::Write;
use tracing::debug;

/// One-line description shown by `--help`.
pub const DESCRIPTION: &str = "Say hello from hello-demo-pkg.";

/// Parsed `hello-demo` command line.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "hello-demo",
    about = DESCRIPTION,
    long_about = None,
    args_override_self = true,
    infer_long_args = true
)]
pub struct Cli {
    /// Name to greet [default: world]
    #[arg(short, long)]
    pub name: Option<String>,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// What a successfully parsed command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Print the greeting for the parsed name.
    Greet(Cli),
    /// Print help text as-is.
    Display(String),
}

impl Invocation {
    /// Whether debug diagnostics were requested.
    pub fn verbose(&self) -> bool {
        match self {
            Invocation::Greet(cli) => cli.verbose,
            Invocation::Display(_) => false,
        }
    }
}

/// Parses process arguments; the first item is the program name.
pub fn parse_args<I, T>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Invocation::Greet(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp => Ok(Invocation::Display(err.render().to_string())),
            _ => Err(CliError::InvalidArguments(err)),
        },
    }
}

/// Writes the greeting, or the help text, to `stdout`.
pub fn execute(invocation: &Invocation, stdout: &mut impl Write) -> Result<()> {
    match invocation {
        Invocation::Greet(cli) => {
            let name = cli.name.as_deref();
            debug!(name = effective_name(name), "Greeting");
            let greeting = greet(name);
            debug!(%greeting, "Formatted greeting");
            writeln!(stdout, "{greeting}")?;
        }
        Invocation::Display(text) => {
            write!(stdout, "{text}")?;
        }
    }
    stdout.flush()?;
    Ok(())
}

/// Writes `error` to `stderr` and returns the exit code for it.
pub fn report(error: &CliError, stderr: &mut impl Write) -> u8 {
    let code = error.exit_code();
    debug!(code, "Invocation failed");
    // Nothing left to report to if stderr itself is gone.
    let _ = match error {
        CliError::InvalidArguments(err) => write!(stderr, "{}", err.render()),
        CliError::Output(_) => writeln!(stderr, "Error: {error}"),
    };
    let _ = stderr.flush();
    code
}

/// Runs one invocation against the given streams and returns its exit code.
pub fn run<I, T>(args: I, stdout: &mut impl Write, stderr: &mut impl Write) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let result = parse_args(args).and_then(|invocation| execute(&invocation, stdout));
    match result {
        Ok(()) => 0,
        Err(err) => report(&err, stderr),
    }
}
