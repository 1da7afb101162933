//! # hello-demo
//!
//! Binary entry point: parses the command line, sets up logging, prints the
//! greeting.

use hello_demo_cli::logging::init_logging;
use hello_demo_cli::{execute, parse_args, report};
use std::io::{stderr, stdout};
use std::process::ExitCode;

fn main() -> ExitCode {
    let invocation = match parse_args(std::env::args_os()) {
        Ok(invocation) => invocation,
        Err(err) => return ExitCode::from(report(&err, &mut stderr().lock())),
    };

    init_logging(invocation.verbose());

    match execute(&invocation, &mut stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(report(&err, &mut stderr().lock())),
    }
}
