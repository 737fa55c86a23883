//! Duckies - command-line tool for generating procedural duck sprites

use std::process::ExitCode;

use duckies::cli;

fn main() -> ExitCode {
    cli::run()
}
