use std::process::ExitCode;

use clap::Parser;
use env_logger::init;
use typelens_cli::cli::Cli;

fn main() -> ExitCode {
    init();
    Cli::parse().command.run()
}
