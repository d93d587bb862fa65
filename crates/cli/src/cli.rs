//! CLI definitions and command dispatch.

use std::{io, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use typelens_finder::FontFinder;
use typelens_name_report::{BatchStatus, DEFAULT_WIDTH, ReportOptions, run};

#[derive(Parser)]
#[command(name = "typelens")]
#[command(about = "Inspect font naming metadata")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Args)]
pub struct NamesArgs {
    /// Font file, or directory containing fonts.
    pub input_path: PathBuf,

    /// Maximum number of lines printed for each record value.
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_lines: Option<u32>,

    /// Print only a curated subset of well-known name IDs.
    #[arg(short, long)]
    pub minimal: bool,

    /// Also search subdirectories for fonts.
    #[arg(short, long)]
    pub recursive: bool,

    /// Report width in columns.
    #[arg(short, long, default_value_t = DEFAULT_WIDTH as u32,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the name table of each discovered font.
    Names {
        #[command(flatten)]
        args: NamesArgs,
    },
}

impl Commands {
    pub fn run(self) -> ExitCode {
        let status = match self {
            Commands::Names { args } => print_names(&args),
        };
        match status {
            Ok(BatchStatus::Success) => ExitCode::SUCCESS,
            Ok(BatchStatus::Partial) => ExitCode::from(1),
            Ok(BatchStatus::Failure) => ExitCode::from(2),
            Err(e) => {
                eprintln!("Error: {e:#}");
                ExitCode::from(2)
            }
        }
    }
}

fn print_names(args: &NamesArgs) -> Result<BatchStatus> {
    let options = ReportOptions::new(
        args.width as usize,
        args.minimal,
        args.max_lines.map(|v| v as usize),
    )?;

    let finder = FontFinder::new(&args.input_path)
        .with_context(|| format!("cannot read {}", args.input_path.display()))?
        .recursive(args.recursive);
    let fonts = finder.fonts()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = run(fonts, &options, &mut out)?;
    if outcome.failed > 0 {
        log::warn!("{} of {} font(s) could not be reported", outcome.failed, outcome.total());
    }
    Ok(outcome.status())
}
