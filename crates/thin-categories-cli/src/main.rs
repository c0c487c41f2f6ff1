use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use thin_categories_core::{generate_report, AnalysisConfig, Result};

mod args;
use args::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Flush even on failure so the partial report precedes the error
    let result = generate_report(&cli.input, &cli.output, &AnalysisConfig::default(), &mut out);
    out.flush()?;
    result.map(|_| ())
}
