//! Bitga CLI - evolve bit-string populations against a demo objective.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::Parser;
use std::process::ExitCode;

/// Bitga - a binary-encoded genetic algorithm engine
#[derive(Parser, Debug)]
#[command(name = "bitga")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Population size (must be even)
    #[arg(short, long, default_value = "50")]
    population: usize,

    /// Number of generations to run
    #[arg(short, long, default_value = "200")]
    generations: usize,

    /// Random seed (default: derived from system time)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    format: cli::OutputFormat,

    /// Suppress the per-generation progress bar
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match cli::run::execute(args.population, args.generations, args.seed, args.format, args.quiet)
    {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
