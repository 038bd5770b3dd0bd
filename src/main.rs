use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use fastq_remove_ids::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(cli.log_level())).init();

    if let Err(e) = fastq_remove_ids::run(&cli.to_config()) {
        eprintln!("Error: {e:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
