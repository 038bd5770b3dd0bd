//! Command-line interface definition.

use crate::config::FilterConfig;
use crate::options::{LineMode, ReaderOptions};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fastq_remove_ids",
    version,
    about = "Removes certain IDs from a FASTQ file",
    long_about = "Removes certain IDs from a FASTQ file. IDs must be exactly as they \
                  appear in the FASTQ file (including /1 or /2 if necessary)."
)]
pub struct Cli {
    /// Text file with the list of IDs to remove
    #[arg(value_name = "ACCNOS")]
    pub accnos: PathBuf,

    /// Input FASTQ file (plain or .gz). Default is STDIN
    #[arg(short = 'i', long, value_name = "FASTQ")]
    pub input_fastq: Option<PathBuf>,

    /// Output FASTQ file (.gz compresses). Default is STDOUT
    #[arg(short = 'o', long, value_name = "FASTQ")]
    pub output_fastq: Option<PathBuf>,

    /// Accept sequence and quality wrapped over several lines
    #[arg(long)]
    pub multi_line: bool,

    /// Log progress to stderr (-vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    pub fn to_config(&self) -> FilterConfig {
        let line_mode = if self.multi_line {
            LineMode::Multi
        } else {
            LineMode::Single
        };
        let mut cfg =
            FilterConfig::new(&self.accnos).reader(ReaderOptions::with_line_mode(line_mode));
        if let Some(input) = &self.input_fastq {
            cfg = cfg.input(input);
        }
        if let Some(output) = &self.output_fastq {
            cfg = cfg.output(output);
        }
        cfg
    }
}
