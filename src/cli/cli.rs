use std::path::PathBuf;

use clap::Parser;

use crate::cli::LogLevel;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Replay a scenario against an in-memory namespace")]
pub struct Cli {
    /// The scenario file to run
    pub scenario: PathBuf,
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}
