mod commands;
mod common;
mod enums;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "pitwall")]
#[command(about = "Lap telemetry analytics and race strategy hints", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "~/.pitwall", global = true)]
    pub data_dir: String,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}
