use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Prepare a CSV transaction file from your bank for import into YNAB
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// CSV transaction file from your bank. Asked for if not given.
    #[arg(short = 'f', long = "file")]
    pub csv_file: Option<PathBuf>,

    /// YAML file with saved field mappings
    #[arg(short = 'c', long = "config")]
    pub config_file: Option<PathBuf>,

    /// Directory to write the converted file to [default: current directory]
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Repeat for debug messaging
    #[arg(short, long, action = ArgAction::Count)]
    pub verbosity: u8,
}

pub fn parse() -> Args {
    Args::parse()
}
