use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Environment variable naming the file to open when `--file` is absent
pub const FILE_ENV: &str = "TODOMD_FILE";

#[derive(Parser, Debug)]
#[command(
    name = "todomd",
    about = concat!("todomd v", env!("CARGO_PKG_VERSION"), " - checklists in plain markdown"),
    version,
    disable_version_flag = true
)]
pub struct Cli {
    /// Path to the markdown todo file (overrides TODOMD_FILE)
    #[arg(short = 'f', long = "file", env = FILE_ENV)]
    pub file: Option<PathBuf>,

    /// Comma-separated file paths for the back-navigation stack, oldest first
    #[arg(long = "return", value_name = "PATHS", value_delimiter = ',')]
    pub return_paths: Vec<String>,

    /// Print the recovery log path and entry count, then exit
    #[arg(long)]
    pub recovery: bool,

    /// Show version information
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,
}
