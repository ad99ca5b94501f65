use clap::Parser;
use std::path::{Path, PathBuf};

/// Rusty DU - Show what is taking up space in a directory
#[derive(Parser, Debug)]
#[command(name = "rusty-du")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File or directory to analyze (only the first is used)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Include hidden files and directories
    #[arg(short, long)]
    pub all: bool,

    /// Parallel scan workers
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Don't show the progress line while scanning
    #[arg(long)]
    pub no_progress: bool,

    /// Path to configuration file
    #[arg(short, long, value_name = "PATH", env = "RUSTY_DU_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// The scan target: the first positional path, or the current directory.
    pub fn target(&self) -> &Path {
        self.paths
            .first()
            .map(PathBuf::as_path)
            .unwrap_or_else(|| Path::new("."))
    }
}
