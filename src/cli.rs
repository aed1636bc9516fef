use std::path::PathBuf;

use clap::Parser;

/// Three-pane terminal dashboard for day-to-day task tracking
#[derive(Parser, Debug)]
#[command(name = "acc", version, about)]
pub struct Cli {
    /// Use DIR instead of the per-user data directory
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}
