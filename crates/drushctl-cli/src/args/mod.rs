mod commands;

pub use commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "drushctl")]
#[command(about = "Site administration helpers built on Drush", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding config.toml (default: DRUSHCTL_PATH or the
    /// platform data directory)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}
