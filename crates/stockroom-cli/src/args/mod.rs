mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stockroom")]
#[command(about = "Track products, stock levels and inventory value", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $STOCKROOM_CONFIG, then the user config directory)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// JSON product list to start from instead of the built-in catalog
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
