use clap::Subcommand;

use super::enums::{ListFormat, OutputFormat};

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive dashboard and product table (default on a terminal)")]
    Tui,

    #[command(about = "Print inventory metrics and the per-category breakdown")]
    Summary {
        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    #[command(about = "Print the product table, optionally filtered")]
    List {
        #[arg(long, help = "Case-insensitive match on name, SKU or category")]
        search: Option<String>,

        #[arg(long, default_value = "plain")]
        format: ListFormat,
    },

    #[command(about = "Inspect or create the configuration file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Show the resolved config path and effective settings")]
    Show,

    #[command(about = "Write a config file with default settings")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}
