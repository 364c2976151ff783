use anyhow::Result;
use is_terminal::IsTerminal;
use std::path::Path;
use stockroom_runtime::{
    AppState, Config, LogConfig, ProductStore, load_catalog, resolve_config_path,
};
use tracing::{debug, info};

use super::args::{Cli, Commands, ConfigCommand, OutputFormat};
use super::handlers::{self, HandlerContext};
use super::logging::{self, LogTarget};
use crate::presentation::CurrencyFormatter;

pub fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref())?;

    // Auto-select the interactive screen if stdout is a TTY
    let command = cli.command.unwrap_or_else(|| {
        if std::io::stdout().is_terminal() {
            Commands::Tui
        } else {
            Commands::Summary {
                format: OutputFormat::Plain,
            }
        }
    });

    // init must work even when the existing file no longer parses
    if let Commands::Config {
        command: ConfigCommand::Init { force },
    } = command
    {
        let level = logging::resolve_level(cli.log_level, &LogConfig::default())?;
        logging::init(level, &LogTarget::Stderr)?;
        return handlers::config::init(&config_path, force);
    }

    let config = Config::load_from(&config_path)?;
    let level = logging::resolve_level(cli.log_level, &config.log)?;
    let target = match command {
        Commands::Tui => LogTarget::File(config.log_file()?),
        _ => LogTarget::Stderr,
    };
    logging::init(level, &target)?;
    debug!(path = %config_path.display(), "configuration resolved");

    match command {
        Commands::Config {
            command: ConfigCommand::Show,
        } => handlers::config::show(&config_path, &config),
        Commands::Config {
            command: ConfigCommand::Init { force },
        } => handlers::config::init(&config_path, force),

        Commands::Tui => {
            let state = load_state(&config, cli.catalog.as_deref())?;
            let currency = CurrencyFormatter::new(config.display.currency_rate);
            handlers::tui::handle(state, currency)
        }

        Commands::Summary { format } => {
            let state = load_state(&config, cli.catalog.as_deref())?;
            let ctx = HandlerContext::new(config.display.currency_rate);
            handlers::summary::handle(&ctx, &state, format)
        }

        Commands::List { search, format } => {
            let mut state = load_state(&config, cli.catalog.as_deref())?;
            let ctx = HandlerContext::new(config.display.currency_rate);
            handlers::list::handle(&ctx, &mut state, search, format)
        }
    }
}

fn load_state(config: &Config, catalog: Option<&Path>) -> Result<AppState> {
    let products = load_catalog(&config.catalog, catalog)?;
    info!(count = products.len(), "catalog ready");
    Ok(AppState::new(ProductStore::new(products)))
}
