pub mod cli;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod scrape;
pub mod transport;
pub mod xml;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

pub use client::CatalogClient;
pub use config::Config;
pub use error::CatalogError;
pub use models::{Episode, PipeList, Series};
pub use transport::{HttpTransport, Transport, TransportError};

pub async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate()?;

    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let fmt_layer = tracing_subscriber::fmt::layer();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Search { query }) => cli::cmd_search(&config, &query.join(" ")).await,

        Some(Commands::Info { id }) => cli::cmd_info(&config, id).await,

        Some(Commands::Episodes { id, season }) => cli::cmd_episodes(&config, id, season).await,

        Some(Commands::Lookup { imdb_id }) => cli::cmd_lookup(&config, &imdb_id).await,

        Some(Commands::Web { query, max_results }) => {
            cli::cmd_web_search(&config, &query.join(" "), max_results).await
        }

        Some(Commands::Init) => {
            if Config::create_default_if_missing()? {
                println!("✓ Config file created. Edit config.toml and set your API key.");
            } else {
                println!("config.toml already exists.");
            }
            Ok(())
        }

        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
