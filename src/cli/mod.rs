//! CLI module - Command-line interface for the catalog client

mod commands;

use clap::{Parser, Subcommand};

/// tvdb - TheTVDB catalog client
#[derive(Parser)]
#[command(name = "tvdb")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search for series by name
    #[command(alias = "s")]
    Search {
        /// Search query
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Show details about a series, including its season layout
    #[command(alias = "i")]
    Info {
        /// Series ID
        id: u64,
    },

    /// List episodes of a series grouped by season
    #[command(alias = "eps")]
    Episodes {
        /// Series ID
        id: u64,
        /// Only show this season
        #[arg(long)]
        season: Option<u64>,
    },

    /// Look up a series by its IMDB id
    Lookup {
        /// IMDB id (e.g. tt0096697)
        imdb_id: String,
    },

    /// Search using the website's search page
    #[command(alias = "w")]
    Web {
        /// Search query
        #[arg(required = true)]
        query: Vec<String>,
        /// Maximum number of results (0 or less for no cap)
        #[arg(long)]
        max_results: Option<i32>,
    },

    /// Create default config file
    Init,
}

pub use commands::*;
