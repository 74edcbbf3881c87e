//! CLI type definitions: command enum and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "game-shelf")]
#[command(about = "Browse a game catalog and resolve titles to IGDB links", long_about = None)]
pub(crate) struct Cli {
    /// Directory holding games.json, links.json, and igdb-map.json
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Base URL to fetch the catalog resources from when the data
    /// directory has no catalog
    #[arg(short, long, global = true)]
    pub base_url: Option<String>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Common arguments for commands that filter the catalog.
#[derive(Args, Clone)]
pub(crate) struct FilterArgs {
    /// Only consider this platform
    #[arg(short, long)]
    pub platform: Option<String>,

    /// Case-insensitive substring to match titles against
    #[arg(short, long)]
    pub search: Option<String>,

    /// Starting letter (A-Z), or '#' for titles not starting with a letter
    #[arg(short, long)]
    pub letter: Option<char>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List platforms and their title counts
    Platforms,

    /// List filtered titles with their resolved links
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Items to print per batch
        #[arg(long, default_value_t = game_shelf_browse::DEFAULT_BATCH_SIZE)]
        batch: usize,

        /// Also print cover preview URLs where available
        #[arg(long)]
        covers: bool,

        /// Print every batch without prompting between them
        #[arg(short = 'y', long)]
        no_prompt: bool,
    },

    /// Resolve one title to its external reference URL
    Resolve {
        /// Platform the title belongs to
        platform: String,

        /// Title as it appears in the catalog
        title: String,
    },

    /// Browse interactively with incremental search
    Browse {
        #[command(flatten)]
        filters: FilterArgs,

        /// Items to print per batch
        #[arg(long, default_value_t = 20)]
        batch: usize,
    },

    /// Download the catalog resources into the data directory
    Fetch,
}
