mod cli_types;
mod commands;
mod error;
mod settings;
mod sink;

use clap::Parser;
use game_shelf_catalog::{CATALOG_FILE, SessionData, default_client, load_dir, load_session};
use indicatif::{ProgressBar, ProgressStyle};

use cli_types::{Cli, Commands};
use error::CliError;
use settings::Settings;

fn main() {
    let cli = Cli::parse();

    let level = if cli.quiet {
        log::LevelFilter::Warn
    } else if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let settings = Settings::resolve(cli)?;

    match &cli.command {
        Commands::Fetch => commands::fetch::run(&settings),
        Commands::Platforms => commands::platforms::run(&load(&settings)?),
        Commands::Resolve { platform, title } => {
            commands::resolve::run(&load(&settings)?, platform, title)
        }
        Commands::List {
            filters,
            batch,
            covers,
            no_prompt,
        } => commands::list::run(&load(&settings)?, filters, *batch, *covers, *no_prompt),
        Commands::Browse { filters, batch } => {
            commands::browse::run(&load(&settings)?, filters, *batch)
        }
    }
}

/// Load the session: a local catalog in the data directory wins;
/// otherwise fetch from the configured base URL. With neither, the
/// directory loader still runs so the per-resource warnings explain
/// what is missing.
fn load(settings: &Settings) -> Result<SessionData, CliError> {
    if settings.data_dir.join(CATALOG_FILE).is_file() {
        return Ok(load_dir(&settings.data_dir));
    }

    let Some(base_url) = settings.base_url.as_deref() else {
        return Ok(load_dir(&settings.data_dir));
    };

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|"),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb.set_message(format!("Loading catalog from {base_url}..."));

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let session = rt.block_on(async {
        let client = default_client()?;
        Ok::<SessionData, CliError>(load_session(&client, base_url).await)
    });
    pb.finish_and_clear();
    session
}
