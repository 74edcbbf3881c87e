//! Download the catalog resources into the local data directory.

use std::path::Path;

use game_shelf_catalog::{CATALOG_FILE, COVERS_FILE, LINKS_FILE, default_client, fetch_json};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Stream::Stdout};

use crate::error::CliError;
use crate::settings::Settings;

/// Fetch all three resources from the configured base URL and write
/// them into the data directory. The catalog is required; the override
/// and cover maps are optional and only warn on failure.
pub(crate) fn run(settings: &Settings) -> Result<(), CliError> {
    let base_url = settings.base_url.as_deref().ok_or(CliError::NoBaseUrl)?;
    std::fs::create_dir_all(&settings.data_dir)?;

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    rt.block_on(async {
        let client = default_client()?;

        fetch_one(&client, base_url, CATALOG_FILE, &settings.data_dir).await?;
        for name in [LINKS_FILE, COVERS_FILE] {
            if let Err(e) = fetch_one(&client, base_url, name, &settings.data_dir).await {
                log::warn!("Skipping optional resource {name}: {e}");
            }
        }
        Ok::<(), CliError>(())
    })?;

    println!(
        "{} Catalog data written to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        settings.data_dir.display()
    );
    Ok(())
}

async fn fetch_one(
    client: &reqwest::Client,
    base_url: &str,
    name: &str,
    data_dir: &Path,
) -> Result<(), CliError> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|"),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb.set_message(format!("Fetching {name}..."));

    let result = fetch_json(client, base_url, name).await;
    pb.finish_and_clear();

    let value = result?;
    std::fs::write(data_dir.join(name), serde_json::to_string_pretty(&value)?)?;
    println!("  Fetched {name}");
    Ok(())
}
