use game_shelf_catalog::SessionData;
use owo_colors::{OwoColorize, Stream::Stdout};

use crate::error::CliError;

/// List every platform in the catalog with its title count.
pub(crate) fn run(session: &SessionData) -> Result<(), CliError> {
    if session.catalog.is_empty() {
        println!("No platforms in the catalog.");
        println!("Run 'game-shelf fetch' to download the catalog data first.");
        return Ok(());
    }

    let mut names: Vec<&str> = session.catalog.platform_names().collect();
    names.sort_by_key(|name| name.to_lowercase());

    for name in &names {
        let count = session.catalog.titles(name).len();
        let noun = if count == 1 { "title" } else { "titles" };
        println!(
            "  {}  {}",
            name.if_supports_color(Stdout, |t| t.cyan()),
            format!("({count} {noun})").if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    println!(
        "\n{} platforms, {} titles total",
        names.len(),
        session.catalog.title_count()
    );
    Ok(())
}
