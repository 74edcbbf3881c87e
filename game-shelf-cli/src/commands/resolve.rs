use game_shelf_catalog::{SessionData, alias_slug, clean_title, normalization_key, slug};
use owo_colors::{OwoColorize, Stream::Stdout};

use crate::error::CliError;

/// Resolve one title and show how the URL was derived.
pub(crate) fn run(session: &SessionData, platform: &str, title: &str) -> Result<(), CliError> {
    if !session.catalog.titles(platform).iter().any(|t| t == title) {
        log::warn!("{title:?} is not in the {platform:?} catalog; resolving anyway");
    }

    let url = slug::resolve(session, platform, title);
    let method = if session.override_url(platform, title).is_some() {
        "override"
    } else if alias_slug(&normalization_key(&clean_title(title))).is_some() {
        "alias"
    } else {
        "generated"
    };

    println!(
        "{}  {}",
        url.if_supports_color(Stdout, |t| t.blue()),
        format!("[{method}]").if_supports_color(Stdout, |t| t.dimmed()),
    );
    if let Some(cover) = session.cover_url(platform, title) {
        println!("cover: {}", cover.if_supports_color(Stdout, |t| t.dimmed()));
    }
    Ok(())
}
