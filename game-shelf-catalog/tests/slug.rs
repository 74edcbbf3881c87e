use std::collections::HashMap;

use game_shelf_catalog::slug::resolve_title;
use game_shelf_catalog::{
    IGDB_GAMES_URL, LinkMap, SessionData, clean_title, generate_slug, normalization_key, resolve,
};

fn session_with_override(platform: &str, title: &str, url: &str) -> SessionData {
    let mut titles = HashMap::new();
    titles.insert(title.to_string(), url.to_string());
    let mut overrides = LinkMap::new();
    overrides.insert(platform.to_string(), titles);
    SessionData {
        overrides,
        ..SessionData::default()
    }
}

#[test]
fn override_returned_verbatim() {
    let url = "https://www.igdb.com/games/some-hand-picked-slug?utm=kept";
    let session = session_with_override("SNES", "Chrono Trigger (Japan)", url);
    assert_eq!(resolve(&session, "SNES", "Chrono Trigger (Japan)"), url);
}

#[test]
fn override_beats_alias() {
    let url = "https://example.com/elsewhere";
    let session = session_with_override("SNES", "U.N. Squadron", url);
    assert_eq!(resolve(&session, "SNES", "U.N. Squadron"), url);
}

#[test]
fn no_override_falls_through_to_slug() {
    let session = SessionData::default();
    assert_eq!(
        resolve(&session, "SNES", "Chrono Trigger (Japan)"),
        format!("{IGDB_GAMES_URL}chrono-trigger")
    );
}

#[test]
fn alias_wins_over_naive_slug() {
    // Naive slugging of "U.N. Squadron" and the curated slug happen to
    // agree; "The Lion King" does not, and the alias must win.
    assert_eq!(
        resolve_title("U.N. Squadron"),
        format!("{IGDB_GAMES_URL}u-n-squadron")
    );
    assert_eq!(
        resolve_title("Lion King, The (USA)"),
        format!("{IGDB_GAMES_URL}the-lion-king--1")
    );
}

#[test]
fn bracketed_groups_dropped_before_slugging() {
    assert_eq!(clean_title("Chrono Trigger (Japan)"), "Chrono Trigger");
    assert_eq!(clean_title("Doom [b] {proto}"), "Doom");
    assert_eq!(
        clean_title("Mega Man X (USA) (Rev 1) [!]"),
        "Mega Man X"
    );
}

#[test]
fn combined_titles_keep_first_half() {
    assert_eq!(
        clean_title("Sonic & Knuckles / Sonic The Hedgehog 3"),
        "Sonic & Knuckles"
    );
}

#[test]
fn unclosed_group_passes_through() {
    assert_eq!(clean_title("Broken (data"), "Broken (data");
}

#[test]
fn trademark_glyphs_stripped() {
    assert_eq!(clean_title("Tetris\u{2122}"), "Tetris");
    assert_eq!(clean_title("Sonic\u{00AE}  Adventure"), "Sonic Adventure");
}

#[test]
fn ampersand_and_plus_expand_to_words() {
    assert_eq!(generate_slug("Sonic & Knuckles"), "sonic-and-knuckles");
    assert_eq!(generate_slug("Mario + Rabbids"), "mario-plus-rabbids");
}

#[test]
fn diacritics_stripped() {
    assert_eq!(generate_slug("Pokémon Snap"), "pokemon-snap");
    assert_eq!(normalization_key("Pokémon Snap"), "pokemonsnap");
}

#[test]
fn slug_alphabet_invariant() {
    let inputs = [
        "  --Weird--  Input!!  ",
        "...",
        "A (B) [C] {D} E",
        "Ys III: Wanderers from Ys",
        "R-Type III",
        "007: The World Is Not Enough",
    ];
    for input in inputs {
        let slug = generate_slug(&clean_title(input));
        assert!(
            slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "bad char in slug {slug:?} for {input:?}"
        );
        assert!(!slug.starts_with('-'), "leading hyphen in {slug:?}");
        assert!(!slug.ends_with('-'), "trailing hyphen in {slug:?}");
        assert!(!slug.contains("--"), "double hyphen in {slug:?}");
    }
}

#[test]
fn empty_after_cleaning_yields_empty_slug_segment() {
    // Defined boundary behavior: the base URL with nothing appended.
    assert_eq!(resolve_title("(Japan) [!]"), IGDB_GAMES_URL);
    assert_eq!(generate_slug(""), "");
}

#[test]
fn resolution_is_deterministic() {
    let session = SessionData::default();
    let a = resolve(&session, "Any", "Sonic & Knuckles (World)");
    let b = resolve(&session, "Any", "Sonic & Knuckles (World)");
    assert_eq!(a, b);
}
