use std::fs;

use serde_json::json;

use game_shelf_catalog::{decode_catalog, decode_covers, decode_overrides, load_dir};

#[test]
fn catalog_decodes_platform_lists_in_order() {
    let value = json!({
        "SNES": ["Chrono Trigger", "EarthBound", "Chrono Trigger"],
        "NES": []
    });
    let catalog = decode_catalog(&value);
    // Order and duplicates are preserved; duplicates are independent entries.
    assert_eq!(
        catalog.titles("SNES"),
        ["Chrono Trigger", "EarthBound", "Chrono Trigger"]
    );
    assert!(catalog.titles("NES").is_empty());
    assert_eq!(catalog.title_count(), 3);
}

#[test]
fn malformed_platform_entry_decodes_as_empty_list() {
    let value = json!({
        "SNES": ["Chrono Trigger"],
        "NES": "not a list",
        "N64": { "nested": true }
    });
    let catalog = decode_catalog(&value);
    assert_eq!(catalog.titles("SNES"), ["Chrono Trigger"]);
    assert!(catalog.titles("NES").is_empty());
    assert!(catalog.titles("N64").is_empty());
}

#[test]
fn non_string_titles_are_skipped() {
    let value = json!({ "SNES": ["Chrono Trigger", 42, null, "EarthBound"] });
    let catalog = decode_catalog(&value);
    assert_eq!(catalog.titles("SNES"), ["Chrono Trigger", "EarthBound"]);
}

#[test]
fn non_object_catalog_root_is_empty() {
    assert!(decode_catalog(&json!(["SNES"])).is_empty());
    assert!(decode_catalog(&json!(null)).is_empty());
}

#[test]
fn override_entries_accept_strings_and_igdb_objects() {
    let value = json!({
        "SNES": {
            "Chrono Trigger": "https://www.igdb.com/games/chrono-trigger",
            "EarthBound": { "id": 1036, "slug": "earthbound", "coverImageId": "co1y07" },
            "Empty": "",
            "Nothing": null
        }
    });
    let overrides = decode_overrides(&value);
    let snes = overrides.get("SNES").expect("platform decoded");
    assert_eq!(
        snes.get("Chrono Trigger").map(String::as_str),
        Some("https://www.igdb.com/games/chrono-trigger")
    );
    assert_eq!(
        snes.get("EarthBound").map(String::as_str),
        Some("https://www.igdb.com/games/earthbound")
    );
    assert!(!snes.contains_key("Empty"));
    assert!(!snes.contains_key("Nothing"));
}

#[test]
fn cover_entries_build_image_cdn_urls() {
    let value = json!({
        "SNES": {
            "EarthBound": { "id": 1036, "slug": "earthbound", "coverImageId": "co1y07" },
            "No Cover": { "id": 99, "slug": "no-cover", "coverImageId": null }
        }
    });
    let covers = decode_covers(&value);
    let snes = covers.get("SNES").expect("platform decoded");
    assert_eq!(
        snes.get("EarthBound").map(String::as_str),
        Some("https://images.igdb.com/igdb/image/upload/t_cover_small/co1y07.jpg")
    );
    assert!(!snes.contains_key("No Cover"));
}

#[test]
fn load_dir_degrades_missing_optional_resources() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("games.json"),
        r#"{"SNES": ["Chrono Trigger", "EarthBound"]}"#,
    )
    .expect("write games.json");
    // No links.json or igdb-map.json on disk.

    let session = load_dir(dir.path());
    assert_eq!(session.catalog.title_count(), 2);
    assert!(session.overrides.is_empty());
    assert!(session.covers.is_empty());
    assert_eq!(session.cover_url("SNES", "Chrono Trigger"), None);
}

#[test]
fn load_dir_with_unreadable_catalog_is_empty_but_usable() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("games.json"), "{ not json").expect("write games.json");

    let session = load_dir(dir.path());
    assert!(session.catalog.is_empty());
}
