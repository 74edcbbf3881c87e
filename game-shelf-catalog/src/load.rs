//! Session data loading.
//!
//! The three startup resources (catalog, link overrides, cover map)
//! are fetched concurrently and jointly awaited before the first
//! render. A failed override or cover fetch degrades to an empty map;
//! a failed catalog fetch leaves the catalog empty. Neither is fatal
//! and nothing past this boundary ever sees a load error.
//!
//! There is no cancellation of in-flight fetches and no late merge: a
//! cover map that resolves after assembly is simply never incorporated.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

use crate::slug::IGDB_GAMES_URL;
use crate::types::{Catalog, LinkMap, SessionData};

/// Resource file names, shared by the HTTP and directory loaders.
pub const CATALOG_FILE: &str = "games.json";
pub const LINKS_FILE: &str = "links.json";
pub const COVERS_FILE: &str = "igdb-map.json";

/// IGDB image CDN prefix for cover thumbnails referenced by image id.
const IGDB_COVER_URL: &str = "https://images.igdb.com/igdb/image/upload/t_cover_small/";

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors from loading a single resource. Absorbed (and logged) during
/// session assembly; exposed for callers that fetch resources
/// individually, like the CLI's `fetch` command.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} fetching {url}")]
    Status { status: u16, url: String },

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("JSON parse error in {name}: {source}")]
    Parse {
        name: String,
        source: serde_json::Error,
    },
}

/// Build the HTTP client used for session loading.
pub fn default_client() -> Result<reqwest::Client, LoadError> {
    Ok(reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?)
}

/// Fetch one JSON resource relative to `base_url`.
pub async fn fetch_json(
    client: &reqwest::Client,
    base_url: &str,
    name: &str,
) -> Result<Value, LoadError> {
    let url = format!("{}/{}", base_url.trim_end_matches('/'), name);
    let resp = client.get(&url).send().await?;
    if !resp.status().is_success() {
        return Err(LoadError::Status {
            status: resp.status().as_u16(),
            url,
        });
    }
    let text = resp.text().await?;
    serde_json::from_str(&text).map_err(|e| LoadError::Parse {
        name: name.to_string(),
        source: e,
    })
}

/// Load a session by fetching all three resources concurrently.
pub async fn load_session(client: &reqwest::Client, base_url: &str) -> SessionData {
    let (catalog, links, covers) = tokio::join!(
        fetch_json(client, base_url, CATALOG_FILE),
        fetch_json(client, base_url, LINKS_FILE),
        fetch_json(client, base_url, COVERS_FILE),
    );
    assemble(catalog, links, covers)
}

/// Load a session from JSON files in a local data directory.
pub fn load_dir(dir: &Path) -> SessionData {
    assemble(
        read_json(dir, CATALOG_FILE),
        read_json(dir, LINKS_FILE),
        read_json(dir, COVERS_FILE),
    )
}

fn read_json(dir: &Path, name: &str) -> Result<Value, LoadError> {
    let path = dir.join(name);
    let contents = std::fs::read_to_string(&path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_json::from_str(&contents).map_err(|e| LoadError::Parse {
        name: name.to_string(),
        source: e,
    })
}

/// Assemble a session from the three per-resource results, degrading
/// each failure to an empty (but well-typed) input.
fn assemble(
    catalog: Result<Value, LoadError>,
    links: Result<Value, LoadError>,
    covers: Result<Value, LoadError>,
) -> SessionData {
    let catalog = match catalog {
        Ok(value) => decode_catalog(&value),
        Err(e) => {
            log::warn!("Failed to load catalog: {e}");
            Catalog::default()
        }
    };
    let overrides = match links {
        Ok(value) => decode_overrides(&value),
        Err(e) => {
            log::warn!("Failed to load link overrides: {e}");
            LinkMap::default()
        }
    };
    let covers = match covers {
        Ok(value) => decode_covers(&value),
        Err(e) => {
            log::warn!("Failed to load cover map: {e}");
            LinkMap::default()
        }
    };

    SessionData {
        catalog,
        overrides,
        covers,
    }
}

/// Decode the catalog resource.
///
/// A platform whose value is not an array decodes as an empty title
/// list; non-string items within an array are skipped. Both cases are
/// logged, neither is fatal.
pub fn decode_catalog(value: &Value) -> Catalog {
    let Some(map) = value.as_object() else {
        log::warn!("Catalog root is not an object; treating as empty");
        return Catalog::default();
    };

    let mut platforms = HashMap::with_capacity(map.len());
    for (platform, titles) in map {
        let list: Vec<String> = match titles.as_array() {
            Some(arr) => arr
                .iter()
                .filter_map(|t| t.as_str().map(str::to_string))
                .collect(),
            None => {
                log::warn!("Platform {platform:?} is not a title list; treating as empty");
                Vec::new()
            }
        };
        platforms.insert(platform.clone(), list);
    }

    Catalog { platforms }
}

/// Decode the link override resource.
pub fn decode_overrides(value: &Value) -> LinkMap {
    decode_link_map(value, EntryKind::Link)
}

/// Decode the cover map resource.
pub fn decode_covers(value: &Value) -> LinkMap {
    decode_link_map(value, EntryKind::Cover)
}

#[derive(Clone, Copy)]
enum EntryKind {
    Link,
    Cover,
}

fn decode_link_map(value: &Value, kind: EntryKind) -> LinkMap {
    let Some(map) = value.as_object() else {
        return LinkMap::new();
    };

    let mut out = LinkMap::new();
    for (platform, entries) in map {
        let Some(entries) = entries.as_object() else {
            continue;
        };
        let mut urls = HashMap::new();
        for (title, entry) in entries {
            if let Some(url) = entry_url(entry, kind) {
                urls.insert(title.clone(), url);
            }
        }
        if !urls.is_empty() {
            out.insert(platform.clone(), urls);
        }
    }
    out
}

/// Extract a URL from one map entry.
///
/// Entries are either plain URL strings or the IGDB map object form
/// (`{"slug": …, "coverImageId": …}`) produced by the map-building
/// tooling. Absent, empty, and other-typed values all mean "no value".
fn entry_url(entry: &Value, kind: EntryKind) -> Option<String> {
    match entry {
        Value::String(url) if !url.is_empty() => Some(url.clone()),
        Value::Object(fields) => {
            let field = match kind {
                EntryKind::Link => "slug",
                EntryKind::Cover => "coverImageId",
            };
            let id = fields.get(field)?.as_str()?;
            if id.is_empty() {
                return None;
            }
            Some(match kind {
                EntryKind::Link => format!("{IGDB_GAMES_URL}{id}"),
                EntryKind::Cover => format!("{IGDB_COVER_URL}{id}.jpg"),
            })
        }
        _ => None,
    }
}
