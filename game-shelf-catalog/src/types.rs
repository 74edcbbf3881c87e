//! Data model types for a browsing session.
//!
//! These types represent the three resources loaded once at startup:
//! the catalog itself, the explicit link override map, and the cover
//! map. All three are immutable for the lifetime of the session.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Two-level `Platform → Title → absolute URL` mapping.
///
/// Used for both link overrides and cover previews. Both levels are
/// optional; an absent platform or title simply means "no value".
pub type LinkMap = HashMap<String, HashMap<String, String>>;

/// A game catalog partitioned by platform.
///
/// Title order within a platform is significant and preserved through
/// filtering. Duplicate titles are permitted and treated as
/// independent entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub platforms: HashMap<String, Vec<String>>,
}

impl Catalog {
    /// Titles for a platform, or an empty slice if the platform is absent.
    pub fn titles(&self, platform: &str) -> &[String] {
        self.platforms
            .get(platform)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Platform names in storage order (callers sort as needed).
    pub fn platform_names(&self) -> impl Iterator<Item = &str> {
        self.platforms.keys().map(String::as_str)
    }

    /// Total number of title entries across all platforms.
    pub fn title_count(&self) -> usize {
        self.platforms.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}

/// Immutable-after-load context for one browsing session.
///
/// Filtering and rendering take this by reference; nothing in the
/// session is mutated after [`crate::load`] has assembled it.
#[derive(Debug, Clone, Default)]
pub struct SessionData {
    pub catalog: Catalog,
    pub overrides: LinkMap,
    pub covers: LinkMap,
}

impl SessionData {
    /// Explicit link override for a title, if one exists.
    pub fn override_url(&self, platform: &str, title: &str) -> Option<&str> {
        lookup(&self.overrides, platform, title)
    }

    /// Cover preview URL for a title, if one exists.
    pub fn cover_url(&self, platform: &str, title: &str) -> Option<&str> {
        lookup(&self.covers, platform, title)
    }
}

/// Nested lookup with a single defined "absent" result: a missing
/// platform, missing title, and empty string all yield `None`.
fn lookup<'a>(map: &'a LinkMap, platform: &str, title: &str) -> Option<&'a str> {
    let url = map.get(platform)?.get(title)?;
    if url.is_empty() { None } else { Some(url) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_override(url: &str) -> SessionData {
        let mut titles = HashMap::new();
        titles.insert("Chrono Trigger".to_string(), url.to_string());
        let mut overrides = LinkMap::new();
        overrides.insert("SNES".to_string(), titles);
        SessionData {
            overrides,
            ..SessionData::default()
        }
    }

    #[test]
    fn absent_platform_is_none() {
        let session = session_with_override("https://example.com/ct");
        assert_eq!(session.override_url("NES", "Chrono Trigger"), None);
    }

    #[test]
    fn absent_title_is_none() {
        let session = session_with_override("https://example.com/ct");
        assert_eq!(session.override_url("SNES", "Secret of Mana"), None);
    }

    #[test]
    fn empty_string_is_none() {
        let session = session_with_override("");
        assert_eq!(session.override_url("SNES", "Chrono Trigger"), None);
    }

    #[test]
    fn present_value_returned() {
        let session = session_with_override("https://example.com/ct");
        assert_eq!(
            session.override_url("SNES", "Chrono Trigger"),
            Some("https://example.com/ct")
        );
    }

    #[test]
    fn titles_for_missing_platform_is_empty() {
        let catalog = Catalog::default();
        assert!(catalog.titles("SNES").is_empty());
        assert_eq!(catalog.title_count(), 0);
    }
}
