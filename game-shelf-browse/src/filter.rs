//! The filter engine: catalog + filter state in, ordered match lists out.
//!
//! [`apply`] is a pure function. It never mutates the catalog or the
//! filter state, and it is total over empty inputs: an empty catalog
//! simply produces an empty result.

use game_shelf_catalog::Catalog;

/// Display density. Presentation-only; filtering ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Density {
    #[default]
    Comfortable,
    Compact,
}

/// Active filters for one browsing session.
///
/// Fields are private so the stored form is always normalized: search
/// is trimmed and lowercased, the letter is an uppercase A–Z or `'#'`.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    search: String,
    platform: Option<String>,
    letter: Option<char>,
    pub density: Density,
}

impl FilterState {
    pub fn set_search(&mut self, raw: &str) {
        self.search = raw.trim().to_lowercase();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_platform(&mut self, platform: Option<String>) {
        self.platform = platform;
    }

    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    pub fn set_letter(&mut self, letter: Option<char>) {
        self.letter = letter.map(|c| {
            if c.is_ascii_alphabetic() {
                c.to_ascii_uppercase()
            } else {
                '#'
            }
        });
    }

    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    /// True when no filter narrows the catalog.
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty() && self.platform.is_none() && self.letter.is_none()
    }
}

/// The letter-filter bucket a title falls into: its first non-space
/// character uppercased when that is an ASCII letter, `'#'` otherwise
/// (digits, punctuation, non-Latin scripts, empty titles).
pub fn letter_bucket(title: &str) -> char {
    match title.trim_start().chars().next() {
        Some(c) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
        _ => '#',
    }
}

/// Matches for one platform, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformMatches {
    pub platform: String,
    pub titles: Vec<String>,
}

/// Output of one [`apply`] call.
#[derive(Debug, Clone)]
pub struct FilterResult {
    /// Surviving platforms, each with at least one match. Platforms
    /// with zero matches are omitted entirely.
    pub platforms: Vec<PlatformMatches>,
    pub match_count: usize,
    /// Human-readable description of the active filters.
    pub summary: String,
}

/// Apply the filter state to the catalog.
///
/// If a platform is selected only that platform is considered;
/// otherwise platforms are visited in case-insensitive lexicographic
/// order. Title order within a platform is preserved from the catalog
/// with no secondary sort, and duplicate titles pass through as
/// independent entries.
pub fn apply(catalog: &Catalog, state: &FilterState) -> FilterResult {
    let names: Vec<&str> = match state.platform() {
        Some(selected) => catalog
            .platforms
            .get_key_value(selected)
            .map(|(name, _)| name.as_str())
            .into_iter()
            .collect(),
        None => {
            let mut names: Vec<&str> = catalog.platform_names().collect();
            names.sort_by_key(|name| name.to_lowercase());
            names
        }
    };

    let mut platforms = Vec::new();
    let mut match_count = 0;
    for name in names {
        let titles: Vec<String> = catalog
            .titles(name)
            .iter()
            .filter(|title| title_matches(title, state))
            .cloned()
            .collect();
        if titles.is_empty() {
            continue;
        }
        match_count += titles.len();
        platforms.push(PlatformMatches {
            platform: name.to_string(),
            titles,
        });
    }

    let summary = summarize(state, match_count);
    FilterResult {
        platforms,
        match_count,
        summary,
    }
}

/// Logical AND of all active filters.
fn title_matches(title: &str, state: &FilterState) -> bool {
    if !state.search().is_empty() && !title.to_lowercase().contains(state.search()) {
        return false;
    }
    if let Some(letter) = state.letter() {
        if letter_bucket(title) != letter {
            return false;
        }
    }
    true
}

fn summarize(state: &FilterState, match_count: usize) -> String {
    let noun = if match_count == 1 { "title" } else { "titles" };
    let mut summary = format!("{match_count} {noun}");
    if let Some(platform) = state.platform() {
        summary.push_str(&format!(" | platform: {platform}"));
    }
    if !state.search().is_empty() {
        summary.push_str(&format!(" | search: \"{}\"", state.search()));
    }
    if let Some(letter) = state.letter() {
        summary.push_str(&format!(" | letter: {letter}"));
    }
    if state.is_unfiltered() {
        summary.push_str(" | no filters");
    }
    summary
}
