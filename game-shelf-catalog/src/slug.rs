//! Deterministic IGDB link resolution for catalog titles.
//!
//! Resolution order: explicit override, curated alias, generated slug.
//! The whole pipeline is pure string work; no network access happens
//! here, and identical inputs always produce identical output.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::alias::alias_slug;
use crate::types::SessionData;

/// Base URL that generated and alias slugs are appended to.
pub const IGDB_GAMES_URL: &str = "https://www.igdb.com/games/";

/// Secondary combined titles ("Game A / Game B") are dropped at this
/// separator before cleaning.
const COMBINED_TITLE_SEPARATOR: &str = " / ";

/// Resolve a title to its external reference URL.
///
/// An explicit override wins and is returned verbatim. Otherwise the
/// title is cleaned, checked against the alias table, and finally
/// slugged mechanically.
pub fn resolve(session: &SessionData, platform: &str, title: &str) -> String {
    if let Some(url) = session.override_url(platform, title) {
        return url.to_string();
    }
    resolve_title(title)
}

/// Resolve a title without consulting the override map.
pub fn resolve_title(title: &str) -> String {
    let cleaned = clean_title(title);
    if let Some(slug) = alias_slug(&normalization_key(&cleaned)) {
        return format!("{IGDB_GAMES_URL}{slug}");
    }
    format!("{}{}", IGDB_GAMES_URL, generate_slug(&cleaned))
}

/// Pre-clean a raw catalog title for slugging.
///
/// Drops the secondary half of combined titles, removes bracketed
/// groups (region/revision tags and the like), strips trademark
/// glyphs, and collapses whitespace runs.
pub fn clean_title(title: &str) -> String {
    let primary = match title.find(COMBINED_TITLE_SEPARATOR) {
        Some(pos) => &title[..pos],
        None => title,
    };

    let stripped = strip_groups(primary);

    let mut out = String::with_capacity(stripped.len());
    let mut pending_space = false;
    for ch in stripped.chars() {
        if matches!(ch, '\u{2122}' | '\u{00AE}' | '\u{00A9}') {
            continue;
        }
        if ch.is_whitespace() {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(ch);
        }
    }
    out
}

/// Remove `(...)`, `[...]`, and `{...}` groups, non-greedily: each
/// opener is closed by the first matching closer of the same kind. An
/// unclosed opener is not a group and passes through untouched.
fn strip_groups(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(ch) = chars.next() {
        let close = match ch {
            '(' => ')',
            '[' => ']',
            '{' => '}',
            _ => {
                out.push(ch);
                continue;
            }
        };

        let mut group = String::new();
        let mut closed = false;
        for c in chars.by_ref() {
            if c == close {
                closed = true;
                break;
            }
            group.push(c);
        }
        if !closed {
            out.push(ch);
            out.push_str(&group);
        }
    }

    out
}

/// Normalization key used for alias lookups: NFKD-decomposed,
/// combining marks dropped, lowercased, alphanumerics only.
pub fn normalization_key(title: &str) -> String {
    title
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Mechanically derive a URL-safe slug from a cleaned title.
///
/// `&` and `+` expand to words before slugging. Every run of
/// characters outside `[a-z0-9]` becomes a single hyphen; the result
/// never starts or ends with a hyphen. A title that cleans to nothing
/// yields an empty slug.
pub fn generate_slug(title: &str) -> String {
    let expanded = title.replace('&', " and ").replace('+', " plus ");

    let mut slug = String::with_capacity(expanded.len());
    for ch in expanded.nfkd() {
        if is_combining_mark(ch) {
            continue;
        }
        for lc in ch.to_lowercase() {
            if lc.is_ascii_alphanumeric() {
                slug.push(lc);
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
    }

    slug.trim_end_matches('-').to_string()
}
