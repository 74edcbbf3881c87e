//! Curated slug corrections.
//!
//! IGDB's real slugs sometimes diverge from what mechanical slugging
//! produces: articles get repositioned, licensed titles carry a
//! publisher prefix, duplicate names get a numeric suffix, and some
//! localized releases are filed under a different numbering entirely.
//! Entries here map a title's normalization key (see
//! [`crate::slug::normalization_key`]) to the authoritative slug.

/// (normalization key, authoritative IGDB slug) pairs.
const ALIASES: &[(&str, &str)] = &[
    // Punctuated initialisms.
    ("unsquadron", "u-n-squadron"),
    ("nbajamte", "nba-jam-tournament-edition"),
    // "Title, The" catalog forms.
    ("legendofzeldathe", "the-legend-of-zelda"),
    ("lionkingthe", "the-lion-king--1"),
    // Licensed names carrying a publisher prefix on IGDB.
    ("aladdin", "disney-s-aladdin"),
    // US SNES localization numbering; IGDB files these under the
    // original Japanese numbering.
    ("finalfantasyii", "final-fantasy-iv"),
    ("finalfantasyiii", "final-fantasy-vi"),
];

/// Authoritative slug for a normalization key, if one is curated.
pub fn alias_slug(key: &str) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|(alias_key, _)| *alias_key == key)
        .map(|(_, slug)| *slug)
}
