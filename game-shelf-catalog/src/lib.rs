//! Game catalog data model, session loading, and IGDB link resolution.
//!
//! This crate defines the immutable session context (catalog, link
//! overrides, cover map) without any UI dependencies. Consumers pass
//! [`SessionData`] by reference into the filtering and rendering layers
//! in `game-shelf-browse`.

pub mod alias;
pub mod load;
pub mod slug;
pub mod types;

pub use alias::alias_slug;
pub use load::{
    CATALOG_FILE, COVERS_FILE, LINKS_FILE, LoadError, decode_catalog, decode_covers,
    decode_overrides, default_client, fetch_json, load_dir, load_session,
};
pub use slug::{IGDB_GAMES_URL, clean_title, generate_slug, normalization_key, resolve};
pub use types::{Catalog, LinkMap, SessionData};
