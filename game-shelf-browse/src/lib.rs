//! Filtering and incremental rendering for the catalog browser.
//!
//! [`filter::apply`] turns the immutable session catalog plus a
//! [`FilterState`] into ordered per-platform match lists;
//! [`render::RenderPass`] emits those lists to a [`RenderSink`] in
//! bounded batches; [`state::BrowseController`] translates raw input
//! into filter-state commits, debouncing search text.

pub mod filter;
pub mod render;
pub mod state;

pub use filter::{Density, FilterResult, FilterState, PlatformMatches, apply, letter_bucket};
pub use render::{DEFAULT_BATCH_SIZE, PanelState, RenderPass, RenderSink, RenderedTitle};
pub use state::{BrowseController, DEBOUNCE_WINDOW, Debouncer};
