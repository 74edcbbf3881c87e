//! Incremental rendering of filtered match lists.
//!
//! One [`RenderPass`] is scoped to one filter result. Each platform
//! panel walks a small state machine — `Rendering`,
//! `LoadMoreAvailable`, `Complete` — and its cursor lives inside the
//! pass, so a new filter state simply drops the old pass (and tells
//! the sink to clear) rather than diffing against it. Stale cursors
//! cannot outlive their pass.

use game_shelf_catalog::{SessionData, slug};

use crate::filter::FilterResult;

/// Items emitted per batch unless the caller overrides it.
pub const DEFAULT_BATCH_SIZE: usize = 400;

/// One emitted catalog entry, fully resolved for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTitle {
    pub title: String,
    pub url: String,
    pub cover_url: Option<String>,
}

/// Capability surface the renderer drives. Implementations range from
/// a terminal printer to the in-memory sink the tests use; the
/// renderer itself never touches a concrete UI.
pub trait RenderSink {
    /// Drop all panels and controls left over from a previous pass.
    fn clear(&mut self);

    /// A platform panel is starting; `total` is its full match count.
    fn begin_panel(&mut self, platform: &str, total: usize);

    /// Append one item to a platform panel.
    fn push_item(&mut self, platform: &str, item: RenderedTitle);

    /// Show or update the panel's load-more control with the exact
    /// number of items still unemitted.
    fn set_load_more(&mut self, platform: &str, remaining: usize);

    /// Remove the load-more control; the panel is complete.
    fn remove_load_more(&mut self, platform: &str);
}

/// Panel lifecycle within a single pass. `Complete` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Rendering,
    LoadMoreAvailable,
    Complete,
}

struct Panel {
    emitted: usize,
    state: PanelState,
}

/// One render pass over a filter result.
///
/// The pass consumes the filter engine's output; within the pass every
/// filtered item is emitted exactly once, in order, with no gaps or
/// overlaps across batch boundaries.
pub struct RenderPass<'a> {
    session: &'a SessionData,
    result: FilterResult,
    batch_size: usize,
    panels: Vec<Panel>,
}

impl<'a> RenderPass<'a> {
    /// Start a pass: clear the sink, open a panel per surviving
    /// platform, and emit each panel's first batch.
    pub fn begin(
        session: &'a SessionData,
        result: FilterResult,
        batch_size: usize,
        sink: &mut dyn RenderSink,
    ) -> Self {
        sink.clear();

        let panels = result
            .platforms
            .iter()
            .map(|_| Panel {
                emitted: 0,
                state: PanelState::Rendering,
            })
            .collect();

        log::debug!(
            "render pass: {} platforms, {} matches, batch size {}",
            result.platforms.len(),
            result.match_count,
            batch_size.max(1),
        );

        let mut pass = Self {
            session,
            result,
            batch_size: batch_size.max(1),
            panels,
        };

        for idx in 0..pass.panels.len() {
            let matches = &pass.result.platforms[idx];
            sink.begin_panel(&matches.platform, matches.titles.len());
            pass.emit_batch(idx, sink);
        }
        pass
    }

    /// Emit the next batch for a platform's panel, in response to its
    /// load-more control. Returns the number of items emitted; a
    /// complete or unknown panel emits nothing.
    pub fn load_more(&mut self, platform: &str, sink: &mut dyn RenderSink) -> usize {
        let Some(idx) = self
            .result
            .platforms
            .iter()
            .position(|m| m.platform == platform)
        else {
            return 0;
        };
        if self.panels[idx].state != PanelState::LoadMoreAvailable {
            return 0;
        }
        self.emit_batch(idx, sink)
    }

    fn emit_batch(&mut self, idx: usize, sink: &mut dyn RenderSink) -> usize {
        let matches = &self.result.platforms[idx];
        let total = matches.titles.len();
        let start = self.panels[idx].emitted;
        let take = self.batch_size.min(total - start);

        for title in &matches.titles[start..start + take] {
            let url = slug::resolve(self.session, &matches.platform, title);
            let cover_url = self
                .session
                .cover_url(&matches.platform, title)
                .map(str::to_string);
            sink.push_item(
                &matches.platform,
                RenderedTitle {
                    title: title.clone(),
                    url,
                    cover_url,
                },
            );
        }

        let panel = &mut self.panels[idx];
        panel.emitted = start + take;
        if panel.emitted < total {
            panel.state = PanelState::LoadMoreAvailable;
            sink.set_load_more(&matches.platform, total - panel.emitted);
        } else {
            let control_shown = panel.state == PanelState::LoadMoreAvailable;
            panel.state = PanelState::Complete;
            if control_shown {
                sink.remove_load_more(&matches.platform);
            }
        }
        take
    }

    pub fn panel_state(&self, platform: &str) -> Option<PanelState> {
        self.panel_index(platform).map(|idx| self.panels[idx].state)
    }

    /// Items still unemitted for a platform's panel this pass.
    pub fn remaining(&self, platform: &str) -> usize {
        match self.panel_index(platform) {
            Some(idx) => self.result.platforms[idx].titles.len() - self.panels[idx].emitted,
            None => 0,
        }
    }

    /// Platforms whose load-more control is currently available.
    pub fn pending_platforms(&self) -> Vec<&str> {
        self.result
            .platforms
            .iter()
            .zip(&self.panels)
            .filter(|(_, panel)| panel.state == PanelState::LoadMoreAvailable)
            .map(|(matches, _)| matches.platform.as_str())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.panels
            .iter()
            .all(|panel| panel.state == PanelState::Complete)
    }

    /// The filter result this pass is emitting.
    pub fn result(&self) -> &FilterResult {
        &self.result
    }

    fn panel_index(&self, platform: &str) -> Option<usize> {
        self.result
            .platforms
            .iter()
            .position(|m| m.platform == platform)
    }
}
