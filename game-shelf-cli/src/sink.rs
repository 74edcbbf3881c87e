//! Terminal render sink: prints panels and items as they are emitted.

use game_shelf_browse::{RenderSink, RenderedTitle};
use owo_colors::{OwoColorize, Stream::Stdout};

/// Append-only terminal sink. A terminal cannot retract printed text,
/// so `clear` prints a separating blank line and `remove_load_more` is
/// a no-op; the load-more control is a printed hint, not a widget.
pub(crate) struct TerminalSink {
    covers: bool,
    printed_anything: bool,
}

impl TerminalSink {
    pub fn new(covers: bool) -> Self {
        Self {
            covers,
            printed_anything: false,
        }
    }
}

impl RenderSink for TerminalSink {
    fn clear(&mut self) {
        if self.printed_anything {
            println!();
        }
    }

    fn begin_panel(&mut self, platform: &str, total: usize) {
        self.printed_anything = true;
        let noun = if total == 1 { "title" } else { "titles" };
        println!(
            "{} ({total} {noun})",
            platform.if_supports_color(Stdout, |t| t.cyan())
        );
    }

    fn push_item(&mut self, _platform: &str, item: RenderedTitle) {
        self.printed_anything = true;
        println!(
            "  {}  {}",
            item.title,
            item.url.if_supports_color(Stdout, |t| t.blue())
        );
        if self.covers {
            if let Some(cover) = &item.cover_url {
                println!(
                    "      cover: {}",
                    cover.if_supports_color(Stdout, |t| t.dimmed())
                );
            }
        }
    }

    fn set_load_more(&mut self, _platform: &str, remaining: usize) {
        self.printed_anything = true;
        println!(
            "  {}",
            format!("... {remaining} more").if_supports_color(Stdout, |t| t.dimmed())
        );
    }

    fn remove_load_more(&mut self, _platform: &str) {}
}
