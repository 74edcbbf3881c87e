//! Interactive browsing loop.
//!
//! Line-based REPL over the filter controller: free text becomes the
//! search filter, slash commands change platform and letter, and every
//! committed change reruns the filter and starts a fresh render pass.

use std::io::{BufRead, Write};

use game_shelf_browse::{BrowseController, RenderPass, apply};
use game_shelf_catalog::SessionData;
use owo_colors::{OwoColorize, Stream::Stdout};

use crate::cli_types::FilterArgs;
use crate::error::CliError;
use crate::sink::TerminalSink;

const HELP: &str = "\
  <text>           search titles (empty text clears the search)
  /platform <p>    filter to one platform (no argument clears it)
  /letter <c>      filter by starting letter, '#' for non-letters
  /clear           clear all filters
  more, m          show the next batch
  help, ?          show this help
  quit, q          exit";

pub(crate) fn run(session: &SessionData, filters: &FilterArgs, batch: usize) -> Result<(), CliError> {
    let mut controller = BrowseController::new();
    if let Some(search) = &filters.search {
        controller.search_input(search, std::time::Instant::now());
        controller.flush();
    }
    controller.select_platform(filters.platform.as_deref());
    controller.select_letter(filters.letter);

    let mut sink = TerminalSink::new(false);
    let mut pass = rerun(session, &controller, batch, &mut sink);

    let stdin = std::io::stdin();
    loop {
        print_status(pass.result().summary.as_str(), &pass.pending_platforms());
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        let committed = match line {
            "quit" | "q" => break,
            "help" | "?" => {
                println!("{HELP}");
                false
            }
            "more" | "m" => {
                let mut advanced = 0;
                if let Some(platform) = pass.pending_platforms().first().map(|p| p.to_string()) {
                    advanced = pass.load_more(&platform, &mut sink);
                }
                if advanced == 0 {
                    println!("  Nothing more to show.");
                }
                false
            }
            "/clear" => {
                controller.search_input("", std::time::Instant::now());
                controller.flush();
                controller.select_platform(None);
                controller.select_letter(None);
                true
            }
            _ if line.starts_with("/platform") => {
                let arg = line["/platform".len()..].trim();
                controller.select_platform((!arg.is_empty()).then_some(arg))
            }
            _ if line.starts_with("/letter") => {
                let arg = line["/letter".len()..].trim();
                controller.select_letter(arg.chars().next())
            }
            _ => {
                // Free text is search input. Line input is already
                // quiescent by the time we read it, so flush rather
                // than waiting out the debounce window.
                controller.search_input(line, std::time::Instant::now());
                controller.flush()
            }
        };

        if committed {
            pass = rerun(session, &controller, batch, &mut sink);
        }
    }
    Ok(())
}

fn rerun<'a>(
    session: &'a SessionData,
    controller: &BrowseController,
    batch: usize,
    sink: &mut TerminalSink,
) -> RenderPass<'a> {
    let result = apply(&session.catalog, controller.state());
    RenderPass::begin(session, result, batch, sink)
}

fn print_status(summary: &str, pending: &[&str]) {
    let mut status = summary.to_string();
    if !pending.is_empty() {
        status.push_str(" | type 'more' for the next batch");
    }
    println!(
        "\n{}",
        status.if_supports_color(Stdout, |t| t.dimmed())
    );
}
