use std::io::Write;

use game_shelf_browse::{FilterState, RenderPass, apply};
use game_shelf_catalog::SessionData;
use owo_colors::{OwoColorize, Stream::Stdout};

use crate::cli_types::FilterArgs;
use crate::error::CliError;
use crate::sink::TerminalSink;

/// Print filtered titles batch by batch, prompting before each
/// continuation unless `no_prompt` is set.
pub(crate) fn run(
    session: &SessionData,
    filters: &FilterArgs,
    batch: usize,
    covers: bool,
    no_prompt: bool,
) -> Result<(), CliError> {
    let state = filter_state(filters);
    let result = apply(&session.catalog, &state);
    let summary = result.summary.clone();

    let mut sink = TerminalSink::new(covers);
    let mut pass = RenderPass::begin(session, result, batch, &mut sink);

    while let Some(platform) = pass.pending_platforms().first().map(|p| p.to_string()) {
        if !no_prompt && !confirm_more(&platform, pass.remaining(&platform))? {
            break;
        }
        pass.load_more(&platform, &mut sink);
    }

    println!(
        "\n{}",
        summary.if_supports_color(Stdout, |t| t.dimmed())
    );
    Ok(())
}

pub(crate) fn filter_state(filters: &FilterArgs) -> FilterState {
    let mut state = FilterState::default();
    if let Some(search) = &filters.search {
        state.set_search(search);
    }
    state.set_platform(filters.platform.clone());
    state.set_letter(filters.letter);
    state
}

fn confirm_more(platform: &str, remaining: usize) -> Result<bool, CliError> {
    print!("\n  Show {remaining} more from {platform}? [Y/n] ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(!input.trim().eq_ignore_ascii_case("n"))
}
