// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Configures how [`miette`] prints the report when `main() -> miette::Result<()>`
//! returns an error. The hook is lazy, so the terminal width is only looked up when an
//! error is actually about to be displayed.

use miette::MietteHandlerOpts;
use tracing::debug;

pub const DEFAULT_TERMINAL_WIDTH: u16 = 80;

/// Registers the global report handler. Falls back to [`DEFAULT_TERMINAL_WIDTH`]
/// columns when stderr is not a terminal (eg: when piped).
pub fn setup_default_miette_global_report_handler(issues_url: &'static str) {
    miette::set_hook(Box::new(|_report| {
        let terminal_width = {
            let it = crossterm::terminal::size()
                .map_or(DEFAULT_TERMINAL_WIDTH, |(columns, _rows)| columns);
            debug!(terminal_width = it, "miette::set_hook");
            usize::from(it)
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .rgb_colors(miette::RgbColors::Preferred)
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .footer(issues_url.to_string())
                .build(),
        )
    }))
    .ok();
}
