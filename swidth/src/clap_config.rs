// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser};
use r3bl_string_width::StringWidthOptions;

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "swidth")]
#[command(about = "📏 Measure how many terminal columns text takes up")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nProvide text arguments, separated by spaces, to measure. Or no arguments to measure each line of stdin.\nUSAGE 📓:\n  swidth [\x1b[32mtexts\x1b[0m] [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[arg(name = "texts")]
    pub texts: Vec<String>,

    #[command(flatten)]
    pub measure_options: MeasureOption,

    #[command(flatten)]
    pub output_options: OutputOption,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct MeasureOption {
    #[arg(
        long,
        short = 'w',
        help = "Treat East Asian Ambiguous characters (eg: ±, ↔, ①) as 2 columns, like CJK terminals do."
    )]
    pub ambiguous_wide: bool,

    #[arg(
        long,
        short = 'a',
        help = "Measure ANSI escape sequences as plain text instead of removing them first."
    )]
    pub count_ansi: bool,
}

#[derive(Debug, Args)]
pub struct OutputOption {
    #[arg(
        long,
        short = 'c',
        help = "After each measured text, print one line per grapheme cluster with its width and classification."
    )]
    pub clusters: bool,

    #[arg(
        long,
        short = 't',
        help = "Only print the sum of the widths of all the texts."
    )]
    pub total: bool,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging."
    )]
    pub enable_logging: bool,
}

impl CLIArg {
    #[must_use]
    pub fn string_width_options(&self) -> StringWidthOptions {
        StringWidthOptions::default()
            .with_ambiguous_is_narrow(!self.measure_options.ambiguous_wide)
            .with_count_ansi_escape_codes(self.measure_options.count_ansi)
    }
}
