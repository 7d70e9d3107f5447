// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{BufRead, Write};

use r3bl_string_width::{ClusterWidth, MeasuredText, StringWidthOptions};
use tracing::debug;

use crate::{CLIArg, SwidthError};

/// Measures every text in `cli_arg`, or every line of `input` when there are none, and
/// writes the report to `output`.
///
/// Report layout:
/// - one `<width>\t<text>` line per text;
/// - with `--clusters`, one indented `<index>\t<width>\t<class>\t<cluster>` line per
///   grapheme cluster after it;
/// - with `--total`, just the sum of the widths, and nothing else.
///
/// # Errors
///
/// Returns an error if `input` can't be read (eg: it is not UTF-8) or `output` can't
/// be written.
pub fn run(
    cli_arg: &CLIArg,
    input: impl BufRead,
    output: &mut impl Write,
) -> Result<usize, SwidthError> {
    let options = cli_arg.string_width_options();
    debug!(?options, text_count = cli_arg.texts.len(), "swidth run");

    let mut total = 0;

    if cli_arg.texts.is_empty() {
        for (index, line) in input.lines().enumerate() {
            let line = line.map_err(|source| SwidthError::StdinRead {
                line_number: index + 1,
                source,
            })?;
            total += report_one(&line, options, cli_arg, output)?;
        }
    } else {
        for text in &cli_arg.texts {
            total += report_one(text, options, cli_arg, output)?;
        }
    }

    if cli_arg.output_options.total {
        writeln!(output, "{total}").map_err(SwidthError::StdoutWrite)?;
    }

    debug!(total, "swidth done");
    Ok(total)
}

fn report_one(
    text: &str,
    options: StringWidthOptions,
    cli_arg: &CLIArg,
    output: &mut impl Write,
) -> Result<usize, SwidthError> {
    let measured = MeasuredText::new(text, options);
    let width = measured.total();
    debug!(width, ?text, "measured");

    if cli_arg.output_options.total {
        return Ok(width);
    }

    writeln!(output, "{}", format_width_line(width, text))
        .map_err(SwidthError::StdoutWrite)?;

    if cli_arg.output_options.clusters {
        for (index, cluster_width) in measured.clusters().enumerate() {
            writeln!(output, "{}", format_cluster_line(index, &cluster_width))
                .map_err(SwidthError::StdoutWrite)?;
        }
    }

    Ok(width)
}

#[must_use]
pub fn format_width_line(width: usize, text: &str) -> String { format!("{width}\t{text}") }

/// The cluster is printed with [`Debug`] so that invisible scalars show up as escapes.
#[must_use]
pub fn format_cluster_line(index: usize, cluster_width: &ClusterWidth<'_>) -> String {
    format!(
        "  {index}\t{}\t{}\t{:?}",
        cluster_width.width(),
        cluster_width.class,
        cluster_width.cluster
    )
}
