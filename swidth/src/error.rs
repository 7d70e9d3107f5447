// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Diagnostic;

/// Everything that can go wrong in [`crate::run`]. Measuring itself can't fail; only
/// the I/O around it can.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum SwidthError {
    #[error("Failed to read line {line_number} from stdin")]
    #[diagnostic(
        code(r3bl_swidth::stdin_read),
        help("swidth measures UTF-8 text, make sure the input is not binary")
    )]
    StdinRead {
        line_number: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write to stdout")]
    #[diagnostic(
        code(r3bl_swidth::stdout_write),
        help("The process reading the output may have exited early")
    )]
    StdoutWrite(#[source] std::io::Error),
}
