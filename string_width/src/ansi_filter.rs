// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::borrow::Cow;

/// The only byte that can start an escape sequence that
/// [`strip_ansi_escape_sequences`] recognizes.
pub const ESC: char = '\x1b';

/// Remove ANSI escape sequences (CSI like `ESC [31m`, OSC like hyperlinks terminated by
/// `BEL` or `ESC \`, and the rest of the VT100 family) from `text`. Everything else is
/// left as is. Stripping is idempotent.
///
/// If there is no [`ESC`] in the input there is nothing to strip, so the input is
/// returned as [`Cow::Borrowed`] without running the parser.
#[must_use]
pub fn strip_ansi_escape_sequences(text: &str) -> Cow<'_, str> {
    if !text.contains(ESC) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(strip_ansi_escapes::strip_str(text))
}
