// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words dakuten handakuten Fitzpatrick

//! # r3bl_string_width
//!
//! Get the visual width of a string: the number of columns a fixed width terminal grid
//! needs to display it.
//!
//! ```
//! use r3bl_string_width::{StringWidthOptions, string_width, string_width_with_options};
//!
//! assert_eq!(string_width("abcde"), 5);
//! assert_eq!(string_width("古池や"), 6);
//! assert_eq!(string_width("\u{1b}[31mred\u{1b}[39m"), 3);
//!
//! let options = StringWidthOptions::default().with_ambiguous_is_narrow(false);
//! assert_eq!(string_width_with_options("±", options), 2);
//! ```
//!
//! ## Why the byte length or `char` count is not the width
//!
//! | Text       | Bytes | Scalars | Columns | Why                                        |
//! | ---------- | ----- | ------- | ------- | ------------------------------------------ |
//! | `H`        | 1     | 1       | 1       | Narrow                                     |
//! | `古`       | 3     | 1       | 2       | East Asian Wide                            |
//! | `😀`       | 4     | 1       | 2       | Emoji presentation                         |
//! | `👩🏿`       | 8     | 2       | 2       | Emoji modifier sequence, one cluster       |
//! | `x\u{300}` | 3     | 2       | 1       | Combining mark merges into its base        |
//! | `↔\u{FE0F}`| 6     | 2       | 2       | VS16 asks for emoji presentation           |
//! | `↔\u{FE0E}`| 6     | 2       | 1       | VS15 asks for text presentation            |
//! | `ｶﾞ`       | 6     | 2       | 2       | Halfwidth Katakana plus halfwidth dakuten  |
//!
//! ## Pipeline
//!
//! Measurement is a single linear pass with no state that outlives one call:
//!
//! 1. [`strip_ansi_escape_sequences`] removes ANSI escape sequences, unless
//!    [`StringWidthOptions::count_ansi_escape_codes`] is set.
//! 2. A [`GraphemeSegmenter`] splits the text into grapheme clusters. The default is
//!    [`UnicodeGraphemeSegmenter`], backed by
//!    [`unicode-segmentation`](https://crates.io/crates/unicode-segmentation).
//! 3. [`classify_cluster`] assigns each cluster a [`ClusterClass`]: zero width, double
//!    width emoji, or measured by [`east_asian_width`].
//! 4. The widths are summed.
//!
//! [`MeasuredText`] exposes the per cluster results of steps 2 and 3, which is handy for
//! caret positioning and debugging. Malformed UTF-16 input (lone surrogates) is accepted
//! by [`utf16_string_width`].

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod ansi_filter;
pub mod classify;
pub mod decl_macros;
pub mod display_width_ext;
pub mod emoji;
pub mod measure;
pub mod options;
pub mod segmenter;
pub mod tables;
pub mod unicode_props;

// Re-export.
pub use ansi_filter::*;
pub use classify::*;
pub use display_width_ext::*;
pub use emoji::*;
pub use measure::*;
pub use options::*;
pub use segmenter::*;
pub use unicode_props::*;
