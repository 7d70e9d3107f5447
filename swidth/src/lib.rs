// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # swidth
//!
//! `swidth` prints how many terminal columns each piece of text occupies. It is a thin
//! command line wrapper around [`r3bl_string_width`].
//!
//! ```text
//! $ swidth abcde 古池や "👨‍👩‍👧"
//! 5	abcde
//! 6	古池や
//! 2	👨‍👩‍👧
//!
//! $ printf 'x̀😀\n' | swidth --clusters
//! 3	x̀😀
//!   0	1	east-asian(U+0078)	"x̀"
//!   1	2	emoji	"😀"
//! ```
//!
//! With no text arguments, each line of stdin is measured.

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod clap_config;
pub mod error;
pub mod log;
pub mod miette_setup_global_report_handler;
pub mod run;

// Re-export.
pub use clap_config::*;
pub use error::*;
pub use log::*;
pub use miette_setup_global_report_handler::*;
pub use run::*;

pub const ISSUES_URL: &str = "https://github.com/r3bl-org/r3bl-open-core/issues/new";
