// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logging for the `swidth` binary. Nothing is logged unless
//! [`TracingConfig::install_global`] is called, which `swidth` only does when the
//! `--enable-logging` flag is passed. Stdout carries the measurements, so the default
//! destination is a file.

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
