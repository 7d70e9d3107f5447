// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use r3bl_swidth::{CLIArg, ISSUES_URL, TracingConfig, run,
                  setup_default_miette_global_report_handler};
use tracing::debug;

fn main() -> miette::Result<()> {
    setup_default_miette_global_report_handler(ISSUES_URL);

    let cli_arg = CLIArg::parse();

    if cli_arg.global_options.enable_logging {
        TracingConfig::new_file(None).install_global()?;
        debug!(?cli_arg, "start logging");
    }

    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    run(&cli_arg, stdin, &mut stdout)?;

    Ok(())
}
