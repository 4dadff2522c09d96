// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::io::IsTerminal;

use clap::Parser;
use tglrs::Cli;

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "TGL_LOG";

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Err(e) = tglrs::run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn setup_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
