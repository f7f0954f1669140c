//! Tracing setup for the CLI.
//!
//! Logs go to stderr so stdout carries only command output (the generated
//! message in particular). `RUST_LOG` overrides the verbosity flags.

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive for a `-v` count.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "msgtpl=warn",
        1 => "msgtpl=info",
        _ => "msgtpl=debug",
    }
}

/// Install the global subscriber.
pub fn init(verbosity: u8) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .context("failed to initialize tracing")
}
