//! Bridge pattern sample.
//!
//! Prints a banner, one framed `show` block and one framed `multi_show` block
//! through a single shared console backend.

use anyhow::{Context, Result};
use bridge_console::FramedConsole;
use core_runtime::{demo, logging, DemoConfig};
use std::sync::Arc;

fn main() -> Result<()> {
    let mut config = DemoConfig::default();
    config.logging = config.logging.with_filter_from_env();

    logging::init_logging(config.logging.clone()).context("Failed to initialize logging")?;
    tracing::debug!(?config, "Starting bridge sample");

    let console = Arc::new(FramedConsole::stdout());
    demo::run(&config, console).context("Demo run failed")?;

    Ok(())
}
