//! Demo driver
//!
//! Wires one framed console to a [`Display`] and a [`CountDisplay`] and runs
//! the reference sequence: banner, `show`, then `multi_show`.

use crate::config::DemoConfig;
use crate::error::Result;
use bridge_console::FramedConsole;
use bridge_traits::DisplayImpl;
use core_display::{CountDisplay, Display};
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, info_span};

/// Run the demo against `console`.
///
/// Both displays are bound to the same console instance, so their blocks
/// land on one sink in call order.
pub fn run<W>(config: &DemoConfig, console: Arc<FramedConsole<W>>) -> Result<()>
where
    W: Write + Send + 'static,
{
    config.validate()?;

    let span = info_span!("demo", repetitions = config.repetitions);
    let _enter = span.enter();

    console.write_line(&config.banner)?;

    let implementation: Arc<dyn DisplayImpl> = console;

    let display = Display::new(Arc::clone(&implementation));
    display.show(&config.show_text)?;

    let count_display = CountDisplay::new(implementation);
    count_display.multi_show(config.repetitions, &config.multi_show_text)?;

    debug!("Demo finished");
    Ok(())
}
