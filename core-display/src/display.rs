//! Display Abstraction
//!
//! High-level output operations expressed purely in terms of the
//! [`DisplayImpl`] primitives.

use crate::error::Result;
use bridge_traits::DisplayImpl;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Display abstraction bound to one shared rendering implementation.
///
/// The binding is fixed at construction. Cloning a `Display` shares the same
/// implementation instance; it never duplicates it.
#[derive(Clone)]
pub struct Display {
    implementation: Arc<dyn DisplayImpl>,
}

impl fmt::Debug for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Display")
            .field("implementation", &"DisplayImpl { ... }")
            .finish()
    }
}

impl Display {
    pub fn new(implementation: Arc<dyn DisplayImpl>) -> Self {
        Self { implementation }
    }

    /// The shared implementation this display renders through.
    pub fn implementation(&self) -> &Arc<dyn DisplayImpl> {
        &self.implementation
    }

    pub fn open(&self) -> Result<()> {
        Ok(self.implementation.raw_open()?)
    }

    pub fn print(&self, text: &str) -> Result<()> {
        Ok(self.implementation.raw_print(text)?)
    }

    pub fn close(&self) -> Result<()> {
        Ok(self.implementation.raw_close()?)
    }

    /// Open, print `text` once, close.
    #[instrument(level = "debug", skip(self))]
    pub fn show(&self, text: &str) -> Result<()> {
        self.bracket(1, text)
    }

    /// Bracketing protocol shared by every high-level operation:
    /// one open, `times` prints of `text`, one close.
    ///
    /// The first failing call ends the block: its error is returned as is and
    /// `close` is not issued, so a failed block is left open on the sink.
    pub(crate) fn bracket(&self, times: usize, text: &str) -> Result<()> {
        self.open()?;
        for _ in 0..times {
            self.print(text)?;
        }
        self.close()?;
        debug!(times, "Block rendered");
        Ok(())
    }
}
