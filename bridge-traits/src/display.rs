//! Rendering Implementation Contract
//!
//! The low-level primitives every display backend must provide. High-level
//! operations (`show`, `multi_show`) live in `core-display` and are written
//! only in terms of these three calls.

use crate::{error::Result, platform::PlatformSendSync};

/// Rendering implementation trait
///
/// A backend receives the bracketing protocol `raw_open`, any number of
/// `raw_print` calls, then `raw_close`. It decides how each step is rendered
/// (separator lines, markup, nothing at all).
///
/// Implementations are shared by reference between several displays, so every
/// method takes `&self`. Backends that own a writer keep it behind a lock.
///
/// # Example
///
/// ```
/// use bridge_traits::{DisplayImpl, Result};
///
/// struct Silent;
///
/// impl DisplayImpl for Silent {
///     fn raw_open(&self) -> Result<()> {
///         Ok(())
///     }
///
///     fn raw_print(&self, _text: &str) -> Result<()> {
///         Ok(())
///     }
///
///     fn raw_close(&self) -> Result<()> {
///         Ok(())
///     }
/// }
///
/// let backend: std::sync::Arc<dyn DisplayImpl> = std::sync::Arc::new(Silent);
/// backend.raw_open().unwrap();
/// ```
pub trait DisplayImpl: PlatformSendSync {
    /// Begin a block of output.
    fn raw_open(&self) -> Result<()>;

    /// Emit one fragment followed by a line terminator.
    fn raw_print(&self, text: &str) -> Result<()>;

    /// End the block opened by `raw_open`.
    fn raw_close(&self) -> Result<()>;
}
