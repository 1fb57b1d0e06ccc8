//! # Core Display
//!
//! The abstraction side of the display bridge.
//!
//! ## Overview
//!
//! - [`Display`] binds to one shared [`DisplayImpl`](bridge_traits::DisplayImpl)
//!   and offers `open`, `print`, `close` and the composite `show`.
//! - [`CountDisplay`] adds `multi_show` on top of `Display` without requiring
//!   anything new from the implementation.
//!
//! Every high-level operation follows the same bracketing protocol: one
//! `raw_open`, any number of `raw_print`, one `raw_close`.
//!
//! ## Usage
//!
//! ```
//! use bridge_console::FramedConsole;
//! use bridge_traits::DisplayImpl;
//! use core_display::{CountDisplay, Display};
//! use std::sync::Arc;
//!
//! let console = Arc::new(FramedConsole::new(Vec::new()));
//! let shared: Arc<dyn DisplayImpl> = console.clone();
//!
//! Display::new(shared.clone()).show("HogeHoge").unwrap();
//! CountDisplay::new(shared).multi_show(2, "hogahoga").unwrap();
//!
//! assert_eq!(
//!     console.contents().unwrap(),
//!     "========\nHogeHoge\n========\n========\nhogahoga\nhogahoga\n========\n"
//! );
//! ```

pub mod count;
pub mod display;
pub mod error;

pub use count::CountDisplay;
pub use display::Display;
pub use error::{DisplayError, Result};
