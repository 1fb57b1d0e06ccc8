//! # Console Bridge Implementations
//!
//! Default implementations of the display bridge trait.
//!
//! ## Overview
//!
//! - `FramedConsole` writes each fragment on its own line and brackets every
//!   block with a separator line (`========` by default). It is generic over
//!   the writer, so the same backend targets stdout, a file, or a buffer.
//! - `RecordingDisplay` keeps the received calls as [`RenderEvent`]s.
//!
//! ## Usage
//!
//! ```
//! use bridge_console::FramedConsole;
//! use bridge_traits::DisplayImpl;
//! use std::sync::Arc;
//!
//! let console = Arc::new(FramedConsole::new(Vec::new()));
//! console.raw_open().unwrap();
//! console.raw_print("hello").unwrap();
//! console.raw_close().unwrap();
//!
//! assert_eq!(console.contents().unwrap(), "========\nhello\n========\n");
//! ```

mod framed;
mod recording;

pub use framed::{Frame, FramedConsole};
pub use recording::{RecordingDisplay, RenderEvent};
