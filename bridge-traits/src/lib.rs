//! # Display Bridge Traits
//!
//! Rendering abstraction traits that must be implemented by each output backend.
//!
//! ## Overview
//!
//! This crate defines the contract between the display abstractions in
//! `core-display` and backend-specific implementations. The abstraction side
//! only ever talks to [`DisplayImpl`](display::DisplayImpl), so new backends
//! can be added without touching it, and new high-level operations can be
//! added without touching any backend.
//!
//! ## Backends
//!
//! | Backend | Implementation Crate | Notes |
//! |---------|---------------------|-------|
//! | Framed console (stdout, file, buffer) | `bridge-console` | `========` separators |
//! | Recording | `bridge-console` | Captures calls as events |
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type. Backends
//! should convert writer failures into `BridgeError` rather than panicking.
//!
//! ## Thread Safety
//!
//! `DisplayImpl` requires `Send + Sync` on native targets so one backend can be
//! shared behind an `Arc` by several displays.

pub mod display;
pub mod error;
pub mod platform;

pub use display::DisplayImpl;
pub use error::{BridgeError, Result};
pub use platform::PlatformSendSync;
