//! # Core Runtime Module
//!
//! Provides the runtime infrastructure around the display bridge:
//! - Logging and tracing infrastructure
//! - Configuration management
//! - The demo driver used by the `bridge-sample` binary
//!
//! ## Overview
//!
//! The display crates (`bridge-traits`, `bridge-console`, `core-display`) know
//! nothing about configuration or subscribers. This crate owns those concerns
//! and the wiring between a concrete backend and the display abstractions.

pub mod config;
pub mod demo;
pub mod error;
pub mod logging;

pub use config::{DemoConfig, DemoConfigBuilder};
pub use error::{Error, Result};
