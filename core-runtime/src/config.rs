//! # Demo Configuration
//!
//! Settings for one run of the display demo.
//!
//! ## Overview
//!
//! [`DemoConfig`] is built through [`DemoConfigBuilder`], which fills in the
//! defaults for anything left unset and validates the result before handing
//! it out. The defaults reproduce the reference run:
//!
//! | Field | Default |
//! |-------|---------|
//! | `banner` | `Bridge Pattern Sample Start!!` |
//! | `show_text` | `HogeHoge` |
//! | `multi_show_text` | `hogahoga` |
//! | `repetitions` | `10` |
//!
//! ## Usage
//!
//! ```
//! use core_runtime::config::DemoConfig;
//!
//! let config = DemoConfig::builder()
//!     .show_text("hello")
//!     .repetitions(3)
//!     .build()
//!     .expect("valid config");
//!
//! assert_eq!(config.banner, "Bridge Pattern Sample Start!!");
//! assert_eq!(config.repetitions, 3);
//! ```
//!
//! ## Error Handling
//!
//! ```should_panic
//! use core_runtime::config::DemoConfig;
//!
//! let config = DemoConfig::builder()
//!     .repetitions(-1)
//!     .build()
//!     .expect("Should fail - negative repetition count");
//! ```

use crate::error::{Error, Result};
use crate::logging::{LogLevel, LoggingConfig};

pub const DEFAULT_BANNER: &str = "Bridge Pattern Sample Start!!";
pub const DEFAULT_SHOW_TEXT: &str = "HogeHoge";
pub const DEFAULT_MULTI_SHOW_TEXT: &str = "hogahoga";
pub const DEFAULT_REPETITIONS: i64 = 10;

/// Settings for one demo run. Use [`DemoConfig::builder`] to construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Unframed line written before any display output
    pub banner: String,

    /// Fragment passed to `Display::show`
    pub show_text: String,

    /// Fragment passed to `CountDisplay::multi_show`
    pub multi_show_text: String,

    /// Repetition count passed to `CountDisplay::multi_show`
    pub repetitions: i64,

    /// Diagnostics settings (stderr only)
    pub logging: LoggingConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            banner: DEFAULT_BANNER.to_string(),
            show_text: DEFAULT_SHOW_TEXT.to_string(),
            multi_show_text: DEFAULT_MULTI_SHOW_TEXT.to_string(),
            repetitions: DEFAULT_REPETITIONS,
            logging: LoggingConfig::default().with_level(LogLevel::Warn),
        }
    }
}

impl DemoConfig {
    pub fn builder() -> DemoConfigBuilder {
        DemoConfigBuilder::default()
    }

    /// Validates the configuration.
    ///
    /// The repetition count must not be negative.
    pub fn validate(&self) -> Result<()> {
        if self.repetitions < 0 {
            return Err(Error::Config(format!(
                "Repetition count must not be negative (got {})",
                self.repetitions
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct DemoConfigBuilder {
    banner: Option<String>,
    show_text: Option<String>,
    multi_show_text: Option<String>,
    repetitions: Option<i64>,
    logging: Option<LoggingConfig>,
}

impl DemoConfigBuilder {
    pub fn banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = Some(banner.into());
        self
    }

    pub fn show_text(mut self, text: impl Into<String>) -> Self {
        self.show_text = Some(text.into());
        self
    }

    pub fn multi_show_text(mut self, text: impl Into<String>) -> Self {
        self.multi_show_text = Some(text.into());
        self
    }

    pub fn repetitions(mut self, times: i64) -> Self {
        self.repetitions = Some(times);
        self
    }

    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = Some(logging);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the repetition count is negative.
    pub fn build(self) -> Result<DemoConfig> {
        let defaults = DemoConfig::default();

        let config = DemoConfig {
            banner: self.banner.unwrap_or(defaults.banner),
            show_text: self.show_text.unwrap_or(defaults.show_text),
            multi_show_text: self.multi_show_text.unwrap_or(defaults.multi_show_text),
            repetitions: self.repetitions.unwrap_or(defaults.repetitions),
            logging: self.logging.unwrap_or(defaults.logging),
        };

        config.validate()?;
        Ok(config)
    }
}
