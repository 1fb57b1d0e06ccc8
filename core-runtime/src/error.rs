use bridge_traits::error::BridgeError;
use core_display::DisplayError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Display error: {0}")]
    Display(#[from] DisplayError),

    #[error("Bridge error: {0}")]
    Bridge(#[from] BridgeError),
}

pub type Result<T> = std::result::Result<T, Error>;
