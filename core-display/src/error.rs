use bridge_traits::error::BridgeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Bridge error: {0}")]
    Bridge(#[from] BridgeError),

    #[error("Invalid argument: {name} = {value} - {reason}")]
    InvalidArgument {
        name: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, DisplayError>;
