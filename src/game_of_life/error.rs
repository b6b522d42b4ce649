//! Errors raised by the universe engine

use thiserror::Error;

pub type Result<T> = std::result::Result<T, UniverseError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UniverseError {
    #[error("Invalid universe dimensions {width}x{height}: width and height must be positive")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Universe of {width}x{height} cells does not fit in memory")]
    TooLarge { width: u32, height: u32 },

    #[error("Unknown universe option '{0}' (expected dead, random or two_seven)")]
    UnknownOption(String),
}
