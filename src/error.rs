//! Startup errors
//!
//! The simulation itself never fails; only loading configuration can.

use std::{fmt, io, result};

#[derive(Debug)]
pub enum Error {
    /// Reading the config file failed
    Io(io::Error),
    /// The config file is not valid JSON for `GameConfig`
    Json(serde_json::Error),
    /// The config parsed but describes an unplayable game
    InvalidConfig(String),
}

pub type Result<T> = result::Result<T, Error>;

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::InvalidConfig(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "Failed to read config: {}", err),
            Error::Json(err) => write!(f, "Failed to parse config: {}", err),
            Error::InvalidConfig(reason) => write!(f, "Invalid config: {}", reason),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}
