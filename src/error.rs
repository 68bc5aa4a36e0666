use crate::plane::PlaneId;
use thiserror::Error;

/// Failure raised by a plane's own `land`/`takeoff` action.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct PlaneError {
    pub message: String,
}

impl PlaneError {
    pub fn new(message: impl Into<String>) -> Self {
        PlaneError {
            message: message.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AirportError {
    #[error("Weather is stormy and too unsafe")]
    StormyWeather,

    #[error("Airport is at capacity")]
    AtCapacity,

    #[error("Plane is not at this airport")]
    PlaneNotFound,

    #[error("Callsign {0} is already in use at this airport")]
    CallsignInUse(PlaneId),

    #[error(transparent)]
    Plane(#[from] PlaneError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {message}")]
    Invalid { message: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Unknown weather '{0}', expected sunny, stormy or auto")]
    InvalidWeather(String),
}
