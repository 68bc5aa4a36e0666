//! Single-airport tower: guarded landings and takeoffs under capacity and
//! weather constraints, plus the console that drives it.

pub mod airport;
pub mod command;
pub mod config;
pub mod error;
pub mod logger;
pub mod plane;
pub mod weather;

pub use airport::{Airport, DEFAULT_CAPACITY};
pub use config::TowerConfig;
pub use error::{AirportError, ConfigError, PlaneError};
pub use plane::{Aircraft, Plane, PlaneId};
pub use weather::{ControlledWeather, FixedWeather, RandomWeather, Weather, WeatherSource};
