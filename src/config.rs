use crate::airport::{Airport, DEFAULT_CAPACITY};
use crate::error::{AirportError, ConfigError};
use crate::plane::Aircraft;
use crate::weather::{ControlledWeather, DEFAULT_STORM_CHANCE, RandomWeather, Weather};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TowerConfig {
    pub capacity: usize,
    pub storm_chance: f64,
    /// Planes already parked when the tower comes online.
    pub apron: Vec<Aircraft>,
}

impl Default for TowerConfig {
    fn default() -> Self {
        TowerConfig {
            capacity: DEFAULT_CAPACITY,
            storm_chance: DEFAULT_STORM_CHANCE,
            apron: vec![],
        }
    }
}

impl TowerConfig {
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        let config: TowerConfig = serde_json::from_str(&data)?;
        debug!(path = %path.display(), capacity = config.capacity, "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.storm_chance) {
            return Err(ConfigError::Invalid {
                message: format!("storm_chance must be within [0, 1], got {}", self.storm_chance),
            });
        }
        if self.apron.len() > self.capacity {
            return Err(ConfigError::Invalid {
                message: format!(
                    "{} planes on the apron but capacity is {}",
                    self.apron.len(),
                    self.capacity
                ),
            });
        }
        let mut seen = HashSet::new();
        if let Some(dup) = self.apron.iter().find(|ac| !seen.insert(ac.id.clone())) {
            return Err(ConfigError::Invalid {
                message: format!("plane {} is parked twice", dup.id),
            });
        }
        Ok(())
    }

    /// Opens the airport and parks the apron planes. Weather is held sunny
    /// while parking and handed back to the random source afterwards.
    pub fn build_airport(&self, seed: Option<u64>) -> Result<Airport<ControlledWeather>, AirportError> {
        let random = match seed {
            Some(seed) => RandomWeather::seeded(self.storm_chance, seed),
            None => RandomWeather::new(self.storm_chance),
        };
        let mut airport = Airport::with_weather(self.capacity, ControlledWeather::new(random));

        airport.weather_source_mut().force(Weather::Sunny);
        for aircraft in &self.apron {
            airport.clear_landing(Arc::new(aircraft.clone()))?;
        }
        airport.weather_source_mut().release();
        Ok(airport)
    }
}
