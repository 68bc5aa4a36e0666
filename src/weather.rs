use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_STORM_CHANCE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    Sunny,
    Stormy,
}

impl Weather {
    pub fn is_stormy(self) -> bool {
        self == Weather::Stormy
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weather::Sunny => write!(f, "sunny"),
            Weather::Stormy => write!(f, "stormy"),
        }
    }
}

impl FromStr for Weather {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sunny" => Ok(Weather::Sunny),
            "stormy" => Ok(Weather::Stormy),
            _ => Err(s.to_string()),
        }
    }
}

/// Where an airport gets its weather from. Consulted once per guarded movement.
pub trait WeatherSource {
    fn weather(&mut self) -> Weather;
}

impl<F: FnMut() -> Weather> WeatherSource for F {
    fn weather(&mut self) -> Weather {
        self()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWeather(pub Weather);

impl FixedWeather {
    pub fn set(&mut self, weather: Weather) {
        self.0 = weather;
    }
}

impl WeatherSource for FixedWeather {
    fn weather(&mut self) -> Weather {
        self.0
    }
}

/// Stormy with probability `storm_chance`, sunny otherwise.
#[derive(Debug, Clone)]
pub struct RandomWeather {
    storm_chance: f64,
    rng: StdRng,
}

impl RandomWeather {
    pub fn new(storm_chance: f64) -> Self {
        Self::from_rng(storm_chance, StdRng::from_os_rng())
    }

    pub fn seeded(storm_chance: f64, seed: u64) -> Self {
        Self::from_rng(storm_chance, StdRng::seed_from_u64(seed))
    }

    fn from_rng(storm_chance: f64, rng: StdRng) -> Self {
        // random_bool panics outside [0, 1]
        let storm_chance = if storm_chance.is_nan() {
            0.0
        } else {
            storm_chance.clamp(0.0, 1.0)
        };
        RandomWeather { storm_chance, rng }
    }

    pub fn storm_chance(&self) -> f64 {
        self.storm_chance
    }
}

impl Default for RandomWeather {
    fn default() -> Self {
        RandomWeather::new(DEFAULT_STORM_CHANCE)
    }
}

impl WeatherSource for RandomWeather {
    fn weather(&mut self) -> Weather {
        if self.rng.random_bool(self.storm_chance) {
            Weather::Stormy
        } else {
            Weather::Sunny
        }
    }
}

/// Random weather the operator can override from the console.
#[derive(Debug, Clone)]
pub struct ControlledWeather {
    forced: Option<Weather>,
    random: RandomWeather,
}

impl ControlledWeather {
    pub fn new(random: RandomWeather) -> Self {
        ControlledWeather {
            forced: None,
            random,
        }
    }

    pub fn force(&mut self, weather: Weather) {
        self.forced = Some(weather);
    }

    pub fn release(&mut self) {
        self.forced = None;
    }

    pub fn forced(&self) -> Option<Weather> {
        self.forced
    }

    pub fn storm_chance(&self) -> f64 {
        self.random.storm_chance()
    }
}

impl WeatherSource for ControlledWeather {
    fn weather(&mut self) -> Weather {
        match self.forced {
            Some(weather) => weather,
            None => self.random.weather(),
        }
    }
}
