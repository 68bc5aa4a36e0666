use crate::airport::Airport;
use crate::error::PlaneError;
use crate::plane::{Plane, PlaneId};
use crate::weather::{FixedWeather, Weather};
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const AIRPORT_FULL: &str = "Airport is at capacity";
pub const PLANE_NOT_HERE: &str = "Plane is not at this airport";
pub const STORMY_ERROR: &str = "Weather is stormy and too unsafe";

pub fn id(s: &str) -> PlaneId {
    Arc::from(s)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behaviour {
    Succeed,
    Fail,
}

/// Test plane whose actions succeed or fail on demand and count their calls.
#[derive(Debug)]
pub struct StubPlane {
    id: PlaneId,
    on_land: Behaviour,
    on_takeoff: Behaviour,
    pub land_calls: AtomicUsize,
    pub takeoff_calls: AtomicUsize,
}

impl StubPlane {
    pub fn new(plane_id: &str, on_land: Behaviour, on_takeoff: Behaviour) -> Arc<Self> {
        Arc::new(StubPlane {
            id: id(plane_id),
            on_land,
            on_takeoff,
            land_calls: AtomicUsize::new(0),
            takeoff_calls: AtomicUsize::new(0),
        })
    }

    pub fn ok(plane_id: &str) -> Arc<Self> {
        Self::new(plane_id, Behaviour::Succeed, Behaviour::Succeed)
    }

    pub fn failing_land(plane_id: &str) -> Arc<Self> {
        Self::new(plane_id, Behaviour::Fail, Behaviour::Succeed)
    }

    pub fn failing_takeoff(plane_id: &str) -> Arc<Self> {
        Self::new(plane_id, Behaviour::Succeed, Behaviour::Fail)
    }

    pub fn lands(&self) -> usize {
        self.land_calls.load(Ordering::SeqCst)
    }

    pub fn takeoffs(&self) -> usize {
        self.takeoff_calls.load(Ordering::SeqCst)
    }
}

impl Plane for StubPlane {
    fn id(&self) -> &PlaneId {
        &self.id
    }

    fn land(&self) -> Result<(), PlaneError> {
        self.land_calls.fetch_add(1, Ordering::SeqCst);
        match self.on_land {
            Behaviour::Succeed => Ok(()),
            Behaviour::Fail => Err(PlaneError::new("plane refused to land")),
        }
    }

    fn takeoff(&self) -> Result<(), PlaneError> {
        self.takeoff_calls.fetch_add(1, Ordering::SeqCst);
        match self.on_takeoff {
            Behaviour::Succeed => Ok(()),
            Behaviour::Fail => Err(PlaneError::new("plane refused to take off")),
        }
    }
}

pub fn airport(capacity: usize, weather: Weather) -> Airport<FixedWeather> {
    Airport::with_weather(capacity, FixedWeather(weather))
}

pub fn full_airport(capacity: usize) -> Airport<FixedWeather> {
    let mut airport = airport(capacity, Weather::Sunny);
    for i in 0..capacity {
        airport
            .clear_landing(StubPlane::ok(&format!("PLANE_{}", i)))
            .unwrap();
    }
    airport
}

pub fn set_weather(airport: &mut Airport<FixedWeather>, weather: Weather) {
    airport.weather_source_mut().set(weather);
}

pub fn arb_weather() -> impl Strategy<Value = Weather> {
    prop_oneof![Just(Weather::Sunny), Just(Weather::Stormy)]
}
