use crate::error::AirportError;
use crate::plane::{Aircraft, Plane, PlaneId, next_callsign};
use crate::weather::{RandomWeather, Weather, WeatherSource};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};


pub const DEFAULT_CAPACITY: usize = 20;

/// A single airport holding the planes currently grounded there.
///
/// Every movement is guarded: landings need fair weather and a free stand,
/// takeoffs need the plane to be here and fair weather. The plane's own
/// `land`/`takeoff` runs last and the stored planes only change once it
/// has succeeded.
pub struct Airport<W = RandomWeather> {
    capacity: usize,
    planes: HashMap<PlaneId, Arc<dyn Plane>>,
    weather: W,
}

impl Airport<RandomWeather> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_weather(capacity, RandomWeather::default())
    }
}

impl Default for Airport<RandomWeather> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: WeatherSource> Airport<W> {
    pub fn with_weather(capacity: usize, weather: W) -> Self {
        Airport {
            capacity,
            planes: HashMap::new(),
            weather,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.planes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.planes.len() >= self.capacity
    }

    pub fn planes(&self) -> impl Iterator<Item = &Arc<dyn Plane>> {
        self.planes.values()
    }

    pub fn get(&self, id: &str) -> Option<&Arc<dyn Plane>> {
        self.planes.get(id)
    }

    /// True only for the very plane that landed: another plane carrying the
    /// same callsign is not at this airport.
    pub fn has_plane(&self, plane: &dyn Plane) -> bool {
        self.planes
            .get(plane.id())
            .is_some_and(|grounded| std::ptr::addr_eq(Arc::as_ptr(grounded), plane))
    }

    pub fn weather(&mut self) -> Weather {
        let weather = self.weather.weather();
        debug!(%weather, "weather reading");
        weather
    }

    pub fn weather_source(&self) -> &W {
        &self.weather
    }

    pub fn weather_source_mut(&mut self) -> &mut W {
        &mut self.weather
    }

    pub fn clear_landing<P: Plane + 'static>(&mut self, plane: Arc<P>) -> Result<Arc<P>, AirportError> {
        if self.weather().is_stormy() {
            warn!(plane = %plane.id(), "landing refused, stormy weather");
            return Err(AirportError::StormyWeather);
        }
        if self.is_full() {
            warn!(plane = %plane.id(), capacity = self.capacity, "landing refused, airport at capacity");
            return Err(AirportError::AtCapacity);
        }
        if self.planes.contains_key(plane.id()) && !self.has_plane(&*plane) {
            warn!(plane = %plane.id(), "landing refused, callsign already grounded");
            return Err(AirportError::CallsignInUse(plane.id().clone()));
        }

        plane.land().inspect_err(|e| {
            warn!(plane = %plane.id(), error = %e, "plane failed to land");
        })?;

        let handle: Arc<dyn Plane> = plane.clone();
        self.planes.insert(plane.id().clone(), handle);
        info!(plane = %plane.id(), grounded = self.planes.len(), "landed");
        Ok(plane)
    }

    pub fn clear_takeoff(&mut self, plane: &dyn Plane) -> Result<(), AirportError> {
        if !self.has_plane(plane) {
            warn!(plane = %plane.id(), "takeoff refused, plane not at this airport");
            return Err(AirportError::PlaneNotFound);
        }
        if self.weather().is_stormy() {
            warn!(plane = %plane.id(), "takeoff refused, stormy weather");
            return Err(AirportError::StormyWeather);
        }

        plane.takeoff().inspect_err(|e| {
            warn!(plane = %plane.id(), error = %e, "plane failed to take off");
        })?;

        self.planes.remove(plane.id());
        info!(plane = %plane.id(), grounded = self.planes.len(), "took off");
        Ok(())
    }

    /// Builds a fresh aircraft and clears it to land. On refusal the new
    /// aircraft is dropped.
    pub fn create_plane(&mut self) -> Result<Arc<Aircraft>, AirportError> {
        let mut callsign = next_callsign();
        while self.planes.contains_key(&callsign) {
            callsign = next_callsign();
        }
        debug!(plane = %callsign, "created plane");
        self.clear_landing(Arc::new(Aircraft::new(callsign)))
    }
}
