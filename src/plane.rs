use crate::error::PlaneError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

pub type PlaneId = Arc<str>;

/// Something the tower can clear to land or take off.
///
/// Identity is the callsign returned by [`Plane::id`]: two handles with the
/// same callsign are the same plane as far as an airport is concerned.
pub trait Plane: fmt::Debug {
    fn id(&self) -> &PlaneId;

    fn model(&self) -> Option<&str> {
        None
    }

    fn land(&self) -> Result<(), PlaneError>;

    fn takeoff(&self) -> Result<(), PlaneError>;
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    pub id: PlaneId,
    #[serde(default)]
    pub model: Option<Arc<str>>,
}

impl Aircraft {
    pub fn new(id: impl Into<PlaneId>) -> Self {
        Aircraft {
            id: id.into(),
            model: None,
        }
    }

    pub fn with_model(id: impl Into<PlaneId>, model: impl Into<Arc<str>>) -> Self {
        Aircraft {
            id: id.into(),
            model: Some(model.into()),
        }
    }
}

impl Plane for Aircraft {
    fn id(&self) -> &PlaneId {
        &self.id
    }

    fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    fn land(&self) -> Result<(), PlaneError> {
        Ok(())
    }

    fn takeoff(&self) -> Result<(), PlaneError> {
        Ok(())
    }
}

impl fmt::Display for Aircraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

static NEXT_SERIAL: AtomicU64 = AtomicU64::new(1);

/// Hands out process-unique callsigns: N0001, N0002, ...
pub fn next_callsign() -> PlaneId {
    let serial = NEXT_SERIAL.fetch_add(1, Ordering::Relaxed);
    Arc::from(format!("N{:04}", serial))
}
