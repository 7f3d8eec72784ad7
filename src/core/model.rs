use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Server-assigned orphanage identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct OrphanageId(pub i64);

impl fmt::Display for OrphanageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read model returned by `GET orphanages`. Fields beyond these are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Orphanage {
    pub id: OrphanageId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Orphanage {
    pub fn position(&self) -> Result<Position, PositionError> {
        Position::new(self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("coordinates must be finite numbers")]
    NonFinite,
    #[error("latitude must be within [-90, 90]")]
    LatitudeOutOfRange,
    #[error("longitude must be within [-180, 180]")]
    LongitudeOutOfRange,
}

/// Latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    latitude: f64,
    longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, PositionError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(PositionError::NonFinite);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(PositionError::LatitudeOutOfRange);
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(PositionError::LongitudeOutOfRange);
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// A rectangular map viewport described by its center and angular extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub center: Position,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Region {
    pub const DEFAULT_LATITUDE: f64 = -21.6119002;
    pub const DEFAULT_LONGITUDE: f64 = -48.3647899;
    pub const DEFAULT_DELTA: f64 = 0.008;

    /// Fraction of the viewport at which `position` lies, `(0, 0)` being the
    /// north-west corner. Positions outside the viewport return `None`.
    pub fn project(&self, position: Position) -> Option<(f64, f64)> {
        let west = self.center.longitude() - self.longitude_delta / 2.0;
        let north = self.center.latitude() + self.latitude_delta / 2.0;
        let x = (position.longitude() - west) / self.longitude_delta;
        let y = (north - position.latitude()) / self.latitude_delta;
        ((0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y)).then_some((x, y))
    }
}

impl Default for Region {
    fn default() -> Self {
        Self {
            center: Position {
                latitude: Self::DEFAULT_LATITUDE,
                longitude: Self::DEFAULT_LONGITUDE,
            },
            latitude_delta: Self::DEFAULT_DELTA,
            longitude_delta: Self::DEFAULT_DELTA,
        }
    }
}
