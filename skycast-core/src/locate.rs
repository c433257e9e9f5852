//! "Current location" resolution
//!
//! A terminal has no geolocation service, so the current location is a
//! configured home coordinate. Without one, lookup fails and the caller
//! falls back to [`FALLBACK_HASH`](crate::router::FALLBACK_HASH).

use thiserror::Error;

use crate::model::Coordinate;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocateError {
    #[error("current location is not configured (set --home-lat and --home-lon)")]
    Unavailable,
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Locator {
    Fixed(Coordinate),
    #[default]
    Unavailable,
}

impl Locator {
    /// Build from an optional `(lat, lon)` pair; a half-configured pair is
    /// treated as not configured
    pub fn from_parts(lat: Option<f64>, lon: Option<f64>) -> Self {
        match (lat, lon) {
            (Some(lat), Some(lon)) => Locator::Fixed(Coordinate::new(lat, lon)),
            _ => Locator::Unavailable,
        }
    }

    pub fn locate(&self) -> Result<Coordinate, LocateError> {
        match self {
            Locator::Fixed(coord) => Ok(*coord),
            Locator::Unavailable => Err(LocateError::Unavailable),
        }
    }
}
