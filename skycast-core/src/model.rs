//! Coordinates and the JSON payloads returned by the weather provider
//!
//! Payload structs only declare the fields the dashboard reads; everything
//! else in the provider's response is ignored by serde.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// Coordinate
// ============================================================================

/// A geographic position. No range validation is performed.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Render as a route query: `lat=<lat>&lon=<lon>`
    pub fn to_query(&self) -> String {
        format!("lat={}&lon={}", self.lat, self.lon)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°, {:.2}°", self.lat, self.lon)
    }
}

/// Failure to read a coordinate out of a route query
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    #[error("missing `{0}` parameter")]
    Missing(&'static str),
    #[error("invalid `{param}` value: {value:?}")]
    Invalid { param: &'static str, value: String },
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    /// Parse `lat=..&lon=..` in any order; unknown parameters are ignored.
    fn from_str(query: &str) -> Result<Self, Self::Err> {
        let mut lat = None;
        let mut lon = None;

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "lat" => lat = Some(parse_param("lat", value)?),
                "lon" => lon = Some(parse_param("lon", value)?),
                _ => {}
            }
        }

        Ok(Self {
            lat: lat.ok_or(CoordinateError::Missing("lat"))?,
            lon: lon.ok_or(CoordinateError::Missing("lon"))?,
        })
    }
}

fn parse_param(param: &'static str, value: &str) -> Result<f64, CoordinateError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CoordinateError::Invalid {
            param,
            value: value.to_string(),
        })
}

// ============================================================================
// Current weather (`/data/2.5/weather`)
// ============================================================================

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct WeatherCondition {
    pub description: String,
    pub icon: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub pressure: u32,
    pub humidity: u8,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SunTimes {
    pub sunrise: i64,
    pub sunset: i64,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CurrentWeather {
    pub weather: Vec<WeatherCondition>,
    /// Observation time, epoch seconds
    pub dt: i64,
    pub sys: SunTimes,
    pub main: MainReadings,
    /// Meters; absent for some stations
    #[serde(default)]
    pub visibility: Option<f64>,
    /// Seconds east of UTC
    pub timezone: i32,
}

// ============================================================================
// Air pollution (`/data/2.5/air_pollution`)
// ============================================================================

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AirIndex {
    pub aqi: u8,
}

/// Pollutant concentrations in μg/m³
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AirComponents {
    pub no2: f64,
    pub o3: f64,
    pub so2: f64,
    pub pm2_5: f64,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AirSample {
    pub main: AirIndex,
    pub components: AirComponents,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AirPollution {
    pub list: Vec<AirSample>,
}

// ============================================================================
// Forecast (`/data/2.5/forecast`, 3-hour cadence)
// ============================================================================

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ForecastReadings {
    pub temp: f64,
    pub temp_max: f64,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Wind {
    /// Meters per second
    pub speed: f64,
    /// Meteorological degrees (direction the wind comes from)
    pub deg: f64,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ForecastSample {
    pub dt: i64,
    pub main: ForecastReadings,
    pub weather: Vec<WeatherCondition>,
    pub wind: Wind,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ForecastCity {
    pub timezone: i32,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Forecast {
    pub list: Vec<ForecastSample>,
    pub city: ForecastCity,
}

// ============================================================================
// Geocoding (`/geo/1.0/direct`, `/geo/1.0/reverse`)
// ============================================================================

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct GeoPlace {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub state: Option<String>,
}

impl GeoPlace {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }

    /// `"<name>, <country>"`, or just the name when the country is unknown
    pub fn display_name(&self) -> String {
        if self.country.is_empty() {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, self.country)
        }
    }

    /// Second line of a search result: `"<state> <country>"`
    pub fn region(&self) -> String {
        match self.state.as_deref() {
            Some(state) if !state.is_empty() => format!("{} {}", state, self.country),
            _ => self.country.clone(),
        }
    }
}
