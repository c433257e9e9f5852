//! OpenWeatherMap URL builders
//!
//! Builders only produce the endpoint URL; the API key is appended by the
//! [`Gateway`](crate::Gateway) at request time so URLs are safe to log.

use crate::config::DEFAULT_BASE_URL;

/// Maximum number of places returned by the geocoding endpoints
pub const GEO_LIMIT: usize = 5;

/// Unit system requested from every endpoint
pub const UNITS: &str = "metric";

/// Builds fully qualified endpoint URLs against a base host
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl Endpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current conditions
    pub fn current_weather(&self, lat: f64, lon: f64) -> String {
        format!(
            "{}/data/2.5/weather?lat={}&lon={}&units={}",
            self.base_url, lat, lon, UNITS
        )
    }

    /// 5-day forecast at 3-hour intervals
    pub fn forecast(&self, lat: f64, lon: f64) -> String {
        format!(
            "{}/data/2.5/forecast?lat={}&lon={}&units={}",
            self.base_url, lat, lon, UNITS
        )
    }

    pub fn air_pollution(&self, lat: f64, lon: f64) -> String {
        format!(
            "{}/data/2.5/air_pollution?lat={}&lon={}&units={}",
            self.base_url, lat, lon, UNITS
        )
    }

    /// Place names near a coordinate
    pub fn reverse_geo(&self, lat: f64, lon: f64) -> String {
        format!(
            "{}/geo/1.0/reverse?lat={}&lon={}&limit={}&units={}",
            self.base_url, lat, lon, GEO_LIMIT, UNITS
        )
    }

    /// Places matching a free-text query, e.g. `"London"` or `"New York"`
    pub fn geo(&self, query: &str) -> String {
        format!(
            "{}/geo/1.0/direct?q={}&limit={}&units={}",
            self.base_url,
            urlencoding::encode(query),
            GEO_LIMIT,
            UNITS
        )
    }
}
