//! Canned weather source backed by the core crate's JSON fixtures

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use skycast_core::model::{AirPollution, CurrentWeather, Forecast};
use skycast_core::{Coordinate, FetchError, GeoPlace, Locale, WeatherSource, dashboard};
use skycast_core::Dashboard;

pub const CURRENT_WEATHER: &str =
    include_str!("../../../skycast-core/tests/fixtures/current_weather.json");
pub const AIR_POLLUTION: &str =
    include_str!("../../../skycast-core/tests/fixtures/air_pollution.json");
pub const FORECAST: &str = include_str!("../../../skycast-core/tests/fixtures/forecast.json");
pub const REVERSE_GEO: &str = include_str!("../../../skycast-core/tests/fixtures/reverse_geo.json");
pub const DIRECT_GEO: &str = include_str!("../../../skycast-core/tests/fixtures/direct_geo.json");

/// Answers every call from fixtures and records search queries
#[derive(Clone, Default)]
pub struct FixtureSource {
    pub fail_current: bool,
    pub searches: Arc<Mutex<Vec<String>>>,
}

impl FixtureSource {
    pub fn searches(&self) -> Vec<String> {
        self.searches.lock().unwrap().clone()
    }
}

impl WeatherSource for FixtureSource {
    async fn current_weather(&self, _coord: Coordinate) -> Result<CurrentWeather, FetchError> {
        if self.fail_current {
            return Err(FetchError::Status {
                status: 401,
                url: "/data/2.5/weather".into(),
            });
        }
        Ok(serde_json::from_str(CURRENT_WEATHER).unwrap())
    }

    async fn forecast(&self, _coord: Coordinate) -> Result<Forecast, FetchError> {
        Ok(serde_json::from_str(FORECAST).unwrap())
    }

    async fn air_pollution(&self, _coord: Coordinate) -> Result<AirPollution, FetchError> {
        Ok(serde_json::from_str(AIR_POLLUTION).unwrap())
    }

    async fn reverse_geocode(&self, _coord: Coordinate) -> Result<Vec<GeoPlace>, FetchError> {
        Ok(serde_json::from_str(REVERSE_GEO).unwrap())
    }

    async fn search_places(&self, query: &str) -> Result<Vec<GeoPlace>, FetchError> {
        self.searches.lock().unwrap().push(query.to_string());
        Ok(serde_json::from_str(DIRECT_GEO).unwrap())
    }
}

/// Dashboard assembled straight from the fixtures
pub fn fixture_dashboard(coord: Coordinate, locale: Locale) -> Dashboard {
    let weather: CurrentWeather = serde_json::from_str(CURRENT_WEATHER).unwrap();
    let air: AirPollution = serde_json::from_str(AIR_POLLUTION).unwrap();
    let forecast: Forecast = serde_json::from_str(FORECAST).unwrap();
    let places: Vec<GeoPlace> = serde_json::from_str(REVERSE_GEO).unwrap();

    Dashboard {
        coordinate: coord,
        current: dashboard::current_conditions(&weather, locale),
        place: dashboard::place_name(&places),
        highlights: dashboard::highlights(&weather, &air, locale),
        forecast: Ok(dashboard::forecast_view(&forecast, locale)),
    }
}

/// Places returned for any search
pub fn fixture_places() -> Vec<GeoPlace> {
    serde_json::from_str(DIRECT_GEO).unwrap()
}
