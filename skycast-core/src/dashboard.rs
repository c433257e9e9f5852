//! Dashboard orchestration
//!
//! Given a coordinate, fetch every section and build the view-model the UI
//! renders. Two branches run concurrently:
//!
//! 1. current weather, then reverse-geocode and air pollution side by side
//!    (both need the current-weather request to have succeeded)
//! 2. the 5-day forecast
//!
//! Both branches are joined, so the caller receives one [`Dashboard`] only
//! after every request finished. Each section carries its own result: one
//! failing endpoint does not blank the rest of the page.

use thiserror::Error;
use tracing::{debug, info};

use crate::aqi::{Aqi, AqiAdvisory};
use crate::datetime::{DayLabel, day_label, get_date, get_hours, get_time};
use crate::forecast::{daily_slice, hourly_slice};
use crate::gateway::{FetchError, WeatherSource};
use crate::locale::Locale;
use crate::model::{AirPollution, Coordinate, CurrentWeather, Forecast, GeoPlace};
use crate::units::{meters_to_km, mps_to_kmh, whole_degrees};

/// Why a section has nothing to show
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// The request this section depends on failed, so it was never made
    #[error("skipped: current conditions unavailable")]
    Skipped,
    /// The payload arrived but cannot be rendered
    #[error("{0}")]
    Invalid(String),
}

pub type Section<T> = Result<T, SectionError>;

#[derive(Clone, Debug, PartialEq)]
pub struct CurrentConditions {
    /// Whole degrees Celsius
    pub temperature: i64,
    pub description: String,
    pub icon: String,
    /// e.g. `"Sunday 10, Jan"`
    pub date: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Highlights {
    pub aqi: Aqi,
    pub advisory: AqiAdvisory,
    pub pm2_5: f64,
    pub so2: f64,
    pub no2: f64,
    pub o3: f64,
    pub sunrise: String,
    pub sunset: String,
    pub humidity: u8,
    pub pressure: u32,
    pub visibility_km: Option<f64>,
    pub feels_like: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HourlyEntry {
    /// e.g. `"3 PM"`
    pub hour: String,
    pub temperature: i64,
    pub icon: String,
    pub description: String,
    pub wind_deg: f64,
    pub wind_kmh: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DailyEntry {
    pub temp_max: i64,
    pub icon: String,
    pub description: String,
    pub day: DayLabel,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ForecastView {
    pub hourly: Vec<HourlyEntry>,
    pub daily: Vec<DailyEntry>,
}

/// Everything the dashboard renders for one coordinate
#[derive(Clone, Debug, PartialEq)]
pub struct Dashboard {
    pub coordinate: Coordinate,
    pub current: Section<CurrentConditions>,
    /// `"<name>, <country>"`
    pub place: Section<String>,
    pub highlights: Section<Highlights>,
    pub forecast: Section<ForecastView>,
}

impl Dashboard {
    /// Names of the sections that failed, for logging
    pub fn failed_sections(&self) -> Vec<&'static str> {
        let mut failed = Vec::new();
        if self.current.is_err() {
            failed.push("current");
        }
        if self.place.is_err() {
            failed.push("place");
        }
        if self.highlights.is_err() {
            failed.push("highlights");
        }
        if self.forecast.is_err() {
            failed.push("forecast");
        }
        failed
    }
}

/// Fetch and assemble every dashboard section for `coord`
pub async fn load_dashboard<S: WeatherSource>(
    source: &S,
    coord: Coordinate,
    locale: Locale,
) -> Dashboard {
    debug!(lat = coord.lat, lon = coord.lon, "loading dashboard");

    let ((current, place, highlights), forecast) = tokio::join!(
        load_weather_branch(source, coord, locale),
        load_forecast_branch(source, coord, locale),
    );

    let dashboard = Dashboard {
        coordinate: coord,
        current,
        place,
        highlights,
        forecast,
    };
    info!(failed = ?dashboard.failed_sections(), "dashboard loaded");
    dashboard
}

async fn load_weather_branch<S: WeatherSource>(
    source: &S,
    coord: Coordinate,
    locale: Locale,
) -> (
    Section<CurrentConditions>,
    Section<String>,
    Section<Highlights>,
) {
    let weather = match source.current_weather(coord).await {
        Ok(weather) => weather,
        Err(e) => {
            return (
                Err(e.into()),
                Err(SectionError::Skipped),
                Err(SectionError::Skipped),
            );
        }
    };

    let current = current_conditions(&weather, locale);

    let (places, air) = tokio::join!(source.reverse_geocode(coord), source.air_pollution(coord));

    let place = places
        .map_err(SectionError::from)
        .and_then(|places| place_name(&places));
    let highlights = air
        .map_err(SectionError::from)
        .and_then(|air| highlights(&weather, &air, locale));

    (current, place, highlights)
}

async fn load_forecast_branch<S: WeatherSource>(
    source: &S,
    coord: Coordinate,
    locale: Locale,
) -> Section<ForecastView> {
    let forecast = source.forecast(coord).await?;
    Ok(forecast_view(&forecast, locale))
}

pub fn current_conditions(weather: &CurrentWeather, locale: Locale) -> Section<CurrentConditions> {
    let condition = weather
        .weather
        .first()
        .ok_or_else(|| SectionError::Invalid("no weather condition reported".into()))?;

    Ok(CurrentConditions {
        temperature: whole_degrees(weather.main.temp),
        description: condition.description.clone(),
        icon: condition.icon.clone(),
        date: get_date(weather.dt, weather.timezone, locale),
    })
}

pub fn place_name(places: &[GeoPlace]) -> Section<String> {
    places
        .first()
        .map(GeoPlace::display_name)
        .ok_or_else(|| SectionError::Invalid("no place found for this location".into()))
}

pub fn highlights(
    weather: &CurrentWeather,
    air: &AirPollution,
    locale: Locale,
) -> Section<Highlights> {
    let sample = air
        .list
        .first()
        .ok_or_else(|| SectionError::Invalid("no air quality sample".into()))?;
    let aqi = Aqi::try_from(sample.main.aqi).map_err(|e| SectionError::Invalid(e.to_string()))?;

    Ok(Highlights {
        aqi,
        advisory: aqi.advisory(locale),
        pm2_5: sample.components.pm2_5,
        so2: sample.components.so2,
        no2: sample.components.no2,
        o3: sample.components.o3,
        sunrise: get_time(weather.sys.sunrise, weather.timezone),
        sunset: get_time(weather.sys.sunset, weather.timezone),
        humidity: weather.main.humidity,
        pressure: weather.main.pressure,
        visibility_km: weather.visibility.map(meters_to_km),
        feels_like: whole_degrees(weather.main.feels_like),
    })
}

/// Samples without a weather condition are left out
pub fn forecast_view(forecast: &Forecast, locale: Locale) -> ForecastView {
    let tz = forecast.city.timezone;

    let hourly = hourly_slice(&forecast.list)
        .iter()
        .filter_map(|sample| {
            let condition = sample.weather.first()?;
            Some(HourlyEntry {
                hour: get_hours(sample.dt, tz),
                temperature: whole_degrees(sample.main.temp),
                icon: condition.icon.clone(),
                description: condition.description.clone(),
                wind_deg: sample.wind.deg,
                wind_kmh: whole_degrees(mps_to_kmh(sample.wind.speed)),
            })
        })
        .collect();

    let daily = daily_slice(&forecast.list)
        .filter_map(|sample| {
            let condition = sample.weather.first()?;
            Some(DailyEntry {
                temp_max: whole_degrees(sample.main.temp_max),
                icon: condition.icon.clone(),
                description: condition.description.clone(),
                day: day_label(sample.dt, tz, locale),
            })
        })
        .collect();

    ForecastView { hourly, daily }
}
