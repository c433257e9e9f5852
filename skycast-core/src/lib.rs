//! Core building blocks for SkyCast
//!
//! Everything here is independent of the terminal: the application crate
//! wires these pieces into actions, effects and components.
//!
//! # Core Concepts
//!
//! - **Endpoints / Gateway**: build OpenWeatherMap URLs and fetch typed JSON
//!   with an explicit [`FetchError`] on failure
//! - **Router**: map a navigation hash (`#/weather?lat=1&lon=2`) to exactly
//!   one handler
//! - **Dashboard**: run the weather/place/air/forecast requests and join them
//!   into a single view-model
//! - **Helpers**: locale tables, local date/time labels, unit conversions
//!   and the AQI advisory table
//!
//! # Example
//!
//! ```ignore
//! use skycast_core::{Gateway, GatewayConfig, Locale, load_dashboard, router};
//!
//! let gateway = Gateway::new(GatewayConfig::new("my-api-key"))?;
//! let route = router::app_router().dispatch("#/weather?lat=38.89&lon=-77.04");
//! if let router::Route::Weather(query) = route {
//!     let coord = query.parse()?;
//!     let dashboard = load_dashboard(&gateway, coord, Locale::En).await;
//! }
//! ```

pub mod aqi;
pub mod config;
pub mod dashboard;
pub mod datetime;
pub mod endpoints;
pub mod forecast;
pub mod gateway;
pub mod locale;
pub mod locate;
pub mod model;
pub mod router;
pub mod search;
pub mod units;

pub use aqi::{Aqi, AqiAdvisory, AqiError};
pub use config::GatewayConfig;
pub use dashboard::{
    CurrentConditions, DailyEntry, Dashboard, Highlights, HourlyEntry, Section, SectionError,
    load_dashboard,
};
pub use endpoints::Endpoints;
pub use gateway::{FetchError, Gateway, WeatherSource};
pub use locale::{Locale, LocaleError};
pub use locate::{LocateError, Locator};
pub use model::{Coordinate, CoordinateError, GeoPlace};
pub use router::{LoadOutcome, Route, Router};
