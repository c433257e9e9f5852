//! Request gateway for the weather provider
//!
//! One GET per call, the API key appended as `appid`, and the body decoded
//! into a typed payload. Every failure is reported as a [`FetchError`]:
//! the caller can tell a dead network from a rejected request from a body
//! that did not match the expected shape.

use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::GatewayConfig;
use crate::endpoints::Endpoints;
use crate::model::{AirPollution, Coordinate, CurrentWeather, Forecast, GeoPlace};

/// Why a request produced no payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),
    /// `url` is the request path; host, query and key are stripped
    #[error("{url} returned HTTP {status}")]
    Status { status: u16, url: String },
    #[error("unexpected response from {url}: {message}")]
    Decode { url: String, message: String },
}

/// The five provider calls the dashboard and search need
///
/// [`Gateway`] is the HTTP implementation; tests substitute canned sources.
pub trait WeatherSource: Send + Sync {
    fn current_weather(
        &self,
        coord: Coordinate,
    ) -> impl Future<Output = Result<CurrentWeather, FetchError>> + Send;

    fn forecast(
        &self,
        coord: Coordinate,
    ) -> impl Future<Output = Result<Forecast, FetchError>> + Send;

    fn air_pollution(
        &self,
        coord: Coordinate,
    ) -> impl Future<Output = Result<AirPollution, FetchError>> + Send;

    fn reverse_geocode(
        &self,
        coord: Coordinate,
    ) -> impl Future<Output = Result<Vec<GeoPlace>, FetchError>> + Send;

    fn search_places(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<GeoPlace>, FetchError>> + Send;
}

/// HTTP client for the weather provider
#[derive(Clone)]
pub struct Gateway {
    client: reqwest::Client,
    endpoints: Endpoints,
    api_key: String,
    timeout: Duration,
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("endpoints", &self.endpoints)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl Gateway {
    /// Build a gateway; the timeout applies to each request individually
    pub fn new(config: GatewayConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            endpoints: Endpoints::new(config.base_url),
            api_key: config.api_key,
            timeout: config.timeout,
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Fetch `url` (with the API key appended) and decode the JSON body
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let path = url_path(url);
        debug!(%path, "fetching");

        let response = self
            .client
            .get(url)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| self.transport_error(&path, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%path, status = status.as_u16(), "request rejected");
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: path,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(&path, e))?;

        serde_json::from_slice(&body).map_err(|e| {
            warn!(%path, error = %e, "undecodable body");
            FetchError::Decode {
                url: path,
                message: e.to_string(),
            }
        })
    }

    fn transport_error(&self, path: &str, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            warn!(%path, "request timed out");
            return FetchError::Timeout(self.timeout);
        }
        // The request URL carries the key; drop it before the error is shown anywhere.
        let err = err.without_url();
        warn!(%path, error = %err, "request failed");
        FetchError::Network(err.to_string())
    }
}

impl WeatherSource for Gateway {
    async fn current_weather(&self, coord: Coordinate) -> Result<CurrentWeather, FetchError> {
        let url = self.endpoints.current_weather(coord.lat, coord.lon);
        self.fetch_json(&url).await
    }

    async fn forecast(&self, coord: Coordinate) -> Result<Forecast, FetchError> {
        let url = self.endpoints.forecast(coord.lat, coord.lon);
        self.fetch_json(&url).await
    }

    async fn air_pollution(&self, coord: Coordinate) -> Result<AirPollution, FetchError> {
        let url = self.endpoints.air_pollution(coord.lat, coord.lon);
        self.fetch_json(&url).await
    }

    async fn reverse_geocode(&self, coord: Coordinate) -> Result<Vec<GeoPlace>, FetchError> {
        let url = self.endpoints.reverse_geo(coord.lat, coord.lon);
        self.fetch_json(&url).await
    }

    async fn search_places(&self, query: &str) -> Result<Vec<GeoPlace>, FetchError> {
        let url = self.endpoints.geo(query);
        self.fetch_json(&url).await
    }
}

/// Path part of a URL, used to name a request in logs and errors
fn url_path(url: &str) -> String {
    let without_query = url.split('?').next().unwrap_or(url);
    match without_query.split_once("://") {
        Some((_, rest)) => rest
            .find('/')
            .map(|idx| rest[idx..].to_string())
            .unwrap_or_else(|| "/".to_string()),
        None => without_query.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_path_strips_host_and_query() {
        assert_eq!(
            url_path("https://api.openweathermap.org/data/2.5/weather?lat=1&lon=2"),
            "/data/2.5/weather"
        );
        assert_eq!(url_path("http://127.0.0.1:9000"), "/");
    }

    #[test]
    fn test_fetch_error_messages() {
        let err = FetchError::Status {
            status: 401,
            url: "/data/2.5/weather".into(),
        };
        assert_eq!(err.to_string(), "/data/2.5/weather returned HTTP 401");

        let err = FetchError::Decode {
            url: "/geo/1.0/direct".into(),
            message: "expected a sequence".into(),
        };
        assert_eq!(
            err.to_string(),
            "unexpected response from /geo/1.0/direct: expected a sequence"
        );

        let err = FetchError::Timeout(Duration::from_secs(10));
        assert_eq!(err.to_string(), "request timed out after 10s");
    }

    #[test]
    fn test_gateway_debug_hides_key() {
        let gateway = Gateway::new(GatewayConfig::new("hidden-key")).unwrap();
        assert!(!format!("{:?}", gateway).contains("hidden-key"));
    }
}
