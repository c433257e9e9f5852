//! Hash router
//!
//! A navigation string looks like a browser URL fragment:
//! `#/weather?lat=38.89&lon=-77.04`. The part before the first `?` names the
//! route and is matched exactly; the rest is handed to the handler untouched.
//!
//! Routing is a pure function of the hash. The application re-evaluates it on
//! start-up ([`Router::on_load`]) and on every navigation ([`Router::dispatch`]).

use tracing::debug;

use crate::model::Coordinate;

pub const CURRENT_LOCATION: &str = "/current-location";
pub const WEATHER: &str = "/weather";

/// Hash an empty start-up hash is rewritten to
pub const DEFAULT_HASH: &str = "#/current-location";

/// Where "current location" falls back to when no position is available
/// (Washington, DC)
pub const FALLBACK_HASH: &str = "#/weather?lat=38.889447&lon=-77.035246";

/// Route handler: receives the query string (without `?`)
pub type Handler<T> = fn(&str) -> T;

/// Strip one leading `#` and split on the first `?`
pub fn split_hash(hash: &str) -> (&str, &str) {
    let request = hash.strip_prefix('#').unwrap_or(hash);
    request.split_once('?').unwrap_or((request, ""))
}

/// Navigation hash that shows the weather for `coord`
pub fn weather_hash(coord: Coordinate) -> String {
    format!("#{}?{}", WEATHER, coord.to_query())
}

/// What happened when the router was evaluated at start-up
#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome<T> {
    /// The hash was empty; navigate here instead
    Redirect(&'static str),
    /// A handler ran
    Dispatched(T),
}

/// Static route table plus a not-found handler
pub struct Router<T> {
    routes: Vec<(&'static str, Handler<T>)>,
    not_found: fn(&str) -> T,
}

impl<T> Router<T> {
    /// `not_found` receives the unmatched route name
    pub fn new(not_found: fn(&str) -> T) -> Self {
        Self {
            routes: Vec::new(),
            not_found,
        }
    }

    /// Register `handler` for an exact route name. Later registrations of the
    /// same name replace earlier ones.
    pub fn route(mut self, pattern: &'static str, handler: Handler<T>) -> Self {
        self.routes.retain(|(existing, _)| *existing != pattern);
        self.routes.push((pattern, handler));
        self
    }

    pub fn patterns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.routes.iter().map(|(pattern, _)| *pattern)
    }

    /// Run exactly one handler for `hash`
    pub fn dispatch(&self, hash: &str) -> T {
        let (route, query) = split_hash(hash);
        match self.routes.iter().find(|(pattern, _)| *pattern == route) {
            Some((pattern, handler)) => {
                debug!(route = pattern, query, "route matched");
                handler(query)
            }
            None => {
                debug!(route, "route not found");
                (self.not_found)(route)
            }
        }
    }

    /// Start-up evaluation: an empty hash becomes [`DEFAULT_HASH`]
    pub fn on_load(&self, hash: &str) -> LoadOutcome<T> {
        if hash.is_empty() || hash == "#" {
            LoadOutcome::Redirect(DEFAULT_HASH)
        } else {
            LoadOutcome::Dispatched(self.dispatch(hash))
        }
    }
}

/// What the application should do for a navigation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    CurrentLocation,
    /// Raw query, expected to hold `lat` and `lon`
    Weather(String),
    NotFound(String),
}

/// The application's route table
pub fn app_router() -> Router<Route> {
    Router::new(|route| Route::NotFound(route.to_string()))
        .route(CURRENT_LOCATION, |_| Route::CurrentLocation)
        .route(WEATHER, |query| Route::Weather(query.to_string()))
}
