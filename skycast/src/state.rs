//! Application state - single source of truth
//!
//! Components receive `&AppState` (or parts of it) as props; only the
//! reducer mutates it.

use skycast_core::{Coordinate, Dashboard, GeoPlace, Locale};

/// Spinner frame interval
pub const LOADING_ANIM_TICK_MS: u64 = 100;

/// What the router resolved the current hash to
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ActiveRoute {
    /// Nothing evaluated yet
    #[default]
    Pending,
    CurrentLocation,
    Weather(Coordinate),
    NotFound(String),
}

impl ActiveRoute {
    pub fn is_current_location(&self) -> bool {
        matches!(self, ActiveRoute::CurrentLocation)
    }
}

/// Location search overlay
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    pub open: bool,
    pub query: String,
    pub results: Vec<GeoPlace>,
    pub selected: usize,
    /// A lookup is armed or running
    pub is_searching: bool,
    pub error: Option<String>,
}

impl SearchState {
    pub fn selected_place(&self) -> Option<&GeoPlace> {
        self.results.get(self.selected)
    }
}

/// Everything the UI needs to render
#[derive(Clone, Debug)]
pub struct AppState {
    /// Current navigation string, e.g. `#/weather?lat=1&lon=2`
    pub hash: String,

    pub route: ActiveRoute,

    /// Incremented on every navigation; async results tagged with an older
    /// value are ignored
    pub navigation: u64,

    /// Last fully loaded dashboard for the active route
    pub dashboard: Option<Dashboard>,

    /// True from navigation until every dashboard branch finished
    pub is_loading: bool,

    /// One-line message shown under the header (e.g. location fallback)
    pub notice: Option<String>,

    pub locale: Locale,

    pub search: SearchState,

    /// Animation frame counter (for loading spinner)
    pub tick_count: u32,

    pub terminal_size: (u16, u16),
}

impl AppState {
    pub fn new(locale: Locale) -> Self {
        Self {
            hash: String::new(),
            route: ActiveRoute::Pending,
            navigation: 0,
            dashboard: None,
            is_loading: false,
            notice: None,
            locale,
            search: SearchState::default(),
            tick_count: 0,
            terminal_size: (80, 24),
        }
    }

    /// Heading for the header line: place name once known, else coordinates
    pub fn title(&self) -> Option<String> {
        if let Some(dashboard) = &self.dashboard {
            return Some(match &dashboard.place {
                Ok(place) => place.clone(),
                Err(_) => dashboard.coordinate.to_string(),
            });
        }
        match &self.route {
            ActiveRoute::Weather(coord) => Some(coord.to_string()),
            ActiveRoute::CurrentLocation => Some("Current location".to_string()),
            _ => None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}
