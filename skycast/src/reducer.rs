//! Reducer - (state, action) -> (changed, effects)
//!
//! All state mutations happen here. Navigation goes through the hash router:
//! each new hash bumps `navigation`, runs exactly one route handler and
//! replaces whatever the previous route had in flight.

use std::sync::LazyLock;

use skycast_core::router::{self, FALLBACK_HASH, LoadOutcome, Route, Router};
use skycast_core::search::normalize_query;
use skycast_core::Coordinate;
use tracing::{info, warn};
use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{ActiveRoute, AppState};

static ROUTER: LazyLock<Router<Route>> = LazyLock::new(router::app_router);

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Route =====
        Action::RouteLoad(hash) => match ROUTER.on_load(&hash) {
            LoadOutcome::Redirect(target) => navigate(state, target.to_string()),
            LoadOutcome::Dispatched(route) => {
                state.hash = hash;
                enter_route(state, route)
            }
        },

        Action::RouteNavigate(hash) => {
            // Assigning the same hash is not a navigation.
            if hash == state.hash {
                return DispatchResult::unchanged();
            }
            navigate(state, hash)
        }

        // ===== Location =====
        Action::LocationDidResolve { navigation, coord } => {
            if navigation != state.navigation {
                return DispatchResult::unchanged();
            }
            start_load(state, coord)
        }

        Action::LocationDidFail { navigation, error } => {
            if navigation != state.navigation {
                return DispatchResult::unchanged();
            }
            warn!(%error, "current location unavailable, using fallback");
            let result = navigate(state, FALLBACK_HASH.to_string());
            state.notice = Some(format!("{error}. Showing the default location."));
            result
        }

        // ===== Dashboard =====
        Action::DashboardRefresh => {
            if matches!(state.route, ActiveRoute::Pending) {
                return DispatchResult::unchanged();
            }
            let route = ROUTER.dispatch(&state.hash);
            enter_route(state, route)
        }

        Action::DashboardDidLoad {
            navigation,
            dashboard,
        } => {
            if navigation != state.navigation {
                // Answer to a navigation the user already left.
                return DispatchResult::unchanged();
            }
            state.dashboard = Some(*dashboard);
            state.is_loading = false;
            DispatchResult::changed()
        }

        // ===== Search =====
        Action::SearchOpen => {
            if state.search.open {
                return DispatchResult::unchanged();
            }
            state.search = Default::default();
            state.search.open = true;
            DispatchResult::changed()
        }

        Action::SearchClose => {
            if !state.search.open {
                return DispatchResult::unchanged();
            }
            state.search = Default::default();
            DispatchResult::changed_with(Effect::CancelSearch)
        }

        Action::SearchQueryChange(query) => {
            state.search.query = query;
            state.search.error = None;
            match normalize_query(&state.search.query) {
                Some(query) => {
                    state.search.is_searching = true;
                    DispatchResult::changed_with(Effect::SearchPlaces {
                        query: query.to_string(),
                    })
                }
                None => {
                    state.search.results.clear();
                    state.search.selected = 0;
                    state.search.is_searching = false;
                    DispatchResult::changed_with(Effect::CancelSearch)
                }
            }
        }

        Action::SearchDidLoad { query, places } => {
            if !is_current_query(state, &query) {
                return DispatchResult::unchanged();
            }
            state.search.results = places;
            state.search.selected = 0;
            state.search.is_searching = false;
            state.search.error = None;
            DispatchResult::changed()
        }

        Action::SearchDidError { query, error } => {
            if !is_current_query(state, &query) {
                return DispatchResult::unchanged();
            }
            state.search.results.clear();
            state.search.is_searching = false;
            state.search.error = Some(error);
            DispatchResult::changed()
        }

        Action::SearchSelect(index) => {
            if index >= state.search.results.len() || index == state.search.selected {
                return DispatchResult::unchanged();
            }
            state.search.selected = index;
            DispatchResult::changed()
        }

        Action::SearchConfirm => {
            let Some(place) = state.search.selected_place() else {
                return DispatchResult::unchanged();
            };
            let hash = router::weather_hash(place.coordinate());
            state.search = Default::default();

            if hash == state.hash {
                return DispatchResult::changed_with(Effect::CancelSearch);
            }
            let mut result = navigate(state, hash);
            result.effects.insert(0, Effect::CancelSearch);
            result
        }

        // ===== UI =====
        Action::UiTerminalResize(width, height) => {
            if state.terminal_size == (width, height) {
                return DispatchResult::unchanged();
            }
            state.terminal_size = (width, height);
            DispatchResult::changed()
        }

        // ===== Global =====
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // only re-render while a spinner is visible
            if state.is_loading || state.search.is_searching {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // Quit is handled in the runtime loop.
        Action::Quit => DispatchResult::unchanged(),
    }
}

fn navigate(state: &mut AppState, hash: String) -> DispatchResult<Effect> {
    info!(%hash, "navigate");
    let route = ROUTER.dispatch(&hash);
    state.hash = hash;
    enter_route(state, route)
}

/// Run the handler for `route` under a fresh navigation id
fn enter_route(state: &mut AppState, route: Route) -> DispatchResult<Effect> {
    state.navigation += 1;
    state.dashboard = None;
    state.notice = None;

    match route {
        Route::CurrentLocation => {
            state.route = ActiveRoute::CurrentLocation;
            state.is_loading = true;
            DispatchResult::changed_with(Effect::CancelDashboard).with(Effect::LocateDevice {
                navigation: state.navigation,
            })
        }
        Route::Weather(query) => match query.parse::<Coordinate>() {
            Ok(coord) => {
                state.route = ActiveRoute::Weather(coord);
                start_load(state, coord)
            }
            Err(e) => {
                warn!(%query, error = %e, "malformed weather route");
                not_found(state, format!("{}?{}", router::WEATHER, query))
            }
        },
        Route::NotFound(path) => not_found(state, path),
    }
}

fn start_load(state: &mut AppState, coord: Coordinate) -> DispatchResult<Effect> {
    state.is_loading = true;
    state.dashboard = None;
    DispatchResult::changed_with(Effect::LoadDashboard {
        navigation: state.navigation,
        coord,
    })
}

fn not_found(state: &mut AppState, path: String) -> DispatchResult<Effect> {
    state.route = ActiveRoute::NotFound(path);
    state.is_loading = false;
    DispatchResult::changed_with(Effect::CancelDashboard)
}

fn is_current_query(state: &AppState, query: &str) -> bool {
    state.search.open && normalize_query(&state.search.query) == Some(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skycast_core::dashboard::ForecastView;
    use skycast_core::router::DEFAULT_HASH;
    use skycast_core::{Dashboard, FetchError, GeoPlace, SectionError};

    fn dashboard_at(coord: Coordinate) -> Box<Dashboard> {
        Box::new(Dashboard {
            coordinate: coord,
            current: Err(SectionError::Fetch(FetchError::Network("offline".into()))),
            place: Err(SectionError::Skipped),
            highlights: Err(SectionError::Skipped),
            forecast: Ok(ForecastView::default()),
        })
    }

    fn place(name: &str, lat: f64, lon: f64) -> GeoPlace {
        GeoPlace {
            name: name.into(),
            lat,
            lon,
            country: "GB".into(),
            state: None,
        }
    }

    #[test]
    fn test_empty_hash_on_load_redirects_to_current_location() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::RouteLoad(String::new()));

        assert!(result.changed);
        assert_eq!(state.hash, DEFAULT_HASH);
        assert_eq!(state.route, ActiveRoute::CurrentLocation);
        assert!(state.is_loading);
        assert_eq!(
            result.effects,
            vec![
                Effect::CancelDashboard,
                Effect::LocateDevice { navigation: 1 }
            ]
        );
    }

    #[test]
    fn test_weather_route_loads_dashboard() {
        let mut state = AppState::default();

        let result = reducer(
            &mut state,
            Action::RouteLoad("#/weather?lat=1&lon=2".into()),
        );

        assert_eq!(state.route, ActiveRoute::Weather(Coordinate::new(1.0, 2.0)));
        assert!(state.is_loading);
        assert_eq!(
            result.effects,
            vec![Effect::LoadDashboard {
                navigation: 1,
                coord: Coordinate::new(1.0, 2.0),
            }]
        );
    }

    #[test]
    fn test_unknown_route_not_found() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::RouteNavigate("#/unknown".into()));

        assert_eq!(state.route, ActiveRoute::NotFound("/unknown".into()));
        assert!(!state.is_loading);
        assert_eq!(result.effects, vec![Effect::CancelDashboard]);
    }

    #[test]
    fn test_malformed_weather_query_is_not_found() {
        let mut state = AppState::default();

        reducer(&mut state, Action::RouteNavigate("#/weather?lat=abc".into()));

        assert!(matches!(state.route, ActiveRoute::NotFound(_)));
        assert!(!state.is_loading);
    }

    #[test]
    fn test_same_hash_is_not_a_navigation() {
        let mut state = AppState::default();
        reducer(&mut state, Action::RouteNavigate("#/weather?lat=1&lon=2".into()));
        let navigation = state.navigation;

        let result = reducer(&mut state, Action::RouteNavigate("#/weather?lat=1&lon=2".into()));

        assert!(!result.changed);
        assert!(result.effects.is_empty());
        assert_eq!(state.navigation, navigation);
    }

    #[test]
    fn test_location_resolved_starts_load() {
        let mut state = AppState::default();
        reducer(&mut state, Action::RouteLoad(String::new()));

        let coord = Coordinate::new(48.85, 2.35);
        let result = reducer(
            &mut state,
            Action::LocationDidResolve {
                navigation: 1,
                coord,
            },
        );

        assert_eq!(state.route, ActiveRoute::CurrentLocation);
        assert_eq!(
            result.effects,
            vec![Effect::LoadDashboard {
                navigation: 1,
                coord
            }]
        );
    }

    #[test]
    fn test_location_failure_redirects_to_fallback() {
        let mut state = AppState::default();
        reducer(&mut state, Action::RouteLoad(String::new()));

        let result = reducer(
            &mut state,
            Action::LocationDidFail {
                navigation: 1,
                error: "current location is not configured".into(),
            },
        );

        assert_eq!(state.hash, FALLBACK_HASH);
        assert_eq!(
            state.route,
            ActiveRoute::Weather(Coordinate::new(38.889447, -77.035246))
        );
        assert!(state.notice.as_deref().unwrap().contains("not configured"));
        assert!(matches!(
            result.effects.as_slice(),
            [Effect::LoadDashboard { navigation: 2, .. }]
        ));
    }

    #[test]
    fn test_stale_dashboard_is_ignored() {
        let mut state = AppState::default();
        reducer(&mut state, Action::RouteNavigate("#/weather?lat=1&lon=2".into()));
        reducer(&mut state, Action::RouteNavigate("#/weather?lat=3&lon=4".into()));
        assert_eq!(state.navigation, 2);

        let result = reducer(
            &mut state,
            Action::DashboardDidLoad {
                navigation: 1,
                dashboard: dashboard_at(Coordinate::new(1.0, 2.0)),
            },
        );
        assert!(!result.changed);
        assert!(state.is_loading);
        assert!(state.dashboard.is_none());

        let result = reducer(
            &mut state,
            Action::DashboardDidLoad {
                navigation: 2,
                dashboard: dashboard_at(Coordinate::new(3.0, 4.0)),
            },
        );
        assert!(result.changed);
        assert!(!state.is_loading);
        assert_eq!(
            state.dashboard.as_ref().unwrap().coordinate,
            Coordinate::new(3.0, 4.0)
        );
    }

    #[test]
    fn test_refresh_reruns_active_route() {
        let mut state = AppState::default();
        reducer(&mut state, Action::RouteNavigate("#/weather?lat=1&lon=2".into()));
        reducer(
            &mut state,
            Action::DashboardDidLoad {
                navigation: 1,
                dashboard: dashboard_at(Coordinate::new(1.0, 2.0)),
            },
        );

        let result = reducer(&mut state, Action::DashboardRefresh);

        assert!(state.is_loading);
        assert!(state.dashboard.is_none());
        assert_eq!(
            result.effects,
            vec![Effect::LoadDashboard {
                navigation: 2,
                coord: Coordinate::new(1.0, 2.0),
            }]
        );
    }

    #[test]
    fn test_refresh_before_load_is_ignored() {
        let mut state = AppState::default();
        let result = reducer(&mut state, Action::DashboardRefresh);
        assert!(!result.changed);
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_search_query_arms_lookup() {
        let mut state = AppState::default();
        reducer(&mut state, Action::SearchOpen);

        let result = reducer(&mut state, Action::SearchQueryChange(" Lond".into()));

        assert!(state.search.is_searching);
        assert_eq!(
            result.effects,
            vec![Effect::SearchPlaces {
                query: "Lond".into()
            }]
        );
    }

    #[test]
    fn test_empty_query_cancels_lookup() {
        let mut state = AppState::default();
        reducer(&mut state, Action::SearchOpen);
        reducer(&mut state, Action::SearchQueryChange("L".into()));

        let result = reducer(&mut state, Action::SearchQueryChange(String::new()));

        assert!(!state.search.is_searching);
        assert!(state.search.results.is_empty());
        assert_eq!(result.effects, vec![Effect::CancelSearch]);
    }

    #[test]
    fn test_stale_search_results_dropped() {
        let mut state = AppState::default();
        reducer(&mut state, Action::SearchOpen);
        reducer(&mut state, Action::SearchQueryChange("Lisbon".into()));

        let result = reducer(
            &mut state,
            Action::SearchDidLoad {
                query: "Lis".into(),
                places: vec![place("Lismore", 1.0, 1.0)],
            },
        );

        assert!(!result.changed);
        assert!(state.search.results.is_empty());
        assert!(state.search.is_searching);
    }

    #[test]
    fn test_search_error_shown() {
        let mut state = AppState::default();
        reducer(&mut state, Action::SearchOpen);
        reducer(&mut state, Action::SearchQueryChange("Lisbon".into()));

        reducer(
            &mut state,
            Action::SearchDidError {
                query: "Lisbon".into(),
                error: "network error".into(),
            },
        );

        assert_eq!(state.search.error.as_deref(), Some("network error"));
        assert!(!state.search.is_searching);
    }

    #[test]
    fn test_search_select_stays_in_range() {
        let mut state = AppState::default();
        reducer(&mut state, Action::SearchOpen);
        reducer(&mut state, Action::SearchQueryChange("London".into()));
        reducer(
            &mut state,
            Action::SearchDidLoad {
                query: "London".into(),
                places: vec![place("London", 51.5, -0.12), place("London", 42.98, -81.24)],
            },
        );

        assert!(reducer(&mut state, Action::SearchSelect(1)).changed);
        assert_eq!(state.search.selected, 1);
        assert!(!reducer(&mut state, Action::SearchSelect(1)).changed);
        assert!(!reducer(&mut state, Action::SearchSelect(2)).changed);
        assert_eq!(state.search.selected, 1);
    }

    #[test]
    fn test_search_confirm_navigates_to_weather() {
        let mut state = AppState::default();
        reducer(&mut state, Action::SearchOpen);
        reducer(&mut state, Action::SearchQueryChange("London".into()));
        reducer(
            &mut state,
            Action::SearchDidLoad {
                query: "London".into(),
                places: vec![place("London", 51.5, -0.12)],
            },
        );

        let result = reducer(&mut state, Action::SearchConfirm);

        assert!(!state.search.open);
        assert_eq!(state.hash, "#/weather?lat=51.5&lon=-0.12");
        assert_eq!(state.route, ActiveRoute::Weather(Coordinate::new(51.5, -0.12)));
        assert_eq!(
            result.effects,
            vec![
                Effect::CancelSearch,
                Effect::LoadDashboard {
                    navigation: 1,
                    coord: Coordinate::new(51.5, -0.12),
                }
            ]
        );
    }

    #[test]
    fn test_search_confirm_without_results() {
        let mut state = AppState::default();
        reducer(&mut state, Action::SearchOpen);
        let result = reducer(&mut state, Action::SearchConfirm);
        assert!(!result.changed);
        assert!(state.search.open);
    }

    #[test]
    fn test_tick_only_rerenders_when_loading() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::Tick);
        assert!(!result.changed);

        state.is_loading = true;
        let result = reducer(&mut state, Action::Tick);
        assert!(result.changed);
        assert_eq!(state.tick_count, 2);
    }

    #[test]
    fn test_terminal_resize() {
        let mut state = AppState::default();

        assert!(reducer(&mut state, Action::UiTerminalResize(100, 40)).changed);
        assert_eq!(state.terminal_size, (100, 40));
        assert!(!reducer(&mut state, Action::UiTerminalResize(100, 40)).changed);
    }
}
