//! Actions
//!
//! Naming convention:
//! - Prefix names the area: `Route*`, `Location*`, `Dashboard*`, `Search*`, `Ui*`
//! - `Did` marks the result of an async task
//! - Results carry the navigation id they were started under, so the reducer
//!   can drop answers to a navigation the user already left

use skycast_core::{Coordinate, Dashboard, GeoPlace};
use tui_dispatch::ActionSummary;

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq)]
#[action(infer_categories)]
pub enum Action {
    // ===== Route =====
    /// Start-up evaluation of the initial hash (empty hash is rewritten)
    RouteLoad(String),

    /// Navigate to a hash; same as a browser `hashchange`
    RouteNavigate(String),

    // ===== Location =====
    /// Result: current location resolved
    LocationDidResolve { navigation: u64, coord: Coordinate },

    /// Result: current location unavailable
    LocationDidFail { navigation: u64, error: String },

    // ===== Dashboard =====
    /// Reload the active route
    DashboardRefresh,

    /// Result: every dashboard branch finished
    DashboardDidLoad {
        navigation: u64,
        dashboard: Box<Dashboard>,
    },

    // ===== Search =====
    SearchOpen,
    SearchClose,
    SearchQueryChange(String),
    /// Highlight the result at this index
    SearchSelect(usize),
    /// Navigate to the highlighted result
    SearchConfirm,

    /// Result: places for `query`
    SearchDidLoad { query: String, places: Vec<GeoPlace> },

    /// Result: lookup for `query` failed
    SearchDidError { query: String, error: String },

    // ===== UI =====
    UiTerminalResize(u16, u16),

    // ===== Global =====
    /// Periodic tick for the loading spinner
    Tick,

    Quit,
}

impl ActionSummary for Action {
    /// Concise form for logs instead of full Debug output on data-heavy actions
    fn summary(&self) -> String {
        match self {
            Action::DashboardDidLoad {
                navigation,
                dashboard,
            } => format!(
                "DashboardDidLoad {{ navigation: {}, at: {}, failed: {:?} }}",
                navigation,
                dashboard.coordinate,
                dashboard.failed_sections()
            ),
            Action::SearchDidLoad { query, places } => {
                format!("SearchDidLoad {{ query: {:?}, places: {} }}", query, places.len())
            }
            // Truncate long error messages
            Action::SearchDidError { query, error } => {
                format!("SearchDidError {{ query: {:?}, error: {:?} }}", query, truncate(error))
            }
            _ => format!("{:?}", self),
        }
    }
}

fn truncate(msg: &str) -> String {
    if msg.chars().count() > 40 {
        format!("{}...", msg.chars().take(37).collect::<String>())
    } else {
        msg.to_string()
    }
}
