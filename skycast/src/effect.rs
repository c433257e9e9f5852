//! Effects - side effects declared by the reducer
//!
//! Effects are returned from the reducer and handled by the main loop.
//! This keeps the reducer pure while making async operations explicit.

use skycast_core::Coordinate;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Resolve the current location for this navigation
    LocateDevice { navigation: u64 },

    /// Fetch every dashboard section; replaces any load already in flight
    LoadDashboard { navigation: u64, coord: Coordinate },

    /// Abort an in-flight dashboard load (route left)
    CancelDashboard,

    /// Debounced forward-geocode lookup; re-arms on every call
    SearchPlaces { query: String },

    /// Drop a pending lookup
    CancelSearch,
}
