//! Full-frame render tests through the app's UI root

mod common;

use skycast::app::SkycastUi;
use skycast::state::{ActiveRoute, AppState};
use tui_dispatch::testing::RenderHarness;
use skycast_core::{Coordinate, Locale, SectionError};

use common::fixture_dashboard;

const WASHINGTON: Coordinate = Coordinate::new(38.889447, -77.035246);

fn loaded_state(locale: Locale) -> AppState {
    AppState {
        hash: "#/weather?lat=38.889447&lon=-77.035246".into(),
        route: ActiveRoute::Weather(WASHINGTON),
        navigation: 1,
        dashboard: Some(fixture_dashboard(WASHINGTON, locale)),
        ..AppState::new(locale)
    }
}

fn render(state: &AppState, width: u16, height: u16) -> String {
    let mut ui = SkycastUi::new();
    let mut render = RenderHarness::new(width, height);
    render.render_to_string_plain(|frame| ui.render(frame, frame.area(), state))
}

#[test]
fn test_render_full_dashboard() {
    let output = render(&loaded_state(Locale::En), 120, 32);

    assert!(output.contains("SkyCast"));
    assert!(output.contains("Washington, US"));
    assert!(output.contains("38.89°, -77.04°"));

    // current card
    assert!(output.contains("21°C"));
    assert!(output.contains("clear sky"));
    assert!(output.contains("Tuesday 14, Nov"));

    // highlights
    assert!(output.contains("2 Fair"));
    assert!(output.contains("Sunrise 6:47 AM"));
    assert!(output.contains("Sunset 4:57 PM"));
    assert!(output.contains("Humidity 55%"));
    assert!(output.contains("Pressure 1016 hPa"));

    // forecast
    assert!(output.contains("7 PM"));
    assert!(output.contains("15 Nov"));
    assert!(output.contains("Wednesday"));
}

#[test]
fn test_render_portuguese_labels() {
    let output = render(&loaded_state(Locale::PtBr), 120, 32);

    assert!(output.contains("Terça 14, Nov"));
    assert!(output.contains("2 Adequada"));
    assert!(output.contains("Quarta"));
}

#[test]
fn test_render_failed_sections_independently() {
    let mut state = loaded_state(Locale::En);
    if let Some(dashboard) = state.dashboard.as_mut() {
        dashboard.highlights = Err(SectionError::Skipped);
        dashboard.place = Err(SectionError::Skipped);
    }

    let output = render(&state, 120, 32);

    assert!(output.contains("Unavailable"));
    // coordinates stand in for the missing place name
    assert!(!output.contains("Washington, US"));
    assert!(output.contains("38.89°, -77.04°"));
    // the other sections still render
    assert!(output.contains("21°C"));
    assert!(output.contains("7 PM"));
}

#[test]
fn test_render_search_overlay_on_top() {
    let mut state = loaded_state(Locale::En);
    state.search.open = true;
    state.search.query = "Lon".into();
    state.search.is_searching = true;

    let output = render(&state, 120, 32);

    assert!(output.contains("> Lon"));
    assert!(output.contains("Searching..."));
}

#[test]
fn test_render_fallback_notice() {
    let mut state = loaded_state(Locale::En);
    state.notice = Some("current location is not configured".into());

    let output = render(&state, 120, 32);

    assert!(output.contains("current location is not configured"));
}
