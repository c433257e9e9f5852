//! Wiring between the runtime and the rest of the app
//!
//! [`SkycastUi`] routes terminal events to the focused component and draws
//! the frame; [`EffectHandler`] turns reducer effects into keyed tasks.

use std::sync::Arc;

use ratatui::Frame;
use ratatui::layout::Rect;
use skycast_core::search::{SEARCH_DEBOUNCE, search_places};
use skycast_core::{Locale, Locator, WeatherSource, load_dashboard};
use tokio::sync::mpsc;
use tracing::{debug, warn};
use tui_dispatch::{EffectContext, EventKind, EventOutcome, TaskKey, TaskManager};

use crate::action::Action;
use crate::components::{
    Component, DashboardView, DashboardViewProps, SearchOverlay, SearchOverlayProps,
};
use crate::effect::Effect;
use crate::state::AppState;

/// At most one dashboard load in flight
pub const DASHBOARD_TASK: &str = "dashboard";
/// At most one (debounced) place lookup in flight
pub const SEARCH_TASK: &str = "search";

#[derive(Default)]
pub struct SkycastUi {
    dashboard: DashboardView,
    search: SearchOverlay,
}

impl SkycastUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        self.dashboard.render(
            frame,
            area,
            DashboardViewProps {
                state,
                is_focused: !state.search.open,
            },
        );

        self.search.set_open(state.search.open);
        if state.search.open {
            self.search.render(frame, area, search_props(state));
        }
    }

    /// The search overlay takes every key while open
    pub fn map_event(&mut self, event: &EventKind, state: &AppState) -> EventOutcome<Action> {
        if let EventKind::Resize(width, height) = event {
            return EventOutcome::action(Action::UiTerminalResize(*width, *height)).with_render();
        }

        self.search.set_open(state.search.open);
        if state.search.open {
            return EventOutcome::from_actions(self.search.handle_event(event, search_props(state)));
        }

        EventOutcome::from_actions(self.dashboard.handle_event(
            event,
            DashboardViewProps {
                state,
                is_focused: true,
            },
        ))
    }
}

fn search_props(state: &AppState) -> SearchOverlayProps<'_> {
    SearchOverlayProps {
        query: &state.search.query,
        results: &state.search.results,
        selected: state.search.selected,
        is_searching: state.search.is_searching,
        error: state.search.error.as_deref(),
        tick_count: state.tick_count,
    }
}

/// Runs effects against a weather source
pub struct EffectHandler<S> {
    source: Arc<S>,
    locator: Locator,
    locale: Locale,
}

impl<S> EffectHandler<S>
where
    S: WeatherSource + 'static,
{
    pub fn new(source: S, locator: Locator, locale: Locale) -> Self {
        Self {
            source: Arc::new(source),
            locator,
            locale,
        }
    }

    /// Runtime entry point
    pub fn handle(&self, effect: Effect, ctx: &mut EffectContext<Action>) {
        let action_tx = ctx.action_tx().clone();
        self.apply(effect, &action_tx, ctx.tasks());
    }

    pub fn apply(
        &self,
        effect: Effect,
        action_tx: &mpsc::UnboundedSender<Action>,
        tasks: &mut TaskManager<Action>,
    ) {
        match effect {
            Effect::LocateDevice { navigation } => {
                let action = match self.locator.locate() {
                    Ok(coord) => Action::LocationDidResolve { navigation, coord },
                    Err(e) => {
                        warn!(error = %e, "locate failed");
                        Action::LocationDidFail {
                            navigation,
                            error: e.to_string(),
                        }
                    }
                };
                let _ = action_tx.send(action);
            }

            Effect::LoadDashboard { navigation, coord } => {
                let source = Arc::clone(&self.source);
                let locale = self.locale;
                tasks.spawn(DASHBOARD_TASK, async move {
                    let dashboard = load_dashboard(source.as_ref(), coord, locale).await;
                    Action::DashboardDidLoad {
                        navigation,
                        dashboard: Box::new(dashboard),
                    }
                });
            }

            Effect::CancelDashboard => tasks.cancel(&TaskKey::new(DASHBOARD_TASK)),

            Effect::SearchPlaces { query } => {
                let source = Arc::clone(&self.source);
                tasks.debounce(SEARCH_TASK, SEARCH_DEBOUNCE, async move {
                    debug!(%query, "searching places");
                    match search_places(source.as_ref(), &query).await {
                        Ok(places) => Action::SearchDidLoad { query, places },
                        Err(e) => Action::SearchDidError {
                            query,
                            error: e.to_string(),
                        },
                    }
                });
            }

            Effect::CancelSearch => tasks.cancel(&TaskKey::new(SEARCH_TASK)),
        }
    }
}
