//! Root view: frame, header, dashboard body and help bar
//!
//! Handles the global key bindings while the search overlay is closed.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::prelude::{Frame, Rect};
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders},
};
use skycast_core::router::DEFAULT_HASH;
use skycast_core::{Coordinate, Dashboard};

use super::{
    BORDER_COLOR, Component, CurrentCard, CurrentCardProps, ForecastPanel, ForecastPanelProps,
    HelpBar, HelpBarProps, HighlightsCard, HighlightsCardProps, LocationHeader,
    LocationHeaderProps, StatusPanel, StatusPanelProps, StatusView, spinner,
};
use tui_dispatch::EventKind;

use crate::action::Action;
use crate::state::{ActiveRoute, AppState};

pub struct DashboardViewProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

#[derive(Default)]
pub struct DashboardView;

impl Component<Action> for DashboardView {
    type Props<'a> = DashboardViewProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: DashboardViewProps<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return vec![];
        }
        let EventKind::Key(key) = event else {
            return vec![];
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => vec![Action::Quit],
                _ => vec![],
            };
        }

        match key.code {
            KeyCode::Char('/') | KeyCode::Char('s') => vec![Action::SearchOpen],
            KeyCode::Char('c') if !props.state.route.is_current_location() => {
                vec![Action::RouteNavigate(DEFAULT_HASH.to_string())]
            }
            KeyCode::Char('r') | KeyCode::F(5) => vec![Action::DashboardRefresh],
            KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: DashboardViewProps<'_>) {
        let state = props.state;

        let loading_indicator = if state.is_loading {
            format!(" {} ", spinner(state.tick_count))
        } else {
            String::new()
        };

        let outer_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_COLOR))
            .title(format!(" ☁ SkyCast{} ", loading_indicator))
            .title_style(Style::default().fg(Color::Cyan).bold())
            .title_alignment(Alignment::Center);
        let inner = outer_block.inner(area);
        frame.render_widget(outer_block, area);

        let [header_area, body_area, help_area] = Layout::vertical([
            Constraint::Length(LocationHeader::HEIGHT),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        if let Some(title) = state.title() {
            LocationHeader.render(
                frame,
                header_area,
                LocationHeaderProps {
                    title: &title,
                    coordinate: header_coordinate(state),
                    notice: state.notice.as_deref(),
                },
            );
        }

        match (&state.route, &state.dashboard) {
            (ActiveRoute::NotFound(path), _) => StatusPanel.render(
                frame,
                body_area,
                StatusPanelProps {
                    view: StatusView::NotFound { path },
                },
            ),
            (_, Some(dashboard)) => render_dashboard(frame, body_area, dashboard),
            _ if state.is_loading => StatusPanel.render(
                frame,
                body_area,
                StatusPanelProps {
                    view: StatusView::Loading {
                        tick_count: state.tick_count,
                    },
                },
            ),
            _ => StatusPanel.render(
                frame,
                body_area,
                StatusPanelProps {
                    view: StatusView::Empty,
                },
            ),
        }

        HelpBar.render(
            frame,
            help_area,
            HelpBarProps {
                current_location_enabled: !state.route.is_current_location(),
            },
        );
    }
}

fn header_coordinate(state: &AppState) -> Option<Coordinate> {
    match (&state.dashboard, &state.route) {
        (Some(dashboard), _) => Some(dashboard.coordinate),
        (None, ActiveRoute::Weather(coord)) => Some(*coord),
        _ => None,
    }
}

/// Current + highlights on top, forecast below
fn render_dashboard(frame: &mut Frame, area: Rect, dashboard: &Dashboard) {
    let [top, bottom] = Layout::vertical([
        Constraint::Length(HighlightsCard::HEIGHT),
        Constraint::Length(ForecastPanel::HEIGHT),
    ])
    .areas(area);
    let [current_area, highlights_area] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(top);

    CurrentCard.render(
        frame,
        current_area,
        CurrentCardProps {
            current: &dashboard.current,
        },
    );
    HighlightsCard.render(
        frame,
        highlights_area,
        HighlightsCardProps {
            highlights: &dashboard.highlights,
        },
    );
    ForecastPanel.render(
        frame,
        bottom,
        ForecastPanelProps {
            forecast: &dashboard.forecast,
        },
    );
}
