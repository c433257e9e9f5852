//! UI components
//!
//! Every component follows the same contract:
//! - `Props<'a>` borrows everything it renders from state
//! - `handle_event` turns a terminal event into actions, never mutating state
//! - `render` is a pure function of props

pub mod current_card;
pub mod dashboard_view;
pub mod forecast_panel;
pub mod help_bar;
pub mod highlights_card;
pub mod icons;
pub mod location_header;
pub mod search_overlay;
pub mod status;

use ratatui::style::{Color, Style};
use ratatui::text::Span;
use skycast_core::SectionError;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use current_card::{CurrentCard, CurrentCardProps};
pub use dashboard_view::{DashboardView, DashboardViewProps};
pub use forecast_panel::{ForecastPanel, ForecastPanelProps};
pub use help_bar::{HelpBar, HelpBarProps};
pub use highlights_card::{HighlightsCard, HighlightsCardProps};
pub use location_header::{LocationHeader, LocationHeaderProps};
pub use search_overlay::{SearchOverlay, SearchOverlayProps};
pub use status::{StatusPanel, StatusPanelProps, StatusView};

pub const LOCATION_ICON: &str = "📍 ";
pub const ERROR_ICON: &str = "⚠️";
pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub const BORDER_COLOR: Color = Color::Rgb(80, 80, 100);
pub const LABEL_COLOR: Color = Color::DarkGray;

/// Spinner frame for the current tick
pub fn spinner(tick_count: u32) -> &'static str {
    SPINNERS[(tick_count as usize / 2) % SPINNERS.len()]
}

/// Inline placeholder for a section that has nothing to show
pub fn section_error_span(err: &SectionError) -> Span<'static> {
    let text = match err {
        SectionError::Skipped => "Unavailable".to_string(),
        other => format!("{ERROR_ICON} {other}"),
    };
    Span::styled(text, Style::default().fg(Color::Rgb(200, 100, 100)))
}
