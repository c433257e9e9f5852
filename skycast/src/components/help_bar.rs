use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{Component, LABEL_COLOR};
use crate::action::Action;

pub struct HelpBar;

pub struct HelpBarProps {
    /// `c` does nothing while already on the current-location route
    pub current_location_enabled: bool,
}

impl Component<Action> for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let key = Style::default().fg(Color::Cyan).bold();
        let text = Style::default().fg(LABEL_COLOR);
        let (c_key, c_text) = if props.current_location_enabled {
            (key, text)
        } else {
            let dim = Style::default()
                .fg(Color::Rgb(60, 60, 70))
                .add_modifier(Modifier::CROSSED_OUT);
            (dim, dim)
        };

        let help = Line::from(vec![
            Span::styled(" /", key),
            Span::styled(" search  ", text),
            Span::styled("c", c_key),
            Span::styled(" current location", c_text),
            Span::styled("  r", key),
            Span::styled(" refresh  ", text),
            Span::styled("q", key),
            Span::styled(" quit ", text),
        ])
        .centered();
        frame.render_widget(Paragraph::new(help), area);
    }
}
