use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use skycast_core::Coordinate;

use super::{Component, LABEL_COLOR, LOCATION_ICON};
use crate::action::Action;

pub struct LocationHeader;

pub struct LocationHeaderProps<'a> {
    pub title: &'a str,
    pub coordinate: Option<Coordinate>,
    /// Shown in yellow under the coordinates
    pub notice: Option<&'a str>,
}

impl LocationHeader {
    pub const HEIGHT: u16 = 3;
}

impl Component<Action> for LocationHeader {
    type Props<'a> = LocationHeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([Constraint::Length(1); 3]).split(area);

        let title = Line::from(vec![
            Span::raw(LOCATION_ICON),
            Span::styled(props.title.to_string(), Style::default().fg(Color::White).bold()),
        ])
        .centered();
        frame.render_widget(Paragraph::new(title), chunks[0]);

        if let Some(coord) = props.coordinate {
            let coords = Line::from(Span::styled(
                coord.to_string(),
                Style::default().fg(LABEL_COLOR),
            ))
            .centered();
            frame.render_widget(Paragraph::new(coords), chunks[1]);
        }

        if let Some(notice) = props.notice {
            let notice = Line::from(Span::styled(
                notice.to_string(),
                Style::default().fg(Color::Yellow),
            ))
            .centered();
            frame.render_widget(Paragraph::new(notice), chunks[2]);
        }
    }
}
