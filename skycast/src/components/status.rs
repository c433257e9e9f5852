//! Full-body messages shown instead of the dashboard

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{Component, ERROR_ICON, LABEL_COLOR, spinner};
use crate::action::Action;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusView<'a> {
    Loading { tick_count: u32 },
    NotFound { path: &'a str },
    /// Nothing routed yet
    Empty,
}

pub struct StatusPanel;

pub struct StatusPanelProps<'a> {
    pub view: StatusView<'a>,
}

impl Component<Action> for StatusPanel {
    type Props<'a> = StatusPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let lines = lines_for(props.view);
        let height = lines.len() as u16;
        let [centered] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(Paragraph::new(lines).centered(), centered);
    }
}

fn lines_for(view: StatusView<'_>) -> Vec<Line<'static>> {
    match view {
        StatusView::Loading { tick_count } => {
            let dots = ".".repeat((tick_count as usize / 3) % 4);
            vec![Line::from(vec![
                Span::styled(spinner(tick_count), Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!(" Fetching weather{:<3}", dots),
                    Style::default().fg(Color::Gray),
                ),
            ])]
        }
        StatusView::NotFound { path } => vec![
            Line::from(ERROR_ICON),
            Line::from(Span::styled(
                "Page not found",
                Style::default().fg(Color::Red).bold(),
            )),
            Line::from(Span::styled(
                format!("Nothing lives at {path}"),
                Style::default().fg(Color::Rgb(200, 100, 100)),
            )),
            Line::from(""),
            hint("c", " for your location, ", "/", " to search"),
        ],
        StatusView::Empty => vec![hint("/", " to search for a city, ", "c", " for your location")],
    }
}

fn hint(
    first: &'static str,
    first_text: &'static str,
    second: &'static str,
    second_text: &'static str,
) -> Line<'static> {
    let key = Style::default().fg(Color::Cyan).bold();
    let text = Style::default().fg(LABEL_COLOR);
    Line::from(vec![
        Span::styled("Press ", text),
        Span::styled(first, key),
        Span::styled(first_text, text),
        Span::styled(second, key),
        Span::styled(second_text, text),
    ])
}
