//! "Now" card: temperature, condition and local date

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use skycast_core::{CurrentConditions, Section};

use super::icons::{icon_span, temp_color};
use super::{BORDER_COLOR, Component, LABEL_COLOR, section_error_span};
use crate::action::Action;

pub struct CurrentCard;

pub struct CurrentCardProps<'a> {
    pub current: &'a Section<CurrentConditions>,
}

impl CurrentCard {
    pub const HEIGHT: u16 = 5;
}

impl Component<Action> for CurrentCard {
    type Props<'a> = CurrentCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_COLOR))
            .title(" Now ");

        let lines = match props.current {
            Ok(current) => vec![
                Line::from(vec![
                    icon_span(&current.icon),
                    Span::raw("  "),
                    Span::styled(
                        format!("{}°C", current.temperature),
                        Style::default().fg(temp_color(current.temperature)).bold(),
                    ),
                    Span::raw("  "),
                    Span::styled(current.description.clone(), Style::default().fg(Color::Gray)),
                ]),
                Line::from(""),
                Line::from(Span::styled(current.date.clone(), Style::default().fg(LABEL_COLOR))),
            ],
            Err(err) => vec![Line::from(section_error_span(err))],
        };

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
