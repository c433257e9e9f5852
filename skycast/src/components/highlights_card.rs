//! Today's highlights: air quality, sun times and the other current readings

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use skycast_core::{Highlights, Section};

use super::{BORDER_COLOR, Component, LABEL_COLOR, section_error_span};
use crate::action::Action;

pub struct HighlightsCard;

pub struct HighlightsCardProps<'a> {
    pub highlights: &'a Section<Highlights>,
}

impl HighlightsCard {
    pub const HEIGHT: u16 = 9;
}

impl Component<Action> for HighlightsCard {
    type Props<'a> = HighlightsCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_COLOR))
            .title(" Today's Highlights ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let highlights = match props.highlights {
            Ok(highlights) => highlights,
            Err(err) => {
                frame.render_widget(Paragraph::new(Line::from(section_error_span(err))), inner);
                return;
            }
        };

        let [air, readings] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(inner);

        let air_lines = vec![
            Line::from(vec![
                label("Air Quality "),
                Span::styled(
                    format!("{} {}", highlights.aqi.index(), highlights.advisory.level),
                    Style::default().fg(aqi_color(highlights.aqi.index())).bold(),
                ),
            ]),
            Line::from(vec![
                label("PM2.5 "),
                value(format!("{:.1}", highlights.pm2_5)),
                label("  SO2 "),
                value(format!("{:.1}", highlights.so2)),
            ]),
            Line::from(vec![
                label("NO2 "),
                value(format!("{:.1}", highlights.no2)),
                label("  O3 "),
                value(format!("{:.1}", highlights.o3)),
            ]),
            Line::from(Span::styled(
                highlights.advisory.message,
                Style::default().fg(Color::Gray),
            )),
        ];
        frame.render_widget(Paragraph::new(air_lines).wrap(Wrap { trim: true }), air);

        let visibility = highlights
            .visibility_km
            .map(|km| format!("{km} km"))
            .unwrap_or_else(|| "-".to_string());
        let reading_lines = vec![
            Line::from(vec![label("Sunrise "), value(highlights.sunrise.clone())]),
            Line::from(vec![label("Sunset "), value(highlights.sunset.clone())]),
            Line::from(vec![label("Humidity "), value(format!("{}%", highlights.humidity))]),
            Line::from(vec![
                label("Pressure "),
                value(format!("{} hPa", highlights.pressure)),
            ]),
            Line::from(vec![label("Visibility "), value(visibility)]),
            Line::from(vec![
                label("Feels Like "),
                value(format!("{}°C", highlights.feels_like)),
            ]),
        ];
        frame.render_widget(Paragraph::new(reading_lines), readings);
    }
}

fn label(text: &'static str) -> Span<'static> {
    Span::styled(text, Style::default().fg(LABEL_COLOR))
}

fn value(text: String) -> Span<'static> {
    Span::styled(text, Style::default().fg(Color::White))
}

fn aqi_color(index: u8) -> Color {
    match index {
        1 => Color::Green,
        2 => Color::LightGreen,
        3 => Color::Yellow,
        4 => Color::Rgb(255, 150, 80),
        _ => Color::Red,
    }
}
