//! Hourly strip and five-day list

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use skycast_core::dashboard::ForecastView;
use skycast_core::units::wind_arrow;
use skycast_core::{DailyEntry, HourlyEntry, Section};

use super::icons::{icon_span, temp_color};
use super::{BORDER_COLOR, Component, LABEL_COLOR, section_error_span};
use crate::action::Action;

pub struct ForecastPanel;

pub struct ForecastPanelProps<'a> {
    pub forecast: &'a Section<ForecastView>,
}

impl ForecastPanel {
    const HOURLY_HEIGHT: u16 = 6;
    const DAILY_HEIGHT: u16 = 7;
    pub const HEIGHT: u16 = Self::HOURLY_HEIGHT + Self::DAILY_HEIGHT;
}

impl Component<Action> for ForecastPanel {
    type Props<'a> = ForecastPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let [hourly_area, daily_area] = Layout::vertical([
            Constraint::Length(Self::HOURLY_HEIGHT),
            Constraint::Length(Self::DAILY_HEIGHT),
        ])
        .areas(area);

        let hourly_block = titled(" Today at ");
        let daily_block = titled(" 5 Days Forecast ");

        let forecast = match props.forecast {
            Ok(forecast) => forecast,
            Err(err) => {
                let line = Line::from(section_error_span(err));
                frame.render_widget(Paragraph::new(line.clone()).block(hourly_block), hourly_area);
                frame.render_widget(Paragraph::new(line).block(daily_block), daily_area);
                return;
            }
        };

        let inner = hourly_block.inner(hourly_area);
        frame.render_widget(hourly_block, hourly_area);
        render_hourly(frame, inner, &forecast.hourly);

        let rows: Vec<Line> = forecast.daily.iter().map(daily_line).collect();
        frame.render_widget(Paragraph::new(rows).block(daily_block), daily_area);
    }
}

fn titled(title: &'static str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_COLOR))
        .title(title)
}

/// One column per sample: hour, glyph, temperature, wind
fn render_hourly(frame: &mut Frame, area: Rect, hourly: &[HourlyEntry]) {
    if hourly.is_empty() {
        return;
    }
    let columns = Layout::horizontal(vec![Constraint::Fill(1); hourly.len()]).split(area);

    for (entry, column) in hourly.iter().zip(columns.iter().copied()) {
        let lines = vec![
            Line::from(Span::styled(entry.hour.clone(), Style::default().fg(LABEL_COLOR))),
            Line::from(icon_span(&entry.icon)),
            Line::from(Span::styled(
                format!("{}°", entry.temperature),
                Style::default().fg(temp_color(entry.temperature)).bold(),
            )),
            Line::from(Span::styled(
                format!("{} {}km/h", wind_arrow(entry.wind_deg), entry.wind_kmh),
                Style::default().fg(Color::Gray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).centered(), column);
    }
}

fn daily_line(entry: &DailyEntry) -> Line<'static> {
    Line::from(vec![
        Span::raw(" "),
        icon_span(&entry.icon),
        Span::raw("  "),
        Span::styled(
            format!("{:>3}°C", entry.temp_max),
            Style::default().fg(temp_color(entry.temp_max)).bold(),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{} {}", entry.day.day, entry.day.month),
            Style::default().fg(Color::White),
        ),
        Span::raw("  "),
        Span::styled(entry.day.weekday, Style::default().fg(LABEL_COLOR)),
        Span::raw("  "),
        Span::styled(entry.description.clone(), Style::default().fg(Color::Gray)),
    ])
}
