//! Weather glyphs for provider icon codes
//!
//! The provider names its icons `<group><d|n>`, e.g. `10n` for night rain.

use ratatui::style::{Color, Style};
use ratatui::text::Span;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    Clear { night: bool },
    FewClouds,
    Cloudy,
    Rain,
    Thunderstorm,
    Snow,
    Mist,
    Unknown,
}

impl Condition {
    pub fn from_icon(icon: &str) -> Self {
        let night = icon.ends_with('n');
        match icon.get(..2).unwrap_or_default() {
            "01" => Condition::Clear { night },
            "02" => Condition::FewClouds,
            "03" | "04" => Condition::Cloudy,
            "09" | "10" => Condition::Rain,
            "11" => Condition::Thunderstorm,
            "13" => Condition::Snow,
            "50" => Condition::Mist,
            _ => Condition::Unknown,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Condition::Clear { night: false } => "☀",
            Condition::Clear { night: true } => "☾",
            Condition::FewClouds => "⛅",
            Condition::Cloudy => "☁",
            Condition::Rain => "☂",
            Condition::Thunderstorm => "⚡",
            Condition::Snow => "❄",
            Condition::Mist => "≡",
            Condition::Unknown => "?",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Condition::Clear { night: false } => Color::Yellow,
            Condition::Clear { night: true } => Color::Rgb(200, 200, 230),
            Condition::FewClouds => Color::Rgb(200, 200, 100),
            Condition::Cloudy => Color::Rgb(160, 160, 175),
            Condition::Rain => Color::Rgb(80, 140, 200),
            Condition::Thunderstorm => Color::Rgb(180, 180, 50),
            Condition::Snow => Color::Rgb(200, 220, 255),
            Condition::Mist => Color::Rgb(150, 150, 160),
            Condition::Unknown => Color::Rgb(150, 150, 165),
        }
    }
}

/// Colored glyph for an icon code
pub fn icon_span(icon: &str) -> Span<'static> {
    let condition = Condition::from_icon(icon);
    Span::styled(condition.glyph(), Style::default().fg(condition.color()))
}

/// Temperature-based color
pub fn temp_color(celsius: i64) -> Color {
    match celsius {
        ..=-10 => Color::Rgb(150, 200, 255),
        -9..=0 => Color::Rgb(100, 180, 255),
        1..=10 => Color::Rgb(100, 220, 200),
        11..=20 => Color::Rgb(150, 230, 150),
        21..=30 => Color::Rgb(255, 220, 100),
        31..=40 => Color::Rgb(255, 150, 80),
        _ => Color::Rgb(255, 100, 100),
    }
}
