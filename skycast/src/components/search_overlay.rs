//! Location search modal
//!
//! Typing edits the query (each edit re-arms the debounced lookup in the
//! reducer), arrows move the highlight and Enter navigates to the place.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use skycast_core::GeoPlace;
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    ModalStyle, SelectList, SelectListProps, TextInput, TextInputProps, centered_rect, render_modal,
};

use super::{Component, ERROR_ICON, spinner};
use crate::action::Action;

const PLACEHOLDER: &str = "Search for a city...";
const MODAL_BG: Color = Color::Rgb(35, 35, 45);
const INPUT_BG: Color = Color::Rgb(50, 50, 60);
const PROMPT: &str = "> ";

pub struct SearchOverlay {
    input: TextInput,
    list: SelectList,
    was_open: bool,
}

pub struct SearchOverlayProps<'a> {
    pub query: &'a str,
    pub results: &'a [GeoPlace],
    pub selected: usize,
    pub is_searching: bool,
    pub error: Option<&'a str>,
    pub tick_count: u32,
}

impl Default for SearchOverlay {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
            list: SelectList::new(),
            was_open: false,
        }
    }
}

impl SearchOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh input and list each time the overlay opens
    pub fn set_open(&mut self, is_open: bool) {
        if is_open && !self.was_open {
            self.input = TextInput::new();
            self.list = SelectList::new();
        }
        self.was_open = is_open;
    }

    fn result_items(results: &[GeoPlace]) -> Vec<String> {
        results
            .iter()
            .map(|place| format!("{}  {}", place.name, place.region()))
            .collect()
    }

    fn input_props<'a>(query: &'a str) -> TextInputProps<'a, Action> {
        TextInputProps {
            value: query,
            placeholder: PLACEHOLDER,
            is_focused: true,
            show_border: false,
            bg_color: Some(INPUT_BG),
            padding_x: 0,
            padding_y: 0,
            on_change: Action::SearchQueryChange,
            // Enter never reaches the input
            on_submit: Action::SearchQueryChange,
        }
    }

    fn list_props<'a>(items: &'a [String], selected: usize) -> SelectListProps<'a, Action> {
        SelectListProps {
            items,
            selected,
            is_focused: true,
            show_border: false,
            padding_x: 0,
            padding_y: 0,
            highlight_query: None,
            on_select: Action::SearchSelect,
        }
    }
}

impl Component<Action> for SearchOverlay {
    type Props<'a> = SearchOverlayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Esc => return vec![Action::SearchClose],
            KeyCode::Enter if props.results.is_empty() => return Vec::new(),
            KeyCode::Enter => return vec![Action::SearchConfirm],
            KeyCode::Down | KeyCode::Up => {
                if props.results.is_empty() {
                    return Vec::new();
                }
                let items = Self::result_items(props.results);
                return self
                    .list
                    .handle_event(event, Self::list_props(&items, props.selected))
                    .into_iter()
                    .collect();
            }
            _ => {}
        }

        if key.modifiers.contains(KeyModifiers::ALT) {
            return Vec::new();
        }

        self.input
            .handle_event(event, Self::input_props(props.query))
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.width < 20 || area.height < 8 {
            return;
        }

        let modal = centered_rect(60, 14, area);
        render_modal(frame, modal, &ModalStyle::with_bg(MODAL_BG));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Search ");
        let inner = block.inner(modal);
        frame.render_widget(block, modal);

        let [input_row, status_area, list_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(inner);
        let [prompt_area, input_area] =
            Layout::horizontal([Constraint::Length(PROMPT.len() as u16), Constraint::Min(1)])
                .areas(input_row);

        frame.render_widget(
            Paragraph::new(Span::styled(PROMPT, Style::default().fg(Color::Cyan))),
            prompt_area,
        );
        self.input
            .render(frame, input_area, Self::input_props(props.query));

        let status = if let Some(error) = props.error {
            Line::from(Span::styled(
                format!("{ERROR_ICON} {error}"),
                Style::default().fg(Color::Rgb(200, 100, 100)),
            ))
        } else if props.is_searching {
            Line::from(Span::styled(
                format!("{} Searching...", spinner(props.tick_count)),
                Style::default().fg(Color::Gray),
            ))
        } else {
            Line::from("")
        };
        frame.render_widget(Paragraph::new(status), status_area);

        let items = Self::result_items(props.results);
        self.list
            .render(frame, list_area, Self::list_props(&items, props.selected));
    }
}
