//! Search affordance and single-line query input

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_dispatch::EventKind;

use super::{Component, SEARCH_ICON};
use crate::action::Action;
use crate::theme;

pub const PLACEHOLDER: &str = "Search for a city...";

pub struct SearchBarProps<'a> {
    pub query: &'a str,
    /// Input is open and has focus
    pub is_active: bool,
}

/// Closed: a hint row. Open: an editable input with a cursor.
///
/// Every edit emits `SearchQueryChange` with the full new text.
#[derive(Default)]
pub struct SearchBar {
    /// Cursor position (byte index)
    cursor: usize,
}

impl SearchBar {
    pub const HEIGHT: u16 = 3;

    pub fn new() -> Self {
        Self::default()
    }

    fn clamp_cursor(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.len());
        while self.cursor > 0 && !value.is_char_boundary(self.cursor) {
            self.cursor -= 1;
        }
    }

    fn prev_boundary(&self, value: &str) -> usize {
        value[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self, value: &str) -> usize {
        value[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(value.len())
    }

    fn insert_char(&mut self, value: &str, c: char) -> String {
        let mut new_value = String::with_capacity(value.len() + c.len_utf8());
        new_value.push_str(&value[..self.cursor]);
        new_value.push(c);
        new_value.push_str(&value[self.cursor..]);
        self.cursor += c.len_utf8();
        new_value
    }

    fn delete_before(&mut self, value: &str) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        let start = self.prev_boundary(value);
        let new_value = format!("{}{}", &value[..start], &value[self.cursor..]);
        self.cursor = start;
        Some(new_value)
    }

    fn delete_at(&self, value: &str) -> Option<String> {
        if self.cursor >= value.len() {
            return None;
        }
        let end = self.next_boundary(value);
        Some(format!("{}{}", &value[..self.cursor], &value[end..]))
    }
}

impl Component<Action> for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_active {
            return None;
        }
        let EventKind::Key(key) = event else {
            return None;
        };

        self.clamp_cursor(props.query);

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor = 0;
                    None
                }
                KeyCode::Char('e') => {
                    self.cursor = props.query.len();
                    None
                }
                KeyCode::Char('u') => {
                    self.cursor = 0;
                    Some(Action::SearchQueryChange(String::new()))
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Esc => Some(Action::SearchToggle),
            KeyCode::Char(c) => Some(Action::SearchQueryChange(
                self.insert_char(props.query, c),
            )),
            KeyCode::Backspace => self
                .delete_before(props.query)
                .map(Action::SearchQueryChange),
            KeyCode::Delete => self.delete_at(props.query).map(Action::SearchQueryChange),
            KeyCode::Left => {
                self.cursor = self.prev_boundary(props.query);
                None
            }
            KeyCode::Right => {
                self.cursor = self.next_boundary(props.query);
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = props.query.len();
                None
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if area.height == 0 {
            return;
        }
        self.clamp_cursor(props.query);

        let bg = theme::glass(0.15).over(theme::RED);
        let row = Rect {
            y: area.y + area.height / 2,
            height: 1,
            ..area
        };
        frame.render_widget(Paragraph::new("").style(Style::default().bg(bg)), row);

        if !props.is_active {
            let hint = Line::from(vec![
                Span::raw(" "),
                Span::raw(SEARCH_ICON),
                Span::styled("Search", Style::default().fg(theme::TETRA).bold()),
                Span::styled("  press /", Style::default().fg(theme::DI_LIGHT)),
            ]);
            frame.render_widget(Paragraph::new(hint).style(Style::default().bg(bg)), row);
            return;
        }

        let prefix = " › ";
        let text = if props.query.is_empty() {
            Span::styled(PLACEHOLDER, Style::default().fg(theme::DI_LIGHT))
        } else {
            Span::styled(props.query, Style::default().fg(theme::WHITE))
        };
        let line = Line::from(vec![
            Span::styled(prefix, Style::default().fg(theme::TETRA).bold()),
            text,
        ]);
        frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), row);

        let typed_width = props.query[..self.cursor].chars().count() as u16;
        let cursor_x = row.x + prefix.chars().count() as u16 + typed_width;
        if cursor_x < row.x + row.width {
            frame.set_cursor_position((cursor_x, row.y));
        }
    }
}
