use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use tui_dispatch::EventKind;
use weather_api::Location;

use super::{Component, LOCATION_ICON};
use crate::action::Action;
use crate::theme;

pub struct SearchResultsProps<'a> {
    pub results: &'a [Location],
    pub selected: usize,
    pub is_focused: bool,
}

/// Geocoding candidates, one per row, shown under the search input
#[derive(Default)]
pub struct SearchResults;

impl SearchResults {
    /// Rows needed for `count` results (no chrome)
    pub fn height(count: usize) -> u16 {
        count as u16
    }
}

impl Component<Action> for SearchResults {
    type Props<'a> = SearchResultsProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused || props.results.is_empty() {
            return None;
        }
        let EventKind::Key(key) = event else {
            return None;
        };

        match key.code {
            KeyCode::Up if props.selected > 0 => Some(Action::SearchSelect(props.selected - 1)),
            KeyCode::Down if props.selected + 1 < props.results.len() => {
                Some(Action::SearchSelect(props.selected + 1))
            }
            KeyCode::Enter => Some(Action::SearchPick(props.selected)),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let base = theme::MONO;
        frame.render_widget(Clear, area);
        frame.render_widget(Paragraph::new("").style(Style::default().bg(base)), area);

        for (i, location) in props.results.iter().enumerate() {
            let y = area.y + i as u16;
            if y >= area.bottom() {
                break;
            }
            let row = Rect {
                y,
                height: 1,
                ..area
            };

            let is_selected = i == props.selected;
            let bg = if is_selected {
                theme::glass(0.2).over(base)
            } else {
                base
            };
            let name_style = if is_selected {
                Style::default().fg(theme::WHITE).bold()
            } else {
                Style::default().fg(theme::TRI)
            };

            let mut spans = vec![
                Span::raw(" "),
                Span::raw(LOCATION_ICON),
                Span::styled(location.name.as_str(), name_style),
            ];
            if let Some(region) = location.region() {
                spans.push(Span::styled(", ", name_style));
                spans.push(Span::styled(region, name_style));
            }
            if !location.country.is_empty() {
                spans.push(Span::styled(
                    format!("  {}", location.country),
                    Style::default().fg(theme::DI),
                ));
            }

            frame.render_widget(
                Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
                row,
            );
        }
    }
}
