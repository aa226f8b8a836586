use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};
use tui_dispatch::EventKind;

use super::{
    Component, CurrentConditions, CurrentConditionsProps, DailyForecastStrip,
    DailyForecastStripProps, HelpBar, HelpBarProps, LocationHeader, LocationHeaderProps,
    SearchBar, SearchBarProps, SearchResults, SearchResultsProps,
};
use crate::action::Action;
use crate::state::AppState;
use crate::theme;

pub struct WeatherScreenProps<'a> {
    pub state: &'a AppState,
    pub today: NaiveDate,
}

/// The whole screen: search header, current conditions, daily strip, help
///
/// Owns the child components so their view state (the input cursor)
/// survives between frames.
#[derive(Default)]
pub struct WeatherScreen {
    search_bar: SearchBar,
    results: SearchResults,
}

impl WeatherScreen {
    pub fn new() -> Self {
        Self::default()
    }
}

fn paint_background(frame: &mut Frame, area: Rect) {
    for row in 0..area.height {
        let line = Rect {
            y: area.y + row,
            height: 1,
            ..area
        };
        frame.render_widget(
            Paragraph::new("").style(Style::default().bg(theme::gradient(row, area.height))),
            line,
        );
    }
}

/// Ctrl+C always quits, whatever has focus
fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

impl Component<Action> for WeatherScreen {
    type Props<'a> = WeatherScreenProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let state = props.state;

        if let EventKind::Resize(width, height) = event {
            return vec![Action::UiTerminalResize(*width, *height)];
        }
        let EventKind::Key(key) = event else {
            return vec![];
        };
        if key.kind != KeyEventKind::Press {
            return vec![];
        }
        if is_interrupt(key) {
            return vec![Action::Quit];
        }

        if state.search_active {
            return match key.code {
                KeyCode::Up | KeyCode::Down | KeyCode::Enter => self
                    .results
                    .handle_event(
                        event,
                        SearchResultsProps {
                            results: &state.search_results,
                            selected: state.search_selected,
                            is_focused: true,
                        },
                    )
                    .into_iter()
                    .collect::<Vec<_>>(),
                _ => self
                    .search_bar
                    .handle_event(
                        event,
                        SearchBarProps {
                            query: &state.search_query,
                            is_active: true,
                        },
                    )
                    .into_iter()
                    .collect::<Vec<_>>(),
            };
        }

        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return vec![];
        }
        match key.code {
            KeyCode::Char('/') | KeyCode::Char('s') => vec![Action::SearchToggle],
            KeyCode::Char('u') => vec![Action::UiToggleUnits],
            KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        paint_background(frame, area);

        let chunks = Layout::vertical([
            Constraint::Length(SearchBar::HEIGHT),
            Constraint::Length(LocationHeader::HEIGHT),
            Constraint::Min(CurrentConditions::height(state.terminal_size)),
            Constraint::Length(DailyForecastStrip::HEIGHT),
            Constraint::Length(1),
        ])
        .split(area);

        self.search_bar.render(
            frame,
            chunks[0],
            SearchBarProps {
                query: &state.search_query,
                is_active: state.search_active,
            },
        );

        LocationHeader.render(
            frame,
            chunks[1],
            LocationHeaderProps {
                location: &state.location,
            },
        );

        CurrentConditions.render(
            frame,
            chunks[2],
            CurrentConditionsProps {
                weather: state.weather.as_ref(),
                units: state.units,
                terminal_size: state.terminal_size,
            },
        );

        if let Some(weather) = state.weather.as_ref() {
            DailyForecastStrip.render(
                frame,
                chunks[3],
                DailyForecastStripProps {
                    daily: &weather.daily,
                    units: state.units,
                    today: props.today,
                },
            );
        }

        HelpBar.render(
            frame,
            chunks[4],
            HelpBarProps {
                searching: state.search_active,
            },
        );

        // Results drop down over the body, right under the input row
        if state.shows_results() {
            let input_row = chunks[0].y + SearchBar::HEIGHT / 2;
            let results_area = Rect {
                x: area.x + 1,
                y: input_row + 1,
                width: area.width.saturating_sub(2),
                height: SearchResults::height(state.search_results.len())
                    .min(area.bottom().saturating_sub(input_row + 1)),
            };
            self.results.render(
                frame,
                results_area,
                SearchResultsProps {
                    results: &state.search_results,
                    selected: state.search_selected,
                    is_focused: true,
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use tui_dispatch::testing::{key, RenderHarness};
    use weather_api::Location;

    fn key_event(k: &str) -> EventKind {
        EventKind::Key(key(k))
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).expect("valid date")
    }

    fn handle(screen: &mut WeatherScreen, state: &AppState, event: EventKind) -> Vec<Action> {
        screen
            .handle_event(
                &event,
                WeatherScreenProps {
                    state,
                    today: today(),
                },
            )
            .into_iter()
            .collect()
    }

    fn searching() -> AppState {
        let mut state = AppState::default();
        state.search_active = true;
        state.search_query = "Lon".into();
        state.search_results = vec![Location {
            name: "London".into(),
            local_names: None,
            lat: 51.5,
            lon: -0.12,
            country: "GB".into(),
            state: Some("England".into()),
        }];
        state
    }

    #[test]
    fn test_global_keys() {
        let mut screen = WeatherScreen::new();
        let state = AppState::default();

        assert_eq!(handle(&mut screen, &state, key_event("/")), vec![Action::SearchToggle]);
        assert_eq!(handle(&mut screen, &state, key_event("u")), vec![Action::UiToggleUnits]);
        assert_eq!(handle(&mut screen, &state, key_event("q")), vec![Action::Quit]);
        assert_eq!(handle(&mut screen, &state, key_event("ctrl+c")), vec![Action::Quit]);
        assert!(handle(&mut screen, &state, key_event("x")).is_empty());
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut screen = WeatherScreen::new();
        let release = EventKind::Key(KeyEvent {
            kind: KeyEventKind::Release,
            state: KeyEventState::empty(),
            ..key("q")
        });
        assert!(handle(&mut screen, &AppState::default(), release).is_empty());
    }

    #[test]
    fn test_ctrl_c_quits_while_searching() {
        let mut screen = WeatherScreen::new();
        assert_eq!(handle(&mut screen, &searching(), key_event("ctrl+c")), vec![Action::Quit]);
    }

    #[test]
    fn test_resize() {
        let mut screen = WeatherScreen::new();
        assert_eq!(
            handle(&mut screen, &AppState::default(), EventKind::Resize(100, 30)),
            vec![Action::UiTerminalResize(100, 30)]
        );
    }

    #[test]
    fn test_keys_go_to_input_while_searching() {
        let mut screen = WeatherScreen::new();
        let state = searching();

        // Cursor starts at 0; move it to the end first
        handle(&mut screen, &state, key_event("end"));
        assert_eq!(
            handle(&mut screen, &state, key_event("d")),
            vec![Action::SearchQueryChange("Lond".into())]
        );
        // 'q' and 'u' are text here, not shortcuts
        assert_eq!(
            handle(&mut screen, &state, key_event("q")),
            vec![Action::SearchQueryChange("Lonq".into())]
        );
    }

    #[test]
    fn test_enter_picks_while_searching() {
        let mut screen = WeatherScreen::new();
        let state = searching();

        assert_eq!(handle(&mut screen, &state, key_event("enter")), vec![Action::SearchPick(0)]);
        assert_eq!(handle(&mut screen, &state, key_event("esc")), vec![Action::SearchToggle]);
    }

    #[test]
    fn test_render_full_screen() {
        let mut render = RenderHarness::new(80, 24);
        let mut screen = WeatherScreen::new();
        let state = AppState::default();

        let output = render.render_to_string_plain(|frame| {
            screen.render(
                frame,
                frame.area(),
                WeatherScreenProps {
                    state: &state,
                    today: today(),
                },
            );
        });

        assert!(output.contains("Kharkiv, Kharkiv Oblast"));
        assert!(output.contains("--℃"));
        assert!(output.contains("/ search  u units  q quit"));
    }

    #[test]
    fn test_render_results_dropdown() {
        let mut render = RenderHarness::new(80, 24);
        let mut screen = WeatherScreen::new();
        let state = searching();

        let output = render.render_to_string_plain(|frame| {
            screen.render(
                frame,
                frame.area(),
                WeatherScreenProps {
                    state: &state,
                    today: today(),
                },
            );
        });

        assert!(output.contains("› Lon"));
        assert!(output.contains("London, England"));
    }
}
