//! Reducer - (state, action) -> (changed, effects)
//!
//! All state transitions happen here. Changing the location or the unit
//! system always emits a weather fetch, so the snapshot follows whatever the
//! user last picked.

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, MIN_QUERY_CHARS, SEARCH_LIMIT};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Search actions =====
        Action::SearchToggle => {
            state.search_active = !state.search_active;
            if state.search_active {
                // The input starts empty every time it is opened
                state.search_query.clear();
                state.search_selected = 0;
            }
            DispatchResult::changed()
        }

        Action::SearchQueryChange(query) => {
            state.search_query = query.clone();
            DispatchResult::changed_with(Effect::DebounceSearch { query })
        }

        Action::SearchQuerySettle(query) => {
            if query.chars().count() < MIN_QUERY_CHARS {
                return DispatchResult::unchanged();
            }
            DispatchResult::effect(Effect::ResolveLocations {
                query,
                limit: SEARCH_LIMIT,
            })
        }

        Action::SearchDidLoad(results) => {
            // Replaced wholesale; a failed request leaves nothing to show
            state.search_results = results.unwrap_or_default();
            state.search_results.truncate(SEARCH_LIMIT as usize);
            state.search_selected = 0;
            DispatchResult::changed()
        }

        Action::SearchSelect(index) => {
            if index >= state.search_results.len() || index == state.search_selected {
                return DispatchResult::unchanged();
            }
            state.search_selected = index;
            DispatchResult::changed()
        }

        Action::SearchPick(index) => {
            let Some(location) = state.search_results.get(index).cloned() else {
                return DispatchResult::unchanged();
            };
            // Search stays open until the fetch for the new location resolves
            state.location = location;
            DispatchResult::changed_with(Effect::FetchWeather(state.weather_query()))
        }

        // ===== Weather actions =====
        Action::WeatherFetch => DispatchResult::effect(Effect::FetchWeather(state.weather_query())),

        Action::WeatherDidLoad(snapshot) => {
            state.weather = snapshot;
            state.search_results.clear();
            state.search_selected = 0;
            state.search_active = false;
            DispatchResult::changed()
        }

        // ===== UI actions =====
        Action::UiToggleUnits => {
            state.units = state.units.toggle();
            DispatchResult::changed_with(Effect::FetchWeather(state.weather_query()))
        }

        Action::UiTerminalResize(width, height) => {
            if state.terminal_size != (width, height) {
                state.terminal_size = (width, height);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // Quit is handled by the runtime loop
        Action::Quit => DispatchResult::unchanged(),
    }
}
