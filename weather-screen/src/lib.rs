//! Terminal weather screen
//!
//! Search a city, pick one of the geocoded candidates, see current conditions
//! and a daily forecast for it. State flows one way:
//!
//! 1. Event (keyboard, resize) -> `WeatherScreen::handle_event` -> actions
//! 2. Actions go through the store's reducer
//! 3. The reducer updates state and returns effects
//! 4. The screen turns effects into tasks (debounce timer on the
//!    `tui_dispatch::TaskManager`, API calls)
//! 5. Finished tasks send result actions back; changed state is re-rendered

pub mod action;
pub mod components;
pub mod effect;
pub mod reducer;
pub mod runtime;
pub mod screen;
pub mod sprites;
pub mod state;
pub mod theme;

pub use action::Action;
pub use effect::Effect;
pub use reducer::reducer;
pub use runtime::Runtime;
pub use screen::{Screen, SEARCH_TASK};
pub use state::AppState;
