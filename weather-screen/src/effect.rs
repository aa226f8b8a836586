//! Effects - side effects declared by the reducer
//!
//! The reducer never performs I/O. It describes the work it wants done and
//! the screen controller turns each effect into a task.

use crate::state::WeatherQuery;

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// (Re)start the search debounce timer for this query
    DebounceSearch { query: String },

    /// Geocode a settled query
    ResolveLocations { query: String, limit: u32 },

    /// Fetch weather for the given parameters
    FetchWeather(WeatherQuery),
}
