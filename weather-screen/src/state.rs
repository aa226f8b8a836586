//! Application state - single source of truth
//!
//! Components receive `&AppState` as props; only the reducer mutates it.

use std::collections::BTreeMap;
use std::time::Duration;

use weather_api::{Location, UnitSystem, WeatherSnapshot};

/// Quiet period after the last keystroke before a search is issued
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(1200);

/// Queries shorter than this are never sent
pub const MIN_QUERY_CHARS: usize = 3;

/// Candidates requested from the geocoder
pub const SEARCH_LIMIT: u32 = 3;

/// City shown before the user has searched for anything
pub fn default_location() -> Location {
    Location {
        name: "Kharkiv".into(),
        local_names: Some(BTreeMap::from([
            ("en".to_string(), "Kharkiv".to_string()),
            ("uk".to_string(), "Харків".to_string()),
        ])),
        lat: 49.9923181,
        lon: 36.2310146,
        country: "UA".into(),
        state: Some("Kharkiv Oblast".into()),
    }
}

/// Coordinate as sent to the provider, e.g. `49.99`
///
/// The stored binary value is rounded as is (`30.915` is just below the
/// half and gives `30.91`). Exact halves such as `1.125` go away from zero.
pub fn format_coordinate(value: f64) -> String {
    if value == 0.0 {
        return "0.00".to_string();
    }
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        let hundredths = (value.abs() * 100.0).round() as u64;
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}{}.{:02}", hundredths / 100, hundredths % 100);
    }
    format!("{:.2}", value)
}

/// Parameters of one weather request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeatherQuery {
    pub lat: String,
    pub lon: String,
    pub units: UnitSystem,
}

impl WeatherQuery {
    pub fn new(location: &Location, units: UnitSystem) -> Self {
        Self {
            lat: format_coordinate(location.lat),
            lon: format_coordinate(location.lon),
            units,
        }
    }
}

/// Everything the screen needs to render
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    /// Search input and results are visible
    pub search_active: bool,

    /// Text currently in the search input
    pub search_query: String,

    /// Up to [`SEARCH_LIMIT`] geocoding candidates
    pub search_results: Vec<Location>,

    /// Highlighted candidate (keyboard navigation)
    pub search_selected: usize,

    /// The location the next weather fetch is for
    pub location: Location,

    pub units: UnitSystem,

    /// Last resolved one-call response (None = never fetched, or the fetch failed)
    pub weather: Option<WeatherSnapshot>,

    /// Terminal dimensions (for sprite sizing)
    pub terminal_size: (u16, u16),
}

impl AppState {
    pub fn new(location: Location, units: UnitSystem) -> Self {
        Self {
            search_active: false,
            search_query: String::new(),
            search_results: Vec::new(),
            search_selected: 0,
            location,
            units,
            weather: None,
            terminal_size: (80, 24),
        }
    }

    /// Request parameters for the current location and unit system
    pub fn weather_query(&self) -> WeatherQuery {
        WeatherQuery::new(&self.location, self.units)
    }

    /// Results list is shown only while searching and non-empty
    pub fn shows_results(&self) -> bool {
        self.search_active && !self.search_results.is_empty()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(default_location(), UnitSystem::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_matches_kharkiv() {
        let query = AppState::default().weather_query();
        assert_eq!(query.lat, "49.99");
        assert_eq!(query.lon, "36.23");
        assert_eq!(query.units, UnitSystem::Metric);
    }

    #[test]
    fn test_rounding_to_two_places() {
        assert_eq!(format_coordinate(51.5073219), "51.51");
        assert_eq!(format_coordinate(-0.1276474), "-0.13");
        assert_eq!(format_coordinate(10.0), "10.00");
        assert_eq!(format_coordinate(-81.243372), "-81.24");
        assert_eq!(format_coordinate(0.0), "0.00");
        assert_eq!(format_coordinate(-0.0), "0.00");
    }

    #[test]
    fn test_rounding_uses_stored_value() {
        // Decimal halves that are stored just below the half
        assert_eq!(format_coordinate(30.915), "30.91");
        assert_eq!(format_coordinate(1.005), "1.00");
        assert_eq!(format_coordinate(-116.035), "-116.03");
        assert_eq!(format_coordinate(13.715), "13.71");
        assert_eq!(format_coordinate(151.885), "151.88");
    }

    #[test]
    fn test_exact_halves_round_away_from_zero() {
        assert_eq!(format_coordinate(1.125), "1.13");
        assert_eq!(format_coordinate(-0.125), "-0.13");
        assert_eq!(format_coordinate(2.375), "2.38");
        assert_eq!(format_coordinate(-36.875), "-36.88");
    }

    #[test]
    fn test_rounding_is_idempotent() {
        let samples = [
            49.9923181, 36.2310146, -0.1276474, 0.005, 89.999, -179.995, 12.345678, 1.125,
        ];
        for value in samples {
            let once = format_coordinate(value);
            let reparsed: f64 = once.parse().expect("formatted coordinate parses");
            assert_eq!(format_coordinate(reparsed), once, "value {value}");
        }
    }

    #[test]
    fn test_initial_search_state() {
        let state = AppState::default();
        assert!(!state.search_active);
        assert!(state.search_results.is_empty());
        assert!(state.weather.is_none());
        assert!(!state.shows_results());
    }
}
