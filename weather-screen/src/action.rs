//! Actions: everything that can happen to the screen
//!
//! Naming convention:
//! - Prefix determines category: `SearchToggle`, `SearchDidLoad` -> "search"
//! - `Did` marks the result of async work
//! - Verbs at the end: Toggle, Change, Settle, Select, Pick, Fetch, Load

use tui_dispatch::ActionSummary;
use weather_api::{Location, WeatherSnapshot};

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq)]
#[action(infer_categories)]
pub enum Action {
    // ===== Search category =====
    /// Show or hide the search input and results
    #[action(category = "search")]
    SearchToggle,

    /// The search input text changed (schedules a debounced search)
    #[action(category = "search")]
    SearchQueryChange(String),

    /// The debounce quiet period elapsed with this query
    #[action(category = "search")]
    SearchQuerySettle(String),

    /// Result: geocoding finished (`None` = request failed)
    #[action(category = "search")]
    SearchDidLoad(Option<Vec<Location>>),

    /// Move the highlight to a result
    #[action(category = "search")]
    SearchSelect(usize),

    /// Make a result the current location
    #[action(category = "search")]
    SearchPick(usize),

    // ===== Weather category =====
    /// Intent: fetch weather for the current location and units
    #[action(category = "weather")]
    WeatherFetch,

    /// Result: weather fetch finished (`None` = request failed)
    #[action(category = "weather")]
    WeatherDidLoad(Option<WeatherSnapshot>),

    // ===== UI category =====
    /// Flip between metric and imperial
    #[action(category = "ui")]
    UiToggleUnits,

    /// Terminal was resized - update sprite sizing
    #[action(category = "ui")]
    UiTerminalResize(u16, u16),

    // ===== Uncategorized =====
    Quit,
}

/// Concise description for logs (payload-heavy results are abbreviated)
impl ActionSummary for Action {
    fn summary(&self) -> String {
        match self {
            Action::SearchDidLoad(Some(results)) => {
                let names: Vec<_> = results.iter().map(|l| l.display_name()).collect();
                format!("SearchDidLoad({:?})", names)
            }
            Action::SearchDidLoad(None) => "SearchDidLoad(failed)".to_string(),
            Action::WeatherDidLoad(Some(snapshot)) => format!(
                "WeatherDidLoad {{ temp: {:.1}, days: {} }}",
                snapshot.current.temp,
                snapshot.daily.len()
            ),
            Action::WeatherDidLoad(None) => "WeatherDidLoad(failed)".to_string(),
            _ => format!("{:?}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_variant_name() {
        use tui_dispatch::Action as _;

        assert_eq!(Action::SearchQuerySettle("Kyiv".into()).name(), "SearchQuerySettle");
        assert_eq!(Action::UiTerminalResize(80, 24).name(), "UiTerminalResize");
    }

    #[test]
    fn test_categories_follow_prefix() {
        assert_eq!(Action::SearchDidLoad(None).category(), Some("search"));
        assert_eq!(Action::WeatherFetch.category(), Some("weather"));
        assert_eq!(Action::UiToggleUnits.category(), Some("ui"));
        assert_eq!(Action::Quit.category(), None);
    }

    #[test]
    fn test_summary_abbreviates_failures() {
        assert_eq!(Action::WeatherDidLoad(None).summary(), "WeatherDidLoad(failed)");
        assert_eq!(Action::SearchDidLoad(Some(vec![])).summary(), "SearchDidLoad([])");
        assert_eq!(
            Action::SearchQueryChange("Ky".into()).summary(),
            "SearchQueryChange(\"Ky\")"
        );
    }
}
