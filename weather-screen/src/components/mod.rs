pub mod current_conditions;
pub mod daily_forecast;
pub mod help_bar;
pub mod location_header;
pub mod search_bar;
pub mod search_results;
pub mod weather_screen;

pub use tui_dispatch::Component;

pub use current_conditions::{CurrentConditions, CurrentConditionsProps};
pub use daily_forecast::{DailyForecastStrip, DailyForecastStripProps};
pub use help_bar::{HelpBar, HelpBarProps};
pub use location_header::{LocationHeader, LocationHeaderProps};
pub use search_bar::{SearchBar, SearchBarProps};
pub use search_results::{SearchResults, SearchResultsProps};
pub use weather_screen::{WeatherScreen, WeatherScreenProps};

pub const LOCATION_ICON: &str = "📍 ";
pub const SEARCH_ICON: &str = "🔍 ";
