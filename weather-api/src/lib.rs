//! OpenWeather client for the weather screen
//!
//! Two endpoints are wrapped:
//!
//! - **Geocoding** (`/geo/1.0/direct`): free-text place name to candidate [`Location`]s
//! - **One-call** (`/data/3.0/onecall`): current conditions plus daily forecast
//!
//! Both calls follow the same contract: `Some(data)` on success, `None` on any
//! failure. Failures are logged through `tracing` and never surface as errors,
//! so callers only have to tolerate an absent value.
//!
//! ```ignore
//! use weather_api::{ApiConfig, OpenWeatherClient, UnitSystem, WeatherApi};
//!
//! let client = OpenWeatherClient::new(ApiConfig::new("secret"));
//! let candidates = client.resolve_locations("Kharkiv", 3).await;
//! let snapshot = client.fetch_weather("49.99", "36.23", UnitSystem::Metric).await;
//! ```

pub mod client;
pub mod config;
pub mod icons;
pub mod model;

pub use client::{ApiError, OpenWeatherClient, WeatherApi};
pub use config::{ApiConfig, API_KEY_ENV, DEFAULT_BASE_URL};
pub use icons::{icon_bucket, IconBucket};
pub use model::{
    Condition, CurrentConditions, DailyForecast, DailyTemperature, Location,
    ParseUnitSystemError, UnitSystem, WeatherSnapshot,
};
