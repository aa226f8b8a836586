//! Wire models for the geocoding and one-call endpoints

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A geocoded place
///
/// Replaced wholesale when the user picks another search result, never patched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_names: Option<BTreeMap<String, String>>,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl Location {
    /// State/region suffix, shown only when it is longer than a bare code.
    pub fn region(&self) -> Option<&str> {
        self.state
            .as_deref()
            .filter(|state| state.chars().count() > 2)
    }

    /// `name` or `name, state`
    pub fn display_name(&self) -> String {
        match self.region() {
            Some(state) => format!("{}, {}", self.name, state),
            None => self.name.clone(),
        }
    }

    /// Localized name, falling back to `name`.
    pub fn local_name(&self, lang: &str) -> &str {
        self.local_names
            .as_ref()
            .and_then(|names| names.get(lang))
            .map(String::as_str)
            .unwrap_or(&self.name)
    }
}

/// Measurement system passed as the `units` query parameter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn toggle(self) -> Self {
        match self {
            UnitSystem::Metric => UnitSystem::Imperial,
            UnitSystem::Imperial => UnitSystem::Metric,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    /// `℃` or `℉`
    pub fn temperature_symbol(self) -> &'static str {
        match self {
            UnitSystem::Metric => "\u{2103}",
            UnitSystem::Imperial => "\u{2109}",
        }
    }

    pub fn wind_speed_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => "m/s",
            UnitSystem::Imperial => "mph",
        }
    }

    /// Whole degrees plus symbol. Halves round away from zero.
    pub fn format_temperature(self, value: f64) -> String {
        format!("{:.0}{}", value.round(), self.temperature_symbol())
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown unit system {0:?} (expected \"metric\" or \"imperial\")")]
pub struct ParseUnitSystemError(String);

impl FromStr for UnitSystem {
    type Err = ParseUnitSystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            _ => Err(ParseUnitSystemError(s.to_string())),
        }
    }
}

/// One-call response: current observation plus daily forecast
///
/// Treated as an opaque value that is replaced on every completed fetch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lon: f64,
    #[serde(default)]
    pub timezone: String,
    pub current: CurrentConditions,
    #[serde(default)]
    pub daily: Vec<DailyForecast>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    #[serde(default)]
    pub dt: i64,
    pub temp: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub clouds: u8,
    #[serde(default)]
    pub weather: Vec<Condition>,
}

impl CurrentConditions {
    /// Primary condition (the provider lists the dominant one first).
    pub fn condition(&self) -> Option<&Condition> {
        self.weather.first()
    }
}

/// Provider condition entry, e.g. `{ main: "Clouds", icon: "04d" }`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(default)]
    pub id: u32,
    pub main: String,
    #[serde(default)]
    pub description: String,
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Forecast timestamp, also used as a stable key for the day card
    pub dt: i64,
    pub temp: DailyTemperature,
    #[serde(default)]
    pub weather: Vec<Condition>,
}

impl DailyForecast {
    pub fn condition(&self) -> Option<&Condition> {
        self.weather.first()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyTemperature {
    pub day: f64,
    #[serde(default)]
    pub min: f64,
    #[serde(default)]
    pub max: f64,
}
