//! HTTP client for the OpenWeather endpoints
//!
//! Errors stop here: every failure is logged and turned into `None`.
//! There are no retries, no caching and no timeout beyond reqwest's defaults.

use std::future::Future;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::model::{Location, UnitSystem, WeatherSnapshot};

/// Why a request produced no data. Only used for logging.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The two calls the screen needs from a weather provider
///
/// `None` means "the request failed"; `Some(vec![])` from
/// [`resolve_locations`](WeatherApi::resolve_locations) means "nothing matched".
pub trait WeatherApi: Send + Sync + 'static {
    fn resolve_locations(
        &self,
        query: &str,
        limit: u32,
    ) -> impl Future<Output = Option<Vec<Location>>> + Send;

    fn fetch_weather(
        &self,
        lat: &str,
        lon: &str,
        units: UnitSystem,
    ) -> impl Future<Output = Option<WeatherSnapshot>> + Send;
}

/// reqwest-backed [`WeatherApi`]
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: Client,
    config: ApiConfig,
}

impl OpenWeatherClient {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(http: Client, config: ApiConfig) -> Self {
        if !config.has_api_key() {
            warn!("OpenWeather API key is not configured, requests will fail");
        }
        Self { http, config }
    }

    /// Geocoding URL. The query is inserted as typed, without percent-encoding.
    pub fn location_endpoint(&self, query: &str, limit: u32) -> String {
        format!(
            "{}/geo/1.0/direct?q={}&limit={}&appid={}",
            self.config.base_url, query, limit, self.config.api_key
        )
    }

    pub fn weather_endpoint(&self, lat: &str, lon: &str, units: UnitSystem) -> String {
        format!(
            "{}/data/3.0/onecall?lat={}&lon={}&appid={}&units={}",
            self.config.base_url, lat, lon, self.config.api_key, units
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn api_call<T: DeserializeOwned>(&self, endpoint: &'static str, url: String) -> Option<T> {
        match self.get_json(&url).await {
            Ok(data) => {
                debug!(endpoint, "OpenWeather request succeeded");
                Some(data)
            }
            Err(error) => {
                warn!(endpoint, %error, "OpenWeather request failed");
                None
            }
        }
    }
}

impl WeatherApi for OpenWeatherClient {
    async fn resolve_locations(&self, query: &str, limit: u32) -> Option<Vec<Location>> {
        let url = self.location_endpoint(query, limit);
        self.api_call("geocoding", url).await
    }

    async fn fetch_weather(
        &self,
        lat: &str,
        lon: &str,
        units: UnitSystem,
    ) -> Option<WeatherSnapshot> {
        let url = self.weather_endpoint(lat, lon, units);
        self.api_call("onecall", url).await
    }
}
