//! Weather API client for wttr.in
//!
//! Fetches the `format=j1` JSON report for a free-text location. The HTTP
//! handlers only see the [`WeatherProvider`] trait so tests can swap in a stub.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, instrument, warn};

use crate::config::WeatherConfig;
use crate::models::RawWeatherPayload;
use crate::{Result, SkyglanceError};

/// Source of raw weather payloads
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch the current report and forecast for a location
    async fn fetch(&self, location: &str) -> Result<RawWeatherPayload>;
}

/// wttr.in client sharing one connection pool across requests
#[derive(Debug, Clone)]
pub struct WttrClient {
    client: Client,
    base_url: String,
}

impl WttrClient {
    /// Create a client honouring the configured base URL and timeout
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("skyglance/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SkyglanceError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Report URL for a location, e.g. `https://wttr.in/New%20York?format=j1`
    #[must_use]
    pub fn report_url(&self, location: &str) -> String {
        format!(
            "{}/{}?format=j1",
            self.base_url,
            urlencoding::encode(location)
        )
    }
}

#[async_trait]
impl WeatherProvider for WttrClient {
    #[instrument(skip(self))]
    async fn fetch(&self, location: &str) -> Result<RawWeatherPayload> {
        let url = self.report_url(location);
        debug!("wttr.in request URL: {}", url);
        let start_time = Instant::now();

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                SkyglanceError::fetch(format!("request timed out: {e}"))
            } else {
                SkyglanceError::fetch(format!("failed to fetch weather data: {e}"))
            }
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("wttr.in returned HTTP {}", status);
            return Err(SkyglanceError::fetch(format!("API returned status {status}")));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SkyglanceError::fetch(format!("failed to read response body: {e}")))?;

        let payload: RawWeatherPayload = serde_json::from_slice(&body)
            .map_err(|e| SkyglanceError::decode(format!("failed to decode JSON response: {e}")))?;

        let total_duration = start_time.elapsed();
        info!(
            "Retrieved weather report in {:.3}s ({} bytes)",
            total_duration.as_secs_f64(),
            body.len()
        );

        if total_duration.as_secs() > 5 {
            warn!("Slow API response detected: {:.3}s", total_duration.as_secs_f64());
        }

        Ok(payload)
    }
}
