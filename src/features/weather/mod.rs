//! # Weather Feature
//!
//! One-line plain-text forecasts from a weather-by-text service
//! (wttr.in-compatible: `GET <base>/<city>?format=3`).
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.3.0
//! - **Toggleable**: true

use anyhow::{Context, Result};
use log::debug;
use std::time::Duration;

/// HTTP client for the weather-by-text service.
#[derive(Clone)]
pub struct WeatherClient {
    client: reqwest::Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build weather HTTP client")?;

        Ok(WeatherClient {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch the one-line forecast for `city`.
    ///
    /// The city goes into the URL path; spaces become `+`, which the
    /// service treats as word separators.
    pub async fn fetch(&self, city: &str) -> Result<String> {
        let city_path = city.trim().replace(' ', "+");
        let url = format!("{}/{}", self.base_url, city_path);
        debug!("fetching weather from {url}");

        let response = self
            .client
            .get(&url)
            .query(&[("format", "3")])
            .send()
            .await
            .context("weather request failed")?
            .error_for_status()
            .context("weather service returned an error status")?;

        let line = response
            .text()
            .await
            .context("weather response was not text")?;

        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_path_encoding() {
        // The path substitution is the only pure logic here; the HTTP round
        // trip is covered by the transport-free handler tests.
        let city = "  New York ".trim().replace(' ', "+");
        assert_eq!(city, "New+York");
    }

    #[test]
    fn test_client_builds() {
        let client = WeatherClient::new("https://wttr.in", Duration::from_secs(5));
        assert!(client.is_ok());
    }
}
