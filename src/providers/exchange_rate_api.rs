use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

use crate::core::error::FetchError;
use crate::core::rates::{RateSnapshot, RateSource};

/// Rate source backed by an exchangerate-api style endpoint.
///
/// One GET per fetch: `{base_url}/{base}`, answered with a JSON body whose
/// `rates` field maps currency code to rate.
pub struct ExchangeRateApiSource {
    base_url: String,
    client: reqwest::Client,
}

impl ExchangeRateApiSource {
    /// Builds the source with a per-request timeout applied to every fetch.
    pub fn new(base_url: &str, timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("fxc/0.1")
            .timeout(timeout)
            .build()?;
        Ok(ExchangeRateApiSource {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[derive(Debug, Deserialize)]
struct RatesResponse {
    rates: HashMap<String, f64>,
}

#[async_trait]
impl RateSource for ExchangeRateApiSource {
    async fn fetch_rates(&self, base: &str) -> Result<RateSnapshot, FetchError> {
        let url = format!("{}/{}", self.base_url, base);
        debug!("Requesting exchange rates from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(format!("Request error: {e} for URL: {url}")))?;

        if !response.status().is_success() {
            return Err(FetchError::Transport(format!(
                "HTTP error: {} for base currency: {}",
                response.status(),
                base
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(format!("Failed to read response body: {e}")))?;

        let data: RatesResponse = serde_json::from_str(&text)
            .map_err(|e| FetchError::Malformed(format!("Failed to parse JSON response: {e}")))?;

        let mut rates = data.rates;
        rates.retain(|code, rate| {
            let usable = rate.is_finite() && *rate > 0.0;
            if !usable {
                warn!("Dropping unusable rate {} for {}", rate, code);
            }
            usable
        });

        if rates.is_empty() {
            return Err(FetchError::Malformed(format!(
                "No usable rates for base currency: {base}"
            )));
        }

        debug!("Fetched {} rates for {}", rates.len(), base);
        Ok(RateSnapshot::new(base, rates))
    }
}
