//! Frankfurter API client for the USD to ZAR exchange rate

use crate::batch::ExchangeRates;
use crate::error::{EnrichError, Result};
use serde::Deserialize;
use std::collections::HashMap;

/// Frankfurter API base URL
const FRANKFURTER_API: &str = "https://api.frankfurter.app";

/// Frankfurter `/latest` response, limited to the rates object.
#[derive(Debug, Deserialize)]
struct RatesResponse {
    rates: HashMap<String, f64>,
}

/// Fetch the current exchange rate for one currency pair
pub fn fetch_rate(from: &str, to: &str) -> Result<f64> {
    fetch_rate_from(FRANKFURTER_API, from, to)
}

/// Fetches the rate from the given base URL (for testing with mock servers).
pub(crate) fn fetch_rate_from(base_url: &str, from: &str, to: &str) -> Result<f64> {
    let url = format!("{}/latest?from={}&to={}", base_url, from, to);

    log::debug!("Fetching exchange rate: {} -> {}", from, to);

    let response = reqwest::blocking::Client::new()
        .get(&url)
        .header("User-Agent", super::USER_AGENT)
        .send()?;

    if !response.status().is_success() {
        return Err(EnrichError::HttpStatus(response.status()));
    }

    // Parse from text so a malformed body can be logged verbatim.
    let body = response.text()?;
    let parsed: RatesResponse = serde_json::from_str(&body).map_err(|e| {
        log::error!("Malformed exchange-rate response: {}", body);
        EnrichError::Parse(e)
    })?;

    let rate = parsed
        .rates
        .get(to)
        .copied()
        .ok_or_else(|| EnrichError::MissingRate(to.to_string()))?;

    if !rate.is_finite() || rate <= 0.0 {
        return Err(EnrichError::InvalidRate(rate));
    }

    Ok(rate)
}

/// Production [`ExchangeRates`] backed by the Frankfurter API.
pub struct FrankfurterRates {
    base_url: String,
}

impl FrankfurterRates {
    pub fn new() -> Self {
        Self::with_base_url(FRANKFURTER_API)
    }

    /// Rates against an injected base URL (for testing with mock servers).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        FrankfurterRates {
            base_url: base_url.into(),
        }
    }
}

impl Default for FrankfurterRates {
    fn default() -> Self {
        Self::new()
    }
}

impl ExchangeRates for FrankfurterRates {
    fn current_rate(&self) -> Result<f64> {
        fetch_rate_from(&self.base_url, "USD", "ZAR")
    }
}

#[cfg(test)]
#[path = "forex_tests.rs"]
mod tests;
