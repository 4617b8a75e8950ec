//! Scryfall API client for exact-name card lookups

use crate::batch::CardCatalog;
use crate::error::{EnrichError, Result};
use serde::Deserialize;

/// Scryfall API base URL
const SCRYFALL_API: &str = "https://api.scryfall.com";

/// Scryfall card response, limited to the fields the enrichment consumes.
///
/// All metadata fields are defaulted so partial records degrade to empty
/// values instead of failing deserialization.
#[derive(Debug, Deserialize, Clone)]
pub struct ScryfallCard {
    pub name: String,
    #[serde(default)]
    pub set: String,
    #[serde(default)]
    pub rarity: String,
    /// Single-letter color codes, in Scryfall's order. Absent for lands
    /// and most artifacts.
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub type_line: String,
    #[serde(default)]
    pub prices: ScryfallPrices,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ScryfallPrices {
    pub usd: Option<String>,
    pub usd_foil: Option<String>,
}

/// Fetch a card from Scryfall by exact name
pub fn fetch_card_by_name(name: &str) -> Result<ScryfallCard> {
    fetch_card_by_name_from(SCRYFALL_API, name)
}

/// Fetches a card from the given base URL (for testing with mock servers).
pub(crate) fn fetch_card_by_name_from(base_url: &str, name: &str) -> Result<ScryfallCard> {
    let url = format!(
        "{}/cards/named?exact={}",
        base_url,
        urlencoding::encode(name)
    );

    log::debug!("Fetching card from Scryfall: {}", name);

    let response = reqwest::blocking::Client::new()
        .get(&url)
        .header("User-Agent", super::USER_AGENT)
        .send()?;

    if response.status().is_success() {
        Ok(response.json::<ScryfallCard>()?)
    } else {
        Err(EnrichError::CardNotFound(name.to_string()))
    }
}

/// Production [`CardCatalog`] backed by the Scryfall API.
///
/// Misses and transport errors are both reported as `None`; the cause is
/// only visible in the warn log.
pub struct ScryfallCatalog {
    base_url: String,
}

impl ScryfallCatalog {
    pub fn new() -> Self {
        Self::with_base_url(SCRYFALL_API)
    }

    /// Catalog against an injected base URL (for testing with mock servers).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        ScryfallCatalog {
            base_url: base_url.into(),
        }
    }
}

impl Default for ScryfallCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CardCatalog for ScryfallCatalog {
    fn lookup(&self, name: &str) -> Option<ScryfallCard> {
        match fetch_card_by_name_from(&self.base_url, name) {
            Ok(card) => Some(card),
            Err(e) => {
                log::warn!("Scryfall lookup failed for '{}': {}", name, e);
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "scryfall_tests.rs"]
mod tests;
