//! Error types for card_enrich

use std::fmt;

/// Unified error type for card_enrich operations
#[derive(Debug)]
pub enum EnrichError {
    /// HTTP request failed (network error, timeout, etc.)
    Network(reqwest::Error),
    /// Failed to parse JSON response
    Parse(serde_json::Error),
    /// HTTP error status code
    HttpStatus(reqwest::StatusCode),
    /// CSV read or write failed
    Csv(csv::Error),
    /// File I/O error
    Io(std::io::Error),
    /// Input file is missing a required column
    MissingColumn(String),
    /// Exchange-rate response has no rate for the target currency
    MissingRate(String),
    /// Exchange-rate response carried a non-positive or non-finite rate
    InvalidRate(f64),
    /// Card not found on Scryfall
    CardNotFound(String),
}

impl fmt::Display for EnrichError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnrichError::Network(e) => write!(f, "Network error: {}", e),
            EnrichError::Parse(e) => write!(f, "Parse error: {}", e),
            EnrichError::HttpStatus(status) => write!(f, "HTTP error: {}", status),
            EnrichError::Csv(e) => write!(f, "CSV error: {}", e),
            EnrichError::Io(e) => write!(f, "I/O error: {}", e),
            EnrichError::MissingColumn(column) => {
                write!(f, "Input CSV must have a '{}' column", column)
            }
            EnrichError::MissingRate(currency) => {
                write!(f, "No exchange rate for currency: {}", currency)
            }
            EnrichError::InvalidRate(rate) => write!(f, "Invalid exchange rate: {}", rate),
            EnrichError::CardNotFound(name) => {
                write!(f, "Card not found on Scryfall: {}", name)
            }
        }
    }
}

impl std::error::Error for EnrichError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EnrichError::Network(e) => Some(e),
            EnrichError::Parse(e) => Some(e),
            EnrichError::Csv(e) => Some(e),
            EnrichError::Io(e) => Some(e),
            EnrichError::HttpStatus(_)
            | EnrichError::MissingColumn(_)
            | EnrichError::MissingRate(_)
            | EnrichError::InvalidRate(_)
            | EnrichError::CardNotFound(_) => None,
        }
    }
}

impl From<reqwest::Error> for EnrichError {
    fn from(err: reqwest::Error) -> Self {
        EnrichError::Network(err)
    }
}

impl From<serde_json::Error> for EnrichError {
    fn from(err: serde_json::Error) -> Self {
        EnrichError::Parse(err)
    }
}

impl From<csv::Error> for EnrichError {
    fn from(err: csv::Error) -> Self {
        EnrichError::Csv(err)
    }
}

impl From<std::io::Error> for EnrichError {
    fn from(err: std::io::Error) -> Self {
        EnrichError::Io(err)
    }
}

/// Result alias for card_enrich operations
pub type Result<T> = std::result::Result<T, EnrichError>;
