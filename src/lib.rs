//! Card Enrich - CSV card-list enrichment
//!
//! Enriches a CSV of MTG card names with Scryfall metadata and converts USD
//! prices to ZAR via a live Frankfurter exchange rate. One enriched output
//! row per input row, in input order; failed lookups degrade a row instead
//! of dropping it.

pub mod api;
pub mod batch;
pub mod enrich;
pub mod error;
pub mod formatters;
pub mod io;
pub mod models;

pub use batch::{enrich_batch, CardCatalog, ExchangeRates};
pub use error::{EnrichError, Result};
pub use models::{CardEntry, EnrichedCard};
