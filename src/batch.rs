//! Batch driver: one exchange-rate fetch, then one catalog lookup and
//! transform per input row, in input order.

use crate::api::scryfall::ScryfallCard;
use crate::enrich::enrich_card;
use crate::error::Result;
use crate::models::{CardEntry, EnrichedCard};
use std::thread;
use std::time::Duration;

/// Fixed pause between consecutive catalog lookups, to be nice to Scryfall.
pub const LOOKUP_DELAY: Duration = Duration::from_millis(100);

/// Exact-name card lookup.
///
/// Catalog misses and transport errors are both `None`; the driver treats
/// them identically (the affected row degrades, the batch continues).
pub trait CardCatalog {
    fn lookup(&self, name: &str) -> Option<ScryfallCard>;
}

/// Source of the batch's single exchange rate.
pub trait ExchangeRates {
    fn current_rate(&self) -> Result<f64>;
}

/// Enrich every entry, preserving input order and count.
///
/// The rate is fetched once, before any lookup; a rate failure aborts the
/// whole batch with no partial output. `on_progress(rows_done, total)` fires
/// after each row and reaches `(total, total)` after the last one.
pub fn enrich_batch<C, R, F>(
    catalog: &C,
    rates: &R,
    entries: &[CardEntry],
    mut on_progress: F,
) -> Result<Vec<EnrichedCard>>
where
    C: CardCatalog + ?Sized,
    R: ExchangeRates + ?Sized,
    F: FnMut(usize, usize),
{
    let usd_to_zar = rates.current_rate()?;
    log::info!("Current USD to ZAR rate: {:.2}", usd_to_zar);

    let total = entries.len();
    let mut enriched = Vec::with_capacity(total);

    for (idx, entry) in entries.iter().enumerate() {
        let card = catalog.lookup(&entry.name);
        enriched.push(enrich_card(&entry.name, entry.quantity, usd_to_zar, card.as_ref()));
        on_progress(idx + 1, total);

        // Pace requests to the catalog; no pause needed after the last row.
        if idx + 1 < total {
            thread::sleep(LOOKUP_DELAY);
        }
    }

    Ok(enriched)
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
