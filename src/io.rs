//! CSV intake and output for the enrichment pipeline

use crate::error::{EnrichError, Result};
use crate::models::{CardEntry, EnrichedCard};
use std::path::Path;

/// Required input column
pub const NAME_COLUMN: &str = "Card Name";
/// Optional input column; rows default to quantity 1 without it
pub const QUANTITY_COLUMN: &str = "Quantity";

/// Output header, in column order
const OUTPUT_HEADER: [&str; 8] = [
    "Card Name",
    "Set",
    "Rarity",
    "Color",
    "Tags",
    "USD Price",
    "ZAR Price",
    "Quantity",
];

/// Read the input card list.
///
/// The header must contain a `Card Name` column; its absence is fatal and
/// no rows are processed. A `Quantity` column is optional; an absent
/// column, empty cell, or unparseable cell resolves to quantity 1.
pub fn read_card_list(path: &Path) -> Result<Vec<CardEntry>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = rdr.headers()?.clone();
    let name_idx = headers
        .iter()
        .position(|h| h == NAME_COLUMN)
        .ok_or_else(|| EnrichError::MissingColumn(NAME_COLUMN.to_string()))?;
    let quantity_idx = headers.iter().position(|h| h == QUANTITY_COLUMN);

    let mut entries = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let name = record.get(name_idx).unwrap_or("").to_string();
        let quantity = quantity_idx
            .and_then(|idx| record.get(idx))
            .and_then(|cell| cell.parse::<u32>().ok())
            .unwrap_or(1);
        entries.push(CardEntry { name, quantity });
    }

    Ok(entries)
}

/// Write the enriched rows.
///
/// The header is written explicitly so an empty batch still produces a
/// valid file; identical rows produce byte-identical files.
pub fn write_enriched_csv(path: &Path, rows: &[EnrichedCard]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    wtr.write_record(OUTPUT_HEADER)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    Ok(())
}
