use serde::Serialize;

/// One parsed row of the input CSV.
///
/// Quantity defaulting is resolved at parse time: rows without a usable
/// quantity arrive here already carrying 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardEntry {
    pub name: String,
    pub quantity: u32,
}

/// One row of the output CSV.
///
/// The serde renames fix the output header names; field order here is the
/// column order of the file. `None` prices serialize as empty cells.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct EnrichedCard {
    #[serde(rename = "Card Name")]
    pub card_name: String,
    #[serde(rename = "Set")]
    pub set: String,
    #[serde(rename = "Rarity")]
    pub rarity: String,
    #[serde(rename = "Color")]
    pub color: String,
    #[serde(rename = "Tags")]
    pub tags: String,
    #[serde(rename = "USD Price")]
    pub usd_price: Option<f64>,
    #[serde(rename = "ZAR Price")]
    pub zar_price: Option<f64>,
    #[serde(rename = "Quantity")]
    pub quantity: u32,
}

impl EnrichedCard {
    /// Row emitted when the catalog lookup missed or failed: only the name
    /// and quantity survive, every enrichable field is blank.
    pub fn degraded(card_name: &str, quantity: u32) -> Self {
        EnrichedCard {
            card_name: card_name.to_string(),
            set: String::new(),
            rarity: String::new(),
            color: String::new(),
            tags: String::new(),
            usd_price: None,
            zar_price: None,
            quantity,
        }
    }
}
