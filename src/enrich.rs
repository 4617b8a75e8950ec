//! The card-enrichment transform: one input row plus one lookup result
//! plus the batch exchange rate in, one output row out.

use crate::api::scryfall::ScryfallCard;
use crate::models::EnrichedCard;

/// Produce one output row.
///
/// Pure function of its inputs: no I/O, never fails. A missed lookup
/// (`card == None`) yields the degraded row rather than an error.
pub fn enrich_card(
    card_name: &str,
    quantity: u32,
    usd_to_zar: f64,
    card: Option<&ScryfallCard>,
) -> EnrichedCard {
    let Some(card) = card else {
        return EnrichedCard::degraded(card_name, quantity);
    };

    let color = if card.colors.is_empty() {
        "Colorless".to_string()
    } else {
        card.colors.join(",")
    };

    let tags = format!(
        "Set: {}, Rarity: {}, Color: {}, Types: {}",
        card.set, card.rarity, color, card.type_line
    );

    // Absent or unparseable USD price counts as 0.0, not a failure.
    let usd_price = card
        .prices
        .usd
        .as_deref()
        .and_then(|p| p.parse::<f64>().ok())
        .unwrap_or(0.0);
    let zar_price = round_cents(usd_price * usd_to_zar);

    EnrichedCard {
        card_name: card_name.to_string(),
        set: card.set.clone(),
        rarity: card.rarity.clone(),
        color,
        tags,
        usd_price: Some(usd_price),
        zar_price: Some(zar_price),
        quantity,
    }
}

/// Round to 2 decimal places, half away from zero.
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
