//! Plain-text preview of enriched rows for the terminal

use crate::models::EnrichedCard;

/// Number of rows the preview shows
const PREVIEW_ROWS: usize = 5;

fn format_price(price: Option<f64>) -> String {
    price.map(|p| format!("{p:.2}")).unwrap_or_default()
}

/// Format an aligned preview table of the first few enriched rows.
pub fn format_preview(rows: &[EnrichedCard]) -> String {
    if rows.is_empty() {
        return "No rows to preview.\n".to_string();
    }

    let shown = &rows[..rows.len().min(PREVIEW_ROWS)];

    let mut max_name_len = "Card Name".len();
    let mut max_set_len = "Set".len();
    let mut max_rarity_len = "Rarity".len();
    let mut max_color_len = "Color".len();
    let mut max_usd_len = "USD Price".len();
    let mut max_zar_len = "ZAR Price".len();

    // Calculate maximum lengths for alignment
    for row in shown {
        max_name_len = max_name_len.max(row.card_name.len());
        max_set_len = max_set_len.max(row.set.len());
        max_rarity_len = max_rarity_len.max(row.rarity.len());
        max_color_len = max_color_len.max(row.color.len());
        max_usd_len = max_usd_len.max(format_price(row.usd_price).len());
        max_zar_len = max_zar_len.max(format_price(row.zar_price).len());
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name$}  {:<set$}  {:<rarity$}  {:<color$}  {:>usd$}  {:>zar$}  Qty\n",
        "Card Name",
        "Set",
        "Rarity",
        "Color",
        "USD Price",
        "ZAR Price",
        name = max_name_len,
        set = max_set_len,
        rarity = max_rarity_len,
        color = max_color_len,
        usd = max_usd_len,
        zar = max_zar_len,
    ));

    for row in shown {
        output.push_str(&format!(
            "{:<name$}  {:<set$}  {:<rarity$}  {:<color$}  {:>usd$}  {:>zar$}  {:>3}\n",
            row.card_name,
            row.set,
            row.rarity,
            row.color,
            format_price(row.usd_price),
            format_price(row.zar_price),
            row.quantity,
            name = max_name_len,
            set = max_set_len,
            rarity = max_rarity_len,
            color = max_color_len,
            usd = max_usd_len,
            zar = max_zar_len,
        ));
    }

    if rows.len() > PREVIEW_ROWS {
        output.push_str(&format!("... and {} more rows\n", rows.len() - PREVIEW_ROWS));
    }

    output
}
