//! Card Enrich - CSV card-list enrichment
//!
//! Reads a CSV of card names, enriches each row with Scryfall metadata and
//! ZAR pricing, and writes the enriched CSV back out.

use card_enrich::api::{FrankfurterRates, ScryfallCatalog};
use card_enrich::batch::enrich_batch;
use card_enrich::formatters::format_preview;
use card_enrich::io::{read_card_list, write_enriched_csv};
use clap::Parser;
use indicatif::ProgressBar;
use std::path::PathBuf;

/// Enrich a CSV of card names with Scryfall metadata and ZAR pricing
#[derive(Parser, Debug)]
#[command(name = "card_enrich")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the input CSV (must have a "Card Name" column)
    input: PathBuf,

    /// Path for the enriched output CSV
    #[arg(short, long, default_value = "enriched_cards.csv")]
    output: PathBuf,
}

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> card_enrich::Result<()> {
    let entries = read_card_list(&args.input)?;
    log::info!(
        "Loaded {} card entries from {}",
        entries.len(),
        args.input.display()
    );

    let catalog = ScryfallCatalog::new();
    let rates = FrankfurterRates::new();

    let bar = ProgressBar::new(entries.len() as u64);
    let rows = enrich_batch(&catalog, &rates, &entries, |done, _total| {
        bar.set_position(done as u64);
    })?;
    bar.finish_and_clear();

    print!("{}", format_preview(&rows));

    write_enriched_csv(&args.output, &rows)?;
    log::info!(
        "Wrote {} enriched rows to {}",
        rows.len(),
        args.output.display()
    );

    Ok(())
}
