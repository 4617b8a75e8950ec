//! API clients for external services (Scryfall, Frankfurter)

pub mod forex;
pub mod scryfall;

/// User-Agent sent with every outbound request (Scryfall asks clients to
/// identify themselves).
pub const USER_AGENT: &str = "card_enrich/1.0";

// Re-exports for public API convenience
pub use forex::FrankfurterRates;
pub use scryfall::{ScryfallCard, ScryfallCatalog};
