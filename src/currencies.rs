//! Static country-to-currency lookup used to pick the exchange rate base.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Fallback currency for countries outside the map, and the fixed target of
/// every search. An unmapped country therefore yields a base==target quote;
/// that self-referential rate is the observed behavior and kept on purpose.
pub const DEFAULT_CURRENCY: &str = "USD";

static COUNTRY_CURRENCIES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("KZ", "KZT"),
        ("US", "USD"),
        ("GB", "GBP"),
        ("RU", "RUB"),
        ("FR", "EUR"),
        ("DE", "EUR"),
        ("ES", "EUR"),
        ("IT", "EUR"),
        ("JP", "JPY"),
        ("CN", "CNY"),
    ])
});

/// Currency code for an ISO 3166-1 alpha-2 country code.
#[must_use]
pub fn currency_for_country(country: &str) -> &'static str {
    COUNTRY_CURRENCIES
        .get(country)
        .copied()
        .unwrap_or(DEFAULT_CURRENCY)
}
