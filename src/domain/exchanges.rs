//! Known exchange names.
//!
//! The list is built once at startup (from config or the defaults below)
//! and shared read-only by every request.

/// Exchange names recognized out of the box, in scan order.
pub const DEFAULT_EXCHANGES: &[&str] = &[
    "Binance",
    "Huobi",
    "Coinbase",
    "Kraken",
    "Bitfinex",
    "Bitstamp",
    "Bithumb",
    "Bittrex",
    "Gemini",
    "OKEx",
    "KuCoin",
    "FTX",
    "BitMart",
    "Gate.io",
    "Bitforex",
    "Poloniex",
    "HitBTC",
    "ZB.com",
    "Bitrue",
    "Upbit",
    "FixedFloat",
    "Mexc",
];

/// Immutable, ordered set of exchange names used by the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeList {
    names: Box<[String]>,
}

impl ExchangeList {
    /// Build a list from arbitrary names, keeping their order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// First exchange name (in list order) contained in `label`.
    ///
    /// Matching is a case-sensitive substring test.
    pub fn first_match(&self, label: &str) -> Option<&str> {
        self.names
            .iter()
            .map(String::as_str)
            .find(|name| label.contains(name))
    }

    /// Whether `label` contains any known exchange name.
    pub fn matches(&self, label: &str) -> bool {
        self.first_match(label).is_some()
    }

    /// Names in scan order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of known names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no names are configured; such a list matches nothing.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for ExchangeList {
    fn default() -> Self {
        Self::new(DEFAULT_EXCHANGES.iter().copied())
    }
}
