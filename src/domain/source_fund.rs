//! Source fund records.
//!
//! A `CandidateEntry` is whatever the extractor pulled out of the page
//! markup. A `SourceFund` is a candidate that passed the exchange-name
//! filter and is what the HTTP surface serializes.

use serde::{Deserialize, Serialize};

/// Raw `(name, address)` pair extracted from explorer markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateEntry {
    /// Label shown by the explorer, e.g. `Binance 14`.
    pub name: String,
    /// Address text found between `(` and `)` after the label.
    pub address: String,
}

impl CandidateEntry {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

/// Exchange-tagged counterparty returned to callers.
///
/// Serialized as `{"name": "...", "address": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFund {
    pub name: String,
    pub address: String,
}

impl From<CandidateEntry> for SourceFund {
    fn from(candidate: CandidateEntry) -> Self {
        Self {
            name: candidate.name,
            address: candidate.address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_fund_json_shape() {
        let fund = SourceFund::from(CandidateEntry::new("Binance 14", "0xABC"));
        let json = serde_json::to_string(&fund).unwrap();
        assert_eq!(json, r#"{"name":"Binance 14","address":"0xABC"}"#);
    }
}
