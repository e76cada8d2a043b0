//! Property-Based Tests — Domain Layer Invariants
//!
//! Uses `proptest` to verify extraction, filtering and dedup invariants
//! across random inputs.

use std::collections::HashSet;

use proptest::prelude::*;

use source_fund_service::domain::{
    CandidateEntry, ExchangeList, PageExtractor, SourceFund, dedup_by_address,
    filter_known_exchanges,
};

fn fund_strategy() -> impl Strategy<Value = SourceFund> {
    ("[A-Za-z ]{0,12}", "0x[0-9a-fA-F]{1,3}")
        .prop_map(|(name, address)| SourceFund { name, address })
}

fn candidate_strategy() -> impl Strategy<Value = CandidateEntry> {
    (
        prop_oneof![
            Just("Binance 14".to_string()),
            Just("Kraken: Hot Wallet".to_string()),
            Just("binance 2".to_string()),
            Just("Random Wallet".to_string()),
            "[A-Za-z ]{0,12}",
        ],
        "0x[0-9a-f]{1,2}",
    )
        .prop_map(|(name, address)| CandidateEntry::new(name, address))
}

// ── Extractor Properties ────────────────────────────────────

proptest! {
    /// Text without the tooltip anchor never yields candidates.
    #[test]
    fn extract_without_anchor_is_empty(page in "[^\"]{0,200}") {
        let extractor = PageExtractor::new().unwrap();
        prop_assert!(extractor.extract(&page).is_empty());
    }

    /// Every well-formed anchor is recovered, in order.
    #[test]
    fn extract_recovers_all_anchors(
        entries in prop::collection::vec(("[A-Za-z0-9 ]{1,10}", "0x[0-9a-f]{1,6}"), 0..8),
    ) {
        let extractor = PageExtractor::new().unwrap();
        let page: String = entries
            .iter()
            .map(|(name, address)| format!(
                r#"<a data-bs-toggle="tooltip" data-bs-trigger="hover" data-bs-placement="top" title="{name}<br/>({address})</a><a class="js-clipboard">"#
            ))
            .collect();

        let out = extractor.extract(&page);
        let expected: Vec<_> = entries
            .iter()
            .map(|(name, address)| CandidateEntry::new(name.as_str(), address.as_str()))
            .collect();
        prop_assert_eq!(out, expected);
    }
}

// ── Filter Properties ───────────────────────────────────────

proptest! {
    /// Output is the order-preserving subsequence of matching candidates.
    #[test]
    fn filter_preserves_order_and_bound(
        candidates in prop::collection::vec(candidate_strategy(), 0..20),
    ) {
        let exchanges = ExchangeList::default();
        let matching = candidates.iter().filter(|c| exchanges.matches(&c.name)).count();

        let out = filter_known_exchanges(candidates.clone(), &exchanges);
        prop_assert!(out.len() <= matching);

        let expected: Vec<SourceFund> = candidates
            .into_iter()
            .filter(|c| exchanges.matches(&c.name))
            .map(SourceFund::from)
            .collect();
        prop_assert_eq!(out, expected);
    }
}

// ── Deduplicator Properties ─────────────────────────────────

proptest! {
    /// Addresses are unique, every input address survives once, first wins.
    #[test]
    fn dedup_keeps_first_of_each_address(
        funds in prop::collection::vec(fund_strategy(), 0..30),
    ) {
        let out = dedup_by_address(funds.clone());

        let mut seen = HashSet::new();
        for fund in &out {
            prop_assert!(seen.insert(fund.address.clone()), "duplicate {}", fund.address);
        }

        let input_addresses: HashSet<_> = funds.iter().map(|f| f.address.clone()).collect();
        prop_assert_eq!(seen, input_addresses);

        for fund in &out {
            let first = funds.iter().find(|f| f.address == fund.address).unwrap();
            prop_assert_eq!(fund, first);
        }
    }

    /// Running dedup twice is the same as running it once.
    #[test]
    fn dedup_is_idempotent(funds in prop::collection::vec(fund_strategy(), 0..30)) {
        let once = dedup_by_address(funds);
        let twice = dedup_by_address(once.clone());
        prop_assert_eq!(once, twice);
    }
}
