//! Exchange-name filtering and address deduplication.

use std::collections::HashSet;

use super::exchanges::ExchangeList;
use super::source_fund::{CandidateEntry, SourceFund};

/// Keep candidates whose name contains a known exchange name.
///
/// Each candidate is emitted at most once regardless of how many names it
/// matches. Input order is preserved; duplicate addresses are not removed.
pub fn filter_known_exchanges<I>(candidates: I, exchanges: &ExchangeList) -> Vec<SourceFund>
where
    I: IntoIterator<Item = CandidateEntry>,
{
    candidates
        .into_iter()
        .filter(|candidate| exchanges.matches(&candidate.name))
        .map(SourceFund::from)
        .collect()
}

/// Keep the first fund seen for each distinct address (exact match).
pub fn dedup_by_address(funds: Vec<SourceFund>) -> Vec<SourceFund> {
    let mut seen = HashSet::with_capacity(funds.len());
    funds
        .into_iter()
        .filter(|fund| seen.insert(fund.address.clone()))
        .collect()
}
