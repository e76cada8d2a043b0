//! Domain layer - Source fund extraction and filtering.
//!
//! Pure logic with no I/O: turning explorer page text into a filtered,
//! deduplicated list of exchange-tagged counterparties. Everything here
//! is testable in isolation.

pub mod exchanges;
pub mod extract;
pub mod filter;
pub mod source_fund;

pub use exchanges::{DEFAULT_EXCHANGES, ExchangeList};
pub use extract::PageExtractor;
pub use filter::{dedup_by_address, filter_known_exchanges};
pub use source_fund::{CandidateEntry, SourceFund};
