//! Source Fund Lookup - Fetch → Extract → Filter → Dedup
//!
//! Orchestrates one lookup per request. Holds only read-only state, so a
//! single instance is shared across all request tasks behind an `Arc`.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::domain::exchanges::ExchangeList;
use crate::domain::extract::PageExtractor;
use crate::domain::filter::{dedup_by_address, filter_known_exchanges};
use crate::domain::source_fund::SourceFund;
use crate::ports::page_fetcher::{FetchError, PageFetcher};

/// Resolves exchange-tagged source funds for an address.
pub struct SourceFundService {
  /// Page source port.
  fetcher: Arc<dyn PageFetcher>,
  /// Compiled markup extractor.
  extractor: PageExtractor,
  /// Known exchange names, fixed at startup.
  exchanges: ExchangeList,
}

impl SourceFundService {
  /// Create a new service.
  ///
  /// # Errors
  /// Fails only if the extraction pattern does not compile.
  pub fn new(
    fetcher: Arc<dyn PageFetcher>,
    exchanges: ExchangeList,
  ) -> Result<Self, regex::Error> {
    Ok(Self {
      fetcher,
      extractor: PageExtractor::new()?,
      exchanges,
    })
  }

  /// Fetch the explorer page for `address` and return its source funds.
  ///
  /// A page whose markup does not match yields an empty list, not an error.
  #[instrument(skip(self), fields(address = %address))]
  pub async fn lookup(&self, address: &str) -> Result<Vec<SourceFund>, FetchError> {
    let page = self.fetcher.fetch_page(address).await?;
    let funds = self.funds_from_page(&page);

    info!(funds = funds.len(), "Source fund lookup complete");
    Ok(funds)
  }

  /// Run extraction, filtering and dedup over already-fetched page text.
  pub fn funds_from_page(&self, page: &str) -> Vec<SourceFund> {
    let candidates = self.extractor.extract(page);
    let candidate_count = candidates.len();

    let matched = filter_known_exchanges(candidates, &self.exchanges);
    let matched_count = matched.len();

    let funds = dedup_by_address(matched);

    debug!(
      candidates = candidate_count,
      matched = matched_count,
      unique = funds.len(),
      "Page processed"
    );
    funds
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use async_trait::async_trait;

  struct StaticPage(&'static str);

  #[async_trait]
  impl PageFetcher for StaticPage {
    async fn fetch_page(&self, _address: &str) -> Result<String, FetchError> {
      Ok(self.0.to_string())
    }
  }

  const PAGE: &str = concat!(
    r#"<a data-bs-toggle="tooltip" data-bs-trigger="hover" data-bs-placement="top" title="Binance 14<br/>(0xABC)</a><a class="js-clipboard">"#,
    r#"<a data-bs-toggle="tooltip" data-bs-trigger="hover" data-bs-placement="top" title="Random Wallet<br/>(0xDEF)</a><a class="js-clipboard">"#,
    r#"<a data-bs-toggle="tooltip" data-bs-trigger="hover" data-bs-placement="top" title="binance 14<br/>(0xABC)</a><a class="js-clipboard">"#,
    r#"<a data-bs-toggle="tooltip" data-bs-trigger="hover" data-bs-placement="top" title="Binance: Hot Wallet<br/>(0xABC)</a><a class="js-clipboard">"#,
  );

  #[tokio::test]
  async fn test_lookup_filters_and_dedups() {
    let service =
      SourceFundService::new(Arc::new(StaticPage(PAGE)), ExchangeList::default()).unwrap();
    let funds = service.lookup("0xABC").await.unwrap();
    assert_eq!(
      funds,
      vec![SourceFund {
        name: "Binance 14".to_string(),
        address: "0xABC".to_string(),
      }]
    );
  }

  #[tokio::test]
  async fn test_lookup_unmatched_markup_is_empty() {
    let service = SourceFundService::new(
      Arc::new(StaticPage("<html>changed layout</html>")),
      ExchangeList::default(),
    )
    .unwrap();
    assert!(service.lookup("0x1").await.unwrap().is_empty());
  }

  #[test]
  fn test_custom_exchange_list() {
    let service = SourceFundService::new(
      Arc::new(StaticPage("")),
      ExchangeList::new(["Random"]),
    )
    .unwrap();
    let funds = service.funds_from_page(PAGE);
    assert_eq!(funds.len(), 1);
    assert_eq!(funds[0].address, "0xDEF");
  }
}
