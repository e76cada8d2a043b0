//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the use-case layer requires
//! from the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `PageFetcher`: Block explorer page retrieval

pub mod page_fetcher;

pub use page_fetcher::{FetchError, PageFetcher};
