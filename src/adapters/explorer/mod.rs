//! Block Explorer Adapter
//!
//! Implements `PageFetcher` over HTTP against a public block explorer.

pub mod client;

pub use client::{ExplorerClient, ExplorerClientConfig};
