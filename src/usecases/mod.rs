//! Use-case layer - Application Orchestration
//!
//! Wires the domain logic to the ports. Adapters call into these
//! services; these services never depend on adapter types.

pub mod source_funds;

pub use source_funds::SourceFundService;
