//! Infrastructure layer - system integrations
//!
//! This layer contains:
//! - Collector adapters reading metrics from the operating system
//! - Tokio runtime bridge driving the per-domain poll loops

pub mod collector;
pub mod runtime;

pub use collector::{CollectError, Collector, SystemCollector};
pub use runtime::{RuntimeBridge, RuntimeCommand, POLL_PERIOD};
