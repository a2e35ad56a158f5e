//! Runtime infrastructure - Tokio runtime bridge for the poll loops

mod bridge;
mod worker;

pub use bridge::{RuntimeBridge, RuntimeCommand, POLL_PERIOD};
pub use worker::run_poll_worker;
