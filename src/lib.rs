//! tabtop: a tabbed terminal dashboard for host telemetry
//!
//! Each tab shows one metric domain. A domain's poll loop starts the first
//! time its tab is shown and refreshes the cached text once per second.

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod modules;
pub mod ui;
