//! Domain models for system telemetry
//!
//! This module defines the snapshot types produced by collectors,
//! independent of how they are gathered or rendered.

mod metrics;
mod threads;

pub use metrics::{
    CpuSnapshot, DiskSnapshot, Domain, FetchFailure, HostSnapshot, InterfaceStats,
    MemorySnapshot, NetworkSnapshot, Snapshot, ThreadStats,
};
pub use threads::{numeric_suffix, sort_threads};
