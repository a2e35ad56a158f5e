//! Collector adapters - one blocking call per metric domain

mod procfs;
mod system;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{
    CpuSnapshot, DiskSnapshot, Domain, FetchFailure, HostSnapshot, MemorySnapshot,
    NetworkSnapshot, Snapshot,
};

pub use procfs::{parse_cpu_ticks, read_interface_link, CpuTicks};
pub use system::SystemCollector;

#[derive(Debug, Error)]
pub enum CollectError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed {what}: {detail}")]
    Parse { what: &'static str, detail: String },
    #[error("{0} unavailable")]
    Unavailable(&'static str),
    #[error("collector state poisoned")]
    Poisoned,
}

/// Source of metric snapshots.
///
/// Every method blocks; callers must keep them off the input path.
/// Retry policy belongs to the poll loop, not to implementations.
pub trait Collector: Send + Sync {
    fn cpu(&self) -> Result<CpuSnapshot, CollectError>;
    fn memory(&self) -> Result<MemorySnapshot, CollectError>;
    fn disk(&self) -> Result<DiskSnapshot, CollectError>;
    fn network(&self) -> Result<NetworkSnapshot, CollectError>;
    fn host(&self) -> Result<HostSnapshot, CollectError>;

    /// Read one domain, folding any error into a [`FetchFailure`]
    fn collect(&self, domain: Domain) -> Snapshot {
        let result = match domain {
            Domain::Cpu => self.cpu().map(Snapshot::Cpu),
            Domain::Memory => self.memory().map(Snapshot::Memory),
            Domain::Disk => self.disk().map(Snapshot::Disk),
            Domain::Network => self.network().map(Snapshot::Network),
            Domain::Host => self.host().map(Snapshot::Host),
        };
        result.unwrap_or_else(|err| {
            Snapshot::Failure(FetchFailure {
                domain,
                message: err.to_string(),
            })
        })
    }
}
