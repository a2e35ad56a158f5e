//! Snapshot types - one immutable reading per metric domain

use std::collections::HashMap;
use std::fmt;

/// Unit of independent refresh scheduling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Domain {
    Cpu,
    Memory,
    Disk,
    Network,
    Host,
}

impl Domain {
    pub fn name(&self) -> &'static str {
        match self {
            Domain::Cpu => "cpu",
            Domain::Memory => "memory",
            Domain::Disk => "disk",
            Domain::Network => "network",
            Domain::Host => "host",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-thread usage and tick counters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThreadStats {
    pub usage: f64,
    pub user: u64,
    pub system: u64,
    pub idle: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CpuSnapshot {
    pub model_name: String,
    pub cores: usize,
    pub threads: usize,
    /// Overall usage in percent
    pub usage: f64,
    /// Current frequency in MHz
    pub frequency_mhz: u64,
    /// Keyed by thread label, e.g. `cpu3`
    pub per_thread: HashMap<String, ThreadStats>,
}

/// Memory figures, all in GB
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySnapshot {
    pub total: f64,
    pub used: f64,
    pub available: f64,
    pub swap_total: f64,
    pub swap_used: f64,
}

/// Disk figures in bytes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiskSnapshot {
    pub total: u64,
    pub used: u64,
    pub free: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceStats {
    pub name: String,
    pub state: String,
    /// Link speed in Mbit/s, 0 when unknown
    pub speed: u64,
    pub rx_bytes: u64,
    pub tx_bytes: u64,
    pub rx_errors: u64,
    pub tx_errors: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkSnapshot {
    /// Collector-supplied order is kept all the way to the table
    pub interfaces: Vec<InterfaceStats>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostSnapshot {
    pub host_name: String,
    pub os: String,
    pub kernel: String,
    pub uptime_secs: u64,
    pub load_average: [f64; 3],
}

/// A collector error, already rendered to text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub domain: Domain,
    pub message: String,
}

/// One reading of one domain, or the reason it could not be taken
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot {
    Cpu(CpuSnapshot),
    Memory(MemorySnapshot),
    Disk(DiskSnapshot),
    Network(NetworkSnapshot),
    Host(HostSnapshot),
    Failure(FetchFailure),
}

impl Snapshot {
    pub fn domain(&self) -> Domain {
        match self {
            Snapshot::Cpu(_) => Domain::Cpu,
            Snapshot::Memory(_) => Domain::Memory,
            Snapshot::Disk(_) => Domain::Disk,
            Snapshot::Network(_) => Domain::Network,
            Snapshot::Host(_) => Domain::Host,
            Snapshot::Failure(failure) => failure.domain,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Snapshot::Failure(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_reports_its_domain() {
        let snapshot = Snapshot::Failure(FetchFailure {
            domain: Domain::Disk,
            message: "boom".to_string(),
        });
        assert_eq!(snapshot.domain(), Domain::Disk);
        assert!(snapshot.is_failure());
        assert_eq!(
            Snapshot::Memory(MemorySnapshot::default()).domain(),
            Domain::Memory
        );
    }
}
