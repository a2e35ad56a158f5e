//! sysinfo-backed collector

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use sysinfo::{CpuRefreshKind, Disks, Networks, RefreshKind, System};
use tracing::debug;

use super::procfs::{self, CpuTicks};
use super::{CollectError, Collector};
use crate::domain::{
    CpuSnapshot, DiskSnapshot, HostSnapshot, InterfaceStats, MemorySnapshot, NetworkSnapshot,
    ThreadStats,
};

const BYTES_PER_GB: f64 = 1e9;

struct State {
    system: System,
    disks: Disks,
    networks: Networks,
}

/// Reads the local machine.
///
/// sysinfo computes cpu usage from the delta between two refreshes, so the
/// `System` lives across calls and takes its cpu baseline at construction.
pub struct SystemCollector {
    state: Mutex<State>,
}

impl SystemCollector {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                system: System::new_with_specifics(
                    RefreshKind::new().with_cpu(CpuRefreshKind::everything()),
                ),
                disks: Disks::new(),
                networks: Networks::new(),
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, CollectError> {
        self.state.lock().map_err(|_| CollectError::Poisoned)
    }
}

impl Default for SystemCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_os = "linux")]
fn cpu_ticks() -> Result<HashMap<String, CpuTicks>, CollectError> {
    procfs::read_cpu_ticks()
}

#[cfg(not(target_os = "linux"))]
fn cpu_ticks() -> Result<HashMap<String, CpuTicks>, CollectError> {
    Ok(HashMap::new())
}

impl Collector for SystemCollector {
    fn cpu(&self) -> Result<CpuSnapshot, CollectError> {
        let ticks = cpu_ticks()?;
        let mut state = self.lock()?;
        let system = &mut state.system;
        system.refresh_cpu();

        let cpus = system.cpus();
        let first = cpus.first().ok_or(CollectError::Unavailable("cpu list"))?;
        let brand = first.brand().trim();
        let model_name = if brand.is_empty() {
            first.vendor_id().to_string()
        } else {
            brand.to_string()
        };

        let per_thread = cpus
            .iter()
            .map(|cpu| {
                let tick = ticks.get(cpu.name()).copied().unwrap_or_default();
                let stats = ThreadStats {
                    usage: f64::from(cpu.cpu_usage()),
                    user: tick.user,
                    system: tick.system,
                    idle: tick.idle,
                };
                (cpu.name().to_string(), stats)
            })
            .collect();

        Ok(CpuSnapshot {
            model_name,
            cores: system.physical_core_count().unwrap_or(cpus.len()),
            threads: cpus.len(),
            usage: f64::from(system.global_cpu_info().cpu_usage()),
            frequency_mhz: first.frequency(),
            per_thread,
        })
    }

    fn memory(&self) -> Result<MemorySnapshot, CollectError> {
        let mut state = self.lock()?;
        let system = &mut state.system;
        system.refresh_memory();
        let gb = |bytes: u64| bytes as f64 / BYTES_PER_GB;
        Ok(MemorySnapshot {
            total: gb(system.total_memory()),
            used: gb(system.used_memory()),
            available: gb(system.available_memory()),
            swap_total: gb(system.total_swap()),
            swap_used: gb(system.used_swap()),
        })
    }

    fn disk(&self) -> Result<DiskSnapshot, CollectError> {
        let mut state = self.lock()?;
        state.disks.refresh_list();
        let disks = state.disks.list();
        if disks.is_empty() {
            return Err(CollectError::Unavailable("disk list"));
        }

        let (total, free) = match disks.iter().find(|d| d.mount_point() == Path::new("/")) {
            Some(root) => (root.total_space(), root.available_space()),
            None => disks.iter().fold((0u64, 0u64), |(total, free), disk| {
                (
                    total.saturating_add(disk.total_space()),
                    free.saturating_add(disk.available_space()),
                )
            }),
        };
        Ok(DiskSnapshot {
            total,
            used: total.saturating_sub(free),
            free,
        })
    }

    fn network(&self) -> Result<NetworkSnapshot, CollectError> {
        let mut state = self.lock()?;
        state.networks.refresh_list();
        state.networks.refresh();
        let root = Path::new(procfs::SYS_CLASS_NET);

        let mut interfaces: Vec<InterfaceStats> = state
            .networks
            .list()
            .iter()
            .map(|(name, data)| {
                let (link_state, speed) = procfs::read_interface_link(root, name);
                InterfaceStats {
                    name: name.clone(),
                    state: link_state,
                    speed,
                    rx_bytes: data.total_received(),
                    tx_bytes: data.total_transmitted(),
                    rx_errors: data.total_errors_on_received(),
                    tx_errors: data.total_errors_on_transmitted(),
                }
            })
            .collect();
        interfaces.sort_by(|a, b| a.name.cmp(&b.name));
        debug!(count = interfaces.len(), "collected network interfaces");
        Ok(NetworkSnapshot { interfaces })
    }

    fn host(&self) -> Result<HostSnapshot, CollectError> {
        let load = System::load_average();
        Ok(HostSnapshot {
            host_name: System::host_name().unwrap_or_else(|| "unknown".to_string()),
            os: System::long_os_version().unwrap_or_else(|| "unknown".to_string()),
            kernel: System::kernel_version().unwrap_or_else(|| "unknown".to_string()),
            uptime_secs: System::uptime(),
            load_average: [load.one, load.five, load.fifteen],
        })
    }
}
