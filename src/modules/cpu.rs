//! CPU summary and per-thread table

use crate::domain::{sort_threads, CpuSnapshot};

pub const PLACEHOLDER: &str = "Loading CPU info...";

pub const COLUMNS: [&str; 3] = ["Thread ID", "Usage (%)", "Time (ticks)"];

pub fn summary(cpu: &CpuSnapshot) -> String {
    format!(
        "CPU: {}\nCores: {}\nThreads: {}\nCPU Usage: {:.2}%\nFrequency: {}Mhz\n",
        cpu.model_name, cpu.cores, cpu.threads, cpu.usage, cpu.frequency_mhz
    )
}

/// One row per thread, ordered by the thread's numeric suffix
pub fn rows(cpu: &CpuSnapshot) -> Vec<Vec<String>> {
    let labels = sort_threads(cpu.per_thread.keys().cloned().collect());
    labels
        .into_iter()
        .filter_map(|label| {
            let stats = cpu.per_thread.get(&label)?;
            let usage = format!("{:.2}%", stats.usage);
            let time = format!(
                "User: {}, System: {}, Idle: {}",
                stats.user, stats.system, stats.idle
            );
            Some(vec![label, usage, time])
        })
        .collect()
}
