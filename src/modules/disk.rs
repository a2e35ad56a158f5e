//! Disk summary with usage bars

use super::render_bar;
use crate::domain::DiskSnapshot;

pub const PLACEHOLDER: &str = "Disk metrics...";

pub const USED_LABEL: &str = "Disk Usage:";
pub const FREE_LABEL: &str = "Free Space:";

const BYTES_PER_GB: f64 = 1e9;

pub fn summary(disk: &DiskSnapshot) -> String {
    let total = disk.total as f64;
    format!(
        "Total: {:.3}GB\nUsed: {:.3}GB\nAvailable: {:.3}GB\n\n{}\n{}\n",
        total / BYTES_PER_GB,
        disk.used as f64 / BYTES_PER_GB,
        disk.free as f64 / BYTES_PER_GB,
        render_bar(disk.used as f64, total, USED_LABEL),
        render_bar(disk.free as f64, total, FREE_LABEL),
    )
}
