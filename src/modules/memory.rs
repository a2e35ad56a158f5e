//! Memory summary with usage bars

use super::render_bar;
use crate::domain::MemorySnapshot;

pub const PLACEHOLDER: &str = "Memory metrics...";

pub const USED_LABEL: &str = "Memory Usage:";
pub const AVAILABLE_LABEL: &str = "Available Memory:";
pub const SWAP_LABEL: &str = "Swap Usage:";

pub fn summary(mem: &MemorySnapshot) -> String {
    format!(
        "Total: {:.3}GB\nUsed: {:.3}GB\nAvailable: {:.3}GB\nSwap Total: {:.3}GB\nSwap Used: {:.3}GB\n\n{}\n{}\n{}\n",
        mem.total,
        mem.used,
        mem.available,
        mem.swap_total,
        mem.swap_used,
        render_bar(mem.used, mem.total, USED_LABEL),
        render_bar(mem.available, mem.total, AVAILABLE_LABEL),
        render_bar(mem.swap_used, mem.swap_total, SWAP_LABEL),
    )
}
