//! General system information block

use crate::domain::HostSnapshot;

pub const PLACEHOLDER: &str = "General system info...";

pub fn summary(host: &HostSnapshot) -> String {
    let [one, five, fifteen] = host.load_average;
    format!(
        "Host: {}\nOS: {}\nKernel: {}\nUptime: {}\nLoad Average: {:.2} {:.2} {:.2}\n",
        host.host_name,
        host.os,
        host.kernel,
        format_uptime(host.uptime_secs),
        one,
        five,
        fifteen
    )
}

/// `3d 04:05:06`; the day count is dropped when zero
pub fn format_uptime(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let minutes = (secs % 3_600) / 60;
    let seconds = secs % 60;
    if days > 0 {
        format!("{days}d {hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    }
}
