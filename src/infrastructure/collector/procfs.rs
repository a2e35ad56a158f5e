//! Linux pseudo-filesystem readers for figures sysinfo does not expose

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::CollectError;

pub const PROC_STAT: &str = "/proc/stat";
pub const SYS_CLASS_NET: &str = "/sys/class/net";

/// Cumulative ticks (USER_HZ) one cpu spent in each state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuTicks {
    pub user: u64,
    pub system: u64,
    pub idle: u64,
}

/// Parse the `cpuN` lines of `/proc/stat`, keyed by label.
///
/// The aggregate `cpu` line and non-cpu entries are skipped.
pub fn parse_cpu_ticks(content: &str) -> Result<HashMap<String, CpuTicks>, CollectError> {
    let mut ticks = HashMap::new();
    for line in content.lines() {
        let mut fields = line.split_whitespace();
        let Some(label) = fields.next() else {
            continue;
        };
        let Some(id) = label.strip_prefix("cpu") else {
            continue;
        };
        if id.is_empty() {
            continue;
        }
        // user nice system idle ...
        let values = fields
            .take(4)
            .map(|field| field.parse::<u64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| CollectError::Parse {
                what: "/proc/stat",
                detail: format!("{label}: {err}"),
            })?;
        let [user, _nice, system, idle] = values[..] else {
            return Err(CollectError::Parse {
                what: "/proc/stat",
                detail: format!("{label}: expected 4 counters, found {}", values.len()),
            });
        };
        ticks.insert(label.to_string(), CpuTicks { user, system, idle });
    }
    Ok(ticks)
}

pub fn read_cpu_ticks() -> Result<HashMap<String, CpuTicks>, CollectError> {
    let content = fs::read_to_string(PROC_STAT).map_err(|source| CollectError::Io {
        path: PROC_STAT.into(),
        source,
    })?;
    parse_cpu_ticks(&content)
}

/// Operational state and link speed (Mbit/s) of an interface under `root`.
///
/// Virtual and down links report no speed (the kernel answers EINVAL or -1);
/// those become 0, and an unreadable state becomes `unknown`.
pub fn read_interface_link(root: &Path, name: &str) -> (String, u64) {
    let dir = root.join(name);
    let state = fs::read_to_string(dir.join("operstate"))
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string());
    let speed = fs::read_to_string(dir.join("speed"))
        .ok()
        .and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|speed| *speed > 0)
        .map(|speed| speed as u64)
        .unwrap_or(0);
    (state, speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAT: &str = "\
cpu  10132153 290696 3084719 46828483 16683 0 25195 0 175628 0
cpu0 1393280 32966 572056 13343292 6130 0 17875 0 23933 0
cpu1 1335887 23975 501863 13422553 4017 0 2517 0 25230 0
intr 1462898 0 0 0
ctxt 115315133
btime 1769445284
";

    #[test]
    fn test_parse_cpu_ticks() {
        let ticks = parse_cpu_ticks(STAT).expect("parse");
        assert_eq!(ticks.len(), 2);
        assert_eq!(
            ticks["cpu0"],
            CpuTicks {
                user: 1393280,
                system: 572056,
                idle: 13343292,
            }
        );
        assert_eq!(ticks["cpu1"].idle, 13422553);
        assert!(!ticks.contains_key("cpu"));
    }

    #[test]
    fn test_parse_rejects_garbage_counters() {
        let err = parse_cpu_ticks("cpu0 1 two 3 4\n").unwrap_err();
        assert!(matches!(err, CollectError::Parse { .. }));
        let err = parse_cpu_ticks("cpu0 1 2\n").unwrap_err();
        assert!(err.to_string().contains("expected 4 counters"));
    }

    #[test]
    fn test_missing_interface_reads_as_unknown() {
        let (state, speed) = read_interface_link(Path::new("/nonexistent"), "eth9");
        assert_eq!(state, "unknown");
        assert_eq!(speed, 0);
    }
}
