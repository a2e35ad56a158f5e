//! Network heading and per-interface table

use crate::domain::NetworkSnapshot;

pub const PLACEHOLDER: &str = "Network metrics...";

pub const HEADING: &str = "Network Stats:\n";

pub const COLUMNS: [&str; 7] = [
    "Interface",
    "State",
    "Speed",
    "RxBytes",
    "TxBytes",
    "RxErrors",
    "TxErrors",
];

pub fn summary(_net: &NetworkSnapshot) -> String {
    HEADING.to_string()
}

/// One row per interface, in the order the collector reported them
pub fn rows(net: &NetworkSnapshot) -> Vec<Vec<String>> {
    net.interfaces
        .iter()
        .map(|iface| {
            vec![
                iface.name.clone(),
                iface.state.clone(),
                iface.speed.to_string(),
                iface.rx_bytes.to_string(),
                iface.tx_bytes.to_string(),
                iface.rx_errors.to_string(),
                iface.tx_errors.to_string(),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InterfaceStats;

    #[test]
    fn test_rows_keep_collector_order() {
        let net = NetworkSnapshot {
            interfaces: vec![
                InterfaceStats {
                    name: "wlan0".to_string(),
                    state: "up".to_string(),
                    speed: 0,
                    rx_bytes: 1_234_567,
                    tx_bytes: 89,
                    rx_errors: 1,
                    tx_errors: 0,
                },
                InterfaceStats {
                    name: "eth0".to_string(),
                    state: "down".to_string(),
                    speed: 1000,
                    ..InterfaceStats::default()
                },
            ],
        };
        let rows = rows(&net);
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            vec!["wlan0", "up", "0", "1234567", "89", "1", "0"]
        );
        assert_eq!(rows[1][0], "eth0");
        assert_eq!(rows[1][2], "1000");
        assert!(rows.iter().all(|row| row.len() == COLUMNS.len()));
    }
}
