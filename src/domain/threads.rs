//! Numeric ordering of per-thread labels (`cpu2` before `cpu10`)

/// Value of the trailing run of ASCII digits in `label`.
///
/// Labels without a digit suffix, or whose suffix does not fit in a `u64`,
/// count as 0.
pub fn numeric_suffix(label: &str) -> u64 {
    let digits = label
        .bytes()
        .rev()
        .take_while(|b| b.is_ascii_digit())
        .count();
    label[label.len() - digits..].parse().unwrap_or(0)
}

/// Sort labels ascending by numeric suffix. Equal suffixes keep their input order.
pub fn sort_threads(mut labels: Vec<String>) -> Vec<String> {
    labels.sort_by_key(|label| numeric_suffix(label));
    labels
}
