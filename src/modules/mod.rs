//! Metric formatters
//!
//! Pure transformations from snapshots to render-ready text:
//! - cpu: summary block and per-thread table rows
//! - memory / disk: summary blocks with usage bars
//! - network: heading and per-interface table rows
//! - host: general system information block
//!
//! Shared here: the fixed-width progress bar used by the memory and disk views.

pub mod cpu;
pub mod disk;
pub mod host;
pub mod memory;
pub mod network;

/// Number of cells in a progress bar
pub const BAR_WIDTH: usize = 20;

pub const FILLED_CELL: char = '█';
pub const EMPTY_CELL: char = '░';

/// Every label passed to [`render_bar`]; bars pad to the longest so they line up.
pub const BAR_LABELS: [&str; 5] = [
    memory::USED_LABEL,
    memory::AVAILABLE_LABEL,
    memory::SWAP_LABEL,
    disk::USED_LABEL,
    disk::FREE_LABEL,
];

/// Share of `total` taken by `value`, clamped to `0.0..=1.0`.
///
/// A zero (or non-finite) total yields 0.
pub fn fraction(value: f64, total: f64) -> f64 {
    if total <= 0.0 || !total.is_finite() {
        return 0.0;
    }
    let fraction = value / total;
    if fraction.is_nan() {
        return 0.0;
    }
    fraction.clamp(0.0, 1.0)
}

/// Filled cells for a bar showing `value` out of `total`
pub fn filled_cells(value: f64, total: f64) -> usize {
    (fraction(value, total) * BAR_WIDTH as f64).round() as usize
}

fn label_width() -> usize {
    BAR_LABELS
        .iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0)
}

/// `<label padded>  ██████████░░░░░░░░░░ 50.00%`
pub fn render_bar(value: f64, total: f64, label: &str) -> String {
    let fraction = fraction(value, total);
    let filled = filled_cells(value, total);
    let bar: String = std::iter::repeat(FILLED_CELL)
        .take(filled)
        .chain(std::iter::repeat(EMPTY_CELL).take(BAR_WIDTH - filled))
        .collect();
    format!(
        "{label:<width$}  {bar} {percent:.2}%",
        width = label_width(),
        percent = fraction * 100.0
    )
}
