use std::{hash::Hash, ops::Range};

use itertools::Itertools;

/// Distinct items in order of first appearance
pub fn unique_in_order<T: Eq + Hash + Clone>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    items.into_iter().unique().collect()
}

/// Items that appear more than once, each reported once, in order of their second appearance
pub fn find_duplicates<T: Eq + Hash + Clone>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    items.into_iter().duplicates().collect()
}

/// Tick values for a logarithmic axis over `range`
///
/// Powers of ten when the range holds at least two of them, otherwise the
/// 1, 2 and 5 multiples of each decade inside the range.
pub fn log_ticks(range: &Range<f64>) -> Vec<f64> {
    if !(range.start > 0.0 && range.end > range.start) {
        return Vec::new();
    }
    let first = range.start.log10().floor() as i32;
    let last = range.end.log10().ceil() as i32;
    let inside = |v: &f64| *v >= range.start * (1.0 - 1e-9) && *v <= range.end * (1.0 + 1e-9);

    let decades = (first..=last)
        .map(|e| 10f64.powi(e))
        .filter(inside)
        .collect::<Vec<_>>();
    if decades.len() >= 2 {
        return decades;
    }

    let ticks = (first..=last)
        .flat_map(|e| [1.0, 2.0, 5.0].map(|m| m * 10f64.powi(e)))
        .filter(inside)
        .collect::<Vec<_>>();
    if ticks.is_empty() {
        vec![range.start, range.end]
    } else {
        ticks
    }
}

/// Formats a tick on a logarithmic axis with just enough decimals for its leading digit
pub fn format_log_tick(value: f64) -> String {
    if !(value > 0.0 && value.is_finite()) {
        return String::new();
    }
    let magnitude = (value.log10() + 1e-9).floor();
    let decimals = if magnitude < 0.0 { (-magnitude) as usize } else { 0 };
    format!("{value:.decimals$}")
}
