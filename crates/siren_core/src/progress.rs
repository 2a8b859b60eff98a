//! Percentage progress derived from bytes consumed.

/// Tracks scan progress as a percentage with two decimal places, reporting a
/// value only when it changes.
///
/// The percentage is computed in integer hundredths with half-up rounding,
/// so `40.695%` formats as `40.70` and a finished scan always lands exactly
/// on `100.00`. Because the consumed byte count only grows, the emitted
/// sequence is non-decreasing and free of consecutive duplicates.
pub struct ProgressMeter {
    total: u64,
    last: Option<String>,
}

impl ProgressMeter {
    pub fn new(total: u64) -> Self {
        Self { total, last: None }
    }

    /// Reports the formatted percentage for `consumed` bytes, or `None` when
    /// it matches the previously reported value.
    pub fn update(&mut self, consumed: u64) -> Option<String> {
        let value = format_percent(consumed, self.total);
        if self.last.as_deref() == Some(value.as_str()) {
            return None;
        }
        self.last = Some(value.clone());
        Some(value)
    }
}

fn format_percent(consumed: u64, total: u64) -> String {
    // f64::round is half-away-from-zero, which for non-negative input is
    // exactly the half-up rounding required here.
    let hundredths = if total == 0 {
        10_000
    } else {
        (consumed as f64 * 10_000.0 / total as f64).round() as u64
    };
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}
