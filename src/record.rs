use std::time::Duration;

use clap::ValueEnum;

/// Label column width. Wide enough for the longest target label plus the
/// runtime suffix.
const LABEL_WIDTH: usize = 45;

/// How the fractional seconds of a per-call average are rendered.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab_case")]
pub enum FractionFormat {
    /// `0.123456789`
    Plain,
    /// `0.123_456_789`, with milli/micro/nano digit groups.
    Grouped,
}

pub fn format_header(iterations: usize) -> String {
    format!("Bench Rust, {} iters:", iterations)
}

/// Render one report line: left-justified label, then the per-call average
/// in seconds with 9 fractional digits.
pub fn format_line(label: &str, per_call_secs: f64, format: FractionFormat) -> String {
    match format {
        FractionFormat::Plain => format!("{:<LABEL_WIDTH$} {:.9} s", label, per_call_secs),
        FractionFormat::Grouped => {
            format!("{:<LABEL_WIDTH$} {} s", label, group_fractions(per_call_secs))
        }
    }
}

/// Split a non-negative seconds value into underscore-separated
/// milli/micro/nano digit groups, e.g. `0.123_456_789`.
///
/// The value is resolved to whole nanoseconds up front, so each 3-digit
/// group is an integer quotient. Grouping truncates at the group
/// boundaries, it never rounds a group up.
fn group_fractions(secs: f64) -> String {
    let total = Duration::from_secs_f64(secs);
    let nanos = total.subsec_nanos();
    format!(
        "{}.{:03}_{:03}_{:03}",
        total.as_secs(),
        nanos / 1_000_000,
        nanos / 1_000 % 1_000,
        nanos % 1_000
    )
}
