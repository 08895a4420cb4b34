use std::hint::black_box;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Local, TimeZone, Utc};

/// Fixed pre-epoch POSIX timestamp (1966-06-13T00:00:00Z) used by the
/// timestamp-to-object target.
pub const FIXED_TIMESTAMP: i64 = -112060800;

/// One stateless benchmark target. The target's result is discarded; only
/// its time cost matters.
pub struct Benchmark {
    pub label: &'static str,
    pub target: fn(),
}

/// The fixed target list, in report order.
pub fn all() -> Vec<Benchmark> {
    vec![
        Benchmark {
            label: "current raw UTC time (Rust):",
            target: current_raw_time,
        },
        Benchmark {
            label: "current zoned local time (Rust):",
            target: current_zoned_local_time,
        },
        Benchmark {
            label: "current zoned UTC time (Rust):",
            target: current_zoned_utc_time,
        },
        Benchmark {
            label: "UTC raw time to object (Rust):",
            target: raw_timestamp_to_object,
        },
    ]
}

/// Check once, before any timing starts, that the fixed timestamp is
/// convertible. A failure here aborts the whole run.
pub fn validate_fixed_timestamp() -> anyhow::Result<DateTime<Utc>> {
    match Utc.timestamp_opt(FIXED_TIMESTAMP, 0).single() {
        Some(dt) => Ok(dt),
        None => anyhow::bail!("invalid fixed timestamp: {}", FIXED_TIMESTAMP),
    }
}

fn current_raw_time() {
    black_box(SystemTime::now().duration_since(UNIX_EPOCH));
}

fn current_zoned_local_time() {
    black_box(Local::now());
}

fn current_zoned_utc_time() {
    black_box(Utc::now());
}

fn raw_timestamp_to_object() {
    black_box(Utc.timestamp_opt(black_box(FIXED_TIMESTAMP), 0).single());
}
