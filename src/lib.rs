use std::io::Write;

pub mod bencher;
pub mod benchmark;
pub mod record;

pub use bencher::{BenchResult, Bencher};
pub use record::FractionFormat;
pub use std::hint::black_box;

/// Run every benchmark target in order and write the report to `out`.
///
/// Targets run strictly sequentially on the calling thread. Later targets
/// inherit whatever cache and scheduler state earlier ones left behind; that
/// noise is accepted.
pub fn run(
    iterations: usize,
    format: FractionFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let bencher = Bencher::new(iterations)?;
    let fixed = benchmark::validate_fixed_timestamp()?;
    log::debug!(
        "fixed conversion target: {} -> {}",
        benchmark::FIXED_TIMESTAMP,
        fixed
    );
    writeln!(out, "{}", record::format_header(bencher.iterations()))?;
    for bench in benchmark::all() {
        let result = bencher.time(bench.target);
        log::debug!(
            "{} total elapsed: {:?}",
            bench.label.trim_end_matches(':'),
            result.elapsed()
        );
        writeln!(
            out,
            "{}",
            record::format_line(bench.label, result.per_call_secs(), format)
        )?;
    }
    Ok(())
}
