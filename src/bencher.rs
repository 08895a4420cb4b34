use std::time::{Duration, Instant};

/// Runs one benchmark target for a fixed number of iterations and times the
/// whole loop with a single start/end timestamp pair.
///
/// Sampling the clock once around the tight loop, instead of once per
/// iteration, keeps the timer-call overhead out of the measurement of very
/// fast targets.
pub struct Bencher {
    iterations: usize,
}

/// Total elapsed time for one benchmark loop.
#[derive(Debug, Clone, Copy)]
pub struct BenchResult {
    elapsed: Duration,
    iterations: usize,
}

impl Bencher {
    pub fn new(iterations: usize) -> anyhow::Result<Self> {
        anyhow::ensure!(iterations > 0, "iteration count must be positive");
        Ok(Self { iterations })
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Invoke `f` back-to-back `iterations` times and return the elapsed
    /// wall-clock time of the whole loop. A panicking target aborts the run.
    pub fn time(&self, mut f: impl FnMut()) -> BenchResult {
        let start = Instant::now();
        for _ in 0..self.iterations {
            f();
        }
        BenchResult {
            elapsed: start.elapsed(),
            iterations: self.iterations,
        }
    }
}

impl BenchResult {
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Per-call average in seconds.
    pub fn per_call_secs(&self) -> f64 {
        self.elapsed.as_secs_f64() / self.iterations as f64
    }
}
