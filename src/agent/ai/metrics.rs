// Search instrumentation
//
// Every engine invocation builds a fresh SearchMetrics, threads it through
// the recursion (or tree loop) by mutable reference and stamps the elapsed
// time once the search is finished. Nothing here is global.

use std::fmt;
use std::ops::AddAssign;
use std::time::{Duration, Instant};

/// Node count and wall time of a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchMetrics {
    pub nodes_evaluated: u64,
    pub elapsed: Duration,
}

impl SearchMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record_node(&mut self) {
        self.nodes_evaluated += 1;
    }

    #[inline]
    pub fn record_nodes(&mut self, count: u64) {
        self.nodes_evaluated += count;
    }

    /// Stamp the time spent since `start`.
    pub fn finish(&mut self, start: Instant) {
        self.elapsed = start.elapsed();
    }

    pub fn elapsed_micros(&self) -> u64 {
        self.elapsed.as_micros() as u64
    }

    /// Throughput, or the raw node count when the search took under a microsecond.
    pub fn nodes_per_second(&self) -> u64 {
        let micros = self.elapsed.as_micros();
        if micros > 0 {
            (self.nodes_evaluated as u128 * 1_000_000 / micros) as u64
        } else {
            self.nodes_evaluated
        }
    }
}

impl AddAssign for SearchMetrics {
    fn add_assign(&mut self, other: Self) {
        self.nodes_evaluated += other.nodes_evaluated;
        self.elapsed += other.elapsed;
    }
}

impl fmt::Display for SearchMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nodes {} time {}us nps {}",
            self.nodes_evaluated,
            self.elapsed_micros(),
            self.nodes_per_second()
        )
    }
}
