use std::time::Duration;

/// Tuning knobs for the processing engine.
///
/// The simulated processing delay models settlement latency in the reference
/// system; it defaults to zero and only matters for load demonstrations.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Number of worker tasks draining the submission queue.
    pub worker_count: usize,
    /// Artificial pause applied to each dequeued bet before processing.
    pub process_delay: Duration,
    /// Upper bound on how long `shutdown` waits for workers to drain.
    pub shutdown_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            worker_count: 4,
            process_delay: Duration::ZERO,
            shutdown_timeout: Duration::from_secs(60),
        }
    }
}
