//! Configuration for ball clock runs
//!
//! Controls the safety ceiling on cycle detection and how a survey across
//! several ball counts is scheduled.

/// Upper bound on simulated minutes before cycle detection gives up
///
/// The longest cycle in the supported range is a little under 160 million minutes.
pub const DEFAULT_MAX_STEPS: u64 = 10_000_000_000;

/// Enumeration of supported concurrency modes for surveys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcurrencyMode {
    /// Clocks are evaluated one after another on the calling thread
    Sequential,
    /// Independent clocks are evaluated concurrently with Rayon
    Rayon,
}

impl Default for ConcurrencyMode {
    fn default() -> Self {
        ConcurrencyMode::Sequential
    }
}

/// Configuration for simulation execution
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// The concurrency mode to use for surveys
    pub concurrency_mode: ConcurrencyMode,
    /// The size of the thread pool for parallel surveys
    /// Only relevant when concurrency_mode is Rayon
    pub thread_pool_size: Option<usize>,
    /// Minutes a single cycle search may simulate before failing
    pub max_steps: u64,
}

impl SimulationConfig {
    /// Create a new simulation configuration with default values
    ///
    /// Default configuration is sequential with the default step ceiling
    pub fn new() -> Self {
        Self {
            concurrency_mode: ConcurrencyMode::default(),
            thread_pool_size: None,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    /// Set the concurrency mode for surveys
    ///
    /// # Arguments
    /// * `mode` - The concurrency mode to use
    ///
    /// # Returns
    /// A new configuration with the specified concurrency mode
    pub fn with_concurrency(mut self, mode: ConcurrencyMode) -> Self {
        self.concurrency_mode = mode;
        self
    }

    /// Set the thread pool size for parallel surveys
    ///
    /// # Arguments
    /// * `size` - The number of threads to use in the thread pool
    ///
    /// # Returns
    /// A new configuration with the specified thread pool size
    ///
    /// # Note
    /// This setting only affects execution when concurrency_mode is Rayon
    pub fn with_thread_pool_size(mut self, size: usize) -> Self {
        self.thread_pool_size = Some(size);
        self
    }

    /// Set the ceiling on simulated minutes for cycle detection
    ///
    /// # Arguments
    /// * `max_steps` - Minutes a cycle search may simulate before giving up
    ///
    /// # Returns
    /// A new configuration with the specified step ceiling
    ///
    /// # Note
    /// A cycle that needs exactly `max_steps` minutes is still found
    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = max_steps;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.concurrency_mode, ConcurrencyMode::Sequential);
        assert_eq!(config.thread_pool_size, None);
        assert_eq!(config.max_steps, DEFAULT_MAX_STEPS);
    }

    #[test]
    fn test_config_builder() {
        let config = SimulationConfig::new()
            .with_concurrency(ConcurrencyMode::Rayon)
            .with_thread_pool_size(4)
            .with_max_steps(1_000);

        assert_eq!(config.concurrency_mode, ConcurrencyMode::Rayon);
        assert_eq!(config.thread_pool_size, Some(4));
        assert_eq!(config.max_steps, 1_000);
    }
}
