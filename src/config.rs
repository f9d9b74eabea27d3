//! Experiment configuration.
//!
//! Collects the two counts every experiment needs plus an optional seed,
//! validates them, and builds a ready-to-run [`PercolationStats`].

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::error::{PercolationError, Result};
use crate::experiment::PercolationStats;
use crate::random::{create_rng, RngSource};

/// Parameters of a percolation threshold experiment.
///
/// # Examples
/// ```
/// use u_percolation::ExperimentConfig;
///
/// let mut experiment = ExperimentConfig::new(16, 10).with_seed(1).build().unwrap();
/// assert_eq!(experiment.trials(), 10);
/// assert!(experiment.mean().unwrap() > 0.0);
///
/// assert!(ExperimentConfig::new(0, 10).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperimentConfig {
    /// Side length N of each grid.
    pub grid_size: usize,
    /// Number of independent trials T.
    pub trials: usize,
    /// Generator seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl ExperimentConfig {
    /// Creates an unseeded configuration.
    pub fn new(grid_size: usize, trials: usize) -> Self {
        Self {
            grid_size,
            trials,
            seed: None,
        }
    }

    /// Fixes the generator seed so runs are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that both counts are positive.
    ///
    /// # Errors
    /// [`PercolationError::InvalidArgument`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(PercolationError::InvalidArgument(
                "grid_size must be positive".into(),
            ));
        }
        if self.trials == 0 {
            return Err(PercolationError::InvalidArgument(
                "trials must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Validates the configuration and builds the experiment.
    pub fn build(&self) -> Result<PercolationStats<RngSource<SmallRng>>> {
        self.validate()?;
        let rng = match self.seed {
            Some(seed) => create_rng(seed),
            None => SmallRng::from_os_rng(),
        };
        log::debug!(
            "experiment: grid {n}x{n}, {t} trials, seed {s:?}",
            n = self.grid_size,
            t = self.trials,
            s = self.seed
        );
        PercolationStats::new(self.grid_size, self.trials, RngSource::new(rng))
    }
}
