//! Monte Carlo estimation of the percolation threshold.
//!
//! A trial opens uniformly random sites of a fresh [`Percolation`] grid
//! until it percolates and records the fraction of open sites at that
//! moment. [`PercolationStats`] runs all trials once, on first access to
//! any statistic, and serves mean, standard deviation, and the 95%
//! confidence bounds from that single cached set of observations.

use crate::error::{PercolationError, Result};
use crate::grid::Percolation;
use crate::random::UniformSource;
use crate::stats::{self, ConfidenceInterval, WelfordAccumulator, Z_95};

/// Aggregate statistics over every trial of an experiment.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialSummary {
    /// Open-site fraction at the moment of percolation, one per trial.
    pub observations: Vec<f64>,
    /// Sample mean of the observations.
    pub mean: f64,
    /// Sample standard deviation (n − 1 denominator; 0 for a single trial).
    pub stddev: f64,
    /// 95% confidence interval around `mean`.
    pub confidence: ConfidenceInterval,
}

impl TrialSummary {
    /// Summarizes a non-empty list of observations.
    ///
    /// # Errors
    /// [`PercolationError::InvalidArgument`] if `observations` is empty or
    /// holds a non-finite value.
    pub fn from_observations(observations: Vec<f64>) -> Result<Self> {
        let mean = stats::mean(&observations).ok_or_else(|| {
            PercolationError::InvalidArgument(
                "observations must be non-empty and finite".into(),
            )
        })?;
        let mut acc = WelfordAccumulator::new();
        for &x in &observations {
            acc.update(x);
        }
        let stddev = acc.sample_std_dev().unwrap_or(0.0);
        let confidence = stats::confidence_interval(mean, stddev, observations.len(), Z_95)
            .ok_or_else(|| {
                PercolationError::InvalidArgument("cannot build confidence interval".into())
            })?;
        Ok(Self {
            observations,
            mean,
            stddev,
            confidence,
        })
    }
}

/// Repeated percolation trials on an N-by-N grid.
///
/// Statistics are computed lazily: the first call to [`mean`], [`stddev`],
/// [`confidence_low`], [`confidence_high`], [`observations`] or
/// [`summary`] runs every trial; later calls reuse the same observations.
///
/// # Examples
/// ```
/// use u_percolation::random::{create_rng, RngSource};
/// use u_percolation::PercolationStats;
///
/// let mut experiment = PercolationStats::new(20, 30, RngSource::new(create_rng(7))).unwrap();
/// let mean = experiment.mean().unwrap();
/// assert!(mean > 0.0 && mean <= 1.0);
/// assert!(experiment.confidence_low().unwrap() <= mean);
/// assert!(mean <= experiment.confidence_high().unwrap());
/// ```
///
/// [`mean`]: PercolationStats::mean
/// [`stddev`]: PercolationStats::stddev
/// [`confidence_low`]: PercolationStats::confidence_low
/// [`confidence_high`]: PercolationStats::confidence_high
/// [`observations`]: PercolationStats::observations
/// [`summary`]: PercolationStats::summary
#[derive(Debug)]
pub struct PercolationStats<S> {
    grid_size: usize,
    trials: usize,
    source: S,
    summary: Option<TrialSummary>,
}

impl<S: UniformSource> PercolationStats<S> {
    /// Prepares `trials` experiments on a `grid_size`-by-`grid_size` grid,
    /// drawing sites from `source`. No trial runs until a statistic is
    /// requested.
    ///
    /// # Errors
    /// [`PercolationError::InvalidArgument`] if `grid_size == 0` or
    /// `trials == 0`.
    pub fn new(grid_size: usize, trials: usize, source: S) -> Result<Self> {
        if grid_size == 0 {
            return Err(PercolationError::InvalidArgument(
                "grid size must be positive".into(),
            ));
        }
        if trials == 0 {
            return Err(PercolationError::InvalidArgument(
                "trial count must be positive".into(),
            ));
        }
        if grid_size.checked_mul(grid_size).is_none() {
            return Err(PercolationError::InvalidArgument(format!(
                "grid size {grid_size} is too large"
            )));
        }
        Ok(Self {
            grid_size,
            trials,
            source,
            summary: None,
        })
    }

    /// Side length of the grids used by each trial.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Number of trials the experiment runs.
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Runs one trial and returns the open-site fraction at percolation.
    ///
    /// Draws are made with replacement; drawing an already-open site costs a
    /// draw but does not count as an opening. There is no cap on the number
    /// of draws.
    ///
    /// Standalone trials are independent of the cached summary.
    ///
    /// # Errors
    /// [`PercolationError::IndexOutOfRange`] if the source returns a value
    /// outside `[0, N)`.
    pub fn run_trial(&mut self) -> Result<f64> {
        let n = self.grid_size;
        let mut grid = Percolation::new(n)?;
        let mut draws: u64 = 0;
        while !grid.percolates() {
            let row = self.source.uniform_int(n).saturating_add(1);
            let col = self.source.uniform_int(n).saturating_add(1);
            draws += 1;
            grid.open(row, col)?;
        }
        let fraction = grid.open_fraction();
        log::debug!(
            "grid {n}x{n} percolated after {} openings ({draws} draws), fraction {fraction:.6}",
            grid.number_of_open_sites()
        );
        Ok(fraction)
    }

    /// Returns the cached summary, running every trial on first use.
    ///
    /// # Errors
    /// Propagates the first error raised by [`run_trial`]. Nothing is
    /// cached in that case.
    ///
    /// [`run_trial`]: PercolationStats::run_trial
    pub fn summary(&mut self) -> Result<&TrialSummary> {
        let summary = match self.summary.take() {
            Some(summary) => summary,
            None => self.run_all()?,
        };
        Ok(&*self.summary.insert(summary))
    }

    /// Per-trial open-site fractions, in trial order.
    pub fn observations(&mut self) -> Result<&[f64]> {
        Ok(&self.summary()?.observations)
    }

    /// Sample mean of the percolation threshold.
    pub fn mean(&mut self) -> Result<f64> {
        Ok(self.summary()?.mean)
    }

    /// Sample standard deviation of the percolation threshold; 0 when the
    /// experiment has a single trial.
    pub fn stddev(&mut self) -> Result<f64> {
        Ok(self.summary()?.stddev)
    }

    /// Lower bound of the 95% confidence interval.
    pub fn confidence_low(&mut self) -> Result<f64> {
        Ok(self.summary()?.confidence.low)
    }

    /// Upper bound of the 95% confidence interval.
    pub fn confidence_high(&mut self) -> Result<f64> {
        Ok(self.summary()?.confidence.high)
    }

    /// Consumes the experiment and returns the (possibly freshly computed)
    /// summary.
    pub fn into_summary(mut self) -> Result<TrialSummary> {
        match self.summary.take() {
            Some(summary) => Ok(summary),
            None => self.run_all(),
        }
    }

    fn run_all(&mut self) -> Result<TrialSummary> {
        let mut observations = Vec::with_capacity(self.trials);
        for trial in 0..self.trials {
            let fraction = self.run_trial()?;
            log::debug!("trial {}/{}: {fraction:.6}", trial + 1, self.trials);
            observations.push(fraction);
        }
        let summary = TrialSummary::from_observations(observations)?;
        log::info!(
            "{} trials on {}x{} grid: mean {:.6}, stddev {:.6}",
            self.trials,
            self.grid_size,
            self.grid_size,
            summary.mean,
            summary.stddev
        );
        Ok(summary)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::random::{create_rng, RngSource};
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(40))]

        #[test]
        fn statistics_are_well_ordered(
            seed in 0_u64..10_000,
            n in 1_usize..12,
            trials in 1_usize..8,
        ) {
            let mut experiment =
                PercolationStats::new(n, trials, RngSource::new(create_rng(seed))).unwrap();
            let mean = experiment.mean().unwrap();
            prop_assert!(mean > 0.0 && mean <= 1.0);
            prop_assert!(experiment.confidence_low().unwrap() <= mean);
            prop_assert!(mean <= experiment.confidence_high().unwrap());
            for &x in experiment.observations().unwrap() {
                prop_assert!(x > 0.0 && x <= 1.0);
                // every trial opens a whole number of sites
                let opened = x * (n * n) as f64;
                prop_assert!((opened - opened.round()).abs() < 1e-9);
            }
            if trials == 1 {
                prop_assert_eq!(experiment.stddev().unwrap(), 0.0);
            }
        }
    }
}
