//! # u-percolation
//!
//! Monte Carlo estimation of the site percolation threshold of an N-by-N
//! square lattice.
//!
//! Each trial opens uniformly random sites of a fresh grid until open sites
//! connect the top row to the bottom row, and records the fraction of sites
//! that were open at that moment. Many independent trials give a sample
//! mean, a sample standard deviation, and a 95% confidence interval for the
//! threshold (≈ 0.5927 for an infinite lattice).
//!
//! ## Modules
//!
//! - [`collections`] — weighted union-find with path compression
//! - [`grid`] — the percolation grid, free of backwash
//! - [`experiment`] — trial runner with cached statistics
//! - [`random`] — injectable uniform integer sources
//! - [`stats`] — compensated mean, Welford variance, confidence intervals
//! - [`config`] — validated experiment parameters
//!
//! ## Example
//!
//! ```
//! use u_percolation::ExperimentConfig;
//!
//! let mut experiment = ExperimentConfig::new(30, 20).with_seed(42).build().unwrap();
//! let mean = experiment.mean().unwrap();
//! let (low, high) = (
//!     experiment.confidence_low().unwrap(),
//!     experiment.confidence_high().unwrap(),
//! );
//! assert!(low <= mean && mean <= high);
//! ```

pub mod collections;
pub mod config;
pub mod error;
pub mod experiment;
pub mod grid;
pub mod random;
pub mod stats;

pub use config::ExperimentConfig;
pub use error::{PercolationError, Result};
pub use experiment::{PercolationStats, TrialSummary};
pub use grid::Percolation;
