//! Uniform integer sources for site selection.
//!
//! The experiment runner only ever needs one operation: draw an integer
//! uniformly from `[0, bound)`. [`UniformSource`] names that operation so
//! the runner can be driven by a real generator ([`RngSource`]) or by a
//! fixed script ([`ScriptedSource`]) in tests.
//!
//! # Reproducibility
//!
//! For reproducible experiments, use [`create_rng`] with a fixed seed.
//! The underlying algorithm (SmallRng) is deterministic for a given seed
//! on the same platform.

use rand::Rng;

use crate::error::{PercolationError, Result};

/// A source of uniformly distributed integers.
pub trait UniformSource {
    /// Returns an integer in `[0, bound)`.
    ///
    /// Callers guarantee `bound >= 1`.
    fn uniform_int(&mut self, bound: usize) -> usize;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    fn uniform_int(&mut self, bound: usize) -> usize {
        (**self).uniform_int(bound)
    }
}

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++) for high performance.
///
/// # Examples
/// ```
/// use u_percolation::random::{create_rng, RngSource, UniformSource};
/// let mut a = RngSource::new(create_rng(42));
/// let mut b = RngSource::new(create_rng(42));
/// assert_eq!(a.uniform_int(100), b.uniform_int(100));
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Adapts any [`rand::Rng`] into a [`UniformSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wraps `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> UniformSource for RngSource<R> {
    fn uniform_int(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound)
    }
}

/// Replays a fixed sequence of values, cycling back to the start when the
/// script runs out.
///
/// Each value is reduced modulo the requested bound, so a script written
/// for one grid size never produces an out-of-range draw.
///
/// # Examples
/// ```
/// use u_percolation::random::{ScriptedSource, UniformSource};
/// let mut source = ScriptedSource::new(vec![0, 3, 5]).unwrap();
/// assert_eq!(source.uniform_int(4), 0);
/// assert_eq!(source.uniform_int(4), 3);
/// assert_eq!(source.uniform_int(4), 1);
/// assert_eq!(source.uniform_int(4), 0); // wrapped around
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    /// Creates a source that replays `script`.
    ///
    /// # Errors
    /// [`PercolationError::InvalidArgument`] if `script` is empty.
    pub fn new(script: Vec<usize>) -> Result<Self> {
        if script.is_empty() {
            return Err(PercolationError::InvalidArgument(
                "scripted source needs at least one value".into(),
            ));
        }
        Ok(Self { script, cursor: 0 })
    }

    /// Builds a script that opens the given 1-based `(row, col)` sites in
    /// order, one row draw followed by one column draw per site.
    ///
    /// # Errors
    /// [`PercolationError::InvalidArgument`] if `sites` is empty, and
    /// [`PercolationError::IndexOutOfRange`] if a coordinate is zero.
    pub fn from_sites(sites: &[(usize, usize)]) -> Result<Self> {
        let mut script = Vec::with_capacity(sites.len() * 2);
        for &(row, col) in sites {
            for index in [row, col] {
                if index == 0 {
                    return Err(PercolationError::IndexOutOfRange {
                        index,
                        min: 1,
                        max: usize::MAX,
                    });
                }
                script.push(index - 1);
            }
        }
        Self::new(script)
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl UniformSource for ScriptedSource {
    fn uniform_int(&mut self, bound: usize) -> usize {
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rng_deterministic() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);
        let vals1: Vec<f64> = (0..10).map(|_| rng1.random()).collect();
        let vals2: Vec<f64> = (0..10).map(|_| rng2.random()).collect();
        assert_eq!(vals1, vals2);
    }

    #[test]
    fn test_rng_source_stays_in_bound() {
        let mut source = RngSource::new(create_rng(7));
        for bound in 1..50 {
            for _ in 0..20 {
                assert!(source.uniform_int(bound) < bound);
            }
        }
    }

    #[test]
    fn test_rng_source_bound_one() {
        let mut source = RngSource::new(create_rng(0));
        for _ in 0..10 {
            assert_eq!(source.uniform_int(1), 0);
        }
    }

    #[test]
    fn test_rng_source_covers_range() {
        let mut source = RngSource::new(create_rng(123));
        let mut seen = [false; 5];
        for _ in 0..500 {
            seen[source.uniform_int(5)] = true;
        }
        assert!(seen.iter().all(|&s| s), "every value should appear: {seen:?}");
    }

    #[test]
    fn test_scripted_source_rejects_empty() {
        assert!(matches!(
            ScriptedSource::new(vec![]),
            Err(PercolationError::InvalidArgument(_))
        ));
        assert!(ScriptedSource::from_sites(&[]).is_err());
    }

    #[test]
    fn test_scripted_source_from_sites() {
        let mut source = ScriptedSource::from_sites(&[(1, 1), (2, 2), (1, 2)]).unwrap();
        let draws: Vec<usize> = (0..6).map(|_| source.uniform_int(2)).collect();
        assert_eq!(draws, vec![0, 0, 1, 1, 0, 1]);
        assert_eq!(source.draws(), 6);
    }

    #[test]
    fn test_scripted_source_rejects_zero_coordinate() {
        assert!(matches!(
            ScriptedSource::from_sites(&[(0, 1)]),
            Err(PercolationError::IndexOutOfRange { index: 0, .. })
        ));
    }

    #[test]
    fn test_mut_ref_is_source() {
        fn draw<S: UniformSource>(mut source: S) -> usize {
            source.uniform_int(10)
        }
        let mut source = ScriptedSource::new(vec![4, 6]).unwrap();
        assert_eq!(draw(&mut source), 4);
        assert_eq!(draw(&mut source), 6);
        assert_eq!(source.draws(), 2);
    }
}
