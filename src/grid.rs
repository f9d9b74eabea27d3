//! Percolation grid over an N-by-N square lattice.
//!
//! Sites are addressed with **1-based** `(row, col)` coordinates in
//! `[1, N]`. Each site starts blocked and can only be opened. Connectivity
//! between open sites (4-neighbor adjacency) is maintained incrementally in
//! a [`UnionFind`] that the grid owns exclusively.
//!
//! # Layout
//!
//! Union-find element `0` is a virtual top node. Every site opened in row 1
//! is unioned with it, so "is this site full?" is a single connectivity
//! query. Site `(r, c)` (0-based internally) lives at element `1 + r·N + c`.
//!
//! # Backwash
//!
//! There is no virtual bottom node. With one, every open bottom-row site
//! would share a component through that node, and once the grid percolated
//! any of them would report as full even without a real path from row 1. Instead the grid records the bottom-row sites it has
//! opened and [`Percolation::percolates`] asks whether any of them reaches
//! the virtual top. [`Percolation::is_full`] is therefore exact.

use crate::collections::UnionFind;
use crate::error::{PercolationError, Result};

const VIRTUAL_TOP: usize = 0;

/// State of a single lattice site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Site {
    /// Not available for connectivity.
    #[default]
    Blocked,
    /// Available for connectivity. Never reverts to blocked.
    Open,
}

/// N-by-N percolation system.
///
/// # Examples
/// ```
/// use u_percolation::Percolation;
///
/// let mut grid = Percolation::new(2).unwrap();
/// grid.open(1, 1).unwrap();
/// grid.open(2, 2).unwrap();
/// assert!(!grid.percolates());
///
/// grid.open(1, 2).unwrap();
/// assert!(grid.percolates());
/// assert!(grid.is_full(2, 2).unwrap());
/// assert!(!grid.is_open(2, 1).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Percolation {
    n: usize,
    sites: Vec<Site>,
    open_count: usize,
    /// Union-find elements of the sites opened in row N, in opening order.
    bottom_open: Vec<usize>,
    percolated: bool,
    uf: UnionFind,
}

impl Percolation {
    /// Creates an `n`-by-`n` grid with every site blocked.
    ///
    /// # Errors
    /// [`PercolationError::InvalidArgument`] if `n == 0`.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(PercolationError::InvalidArgument(
                "grid size must be positive".into(),
            ));
        }
        let cells = n.checked_mul(n).ok_or_else(|| {
            PercolationError::InvalidArgument(format!("grid size {n} is too large"))
        })?;
        Ok(Self {
            n,
            sites: vec![Site::Blocked; cells],
            open_count: 0,
            bottom_open: Vec::new(),
            percolated: false,
            uf: UnionFind::new(cells + 1)?,
        })
    }

    /// Side length N of the grid.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Number of sites opened so far.
    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Opens site `(row, col)` and connects it to its open neighbors.
    ///
    /// A site in row 1 is also connected to the virtual top node; a site in
    /// row N is recorded as a bottom-row candidate for [`percolates`].
    /// Neighbors that fall off the lattice are skipped.
    ///
    /// # Returns
    /// `true` if the site was blocked and is now open, `false` if it was
    /// already open (the call is then a no-op).
    ///
    /// # Errors
    /// [`PercolationError::IndexOutOfRange`] if `row` or `col` is outside
    /// `[1, N]`. The grid is not modified in that case.
    ///
    /// [`percolates`]: Percolation::percolates
    pub fn open(&mut self, row: usize, col: usize) -> Result<bool> {
        let cell = self.cell(row, col)?;
        if self.sites[cell] == Site::Open {
            return Ok(false);
        }
        self.sites[cell] = Site::Open;
        self.open_count += 1;

        let (r, c) = (row - 1, col - 1);
        let element = cell + 1;

        if r == 0 {
            self.uf.union(element, VIRTUAL_TOP)?;
        }
        if r > 0 {
            self.join_if_open(element, r - 1, c)?;
        }
        if r + 1 < self.n {
            self.join_if_open(element, r + 1, c)?;
        }
        if c > 0 {
            self.join_if_open(element, r, c - 1)?;
        }
        if c + 1 < self.n {
            self.join_if_open(element, r, c + 1)?;
        }
        if r + 1 == self.n {
            log::trace!("bottom-row site ({row}, {col}) opened");
            self.bottom_open.push(element);
        }
        Ok(true)
    }

    /// Returns `true` if site `(row, col)` is open.
    ///
    /// # Errors
    /// [`PercolationError::IndexOutOfRange`] if `row` or `col` is outside
    /// `[1, N]`.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        let cell = self.cell(row, col)?;
        Ok(self.sites[cell] == Site::Open)
    }

    /// Returns `true` if site `(row, col)` is open and reachable from row 1
    /// through open sites.
    ///
    /// Takes `&mut self` because the underlying find compresses paths.
    ///
    /// # Errors
    /// [`PercolationError::IndexOutOfRange`] if `row` or `col` is outside
    /// `[1, N]`.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        let cell = self.cell(row, col)?;
        if self.sites[cell] == Site::Blocked {
            return Ok(false);
        }
        self.uf.connected(cell + 1, VIRTUAL_TOP)
    }

    /// Returns `true` if some open site in row N is full, i.e. open sites
    /// connect row 1 to row N.
    ///
    /// Only the bottom-row sites opened so far are inspected, and once the
    /// grid percolates the answer is remembered.
    pub fn percolates(&mut self) -> bool {
        if self.percolated {
            return true;
        }
        let uf = &mut self.uf;
        // Every stored element is in range by construction.
        self.percolated = self
            .bottom_open
            .iter()
            .any(|&element| matches!(uf.connected(element, VIRTUAL_TOP), Ok(true)));
        self.percolated
    }

    /// Fraction of the N·N sites that are open.
    pub fn open_fraction(&self) -> f64 {
        self.open_count as f64 / self.sites.len() as f64
    }

    fn join_if_open(&mut self, element: usize, r: usize, c: usize) -> Result<()> {
        let neighbor = r * self.n + c;
        if self.sites[neighbor] == Site::Open {
            self.uf.union(element, neighbor + 1)?;
        }
        Ok(())
    }

    /// Validates 1-based coordinates and returns the row-major cell index.
    fn cell(&self, row: usize, col: usize) -> Result<usize> {
        for index in [row, col] {
            if !(1..=self.n).contains(&index) {
                return Err(PercolationError::IndexOutOfRange {
                    index,
                    min: 1,
                    max: self.n,
                });
            }
        }
        Ok((row - 1) * self.n + (col - 1))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn grid_and_opens() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
        (1_usize..8).prop_flat_map(|n| {
            (
                Just(n),
                proptest::collection::vec((1..=n, 1..=n), 0..80),
            )
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn full_and_percolates_are_monotonic((n, opens) in grid_and_opens()) {
            let mut grid = Percolation::new(n).unwrap();
            let mut full = vec![false; n * n];
            let mut percolated = false;
            for &(row, col) in &opens {
                grid.open(row, col).unwrap();
                for r in 1..=n {
                    for c in 1..=n {
                        let now = grid.is_full(r, c).unwrap();
                        let idx = (r - 1) * n + (c - 1);
                        prop_assert!(!full[idx] || now, "({r}, {c}) stopped being full");
                        full[idx] = now;
                    }
                }
                let now = grid.percolates();
                prop_assert!(!percolated || now);
                percolated = now;
            }
        }

        #[test]
        fn reopening_changes_nothing((n, opens) in grid_and_opens()) {
            let mut once = Percolation::new(n).unwrap();
            let mut twice = Percolation::new(n).unwrap();
            for &(row, col) in &opens {
                once.open(row, col).unwrap();
                twice.open(row, col).unwrap();
                twice.open(row, col).unwrap();
            }
            prop_assert_eq!(once.number_of_open_sites(), twice.number_of_open_sites());
            prop_assert_eq!(once.percolates(), twice.percolates());
            for r in 1..=n {
                for c in 1..=n {
                    prop_assert_eq!(once.is_open(r, c).unwrap(), twice.is_open(r, c).unwrap());
                    prop_assert_eq!(once.is_full(r, c).unwrap(), twice.is_full(r, c).unwrap());
                }
            }
        }

        #[test]
        fn full_sites_are_open_and_percolation_needs_full_bottom(
            (n, opens) in grid_and_opens()
        ) {
            let mut grid = Percolation::new(n).unwrap();
            for &(row, col) in &opens {
                grid.open(row, col).unwrap();
            }
            let mut any_bottom_full = false;
            for r in 1..=n {
                for c in 1..=n {
                    if grid.is_full(r, c).unwrap() {
                        prop_assert!(grid.is_open(r, c).unwrap());
                        if r == n {
                            any_bottom_full = true;
                        }
                    }
                }
            }
            prop_assert_eq!(grid.percolates(), any_bottom_full);
        }
    }
}
