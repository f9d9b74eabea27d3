//! Disjoint-set (Union-Find) data structure.
//!
//! Maintains a partition of the elements `0..count` into connected
//! components with near-constant-time union and connectivity queries.
//!
//! # Algorithm
//!
//! Uses **path compression** during `find` and **union by size** during
//! `union`, giving amortized O(α(n)) per operation, where α is the
//! inverse Ackermann function.
//!
//! Every index argument is range-checked; an out-of-range index yields
//! [`PercolationError::IndexOutOfRange`] and leaves the structure untouched.
//!
//! # References
//!
//! - Tarjan (1975), "Efficiency of a Good but Not Linear Set Union Algorithm"
//! - Sedgewick & Wayne (2011), *Algorithms*, 4th ed., §1.5 (weighted quick-union)

use crate::error::{PercolationError, Result};

/// Weighted disjoint-set forest with path compression.
///
/// # Examples
/// ```
/// use u_percolation::collections::UnionFind;
///
/// let mut uf = UnionFind::new(5).unwrap();
/// assert_eq!(uf.component_count(), 5);
///
/// uf.union(0, 1).unwrap();
/// uf.union(2, 3).unwrap();
/// assert!(uf.connected(0, 1).unwrap());
/// assert!(!uf.connected(0, 2).unwrap());
///
/// uf.union(1, 3).unwrap();
/// assert!(uf.connected(0, 2).unwrap()); // transitivity
/// assert_eq!(uf.component_count(), 2);
///
/// assert!(uf.union(0, 5).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl UnionFind {
    /// Creates `count` singleton components `{0}, {1}, ..., {count-1}`.
    ///
    /// # Errors
    /// [`PercolationError::InvalidArgument`] if `count < 1`.
    ///
    /// # Complexity
    /// O(count)
    pub fn new(count: usize) -> Result<Self> {
        if count < 1 {
            return Err(PercolationError::InvalidArgument(
                "union-find needs at least one element".into(),
            ));
        }
        Ok(Self {
            parent: (0..count).collect(),
            size: vec![1; count],
            components: count,
        })
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Always `false`: construction rejects an empty element set.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Finds the representative (root) of the component containing `x`.
    ///
    /// Every node on the path from `x` to the root is re-pointed directly
    /// at the root.
    ///
    /// # Errors
    /// [`PercolationError::IndexOutOfRange`] if `x >= len()`.
    pub fn find(&mut self, x: usize) -> Result<usize> {
        self.check(x)?;
        Ok(self.root(x))
    }

    /// Merges the components containing `a` and `b`.
    ///
    /// The root of the smaller tree is attached under the root of the
    /// larger one. On equal sizes `b`'s root goes under `a`'s root.
    ///
    /// # Returns
    /// `true` if the components were distinct (and are now merged),
    /// `false` if `a` and `b` were already connected.
    ///
    /// # Errors
    /// [`PercolationError::IndexOutOfRange`] if either index is `>= len()`.
    pub fn union(&mut self, a: usize, b: usize) -> Result<bool> {
        self.check(a)?;
        self.check(b)?;

        let root_a = self.root(a);
        let root_b = self.root(b);
        if root_a == root_b {
            return Ok(false);
        }

        let (parent, child) = if self.size[root_a] < self.size[root_b] {
            (root_b, root_a)
        } else {
            (root_a, root_b)
        };
        self.parent[child] = parent;
        self.size[parent] += self.size[child];
        self.components -= 1;
        Ok(true)
    }

    /// Returns `true` if `a` and `b` are in the same component.
    ///
    /// # Errors
    /// [`PercolationError::IndexOutOfRange`] if either index is `>= len()`.
    pub fn connected(&mut self, a: usize, b: usize) -> Result<bool> {
        self.check(a)?;
        self.check(b)?;
        Ok(self.root(a) == self.root(b))
    }

    /// Returns the number of disjoint components.
    ///
    /// # Complexity
    /// O(1)
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the size of the component containing `x`.
    ///
    /// # Errors
    /// [`PercolationError::IndexOutOfRange`] if `x >= len()`.
    pub fn component_size(&mut self, x: usize) -> Result<usize> {
        let root = self.find(x)?;
        Ok(self.size[root])
    }

    fn check(&self, x: usize) -> Result<()> {
        if x < self.parent.len() {
            Ok(())
        } else {
            Err(PercolationError::IndexOutOfRange {
                index: x,
                min: 0,
                max: self.parent.len() - 1,
            })
        }
    }

    // Two passes: locate the root, then point the whole path at it.
    fn root(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn union_find_transitivity(
            n in 2_usize..20,
            ops in proptest::collection::vec((0_usize..20, 0_usize..20), 0..50),
        ) {
            let mut uf = UnionFind::new(n).unwrap();
            for &(x, y) in &ops {
                if x < n && y < n {
                    uf.union(x, y).unwrap();
                }
            }

            for x in 0..n {
                for y in 0..n {
                    for z in 0..n {
                        if uf.connected(x, y).unwrap() && uf.connected(y, z).unwrap() {
                            prop_assert!(
                                uf.connected(x, z).unwrap(),
                                "transitivity violated: {x}~{y} and {y}~{z} but not {x}~{z}"
                            );
                        }
                    }
                }
            }
        }

        #[test]
        fn component_count_tracks_merges(
            n in 1_usize..20,
            ops in proptest::collection::vec((0_usize..20, 0_usize..20), 0..50),
        ) {
            let mut uf = UnionFind::new(n).unwrap();
            let mut expected = n;
            for &(x, y) in &ops {
                match uf.union(x, y) {
                    Ok(true) => expected -= 1,
                    Ok(false) => {}
                    Err(_) => prop_assert!(x >= n || y >= n),
                }
            }
            prop_assert_eq!(uf.component_count(), expected);

            let mut total = 0;
            for i in 0..n {
                if uf.find(i).unwrap() == i {
                    total += uf.component_size(i).unwrap();
                }
            }
            prop_assert_eq!(total, n, "component sizes should sum to n");
        }

        #[test]
        fn union_order_does_not_change_partition(
            n in 1_usize..15,
            ops in proptest::collection::vec((0_usize..15, 0_usize..15), 0..30),
        ) {
            let ops: Vec<_> = ops.into_iter().filter(|&(x, y)| x < n && y < n).collect();
            let mut forward = UnionFind::new(n).unwrap();
            let mut backward = UnionFind::new(n).unwrap();
            for &(x, y) in &ops {
                forward.union(x, y).unwrap();
            }
            for &(x, y) in ops.iter().rev() {
                backward.union(y, x).unwrap();
            }
            for x in 0..n {
                for y in 0..n {
                    prop_assert_eq!(
                        forward.connected(x, y).unwrap(),
                        backward.connected(x, y).unwrap()
                    );
                }
            }
        }
    }
}
