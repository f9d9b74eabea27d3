//! Data structures backing the percolation grid.

pub mod union_find;

pub use union_find::UnionFind;
