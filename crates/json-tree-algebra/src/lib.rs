//! json-tree-algebra — whole-tree operations over [`json_tree_value::Value`].
//!
//! Pairwise recursive operations combining two value trees: structural
//! equality, deep copy and clone, in-place merge, diff, intersection, and
//! concatenation. [`copy_into`] and [`merge`] mutate their first argument;
//! everything else is pure and returns a new tree.
//!
//! The operations accept trees from any producer — parsed, hand-built, or
//! converted from serde — since they only use the value model's read and
//! mutate surface.

mod clone;
mod concat;
mod diff;
mod equal;
mod error;
mod intersection;
mod merge;

pub use clone::{copy_into, deep_clone};
pub use concat::concat;
pub use diff::diff;
pub use equal::deep_equal;
pub use error::AlgebraError;
pub use intersection::intersection;
pub use merge::merge;
