//! Reachability queries rooted at a start vertex.
//!
//! [`reachable`], [`write_values`], [`max`] and [`leaves`] are exhaustive: they
//! visit every vertex reachable from the start exactly once and accumulate
//! something on the way. They accept an absent start and return an empty
//! result for it. [`IncreasingPath`] is a search that stops as soon as it
//! reaches its target and requires both endpoints.

pub mod increasing_path;

mod leaves;
mod max;
mod reachable;

pub use increasing_path::{has_strictly_increasing_path, IncreasingPath};
pub use leaves::leaves;
pub use max::{max, max_value};
pub use reachable::{print_values, reachable, write_values};
