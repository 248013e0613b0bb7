//! Traversal algorithms over directed graphs whose vertices carry values.
//!
//! Every algorithm starts in a single vertex and considers only what is
//! reachable from it by following edges forward. Cycles, self-loops and
//! parallel edges are all allowed, and each vertex is visited at most once per
//! call. The traversal is iterative, so even very deep graphs are fine.
//!
//! Graphs are consumed through the traits in [`core`]. The crate ships an
//! adjacency list ([`storage::AdjList`]) and an implicit graph given by a
//! successor function ([`storage::Implicit`]).
//!
//! # Examples
//!
//! ```
//! use vertex_walk::{
//!     algo::{has_strictly_increasing_path, leaves, max, reachable},
//!     storage::AdjList,
//! };
//!
//! let mut graph = AdjList::new();
//!
//! let a = graph.add_vertex(1);
//! let b = graph.add_vertex(2);
//! let c = graph.add_vertex(3);
//! let d = graph.add_vertex(4);
//!
//! graph.add_edge(&a, &b);
//! graph.add_edge(&a, &c);
//! graph.add_edge(&b, &d);
//! graph.add_edge(&c, &d);
//!
//! assert_eq!(reachable(&graph, Some(&a)).len(), 4);
//! assert_eq!(max(&graph, Some(&a)), 4);
//! assert!(leaves(&graph, Some(&a)).contains(&d));
//! assert_eq!(has_strictly_increasing_path(&graph, Some(&a), Some(&d)), Ok(true));
//! ```

pub mod algo;
pub mod core;
pub mod infra;
pub mod storage;
pub mod visit;

pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        core::{GraphBase, GraphRef, Neighbors, VertexSet},
        visit::{Visitor, VisitSet},
    };
}
