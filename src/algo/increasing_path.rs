//! Find a strictly increasing path between two vertices.
//!
//! A path v0, v1, ..., vk is strictly increasing if every vertex on it carries
//! a value strictly greater than the value of its predecessor. The empty path
//! (k = 0) from a vertex to itself is strictly increasing.
//!
//! See available parameters [here](IncreasingPathBuilder#implementations).
//!
//! # Examples
//!
//! ```
//! use vertex_walk::{algo::IncreasingPath, storage::AdjList};
//!
//! let mut graph = AdjList::new();
//!
//! let a = graph.add_vertex(1);
//! let b = graph.add_vertex(5);
//! let c = graph.add_vertex(3);
//! let d = graph.add_vertex(4);
//!
//! graph.add_edge(&a, &b);
//! graph.add_edge(&b, &d);
//! graph.add_edge(&a, &c);
//! graph.add_edge(&c, &d);
//!
//! let path = IncreasingPath::on(&graph).from(&a).to(&d).run().unwrap();
//!
//! assert!(path.is());
//! assert_eq!(path.path(), Some(&[a, c, d][..]));
//! ```

use std::fmt;

use crate::core::{
    error::{InvalidArgumentError, InvalidArgumentKind},
    GraphBase, GraphRef, Neighbors,
};

mod builder;
mod dfs;

pub use builder::IncreasingPathBuilder;

/// Result of the strictly increasing path search.
///
/// See [module](self) documentation for more details and example.
pub struct IncreasingPath<G>
where
    G: GraphBase,
{
    path: Option<Vec<G::VertexId>>,
}

impl<G> fmt::Debug for IncreasingPath<G>
where
    G: GraphBase,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IncreasingPath")
            .field("path", &self.path)
            .finish()
    }
}

impl<G> IncreasingPath<G>
where
    G: GraphBase,
{
    /// Returns `true` if a strictly increasing path exists.
    pub fn is(&self) -> bool {
        self.path.is_some()
    }

    /// Returns one strictly increasing path from the start to the end, both
    /// included.
    pub fn path(&self) -> Option<&[G::VertexId]> {
        self.path.as_deref()
    }

    pub fn into_path(self) -> Option<Vec<G::VertexId>> {
        self.path
    }
}

/// Returns `true` if there is a strictly increasing path from `start` to
/// `end`.
///
/// Unlike the reachability algorithms, both endpoints are required. If any of
/// them is `None` or not in the graph, an [`InvalidArgumentError`] is returned.
pub fn has_strictly_increasing_path<G, V>(
    graph: &G,
    start: Option<&G::VertexId>,
    end: Option<&G::VertexId>,
) -> Result<bool, InvalidArgumentError>
where
    G: Neighbors + GraphRef<V>,
    V: PartialOrd,
{
    let start = start.ok_or(InvalidArgumentError::new(InvalidArgumentKind::StartAbsent))?;
    let end = end.ok_or(InvalidArgumentError::new(InvalidArgumentKind::EndAbsent))?;

    IncreasingPath::on(graph)
        .from(start)
        .to(end)
        .run()
        .map(|path| path.is())
}
