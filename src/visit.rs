//! Implementations of graph traversal.
//!
//! All traversal implementations in this module are **iterative**, that is,
//! they don't use recursion. This means that
//!
//! * &#128077; visitor is lazy and can be stopped without tricks,
//! * &#128077; visitor state is independent on the graph itself,
//! * &#128077; traversal is not limited by the size of the program stack.
//!
//! The order in which the neighbors of a vertex are discovered is not specified
//! and should not be relied upon.

pub mod dfs;

pub(crate) mod raw;
mod visit_set;

#[doc(inline)]
pub use self::{
    dfs::Dfs,
    visit_set::{TypedBitSet, VisitSet},
};

use std::{collections::HashSet, hash::BuildHasherDefault};

use rustc_hash::FxHashSet;

use raw::*;

use crate::core::{GraphBase, Neighbors};

/// Trait for a specific graph traversal approach.
#[doc(alias = "Walker")]
pub trait Visitor<G> {
    /// The type of the elements being visited.
    type Item;

    /// Advances the visitor and returns the next visited element in given
    /// graph.
    ///
    /// The difference from the [`Iterator::next`] is that the visitor doesn't
    /// hold a reference to the graph and can be passed around without lifetime
    /// problems.
    fn visit_next(&mut self, graph: &G) -> Option<Self::Item>;

    /// Converts the visitor into an [iterator](Iterator) to visit the elements
    /// in given graph.
    fn into_iter(self, graph: &G) -> IntoIter<'_, Self, G>
    where
        Self: Sized,
    {
        IntoIter {
            visitor: self,
            graph,
        }
    }
}

/// Visitor iterator returned from [`Visitor::into_iter`].
pub struct IntoIter<'a, V, G> {
    visitor: V,
    graph: &'a G,
}

impl<V, G> Iterator for IntoIter<'_, V, G>
where
    V: Visitor<G>,
{
    type Item = V::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.visitor.visit_next(self.graph)
    }
}

/// Visits every vertex reachable from `start` exactly once and applies
/// `action` to it.
///
/// Nothing is visited if `start` is `None` or not in the graph. Returns the
/// number of visited vertices.
///
/// # Examples
///
/// ```
/// use vertex_walk::{storage::AdjList, visit::walk};
///
/// let mut graph = AdjList::new();
/// graph.extend_with_vertices([10, 20, 30]);
/// graph.extend_with_edges([(0, 1), (1, 0), (1, 2)]);
///
/// let mut sum = 0;
/// let start = graph.find_vertex(&10);
/// let count = walk(&graph, start.as_ref(), |v| sum += graph.vertex(v).unwrap());
///
/// assert_eq!(count, 3);
/// assert_eq!(sum, 60);
/// ```
pub fn walk<G, F>(graph: &G, start: Option<&G::VertexId>, mut action: F) -> usize
where
    G: Neighbors,
    F: FnMut(&G::VertexId),
{
    let Some(start) = start.filter(|start| graph.contains_vertex(start)) else {
        tracing::trace!("walk skipped, start vertex absent");
        return 0;
    };

    tracing::trace!(start = ?start, "walk started");

    let mut dfs = Dfs::new(graph);
    for vertex in dfs.start(start.clone()).into_iter(graph) {
        action(&vertex);
    }

    dfs.visited().visited_count()
}
