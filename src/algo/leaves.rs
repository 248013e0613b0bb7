use rustc_hash::FxHashSet;

use crate::{core::Neighbors, visit::walk};

/// Returns the set of all vertices reachable from `start` that have no
/// outgoing edge, including `start` itself if it qualifies.
///
/// Vertices with outgoing edges are expanded but never reported, so a leaf
/// that is reachable only through a cycle is found too. A vertex whose only
/// edge is a self-loop is not a leaf. The set is empty if `start` is `None` or
/// not in the graph.
///
/// # Examples
///
/// ```
/// use vertex_walk::{algo::leaves, storage::AdjList};
///
/// let mut graph = AdjList::new();
/// let v = graph.add_vertex("v");
/// let a = graph.add_vertex("a");
/// let b = graph.add_vertex("b");
///
/// graph.add_edge(&v, &a);
/// graph.add_edge(&v, &b);
/// graph.add_edge(&b, &a);
///
/// let result = leaves(&graph, Some(&v));
/// assert_eq!(result.len(), 1);
/// assert!(result.contains(&a));
/// ```
pub fn leaves<G>(graph: &G, start: Option<&G::VertexId>) -> FxHashSet<G::VertexId>
where
    G: Neighbors,
{
    let mut result = FxHashSet::default();

    let visited = walk(graph, start, |vertex| {
        if graph.is_leaf(vertex) {
            result.insert(vertex.clone());
        }
    });

    tracing::debug!(visited, leaves = result.len(), "leaves collected");
    result
}
