use std::{
    fmt::Display,
    io::{self, Write},
};

use rustc_hash::FxHashSet;

use crate::{
    core::{GraphRef, Neighbors},
    visit::walk,
};

/// Returns the set of all vertices reachable from `start`, including `start`
/// itself.
///
/// The set is empty if `start` is `None` or not in the graph.
///
/// # Examples
///
/// ```
/// use vertex_walk::{algo::reachable, storage::AdjList};
///
/// let mut graph = AdjList::new();
/// graph.extend_with_vertices([1, 2, 3, 4]);
/// graph.extend_with_edges([(0, 1), (0, 2), (1, 3), (2, 3)]);
///
/// let start = graph.find_vertex(&1);
/// assert_eq!(reachable(&graph, start.as_ref()).len(), 4);
/// assert!(reachable(&graph, None).is_empty());
/// ```
pub fn reachable<G>(graph: &G, start: Option<&G::VertexId>) -> FxHashSet<G::VertexId>
where
    G: Neighbors,
{
    let mut result = FxHashSet::default();
    walk(graph, start, |vertex| {
        result.insert(vertex.clone());
    });

    tracing::debug!(reachable = result.len(), "reachable set collected");
    result
}

/// Writes the value of every vertex reachable from `start` to `out`, one value
/// per line, in unspecified order.
///
/// Every value is written exactly once even if its vertex is reachable via
/// multiple paths. Nothing is written if `start` is `None` or not in the graph.
/// The only possible error is the one reported by `out`.
///
/// # Examples
///
/// ```
/// use vertex_walk::{algo::write_values, storage::AdjList};
///
/// let mut graph = AdjList::new();
/// let a = graph.add_vertex(5);
/// graph.add_edge(&a, &a);
///
/// let mut out = Vec::new();
/// write_values(&graph, Some(&a), &mut out).unwrap();
/// assert_eq!(out, b"5\n");
/// ```
pub fn write_values<G, V, W>(graph: &G, start: Option<&G::VertexId>, out: &mut W) -> io::Result<()>
where
    G: Neighbors + GraphRef<V>,
    V: Display,
    W: Write + ?Sized,
{
    let mut result = Ok(());
    let mut written = 0usize;

    walk(graph, start, |vertex| {
        if result.is_err() {
            return;
        }

        if let Some(value) = graph.value(vertex) {
            result = writeln!(out, "{value}");
            written += 1;
        }
    });

    tracing::debug!(written, ok = result.is_ok(), "vertex values written");
    result
}

/// Prints the value of every vertex reachable from `start` to the standard
/// output, one value per line.
///
/// See [`write_values`].
pub fn print_values<G, V>(graph: &G, start: Option<&G::VertexId>) -> io::Result<()>
where
    G: Neighbors + GraphRef<V>,
    V: Display,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_values(graph, start, &mut out)?;
    out.flush()
}
