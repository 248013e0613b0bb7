use std::fmt::Debug;

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::{
    algo::{leaves, max, reachable, IncreasingPath},
    core::{
        id::{IdType, IntegerIdType},
        value::Bounded,
        GraphRef, Neighbors, VertexSet,
    },
    storage::AdjList,
    visit::walk,
};

/// Directed cycle 0 -> 1 -> ... -> n - 1 -> 0 where every vertex carries its
/// own index.
pub fn create_cycle(n: usize) -> AdjList<usize> {
    let mut graph = AdjList::with_capacity(n);
    graph.extend_with_vertices(0..n);
    graph.extend_with_edges((0..n).map(|i| (i, (i + 1) % n)));
    graph
}

/// 1 -> 2, 1 -> 3, 2 -> 4, 3 -> 4.
pub fn create_diamond() -> AdjList<i32> {
    let mut graph = AdjList::new();
    graph.extend_with_vertices([1, 2, 3, 4]);
    graph.extend_with_edges([(0, 1), (0, 2), (1, 3), (2, 3)]);
    graph
}

// The recursive implementations below serve as a reference for checking the
// iterative algorithms. They use the program stack, so they are suitable only
// for small graphs.

pub fn reachable_recursive<G>(graph: &G, start: &G::VertexId) -> FxHashSet<G::VertexId>
where
    G: Neighbors,
{
    fn go<G: Neighbors>(graph: &G, v: &G::VertexId, visited: &mut FxHashSet<G::VertexId>) {
        if !visited.insert(v.clone()) {
            return;
        }

        for u in graph.neighbors(v) {
            go(graph, &u, visited);
        }
    }

    let mut visited = FxHashSet::default();
    if graph.contains_vertex(start) {
        go(graph, start, &mut visited);
    }
    visited
}

pub fn leaves_recursive<G>(graph: &G, start: &G::VertexId) -> FxHashSet<G::VertexId>
where
    G: Neighbors,
{
    reachable_recursive(graph, start)
        .into_iter()
        .filter(|v| graph.neighbors(v).next().is_none())
        .collect()
}

pub fn max_recursive<G, V>(graph: &G, start: &G::VertexId) -> V
where
    G: Neighbors + GraphRef<V>,
    V: Ord + Clone + Bounded,
{
    reachable_recursive(graph, start)
        .iter()
        .filter_map(|v| graph.value(v).cloned())
        .max()
        .unwrap_or_else(V::min_value)
}

pub fn increasing_path_recursive<G, V>(graph: &G, start: &G::VertexId, end: &G::VertexId) -> bool
where
    G: Neighbors + GraphRef<V>,
    V: PartialOrd,
{
    fn go<G, V>(
        graph: &G,
        v: &G::VertexId,
        end: &G::VertexId,
        visited: &mut FxHashSet<G::VertexId>,
    ) -> bool
    where
        G: Neighbors + GraphRef<V>,
        V: PartialOrd,
    {
        if v == end {
            return true;
        }

        if !visited.insert(v.clone()) {
            return false;
        }

        graph.neighbors(v).any(|u| {
            graph.value(&u) > graph.value(v) && go::<G, V>(graph, &u, end, visited)
        })
    }

    if !graph.contains_vertex(start) || !graph.contains_vertex(end) {
        return false;
    }

    go::<G, V>(graph, start, end, &mut FxHashSet::default())
}

#[derive(Debug, Error)]
pub enum TraversalCheckError {
    #[error("start vertex {0} is missing in its reachable set")]
    StartNotReachable(usize),
    #[error("reachable set from {0} differs from the recursive walk")]
    ReachableMismatch(usize),
    #[error("walk from {0} reported {1} visited vertices, but {2} are reachable")]
    WalkCountMismatch(usize, usize, usize),
    #[error("leaves reachable from {0} differ from the recursive walk")]
    LeavesMismatch(usize),
    #[error("maximum reachable from {0} is {1}, but the recursive walk found {2}")]
    MaxMismatch(usize, String, String),
    #[error("increasing path from {0} to {1} {} by the search only", found_word(*.2))]
    IncreasingPathMismatch(usize, usize, bool),
    #[error("increasing path from {0} to {1} is not a valid strictly increasing path")]
    IncreasingPathInvalid(usize, usize),
    #[error("increasing path search rejected {0} or {1} as not in the graph")]
    IncreasingPathRejected(usize, usize),
}

fn found_word(found: bool) -> &'static str {
    if found {
        "found"
    } else {
        "not found"
    }
}

/// Runs every traversal algorithm from every vertex of the graph and compares
/// the results with the recursive reference implementations.
pub fn check_traversal<G, V>(graph: &G) -> Result<(), TraversalCheckError>
where
    G: Neighbors + VertexSet + GraphRef<V>,
    G::VertexId: IntegerIdType,
    V: Ord + Clone + Bounded + Debug,
{
    for start in graph.vertex_ids() {
        let index = start.as_usize();
        let expected = reachable_recursive(graph, &start);

        let actual = reachable(graph, Some(&start));
        if !actual.contains(&start) {
            return Err(TraversalCheckError::StartNotReachable(index));
        }
        if actual != expected {
            return Err(TraversalCheckError::ReachableMismatch(index));
        }

        let visited = walk(graph, Some(&start), |_| {});
        if visited != expected.len() {
            return Err(TraversalCheckError::WalkCountMismatch(
                index,
                visited,
                expected.len(),
            ));
        }

        if leaves(graph, Some(&start)) != leaves_recursive(graph, &start) {
            return Err(TraversalCheckError::LeavesMismatch(index));
        }

        let actual: V = max(graph, Some(&start));
        let expected_max: V = max_recursive(graph, &start);
        if actual != expected_max {
            return Err(TraversalCheckError::MaxMismatch(
                index,
                format!("{actual:?}"),
                format!("{expected_max:?}"),
            ));
        }

        for end in graph.vertex_ids() {
            let result = IncreasingPath::on(graph)
                .from(&start)
                .to(&end)
                .run::<V>()
                .map_err(|_| TraversalCheckError::IncreasingPathRejected(index, end.as_usize()))?;

            if result.is() != increasing_path_recursive(graph, &start, &end) {
                return Err(TraversalCheckError::IncreasingPathMismatch(
                    index,
                    end.as_usize(),
                    result.is(),
                ));
            }

            if let Some(path) = result.path() {
                if !is_increasing_path(graph, path, &start, &end) {
                    return Err(TraversalCheckError::IncreasingPathInvalid(
                        index,
                        end.as_usize(),
                    ));
                }
            }
        }
    }

    Ok(())
}

fn is_increasing_path<G, V>(
    graph: &G,
    path: &[G::VertexId],
    start: &G::VertexId,
    end: &G::VertexId,
) -> bool
where
    G: Neighbors + GraphRef<V>,
    V: PartialOrd,
{
    path.first() == Some(start)
        && path.last() == Some(end)
        && path.windows(2).all(|pair| {
            graph.neighbors(&pair[0]).any(|n| n == pair[1])
                && graph.value(&pair[0]) < graph.value(&pair[1])
        })
}
