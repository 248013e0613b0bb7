use rustc_hash::FxHashMap;

use crate::core::{id::IdType, GraphRef, Neighbors};

// Own loop, separate from the exhaustive traversal: stops as soon as the end
// is popped and expands only edges going to a strictly greater value.
//
// A vertex is marked visited when it is popped for the first time and is
// never expanded again. Which neighbors are expanded depends only on the value
// of the vertex itself, not on the prefix that led to it, so the first visit
// explores everything any later visit could.
pub fn dfs<G, V>(graph: &G, start: &G::VertexId, end: &G::VertexId) -> Option<Vec<G::VertexId>>
where
    G: Neighbors + GraphRef<V>,
    V: PartialOrd,
{
    let mut visited: FxHashMap<G::VertexId, Option<G::VertexId>> = graph
        .vertex_count_hint()
        .map(|count| FxHashMap::with_capacity_and_hasher(count, Default::default()))
        .unwrap_or_default();

    // Pairs of (vertex, predecessor on the path). The visited map remembers
    // the predecessor from the first visit, which forms the DFS tree.
    let mut stack: Vec<(G::VertexId, Option<G::VertexId>)> = vec![(start.clone(), None)];

    while let Some((vertex, pred)) = stack.pop() {
        if visited.contains_key(&vertex) {
            continue;
        }

        visited.insert(vertex.clone(), pred);

        if &vertex == end {
            return Some(collect_path(&visited, vertex));
        }

        let Some(value) = graph.value(&vertex) else {
            continue;
        };

        for neighbor in graph.neighbors(&vertex) {
            if visited.contains_key(&neighbor) {
                continue;
            }

            let increasing = graph
                .value(&neighbor)
                .map_or(false, |next| next > value);

            if increasing {
                stack.push((neighbor, Some(vertex.clone())));
            }
        }
    }

    None
}

fn collect_path<I>(preds: &FxHashMap<I, Option<I>>, end: I) -> Vec<I>
where
    I: IdType,
{
    let mut path = vec![end.clone()];
    let mut current = end;

    while let Some(Some(pred)) = preds.get(&current) {
        path.push(pred.clone());
        current = pred.clone();
    }

    path.reverse();
    path
}
