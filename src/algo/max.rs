use crate::{
    core::{value::Bounded, GraphRef, Neighbors},
    visit::walk,
};

/// Returns the maximum value among the vertices reachable from `start`,
/// including `start` itself, or `None` if `start` is `None` or not in the
/// graph.
///
/// # Examples
///
/// ```
/// use vertex_walk::{algo::max_value, storage::AdjList};
///
/// let mut graph = AdjList::new();
/// graph.extend_with_vertices([-5, -1, -9]);
/// graph.extend_with_edges([(0, 2), (2, 1)]);
///
/// let start = graph.find_vertex(&-5);
/// assert_eq!(max_value(&graph, start.as_ref()), Some(-1));
/// assert_eq!(max_value(&graph, None), None);
/// ```
pub fn max_value<G, V>(graph: &G, start: Option<&G::VertexId>) -> Option<V>
where
    G: Neighbors + GraphRef<V>,
    V: Ord + Clone,
{
    let mut best: Option<V> = None;

    let visited = walk(graph, start, |vertex| {
        if let Some(value) = graph.value(vertex) {
            if best.as_ref().map_or(true, |best| value > best) {
                best = Some(value.clone());
            }
        }
    });

    tracing::debug!(visited, found = best.is_some(), "maximum value computed");
    best
}

/// Returns the maximum value among the vertices reachable from `start`,
/// including `start` itself.
///
/// If `start` is `None` or not in the graph, the smallest representable value
/// of `V` is returned as the "no value" sentinel. Use [`max_value`] to tell the
/// two cases apart.
///
/// # Examples
///
/// ```
/// use vertex_walk::{algo::max, storage::AdjList};
///
/// let mut graph = AdjList::new();
/// graph.extend_with_vertices([3, 8, 1]);
/// graph.extend_with_edges([(0, 2), (2, 1), (1, 0)]);
///
/// let start = graph.find_vertex(&1);
/// assert_eq!(max(&graph, start.as_ref()), 8);
/// assert_eq!(max(&graph, None), i32::MIN);
/// ```
pub fn max<G, V>(graph: &G, start: Option<&G::VertexId>) -> V
where
    G: Neighbors + GraphRef<V>,
    V: Ord + Clone + Bounded,
{
    max_value(graph, start).unwrap_or_else(V::min_value)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        core::{id::VertexId, VertexSet},
        infra::{
            proptest::graph_directed,
            testing::{create_cycle, create_diamond, max_recursive},
        },
        storage::AdjList,
    };

    use super::*;

    #[test]
    fn max_diamond() {
        let graph = create_diamond();
        let start = graph.find_vertex(&1).unwrap();

        assert_eq!(max(&graph, Some(&start)), 4);
    }

    #[test]
    fn max_absent_is_sentinel() {
        let graph = create_diamond();

        assert_eq!(max(&graph, None), i32::MIN);
        assert_eq!(max(&graph, Some(&VertexId::from(4usize))), i32::MIN);
        assert_eq!(max_value(&graph, None), None::<i32>);
    }

    #[test]
    fn max_single_vertex() {
        let mut graph = AdjList::new();
        let v = graph.add_vertex(-17i64);

        assert_eq!(max(&graph, Some(&v)), -17);
    }

    #[test]
    fn max_all_negative() {
        let mut graph = AdjList::new();
        graph.extend_with_vertices([-3, -7, -2, -100]);
        graph.extend_with_edges([(0, 1), (1, 2), (2, 3)]);

        let start = VertexId::from(0usize);
        assert_eq!(max(&graph, Some(&start)), -2);
    }

    #[test]
    fn max_only_through_cycle() {
        // 0 -> 1 -> 2 -> 0, the maximum sits behind the start in the cycle.
        let mut graph = AdjList::new();
        graph.extend_with_vertices([5, 1, 9, 0]);
        graph.extend_with_edges([(1, 2), (2, 0), (0, 1), (0, 3)]);

        let start = VertexId::from(0usize);
        assert_eq!(max(&graph, Some(&start)), 9);
    }

    #[test]
    fn max_not_at_start() {
        let graph = create_cycle(10);
        let start = VertexId::from(0usize);

        assert_eq!(max(&graph, Some(&start)), 9usize);
    }

    #[test]
    fn max_idempotent() {
        let graph = create_diamond();
        let start = graph.find_vertex(&2).unwrap();

        assert_eq!(max(&graph, Some(&start)), max(&graph, Some(&start)));
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_max_any(graph in graph_directed(any::<i16>()), start: u64) {
            let n = graph.vertex_count() as u64;
            prop_assume!(n > 0);

            let start = VertexId::from((start % n) as usize);
            prop_assert_eq!(max(&graph, Some(&start)), max_recursive(&graph, &start));
        }
    }
}
