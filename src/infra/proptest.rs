use proptest::{
    arbitrary::any,
    collection::vec,
    strategy::{BoxedStrategy, Strategy},
};

use crate::storage::AdjList;

/// Parameters of the generated graphs.
#[derive(Debug, Clone, Copy)]
pub struct StrategyParams {
    max_size: usize,
    max_edges_per_vertex: usize,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 64,
            max_edges_per_vertex: 3,
        }
    }
}

impl StrategyParams {
    pub fn max_size(self, max_size: usize) -> Self {
        Self { max_size, ..self }
    }

    /// Upper bound on the average out-degree. Self-loops and parallel edges
    /// are generated too.
    pub fn max_edges_per_vertex(self, max_edges_per_vertex: usize) -> Self {
        Self {
            max_edges_per_vertex,
            ..self
        }
    }
}

/// Directed graphs with vertex values generated by `vertex` and uniformly
/// random edges.
pub fn graph_directed<S>(vertex: S) -> BoxedStrategy<AdjList<S::Value>>
where
    S: Strategy + 'static,
{
    graph_directed_with(vertex, StrategyParams::default())
}

pub fn graph_directed_with<S>(vertex: S, params: StrategyParams) -> BoxedStrategy<AdjList<S::Value>>
where
    S: Strategy + 'static,
{
    let max_edges = params.max_size * params.max_edges_per_vertex;

    (
        vec(vertex, 0..=params.max_size),
        vec(any::<(usize, usize)>(), 0..=max_edges),
    )
        .prop_map(|(vertices, edges)| {
            let n = vertices.len();
            let mut graph: AdjList<S::Value> = AdjList::with_capacity(n);
            graph.extend_with_vertices(vertices);

            // Endpoints are generated independently of the vertex count, so
            // they are folded into the valid range here.
            if n > 0 {
                graph.extend_with_edges(edges.into_iter().map(|(src, dst)| (src % n, dst % n)));
            }

            graph
        })
        .boxed()
}
