use super::*;

/// Depth-first traversal over the vertices reachable from a root.
///
/// # Examples
///
/// ```
/// use vertex_walk::{storage::AdjList, visit::{Dfs, Visitor}};
///
/// let mut graph = AdjList::new();
/// graph.extend_with_vertices(["a", "b", "c", "d"]);
/// graph.extend_with_edges([(0, 1), (1, 2), (2, 0), (3, 0)]);
///
/// let root = graph.find_vertex(&"a").unwrap();
///
/// let mut values = Dfs::new(&graph)
///     .start(root)
///     .into_iter(&graph)
///     .map(|v| *graph.vertex(&v).unwrap())
///     .collect::<Vec<_>>();
/// values.sort();
///
/// assert_eq!(values, ["a", "b", "c"]);
/// ```
pub struct Dfs<G, S = FxHashSet<<G as GraphBase>::VertexId>>
where
    G: GraphBase,
{
    raw: RawVisit<G::VertexId, S>,
}

pub struct DfsRooted<'a, G, S>
where
    G: GraphBase,
{
    raw: &'a mut RawVisit<G::VertexId, S>,
}

impl<G> Dfs<G>
where
    G: GraphBase,
{
    /// Creates the traversal with a hash set as the visited set, preallocated
    /// by the vertex count hint of the graph.
    pub fn new(graph: &G) -> Self {
        let visited = graph
            .vertex_count_hint()
            .map(|count| HashSet::with_capacity_and_hasher(count, BuildHasherDefault::default()))
            .unwrap_or_default();

        Self {
            raw: RawVisit::new(visited),
        }
    }
}

impl<G, S> Dfs<G, S>
where
    G: GraphBase,
    S: VisitSet<G::VertexId>,
{
    /// Creates the traversal with a custom visited set, for example a
    /// [`TypedBitSet`] for graphs with integer IDs.
    pub fn with_visit_set(visited: S) -> Self {
        Self {
            raw: RawVisit::new(visited),
        }
    }

    /// Starts the traversal from the given root.
    ///
    /// Vertices visited by previous traversals started on this value are not
    /// visited again. Use [`reset`](Dfs::reset) to forget them.
    pub fn start(&mut self, root: G::VertexId) -> DfsRooted<'_, G, S> {
        self.raw.start(root);
        DfsRooted { raw: &mut self.raw }
    }

    pub fn reset(&mut self) {
        self.raw.reset();
    }

    pub fn visited(&self) -> &S {
        &self.raw.visited
    }
}

impl<G, S> Visitor<G> for DfsRooted<'_, G, S>
where
    G: Neighbors,
    S: VisitSet<G::VertexId>,
{
    type Item = G::VertexId;

    fn visit_next(&mut self, graph: &G) -> Option<Self::Item> {
        self.raw.next(graph)
    }
}

#[cfg(test)]
mod tests {
    use crate::{core::id::VertexId, storage::AdjList};

    use super::*;

    fn visit_all<S>(
        dfs: &mut Dfs<AdjList<i32>, S>,
        graph: &AdjList<i32>,
        root: VertexId,
    ) -> Vec<i32>
    where
        S: VisitSet<VertexId>,
    {
        let mut values = dfs
            .start(root)
            .into_iter(graph)
            .map(|v| *graph.vertex(&v).unwrap())
            .collect::<Vec<_>>();
        values.sort();
        values
    }

    fn diamond() -> AdjList<i32> {
        let mut graph = AdjList::new();
        graph.extend_with_vertices([1, 2, 3, 4]);
        graph.extend_with_edges([(0, 1), (0, 2), (1, 3), (2, 3)]);
        graph
    }

    #[test]
    fn dfs_diamond_visits_once() {
        let graph = diamond();
        let mut dfs = Dfs::new(&graph);

        assert_eq!(visit_all(&mut dfs, &graph, VertexId::from(0usize)), vec![1, 2, 3, 4]);
        assert_eq!(dfs.visited().visited_count(), 4);
    }

    #[test]
    fn dfs_self_loop_terminates() {
        let mut graph = AdjList::new();
        let v = graph.add_vertex(7);
        graph.add_edge(&v, &v);
        graph.add_edge(&v, &v);

        let mut dfs = Dfs::new(&graph);
        assert_eq!(visit_all(&mut dfs, &graph, v), vec![7]);
    }

    #[test]
    fn dfs_start_keeps_visited_until_reset() {
        let graph = diamond();
        let mut dfs = Dfs::new(&graph);

        visit_all(&mut dfs, &graph, VertexId::from(1usize));
        assert_eq!(visit_all(&mut dfs, &graph, VertexId::from(0usize)), vec![1, 3]);

        dfs.reset();
        assert_eq!(visit_all(&mut dfs, &graph, VertexId::from(0usize)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn dfs_with_bit_set() {
        let graph = diamond();
        let mut dfs = Dfs::<_, TypedBitSet<VertexId>>::with_visit_set(TypedBitSet::new());

        assert_eq!(visit_all(&mut dfs, &graph, VertexId::from(2usize)), vec![3, 4]);
        assert_eq!(dfs.visited().visited_count(), 2);
    }

    #[test]
    fn dfs_visit_next_detached() {
        let graph = diamond();
        let mut dfs = Dfs::new(&graph);
        let mut rooted = dfs.start(VertexId::from(3usize));

        assert_eq!(rooted.visit_next(&graph), Some(VertexId::from(3usize)));
        assert_eq!(rooted.visit_next(&graph), None);
        assert_eq!(rooted.visit_next(&graph), None);
    }

    #[test]
    fn dfs_is_lazy() {
        let mut graph = AdjList::new();
        graph.extend_with_vertices(0..100);
        graph.extend_with_edges((0..99).map(|i| (i, i + 1)));

        let mut dfs = Dfs::new(&graph);
        let first = dfs
            .start(VertexId::from(0usize))
            .into_iter(&graph)
            .take(3)
            .collect::<Vec<_>>();

        assert_eq!(first.len(), 3);
        assert_eq!(dfs.visited().visited_count(), 3);
    }
}
