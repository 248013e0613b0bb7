use super::id::IdType;

/// Base trait for all graphs, establishing the type of vertex identity.
pub trait GraphBase {
    /// Vertex ID type.
    type VertexId: IdType;

    /// Returns `true` if the vertex belongs to the graph.
    ///
    /// Traversal treats a vertex that the graph does not contain the same way
    /// as an absent vertex.
    fn contains_vertex(&self, id: &Self::VertexId) -> bool;

    /// Returns the number of vertices if the graph is able to tell it cheaply.
    ///
    /// It is used only as a hint for preallocating the visited sets.
    fn vertex_count_hint(&self) -> Option<usize> {
        None
    }
}

/// Access to the outgoing edges of a vertex.
pub trait Neighbors: GraphBase {
    /// Iterator over IDs of the outgoing neighbors.
    type NeighborsIter<'a>: Iterator<Item = Self::VertexId>
    where
        Self: 'a;

    /// Returns an iterator over the targets of outgoing edges of the vertex.
    ///
    /// A neighbor is reported once for every edge leading to it, including a
    /// self-loop. Order is unspecified.
    fn neighbors(&self, from: &Self::VertexId) -> Self::NeighborsIter<'_>;

    /// Returns the number of outgoing edges of the vertex.
    fn out_degree(&self, from: &Self::VertexId) -> usize {
        self.neighbors(from).count()
    }

    /// Returns `true` if the vertex has no outgoing edge.
    fn is_leaf(&self, from: &Self::VertexId) -> bool {
        self.neighbors(from).next().is_none()
    }
}

/// Finite graphs that can enumerate their vertices.
pub trait VertexSet: GraphBase {
    type VertexIdsIter<'a>: Iterator<Item = Self::VertexId>
    where
        Self: 'a;

    fn vertex_count(&self) -> usize;

    fn vertex_ids(&self) -> Self::VertexIdsIter<'_>;
}

/// Access to the values carried by vertices.
pub trait GraphRef<V>: GraphBase {
    /// Returns the value of the vertex, or `None` if the vertex does not exist.
    ///
    /// The reference may borrow from the ID itself, which is what graphs
    /// identifying vertices by their values (e.g.,
    /// [`Implicit`](crate::storage::Implicit)) need.
    fn value<'a>(&'a self, id: &'a Self::VertexId) -> Option<&'a V>;
}
