use std::{marker::PhantomData, ops::Range, slice};

use crate::core::{
    error::{AddEdgeError, AddEdgeErrorKind, AddVertexError},
    id::{IntegerIdType, VertexId},
    GraphBase, GraphRef, Neighbors, VertexSet,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct AdjVertex<I, V> {
    attr: V,
    neighbors: Vec<I>,
}

impl<I, V> AdjVertex<I, V> {
    fn new(attr: V) -> Self {
        Self {
            attr,
            neighbors: Vec::new(),
        }
    }
}

/// Directed graph stored as a list of vertices, each holding its value and the
/// list of its outgoing neighbors.
///
/// This is the caller-side graph: it is built up front with
/// [`add_vertex`](AdjList::add_vertex) and [`add_edge`](AdjList::add_edge)
/// and then only read by the traversal algorithms. Parallel edges and
/// self-loops are allowed.
///
/// # Examples
///
/// ```
/// use vertex_walk::{algo::reachable, storage::AdjList};
///
/// let mut graph = AdjList::new();
///
/// let a = graph.add_vertex(1);
/// let b = graph.add_vertex(2);
/// let c = graph.add_vertex(3);
///
/// graph.add_edge(&a, &b);
/// graph.add_edge(&b, &a);
///
/// let from_a = reachable(&graph, Some(&a));
/// assert!(from_a.contains(&b));
/// assert!(!from_a.contains(&c));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjList<V, I = VertexId> {
    vertices: Vec<AdjVertex<I, V>>,
}

impl<V, I: IntegerIdType> AdjList<V, I> {
    /// Creates an empty graph with the vertex ID type chosen by the caller.
    pub fn with_id() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Creates an empty graph with space for at least `vertex_count` vertices.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
        }
    }

    /// Returns the value of the vertex, or `None` if the vertex does not exist.
    pub fn vertex(&self, id: &I) -> Option<&V> {
        self.vertices.get(id.as_usize()).map(|vertex| &vertex.attr)
    }

    /// Returns the ID of the first vertex carrying the given value.
    pub fn find_vertex(&self, value: &V) -> Option<I>
    where
        V: PartialEq,
    {
        self.vertices
            .iter()
            .position(|vertex| &vertex.attr == value)
            .map(I::from_usize)
    }

    /// Adds a vertex carrying `value`.
    ///
    /// Fails when the ID type has no more room for a new vertex, giving the
    /// value back in the error.
    pub fn try_add_vertex(&mut self, value: V) -> Result<I, AddVertexError<V>> {
        let index = self.vertices.len();

        // The sentinel is never handed out as an ID of a real vertex.
        if index as u64 >= I::sentinel().as_bits() {
            return Err(AddVertexError::new(value));
        }

        self.vertices.push(AdjVertex::new(value));
        Ok(I::from_usize(index))
    }

    /// Adds a vertex carrying `value`.
    ///
    /// # Panics
    ///
    /// Panics if the ID type has no more room for a new vertex.
    pub fn add_vertex(&mut self, value: V) -> I {
        match self.try_add_vertex(value) {
            Ok(id) => id,
            Err(error) => panic!("{error}"),
        }
    }

    /// Adds an edge from `from` to `to`.
    pub fn try_add_edge(&mut self, from: &I, to: &I) -> Result<(), AddEdgeError> {
        if !self.contains_vertex(to) {
            return Err(AddEdgeError::new(AddEdgeErrorKind::DestinationAbsent));
        }

        match self.vertices.get_mut(from.as_usize()) {
            Some(vertex) => {
                vertex.neighbors.push(*to);
                Ok(())
            }
            None => Err(AddEdgeError::new(AddEdgeErrorKind::SourceAbsent)),
        }
    }

    /// Adds an edge from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if any of the endpoints does not exist.
    pub fn add_edge(&mut self, from: &I, to: &I) {
        if let Err(error) = self.try_add_edge(from, to) {
            panic!("{error}");
        }
    }

    /// Adds all values as new vertices, in order.
    pub fn extend_with_vertices<T>(&mut self, values: T)
    where
        T: IntoIterator<Item = V>,
    {
        for value in values {
            self.add_vertex(value);
        }
    }

    /// Adds all edges given as pairs of vertex indices.
    ///
    /// # Panics
    ///
    /// Panics if any of the endpoints does not exist.
    pub fn extend_with_edges<T>(&mut self, edges: T)
    where
        T: IntoIterator<Item = (usize, usize)>,
    {
        for (from, to) in edges {
            self.add_edge(&I::from_usize(from), &I::from_usize(to));
        }
    }
}

impl<V> AdjList<V> {
    /// Creates an empty graph using the default [`VertexId`]. Use
    /// [`with_id`](AdjList::with_id) to choose a different vertex ID type.
    pub fn new() -> Self {
        Self::with_id()
    }
}

impl<V> Default for AdjList<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, I: IntegerIdType> GraphBase for AdjList<V, I> {
    type VertexId = I;

    fn contains_vertex(&self, id: &I) -> bool {
        !id.is_sentinel() && id.as_usize() < self.vertices.len()
    }

    fn vertex_count_hint(&self) -> Option<usize> {
        Some(self.vertices.len())
    }
}

impl<V, I: IntegerIdType> Neighbors for AdjList<V, I> {
    type NeighborsIter<'a> = NeighborsIter<'a, I>
    where
        Self: 'a;

    fn neighbors(&self, from: &I) -> Self::NeighborsIter<'_> {
        let neighbors = self
            .vertices
            .get(from.as_usize())
            .map(|vertex| vertex.neighbors.as_slice())
            .unwrap_or_default();

        NeighborsIter {
            inner: neighbors.iter(),
        }
    }

    fn out_degree(&self, from: &I) -> usize {
        self.vertices
            .get(from.as_usize())
            .map_or(0, |vertex| vertex.neighbors.len())
    }
}

impl<V, I: IntegerIdType> VertexSet for AdjList<V, I> {
    type VertexIdsIter<'a> = VertexIds<I>
    where
        Self: 'a;

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertex_ids(&self) -> Self::VertexIdsIter<'_> {
        VertexIds {
            range: 0..self.vertices.len(),
            ty: PhantomData,
        }
    }
}

impl<V, I: IntegerIdType> GraphRef<V> for AdjList<V, I> {
    fn value<'a>(&'a self, id: &'a I) -> Option<&'a V> {
        self.vertex(id)
    }
}

pub struct NeighborsIter<'a, I> {
    inner: slice::Iter<'a, I>,
}

impl<I: Copy> Iterator for NeighborsIter<'_, I> {
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[derive(Debug)]
pub struct VertexIds<I> {
    range: Range<usize>,
    ty: PhantomData<fn() -> I>,
}

impl<I: IntegerIdType> Iterator for VertexIds<I> {
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(I::from_usize)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::core::{error::AddVertexErrorKind, id::IdType};

    use super::*;

    #[test]
    fn add_vertices_and_edges() {
        let mut graph = AdjList::new();

        let a = graph.add_vertex("a");
        let b = graph.add_vertex("b");

        graph.add_edge(&a, &b);
        graph.add_edge(&a, &b);
        graph.add_edge(&b, &b);

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.vertex(&a), Some(&"a"));
        assert_eq!(graph.neighbors(&a).collect::<Vec<_>>(), vec![b, b]);
        assert_eq!(graph.out_degree(&b), 1);
        assert!(!graph.is_leaf(&b));
    }

    #[test]
    fn find_vertex_by_value() {
        let mut graph = AdjList::new();
        graph.extend_with_vertices([3, 1, 4, 1]);

        assert_eq!(graph.find_vertex(&1), Some(VertexId::from(1usize)));
        assert_eq!(graph.find_vertex(&5), None);
    }

    #[test]
    fn add_edge_absent_endpoints() {
        let mut graph = AdjList::new();
        let a = graph.add_vertex(());
        let missing = VertexId::from(5usize);

        assert_matches!(
            graph.try_add_edge(&a, &missing),
            Err(AddEdgeError {
                kind: AddEdgeErrorKind::DestinationAbsent
            })
        );
        assert_matches!(
            graph.try_add_edge(&missing, &a),
            Err(AddEdgeError {
                kind: AddEdgeErrorKind::SourceAbsent
            })
        );
        assert!(graph.is_leaf(&a));
    }

    #[test]
    #[should_panic(expected = "destination does not exist")]
    fn add_edge_panics_on_absent() {
        let mut graph = AdjList::new();
        let a = graph.add_vertex(());
        graph.add_edge(&a, &VertexId::from(1usize));
    }

    #[test]
    fn capacity_overflow() {
        let mut graph = AdjList::<u8, VertexId<u8>>::with_id();

        for i in 0..255u8 {
            graph.add_vertex(i);
        }

        assert_matches!(
            graph.try_add_vertex(255),
            Err(AddVertexError {
                attr: 255,
                kind: AddVertexErrorKind::CapacityOverflow
            })
        );
        assert_eq!(graph.vertex_count(), 255);
    }

    #[test]
    fn foreign_ids_are_not_contained() {
        let mut graph = AdjList::new();
        let a = graph.add_vertex(0);

        assert!(graph.contains_vertex(&a));
        assert!(!graph.contains_vertex(&VertexId::from(1usize)));
        assert!(!graph.contains_vertex(&VertexId::sentinel()));
        assert_eq!(graph.neighbors(&VertexId::from(1usize)).count(), 0);
    }

    #[test]
    fn vertex_ids_in_insertion_order() {
        let mut graph = AdjList::new();
        graph.extend_with_vertices(['x', 'y', 'z']);

        let values = graph
            .vertex_ids()
            .map(|id| *graph.vertex(&id).unwrap())
            .collect::<String>();
        assert_eq!(values, "xyz");
    }
}
