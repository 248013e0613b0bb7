//! Graph represented by a function returning successors of a vertex.
//!
//! [Implicit graph](https://en.wikipedia.org/wiki/Implicit_graph) is a
//! representation that does not store the structure and data explicitly, but
//! produces them algorithmically. [`Implicit`] type is a wrapper over a
//! function returning the successors of a vertex. The vertex is identified by
//! its value, so the graph is not bounded in size and can be arbitrarily deep.
//!
//! # Examples
//!
//! ```
//! use vertex_walk::{
//!     algo::{has_strictly_increasing_path, max},
//!     storage::{implicit::ImplicitId, Implicit},
//! };
//!
//! fn successors(&n: &u32) -> Vec<u32> {
//!     if n <= 4 {
//!         vec![n * 2, n * 2 + 1]
//!     } else {
//!         vec![]
//!     }
//! }
//!
//! let graph = Implicit::new(successors);
//! let start = ImplicitId::from(1);
//!
//! assert_eq!(max(&graph, Some(&start)), 9);
//! assert_eq!(
//!     has_strictly_increasing_path(&graph, Some(&start), Some(&ImplicitId::from(9))),
//!     Ok(true)
//! );
//! ```

use std::{fmt::Debug, hash::Hash, marker::PhantomData};

use crate::core::{id::IdType, GraphBase, GraphRef, Neighbors};

/// Wrapper over `Fn(&V) -> IntoIterator<Item = V>`.
///
/// Type `V` must implement the supertraits of [`IdType`] so that
/// [`ImplicitId`] can be used as IDs in this implicit graph.
pub struct Implicit<V, N, F> {
    successors: F,
    ty: PhantomData<fn() -> (V, N)>,
}

impl<V, N, F> Implicit<V, N, F>
where
    N: IntoIterator<Item = V>,
    F: Fn(&V) -> N,
{
    /// Wraps a function returning successors of a vertex.
    pub fn new(successors: F) -> Self {
        Self {
            successors,
            ty: PhantomData,
        }
    }
}

impl<V, N, F> GraphBase for Implicit<V, N, F>
where
    N: IntoIterator<Item = V>,
    F: Fn(&V) -> N,
    ImplicitId<V>: IdType,
{
    type VertexId = ImplicitId<V>;

    fn contains_vertex(&self, id: &Self::VertexId) -> bool {
        !id.is_sentinel()
    }
}

impl<V, N, F> Neighbors for Implicit<V, N, F>
where
    N: IntoIterator<Item = V>,
    F: Fn(&V) -> N,
    ImplicitId<V>: IdType,
{
    type NeighborsIter<'a> = NeighborsIter<V, N::IntoIter>
    where
        Self: 'a;

    fn neighbors(&self, from: &Self::VertexId) -> Self::NeighborsIter<'_> {
        let successors = from
            .0
            .as_ref()
            .map(|from| (self.successors)(from).into_iter());

        NeighborsIter {
            successors,
            ty: PhantomData,
        }
    }
}

impl<V, N, F> GraphRef<V> for Implicit<V, N, F>
where
    N: IntoIterator<Item = V>,
    F: Fn(&V) -> N,
    ImplicitId<V>: IdType,
{
    fn value<'a>(&'a self, id: &'a Self::VertexId) -> Option<&'a V> {
        id.0.as_ref()
    }
}

/// An [`IdType`] used by [`Implicit`] graph representation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImplicitId<T>(Option<T>);

impl<T> From<T> for ImplicitId<T> {
    fn from(value: T) -> Self {
        Self(Some(value))
    }
}

impl<T> ImplicitId<T> {
    /// Returns the wrapped value, or `None` for the sentinel.
    pub fn into_inner(self) -> Option<T> {
        self.0
    }
}

impl<T> IdType for ImplicitId<T>
where
    T: Debug + Clone + PartialEq + Eq + PartialOrd + Ord + Hash,
{
    fn sentinel() -> Self {
        Self(None)
    }

    fn as_bits(&self) -> u64 {
        panic!("unsupported");
    }

    fn from_usize(_: usize) -> Self {
        panic!("unsupported");
    }
}

pub struct NeighborsIter<V, N> {
    successors: Option<N>,
    ty: PhantomData<fn() -> V>,
}

impl<V, N> Iterator for NeighborsIter<V, N>
where
    N: Iterator<Item = V>,
{
    type Item = ImplicitId<V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.successors.as_mut()?.next().map(ImplicitId::from)
    }
}
