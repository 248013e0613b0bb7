//! Traits and types used for identifying vertices in graphs.
//!
//! Vertices are identified by identity, never by the value they carry. Two
//! vertices holding equal values are still two different vertices and all
//! traversal bookkeeping (visited sets, results) is keyed on the ID.
//!
//! All types that are supposed to be used as vertex identifiers must implement
//! [`IdType`] trait. For better performance, they should also implement
//! [`IntegerIdType`] if possible, which enables dense bit sets as visited sets.
//!
//! The default ID type is [`VertexId`]. It is of size `u64` by default, but
//! this can be changed via its generic parameter `N`.

use std::{fmt::Debug, hash::Hash};

/// A unique identification of a vertex in a graph.
///
/// In standard graph representations, the ID type is an integer. Conceptually,
/// such an integer ID is of type `usize`, but one can choose a smaller integer
/// type (such as u8 or u16) to lower the memory footprint.
///
/// For implicit graphs, an ID can be of any form as long as it implements
/// required super traits. In general, such IDs can't be treated as integers.
///
/// Any ID must also have a representation for a
/// "[sentinel](https://en.wikipedia.org/wiki/Sentinel_value)" value. For
/// integers, we use the maximum value of the corresponding type for the
/// sentinel. Storages never hand out the sentinel as an ID of a real vertex.
pub trait IdType: Clone + Ord + Hash + Debug {
    /// Conceptually `None` in `Option<ID>`, but without using `Option`.
    fn sentinel() -> Self;

    /// Converts an ID into the corresponding `u64`.
    ///
    /// # Panics
    ///
    /// IDs that are not representable by an integer should panic.
    fn as_bits(&self) -> u64;

    /// Converts an ID into the corresponding `usize`.
    ///
    /// # Panics
    ///
    /// IDs that are not representable by an integer should panic.
    fn as_usize(&self) -> usize {
        self.as_bits() as usize
    }

    /// Converts an `usize` into the corresponding ID.
    ///
    /// # Panics
    ///
    /// IDs that are not representable by an integer should panic.
    fn from_usize(id: usize) -> Self;

    /// Returns `true` if the value represents the sentinel value.
    fn is_sentinel(&self) -> bool {
        self == &Self::sentinel()
    }
}

/// Type-level specification that an ID type is representable by integer.
///
/// Types that implement this trait must support all integer-related
/// conversions. All integer values up to some upper bound should be valid IDs
/// and there should be no discontinuity.
pub trait IntegerIdType: IdType + Copy + From<usize> + Into<usize> {}

/// The default representation of an integer index for vertices. Generic type
/// `N` can be used to control the byte size of the backing integer (`u64` by
/// default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId<N = u64>(N);

macro_rules! impl_int_id {
    ($id_ty:ident, $int_ty:ty) => {
        impl IdType for $id_ty<$int_ty> {
            fn sentinel() -> Self {
                Self(<$int_ty>::MAX)
            }

            fn as_bits(&self) -> u64 {
                self.0 as u64
            }

            fn as_usize(&self) -> usize {
                self.0.try_into().expect("id type overflow")
            }

            fn from_usize(index: usize) -> Self {
                Self(index.try_into().expect("id type overflow"))
            }
        }

        impl From<usize> for $id_ty<$int_ty> {
            fn from(index: usize) -> Self {
                Self::from_usize(index)
            }
        }

        impl From<$id_ty<$int_ty>> for usize {
            fn from(id: $id_ty<$int_ty>) -> Self {
                id.as_usize()
            }
        }

        impl IntegerIdType for $id_ty<$int_ty> {}
    };
}

impl_int_id!(VertexId, usize);
impl_int_id!(VertexId, u64);
impl_int_id!(VertexId, u32);
impl_int_id!(VertexId, u16);
impl_int_id!(VertexId, u8);
