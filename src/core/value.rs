//! Properties of the values carried by vertices.

/// Value types with a smallest representable value.
///
/// The smallest value serves as the "no value" sentinel of
/// [`max`](crate::algo::max) when the traversal has no start vertex. Callers
/// that need to distinguish an empty traversal from a genuine minimum should
/// use [`max_value`](crate::algo::max_value) instead.
pub trait Bounded {
    fn min_value() -> Self;
}

macro_rules! impl_bounded {
    ($($ty:ty),*) => {
        $(
            impl Bounded for $ty {
                fn min_value() -> Self {
                    <$ty>::MIN
                }
            }
        )*
    };
}

impl_bounded!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Bounded for bool {
    fn min_value() -> Self {
        false
    }
}

impl Bounded for char {
    fn min_value() -> Self {
        '\0'
    }
}
