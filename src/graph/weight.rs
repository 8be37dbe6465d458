use num_traits::Float;
use ordered_float::OrderedFloat;
use std::fmt::Debug;

/// Edge weight and distance type used by the shortest-path engine
///
/// `infinity()` is the key of every vertex that has not been reached yet, so
/// no real distance may equal it. A finite sum that overflows or lands on
/// the sentinel is reported by the engine as [`Error::DistanceOverflow`].
///
/// [`Error::DistanceOverflow`]: crate::Error::DistanceOverflow
pub trait Weight: Copy + Ord + Debug + Send + Sync {
    /// Distance of the source to itself
    fn zero() -> Self;

    /// Sentinel key of a vertex with no known path
    fn infinity() -> Self;

    /// Returns true for weights below zero, which the engine can't accept
    fn is_negative(&self) -> bool;

    /// Adds two weights, `None` on overflow
    fn checked_add(self, other: Self) -> Option<Self>;

    /// Returns true for the infinity sentinel
    fn is_infinite(&self) -> bool {
        *self == Self::infinity()
    }
}

macro_rules! impl_unsigned_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn zero() -> Self {
                    0
                }

                fn infinity() -> Self {
                    <$t>::MAX
                }

                fn is_negative(&self) -> bool {
                    false
                }

                fn checked_add(self, other: Self) -> Option<Self> {
                    <$t>::checked_add(self, other)
                }
            }
        )*
    };
}

macro_rules! impl_signed_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn zero() -> Self {
                    0
                }

                fn infinity() -> Self {
                    <$t>::MAX
                }

                fn is_negative(&self) -> bool {
                    *self < 0
                }

                fn checked_add(self, other: Self) -> Option<Self> {
                    <$t>::checked_add(self, other)
                }
            }
        )*
    };
}

impl_unsigned_weight!(u8, u16, u32, u64, usize);
impl_signed_weight!(i8, i16, i32, i64, isize);

impl<F> Weight for OrderedFloat<F>
where
    F: Float + Debug + Send + Sync,
{
    fn zero() -> Self {
        OrderedFloat(F::zero())
    }

    fn infinity() -> Self {
        OrderedFloat(F::infinity())
    }

    // NaN has no place in a distance either
    fn is_negative(&self) -> bool {
        self.0.is_nan() || self.0 < F::zero()
    }

    fn checked_add(self, other: Self) -> Option<Self> {
        let sum = self.0 + other.0;
        if sum.is_nan() {
            None
        } else {
            Some(OrderedFloat(sum))
        }
    }
}
