//! Newtype wrappers selecting a numeric `Semigroup` / `Monoid`.
//!
//! The same number can be combined by addition ([`Sum`]), multiplication
//! ([`Product`]), or by keeping the larger ([`Max`]) or smaller ([`Min`])
//! value. Wrapping picks the operation; [`Apply::combine_lifted`] then lifts
//! it over any effect.
//!
//! [`Apply::combine_lifted`]: super::Apply::combine_lifted
//!
//! # Examples
//!
//! ```rust
//! use effectual::typeclass::{Max, Monoid, Semigroup, Sum};
//!
//! assert_eq!(Sum(3).combine(Sum(4)), Sum(7));
//! assert_eq!(Max(3).combine(Max(9)), Max(9));
//! assert_eq!(Sum::<i64>::empty(), Sum(0));
//! ```

macro_rules! define_wrapper {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name<A>(pub A);

        impl<A> $name<A> {
            /// Wraps `value`.
            #[inline]
            pub const fn new(value: A) -> Self {
                Self(value)
            }

            /// Unwraps the inner value.
            #[inline]
            pub fn into_inner(self) -> A {
                self.0
            }
        }

        impl<A> From<A> for $name<A> {
            #[inline]
            fn from(value: A) -> Self {
                Self(value)
            }
        }
    };
}

define_wrapper!(
    /// Combines by addition; identity `0`.
    Sum
);
define_wrapper!(
    /// Combines by multiplication; identity `1`.
    Product
);
define_wrapper!(
    /// Keeps the larger value; identity is the type's minimum.
    Max
);
define_wrapper!(
    /// Keeps the smaller value; identity is the type's maximum.
    Min
);

/// Types with a least and a greatest value.
pub trait Bounded {
    /// The least value of the type.
    const MIN_VALUE: Self;
    /// The greatest value of the type.
    const MAX_VALUE: Self;
}

/// Types with a multiplicative identity.
pub trait One {
    /// The multiplicative identity.
    const ONE: Self;
}

macro_rules! impl_numeric {
    ($($t:ty => $one:expr),* $(,)?) => {
        $(
            impl Bounded for $t {
                const MIN_VALUE: Self = <$t>::MIN;
                const MAX_VALUE: Self = <$t>::MAX;
            }

            impl One for $t {
                const ONE: Self = $one;
            }
        )*
    };
}

impl_numeric!(
    i8 => 1, i16 => 1, i32 => 1, i64 => 1, i128 => 1, isize => 1,
    u8 => 1, u16 => 1, u32 => 1, u64 => 1, u128 => 1, usize => 1,
);

impl One for f32 {
    const ONE: Self = 1.0;
}

impl One for f64 {
    const ONE: Self = 1.0;
}

impl Bounded for char {
    const MIN_VALUE: Self = '\0';
    const MAX_VALUE: Self = char::MAX;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrappers_round_trip_their_value() {
        assert_eq!(Sum::new(4).into_inner(), 4);
        assert_eq!(Product::from(2_u8), Product(2));
    }

    #[test]
    fn bounds_match_primitive_constants() {
        assert_eq!(<i32 as Bounded>::MIN_VALUE, i32::MIN);
        assert_eq!(<u8 as Bounded>::MAX_VALUE, u8::MAX);
        assert_eq!(<f64 as One>::ONE, 1.0);
    }
}
