//! Growing tuples one element at a time.
//!
//! [`TupleAppend`] is the scope type of the do-notation on
//! [`EitherT`](crate::effect::EitherT): `do_()` starts from `()`, and every
//! `bind` or `bind_par` appends the new payload as the last field, so the
//! bound values stay addressable by position.
//!
//! # Examples
//!
//! ```rust
//! use effectual::typeclass::TupleAppend;
//!
//! assert_eq!(().append(1), (1,));
//! assert_eq!((1, "two").append(3.0), (1, "two", 3.0));
//! ```

/// A tuple that can be extended by one trailing field.
pub trait TupleAppend<Z> {
    /// The tuple with `Z` appended.
    type Output;

    /// Appends `value` as the last field.
    fn append(self, value: Z) -> Self::Output;
}

impl<Z> TupleAppend<Z> for () {
    type Output = (Z,);

    #[inline]
    fn append(self, value: Z) -> (Z,) {
        (value,)
    }
}

macro_rules! impl_tuple_append {
    ($($field:ident),+) => {
        impl<$($field,)+ Z> TupleAppend<Z> for ($($field,)+) {
            type Output = ($($field,)+ Z);

            #[inline]
            #[allow(non_snake_case)]
            fn append(self, value: Z) -> Self::Output {
                let ($($field,)+) = self;
                ($($field,)+ value)
            }
        }
    };
}

impl_tuple_append!(A);
impl_tuple_append!(A, B);
impl_tuple_append!(A, B, C);
impl_tuple_append!(A, B, C, D);
impl_tuple_append!(A, B, C, D, E);
impl_tuple_append!(A, B, C, D, E, F);
impl_tuple_append!(A, B, C, D, E, F, G);
impl_tuple_append!(A, B, C, D, E, F, G, H);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn append_keeps_existing_fields_in_place() {
        let scope = ().append('a').append(2).append("three");
        assert_eq!(scope, ('a', 2, "three"));
    }

    #[rstest]
    fn append_reaches_nine_fields() {
        let scope = (1, 2, 3, 4, 5, 6, 7, 8).append(9);
        assert_eq!(scope.8, 9);
    }
}
