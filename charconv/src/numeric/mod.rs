//! Generic numeric traits.
//!
//! The conversion engine and the 128-bit integer layer are written against these traits so that
//! the native `u128` and [`Emulated128`](crate::integer::Emulated128) can be used interchangeably.

mod unsigned;

pub use unsigned::UnsignedInteger;

/// Any numeric type with a fixed bit width.
pub trait Numeric: Sized + Copy + PartialEq + PartialOrd + std::fmt::Debug {
    /// The size of the type in bits.
    const BITS: usize;

    /// The null element of the type.
    const ZERO: Self;

    /// The identity element for the multiplication.
    const ONE: Self;

    /// A numeric value equal to 2.
    const TWO: Self;

    /// The largest value that can be encoded by the type.
    const MAX: Self;
}

/// A trait implemented by numeric types with no sign.
pub trait UnsignedNumeric: Numeric {}

/// A cast between two numeric types, following the semantics of the `as` operator.
///
/// Narrowing truncates to the low bits, widening zero or sign extends depending on the source.
pub trait CastFrom<Input> {
    fn cast_from(input: Input) -> Self;
}

/// The reverse direction of [`CastFrom`], implemented for free.
pub trait CastInto<Output> {
    fn cast_into(self) -> Output;
}

impl<Input, Output> CastInto<Output> for Input
where
    Output: CastFrom<Input>,
{
    #[inline]
    fn cast_into(self) -> Output {
        Output::cast_from(self)
    }
}

macro_rules! implement_cast {
    ($Input:ty, {$($Output:ty),*}) => {
        $(
            impl CastFrom<$Input> for $Output {
                #[inline]
                #[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
                fn cast_from(input: $Input) -> $Output {
                    input as $Output
                }
            }
        )*
    };
    ($Input: ty) => {
        implement_cast!($Input, {u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize});
    };
    ($($Input: ty),*) => {
        $(
            implement_cast!($Input);
        )*
    };
}

implement_cast!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
