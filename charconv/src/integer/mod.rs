//! Portable 128 bits integers.
//!
//! [`Emulated128`] gives the exact semantics of the native `u128` using two 64 bits words, and
//! [`TrivialUint128`] holds a raw 128 bits pattern without any arithmetic.
//!
//! [`Uint128`] is the type the rest of the crate uses for 128 bits magnitudes: the native `u128`
//! by default, the emulated one when the `emulated-u128` feature is enabled. Both implement
//! [`UnsignedInteger`](crate::numeric::UnsignedInteger), callers should not rely on more.

mod algorithms;
mod emulated128;
mod trivial;

pub use emulated128::Emulated128;
pub use trivial::TrivialUint128;

#[cfg(not(feature = "emulated-u128"))]
pub type Uint128 = u128;

#[cfg(feature = "emulated-u128")]
pub type Uint128 = Emulated128;
