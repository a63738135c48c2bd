//! Allocation free conversion of integers to text.
//!
//! - [`to_chars`] and friends write the text of any integer, in any base from 2 to 36, into a
//!   caller provided buffer and report failures through [`ToCharsResult`] instead of panicking.
//! - [`integer::Emulated128`] is a two words unsigned 128 bits integer with the exact semantics
//!   of `u128`, usable wherever an [`numeric::UnsignedInteger`] is expected.

pub mod error;
pub mod integer;
pub mod numeric;
pub mod to_chars;

pub use error::{Error, ErrorKind, InvalidArgumentError};
pub use to_chars::{
    to_chars, to_chars_radix, to_chars_range, to_chars_str, try_to_chars_range, Errc,
    ToCharsInteger, ToCharsResult,
};
