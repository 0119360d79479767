//! Fixed-length bit vectors packed into 32-bit words.
//!
//! [`BitVector`] stores `len` bits in `len.div_ceil(32)` words and offers indexed
//! access, in-place bitwise algebra, a whole-storage left shift, population count
//! and a radix text encoding ([`TextFormat`]).
//!
//! ```
//! use wordbits::BitVector;
//!
//! let mut bits = BitVector::new(40);
//! bits.set(3, true).unwrap();
//! bits.left_shift(32).unwrap();
//! assert!(bits.get(35).unwrap());
//! assert_eq!(bits.weight(), 1);
//! assert_eq!(bits.to_string_radix(16).unwrap(), "00000008 00000000");
//! ```

pub mod bit_vector;
pub mod popcount;
pub mod text_format;

#[cfg(test)]
mod tests;

pub use bit_vector::{BitVector, SetBitsIter, WORD_BITS};
pub use text_format::TextFormat;
pub use wordbits_common::{Error, ErrorKind, Result};
