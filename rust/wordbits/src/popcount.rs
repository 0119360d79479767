//! Branch-free population count over 32-bit words.
//!
//! [`weight32`] folds per-bit counts into progressively wider lanes (2-bit, 4-bit,
//! then bytes) and finishes with a multiply that sums the four byte lanes into the
//! top byte. The cost is constant per word regardless of how many bits are set.

const PAIRS: u32 = 0x5555_5555;
const NIBBLES: u32 = 0x3333_3333;
const BYTES: u32 = 0x0F0F_0F0F;
const BYTE_SUM: u32 = 0x0101_0101;

/// Returns the number of set bits in `word`.
#[inline]
pub const fn weight32(word: u32) -> u32 {
    let pairs = word - ((word >> 1) & PAIRS);
    let nibbles = (pairs & NIBBLES) + ((pairs >> 2) & NIBBLES);
    let bytes = (nibbles + (nibbles >> 4)) & BYTES;
    bytes.wrapping_mul(BYTE_SUM) >> 24
}

/// Returns the total number of set bits across `words`.
#[inline]
pub fn weight(words: &[u32]) -> usize {
    words.iter().map(|&word| weight32(word) as usize).sum()
}
