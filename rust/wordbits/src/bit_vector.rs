//! A fixed-length vector of bits packed into 32-bit words.

use std::fmt;
use std::str::FromStr;

use wordbits_common::{Error, Result, verify_index, verify_word_count};

use crate::popcount;
use crate::text_format::TextFormat;

/// Number of bits held by a single storage word.
pub const WORD_BITS: usize = u32::BITS as usize;

/// A fixed-length sequence of bits with `[u32]` storage, bitwise algebra and a
/// radix text encoding.
///
/// # Storage Format
///
/// Bits are stored in little-endian order within an array of `u32` words:
/// - Bit 0 corresponds to the least significant bit (LSB) of the first word
/// - Bit 31 corresponds to the most significant bit (MSB) of the first word
/// - Bit 32 corresponds to the LSB of the second word, and so on
///
/// The number of words is always `len.div_ceil(32)`.
///
/// # Padding bits
///
/// When `len` is not a multiple of 32, the last word holds bits beyond `len`.
/// These padding bits are never masked: [`negate`](Self::negate), the binary
/// operations, [`left_shift`](Self::left_shift) and [`set_value`](Self::set_value)
/// leave them at whatever value the word arithmetic produces, and
/// [`weight`](Self::weight) counts them. Indexed access ([`get`](Self::get),
/// [`set`](Self::set)) and [`iter`](Self::iter) only reach bits below `len`.
///
/// # Mutation
///
/// Every fallible mutation validates its arguments before touching storage, so a
/// rejected call leaves the vector unchanged. The in-place operations return
/// `&mut Self` to allow chaining; clone first when the original is still needed.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BitVector {
    len: usize,
    words: Vec<u32>,
}

impl BitVector {
    /// Creates a vector of `len` bits, all zero.
    pub fn new(len: usize) -> BitVector {
        BitVector {
            len,
            words: vec![0u32; len.div_ceil(WORD_BITS)],
        }
    }

    /// Creates a vector of `len` zero bits from any integer length.
    ///
    /// Fails with `InvalidLength` if `len` is negative or does not fit in `usize`,
    /// and with `AllocationFailed` if the storage cannot be allocated.
    pub fn try_new<L>(len: L) -> Result<BitVector>
    where
        L: TryInto<usize> + fmt::Display + Copy,
    {
        let checked = len.try_into().map_err(|_| Error::invalid_length(len))?;
        BitVector::try_zeroed(checked)
    }

    /// Creates a vector of zero bits whose length is given as decimal text.
    ///
    /// Fails with `InvalidLength` for negative, fractional or non-numeric input,
    /// and with `AllocationFailed` if the storage cannot be allocated.
    pub fn from_len_str(text: &str) -> Result<BitVector> {
        let len = text
            .trim()
            .parse::<usize>()
            .map_err(|_| Error::invalid_length(text))?;
        BitVector::try_zeroed(len)
    }

    /// Creates a vector of `len` bits initialized from `words` (LSB word first).
    ///
    /// `words.len()` must equal `len.div_ceil(32)`. Padding bits in the last word
    /// are kept as given.
    pub fn from_words(len: usize, words: &[u32]) -> Result<BitVector> {
        let mut bits = BitVector::new(len);
        bits.set_value(words)?;
        Ok(bits)
    }

    /// Decodes a vector from its text encoding in the given radix.
    ///
    /// See [`TextFormat::decode`].
    pub fn parse(text: &str, radix: u32) -> Result<BitVector> {
        TextFormat::new(radix)?.decode(text)
    }

    /// Returns the number of logical bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector has zero length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of storage words, `len.div_ceil(32)`.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Returns the storage capacity in bits, including padding.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.words.len() * WORD_BITS
    }

    /// Returns the storage words, least significant first.
    #[inline]
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Returns the bit at `index`.
    pub fn get(&self, index: usize) -> Result<bool> {
        verify_index!(index, self.len);
        let (word_index, bit_position) = Self::bit_position(index);
        Ok((self.words[word_index] & (1u32 << bit_position)) != 0)
    }

    /// Sets the bit at `index` to `value`.
    pub fn set(&mut self, index: usize, value: bool) -> Result<()> {
        verify_index!(index, self.len);
        let (word_index, bit_position) = Self::bit_position(index);
        let mask = 1u32 << bit_position;
        if value {
            self.words[word_index] |= mask;
        } else {
            self.words[word_index] &= !mask;
        }
        Ok(())
    }

    /// Replaces the whole storage with `words` (LSB word first).
    ///
    /// Fails with `LengthMismatch` unless `words.len() == self.word_count()`; no
    /// word is written in that case.
    pub fn set_value(&mut self, words: &[u32]) -> Result<()> {
        verify_word_count!(self.words.len(), words.len());
        self.words.copy_from_slice(words);
        Ok(())
    }

    /// Counts the set bits across all storage words, padding included.
    pub fn weight(&self) -> usize {
        popcount::weight(&self.words)
    }

    /// Flips every bit in place, padding included.
    pub fn negate(&mut self) -> &mut Self {
        for word in self.words.iter_mut() {
            *word = !*word;
        }
        self
    }

    /// Word-wise AND with `other` in place.
    ///
    /// Only the word counts must agree; the logical lengths may differ.
    pub fn and(&mut self, other: &BitVector) -> Result<&mut Self> {
        self.combine(other, |l, r| l & r)
    }

    /// Word-wise OR with `other` in place.
    pub fn or(&mut self, other: &BitVector) -> Result<&mut Self> {
        self.combine(other, |l, r| l | r)
    }

    /// Word-wise XOR with `other` in place.
    pub fn xor(&mut self, other: &BitVector) -> Result<&mut Self> {
        self.combine(other, |l, r| l ^ r)
    }

    /// Shifts all bits toward higher indices by `shift` positions.
    ///
    /// The shift operates on the full storage capacity (`word_count * 32` bits)
    /// as if the words formed one fixed-width unsigned integer: bits moved past the
    /// top word are dropped and the vacated low positions become zero. Bits may land
    /// in the padding region.
    ///
    /// Fails with `ShiftOverflow` if `shift >= capacity()`. In particular every
    /// shift of an empty vector is rejected.
    pub fn left_shift(&mut self, shift: usize) -> Result<&mut Self> {
        let capacity = self.capacity();
        if shift >= capacity {
            return Err(Error::shift_overflow(shift, capacity));
        }

        let words_offset = shift / WORD_BITS;
        let bits_offset = (shift % WORD_BITS) as u32;
        log::trace!("left_shift: {shift} bits ({words_offset} words + {bits_offset} bits)");

        // Walk from the top so every source word is read before it is overwritten.
        for index in (0..self.words.len()).rev() {
            let source = index.checked_sub(words_offset);
            let mut word = Self::source_word(&self.words, source) << bits_offset;
            if bits_offset != 0 {
                let carry = source.and_then(|source| source.checked_sub(1));
                word |= Self::source_word(&self.words, carry) >> (u32::BITS - bits_offset);
            }
            self.words[index] = word;
        }
        Ok(self)
    }

    /// Encodes the vector as text in the given radix.
    ///
    /// See [`TextFormat::encode`].
    pub fn to_string_radix(&self, radix: u32) -> Result<String> {
        Ok(TextFormat::new(radix)?.encode(self))
    }

    /// Returns an iterator over the positions of set bits below `len`, in
    /// ascending order.
    pub fn iter(&self) -> SetBitsIter<'_> {
        SetBitsIter {
            words: self.words.iter(),
            current_word: 0,
            next_word_index: 0,
            base_index: 0,
            len: self.len,
        }
    }
}

impl BitVector {
    fn try_zeroed(len: usize) -> Result<BitVector> {
        let count = len.div_ceil(WORD_BITS);
        let mut words = Vec::new();
        words
            .try_reserve_exact(count)
            .map_err(|_| Error::allocation_failed(len))?;
        words.resize(count, 0u32);
        Ok(BitVector { len, words })
    }

    /// Returns the word index and the bit position within that word for `index`.
    #[inline]
    fn bit_position(index: usize) -> (usize, usize) {
        (index / WORD_BITS, index % WORD_BITS)
    }

    #[inline]
    fn source_word(words: &[u32], index: Option<usize>) -> u32 {
        index.map_or(0, |index| words[index])
    }

    fn combine(&mut self, other: &BitVector, op: impl Fn(u32, u32) -> u32) -> Result<&mut Self> {
        verify_word_count!(self.words.len(), other.words.len());
        for (l, r) in self.words.iter_mut().zip(other.words.iter()) {
            *l = op(*l, *r);
        }
        Ok(self)
    }
}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitVector")
            .field("len", &self.len)
            .field("words", &format_args!("{:08x?}", self.words))
            .finish()
    }
}

/// Formats the vector in the default radix-36 encoding.
impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&TextFormat::default().encode(self))
    }
}

/// Parses the default radix-36 encoding.
impl FromStr for BitVector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TextFormat::default().decode(s)
    }
}

impl<'a> IntoIterator for &'a BitVector {
    type Item = usize;
    type IntoIter = SetBitsIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the positions of set bits in a [`BitVector`].
///
/// Padding bits beyond the vector length are not reported.
#[derive(Clone)]
pub struct SetBitsIter<'a> {
    words: std::slice::Iter<'a, u32>,
    current_word: u32,
    next_word_index: usize,
    base_index: usize,
    len: usize,
}

impl<'a> Iterator for SetBitsIter<'a> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_word != 0 {
                let index = self.base_index + self.current_word.trailing_zeros() as usize;
                if index >= self.len {
                    return None;
                }
                // Clear the lowest set bit.
                self.current_word &= self.current_word - 1;
                return Some(index);
            }

            let &word = self.words.next()?;
            self.current_word = word;
            self.base_index = self.next_word_index * WORD_BITS;
            self.next_word_index += 1;
        }
    }
}
