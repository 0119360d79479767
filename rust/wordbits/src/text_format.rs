//! Fixed-width radix text encoding of bit vectors.
//!
//! A vector is rendered as one token per storage word, most significant word first,
//! separated by single spaces. Each token is the word's unsigned value in the chosen
//! radix, using lowercase digits and left-padded with `'0'` to the width needed for
//! `u32::MAX` in that radix. For example, in radix 16 a 64-bit vector holding words
//! `[1, 0xffffffff]` (LSB word first) encodes as `"ffffffff 00000001"`.
//!
//! Decoding reverses the process and yields a vector whose length is always a whole
//! number of words (`token_count * 32`), so a length that was not word-aligned is not
//! recovered.

use wordbits_common::{Error, Result};

use crate::bit_vector::{BitVector, WORD_BITS};

/// Radix used when none is given explicitly.
pub const DEFAULT_RADIX: u32 = 36;

/// Smallest supported radix.
pub const MIN_RADIX: u32 = 2;

/// Largest supported radix (digits `0-9` then `a-z`).
pub const MAX_RADIX: u32 = 36;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

const TOKEN_SEPARATOR: char = ' ';

/// Text encoding parameters for [`BitVector`].
///
/// Only the radix is configurable; the token width is derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextFormat {
    radix: u32,
}

impl Default for TextFormat {
    fn default() -> Self {
        TextFormat {
            radix: DEFAULT_RADIX,
        }
    }
}

impl TextFormat {
    /// Creates a format for `radix`, which must be within `2..=36`.
    pub fn new(radix: u32) -> Result<TextFormat> {
        let format = TextFormat { radix };
        format.validate()?;
        Ok(format)
    }

    fn validate(&self) -> Result<()> {
        if !(MIN_RADIX..=MAX_RADIX).contains(&self.radix) {
            return Err(Error::invalid_radix(self.radix));
        }
        Ok(())
    }

    /// Returns the radix tokens are written in.
    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// Number of digits in every encoded token.
    ///
    /// This is `ceil(32 * ln(2) / ln(radix))`, computed exactly as the number of
    /// radix digits in `u32::MAX`: 32 for radix 2, 8 for radix 16, 7 for radix 36.
    pub fn pad_width(&self) -> usize {
        let radix = self.radix as u64;
        let mut remaining = u32::MAX as u64;
        let mut width = 0;
        while remaining != 0 {
            remaining /= radix;
            width += 1;
        }
        width
    }

    /// Encodes `bits` as space-separated fixed-width tokens, most significant word
    /// first. An empty vector encodes as the empty string.
    pub fn encode(&self, bits: &BitVector) -> String {
        let width = self.pad_width();
        let mut text = String::with_capacity(bits.word_count() * (width + 1));
        for (i, &word) in bits.words().iter().rev().enumerate() {
            if i != 0 {
                text.push(TOKEN_SEPARATOR);
            }
            self.encode_word(word, width, &mut text);
        }
        text
    }

    /// Decodes text produced by [`encode`](Self::encode).
    ///
    /// Tokens are separated by exactly one space; each must be a non-empty run of
    /// digits valid in the radix (either letter case) whose value fits in `u32`.
    /// Tokens shorter than the pad width are accepted. The empty string decodes to
    /// an empty vector.
    pub fn decode(&self, text: &str) -> Result<BitVector> {
        if text.is_empty() {
            return Ok(BitVector::default());
        }

        let words = text
            .split(TOKEN_SEPARATOR)
            .rev()
            .map(|token| self.decode_word(token))
            .collect::<Result<Vec<u32>>>()?;
        log::debug!(
            "decoded {} radix-{} tokens into a {}-bit vector",
            words.len(),
            self.radix,
            words.len() * WORD_BITS
        );
        BitVector::from_words(words.len() * WORD_BITS, &words)
    }

    fn encode_word(&self, mut word: u32, width: usize, text: &mut String) {
        let mut digits = [b'0'; u32::BITS as usize];
        let mut pos = digits.len();
        while word != 0 {
            pos -= 1;
            digits[pos] = DIGITS[(word % self.radix) as usize];
            word /= self.radix;
        }
        let start = digits.len() - width;
        debug_assert!(pos >= start);
        text.extend(digits[start..].iter().map(|&b| b as char));
    }

    fn decode_word(&self, token: &str) -> Result<u32> {
        let invalid = || Error::invalid_format(token, self.radix);
        if token.is_empty() {
            return Err(invalid());
        }
        token.chars().try_fold(0u32, |value, c| {
            let digit = c.to_digit(self.radix).ok_or_else(invalid)?;
            value
                .checked_mul(self.radix)
                .and_then(|value| value.checked_add(digit))
                .ok_or_else(invalid)
        })
    }
}
