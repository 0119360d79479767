//! Command implementations for wordbits-cmd

use anyhow::{Context, Result};
use wordbits::BitVector;

pub mod decode;
pub mod encode;
pub mod transform;

/// Decodes a command-line operand in the given radix.
pub fn decode_operand(text: &str, radix: u32) -> Result<BitVector> {
    BitVector::parse(text, radix)
        .with_context(|| format!("Failed to decode radix-{radix} vector '{text}'"))
}

/// Prints the text encoding of `bits` to stdout.
pub fn print_encoded(bits: &BitVector, radix: u32) -> Result<()> {
    println!("{}", bits.to_string_radix(radix)?);
    Ok(())
}
