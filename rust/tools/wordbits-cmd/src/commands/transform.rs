//! In-place transform commands (not, shift, and/or/xor)

use anyhow::{Context, Result};
use clap::ValueEnum;
use wordbits::BitVector;

use super::{decode_operand, print_encoded};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BinaryOp {
    And,
    Or,
    Xor,
}

impl BinaryOp {
    fn apply(self, left: &mut BitVector, right: &BitVector) -> wordbits::Result<()> {
        match self {
            BinaryOp::And => left.and(right)?,
            BinaryOp::Or => left.or(right)?,
            BinaryOp::Xor => left.xor(right)?,
        };
        Ok(())
    }
}

pub fn run_not(text: &str, radix: u32) -> Result<()> {
    let bits = negate(text, radix)?;
    print_encoded(&bits, radix)
}

pub fn run_shift(text: &str, amount: usize, radix: u32) -> Result<()> {
    let bits = shift(text, amount, radix)?;
    print_encoded(&bits, radix)
}

pub fn run_combine(op: BinaryOp, left: &str, right: &str, radix: u32) -> Result<()> {
    let bits = combine(op, left, right, radix)?;
    print_encoded(&bits, radix)
}

fn negate(text: &str, radix: u32) -> Result<BitVector> {
    let mut bits = decode_operand(text, radix)?;
    bits.negate();
    Ok(bits)
}

fn shift(text: &str, amount: usize, radix: u32) -> Result<BitVector> {
    let mut bits = decode_operand(text, radix)?;
    let len = bits.len();
    bits.left_shift(amount)
        .with_context(|| format!("Cannot shift a {len}-bit vector by {amount}"))?;
    Ok(bits)
}

fn combine(op: BinaryOp, left: &str, right: &str, radix: u32) -> Result<BitVector> {
    let mut left = decode_operand(left, radix)?;
    let right = decode_operand(right, radix)?;
    log::debug!("{op:?}: {left:?} with {right:?}");
    op.apply(&mut left, &right)
        .with_context(|| format!("Operands of {op:?} differ in word count"))?;
    Ok(left)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negate() {
        let bits = negate("0000000f", 16).unwrap();
        assert_eq!(bits.words(), &[0xffff_fff0]);
        assert_eq!(bits.to_string_radix(16).unwrap(), "fffffff0");

        let twice = negate(&bits.to_string_radix(16).unwrap(), 16).unwrap();
        assert_eq!(twice.words(), &[0xf]);

        assert!(negate("0000000g", 16).is_err());
    }

    #[test]
    fn test_combine() {
        let xor = combine(BinaryOp::Xor, "0000000f", "000000f0", 16).unwrap();
        assert_eq!(xor.words(), &[0xff]);

        let and = combine(BinaryOp::And, "0000000f", "0000000c", 16).unwrap();
        assert_eq!(and.words(), &[0xc]);

        let or = combine(BinaryOp::Or, "1 0", "0 1", 2).unwrap();
        assert_eq!(or.words(), &[1, 1]);

        assert!(combine(BinaryOp::Or, "1 0", "1", 2).is_err());
        assert!(combine(BinaryOp::Or, "1", "x", 2).is_err());
    }

    #[test]
    fn test_shift() {
        let bits = shift("00000000 00000001", 32, 16).unwrap();
        assert_eq!(bits.to_string_radix(16).unwrap(), "00000001 00000000");

        let err = shift("00000001", 32, 16).unwrap_err();
        assert!(err.to_string().contains("Cannot shift a 32-bit vector by 32"));
    }
}
