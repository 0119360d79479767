//! Encode command implementation

use anyhow::{Context, Result};
use wordbits::BitVector;

use crate::utils::parse_word;

pub fn run(len: &str, words: &[String], radix: u32) -> Result<()> {
    let bits = build(len, words)?;
    super::print_encoded(&bits, radix)
}

/// Builds a vector of `len` bits from word arguments.
///
/// With no words the vector stays zeroed; otherwise exactly `len.div_ceil(32)`
/// words must be supplied.
fn build(len: &str, words: &[String]) -> Result<BitVector> {
    let mut bits = BitVector::from_len_str(len)?;
    if words.is_empty() {
        return Ok(bits);
    }

    let words = words
        .iter()
        .map(|word| parse_word(word))
        .collect::<Result<Vec<u32>>>()?;
    bits.set_value(&words)
        .with_context(|| format!("Cannot load {} words into a {len}-bit vector", words.len()))?;
    log::debug!("encoding {bits:?}");
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use wordbits::ErrorKind;

    use super::*;

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_build() {
        let bits = build("40", &args(&["0xff", "1"])).unwrap();
        assert_eq!(bits.len(), 40);
        assert_eq!(bits.words(), &[0xff, 1]);
        assert_eq!(bits.to_string_radix(16).unwrap(), "00000001 000000ff");

        let zeroed = build("64", &[]).unwrap();
        assert_eq!(zeroed.words(), &[0, 0]);
    }

    #[test]
    fn test_build_errors() {
        let err = build("-1", &[]).unwrap_err();
        let kind = err.downcast_ref::<wordbits::Error>().unwrap().kind();
        assert!(matches!(kind, ErrorKind::InvalidLength { .. }));

        let err = build("40", &args(&["1"])).unwrap_err();
        let kind = err.downcast_ref::<wordbits::Error>().unwrap().kind();
        assert_eq!(
            kind,
            &ErrorKind::LengthMismatch {
                expected: 2,
                actual: 1
            }
        );

        assert!(build("32", &args(&["zz"])).is_err());
    }
}
