//! Decode command implementation

use anyhow::{Context, Result};
use serde::Serialize;
use wordbits::BitVector;

#[derive(Debug, Serialize)]
struct DecodeSummary {
    len: usize,
    word_count: usize,
    weight: usize,
    /// Storage words in hex, least significant first.
    words: Vec<String>,
    set_bits: Vec<usize>,
}

impl DecodeSummary {
    fn new(bits: &BitVector) -> DecodeSummary {
        DecodeSummary {
            len: bits.len(),
            word_count: bits.word_count(),
            weight: bits.weight(),
            words: bits.words().iter().map(|w| format!("{w:#010x}")).collect(),
            set_bits: bits.iter().collect(),
        }
    }
}

pub fn run(text: &str, radix: u32) -> Result<()> {
    let bits = super::decode_operand(text, radix)?;
    let summary = DecodeSummary::new(&bits);
    let json =
        serde_json::to_string_pretty(&summary).with_context(|| "Failed to serialize summary")?;
    println!("{json}");
    Ok(())
}
