use rand::{Rng, rng};

use crate::popcount::{weight, weight32};

#[test]
fn test_weight32_edges() {
    assert_eq!(weight32(0), 0);
    assert_eq!(weight32(1), 1);
    assert_eq!(weight32(0x8000_0000), 1);
    assert_eq!(weight32(u32::MAX), 32);
    assert_eq!(weight32(0x5555_5555), 16);
    assert_eq!(weight32(0xAAAA_AAAA), 16);
    assert_eq!(weight32(0x0F0F_0F0F), 16);
    assert_eq!(weight32(0xFF00_0000), 8);
    for shift in 0..32 {
        assert_eq!(weight32(1 << shift), 1);
        assert_eq!(weight32(u32::MAX >> shift), 32 - shift);
    }
}

#[test]
fn test_weight32_matches_count_ones() {
    let mut rng = rng();
    for _ in 0..10_000 {
        let word = rng.random::<u32>();
        assert_eq!(weight32(word), word.count_ones(), "{word:#010x}");
    }
}

#[test]
fn test_weight_slice() {
    assert_eq!(weight(&[]), 0);
    assert_eq!(weight(&[u32::MAX, 0, 0b1011]), 35);
    const FULL: u32 = weight32(u32::MAX);
    assert_eq!(FULL, 32);
}
