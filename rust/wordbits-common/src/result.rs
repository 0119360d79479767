pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Fails with `IndexOutOfRange` unless `index < len`.
#[macro_export]
macro_rules! verify_index {
    ($index:expr, $len:expr) => {{
        let index: usize = $index;
        let len: usize = $len;
        $crate::result::verify_index(index, len)?;
    }};
}

/// Fails with `LengthMismatch` unless `actual == expected`.
#[macro_export]
macro_rules! verify_word_count {
    ($expected:expr, $actual:expr) => {{
        let expected: usize = $expected;
        let actual: usize = $actual;
        $crate::result::verify_word_count(expected, actual)?;
    }};
}

#[inline]
pub fn verify_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        index_out_of_range(index, len)
    }
}

#[inline]
pub fn verify_word_count(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        length_mismatch(expected, actual)
    }
}

#[cold]
pub fn index_out_of_range(index: usize, len: usize) -> Result<()> {
    Err(crate::error::ErrorKind::IndexOutOfRange { index, len }.into())
}

#[cold]
pub fn length_mismatch(expected: usize, actual: usize) -> Result<()> {
    Err(crate::error::ErrorKind::LengthMismatch { expected, actual }.into())
}
