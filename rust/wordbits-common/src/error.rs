use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_length(value: impl ToString) -> Error {
        Error(
            ErrorKind::InvalidLength {
                value: value.to_string(),
            }
            .into(),
        )
    }

    pub fn allocation_failed(len: usize) -> Error {
        Error(ErrorKind::AllocationFailed { len }.into())
    }

    pub fn index_out_of_range(index: usize, len: usize) -> Error {
        Error(ErrorKind::IndexOutOfRange { index, len }.into())
    }

    pub fn length_mismatch(expected: usize, actual: usize) -> Error {
        Error(ErrorKind::LengthMismatch { expected, actual }.into())
    }

    pub fn shift_overflow(shift: usize, capacity: usize) -> Error {
        Error(ErrorKind::ShiftOverflow { shift, capacity }.into())
    }

    pub fn invalid_radix(radix: u32) -> Error {
        Error(ErrorKind::InvalidRadix { radix }.into())
    }

    pub fn invalid_format(token: impl Into<String>, radix: u32) -> Error {
        Error(
            ErrorKind::InvalidFormat {
                token: token.into(),
                radix,
            }
            .into(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("invalid bit length '{value}': expected a non-negative integer")]
    InvalidLength { value: String },

    #[error("cannot allocate storage for {len} bits")]
    AllocationFailed { len: usize },

    #[error("bit index {index} out of range (len: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("word count mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("shift by {shift} exceeds storage capacity of {capacity} bits")]
    ShiftOverflow { shift: usize, capacity: usize },

    #[error("unsupported radix {radix}: must be within 2..=36")]
    InvalidRadix { radix: u32 },

    #[error("invalid radix-{radix} word token '{token}'")]
    InvalidFormat { token: String, radix: u32 },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
