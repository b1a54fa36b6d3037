//! Error types and helpers.
use {core::str::Utf8Error, thiserror::Error};

/// Failure of a single decode attempt.
///
/// Decoding is strict: the first failing step aborts the whole decode and
/// no partial value is observable. Encoding cannot fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unexpected end of input at offset {offset}: needed {needed} bytes, {available} available")]
    UnexpectedEndOfInput {
        offset: usize,
        needed: usize,
        available: usize,
    },
    #[error("invalid discriminant byte {value:#04x} for {type_name}")]
    InvalidDiscriminant {
        type_name: &'static str,
        value: u8,
    },
    #[error("invalid sequence length prefix: {0}")]
    InvalidLengthPrefix(i64),
    #[error(transparent)]
    InvalidUtf8Encoding(#[from] Utf8Error),
}

pub type Result<T> = core::result::Result<T, DecodeError>;

#[cold]
pub const fn unexpected_end_of_input(offset: usize, needed: usize, available: usize) -> DecodeError {
    DecodeError::UnexpectedEndOfInput {
        offset,
        needed,
        available,
    }
}

#[cold]
pub const fn invalid_discriminant(type_name: &'static str, value: u8) -> DecodeError {
    DecodeError::InvalidDiscriminant { type_name, value }
}

#[cold]
pub const fn invalid_length_prefix(len: i64) -> DecodeError {
    DecodeError::InvalidLengthPrefix(len)
}

#[cold]
pub const fn invalid_utf8_encoding(error: Utf8Error) -> DecodeError {
    DecodeError::InvalidUtf8Encoding(error)
}
