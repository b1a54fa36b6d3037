//! The [`Serializable`] contract binding value types to the wire layout.
use crate::{
    error::invalid_length_prefix,
    get::Get,
    put::Put,
};

mod impls;

/// Bidirectional mapping between a value type and its big-endian wire
/// layout.
///
/// The contract is the round-trip law: for every value `x`,
/// `deserialize` applied to the bytes of `serialize(&x)` yields a value
/// equal to `x`, bit for bit, including edge values (zero, extreme
/// magnitudes, NaN and infinity patterns, the empty string). No header
/// or version tag is emitted; both sides must agree on type and order
/// out of band.
///
/// Generic code should be parametric over `T: Serializable`:
///
/// ```
/// use putget::{Put, Serializable};
///
/// fn frame<T: Serializable>(values: &[T]) -> Put {
///     values
///         .iter()
///         .fold(Put::empty(), |acc, value| acc.concat(&value.serialize()))
/// }
///
/// assert_eq!(frame(&[0x0102u16, 0x0304]).to_bytes(), [1, 2, 3, 4]);
/// ```
///
/// `usize` and `isize` are deliberately not `Serializable`: their width
/// is machine-dependent, which would break byte-exact interoperability.
/// Convert to a fixed-width type at the call site instead.
///
/// ```compile_fail
/// let bytes = putget::serialize(&1usize);
/// ```
pub trait Serializable: Sized + 'static {
    /// The wire bytes of `self`, as a composable [`Put`].
    fn serialize(&self) -> Put;

    /// The decode step reconstructing a value of this type.
    fn deserialize() -> Get<Self>;
}

/// Length prefix for a payload of `len` bytes or elements: signed
/// 64-bit big-endian, shared by the string and sequence codecs.
pub(crate) fn put_len_prefix(len: usize) -> Put {
    (len as i64).serialize()
}

/// Decode a length prefix, rejecting values that cannot name a payload
/// size on this machine (negative, or beyond the address space).
pub(crate) fn get_len_prefix() -> Get<usize> {
    i64::deserialize().and_then(|raw| match usize::try_from(raw) {
        Ok(len) => Get::value(len),
        Err(_) => Get::fail(invalid_length_prefix(raw)),
    })
}

#[cfg(test)]
mod tests {
    use {super::*, crate::error::DecodeError};

    #[test]
    fn len_prefix_is_signed_64_bit_big_endian() {
        assert_eq!(put_len_prefix(2).to_bytes(), [0, 0, 0, 0, 0, 0, 0, 2]);
        assert_eq!(put_len_prefix(0).to_bytes(), [0; 8]);
    }

    #[test]
    fn negative_len_prefix_is_rejected() {
        let bytes = (-1i64).to_be_bytes();
        let err = get_len_prefix().run(&bytes).unwrap_err();
        assert_eq!(err, DecodeError::InvalidLengthPrefix(-1));
    }

    #[test]
    fn len_prefix_round_trips() {
        for len in [0usize, 1, 255, 0x0102, usize::try_from(i64::MAX).unwrap_or(usize::MAX)] {
            let bytes = put_len_prefix(len).to_bytes();
            let (decoded, read) = get_len_prefix().run(&bytes).unwrap();
            assert_eq!(decoded, len);
            assert_eq!(read, 8);
        }
    }
}
