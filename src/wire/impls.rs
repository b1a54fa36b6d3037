//! Built-in conformances.
//!
//! Every instance here is a mechanical binding of the [`Put`]/[`Get`]
//! combinators to one row of the wire contract. The fixed-width numeric
//! types all reduce to `to_be_bytes`/`from_be_bytes`; the variable-width
//! types chain a length prefix into a payload read with
//! [`Get::and_then`].
use {
    super::{get_len_prefix, put_len_prefix, Serializable},
    crate::{
        error::{invalid_discriminant, invalid_utf8_encoding},
        get::Get,
        put::Put,
    },
    alloc::{string::String, vec::Vec},
};

macro_rules! impl_be_bytes {
    ($($ty:ty),+) => {$(
        impl Serializable for $ty {
            #[inline]
            fn serialize(&self) -> Put {
                let bytes = self.to_be_bytes();
                Put::by_writing_bytes(bytes.len(), move |buf| buf.copy_from_slice(&bytes))
            }

            #[inline]
            fn deserialize() -> Get<Self> {
                Get::by_reading_array(<$ty>::from_be_bytes)
            }
        }
    )+};
}

impl_be_bytes!(u8, i8, u16, i16, u32, i32, u64, i64);
// IEEE-754 bit patterns ride the same big-endian byte order.
impl_be_bytes!(f32, f64);

impl Serializable for bool {
    #[inline]
    fn serialize(&self) -> Put {
        (*self as u8).serialize()
    }

    fn deserialize() -> Get<Self> {
        u8::deserialize().and_then(|byte| match byte {
            0 => Get::value(false),
            1 => Get::value(true),
            value => Get::fail(invalid_discriminant("bool", value)),
        })
    }
}

/// Signed 64-bit big-endian byte-length prefix, then the raw UTF-8
/// payload. A payload that fails UTF-8 validation is a decode error,
/// not an empty-string fallback.
impl Serializable for String {
    fn serialize(&self) -> Put {
        put_len_prefix(self.len()).concat(&Put::from_slice(self.as_bytes()))
    }

    fn deserialize() -> Get<Self> {
        get_len_prefix().and_then(|len| {
            Get::by_reading_bytes(len, <[u8]>::to_vec).and_then(|bytes| {
                match String::from_utf8(bytes) {
                    Ok(text) => Get::value(text),
                    Err(error) => Get::fail(invalid_utf8_encoding(error.utf8_error())),
                }
            })
        })
    }
}

impl<T: Serializable> Serializable for Option<T> {
    fn serialize(&self) -> Put {
        match self {
            None => 0u8.serialize(),
            Some(value) => 1u8.serialize().concat(&value.serialize()),
        }
    }

    fn deserialize() -> Get<Self> {
        u8::deserialize().and_then(|tag| match tag {
            0 => Get::from_step(|_cursor| Ok(None)),
            1 => T::deserialize().map(Some),
            value => Get::fail(invalid_discriminant("Option", value)),
        })
    }
}

/// Signed 64-bit big-endian element-count prefix, then the elements in
/// order, each in its own layout.
impl<T: Serializable> Serializable for Vec<T> {
    fn serialize(&self) -> Put {
        self.iter()
            .fold(put_len_prefix(self.len()), |acc, item| {
                acc.concat(&item.serialize())
            })
    }

    fn deserialize() -> Get<Self> {
        get_len_prefix().and_then(|len| {
            Get::from_step(move |cursor| {
                let element = T::deserialize();
                // Every element consumes at least one byte, so a hostile
                // count cannot preallocate past the input it came with.
                let mut items = Vec::with_capacity(len.min(cursor.remaining()));
                for _ in 0..len {
                    items.push(element.run_with(cursor)?);
                }
                Ok(items)
            })
        })
    }
}

macro_rules! impl_tuple {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: Serializable),+> Serializable for ($($name,)+) {
            fn serialize(&self) -> Put {
                Put::empty()$(.concat(&self.$idx.serialize()))+
            }

            fn deserialize() -> Get<Self> {
                Get::from_step(|cursor| Ok(($($name::deserialize().run_with(cursor)?,)+)))
            }
        }
    };
}

impl_tuple! { A: 0, B: 1 }
impl_tuple! { A: 0, B: 1, C: 2 }
impl_tuple! { A: 0, B: 1, C: 2, D: 3 }
impl_tuple! { A: 0, B: 1, C: 2, D: 3, E: 4 }
impl_tuple! { A: 0, B: 1, C: 2, D: 3, E: 4, F: 5 }
impl_tuple! { A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6 }
impl_tuple! { A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7 }
