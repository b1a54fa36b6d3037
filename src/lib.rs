//! putget is a small big-endian binary codec built from two composable
//! primitives: [`Put`], an immutable builder of a byte sequence, and
//! [`Get`], a decode step that consumes bytes positionally and either
//! yields a typed value or fails. The [`Serializable`] trait binds value
//! types to a fixed wire layout through those primitives, with the
//! guarantee that decoding the encoding of any value reproduces it
//! exactly.
//!
//! The format is raw and fixed-layout: no header, no version tag, no
//! self-description. Both sides must agree on type and order out of
//! band. All multi-byte values are big-endian.
//!
//! # Quickstart
//!
//! ```
//! let bytes = putget::serialize(&0x0102u16);
//! assert_eq!(bytes, [0x01, 0x02]);
//!
//! let value: u16 = putget::deserialize(&bytes)?;
//! assert_eq!(value, 0x0102);
//! # Ok::<(), putget::DecodeError>(())
//! ```
//!
//! # Custom types
//!
//! New wire formats are built by composition rather than by writing a
//! monolithic parser: concatenate the fields' [`Put`]s on the way out,
//! chain [`Get`] steps with [`Get::and_then`]/[`Get::map`] on the way
//! back.
//!
//! ```
//! use putget::{Get, Put, Serializable};
//!
//! #[derive(Debug, PartialEq)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! impl Serializable for Point {
//!     fn serialize(&self) -> Put {
//!         self.x.serialize().concat(&self.y.serialize())
//!     }
//!
//!     fn deserialize() -> Get<Self> {
//!         i32::deserialize().and_then(|x| i32::deserialize().map(move |y| Point { x, y }))
//!     }
//! }
//!
//! let point = Point { x: 1, y: -1 };
//! let decoded: Point = putget::deserialize(&putget::serialize(&point))?;
//! assert_eq!(decoded, point);
//! # Ok::<(), putget::DecodeError>(())
//! ```
//!
//! # What this crate is not
//!
//! There is no schema language, no versioning, and no I/O: [`Put`]
//! produces bytes for the caller to route, and [`Get`] consumes bytes
//! the caller already has. Platform-width integers (`usize`/`isize`)
//! are deliberately not supported; see [`Serializable`].
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::vec::Vec;

pub mod error;
pub use error::{DecodeError, Result};
mod get;
pub use get::Get;
mod put;
pub use put::Put;
mod wire;
pub use wire::Serializable;

/// Encode a value to a fresh byte buffer.
///
/// Encoding cannot fail; for sinks other than a fresh `Vec`, build the
/// [`Put`] with [`Serializable::serialize`] and materialize it yourself.
pub fn serialize<T: Serializable>(value: &T) -> Vec<u8> {
    value.serialize().to_bytes()
}

/// Decode one value from the front of `bytes`.
///
/// Trailing bytes are not an error; callers that require exhaustion
/// should check the cursor returned by [`deserialize_from`].
pub fn deserialize<T: Serializable>(bytes: &[u8]) -> Result<T> {
    T::deserialize().run(bytes).map(|(value, _)| value)
}

/// Decode one value starting at `offset`, returning it together with
/// the cursor position after the read.
pub fn deserialize_from<T: Serializable>(bytes: &[u8], offset: usize) -> Result<(T, usize)> {
    T::deserialize().run_from(bytes, offset)
}
