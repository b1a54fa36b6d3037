//! The [`Get`] decoder: composable, cursor-driven consumption of a byte
//! sequence.
use {
    crate::error::{unexpected_end_of_input, DecodeError, Result},
    alloc::boxed::Box,
};

/// Read position within the input being decoded.
///
/// The cursor only moves forward: a take of `n` bytes advances it by
/// exactly `n` on success and leaves it untouched on failure, so no
/// partial consumption is ever observable.
pub(crate) struct Cursor<'i> {
    input: &'i [u8],
    pos: usize,
}

impl<'i> Cursor<'i> {
    pub(crate) const fn with_offset(input: &'i [u8], offset: usize) -> Self {
        Self { input, pos: offset }
    }

    #[inline]
    pub(crate) const fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn remaining(&self) -> usize {
        self.input.len().saturating_sub(self.pos)
    }

    /// Take exactly `len` bytes at the current position.
    #[inline]
    pub(crate) fn take(&mut self, len: usize) -> Result<&'i [u8]> {
        let rest = self.input.get(self.pos..).unwrap_or(&[]);
        let Some((bytes, _)) = rest.split_at_checked(len) else {
            return Err(unexpected_end_of_input(self.pos, len, rest.len()));
        };
        self.pos += len;
        Ok(bytes)
    }

    /// Take exactly `N` bytes at the current position as an array.
    #[inline]
    pub(crate) fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let rest = self.input.get(self.pos..).unwrap_or(&[]);
        let Some((chunk, _)) = rest.split_first_chunk::<N>() else {
            return Err(unexpected_end_of_input(self.pos, N, rest.len()));
        };
        self.pos += N;
        Ok(*chunk)
    }
}

/// A decode step that consumes bytes from a cursor and yields an `A`, or
/// fails.
///
/// A `Get` is a composable unit, not a value: building one is separate
/// from running it against input with [`Get::run`]. Consumption is strict
/// left to right with no backtracking; once a step fails, the whole
/// decode fails at that offset.
///
/// Small steps are chained into larger ones with [`Get::map`] and
/// [`Get::and_then`], which is how a length decoded by one step can
/// direct how many bytes the next step reads:
///
/// ```
/// use putget::Get;
///
/// // One length byte, then that many payload bytes.
/// let framed = Get::by_reading_array(|[len]: [u8; 1]| len as usize)
///     .and_then(|len| Get::by_reading_bytes(len, |bytes| bytes.to_vec()));
///
/// let (payload, read) = framed.run(&[3, b'a', b'b', b'c', 0xff])?;
/// assert_eq!(payload, b"abc");
/// assert_eq!(read, 4); // the trailing 0xff was not consumed
/// # Ok::<(), putget::DecodeError>(())
/// ```
pub struct Get<A> {
    step: Box<dyn for<'i> Fn(&mut Cursor<'i>) -> Result<A>>,
}

impl<A: 'static> Get<A> {
    pub(crate) fn from_step<F>(step: F) -> Self
    where
        F: for<'i> Fn(&mut Cursor<'i>) -> Result<A> + 'static,
    {
        Self {
            step: Box::new(step),
        }
    }

    /// The foundational primitive: read exactly `len` raw bytes, then
    /// compute the value with `decode`.
    ///
    /// Fails with [`DecodeError::UnexpectedEndOfInput`] if fewer than
    /// `len` bytes remain, leaving the cursor unchanged. On success the
    /// cursor advances by exactly `len`. `decode` itself cannot fail;
    /// data-dependent validation is expressed by chaining with
    /// [`Get::and_then`] into [`Get::value`] or [`Get::fail`].
    pub fn by_reading_bytes<F>(len: usize, decode: F) -> Self
    where
        F: Fn(&[u8]) -> A + 'static,
    {
        Self::from_step(move |cursor| cursor.take(len).map(|bytes| decode(bytes)))
    }

    /// [`Get::by_reading_bytes`] for a width known at compile time.
    ///
    /// The fixed-width integer and float codecs are all built on this.
    pub fn by_reading_array<const N: usize, F>(decode: F) -> Self
    where
        F: Fn([u8; N]) -> A + 'static,
    {
        Self::from_step(move |cursor| cursor.take_array::<N>().map(|bytes| decode(bytes)))
    }

    /// Succeed with `value` without consuming anything.
    pub fn value(value: A) -> Self
    where
        A: Clone,
    {
        Self::from_step(move |_cursor| Ok(value.clone()))
    }

    /// Fail with `error` without consuming anything.
    pub fn fail(error: DecodeError) -> Self {
        Self::from_step(move |_cursor| Err(error.clone()))
    }

    /// Apply a pure function to the decoded value.
    ///
    /// Consumes nothing extra and cannot newly fail.
    pub fn map<B, F>(self, f: F) -> Get<B>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        Get::from_step(move |cursor| (self.step)(cursor).map(&f))
    }

    /// Run this step, then use its value to select and run the next one,
    /// carrying the cursor through in sequence.
    ///
    /// If this step fails, `f` is never invoked and the failure
    /// propagates unchanged.
    pub fn and_then<B, F>(self, f: F) -> Get<B>
    where
        B: 'static,
        F: Fn(A) -> Get<B> + 'static,
    {
        Get::from_step(move |cursor| {
            let value = (self.step)(cursor)?;
            f(value).run_with(cursor)
        })
    }

    /// Run against `input` from the start.
    ///
    /// On success returns the value and the final cursor position.
    /// Residual bytes are not rejected; trailing-data policy belongs to
    /// the caller.
    pub fn run(&self, input: &[u8]) -> Result<(A, usize)> {
        self.run_from(input, 0)
    }

    /// Run against `input` starting at `offset`.
    pub fn run_from(&self, input: &[u8], offset: usize) -> Result<(A, usize)> {
        let mut cursor = Cursor::with_offset(input, offset);
        let value = self.run_with(&mut cursor)?;
        Ok((value, cursor.position()))
    }

    #[inline]
    pub(crate) fn run_with(&self, cursor: &mut Cursor<'_>) -> Result<A> {
        (self.step)(cursor)
    }
}
