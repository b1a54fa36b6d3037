//! The [`Put`] builder: an immutable, appendable byte-sequence writer.
use {
    alloc::{sync::Arc, vec, vec::Vec},
    core::{fmt, mem, ops::Add},
};

type Fill = dyn Fn(&mut [u8]) + Send + Sync;

/// An append-only builder of a byte sequence.
///
/// A `Put` wraps a pending fill action together with the exact number of
/// bytes that action will emit. Nothing is written until the caller
/// materializes the bytes with [`Put::to_bytes`] or [`Put::write_into`];
/// the `Put` itself performs no I/O and decides nothing about where the
/// bytes go.
///
/// Concatenation produces a new `Put` whose output is this one's bytes
/// immediately followed by the other's, both layouts unchanged. It is
/// associative, with [`Put::empty`] as the identity. `Put` values are
/// immutable; [`Clone`] is a cheap reference-count bump.
///
/// ```
/// use putget::Put;
///
/// let header = Put::by_writing_bytes(2, |buf| buf.copy_from_slice(b"hi"));
/// let body = Put::from_slice(&[0x01, 0x02]);
/// assert_eq!(header.concat(&body).to_bytes(), [b'h', b'i', 0x01, 0x02]);
/// ```
#[derive(Clone)]
pub struct Put {
    len: usize,
    node: Node,
}

/// Concatenation builds a tree of pending segments; materialization
/// walks it with an explicit stack, so arbitrarily deep chains cannot
/// overflow the call stack.
#[derive(Clone)]
enum Node {
    Empty,
    Leaf(Arc<Fill>),
    Pair(Arc<(Put, Put)>),
}

impl Put {
    /// Construct a `Put` of exactly `len` bytes.
    ///
    /// `fill` is handed a zero-initialized output buffer of length `len`
    /// and must fill it. Writing outside the buffer is a programming
    /// error and panics on slice bounds; it is never silently truncated.
    /// Bytes the action leaves untouched stay zero.
    pub fn by_writing_bytes<F>(len: usize, fill: F) -> Self
    where
        F: Fn(&mut [u8]) + Send + Sync + 'static,
    {
        Self {
            len,
            node: Node::Leaf(Arc::new(fill)),
        }
    }

    /// The zero-byte `Put`, the identity element of [`Put::concat`].
    pub fn empty() -> Self {
        Self {
            len: 0,
            node: Node::Empty,
        }
    }

    /// A `Put` emitting the given bytes verbatim.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self::by_writing_bytes(bytes.len(), move |buf| buf.copy_from_slice(&bytes))
    }

    /// A `Put` emitting a copy of the given bytes verbatim.
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self::from_vec(bytes.to_vec())
    }

    /// Number of bytes this `Put` emits.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// A new `Put` emitting this `Put`'s bytes followed by `other`'s.
    pub fn concat(&self, other: &Put) -> Put {
        Put {
            len: self.len + other.len,
            node: Node::Pair(Arc::new((self.clone(), other.clone()))),
        }
    }

    /// Materialize into a caller-supplied buffer of exactly [`Put::len`]
    /// bytes.
    ///
    /// The buffer is zeroed before the fill actions run. A buffer of any
    /// other length is a caller programming error and panics.
    pub fn write_into(&self, buf: &mut [u8]) {
        assert_eq!(
            buf.len(),
            self.len,
            "output buffer length must equal Put::len",
        );
        buf.fill(0);
        self.fill(buf);
    }

    /// Materialize into a fresh buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = vec![0u8; self.len];
        self.fill(&mut buf);
        buf
    }

    /// Drain the materialized bytes into a caller-chosen sink.
    #[cfg(feature = "std")]
    pub fn write_to<W: std::io::Write>(&self, sink: &mut W) -> std::io::Result<()> {
        sink.write_all(&self.to_bytes())
    }

    fn fill<'b>(&self, buf: &'b mut [u8]) {
        let mut pending: Vec<(&Put, &'b mut [u8])> = vec![(self, buf)];
        while let Some((put, buf)) = pending.pop() {
            match &put.node {
                Node::Empty => {}
                Node::Leaf(fill) => (fill.as_ref())(buf),
                Node::Pair(pair) => {
                    let (front, back) = buf.split_at_mut(pair.0.len);
                    // Back first so the front pops first; order is
                    // cosmetic, the segments are disjoint.
                    pending.push((&pair.1, back));
                    pending.push((&pair.0, front));
                }
            }
        }
    }
}

impl Drop for Put {
    fn drop(&mut self) {
        // Unwind the tree iteratively; recursive drop glue would
        // overflow the stack on long element-wise concat chains.
        if !matches!(self.node, Node::Pair(_)) {
            return;
        }
        let mut pending = vec![mem::replace(&mut self.node, Node::Empty)];
        while let Some(node) = pending.pop() {
            if let Node::Pair(pair) = node {
                if let Ok((mut head, mut tail)) = Arc::try_unwrap(pair) {
                    pending.push(mem::replace(&mut head.node, Node::Empty));
                    pending.push(mem::replace(&mut tail.node, Node::Empty));
                }
            }
        }
    }
}

impl Default for Put {
    fn default() -> Self {
        Self::empty()
    }
}

impl Add for Put {
    type Output = Put;

    fn add(self, rhs: Put) -> Put {
        self.concat(&rhs)
    }
}

impl Add<&Put> for &Put {
    type Output = Put;

    fn add(self, rhs: &Put) -> Put {
        self.concat(rhs)
    }
}

impl fmt::Debug for Put {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Put").field("len", &self.len).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use {super::*, proptest::prelude::*};

    fn strat_put() -> impl Strategy<Value = (Vec<u8>, Put)> {
        proptest::collection::vec(any::<u8>(), 0..=64)
            .prop_map(|bytes| (bytes.clone(), Put::from_slice(&bytes)))
    }

    #[test]
    fn by_writing_bytes_starts_zeroed() {
        let put = Put::by_writing_bytes(4, |buf| buf[1] = 0xff);
        assert_eq!(put.to_bytes(), [0x00, 0xff, 0x00, 0x00]);
    }

    #[test]
    fn empty_is_concat_identity() {
        let put = Put::from_slice(&[1, 2, 3]);
        assert_eq!(Put::empty().concat(&put).to_bytes(), [1, 2, 3]);
        assert_eq!(put.concat(&Put::empty()).to_bytes(), [1, 2, 3]);
        assert_eq!(Put::empty().to_bytes(), []);
    }

    #[test]
    fn concat_preserves_operands() {
        let a = Put::from_slice(&[1]);
        let b = Put::from_slice(&[2]);
        let joined = a.concat(&b);
        // The operands are reusable values, not consumed halves.
        assert_eq!(a.to_bytes(), [1]);
        assert_eq!(b.to_bytes(), [2]);
        assert_eq!(joined.to_bytes(), [1, 2]);
    }

    #[test]
    fn add_operator_concatenates() {
        let joined = Put::from_slice(&[1, 2]) + Put::from_slice(&[3]);
        assert_eq!(joined.len(), 3);
        assert_eq!(joined.to_bytes(), [1, 2, 3]);
    }

    #[test]
    fn deep_concat_chains_materialize() {
        let mut put = Put::empty();
        for i in 0..100_000u32 {
            put = put.concat(&Put::from_slice(&[i as u8]));
        }
        let bytes = put.to_bytes();
        assert_eq!(bytes.len(), 100_000);
        assert_eq!(bytes[255], 255);
        assert_eq!(bytes[256], 0);
    }

    #[test]
    #[should_panic(expected = "output buffer length")]
    fn write_into_rejects_wrong_length() {
        let put = Put::from_slice(&[1, 2, 3]);
        let mut buf = [0u8; 2];
        put.write_into(&mut buf);
    }

    proptest! {
        #[test]
        fn concat_is_associative(
            (a_bytes, a) in strat_put(),
            (b_bytes, b) in strat_put(),
            (c_bytes, c) in strat_put(),
        ) {
            let left = a.concat(&b).concat(&c);
            let right = a.concat(&b.concat(&c));
            prop_assert_eq!(left.to_bytes(), right.to_bytes());

            let mut expected = a_bytes;
            expected.extend_from_slice(&b_bytes);
            expected.extend_from_slice(&c_bytes);
            prop_assert_eq!(left.to_bytes(), expected);
        }

        #[test]
        fn write_into_matches_to_bytes((_, put) in strat_put()) {
            let mut buf = vec![0xaa; put.len()];
            put.write_into(&mut buf);
            prop_assert_eq!(buf, put.to_bytes());
        }
    }
}
