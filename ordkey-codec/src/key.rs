//! Composite key assembly and field-by-field parsing.
//!
//! A key is a plain concatenation of fragments. Each field carries its own
//! direction; the reader must be told the same directions, in the same
//! order, that the builder used.

use crate::internal::{Direction, EncodeInto, Null, encode_directed, peek_fragment_len};
use crate::{DecodedValue, Result, decode_f64, decode_value};

/// Owned bytes of an encoded key.
pub type KeyBytes = Vec<u8>;

/// Appends fragments to a growable key buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyBuilder {
    buf: KeyBytes,
}

impl KeyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Continue an existing key (e.g. a table or index prefix). The prefix
    /// bytes are never modified.
    pub fn from_prefix(prefix: KeyBytes) -> Self {
        Self { buf: prefix }
    }

    #[inline]
    pub fn push<V: EncodeInto + ?Sized>(&mut self, value: &V, dir: Direction) -> &mut Self {
        value.encode_into(&mut self.buf, dir);
        self
    }

    #[inline]
    pub fn push_f64(&mut self, value: f64, dir: Direction) -> &mut Self {
        self.push(&value, dir)
    }

    #[inline]
    pub fn push_null(&mut self, dir: Direction) -> &mut Self {
        encode_directed::<Null>(&mut self.buf, (), dir);
        self
    }

    #[inline]
    pub fn push_opt_f64(&mut self, value: Option<f64>, dir: Direction) -> &mut Self {
        self.push(&value, dir)
    }

    pub fn push_value(&mut self, value: DecodedValue, dir: Direction) -> &mut Self {
        crate::encode_value(value, dir, &mut self.buf);
        self
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> KeyBytes {
        self.buf
    }
}

/// Reads fragments off the front of a borrowed key.
///
/// Each `next_*` call consumes exactly one fragment. A failed call leaves
/// the position where it was.
#[derive(Debug, Clone, Copy)]
pub struct KeyReader<'a> {
    key: &'a [u8],
    pos: usize,
}

impl<'a> KeyReader<'a> {
    pub fn new(key: &'a [u8]) -> Self {
        Self { key, pos: 0 }
    }

    fn advance<T>(
        &mut self,
        dir: Direction,
        read: impl FnOnce(&'a [u8], Direction) -> Result<(&'a [u8], T)>,
    ) -> Result<T> {
        let rest = &self.key[self.pos..];
        match read(rest, dir) {
            Ok((tail, v)) => {
                self.pos += rest.len() - tail.len();
                Ok(v)
            }
            Err(err) => {
                tracing::trace!(position = self.pos, ?dir, %err, "rejected key fragment");
                Err(err)
            }
        }
    }

    pub fn next_f64(&mut self, dir: Direction) -> Result<f64> {
        self.advance(dir, decode_f64)
    }

    /// Like `next_f64`, but a Null fragment reads as `None`.
    pub fn next_opt_f64(&mut self, dir: Direction) -> Result<Option<f64>> {
        self.next_value(dir).map(|v| match v {
            DecodedValue::Null => None,
            DecodedValue::F64(x) => Some(x),
        })
    }

    pub fn next_value(&mut self, dir: Direction) -> Result<DecodedValue> {
        self.advance(dir, decode_value)
    }

    /// Step over one fragment without decoding its payload.
    pub fn skip(&mut self, dir: Direction) -> Result<()> {
        self.advance(dir, |src, dir| {
            peek_fragment_len(src, dir).map(|len| (&src[len..], ()))
        })
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        &self.key[self.pos..]
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos == self.key.len()
    }
}
