//! Order-preserving byte encodings for scalar key fields.
//!
//! Every fragment produced here compares, as an unsigned byte string,
//! exactly like the value it encodes (ascending) or exactly opposite to it
//! (descending). Index entries and range-scannable keys are concatenations
//! of such fragments, so the storage layer can order and seek them with a
//! plain `memcmp`.
//!
//! # Buffer composition
//!
//! Encoders only ever append to a caller-owned buffer. Decoders consume one
//! fragment and return the unconsumed tail alongside the value, so a key
//! built from several fields is read back by decoding repeatedly:
//!
//! ```
//! use ordkey_codec::{decode_f64_ascending, decode_f64_descending};
//! use ordkey_codec::{encode_f64_ascending, encode_f64_descending};
//!
//! let key = encode_f64_ascending(b"t1/".to_vec(), 12.5);
//! let key = encode_f64_descending(key, -1.0);
//!
//! let (rest, a) = decode_f64_ascending(&key[3..]).unwrap();
//! let (rest, b) = decode_f64_descending(rest).unwrap();
//! assert_eq!((a, b), (12.5, -1.0));
//! assert!(rest.is_empty());
//! ```
//!
//! # Wire format
//!
//! | Class    | Ascending marker | Payload                         |
//! |----------|------------------|---------------------------------|
//! | Null     | `0x00`           | none                            |
//! | NaN      | `0x01`           | none                            |
//! | Negative | `0x02`           | `!bits`, big-endian             |
//! | Zero     | `0x03`           | none (both signs)               |
//! | Positive | `0x04`           | `bits`, big-endian              |
//!
//! Descending fragments are the bitwise complement of the ascending ones.

mod internal;
pub use crate::internal::{
    Codec, Descending, Direction, EncodeInto, MAX_FRAGMENT_LEN, Marker, Null, OrderedF64,
    complement, decode_directed, encode_directed,
};

pub mod errors;
pub use errors::*;

pub mod key;
pub use key::{KeyBuilder, KeyBytes, KeyReader};

/// A scalar read back from a key without knowing its codec up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DecodedValue {
    Null,
    F64(f64),
}

impl From<f64> for DecodedValue {
    fn from(v: f64) -> Self {
        DecodedValue::F64(v)
    }
}

impl From<Option<f64>> for DecodedValue {
    fn from(v: Option<f64>) -> Self {
        v.map_or(DecodedValue::Null, DecodedValue::F64)
    }
}

/* ------------------------------ f64 fields ------------------------------ */

/// Append the `dir` fragment for `v` to `dst`.
#[inline]
pub fn encode_f64(dst: &mut Vec<u8>, v: f64, dir: Direction) {
    encode_directed::<OrderedF64>(dst, v, dir);
}

/// Decode one f64 fragment written in `dir`; returns the remainder and value.
#[inline]
pub fn decode_f64(src: &[u8], dir: Direction) -> Result<(&[u8], f64)> {
    decode_directed::<OrderedF64>(src, dir)
}

/// Append the ascending fragment for `v` and return the extended buffer.
#[inline]
pub fn encode_f64_ascending(mut buf: Vec<u8>, v: f64) -> Vec<u8> {
    encode_f64(&mut buf, v, Direction::Ascending);
    buf
}

/// Append the descending fragment for `v` and return the extended buffer.
#[inline]
pub fn encode_f64_descending(mut buf: Vec<u8>, v: f64) -> Vec<u8> {
    encode_f64(&mut buf, v, Direction::Descending);
    buf
}

#[inline]
pub fn decode_f64_ascending(src: &[u8]) -> Result<(&[u8], f64)> {
    decode_f64(src, Direction::Ascending)
}

#[inline]
pub fn decode_f64_descending(src: &[u8]) -> Result<(&[u8], f64)> {
    decode_f64(src, Direction::Descending)
}

/* ------------------------------ Null fields ----------------------------- */

#[inline]
pub fn encode_null(dst: &mut Vec<u8>, dir: Direction) {
    encode_directed::<Null>(dst, (), dir);
}

/// Consume one Null fragment written in `dir`; returns the remainder.
#[inline]
pub fn decode_null(src: &[u8], dir: Direction) -> Result<&[u8]> {
    decode_directed::<Null>(src, dir).map(|(rest, ())| rest)
}

/* ---------------------------- Any scalar field -------------------------- */

/// Length of the fragment at the head of `src`, read from its marker alone.
#[inline]
pub fn peek_length(src: &[u8], dir: Direction) -> Result<usize> {
    internal::peek_fragment_len(src, dir)
}

/// Encode `value` into `out` in `dir`.
/// Appends to `out`.
#[inline]
pub fn encode_value(value: DecodedValue, dir: Direction, out: &mut Vec<u8>) {
    match value {
        DecodedValue::Null => encode_null(out, dir),
        DecodedValue::F64(v) => encode_f64(out, v, dir),
    }
}

/// Decode whichever scalar the marker at the head of `src` announces.
pub fn decode_value(src: &[u8], dir: Direction) -> Result<(&[u8], DecodedValue)> {
    let &byte = src.first().ok_or(DecodeError::truncated(1, 0))?;
    match Marker::from_byte(byte, dir) {
        Some(Marker::Null) => decode_null(src, dir).map(|rest| (rest, DecodedValue::Null)),
        Some(Marker::FloatNaN | Marker::FloatNeg | Marker::FloatZero | Marker::FloatPos) => {
            decode_f64(src, dir).map(|(rest, v)| (rest, DecodedValue::F64(v)))
        }
        None => Err(DecodeError::InvalidMarker { byte }),
    }
}

/// Fold over every field of a composite key.
///
/// `directions` gives one direction per field, in key order. Calls
/// `f(acc, value)` for each field and returns `(accumulator, count)`.
/// Bytes left after the last field are an error.
pub fn decode_reduce<I, T, F>(key: &[u8], directions: I, init: T, mut f: F) -> Result<(T, usize)>
where
    I: IntoIterator<Item = Direction>,
    F: FnMut(T, DecodedValue) -> T,
{
    let mut acc = init;
    let mut n = 0usize;
    let mut rest = key;

    for dir in directions {
        let (tail, v) = decode_value(rest, dir)?;
        acc = f(acc, v);
        rest = tail;
        n += 1;
    }

    if !rest.is_empty() {
        return Err(DecodeError::TrailingBytes {
            remaining: rest.len(),
        });
    }
    Ok((acc, n))
}
