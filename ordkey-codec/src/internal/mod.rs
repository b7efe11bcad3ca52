//! Order-preserving scalar codecs + value-side `encode_into`.
//!
//! Every codec here writes fragments whose unsigned lexicographic order
//! matches the value order, so index keys can be compared with `memcmp`.
//!
//! - `OrderedF64`: `[marker]` or `[marker][be64 bits]`; negatives store the
//!   complemented bits.
//! - `Null`: a single marker byte, lowest of all fragments.
//! - `Descending<C>`: any codec above with every byte complemented.
//!
//! All marker bytes come from the shared `Marker` registry.

#![forbid(unsafe_code)]

pub mod codec;
pub use codec::*;

pub mod descending;
pub use descending::*;

pub mod float;
pub use float::*;

pub mod marker;
pub use marker::*;

pub mod null;
pub use null::*;

/* ---------------------- Value-side encode convenience ------------------- */

/// Default, value-side encoding: `v.encode_into(&mut buf, dir)`.
///
/// One default codec per native type to keep call sites simple.
pub trait EncodeInto {
    fn encode_into(&self, dst: &mut Vec<u8>, dir: Direction);
}

// f64 → OrderedF64
impl EncodeInto for f64 {
    #[inline]
    fn encode_into(&self, dst: &mut Vec<u8>, dir: Direction) {
        encode_directed::<OrderedF64>(dst, *self, dir);
    }
}

// None → Null, Some(x) → x's codec
impl<T: EncodeInto> EncodeInto for Option<T> {
    #[inline]
    fn encode_into(&self, dst: &mut Vec<u8>, dir: Direction) {
        match self {
            Some(v) => v.encode_into(dst, dir),
            None => encode_directed::<Null>(dst, (), dir),
        }
    }
}
