//! Registry of every marker byte that may lead a fragment.
//!
//! Composite keys interleave fragments from different codecs written in
//! different directions, so a marker byte must identify exactly one
//! (marker, direction) pair. All codecs take their marker bytes from here,
//! and the registry is checked for overlaps when the crate is compiled.

use super::{DecodeError, Direction, Result};

/// A leading fragment byte, in its ascending form.
///
/// Discriminants are the ascending bytes; their numeric order is the sort
/// order of the value classes they tag. The descending byte is the
/// complement.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Marker {
    /// Absent field value. Sorts before every float class.
    Null = 0x00,
    FloatNaN = 0x01,
    FloatNeg = 0x02,
    FloatZero = 0x03,
    FloatPos = 0x04,
}

impl Marker {
    /// Every registered marker, in ascending byte order.
    pub const ALL: [Marker; 5] = [
        Marker::Null,
        Marker::FloatNaN,
        Marker::FloatNeg,
        Marker::FloatZero,
        Marker::FloatPos,
    ];

    #[inline]
    pub const fn ascending(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn descending(self) -> u8 {
        !(self as u8)
    }

    /// The byte this marker is written as in `dir`.
    #[inline]
    pub const fn byte(self, dir: Direction) -> u8 {
        dir.apply(self as u8)
    }

    /// Look up the marker whose ascending byte is `byte`.
    pub const fn from_ascending(byte: u8) -> Option<Marker> {
        let mut i = 0;
        while i < Self::ALL.len() {
            if Self::ALL[i] as u8 == byte {
                return Some(Self::ALL[i]);
            }
            i += 1;
        }
        None
    }

    /// Look up the marker written as `byte` in `dir`.
    #[inline]
    pub const fn from_byte(byte: u8, dir: Direction) -> Option<Marker> {
        Self::from_ascending(dir.apply(byte))
    }

    /// Identify both the marker and the direction from a raw byte.
    ///
    /// Unambiguous because the ascending and descending byte sets are
    /// disjoint.
    pub const fn classify(byte: u8) -> Option<(Marker, Direction)> {
        if let Some(m) = Self::from_ascending(byte) {
            return Some((m, Direction::Ascending));
        }
        if let Some(m) = Self::from_ascending(!byte) {
            return Some((m, Direction::Descending));
        }
        None
    }

    /// Total fragment length for this marker, marker byte included.
    #[inline]
    pub const fn fragment_len(self) -> usize {
        match self {
            Marker::FloatNeg | Marker::FloatPos => 9,
            Marker::Null | Marker::FloatNaN | Marker::FloatZero => 1,
        }
    }
}

/// Length of the fragment at the head of `src`, judged from its marker.
pub fn peek_fragment_len(src: &[u8], dir: Direction) -> Result<usize> {
    let &byte = src.first().ok_or(DecodeError::truncated(1, 0))?;
    let marker = Marker::from_byte(byte, dir).ok_or(DecodeError::InvalidMarker { byte })?;
    let len = marker.fragment_len();
    if src.len() < len {
        return Err(DecodeError::truncated(len, src.len()));
    }
    Ok(len)
}

const fn registry_is_sound() -> bool {
    let all = &Marker::ALL;
    let mut i = 0;
    while i < all.len() {
        if all[i].fragment_len() > super::MAX_FRAGMENT_LEN {
            return false;
        }
        // Strictly increasing, so class order holds and no ascending duplicates.
        if i > 0 && all[i - 1] as u8 >= all[i] as u8 {
            return false;
        }
        let mut j = 0;
        while j < all.len() {
            if all[i].ascending() == all[j].descending() {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(
    registry_is_sound(),
    "key marker registry has overlapping or misordered bytes"
);
