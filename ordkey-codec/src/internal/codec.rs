pub use crate::{DecodeError, Result};

/// Longest fragment any codec in this crate writes, marker included.
///
/// Descending decode complements at most this many bytes into a stack buffer.
pub const MAX_FRAGMENT_LEN: usize = 9;

/// Sort direction a fragment is encoded for.
///
/// Not stored anywhere: callers pick it per field when building and reading
/// keys. `Descending` bytes are the bitwise complement of `Ascending` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Map a byte written in this direction to its ascending form (and back).
    #[inline]
    pub const fn apply(self, byte: u8) -> u8 {
        match self {
            Direction::Ascending => byte,
            Direction::Descending => !byte,
        }
    }

    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

/// A zero-overhead, ascending codec for a single scalar type.
///
/// Implementors follow the buffer composition contract: `encode_into`
/// only appends to `dst`, and `decode` consumes exactly one fragment and
/// hands back the unconsumed tail so fields can be read one after another.
pub trait Codec {
    /// Longest fragment this codec writes, marker included.
    const MAX_WIDTH: usize;

    type Value: Copy;

    fn encode_into(dst: &mut Vec<u8>, v: Self::Value);

    fn decode(src: &[u8]) -> Result<(&[u8], Self::Value)>;
}

/// Encode with `C` in the requested direction.
#[inline]
pub fn encode_directed<C: Codec>(dst: &mut Vec<u8>, v: C::Value, dir: Direction) {
    match dir {
        Direction::Ascending => C::encode_into(dst, v),
        Direction::Descending => super::Descending::<C>::encode_into(dst, v),
    }
}

/// Decode with `C` in the requested direction.
#[inline]
pub fn decode_directed<C: Codec>(src: &[u8], dir: Direction) -> Result<(&[u8], C::Value)> {
    match dir {
        Direction::Ascending => C::decode(src),
        Direction::Descending => super::Descending::<C>::decode(src),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_apply_is_an_involution() {
        for dir in [Direction::Ascending, Direction::Descending] {
            for b in [0x00u8, 0x01, 0x7F, 0x80, 0xFE, 0xFF] {
                assert_eq!(dir.apply(dir.apply(b)), b);
            }
            assert_eq!(dir.reverse().reverse(), dir);
        }
        assert_eq!(Direction::Descending.apply(0x04), 0xFB);
        assert_eq!(Direction::default(), Direction::Ascending);
        assert_eq!(Direction::Ascending.reverse(), Direction::Descending);
    }
}
