use super::*;

/// Codec for an absent field value: a lone `Marker::Null` byte.
///
/// Sorts before every other fragment ascending, after every other fragment
/// descending.
pub struct Null;

impl Codec for Null {
    const MAX_WIDTH: usize = 1;
    type Value = ();

    #[inline]
    fn encode_into(dst: &mut Vec<u8>, _: ()) {
        dst.push(Marker::Null.ascending());
    }

    #[inline]
    fn decode(src: &[u8]) -> Result<(&[u8], ())> {
        match src.split_first() {
            None => Err(DecodeError::truncated(1, 0)),
            Some((&byte, rest)) if byte == Marker::Null.ascending() => Ok((rest, ())),
            Some((&byte, _)) => Err(DecodeError::InvalidMarker { byte }),
        }
    }
}
