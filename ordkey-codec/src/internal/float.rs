use super::*;

/// Order-preserving f64 codec (ascending).
///
/// Layout: `[marker]` for NaN and zero, `[marker][be64 payload]` otherwise.
///
/// * Positive values store their IEEE-754 bits unchanged; with the sign bit
///   clear, the unsigned bit pattern already grows with the value.
/// * Negative values store the complement of their bits, which turns
///   "larger magnitude" into "smaller payload".
/// * Both zeros collapse onto one marker and decode as `+0.0`. All NaN
///   payloads collapse onto one marker and decode as `f64::NAN`.
pub struct OrderedF64;

impl OrderedF64 {
    const PAYLOAD: usize = 8;
}

impl Codec for OrderedF64 {
    const MAX_WIDTH: usize = 1 + Self::PAYLOAD;
    type Value = f64;

    #[inline]
    fn encode_into(dst: &mut Vec<u8>, v: f64) {
        if v.is_nan() {
            dst.push(Marker::FloatNaN.ascending());
            return;
        }
        if v == 0.0 {
            dst.push(Marker::FloatZero.ascending());
            return;
        }
        let bits = v.to_bits();
        dst.reserve(Self::MAX_WIDTH);
        if v.is_sign_negative() {
            dst.push(Marker::FloatNeg.ascending());
            dst.extend_from_slice(&(!bits).to_be_bytes());
        } else {
            dst.push(Marker::FloatPos.ascending());
            dst.extend_from_slice(&bits.to_be_bytes());
        }
    }

    #[inline]
    fn decode(src: &[u8]) -> Result<(&[u8], f64)> {
        let Some((&byte, rest)) = src.split_first() else {
            return Err(DecodeError::truncated(1, 0));
        };
        match Marker::from_ascending(byte) {
            Some(Marker::FloatNaN) => Ok((rest, f64::NAN)),
            Some(Marker::FloatZero) => Ok((rest, 0.0)),
            Some(marker @ (Marker::FloatNeg | Marker::FloatPos)) => {
                let Some((payload, rest)) = rest.split_first_chunk::<8>() else {
                    return Err(DecodeError::truncated(Self::MAX_WIDTH, src.len()));
                };
                let bits = u64::from_be_bytes(*payload);
                let bits = if marker == Marker::FloatNeg { !bits } else { bits };
                Ok((rest, f64::from_bits(bits)))
            }
            Some(Marker::Null) | None => Err(DecodeError::InvalidMarker { byte }),
        }
    }
}
