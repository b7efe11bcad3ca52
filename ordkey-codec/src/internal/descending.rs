use super::*;
use std::marker::PhantomData;

/// Reverse-sorting view of an ascending codec.
///
/// The fragment is the ascending fragment with every byte complemented,
/// marker included, which reverses unsigned lexicographic order. Only the
/// bytes a codec writes are complemented, so descending fragments of
/// different codecs can share one key.
pub struct Descending<C>(PhantomData<C>);

/// Complement every byte in place.
#[inline]
pub fn complement(bytes: &mut [u8]) {
    for b in bytes {
        *b = !*b;
    }
}

impl<C: Codec> Descending<C> {
    /// Complement up to `C::MAX_WIDTH` leading bytes of `src` into a stack
    /// buffer. Returns the buffer and how many bytes it holds.
    #[inline]
    fn ascending_head(src: &[u8]) -> ([u8; MAX_FRAGMENT_LEN], usize) {
        const { assert!(C::MAX_WIDTH <= MAX_FRAGMENT_LEN) };
        let take = src.len().min(C::MAX_WIDTH);
        let mut head = [0u8; MAX_FRAGMENT_LEN];
        for (dst, &b) in head[..take].iter_mut().zip(src) {
            *dst = !b;
        }
        (head, take)
    }
}

impl<C: Codec> Codec for Descending<C> {
    const MAX_WIDTH: usize = C::MAX_WIDTH;
    type Value = C::Value;

    #[inline]
    fn encode_into(dst: &mut Vec<u8>, v: C::Value) {
        let start = dst.len();
        C::encode_into(dst, v);
        complement(&mut dst[start..]);
    }

    #[inline]
    fn decode(src: &[u8]) -> Result<(&[u8], C::Value)> {
        let (head, take) = Self::ascending_head(src);
        let (rest, v) = C::decode(&head[..take]).map_err(DecodeError::uncomplement)?;
        let consumed = take - rest.len();
        Ok((&src[consumed..], v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desc(v: f64) -> Vec<u8> {
        let mut b = Vec::new();
        Descending::<OrderedF64>::encode_into(&mut b, v);
        b
    }

    #[test]
    fn descending_is_complement_of_ascending() {
        for v in [f64::NAN, -7.5, -0.0, 0.0, 1e-310, f64::INFINITY] {
            let mut asc = Vec::new();
            OrderedF64::encode_into(&mut asc, v);
            let mut expect = asc.clone();
            complement(&mut expect);
            assert_eq!(desc(v), expect, "value {v}");
        }
    }

    #[test]
    fn descending_reverses_order() {
        let mut a = desc(-1.0);
        let b = desc(0.0);
        let c = desc(2.0);
        assert!(a > b && b > c);

        // Prefix bytes written before the fragment are left alone.
        a = b"k".to_vec();
        Descending::<OrderedF64>::encode_into(&mut a, 2.0);
        assert_eq!(&a[..1], b"k");
        assert_eq!(&a[1..], c.as_slice());
    }

    #[test]
    fn descending_decode_returns_remainder() {
        let mut buf = desc(-123.25);
        Descending::<Null>::encode_into(&mut buf, ());
        buf.extend_from_slice(&[0xAB, 0xCD]);

        let (rest, v) = Descending::<OrderedF64>::decode(&buf).unwrap();
        assert_eq!(v, -123.25);
        let (rest, ()) = Descending::<Null>::decode(rest).unwrap();
        assert_eq!(rest, &[0xAB, 0xCD]);
    }

    #[test]
    fn descending_errors_report_input_bytes() {
        assert_eq!(Descending::<OrderedF64>::decode(&[]), Err(DecodeError::truncated(1, 0)));

        let full = desc(5.0);
        assert_eq!(
            Descending::<OrderedF64>::decode(&full[..4]),
            Err(DecodeError::truncated(9, 4))
        );

        // An ascending marker is foreign in a descending field.
        assert_eq!(
            Descending::<OrderedF64>::decode(&[0x04, 0, 0, 0, 0, 0, 0, 0, 0]),
            Err(DecodeError::InvalidMarker { byte: 0x04 })
        );
        assert_eq!(
            Descending::<Null>::decode(&[0x00]),
            Err(DecodeError::InvalidMarker { byte: 0x00 })
        );
    }
}
