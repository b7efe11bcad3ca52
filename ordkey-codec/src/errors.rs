use thiserror::Error;

/// Error type for decoding operations.
///
/// Encoding never fails: every value the codecs accept has a defined
/// fragment. Decoding fails only when the input is too short or starts with
/// a byte that is not a marker the requested codec understands.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The input slice ends before a complete fragment could be read.
    ///
    /// `needed` is the full fragment length implied by the marker (or `1`
    /// when even the marker is missing); `available` is what the slice held.
    #[error("truncated key fragment: needed {needed} bytes, {available} available")]
    Truncated { needed: usize, available: usize },

    /// The leading byte is not a marker this codec accepts in the requested
    /// direction. `byte` is reported exactly as it appeared in the input.
    #[error("invalid key marker 0x{byte:02x}")]
    InvalidMarker { byte: u8 },

    /// A composite key still held bytes after its last expected field.
    #[error("{remaining} trailing bytes after the last key field")]
    TrailingBytes { remaining: usize },
}

impl DecodeError {
    #[inline]
    pub(crate) fn truncated(needed: usize, available: usize) -> Self {
        DecodeError::Truncated { needed, available }
    }

    /// Map an error raised while decoding a complemented copy of the input
    /// back to the bytes the caller actually passed in.
    #[inline]
    pub(crate) fn uncomplement(self) -> Self {
        match self {
            DecodeError::InvalidMarker { byte } => DecodeError::InvalidMarker { byte: !byte },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;
