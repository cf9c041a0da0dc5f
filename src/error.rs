//! Error types for Huffman table construction and decoding.

/// Error type for canonical Huffman table construction.
///
/// Validation stops at the first violation; variants carry the offending
/// symbol id where one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InitializeError {
    /// Symbol ids must be assigned sequentially from zero.
    #[error("symbol id out of sequence at {0}")]
    NonSequentialSymbolId(u16),

    /// Codeword lengths must lie in 1..=32 bits.
    #[error("codeword length out of range at symbol {0}")]
    LengthOutOfRange(u16),

    /// A codeword must occupy only the top `length` bits of its code word.
    #[error("codeword has bits set below its length at symbol {0}")]
    NonZeroPadBitsInCode(u16),

    /// Codes must follow the canonical progression, starting from zero.
    #[error("non-canonical codeword at symbol {0}")]
    NonCanonicalCode(u16),

    /// The canonical progression exhausted the code space: some codeword
    /// is too short for its position.
    #[error("code space exhausted at symbol {0}")]
    KraftOverflow(u16),

    /// The longest codeword must span at least eight bits so a full byte
    /// of pad bits exists.
    #[error("no codeword long enough to derive pad bits")]
    NoLength8Symbol,
}

impl InitializeError {
    /// The symbol id validation failed at, if one was identified.
    pub fn failed_symbol_id(&self) -> Option<u16> {
        match *self {
            Self::NonSequentialSymbolId(at)
            | Self::LengthOutOfRange(at)
            | Self::NonZeroPadBitsInCode(at)
            | Self::NonCanonicalCode(at)
            | Self::KraftOverflow(at) => Some(at),
            Self::NoLength8Symbol => None,
        }
    }
}

/// Error type for Huffman decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The bit stream reached a prefix no codeword covers.
    #[error("invalid codeword prefix")]
    InvalidPrefix,

    /// Decoding would exceed the caller's output length cap.
    #[error("decoded output would exceed the length cap")]
    OutputOverflow,

    /// More than seven bits trail the last codeword, or the trailing bits
    /// do not match the pad bits.
    #[error("trailing bits are not valid padding")]
    TrailingGarbage,
}

/// Error type for HPACK string-literal decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LiteralError {
    /// Need more data to complete parsing.
    /// This is not a fatal error - the caller should buffer more data and retry.
    #[error("incomplete data")]
    Incomplete,

    /// A prefixed integer kept its continuation bit set past the
    /// supported range.
    #[error("prefixed integer overflow")]
    IntegerOverflow,

    /// The Huffman payload failed to decode.
    #[error("huffman: {0}")]
    Huffman(#[from] DecodeError),
}
