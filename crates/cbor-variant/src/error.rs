use thiserror::Error;

/// Error type for CBOR encoding/decoding operations.
///
/// Offsets are byte positions in the decoded buffer and point at the initial
/// byte of the item that failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CborError {
    #[error("unexpected end of input in item at offset {offset}")]
    UnexpectedEndOfInput { offset: usize },
    #[error("invalid initial byte 0x{byte:02x} at offset {offset}")]
    InvalidTag { byte: u8, offset: usize },
    #[error("invalid UTF-8 in text string at offset {offset}")]
    InvalidUtf8 { offset: usize },
    #[error("integer {0} out of range for the target type")]
    IntegerOverflow(i128),
    #[error("nesting deeper than {max_depth} levels")]
    DepthExceeded { max_depth: usize },
    #[error("trailing bytes: decoded {consumed} of {len}")]
    TrailingBytes { consumed: usize, len: usize },
    #[error("value has no JSON representation: {0}")]
    NotJsonCompatible(&'static str),
}
