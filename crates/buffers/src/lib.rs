//! Binary buffer primitives for cbor-variant.
//!
//! - [`Reader`] - bounds-checked big-endian reads from a byte slice
//! - [`Writer`] - big-endian writes into an auto-growing buffer
//! - [`decode_f16`] - half-precision float widening
//! - [`HexPreview`] - hex dump of a byte slice for log records
//!
//! # Example
//!
//! ```
//! use cbor_variant_buffers::{Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.u8(0x01);
//! writer.u16(0x0203);
//! writer.utf8("hello");
//! let data = writer.flush();
//!
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.u8(), Ok(0x01));
//! assert_eq!(reader.u16(), Ok(0x0203));
//! assert_eq!(reader.utf8(5), Ok("hello"));
//! ```

mod f16;
mod hex;
mod reader;
mod writer;

pub use f16::decode_f16;
pub use hex::HexPreview;
pub use reader::Reader;
pub use writer::Writer;

/// Error type for buffer operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    EndOfBuffer,
    /// Invalid UTF-8 sequence.
    InvalidUtf8,
}

impl std::fmt::Display for BufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferError::EndOfBuffer => write!(f, "end of buffer"),
            BufferError::InvalidUtf8 => write!(f, "invalid UTF-8 sequence"),
        }
    }
}

impl std::error::Error for BufferError {}
