//! Compact binary codec for a closed value model.
//!
//! The wire format is the definite-length subset of CBOR (RFC 8949):
//! unsigned and negative integers, byte and text strings, arrays, maps,
//! booleans, null and 64-bit floats. Every item starts with an initial byte
//! `[3-bit major type | 5-bit argument]`; arguments above 23 follow in 1, 2,
//! 4 or 8 big-endian bytes.
//!
//! # Example
//!
//! ```
//! use cbor_variant::{decode, encode, Value};
//!
//! let value = Value::Map(vec![
//!     (Value::from("one"), Value::from(1)),
//!     (Value::from("two"), Value::from("deux")),
//! ]);
//! let bytes = encode(&value);
//! assert_eq!(bytes[0], 0xa2);
//! assert_eq!(decode(&bytes).unwrap(), value);
//! ```

mod config;
pub mod constants;
mod convert;
mod decoder;
mod encoder;
mod error;
mod integer;
mod sequence;
mod shared;
mod value;

pub use config::DecoderConfig;
pub use convert::{json_to_value, value_to_json};
pub use decoder::CborDecoder;
pub use encoder::CborEncoder;
pub use error::CborError;
pub use integer::Integer;
pub use sequence::CborSequence;
pub use shared::{decode, decode_with_consumed, encode, encode_onto};
pub use value::{Value, ValueKind};
