//! Shared convenience wrappers for encode/decode.

use crate::{CborDecoder, CborEncoder, CborError, Value};

/// Encode a [`Value`] into CBOR bytes.
pub fn encode(data: &Value) -> Vec<u8> {
    let mut encoder = CborEncoder::new();
    encoder.encode(data)
}

/// Encode a [`Value`] and append the bytes to `out`.
pub fn encode_onto(data: &Value, out: &mut Vec<u8>) {
    let mut encoder = CborEncoder::new();
    encoder.encode_onto(data, out);
}

/// Decode the first value in `blob` with the default limits.
pub fn decode(blob: &[u8]) -> Result<Value, CborError> {
    CborDecoder::new().decode(blob)
}

/// Decode the first value in `blob` and report the bytes consumed.
pub fn decode_with_consumed(blob: &[u8]) -> Result<(Value, usize), CborError> {
    CborDecoder::new().decode_with_consumed(blob)
}
