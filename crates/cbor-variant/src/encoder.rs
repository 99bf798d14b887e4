//! Serializes a [`Value`] tree to CBOR.

use cbor_variant_buffers::Writer;

use crate::constants::*;
use crate::{Integer, Value};

/// Encoder for the [`Value`] model.
///
/// Integers, lengths and counts always use the shortest header that holds
/// them. Floats are always written as 8-byte doubles.
pub struct CborEncoder {
    pub writer: Writer,
}

impl Default for CborEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl CborEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    pub fn with_writer(writer: Writer) -> Self {
        Self { writer }
    }

    /// Encode a value and return the CBOR bytes.
    pub fn encode(&mut self, value: &Value) -> Vec<u8> {
        self.writer.reset();
        self.write_any(value);
        let bytes = self.writer.flush();
        log::trace!("encoded {} as {} bytes", value.kind(), bytes.len());
        bytes
    }

    /// Encode a value and append the bytes to `out`.
    pub fn encode_onto(&mut self, value: &Value, out: &mut Vec<u8>) {
        self.writer.reset();
        self.write_any(value);
        self.writer.flush_onto(out);
    }

    /// Writes `value` and everything nested in it.
    ///
    /// Containers are walked with a heap-allocated work stack, so nesting
    /// depth is bounded by memory rather than by the thread's stack.
    pub fn write_any(&mut self, value: &Value) {
        let mut stack: Vec<&Value> = Vec::new();
        let mut next = Some(value);
        while let Some(value) = next.take().or_else(|| stack.pop()) {
            match value {
                Value::Null => self.write_null(),
                Value::Bool(b) => self.write_boolean(*b),
                Value::Integer(i) => self.write_integer(*i),
                Value::Float(f) => self.write_float(*f),
                Value::Text(s) => self.write_str(s),
                Value::Bytes(b) => self.write_bin(b),
                Value::Array(items) => {
                    self.write_arr_hdr(items.len());
                    stack.extend(items.iter().rev());
                }
                Value::Map(pairs) => {
                    self.write_map_hdr(pairs.len());
                    for (key, value) in pairs.iter().rev() {
                        stack.push(value);
                        stack.push(key);
                    }
                }
            }
        }
    }

    pub fn write_null(&mut self) {
        self.writer.u8(CBOR_NULL);
    }

    pub fn write_boolean(&mut self, b: bool) {
        self.writer.u8(if b { CBOR_TRUE } else { CBOR_FALSE });
    }

    pub fn write_integer(&mut self, int: Integer) {
        match int.to_argument() {
            (false, uint) => self.write_u_integer(uint),
            (true, arg) => self.write_n_integer(arg),
        }
    }

    pub fn write_u_integer(&mut self, uint: u64) {
        self.write_hdr(OVERLAY_UIN, uint);
    }

    /// Writes a negative integer given its argument, i.e. `-1 - value`.
    pub fn write_n_integer(&mut self, arg: u64) {
        self.write_hdr(OVERLAY_NIN, arg);
    }

    pub fn write_float(&mut self, float: f64) {
        self.writer.u8f64(CBOR_F64, float);
    }

    pub fn write_bin(&mut self, buf: &[u8]) {
        self.write_hdr(OVERLAY_BIN, buf.len() as u64);
        self.writer.buf(buf);
    }

    pub fn write_str(&mut self, s: &str) {
        self.write_hdr(OVERLAY_STR, s.len() as u64);
        self.writer.utf8(s);
    }

    pub fn write_arr(&mut self, items: &[Value]) {
        self.write_arr_hdr(items.len());
        for item in items {
            self.write_any(item);
        }
    }

    pub fn write_arr_hdr(&mut self, length: usize) {
        self.write_hdr(OVERLAY_ARR, length as u64);
    }

    pub fn write_map(&mut self, pairs: &[(Value, Value)]) {
        self.write_map_hdr(pairs.len());
        for (key, value) in pairs {
            self.write_any(key);
            self.write_any(value);
        }
    }

    pub fn write_map_hdr(&mut self, length: usize) {
        self.write_hdr(OVERLAY_MAP, length as u64);
    }

    /// Writes an initial byte for `overlay` followed by the minimal-width
    /// argument.
    pub fn write_hdr(&mut self, overlay: u8, arg: u64) {
        let w = &mut self.writer;
        if arg <= MAX_IMMEDIATE as u64 {
            w.u8(overlay | arg as u8);
        } else if arg <= 0xff {
            w.u8(overlay | MINOR_U8);
            w.u8(arg as u8);
        } else if arg <= 0xffff {
            w.u8(overlay | MINOR_U16);
            w.u16(arg as u16);
        } else if arg <= 0xffff_ffff {
            w.u8(overlay | MINOR_U32);
            w.u32(arg as u32);
        } else {
            w.u8u64(overlay | MINOR_U64, arg);
        }
    }
}
