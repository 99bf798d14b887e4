//! Rebuilds a [`Value`] tree from CBOR bytes.

use cbor_variant_buffers::{decode_f16, BufferError, HexPreview, Reader};

use crate::constants::*;
use crate::{CborError, CborSequence, DecoderConfig, Integer, Value};

/// Maps a reader failure to the codec error for the item at `offset`.
fn at(offset: usize) -> impl Fn(BufferError) -> CborError {
    move |err| match err {
        BufferError::EndOfBuffer => CborError::UnexpectedEndOfInput { offset },
        BufferError::InvalidUtf8 => CborError::InvalidUtf8 { offset },
    }
}

/// Decoder for the [`Value`] model.
///
/// The decoder holds no per-call state, so a single instance can be shared
/// between threads. Input is never retained past a call.
#[derive(Debug, Clone, Default)]
pub struct CborDecoder {
    config: DecoderConfig,
}

impl CborDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decodes the first value in `blob`. Trailing bytes are ignored.
    pub fn decode(&self, blob: &[u8]) -> Result<Value, CborError> {
        self.decode_with_consumed(blob).map(|(value, _)| value)
    }

    /// Decodes the first value in `blob` and reports how many bytes it used.
    pub fn decode_with_consumed(&self, blob: &[u8]) -> Result<(Value, usize), CborError> {
        let mut reader = Reader::new(blob);
        let result = self.read_any(&mut reader, 0);
        match result {
            Ok(value) => {
                log::trace!("decoded {} from {} bytes", value.kind(), reader.x);
                Ok((value, reader.x))
            }
            Err(err) => {
                log::debug!(
                    "cbor decode failed: {err}; input [{}]",
                    HexPreview::new(blob, 16)
                );
                Err(err)
            }
        }
    }

    /// Decodes exactly one value spanning the whole of `blob`.
    pub fn decode_exact(&self, blob: &[u8]) -> Result<Value, CborError> {
        let (value, consumed) = self.decode_with_consumed(blob)?;
        if consumed != blob.len() {
            return Err(CborError::TrailingBytes {
                consumed,
                len: blob.len(),
            });
        }
        Ok(value)
    }

    /// Iterates over values stored back to back in `blob`.
    pub fn sequence<'a>(&'a self, blob: &'a [u8]) -> CborSequence<'a> {
        CborSequence::new(self, blob)
    }

    /// Decodes one item at the reader's cursor.
    ///
    /// `depth` is the number of enclosing containers. On error the cursor
    /// position is unspecified.
    pub fn read_any(&self, reader: &mut Reader<'_>, depth: usize) -> Result<Value, CborError> {
        let offset = reader.x;
        let octet = reader.u8().map_err(at(offset))?;
        let major = octet >> 5;
        let minor = octet & MINOR_MASK;

        match major {
            MAJOR_UIN => {
                let uint = self.read_arg(reader, octet, offset)?;
                Ok(Value::Integer(Integer::from(uint)))
            }
            MAJOR_NIN => {
                let arg = self.read_arg(reader, octet, offset)?;
                Ok(Value::Integer(Integer::from_negative_argument(arg)))
            }
            MAJOR_BIN => {
                let length = self.read_len(reader, octet, offset)?;
                let bin = reader.buf(length).map_err(at(offset))?;
                Ok(Value::Bytes(bin.to_vec()))
            }
            MAJOR_STR => {
                let length = self.read_len(reader, octet, offset)?;
                let s = reader.utf8(length).map_err(at(offset))?;
                Ok(Value::Text(s.to_owned()))
            }
            MAJOR_ARR => {
                let length = self.read_len(reader, octet, offset)?;
                let depth = self.enter(depth)?;
                // Each element takes at least one byte.
                let mut items = Vec::with_capacity(length.min(reader.size()));
                for _ in 0..length {
                    items.push(self.read_any(reader, depth)?);
                }
                Ok(Value::Array(items))
            }
            MAJOR_MAP => {
                let length = self.read_len(reader, octet, offset)?;
                let depth = self.enter(depth)?;
                let mut pairs = Vec::with_capacity(length.min(reader.size() / 2));
                for _ in 0..length {
                    let key = self.read_any(reader, depth)?;
                    let value = self.read_any(reader, depth)?;
                    pairs.push((key, value));
                }
                Ok(Value::Map(pairs))
            }
            MAJOR_TKN => self.read_tkn(reader, octet, minor, offset),
            // MAJOR_TAG: semantic tags are not part of the value model.
            _ => Err(CborError::InvalidTag {
                byte: octet,
                offset,
            }),
        }
    }

    /// Reads the argument announced by the low five bits of `octet`.
    pub fn read_arg(
        &self,
        reader: &mut Reader<'_>,
        octet: u8,
        offset: usize,
    ) -> Result<u64, CborError> {
        let minor = octet & MINOR_MASK;
        let arg = match minor {
            0..=MAX_IMMEDIATE => u64::from(minor),
            MINOR_U8 => u64::from(reader.u8().map_err(at(offset))?),
            MINOR_U16 => u64::from(reader.u16().map_err(at(offset))?),
            MINOR_U32 => u64::from(reader.u32().map_err(at(offset))?),
            MINOR_U64 => reader.u64().map_err(at(offset))?,
            // 28..=30 reserved, 31 indefinite length
            _ => {
                return Err(CborError::InvalidTag {
                    byte: octet,
                    offset,
                })
            }
        };
        Ok(arg)
    }

    fn read_len(
        &self,
        reader: &mut Reader<'_>,
        octet: u8,
        offset: usize,
    ) -> Result<usize, CborError> {
        let arg = self.read_arg(reader, octet, offset)?;
        usize::try_from(arg).map_err(|_| CborError::IntegerOverflow(i128::from(arg)))
    }

    fn enter(&self, depth: usize) -> Result<usize, CborError> {
        let max_depth = self.config.max_depth;
        if depth >= max_depth {
            log::warn!("cbor nesting limit of {max_depth} reached");
            return Err(CborError::DepthExceeded { max_depth });
        }
        Ok(depth + 1)
    }

    fn read_tkn(
        &self,
        reader: &mut Reader<'_>,
        octet: u8,
        minor: u8,
        offset: usize,
    ) -> Result<Value, CborError> {
        match minor {
            MINOR_FALSE => Ok(Value::Bool(false)),
            MINOR_TRUE => Ok(Value::Bool(true)),
            MINOR_NULL => Ok(Value::Null),
            MINOR_F64 => Ok(Value::Float(reader.f64().map_err(at(offset))?)),
            MINOR_F32 => Ok(Value::Float(f64::from(reader.f32().map_err(at(offset))?))),
            MINOR_F16 => Ok(Value::Float(decode_f16(reader.u16().map_err(at(offset))?))),
            _ => Err(CborError::InvalidTag {
                byte: octet,
                offset,
            }),
        }
    }
}
