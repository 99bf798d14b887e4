//! Back-to-back decoding of concatenated items.

use cbor_variant_buffers::Reader;

use crate::{CborDecoder, CborError, Value};

/// Iterator over the values stored one after another in a buffer.
///
/// Yields each decoded value in order. After the first error it yields that
/// error once and then stops.
pub struct CborSequence<'a> {
    decoder: &'a CborDecoder,
    reader: Reader<'a>,
    failed: bool,
}

impl<'a> CborSequence<'a> {
    pub fn new(decoder: &'a CborDecoder, blob: &'a [u8]) -> Self {
        Self {
            decoder,
            reader: Reader::new(blob),
            failed: false,
        }
    }

    /// Bytes consumed by the values yielded so far.
    pub fn offset(&self) -> usize {
        self.reader.x
    }
}

impl Iterator for CborSequence<'_> {
    type Item = Result<Value, CborError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.reader.is_empty() {
            return None;
        }
        let start = self.reader.x;
        match self.decoder.read_any(&mut self.reader, 0) {
            Ok(value) => Some(Ok(value)),
            Err(err) => {
                log::debug!("cbor sequence stopped at offset {start}: {err}");
                self.reader.x = start;
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl std::iter::FusedIterator for CborSequence<'_> {}
