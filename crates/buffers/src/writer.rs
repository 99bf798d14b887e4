//! Auto-growing binary writer.

/// A binary writer that appends big-endian values to an owned buffer.
///
/// The buffer grows on demand. [`Writer::flush`] hands the written bytes to
/// the caller and leaves the writer empty, ready for the next value.
///
/// # Example
///
/// ```
/// use cbor_variant_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(0x19);
/// writer.u16(0x01f4);
/// assert_eq!(writer.flush(), vec![0x19, 0x01, 0xf4]);
/// assert!(writer.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Writer {
    /// Bytes written so far.
    pub uint8: Vec<u8>,
}

impl Writer {
    /// Default initial allocation, in bytes.
    pub const ALLOC_SIZE: usize = 1024;

    pub fn new() -> Self {
        Self::with_alloc_size(Self::ALLOC_SIZE)
    }

    /// Creates a writer with a custom initial allocation.
    pub fn with_alloc_size(alloc_size: usize) -> Self {
        Self {
            uint8: Vec::with_capacity(alloc_size),
        }
    }

    /// Number of bytes written since the last flush.
    pub fn len(&self) -> usize {
        self.uint8.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uint8.is_empty()
    }

    /// Reserves room for at least `capacity` more bytes.
    pub fn ensure_capacity(&mut self, capacity: usize) {
        self.uint8.reserve(capacity);
    }

    /// Discards everything written so far, keeping the allocation.
    pub fn reset(&mut self) {
        self.uint8.clear();
    }

    /// Returns the written bytes and resets the writer.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.uint8)
    }

    /// Appends the written bytes to `out` and resets the writer.
    pub fn flush_onto(&mut self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.uint8);
        self.uint8.clear();
    }

    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.uint8.push(val);
    }

    #[inline]
    pub fn u16(&mut self, val: u16) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    #[inline]
    pub fn u32(&mut self, val: u32) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    #[inline]
    pub fn u64(&mut self, val: u64) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    #[inline]
    pub fn f64(&mut self, val: f64) {
        self.uint8.extend_from_slice(&val.to_be_bytes());
    }

    /// Writes a marker byte followed by a big-endian `u64`.
    #[inline]
    pub fn u8u64(&mut self, marker: u8, val: u64) {
        self.ensure_capacity(9);
        self.u8(marker);
        self.u64(val);
    }

    /// Writes a marker byte followed by a big-endian `f64`.
    #[inline]
    pub fn u8f64(&mut self, marker: u8, val: f64) {
        self.ensure_capacity(9);
        self.u8(marker);
        self.f64(val);
    }

    /// Appends raw bytes.
    pub fn buf(&mut self, buf: &[u8]) {
        self.uint8.extend_from_slice(buf);
    }

    /// Appends the UTF-8 bytes of `s`, returning the byte length written.
    pub fn utf8(&mut self, s: &str) -> usize {
        self.uint8.extend_from_slice(s.as_bytes());
        s.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_endian_layout() {
        let mut w = Writer::new();
        w.u16(0x0102);
        w.u32(0x03040506);
        w.u64(0x0708090a0b0c0d0e);
        assert_eq!(
            w.flush(),
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14]
        );
    }

    #[test]
    fn test_marker_writes() {
        let mut w = Writer::with_alloc_size(0);
        w.u8f64(0xfb, 1.5);
        let bytes = w.flush();
        assert_eq!(bytes[0], 0xfb);
        assert_eq!(&bytes[1..], &1.5f64.to_be_bytes());
    }

    #[test]
    fn test_flush_hands_over_buffer() {
        let mut w = Writer::new();
        w.u32(7);
        let ptr = w.uint8.as_ptr();
        let bytes = w.flush();
        assert_eq!(bytes.as_ptr(), ptr);
        assert_eq!(bytes, vec![0, 0, 0, 7]);
        assert_eq!(w.uint8.capacity(), 0);
        w.u8(1);
        assert_eq!(w.flush(), vec![1]);
    }

    #[test]
    fn test_flush_onto_appends() {
        let mut out = vec![0xaa];
        let mut w = Writer::new();
        w.buf(&[0x01, 0x02]);
        w.flush_onto(&mut out);
        assert_eq!(out, vec![0xaa, 0x01, 0x02]);
        assert!(w.is_empty());
    }

    #[test]
    fn test_utf8_returns_byte_len() {
        let mut w = Writer::new();
        assert_eq!(w.utf8("€"), 3);
        assert_eq!(w.len(), 3);
    }
}
