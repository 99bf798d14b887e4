//! Hex previews of byte slices for diagnostics.

use std::fmt;

/// Lazily formats at most `max` bytes of a slice as space separated hex.
///
/// ```
/// use cbor_variant_buffers::HexPreview;
///
/// assert_eq!(HexPreview::new(&[0x01, 0x0a, 0xff], 16).to_string(), "01 0a ff");
/// assert_eq!(HexPreview::new(&[0u8; 5], 2).to_string(), "00 00 .. (+3)");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HexPreview<'a> {
    octets: &'a [u8],
    max: usize,
}

impl<'a> HexPreview<'a> {
    pub fn new(octets: &'a [u8], max: usize) -> Self {
        Self { octets, max }
    }
}

impl fmt::Display for HexPreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.octets.iter().take(self.max).enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{byte:02x}")?;
        }
        if self.octets.len() > self.max {
            write!(f, " .. (+{})", self.octets.len() - self.max)?;
        }
        Ok(())
    }
}
