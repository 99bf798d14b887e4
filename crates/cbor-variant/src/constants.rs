//! Wire constants.

// MAJOR type values (bits 7-5 of the initial byte)
pub const MAJOR_UIN: u8 = 0b000;
pub const MAJOR_NIN: u8 = 0b001;
pub const MAJOR_BIN: u8 = 0b010;
pub const MAJOR_STR: u8 = 0b011;
pub const MAJOR_ARR: u8 = 0b100;
pub const MAJOR_MAP: u8 = 0b101;
pub const MAJOR_TAG: u8 = 0b110;
pub const MAJOR_TKN: u8 = 0b111;

// MAJOR type overlays (major shifted to bits 7-5)
pub const OVERLAY_UIN: u8 = MAJOR_UIN << 5;
pub const OVERLAY_NIN: u8 = MAJOR_NIN << 5;
pub const OVERLAY_BIN: u8 = MAJOR_BIN << 5;
pub const OVERLAY_STR: u8 = MAJOR_STR << 5;
pub const OVERLAY_ARR: u8 = MAJOR_ARR << 5;
pub const OVERLAY_MAP: u8 = MAJOR_MAP << 5;
pub const OVERLAY_TKN: u8 = MAJOR_TKN << 5;

pub const MINOR_MASK: u8 = 0b11111;

/// Largest argument that is embedded directly in the initial byte.
pub const MAX_IMMEDIATE: u8 = 23;

// Minor codes announcing a 1/2/4/8 byte argument.
pub const MINOR_U8: u8 = 24;
pub const MINOR_U16: u8 = 25;
pub const MINOR_U32: u8 = 26;
pub const MINOR_U64: u8 = 27;

/// Indefinite-length marker; rejected by the decoder.
pub const MINOR_INDEFINITE: u8 = 31;

// Major type 7 minor codes.
pub const MINOR_FALSE: u8 = 20;
pub const MINOR_TRUE: u8 = 21;
pub const MINOR_NULL: u8 = 22;
pub const MINOR_F16: u8 = MINOR_U16;
pub const MINOR_F32: u8 = MINOR_U32;
pub const MINOR_F64: u8 = MINOR_U64;

pub const CBOR_FALSE: u8 = OVERLAY_TKN | MINOR_FALSE;
pub const CBOR_TRUE: u8 = OVERLAY_TKN | MINOR_TRUE;
pub const CBOR_NULL: u8 = OVERLAY_TKN | MINOR_NULL;
pub const CBOR_F64: u8 = OVERLAY_TKN | MINOR_F64;
