//! IEEE 754 half-precision widening.

const SIGN_MASK: u16 = 0x8000;
const EXP_MASK: u16 = 0x7c00;
const FRAC_MASK: u16 = 0x03ff;

/// Widens the raw bits of a half-precision float to `f64`.
///
/// Every half-precision value, including subnormals, infinities and the sign
/// of zero, is exactly representable as `f64`.
///
/// # Example
///
/// ```
/// use cbor_variant_buffers::decode_f16;
///
/// assert_eq!(decode_f16(0x3c00), 1.0);
/// assert_eq!(decode_f16(0xc400), -4.0);
/// assert!(decode_f16(0x8000).is_sign_negative());
/// assert!(decode_f16(0x7e00).is_nan());
/// ```
pub fn decode_f16(binary: u16) -> f64 {
    let negative = binary & SIGN_MASK != 0;
    let exponent = (binary & EXP_MASK) >> 10;
    let fraction = binary & FRAC_MASK;

    let magnitude = match exponent {
        // 2^-14 * (fraction / 2^10)
        0 => f64::from(fraction) * f64::powi(2.0, -24),
        0x1f if fraction == 0 => f64::INFINITY,
        0x1f => f64::NAN,
        _ => {
            let exp = u64::from(exponent) + 1023 - 15;
            f64::from_bits((exp << 52) | (u64::from(fraction) << 42))
        }
    };

    if negative {
        -magnitude
    } else {
        magnitude
    }
}
