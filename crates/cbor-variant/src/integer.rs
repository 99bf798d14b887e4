//! The integer domain of the wire format.
//!
//! Major types 0 and 1 carry a 64-bit argument each, so together they span
//! `-2^64 ..= 2^64 - 1`. That is wider than any primitive 64-bit type, so the
//! value is held in an `i128` whose range is checked on construction.

use std::fmt;

use crate::CborError;

/// A signed integer in `-2^64 ..= 2^64 - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Integer(i128);

impl Integer {
    pub const MIN: Integer = Integer(-(1i128 << 64));
    pub const MAX: Integer = Integer(u64::MAX as i128);

    /// Value of a negative-integer item with the given argument.
    #[inline]
    pub fn from_negative_argument(argument: u64) -> Self {
        Integer(-1 - argument as i128)
    }

    #[inline]
    pub fn get(self) -> i128 {
        self.0
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Wire form: whether the negative major type applies, and the argument.
    #[inline]
    pub fn to_argument(self) -> (bool, u64) {
        if self.0 >= 0 {
            (false, self.0 as u64)
        } else {
            (true, (-1 - self.0) as u64)
        }
    }
}

macro_rules! integer_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Integer {
                #[inline]
                fn from(v: $t) -> Self {
                    Integer(v as i128)
                }
            }
        )*
    };
}

integer_from_primitive!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl TryFrom<i128> for Integer {
    type Error = CborError;

    fn try_from(v: i128) -> Result<Self, Self::Error> {
        if (Self::MIN.0..=Self::MAX.0).contains(&v) {
            Ok(Integer(v))
        } else {
            Err(CborError::IntegerOverflow(v))
        }
    }
}

macro_rules! primitive_try_from_integer {
    ($($t:ty),*) => {
        $(
            impl TryFrom<Integer> for $t {
                type Error = CborError;

                fn try_from(v: Integer) -> Result<Self, Self::Error> {
                    <$t>::try_from(v.0).map_err(|_| CborError::IntegerOverflow(v.0))
                }
            }
        )*
    };
}

primitive_try_from_integer!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl From<Integer> for i128 {
    fn from(v: Integer) -> Self {
        v.0
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_split_matches_offset_by_one_rule() {
        assert_eq!(Integer::from(0u8).to_argument(), (false, 0));
        assert_eq!(Integer::from(-1i8).to_argument(), (true, 0));
        assert_eq!(Integer::from(-24i32).to_argument(), (true, 23));
        assert_eq!(Integer::MAX.to_argument(), (false, u64::MAX));
        assert_eq!(Integer::MIN.to_argument(), (true, u64::MAX));
        assert_eq!(Integer::from(i64::MIN).to_argument(), (true, i64::MAX as u64));
    }

    #[test]
    fn negative_argument_inverse() {
        for arg in [0u64, 1, 23, 24, 255, 65_535, u32::MAX as u64, u64::MAX] {
            let (negative, back) = Integer::from_negative_argument(arg).to_argument();
            assert!(negative);
            assert_eq!(back, arg);
        }
    }

    #[test]
    fn checked_construction_from_i128() {
        assert_eq!(Integer::try_from(-(1i128 << 64)), Ok(Integer::MIN));
        assert_eq!(Integer::try_from(u64::MAX as i128), Ok(Integer::MAX));
        assert_eq!(
            Integer::try_from(1i128 << 64),
            Err(CborError::IntegerOverflow(1i128 << 64))
        );
        assert!(Integer::try_from(-(1i128 << 64) - 1).is_err());
    }

    #[test]
    fn checked_extraction() {
        assert_eq!(i64::try_from(Integer::from(-5i32)), Ok(-5));
        assert!(i64::try_from(Integer::MAX).is_err());
        assert_eq!(u64::try_from(Integer::MAX), Ok(u64::MAX));
        assert_eq!(
            u8::try_from(Integer::from(256u16)),
            Err(CborError::IntegerOverflow(256))
        );
    }

    #[test]
    fn display_is_decimal() {
        assert_eq!(Integer::MIN.to_string(), "-18446744073709551616");
        assert_eq!(Integer::from(42u8).to_string(), "42");
    }
}
