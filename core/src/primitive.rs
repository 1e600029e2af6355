//! Native numeric types that convert to and from [`Fixed`](crate::Fixed).
//!
//! Every conversion, and every mixed `Fixed op native` expression, goes
//! through this one trait.

use crate::error::FixedError;

mod sealed {
    pub trait Sealed {}
}

pub trait Primitive: Copy + sealed::Sealed {
    /// `self * 2^bits` truncated toward zero.
    fn try_to_repr(self, bits: u32) -> Result<i32, FixedError>;

    /// 범위 밖 값의 포화 목표: 음수는 `i32::MIN`, 양수는 `i32::MAX`, NaN은 0.
    fn saturated_repr(self) -> i32;

    /// `repr / 2^bits`; integers truncate toward zero.
    fn from_repr(repr: i32, bits: u32) -> Self;

    /// Always `false` for integers.
    fn is_nan(self) -> bool;
}

#[inline]
pub(crate) fn scale_f64(bits: u32) -> f64 {
    (1u64 << bits) as f64
}

macro_rules! int_primitive {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl Primitive for $t {
            #[inline]
            fn try_to_repr(self, bits: u32) -> Result<i32, FixedError> {
                let wide = (self as i128) << bits;
                i32::try_from(wide).map_err(|_| FixedError::OutOfRange)
            }

            #[inline]
            fn saturated_repr(self) -> i32 {
                if (self as i128) < 0 {
                    i32::MIN
                } else {
                    i32::MAX
                }
            }

            #[inline]
            fn from_repr(repr: i32, bits: u32) -> Self {
                ((repr as i64) / (1i64 << bits)) as $t
            }

            #[inline]
            fn is_nan(self) -> bool {
                false
            }
        }
    )*};
}

macro_rules! float_primitive {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl Primitive for $t {
            #[inline]
            fn try_to_repr(self, bits: u32) -> Result<i32, FixedError> {
                let value = self as f64;
                if !value.is_finite() {
                    return Err(FixedError::NonFinite);
                }
                let scaled = (value * scale_f64(bits)).trunc();
                if scaled < i32::MIN as f64 || scaled > i32::MAX as f64 {
                    return Err(FixedError::OutOfRange);
                }
                Ok(scaled as i32)
            }

            #[inline]
            fn saturated_repr(self) -> i32 {
                if self.is_nan() {
                    0
                } else if self < 0.0 {
                    i32::MIN
                } else {
                    i32::MAX
                }
            }

            #[inline]
            fn from_repr(repr: i32, bits: u32) -> Self {
                (repr as f64 / scale_f64(bits)) as $t
            }

            #[inline]
            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }
        }
    )*};
}

int_primitive!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
float_primitive!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_shift_by_bits() {
        assert_eq!(3i32.try_to_repr(16), Ok(3 << 16));
        assert_eq!((-3i64).try_to_repr(16), Ok(-3 << 16));
        assert_eq!(7u8.try_to_repr(0), Ok(7));
        assert_eq!(1i32.try_to_repr(31), Err(FixedError::OutOfRange));
        assert_eq!((-1i32).try_to_repr(31), Ok(i32::MIN));
        assert_eq!(u64::MAX.try_to_repr(32), Err(FixedError::OutOfRange));
    }

    #[test]
    fn floats_truncate_toward_zero() {
        assert_eq!(0.5f64.try_to_repr(16), Ok(0x8000));
        assert_eq!(1.5f32.try_to_repr(1), Ok(3));
        // 1.75 * 2 = 3.5 -> 3, -3.5 -> -3
        assert_eq!(1.75f64.try_to_repr(1), Ok(3));
        assert_eq!((-1.75f64).try_to_repr(1), Ok(-3));
    }

    #[test]
    fn floats_reject_non_finite_and_out_of_range() {
        assert_eq!(f64::NAN.try_to_repr(16), Err(FixedError::NonFinite));
        assert_eq!(f32::INFINITY.try_to_repr(16), Err(FixedError::NonFinite));
        assert_eq!(32768.0f64.try_to_repr(16), Err(FixedError::OutOfRange));
        assert_eq!((-32768.0f64).try_to_repr(16), Ok(i32::MIN));
        // i32::MAX + 0.5 in repr units still truncates into range.
        assert_eq!(2147483647.5f64.try_to_repr(0), Ok(i32::MAX));
    }

    #[test]
    fn saturation_targets() {
        assert_eq!(f64::NAN.saturated_repr(), 0);
        assert_eq!(f64::NEG_INFINITY.saturated_repr(), i32::MIN);
        assert_eq!(1e30f32.saturated_repr(), i32::MAX);
        assert_eq!((-5i8).saturated_repr(), i32::MIN);
        assert_eq!(u64::MAX.saturated_repr(), i32::MAX);
    }

    #[test]
    fn from_repr_truncates_integers() {
        assert_eq!(<i32 as Primitive>::from_repr(-(3 << 15), 16), -1);
        assert_eq!(<i32 as Primitive>::from_repr(3 << 15, 16), 1);
        assert_eq!(<i64 as Primitive>::from_repr(i32::MIN, 32), 0);
        assert_eq!(<f64 as Primitive>::from_repr(-(1 << 15), 16), -0.5);
    }

    #[test]
    fn nan_detection() {
        assert!(Primitive::is_nan(f32::NAN));
        assert!(Primitive::is_nan(f64::NAN));
        assert!(!Primitive::is_nan(f64::INFINITY));
        assert!(!Primitive::is_nan(0i32));
        assert!(!Primitive::is_nan(u64::MAX));
    }
}
