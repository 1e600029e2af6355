//! math.h-style functions.
//!
//! `abs`, `floor`, `ceil` and `trunc` work on the representation and are
//! bit-exact. The transcendental functions have no fixed-point algorithm:
//! they convert to `f64`, call `libm` (the same answer on every platform) and
//! convert back through [`Fixed::from_num`], so out-of-range and NaN results
//! go through the overflow policy and clamp.

use crate::fixed::Fixed;
use crate::policy::OverflowPolicy;

impl<const BITS: u32, P: OverflowPolicy> Fixed<BITS, P> {
    #[inline]
    fn via_f64(self, func: fn(f64) -> f64) -> Self {
        Self::from_num(func(self.to_f64()))
    }

    /// `-MIN` overflows.
    #[inline]
    pub fn abs(self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self
        }
    }

    /// 하위 BITS 비트를 지운다.
    #[inline]
    pub fn floor(self) -> Self {
        Self::from_repr64(self.repr64() & !Self::MASK)
    }

    #[inline]
    pub fn ceil(self) -> Self {
        Self::from_repr64((self.repr64() + Self::MASK) & !Self::MASK)
    }

    /// Rounds toward zero.
    #[inline]
    pub fn trunc(self) -> Self {
        if self.is_negative() {
            self.ceil()
        } else {
            self.floor()
        }
    }

    /// Fractional part, `self - self.trunc()`.
    #[inline]
    pub fn fract(self) -> Self {
        let repr = self.repr64();
        let magnitude = repr.abs() & Self::MASK;
        Self::from_repr64(if repr < 0 { -magnitude } else { magnitude })
    }

    pub fn sqrt(self) -> Self {
        self.via_f64(libm::sqrt)
    }

    pub fn sin(self) -> Self {
        self.via_f64(libm::sin)
    }

    pub fn cos(self) -> Self {
        self.via_f64(libm::cos)
    }

    pub fn tan(self) -> Self {
        self.via_f64(libm::tan)
    }

    pub fn exp(self) -> Self {
        self.via_f64(libm::exp)
    }

    /// Angle of `(x, self)`, as `atan2(y, x)`.
    pub fn atan2(self, x: Self) -> Self {
        Self::from_num(libm::atan2(self.to_f64(), x.to_f64()))
    }
}

macro_rules! forward_unary {
    ($($name:ident / $suffixed:ident),* $(,)?) => {$(
        #[inline]
        pub fn $name<const BITS: u32, P: OverflowPolicy>(x: Fixed<BITS, P>) -> Fixed<BITS, P> {
            x.$name()
        }

        #[inline]
        pub fn $suffixed<const BITS: u32, P: OverflowPolicy>(x: Fixed<BITS, P>) -> Fixed<BITS, P> {
            x.$name()
        }
    )*};
}

forward_unary!(
    floor / floorf,
    ceil / ceilf,
    trunc / truncf,
    sqrt / sqrtf,
    sin / sinf,
    cos / cosf,
    tan / tanf,
    exp / expf,
);

#[inline]
pub fn abs<const BITS: u32, P: OverflowPolicy>(x: Fixed<BITS, P>) -> Fixed<BITS, P> {
    x.abs()
}

#[inline]
pub fn fabs<const BITS: u32, P: OverflowPolicy>(x: Fixed<BITS, P>) -> Fixed<BITS, P> {
    x.abs()
}

#[inline]
pub fn fabsf<const BITS: u32, P: OverflowPolicy>(x: Fixed<BITS, P>) -> Fixed<BITS, P> {
    x.abs()
}

#[inline]
pub fn atan2<const BITS: u32, P: OverflowPolicy>(y: Fixed<BITS, P>, x: Fixed<BITS, P>) -> Fixed<BITS, P> {
    y.atan2(x)
}

#[inline]
pub fn atan2f<const BITS: u32, P: OverflowPolicy>(y: Fixed<BITS, P>, x: Fixed<BITS, P>) -> Fixed<BITS, P> {
    y.atan2(x)
}

// ---- 분류 함수: 부동소수점 타입을 대신하는 제네릭 코드용 ----

#[inline]
pub fn isfinite<const BITS: u32, P>(x: Fixed<BITS, P>) -> bool {
    x.is_finite()
}

#[inline]
pub fn isinf<const BITS: u32, P>(x: Fixed<BITS, P>) -> bool {
    x.is_infinite()
}

#[inline]
pub fn isnan<const BITS: u32, P>(x: Fixed<BITS, P>) -> bool {
    x.is_nan()
}

#[inline]
pub fn isnormal<const BITS: u32, P>(x: Fixed<BITS, P>) -> bool {
    x.is_normal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{Count, Flag};

    type Q16 = Fixed<16, Flag>;

    fn q(value: f64) -> Q16 {
        Q16::from_num(value)
    }

    #[test]
    fn floor_ceil_trunc_are_bit_exact() {
        Flag::clear();
        assert_eq!(floor(q(2.75)), q(2.0));
        assert_eq!(floor(q(-2.25)), q(-3.0));
        assert_eq!(ceil(q(2.25)), q(3.0));
        assert_eq!(ceil(q(-2.75)), q(-2.0));
        assert_eq!(trunc(q(2.75)), q(2.0));
        assert_eq!(trunc(q(-2.75)), q(-2.0));
        assert_eq!(floor(q(5.0)), q(5.0));
        assert_eq!(ceil(q(-5.0)), q(-5.0));
        assert!(!Flag::take());
    }

    #[test]
    fn ceil_near_max_overflows() {
        Flag::clear();
        let _ = ceil(Q16::MAX);
        assert!(Flag::take());
        assert_eq!(floor(Q16::MIN), Q16::MIN);
        assert!(!Flag::take());
    }

    #[test]
    fn floor_of_negative_fraction_overflows_at_32_bits() {
        type Q32 = Fixed<32, Flag>;
        Flag::clear();
        assert_eq!(floor(Q32::from_repr(1)), Q32::ZERO);
        assert!(!Flag::take());
        let _ = floor(Q32::from_repr(-1));
        assert!(Flag::take());
        let _ = ceil(Q32::from_repr(1));
        assert!(Flag::take());
        assert_eq!(ceil(Q32::from_repr(-1)), Q32::ZERO);
        assert!(!Flag::take());
    }

    #[test]
    fn zero_fractional_bits_rounding_is_identity() {
        type Q0 = Fixed<0, Flag>;
        let x = Q0::from_repr(-17);
        assert_eq!(floor(x), x);
        assert_eq!(ceil(x), x);
        assert_eq!(trunc(x), x);
    }

    #[test]
    fn fract_keeps_sign() {
        assert_eq!(q(2.75).fract(), q(0.75));
        assert_eq!(q(-2.75).fract(), q(-0.75));
        assert_eq!(q(-2.75).trunc() + q(-2.75).fract(), q(-2.75));
    }

    #[test]
    fn abs_overflows_only_at_min() {
        type C = Fixed<16, Count>;
        Count::reset();
        assert_eq!(abs(C::from_num(-3.5f64)), C::from_num(3.5f64));
        assert_eq!(fabs(C::MAX), C::MAX);
        assert_eq!(Count::get(), 0);
        let _ = abs(C::MIN);
        assert_eq!(Count::take(), 1);
    }

    #[test]
    fn transcendental_functions_round_trip_through_f64() {
        Flag::clear();
        assert_eq!(sqrt(q(2.25)), q(1.5));
        assert_eq!(sqrt(q(2.0)), q(libm::sqrt(2.0)));
        assert_eq!(sin(q(0.0)), Q16::ZERO);
        assert_eq!(cos(q(0.0)), q(1.0));
        assert_eq!(exp(q(0.0)), q(1.0));
        assert_eq!(tan(q(1.0)), q(libm::tan(1.0)));
        assert_eq!(atan2(q(1.0), q(1.0)), q(core::f64::consts::FRAC_PI_4));
        assert_eq!(sqrtf(q(4.0)), q(2.0));
        assert!(!Flag::take());
    }

    #[test]
    fn out_of_range_results_signal() {
        Flag::clear();
        assert_eq!(sqrt(q(-1.0)), Q16::ZERO);
        assert!(Flag::take());
        assert_eq!(exp(q(20.0)), Q16::MAX);
        assert!(Flag::take());
    }

    #[test]
    fn classification_functions() {
        assert!(isfinite(q(1.0)));
        assert!(!isinf(Q16::MAX));
        assert!(!isnan(Q16::MIN));
        assert!(isnormal(Q16::EPSILON));
        assert!(!isnormal(Q16::ZERO));
    }
}
