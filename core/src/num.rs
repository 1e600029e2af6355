//! `num-traits` integration, so `Fixed` can stand in for a float in generic
//! numeric code.

use crate::fixed::Fixed;
use crate::policy::OverflowPolicy;
use num_traits::{
    Bounded, CheckedAdd, CheckedDiv, CheckedMul, CheckedNeg, CheckedSub, FromPrimitive, One,
    Saturating, ToPrimitive, Zero,
};

impl<const BITS: u32, P> Bounded for Fixed<BITS, P> {
    fn min_value() -> Self {
        Self::MIN
    }

    fn max_value() -> Self {
        Self::MAX
    }
}

impl<const BITS: u32, P: OverflowPolicy> Zero for Fixed<BITS, P> {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.repr() == 0
    }
}

impl<const BITS: u32, P: OverflowPolicy> One for Fixed<BITS, P> {
    /// `1` is not representable when `BITS >= 31`; the policy is invoked and
    /// the truncated bits are returned.
    fn one() -> Self {
        Self::from_repr64(Self::SCALE)
    }
}

impl<const BITS: u32, P> ToPrimitive for Fixed<BITS, P> {
    fn to_i64(&self) -> Option<i64> {
        Some(self.to_num())
    }

    fn to_u64(&self) -> Option<u64> {
        u64::try_from(self.to_num::<i64>()).ok()
    }

    fn to_f32(&self) -> Option<f32> {
        Some(Fixed::to_f32(*self))
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Fixed::to_f64(*self))
    }
}

/// Checked: out-of-range or non-finite input gives `None`, without invoking the policy.
impl<const BITS: u32, P> FromPrimitive for Fixed<BITS, P> {
    fn from_i64(n: i64) -> Option<Self> {
        Self::try_from_num(n).ok()
    }

    fn from_u64(n: u64) -> Option<Self> {
        Self::try_from_num(n).ok()
    }

    fn from_f32(n: f32) -> Option<Self> {
        Self::try_from_num(n).ok()
    }

    fn from_f64(n: f64) -> Option<Self> {
        Self::try_from_num(n).ok()
    }
}

impl<const BITS: u32, P: OverflowPolicy> CheckedAdd for Fixed<BITS, P> {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        Fixed::checked_add(*self, *v)
    }
}

impl<const BITS: u32, P: OverflowPolicy> CheckedSub for Fixed<BITS, P> {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        Fixed::checked_sub(*self, *v)
    }
}

impl<const BITS: u32, P: OverflowPolicy> CheckedMul for Fixed<BITS, P> {
    fn checked_mul(&self, v: &Self) -> Option<Self> {
        Fixed::checked_mul(*self, *v)
    }
}

impl<const BITS: u32, P: OverflowPolicy> CheckedDiv for Fixed<BITS, P> {
    fn checked_div(&self, v: &Self) -> Option<Self> {
        Fixed::checked_div(*self, *v)
    }
}

impl<const BITS: u32, P> CheckedNeg for Fixed<BITS, P> {
    fn checked_neg(&self) -> Option<Self> {
        Fixed::checked_neg(*self)
    }
}

impl<const BITS: u32, P> Saturating for Fixed<BITS, P> {
    fn saturating_add(self, v: Self) -> Self {
        Fixed::saturating_add(self, v)
    }

    fn saturating_sub(self, v: Self) -> Self {
        Fixed::saturating_sub(self, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{Count, Flag};

    type Q16 = Fixed<16, Flag>;

    fn generic_sum_of_squares<T: Zero + Copy + core::ops::Mul<Output = T>>(xs: &[T]) -> T {
        xs.iter().fold(T::zero(), |acc, &x| acc + x * x)
    }

    fn generic_clamp<T: Bounded + PartialOrd + Copy>(x: T, lo: T) -> T {
        if x < lo {
            lo
        } else if x > T::max_value() {
            T::max_value()
        } else {
            x
        }
    }

    #[test]
    fn works_in_generic_code() {
        let xs = [Q16::from_num(1i32), Q16::from_num(2i32), Q16::from_num(0.5f64)];
        assert_eq!(generic_sum_of_squares(&xs), Q16::from_num(5.25f64));
        assert_eq!(generic_clamp(Q16::from_num(-3i32), Q16::ZERO), Q16::ZERO);
        assert_eq!(<Q16 as Bounded>::max_value(), Q16::MAX);
    }

    #[test]
    fn one_saturates_with_signal_when_unrepresentable() {
        Count::reset();
        assert_eq!(Fixed::<16, Count>::one().repr(), 1 << 16);
        assert_eq!(Count::get(), 0);
        let _ = Fixed::<31, Count>::one();
        assert_eq!(Count::take(), 1);
    }

    #[test]
    fn to_primitive_truncates() {
        assert_eq!(Q16::from_num(-2.5f64).to_i64(), Some(-2));
        assert_eq!(Q16::from_num(-0.5f64).to_u64(), Some(0));
        assert_eq!(Q16::from_num(-1.5f64).to_u64(), None);
        assert_eq!(ToPrimitive::to_f64(&Q16::from_num(0.75f64)), Some(0.75));
    }

    #[test]
    fn from_primitive_is_checked_and_silent() {
        Flag::clear();
        assert_eq!(Q16::from_f64(1e9), None);
        assert_eq!(Q16::from_f32(f32::NAN), None);
        assert_eq!(Q16::from_i64(-3), Some(Q16::from_num(-3i32)));
        assert!(!Flag::take());
    }

    #[test]
    fn checked_traits_delegate() {
        let max = Q16::MAX;
        assert_eq!(CheckedAdd::checked_add(&max, &Q16::EPSILON), None);
        assert_eq!(CheckedDiv::checked_div(&max, &Q16::ZERO), None);
        assert_eq!(CheckedNeg::checked_neg(&Q16::MIN), None);
        assert_eq!(Saturating::saturating_add(max, max), max);
    }
}
