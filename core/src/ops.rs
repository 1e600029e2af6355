//! Arithmetic on the representation.
//!
//! Integer-only: every result is computed in `i64` and narrowed to `i32`, so
//! results are identical on every platform. `src/tests/integer_only_gate.rs`
//! keeps floating-point types out of this file.

use crate::error::FixedError;
use crate::fixed::Fixed;
use crate::policy::OverflowPolicy;
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl<const BITS: u32, P> Fixed<BITS, P> {
    /// 하위 32비트를 취하고, 64비트 값이 i32에 들어가지 않았는지 함께 돌려준다.
    #[inline]
    fn narrow(wide: i64) -> (Self, bool) {
        (Self::from_repr(wide as i32), i32::try_from(wide).is_err())
    }

    #[inline]
    fn saturate(wide: i64) -> Self {
        Self::from_repr(wide.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
    }

    /// Saturated result of dividing `self` by a zero representation.
    #[inline]
    fn div_zero_result(self) -> Self {
        match self.repr() {
            0 => Self::ZERO,
            r if r > 0 => Self::MAX,
            _ => Self::MIN,
        }
    }

    #[inline]
    fn wide_add(self, rhs: Self) -> i64 {
        self.repr64() + rhs.repr64()
    }

    #[inline]
    fn wide_sub(self, rhs: Self) -> i64 {
        self.repr64() - rhs.repr64()
    }

    /// `(a * b) / SCALE`, truncating toward zero. `i32 * i32` always fits in `i64`.
    #[inline]
    fn wide_mul(self, rhs: Self) -> i64 {
        (self.repr64() * rhs.repr64()) / Self::SCALE
    }

    /// `(a * SCALE) / b` for a non-zero `b`.
    /// `a * SCALE` fits in `i64` for every `BITS <= 32`; only `i64::MIN / -1`
    /// (BITS = 32) can overflow the quotient, and its low 32 bits are zero either way.
    #[inline]
    fn wide_div(self, rhs: Self) -> i64 {
        (self.repr64() * Self::SCALE).wrapping_div(rhs.repr64())
    }

    #[inline]
    pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        Self::narrow(self.wide_add(rhs))
    }

    #[inline]
    pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        Self::narrow(self.wide_sub(rhs))
    }

    #[inline]
    pub fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
        Self::narrow(self.wide_mul(rhs))
    }

    /// Division by a zero representation reports overflow and saturates:
    /// `MAX` for a positive dividend, `MIN` for a negative one, zero for `0 / 0`.
    #[inline]
    pub fn overflowing_div(self, rhs: Self) -> (Self, bool) {
        if rhs.repr() == 0 {
            return (self.div_zero_result(), true);
        }
        Self::narrow(self.wide_div(rhs))
    }

    /// Only `MIN` overflows; its negation wraps back to `MIN`.
    #[inline]
    pub fn overflowing_neg(self) -> (Self, bool) {
        Self::narrow(-self.repr64())
    }

    #[inline]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        checked(self.overflowing_add(rhs))
    }

    #[inline]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        checked(self.overflowing_sub(rhs))
    }

    #[inline]
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        checked(self.overflowing_mul(rhs))
    }

    #[inline]
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        self.try_div(rhs).ok()
    }

    #[inline]
    pub fn checked_neg(self) -> Option<Self> {
        checked(self.overflowing_neg())
    }

    /// 나눗셈(결정적): 0으로 나누기면 `DivByZero`, 범위 밖이면 `Overflow`.
    #[inline]
    pub fn try_div(self, rhs: Self) -> Result<Self, FixedError> {
        if rhs.repr() == 0 {
            return Err(FixedError::DivByZero);
        }
        match Self::narrow(self.wide_div(rhs)) {
            (value, false) => Ok(value),
            (_, true) => Err(FixedError::Overflow),
        }
    }

    #[inline]
    pub fn saturating_add(self, rhs: Self) -> Self {
        Self::saturate(self.wide_add(rhs))
    }

    #[inline]
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self::saturate(self.wide_sub(rhs))
    }

    #[inline]
    pub fn saturating_mul(self, rhs: Self) -> Self {
        Self::saturate(self.wide_mul(rhs))
    }
}

#[inline]
fn checked<T>((value, overflowed): (T, bool)) -> Option<T> {
    if overflowed {
        None
    } else {
        Some(value)
    }
}

impl<const BITS: u32, P: OverflowPolicy> Fixed<BITS, P> {
    #[inline]
    pub(crate) fn signal((value, overflowed): (Self, bool)) -> Self {
        if overflowed {
            P::on_overflow();
        }
        value
    }
}

// ---- 연산자 오버로드: 오버플로는 정책 호출 후 하위 32비트 ----

impl<const BITS: u32, P: OverflowPolicy> Add for Fixed<BITS, P> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::signal(self.overflowing_add(rhs))
    }
}

impl<const BITS: u32, P: OverflowPolicy> Sub for Fixed<BITS, P> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::signal(self.overflowing_sub(rhs))
    }
}

impl<const BITS: u32, P: OverflowPolicy> Mul for Fixed<BITS, P> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::signal(self.overflowing_mul(rhs))
    }
}

impl<const BITS: u32, P: OverflowPolicy> Div for Fixed<BITS, P> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::signal(self.overflowing_div(rhs))
    }
}

impl<const BITS: u32, P: OverflowPolicy> Neg for Fixed<BITS, P> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::signal(self.overflowing_neg())
    }
}

impl<const BITS: u32, P: OverflowPolicy> AddAssign for Fixed<BITS, P> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const BITS: u32, P: OverflowPolicy> SubAssign for Fixed<BITS, P> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const BITS: u32, P: OverflowPolicy> MulAssign for Fixed<BITS, P> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<const BITS: u32, P: OverflowPolicy> DivAssign for Fixed<BITS, P> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<const BITS: u32, P: OverflowPolicy> Sum for Fixed<BITS, P> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a, const BITS: u32, P: OverflowPolicy> Sum<&'a Fixed<BITS, P>> for Fixed<BITS, P> {
    fn sum<I: Iterator<Item = &'a Fixed<BITS, P>>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl<const BITS: u32, P: OverflowPolicy> Product for Fixed<BITS, P> {
    /// Starts from `1`, which itself overflows when `BITS >= 31`.
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        let one = Self::from_repr64(Self::SCALE);
        iter.fold(one, Mul::mul)
    }
}
