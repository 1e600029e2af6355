use crate::error::FixedError;
use crate::policy::{Abort, Assert, Ignore, OverflowPolicy};
use crate::primitive::Primitive;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// 32-bit fixed-point number with `BITS` fractional bits.
///
/// `real value = repr / 2^BITS`. `P` is the [`OverflowPolicy`] invoked when a
/// construction or arithmetic result does not fit in the representation; it
/// is a zero-sized marker, so `Fixed` is exactly one `i32` wide.
#[repr(transparent)]
pub struct Fixed<const BITS: u32, P = Assert> {
    repr: i32,
    policy: PhantomData<fn() -> P>,
}

/// Q16.16, `assert`-style overflow checks.
pub type Fixed16 = Fixed<16, Assert>;
/// Q16.16, overflow ignored.
pub type Fixed16Fast = Fixed<16, Ignore>;
/// Q16.16, abort on overflow.
pub type Fixed16Safe = Fixed<16, Abort>;

impl<const BITS: u32, P> Fixed<BITS, P> {
    const BITS_IN_RANGE: () = assert!(BITS <= 32, "Fixed supports at most 32 fractional bits");

    pub const FRAC_BITS: u32 = BITS;
    /// `2^BITS`; `i64` so that 32 fractional bits are expressible.
    pub const SCALE: i64 = 1i64 << BITS;
    pub const MASK: i64 = Self::SCALE - 1;

    pub const MIN: Self = Self::from_repr(i32::MIN);
    pub const MAX: Self = Self::from_repr(i32::MAX);
    /// Smallest positive step.
    pub const EPSILON: Self = Self::from_repr(1);
    pub const ZERO: Self = Self::from_repr(0);

    #[inline]
    pub const fn from_repr(repr: i32) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::BITS_IN_RANGE;
        Self {
            repr,
            policy: PhantomData,
        }
    }

    #[inline]
    pub const fn repr(self) -> i32 {
        self.repr
    }

    #[inline]
    pub(crate) const fn repr64(self) -> i64 {
        self.repr as i64
    }

    #[inline]
    pub fn set_repr(&mut self, repr: i32) -> &mut Self {
        self.repr = repr;
        self
    }

    pub const fn min_value() -> Self {
        Self::MIN
    }

    pub const fn max_value() -> Self {
        Self::MAX
    }

    pub const fn epsilon() -> Self {
        Self::EPSILON
    }

    /// 변환 전용 검사 경로: 정책을 부르지 않는다.
    #[inline]
    pub fn try_from_num<T: Primitive>(value: T) -> Result<Self, FixedError> {
        value.try_to_repr(BITS).map(Self::from_repr)
    }

    /// Converts `value`, clamping to the nearest extreme when it is out of
    /// range (NaN becomes zero). The flag reports whether clamping happened.
    #[inline]
    pub fn overflowing_from_num<T: Primitive>(value: T) -> (Self, bool) {
        match value.try_to_repr(BITS) {
            Ok(repr) => (Self::from_repr(repr), false),
            Err(_) => (Self::from_repr(value.saturated_repr()), true),
        }
    }

    /// `repr / 2^BITS` in the target type. Integer targets truncate toward
    /// zero and then narrow with `as` semantics.
    #[inline]
    pub fn to_num<T: Primitive>(self) -> T {
        T::from_repr(self.repr, BITS)
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        self.to_num()
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        self.to_num()
    }

    /// Integer part, truncated toward zero.
    #[inline]
    pub fn to_i32(self) -> i32 {
        self.to_num()
    }

    #[inline]
    pub const fn is_finite(self) -> bool {
        true
    }

    #[inline]
    pub const fn is_infinite(self) -> bool {
        false
    }

    #[inline]
    pub const fn is_nan(self) -> bool {
        false
    }

    #[inline]
    pub const fn is_normal(self) -> bool {
        self.repr != 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.repr < 0
    }
}

impl<const BITS: u32, P: OverflowPolicy> Fixed<BITS, P> {
    /// Converts `value`; out-of-range or non-finite input invokes the policy
    /// once and clamps to the nearest extreme.
    #[inline]
    pub fn from_num<T: Primitive>(value: T) -> Self {
        let (fixed, overflowed) = Self::overflowing_from_num(value);
        if overflowed {
            P::on_overflow();
        }
        fixed
    }

    /// SSOT: 64비트 중간값을 32비트로 좁힌다. 범위 밖이면 정책 호출 후 하위 32비트를 취한다.
    #[inline]
    pub(crate) fn from_repr64(wide: i64) -> Self {
        if i32::try_from(wide).is_err() {
            P::on_overflow();
        }
        Self::from_repr(wide as i32)
    }

    /// Assigns `value` through [`Fixed::from_num`].
    #[inline]
    pub fn assign<T: Primitive>(&mut self, value: T) -> &mut Self {
        *self = Self::from_num(value);
        self
    }
}

// PhantomData<fn() -> P> 때문에 derive는 P에 불필요한 bound를 붙인다. 직접 구현한다.

impl<const BITS: u32, P> Clone for Fixed<BITS, P> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<const BITS: u32, P> Copy for Fixed<BITS, P> {}

impl<const BITS: u32, P> Default for Fixed<BITS, P> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const BITS: u32, P> PartialEq for Fixed<BITS, P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.repr == other.repr
    }
}

impl<const BITS: u32, P> Eq for Fixed<BITS, P> {}

impl<const BITS: u32, P> PartialOrd for Fixed<BITS, P> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const BITS: u32, P> Ord for Fixed<BITS, P> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.repr.cmp(&other.repr)
    }
}

impl<const BITS: u32, P> Hash for Fixed<BITS, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.repr.hash(state);
    }
}

impl<const BITS: u32, P> fmt::Debug for Fixed<BITS, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed<{}>({:#010x} = {})", BITS, self.repr, self.to_f64())
    }
}

// Every value is exactly representable as f64, so the float formatter prints it exactly.
impl<const BITS: u32, P> fmt::Display for Fixed<BITS, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f64(), f)
    }
}

macro_rules! from_primitive {
    ($($t:ty),*) => {$(
        impl<const BITS: u32, P: OverflowPolicy> From<$t> for Fixed<BITS, P> {
            #[inline]
            fn from(value: $t) -> Self {
                Self::from_num(value)
            }
        }
    )*};
}

from_primitive!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
