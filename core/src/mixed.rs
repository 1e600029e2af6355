//! `Fixed op native` and `native op Fixed`.
//!
//! Every impl converts the native operand with [`Fixed::from_num`] first and
//! then applies the fixed-point operator, in both operand orders.

use crate::fixed::Fixed;
use crate::policy::OverflowPolicy;
use crate::primitive::Primitive;
use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

macro_rules! with_primitives {
    ($mac:ident!($($args:tt)*)) => {
        $mac!($($args)* i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
    };
}

macro_rules! mixed_arith {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident; $($t:ty),*) => {$(
        impl<const BITS: u32, P: OverflowPolicy> $Op<$t> for Fixed<BITS, P> {
            type Output = Self;
            #[inline]
            fn $op(self, rhs: $t) -> Self {
                $Op::$op(self, Self::from_num(rhs))
            }
        }

        impl<const BITS: u32, P: OverflowPolicy> $Op<Fixed<BITS, P>> for $t {
            type Output = Fixed<BITS, P>;
            #[inline]
            fn $op(self, rhs: Fixed<BITS, P>) -> Fixed<BITS, P> {
                $Op::$op(Fixed::<BITS, P>::from_num(self), rhs)
            }
        }

        impl<const BITS: u32, P: OverflowPolicy> $OpAssign<$t> for Fixed<BITS, P> {
            #[inline]
            fn $op_assign(&mut self, rhs: $t) {
                *self = $Op::$op(*self, Self::from_num(rhs));
            }
        }
    )*};
}

// NaN은 어떤 값과도 같지 않고 순서도 없다. 변환은 그대로 해서 정책은 호출된다.
macro_rules! mixed_cmp {
    ($($t:ty),*) => {$(
        impl<const BITS: u32, P: OverflowPolicy> PartialEq<$t> for Fixed<BITS, P> {
            #[inline]
            fn eq(&self, other: &$t) -> bool {
                let rhs = Self::from_num(*other);
                !Primitive::is_nan(*other) && *self == rhs
            }
        }

        impl<const BITS: u32, P: OverflowPolicy> PartialEq<Fixed<BITS, P>> for $t {
            #[inline]
            fn eq(&self, other: &Fixed<BITS, P>) -> bool {
                let lhs = Fixed::<BITS, P>::from_num(*self);
                !Primitive::is_nan(*self) && lhs == *other
            }
        }

        impl<const BITS: u32, P: OverflowPolicy> PartialOrd<$t> for Fixed<BITS, P> {
            #[inline]
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                let rhs = Self::from_num(*other);
                if Primitive::is_nan(*other) {
                    return None;
                }
                Some(self.cmp(&rhs))
            }
        }

        impl<const BITS: u32, P: OverflowPolicy> PartialOrd<Fixed<BITS, P>> for $t {
            #[inline]
            fn partial_cmp(&self, other: &Fixed<BITS, P>) -> Option<Ordering> {
                let lhs = Fixed::<BITS, P>::from_num(*self);
                if Primitive::is_nan(*self) {
                    return None;
                }
                Some(lhs.cmp(other))
            }
        }
    )*};
}

with_primitives!(mixed_arith!(Add, add, AddAssign, add_assign;));
with_primitives!(mixed_arith!(Sub, sub, SubAssign, sub_assign;));
with_primitives!(mixed_arith!(Mul, mul, MulAssign, mul_assign;));
with_primitives!(mixed_arith!(Div, div, DivAssign, div_assign;));
with_primitives!(mixed_cmp!());
