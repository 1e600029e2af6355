//! Overflow policies.
//!
//! A policy is a zero-sized marker type chosen as the second generic
//! parameter of [`Fixed`](crate::Fixed). Every operation that detects a result
//! outside the 32-bit representation calls [`OverflowPolicy::on_overflow`]
//! exactly once and then finishes with well-defined bits anyway; the policy
//! never changes the value an operation produces.

use std::cell::Cell;

pub trait OverflowPolicy {
    fn on_overflow();
}

/// 오버플로 무시. 범위 검사 외에 추가 비용이 없다.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Ignore;

impl OverflowPolicy for Ignore {
    #[inline(always)]
    fn on_overflow() {}
}

/// Terminates the process on the first overflow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Abort;

impl OverflowPolicy for Abort {
    #[cold]
    fn on_overflow() {
        std::process::abort();
    }
}

/// Panics in debug builds, no-op in release builds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Assert;

impl OverflowPolicy for Assert {
    #[inline]
    fn on_overflow() {
        if cfg!(debug_assertions) {
            panic!("fixed-point overflow");
        }
    }
}

thread_local! {
    static OVERFLOW_FLAG: Cell<bool> = const { Cell::new(false) };
    static OVERFLOW_COUNT: Cell<u64> = const { Cell::new(0) };
}

/// Sets a thread-local flag. Meant for tests and validation harnesses that
/// poll after each expression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Flag;

impl Flag {
    /// Returns the flag and clears it.
    pub fn take() -> bool {
        OVERFLOW_FLAG.with(|flag| flag.replace(false))
    }

    pub fn is_set() -> bool {
        OVERFLOW_FLAG.with(Cell::get)
    }

    pub fn clear() {
        OVERFLOW_FLAG.with(|flag| flag.set(false));
    }
}

impl OverflowPolicy for Flag {
    #[inline]
    fn on_overflow() {
        OVERFLOW_FLAG.with(|flag| flag.set(true));
    }
}

/// Counts overflow events on the current thread.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Count;

impl Count {
    pub fn get() -> u64 {
        OVERFLOW_COUNT.with(Cell::get)
    }

    /// Returns the count and resets it to zero.
    pub fn take() -> u64 {
        OVERFLOW_COUNT.with(|count| count.replace(0))
    }

    pub fn reset() {
        OVERFLOW_COUNT.with(|count| count.set(0));
    }
}

impl OverflowPolicy for Count {
    #[inline]
    fn on_overflow() {
        OVERFLOW_COUNT.with(|count| count.set(count.get().wrapping_add(1)));
    }
}

/// Emits a `tracing` warning for every overflow.
#[cfg(feature = "tracing")]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Trace;

#[cfg(feature = "tracing")]
impl OverflowPolicy for Trace {
    #[cold]
    fn on_overflow() {
        tracing::warn!(target: "more_fixed", code = "E_FIXED_OVERFLOW", "fixed-point overflow");
    }
}
