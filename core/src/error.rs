use thiserror::Error;

/// 검사형 API(`try_*`)가 돌려주는 고장 종류.
/// 연산자 경로는 이 값을 만들지 않고 오버플로 정책만 부른다.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FixedError {
    #[error("result does not fit in the 32-bit representation")]
    Overflow,
    #[error("division by a zero representation")]
    DivByZero,
    #[error("source value is not finite")]
    NonFinite,
    #[error("source value is outside the representable range")]
    OutOfRange,
}

impl FixedError {
    pub fn code(&self) -> &'static str {
        match self {
            FixedError::Overflow => "E_FIXED_OVERFLOW",
            FixedError::DivByZero => "E_FIXED_DIV_ZERO",
            FixedError::NonFinite => "E_FIXED_NON_FINITE",
            FixedError::OutOfRange => "E_FIXED_OUT_OF_RANGE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(FixedError::Overflow.code(), "E_FIXED_OVERFLOW");
        assert_eq!(FixedError::DivByZero.code(), "E_FIXED_DIV_ZERO");
        assert_eq!(FixedError::NonFinite.code(), "E_FIXED_NON_FINITE");
        assert_eq!(FixedError::OutOfRange.code(), "E_FIXED_OUT_OF_RANGE");
    }

    #[test]
    fn display_is_human_readable() {
        assert_eq!(
            FixedError::DivByZero.to_string(),
            "division by a zero representation"
        );
    }
}
