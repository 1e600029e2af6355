use crate::fixed::Fixed16Fast;

pub const DETERMINISM_SCHEMA_V1: &str = "more_fixed.determinism_vector.v1";

// SSOT/raw_i32 결정성 벡터 기준값(v1), Q16.16
pub const DETERMINISM_VECTOR_V1_EXPECTED: [i32; 15] = [
    0x0001_8000,
    0x0000_8000,
    -0x0000_8000,
    0x0000_8000,
    0x0002_0000,
    0x0000_8000,
    0x0000_0000,
    0x0000_5555,
    i32::MIN,
    i32::MIN,
    -0x0001_0000,
    0x0001_0000,
    0x0001_6a09,
    0x0000_7abb,
    0x0002_b7e1,
];

/// Raw representations of a fixed set of Q16.16 expressions, for comparing
/// builds across platforms. Covers exact arithmetic, the wrap-around after
/// overflow, bit-exact rounding, and the libm-forwarded functions.
pub fn determinism_vector_v1() -> [i32; 15] {
    let a = Fixed16Fast::from_repr(0x0001_0000); // 1.0
    let b = Fixed16Fast::from_repr(0x0000_8000); // 0.5
    let c = Fixed16Fast::from_repr(-0x0001_0000); // -1.0
    let three = Fixed16Fast::from_repr(0x0003_0000);
    let two = Fixed16Fast::from_repr(0x0002_0000);
    [
        (a + b).repr(),
        (a - b).repr(),
        (b - a).repr(),
        (a * b).repr(),
        (a / b).repr(),
        (b / a).repr(),
        (c + a).repr(),
        (a / three).repr(),
        (Fixed16Fast::MAX + Fixed16Fast::EPSILON).repr(),
        (-Fixed16Fast::MIN).repr(),
        (-b).floor().repr(),
        b.ceil().repr(),
        two.sqrt().repr(),
        b.sin().repr(),
        a.exp().repr(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn determinism_vector_matches() {
        assert_eq!(determinism_vector_v1(), DETERMINISM_VECTOR_V1_EXPECTED);
    }
}
