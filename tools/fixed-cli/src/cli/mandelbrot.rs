use std::io::{self, BufWriter, Write};
use std::ops::{Add, AddAssign, Mul, Sub};

use more_fixed_core::{Fixed, Fixed16Fast, Fixed16Safe, OverflowPolicy};

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumericType {
    /// 32-bit floating point
    Float,
    /// 64-bit floating point
    Double,
    /// 16.16 fixed point, abort on overflow
    #[value(name = "fixed_safe", alias = "fixed-safe")]
    FixedSafe,
    /// 16.16 fixed point, no overflow check
    #[value(name = "fixed_fast", alias = "fixed-fast")]
    FixedFast,
}

/// The operations the renderer needs, so one generic loop serves floats and
/// fixed-point alike.
pub trait Scalar:
    Copy + PartialOrd + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + AddAssign
{
    fn lit(value: f64) -> Self;
}

impl Scalar for f32 {
    fn lit(value: f64) -> Self {
        value as f32
    }
}

impl Scalar for f64 {
    fn lit(value: f64) -> Self {
        value
    }
}

impl<const BITS: u32, P: OverflowPolicy> Scalar for Fixed<BITS, P> {
    fn lit(value: f64) -> Self {
        Self::from_num(value)
    }
}

/// Iterations before `z -> z^2 + c` leaves the radius-2 disc, or
/// `max_iterations` if it never does.
pub fn mandelbrot<T: Scalar>(x0: T, y0: T, max_iterations: u32) -> u32 {
    let two = T::lit(2.0);
    let four = T::lit(4.0);
    let mut x = T::lit(0.0);
    let mut y = T::lit(0.0);
    for i in 0..max_iterations {
        let next_x = x * x - y * y + x0;
        let next_y = two * x * y + y0;
        if next_x * next_x + next_y * next_y >= four {
            return i;
        }
        x = next_x;
        y = next_y;
    }
    max_iterations
}

/// `y` in `-1..=1`, `x` in `-2..=1`, both in steps of 1/16.
pub fn plot<T: Scalar, W: Write>(out: &mut W, max_iterations: u32) -> io::Result<()> {
    let step = T::lit(1.0 / 16.0);
    let one = T::lit(1.0);
    let mut y = T::lit(-1.0);
    while y <= one {
        let mut x = T::lit(-2.0);
        while x <= one {
            let i = mandelbrot(x, y, max_iterations);
            let cell = if i == max_iterations {
                b'*'
            } else {
                b" ."[(i % 2) as usize]
            };
            out.write_all(&[cell])?;
            x += step;
        }
        out.write_all(b"\n")?;
        y += step;
    }
    Ok(())
}

pub fn plot_as<W: Write>(out: &mut W, numeric_type: NumericType, max_iterations: u32) -> io::Result<()> {
    match numeric_type {
        NumericType::Float => plot::<f32, _>(out, max_iterations),
        NumericType::Double => plot::<f64, _>(out, max_iterations),
        NumericType::FixedSafe => plot::<Fixed16Safe, _>(out, max_iterations),
        NumericType::FixedFast => plot::<Fixed16Fast, _>(out, max_iterations),
    }
}

pub fn run_mandelbrot(max_iterations: u32, numeric_type: NumericType) -> Result<(), String> {
    tracing::debug!(max_iterations, ?numeric_type, "mandelbrot");
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    plot_as(&mut out, numeric_type, max_iterations)
        .and_then(|_| out.flush())
        .map_err(|err| format!("E_CLI_IO {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(numeric_type: NumericType, max_iterations: u32) -> Vec<String> {
        let mut buf = Vec::new();
        plot_as(&mut buf, numeric_type, max_iterations).expect("plot");
        String::from_utf8(buf)
            .expect("utf8")
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn plot_has_fixed_grid() {
        for numeric_type in [
            NumericType::Float,
            NumericType::Double,
            NumericType::FixedSafe,
            NumericType::FixedFast,
        ] {
            let lines = render(numeric_type, 16);
            assert_eq!(lines.len(), 33, "{:?}", numeric_type);
            assert!(lines.iter().all(|line| line.len() == 49), "{:?}", numeric_type);
        }
    }

    #[test]
    fn known_points() {
        // row 16 is y = 0; column 16 is x = -1, column 48 is x = 1
        for numeric_type in [NumericType::Double, NumericType::FixedFast] {
            let lines = render(numeric_type, 32);
            let row = lines[16].as_bytes();
            assert_eq!(row[16], b'*');
            assert_eq!(row[48], b'.');
        }
    }

    #[test]
    fn escape_counts() {
        assert_eq!(mandelbrot(-1.0f64, 0.0, 50), 50);
        assert_eq!(mandelbrot(1.0f64, 0.0, 50), 1);
        let c = Fixed16Fast::from_num(1.0);
        assert_eq!(mandelbrot(c, Fixed16Fast::ZERO, 50), 1);
    }
}
