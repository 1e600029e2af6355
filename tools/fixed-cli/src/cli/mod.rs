pub mod detjson;
pub mod mandelbrot;
pub mod math_check;
pub mod vector;
