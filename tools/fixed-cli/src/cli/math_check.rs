use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use more_fixed_core::{math, Fixed, Flag};
use rayon::prelude::*;
use serde::Serialize;

use crate::cli::detjson::write_json;

pub const MATH_CHECK_SCHEMA: &str = "more_fixed.math_check.v1";
const MAX_REPORTED_FAILURES: usize = 8;

#[derive(clap::ValueEnum, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MathFunc {
    Fabs,
    Floor,
    Ceil,
    Trunc,
    Sqrt,
    Sin,
    Cos,
    Tan,
    Exp,
}

impl MathFunc {
    pub const ALL: [MathFunc; 9] = [
        MathFunc::Fabs,
        MathFunc::Floor,
        MathFunc::Ceil,
        MathFunc::Trunc,
        MathFunc::Sqrt,
        MathFunc::Sin,
        MathFunc::Cos,
        MathFunc::Tan,
        MathFunc::Exp,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MathFunc::Fabs => "fabs",
            MathFunc::Floor => "floor",
            MathFunc::Ceil => "ceil",
            MathFunc::Trunc => "trunc",
            MathFunc::Sqrt => "sqrt",
            MathFunc::Sin => "sin",
            MathFunc::Cos => "cos",
            MathFunc::Tan => "tan",
            MathFunc::Exp => "exp",
        }
    }

    fn reference(self, x: f64) -> f64 {
        match self {
            MathFunc::Fabs => libm::fabs(x),
            MathFunc::Floor => libm::floor(x),
            MathFunc::Ceil => libm::ceil(x),
            MathFunc::Trunc => libm::trunc(x),
            MathFunc::Sqrt => libm::sqrt(x),
            MathFunc::Sin => libm::sin(x),
            MathFunc::Cos => libm::cos(x),
            MathFunc::Tan => libm::tan(x),
            MathFunc::Exp => libm::exp(x),
        }
    }

    fn apply<const B: u32>(self, x: Fixed<B, Flag>) -> Fixed<B, Flag> {
        match self {
            MathFunc::Fabs => math::fabs(x),
            MathFunc::Floor => math::floor(x),
            MathFunc::Ceil => math::ceil(x),
            MathFunc::Trunc => math::trunc(x),
            MathFunc::Sqrt => math::sqrt(x),
            MathFunc::Sin => math::sin(x),
            MathFunc::Cos => math::cos(x),
            MathFunc::Tan => math::tan(x),
            MathFunc::Exp => math::exp(x),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MathCheckConfig {
    pub step: u32,
    pub threads: usize,
    pub funcs: Vec<MathFunc>,
    pub bits: Vec<u32>,
    #[serde(skip)]
    pub json: Option<PathBuf>,
}

impl MathCheckConfig {
    /// Empty `funcs` means every function, empty `bits` means `0..=30`.
    pub fn from_args(
        step: u32,
        threads: usize,
        funcs: Vec<MathFunc>,
        bits: Vec<u32>,
        json: Option<PathBuf>,
    ) -> Result<Self, String> {
        if step == 0 {
            return Err("E_MATH_CHECK_STEP step must be at least 1".to_string());
        }
        if threads == 0 {
            return Err("E_MATH_CHECK_THREADS threads must be at least 1".to_string());
        }
        if let Some(bad) = bits.iter().find(|b| **b > 32) {
            return Err(format!("E_MATH_CHECK_BITS {} (0..=32)", bad));
        }
        let funcs = if funcs.is_empty() {
            MathFunc::ALL.to_vec()
        } else {
            funcs
        };
        let bits = if bits.is_empty() { (0..=30).collect() } else { bits };
        Ok(Self {
            step,
            threads,
            funcs,
            bits,
            json,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CaseFailure {
    pub input: f64,
    /// `None` when the reference overflowed.
    pub expected: Option<f64>,
    /// `None` when the fixed-point result overflowed.
    pub actual: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Passed,
    Failed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    pub func: MathFunc,
    pub bits: u32,
    pub status: CaseStatus,
    pub checked: u64,
    pub failures: Vec<CaseFailure>,
}

#[derive(Serialize)]
struct MathCheckReport<'a> {
    schema: &'static str,
    config: &'a MathCheckConfig,
    passed: bool,
    cases: &'a [CaseReport],
}

/// Edge representations first, then a strided sweep over the whole range.
fn inputs<const B: u32>(step: u32) -> impl Iterator<Item = Fixed<B, Flag>> {
    let mut edges = vec![Fixed::<B, Flag>::ZERO];
    for i in 0..4i32 {
        edges.push(Fixed::from_repr(i32::MIN + i));
        edges.push(Fixed::from_repr(i32::MAX - i));
        edges.push(Fixed::from_repr(i + 1));
        edges.push(Fixed::from_repr(-i - 1));
        edges.push(Fixed::from_num(i + 1));
        edges.push(Fixed::from_num(-i - 1));
    }
    Flag::clear();

    let step = step as i64;
    let sweep = (i32::MIN as i64 + step..i32::MAX as i64 - step)
        .step_by(step as usize)
        .map(|repr| Fixed::from_repr(repr as i32));
    edges.into_iter().chain(sweep)
}

fn check_value<const B: u32>(func: MathFunc, x: Fixed<B, Flag>) -> Option<CaseFailure> {
    Flag::clear();
    let expected = Fixed::<B, Flag>::from_num(func.reference(x.to_f64()));
    let expected_overflow = Flag::take();
    let actual = func.apply(x);
    let actual_overflow = Flag::take();

    let ok = match (expected_overflow, actual_overflow) {
        (true, true) => true,
        (false, false) => (actual.repr() as i64 - expected.repr() as i64).abs() <= 1,
        _ => false,
    };
    if ok {
        return None;
    }
    Some(CaseFailure {
        input: x.to_f64(),
        expected: (!expected_overflow).then(|| expected.to_f64()),
        actual: (!actual_overflow).then(|| actual.to_f64()),
    })
}

fn run_case<const B: u32>(func: MathFunc, step: u32, cancel: &AtomicBool) -> CaseReport {
    let mut report = CaseReport {
        func,
        bits: B,
        status: CaseStatus::Passed,
        checked: 0,
        failures: Vec::new(),
    };
    for x in inputs::<B>(step) {
        if cancel.load(Ordering::Relaxed) {
            report.status = CaseStatus::Cancelled;
            return report;
        }
        report.checked += 1;
        if let Some(failure) = check_value(func, x) {
            report.status = CaseStatus::Failed;
            if report.failures.len() < MAX_REPORTED_FAILURES {
                report.failures.push(failure);
            }
        }
    }
    if report.status == CaseStatus::Failed {
        cancel.store(true, Ordering::Relaxed);
    }
    tracing::debug!(func = func.name(), bits = B, checked = report.checked, status = ?report.status, "case");
    report
}

macro_rules! dispatch_bits {
    ($bits:expr, $func:expr, $step:expr, $cancel:expr; $($b:literal)*) => {
        match $bits {
            $($b => Ok(run_case::<$b>($func, $step, $cancel)),)*
            other => Err(format!("E_MATH_CHECK_BITS {} (0..=32)", other)),
        }
    };
}

fn run_case_dyn(func: MathFunc, bits: u32, step: u32, cancel: &AtomicBool) -> Result<CaseReport, String> {
    dispatch_bits!(bits, func, step, cancel;
        0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16
        17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32)
}

/// Runs every (function, bits) pair on a worker pool and returns the
/// per-case reports in function-major order.
pub fn check_all(config: &MathCheckConfig) -> Result<Vec<CaseReport>, String> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .map_err(|e| format!("E_MATH_CHECK_THREADPOOL {}", e))?;
    let cases: Vec<(MathFunc, u32)> = config
        .funcs
        .iter()
        .flat_map(|func| config.bits.iter().map(move |bits| (*func, *bits)))
        .collect();
    let cancel = AtomicBool::new(false);
    pool.install(|| {
        cases
            .par_iter()
            .map(|(func, bits)| run_case_dyn(*func, *bits, config.step, &cancel))
            .collect()
    })
}

fn print_case(case: &CaseReport) {
    let status = match case.status {
        CaseStatus::Passed => "ok",
        CaseStatus::Failed => "FAILED",
        CaseStatus::Cancelled => "cancelled",
    };
    println!("{:>8}.{:02}: {}", case.func.name(), case.bits, status);
    for failure in &case.failures {
        let show = |v: Option<f64>| v.map_or_else(|| "overflow".to_string(), |v| format!("{:.6}", v));
        println!(
            "{:13.6}: expected {}, got {}",
            failure.input,
            show(failure.expected),
            show(failure.actual)
        );
    }
}

/// Returns `Ok(false)` when any case failed.
pub fn run_math_check(config: &MathCheckConfig) -> Result<bool, String> {
    tracing::info!(
        step = config.step,
        threads = config.threads,
        funcs = config.funcs.len(),
        bits = config.bits.len(),
        "math-check start"
    );
    let cases = check_all(config)?;
    for case in &cases {
        print_case(case);
    }
    let passed = cases.iter().all(|case| case.status == CaseStatus::Passed);
    if passed {
        println!("\n*** PASSED ***");
    } else {
        println!("\n*** FAILED ***");
    }

    if let Some(path) = &config.json {
        let report = MathCheckReport {
            schema: MATH_CHECK_SCHEMA,
            config,
            passed,
            cases: &cases,
        };
        write_json(path, &report)?;
    }
    let checked: u64 = cases.iter().map(|case| case.checked).sum();
    tracing::info!(passed, checked, "math-check done");
    Ok(passed)
}
