// src/report.rs

//! Series-versus-host accuracy report.
//!
//! For each kernel function the report evaluates the constant-evaluation path
//! (with the configured term cap) and the runtime path over a deterministic
//! grid plus a fixed set of edge inputs, and records the worst disagreement.
//!
//! Errors are absolute while the host result is at most 1 in magnitude, and
//! relative beyond that, so fast-growing functions (`exp`, `cosh`, `tan` near
//! its poles) are held to the same number of significant digits as the rest.

use anyhow::bail;
use log::{debug, trace};
use serde::Serialize;

use crate::config::Config;
use crate::kernel::{self, series};

/// One function's row of the report.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FunctionAccuracy {
    pub function: String,
    pub samples: usize,
    pub max_error: f64,
    pub worst_input: f64,
    pub passed: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AccuracyReport {
    pub max_terms: usize,
    pub tolerance: f64,
    pub results: Vec<FunctionAccuracy>,
}

struct Sweep {
    name: &'static str,
    series: fn(f64, usize) -> f64,
    host: fn(f64) -> f64,
    range: (f64, f64),
    edges: &'static [f64],
}

// Binary functions are swept along a curve parameterised by one input.
fn atan2_y(t: f64) -> f64 {
    3.0 * t.sin()
}

fn atan2_x(t: f64) -> f64 {
    2.0 * t.cos()
}

const POW_EXPONENT: f64 = 2.5;

// Large magnitudes exercise the bit-table quadrant reduction.
const TRIG_EDGES: &[f64] = &[
    0.0,
    1e-8,
    kernel::HALF_PI,
    kernel::PI,
    -kernel::PI,
    100.0,
    1e6,
    1e12,
    -1e19,
    1e300,
];

const ROUNDING_EDGES: &[f64] = &[
    0.5,
    -0.5,
    2.5,
    -2.5,
    0.499_999_999_999_999_94,
    1e15 + 0.5,
    1e300,
];

const SWEEPS: &[Sweep] = &[
    Sweep {
        name: "sin",
        series: series::sin_terms,
        host: kernel::sin::<f64>,
        range: (-10.0, 10.0),
        edges: TRIG_EDGES,
    },
    Sweep {
        name: "cos",
        series: series::cos_terms,
        host: kernel::cos::<f64>,
        range: (-10.0, 10.0),
        edges: TRIG_EDGES,
    },
    Sweep {
        name: "tan",
        series: |x, _| series::tan(x),
        host: kernel::tan::<f64>,
        range: (-1.5, 1.5),
        edges: &[0.0, kernel::QUARTER_PI, -kernel::QUARTER_PI, 1.57],
    },
    Sweep {
        name: "asin",
        series: series::asin_terms,
        host: kernel::asin::<f64>,
        range: (-1.0, 1.0),
        edges: &[0.0, 0.5, -0.5, 0.999_999, -1.0, 1.0],
    },
    Sweep {
        name: "acos",
        series: |x, _| series::acos(x),
        host: kernel::acos::<f64>,
        range: (-1.0, 1.0),
        edges: &[0.0, 0.5, -0.5, 0.999_999, -1.0, 1.0],
    },
    Sweep {
        name: "atan",
        series: series::atan_terms,
        host: kernel::atan::<f64>,
        range: (-50.0, 50.0),
        edges: &[0.0, 1.0, -1.0, 0.414_213_562, 2.414_213_562, 1e8, -1e8],
    },
    Sweep {
        name: "atan2",
        series: |t, _| series::atan2(atan2_y(t), atan2_x(t)),
        host: |t| kernel::atan2(atan2_y(t), atan2_x(t)),
        range: (-kernel::PI, kernel::PI),
        edges: &[0.0, kernel::HALF_PI, -kernel::HALF_PI, kernel::PI],
    },
    Sweep {
        name: "sinh",
        series: series::sinh_terms,
        host: kernel::sinh::<f64>,
        range: (-20.0, 20.0),
        edges: &[0.0, 1e-8, 0.999, 1.0, -1.0, 300.0, 710.0, -710.4],
    },
    Sweep {
        name: "cosh",
        series: series::cosh_terms,
        host: kernel::cosh::<f64>,
        range: (-20.0, 20.0),
        edges: &[0.0, 1e-8, 1.0, -1.0, 300.0, 709.9, -710.4],
    },
    Sweep {
        name: "tanh",
        series: |x, _| series::tanh(x),
        host: kernel::tanh::<f64>,
        range: (-20.0, 20.0),
        edges: &[0.0, 1e-8, 0.5, 22.0, -22.5],
    },
    Sweep {
        name: "asinh",
        series: |x, _| series::asinh(x),
        host: kernel::asinh::<f64>,
        range: (-100.0, 100.0),
        edges: &[0.0, 1e-8, -1e-8, 1e6],
    },
    Sweep {
        name: "acosh",
        series: |x, _| series::acosh(x),
        host: kernel::acosh::<f64>,
        range: (1.0, 100.0),
        edges: &[1.0, 1.000_001, 1e6],
    },
    Sweep {
        name: "atanh",
        series: |x, _| series::atanh(x),
        host: kernel::atanh::<f64>,
        range: (-0.999, 0.999),
        edges: &[0.0, 1e-8, 0.5, -0.5],
    },
    Sweep {
        name: "exp",
        series: series::exp_terms,
        host: kernel::exp::<f64>,
        range: (-50.0, 50.0),
        edges: &[0.0, 1.0, -1.0, 1e-10, 700.0, -700.0],
    },
    Sweep {
        name: "exp2",
        series: |x, _| series::exp2(x),
        host: kernel::exp2::<f64>,
        range: (-60.0, 60.0),
        edges: &[0.0, 1.0, 10.0, -10.0, 0.5],
    },
    Sweep {
        name: "exp10",
        series: |x, _| series::exp10(x),
        host: kernel::exp10::<f64>,
        range: (-20.0, 20.0),
        edges: &[0.0, 1.0, 2.0, -3.0, 0.5],
    },
    Sweep {
        name: "log",
        series: series::log_terms,
        host: kernel::log::<f64>,
        range: (1e-3, 1e3),
        edges: &[1.0, 0.5, 2.0, 1.000_000_1, 1e-300, 1e300],
    },
    Sweep {
        name: "log2",
        series: |x, _| series::log2(x),
        host: kernel::log2::<f64>,
        range: (1e-3, 1e3),
        edges: &[1.0, 2.0, 1024.0, 0.25],
    },
    Sweep {
        name: "log10",
        series: |x, _| series::log10(x),
        host: kernel::log10::<f64>,
        range: (1e-3, 1e3),
        edges: &[1.0, 10.0, 1000.0, 0.01],
    },
    Sweep {
        name: "sqrt",
        series: |x, _| series::sqrt(x),
        host: kernel::sqrt::<f64>,
        range: (0.0, 1e4),
        edges: &[0.0, 1.0, 2.0, 1e-300, 1e300],
    },
    Sweep {
        name: "inverse_sqrt",
        series: |x, _| series::inverse_sqrt(x),
        host: kernel::inverse_sqrt::<f64>,
        range: (1e-3, 1e4),
        edges: &[1.0, 4.0, 0.25],
    },
    Sweep {
        name: "pow",
        series: |x, _| series::pow(x, POW_EXPONENT),
        host: |x| kernel::pow(x, POW_EXPONENT),
        range: (0.0, 10.0),
        edges: &[0.0, 1.0, 2.0, 0.5],
    },
    Sweep {
        name: "floor",
        series: |x, _| series::floor(x),
        host: kernel::floor::<f64>,
        range: (-10.5, 10.5),
        edges: ROUNDING_EDGES,
    },
    Sweep {
        name: "ceil",
        series: |x, _| series::ceil(x),
        host: kernel::ceil::<f64>,
        range: (-10.5, 10.5),
        edges: ROUNDING_EDGES,
    },
    Sweep {
        name: "round",
        series: |x, _| series::round(x),
        host: kernel::round::<f64>,
        range: (-10.5, 10.5),
        edges: ROUNDING_EDGES,
    },
    Sweep {
        name: "trunc",
        series: |x, _| series::trunc(x),
        host: kernel::trunc::<f64>,
        range: (-10.5, 10.5),
        edges: ROUNDING_EDGES,
    },
];

/// Names of every function the report can cover, in report order.
pub fn function_names() -> impl Iterator<Item = &'static str> {
    SWEEPS.iter().map(|sweep| sweep.name)
}

/// Disagreement between a series and a host result.
fn error(series: f64, host: f64) -> f64 {
    if series.is_nan() || host.is_nan() {
        return if series.is_nan() && host.is_nan() { 0.0 } else { f64::INFINITY };
    }
    if series == host {
        // Covers matching infinities.
        return 0.0;
    }
    let diff = (series - host).abs();
    if host.abs() > 1.0 {
        diff / host.abs()
    } else {
        diff
    }
}

fn sample_inputs(sweep: &Sweep, samples: usize) -> impl Iterator<Item = f64> + '_ {
    let (lo, hi) = sweep.range;
    let steps = samples.max(2) - 1;
    (0..=steps)
        .map(move |i| lo + (hi - lo) * (i as f64 / steps as f64))
        .chain(sweep.edges.iter().copied())
}

fn measure(sweep: &Sweep, samples: usize, max_terms: usize, tolerance: f64) -> FunctionAccuracy {
    let mut count = 0;
    let mut max_error = 0.0;
    let mut worst_input = sweep.range.0;
    for x in sample_inputs(sweep, samples) {
        let s = (sweep.series)(x, max_terms);
        let h = (sweep.host)(x);
        let e = error(s, h);
        trace!("{}({}) series={} host={} error={:e}", sweep.name, x, s, h, e);
        if e > max_error {
            max_error = e;
            worst_input = x;
        }
        count += 1;
    }
    FunctionAccuracy {
        function: sweep.name.to_string(),
        samples: count,
        max_error,
        worst_input,
        passed: max_error <= tolerance,
    }
}

impl AccuracyReport {
    /// Measures every configured function.
    ///
    /// Fails if the configuration names a function the report does not know.
    pub fn generate(config: &Config) -> anyhow::Result<Self> {
        let wanted = &config.report.functions;
        let is_known = |name: &String| function_names().any(|known| known == name.as_str());
        if let Some(unknown) = wanted.iter().find(|name| !is_known(name)) {
            bail!(
                "Unknown function {:?} in report configuration (known: {})",
                unknown,
                function_names().collect::<Vec<_>>().join(", ")
            );
        }

        let max_terms = config.series.effective_max_terms();
        let tolerance = config.report.tolerance;
        debug!(
            "Generating accuracy report: {} samples, {} terms, tolerance {:e}",
            config.report.samples, max_terms, tolerance
        );

        let results = SWEEPS
            .iter()
            .filter(|sweep| wanted.is_empty() || wanted.iter().any(|name| name == sweep.name))
            .map(|sweep| measure(sweep, config.report.samples, max_terms, tolerance))
            .collect();

        Ok(AccuracyReport {
            max_terms,
            tolerance,
            results,
        })
    }

    /// True when every measured function is within tolerance.
    pub fn passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &FunctionAccuracy> {
        self.results.iter().filter(|r| !r.passed)
    }
}
