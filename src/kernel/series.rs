// src/kernel/series.rs

//! Constant-evaluation path of the scalar kernel.
//!
//! Every function here is a `const fn` built from bounded recursive series
//! expansions, so it can initialise `const` and `static` items:
//!
//! ```
//! use core_math::kernel::series;
//!
//! const QUARTER_TURN: f64 = series::atan(1.0) * 2.0;
//! assert!((QUARTER_TURN - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! ```
//!
//! All evaluation happens in `f64`. `f32` callers cast in and out, which
//! rounds the result once and keeps it within `f32` precision.
//!
//! A series stops after [`SERIES_TERM_CAP`] terms, or as soon as a term no
//! longer changes the running sum by more than `f64::EPSILON` relative to it.
//! Terms past the cap contribute nothing.

use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, LN_10, LN_2, LOG10_E, LOG2_E, PI};

/// Maximum number of terms any series expansion may sum.
pub const SERIES_TERM_CAP: usize = 100;

const EPSILON: f64 = f64::EPSILON;
const INFINITY: f64 = f64::INFINITY;
const NAN: f64 = f64::NAN;

// pi/2 in three 33-bit pieces; `k * PIO2_n` is exact for |k| < 2^20.
const PIO2_1: f64 = 1.570_796_326_734_125_614_17e+00;
const PIO2_2: f64 = 6.077_100_506_303_965_976_60e-11;
const PIO2_3: f64 = 2.022_266_248_711_166_455_80e-21;

// Above this magnitude the three-piece split loses bits and the quadrant
// reduction switches to the 2/pi bit table.
const MEDIUM_REDUCTION_LIMIT: f64 = 1_048_576.0;

// Bits of 2/pi after the binary point, most significant first. Enough for
// the largest finite f64 plus a 192-bit window.
const TWO_OVER_PI: [u64; 20] = [
    0xA2F9836E4E441529, 0xFC2757D1F534DDC0,
    0xDB6295993C439041, 0xFE5163ABDEBBC561,
    0xB7246E3A424DD2E0, 0x06492EEA09D1921C,
    0xFE1DEB1CB129A73E, 0xE88235F52EBB4484,
    0xE99C7026B45F7E41, 0x3991D639835339F4,
    0x9C845F8BBDF9283B, 0x1FF897FFDE05980F,
    0xEF2F118B5A0A6D1F, 0x6D367ECF27CB09B7,
    0x4F463F669E5FEA2D, 0x7527BAC7EBE5F17B,
    0x3D0739F78A5292EA, 0x6BFB5FB11F8D5D08,
    0x56033046FC7B6BAB, 0xF0CFBC209AF4361D,
];

const LN2_HI: f64 = 6.931_471_803_691_238_164_90e-01;
const LN2_LO: f64 = 1.908_214_929_270_587_700_02e-10;

// tan(pi/8); atan arguments above this are shifted by pi/4.
const TAN_PI_8: f64 = 0.414_213_562_373_095_048_80;

// Largest/smallest arguments for which exp is finite / non-zero.
const EXP_OVERFLOW: f64 = 709.782_712_893_383_973_096;
const EXP_UNDERFLOW: f64 = -745.133_219_101_941_108_420;

// e^(-2|x|) vanishes against 1 in f64 beyond this: tanh rounds to +-1 and
// sinh/cosh reduce to e^|x| / 2.
const HYPERBOLIC_TAIL: f64 = 22.0;

// --- Bit-level helpers ---

#[inline]
const fn abs(x: f64) -> f64 {
    if x < 0.0 {
        -x
    } else {
        x
    }
}

#[inline]
const fn is_nan(x: f64) -> bool {
    #[allow(clippy::eq_op)]
    let unordered = x != x;
    unordered
}

#[inline]
const fn is_sign_negative(x: f64) -> bool {
    x.to_bits() >> 63 == 1
}

#[inline]
const fn copysign(magnitude: f64, sign: f64) -> f64 {
    if is_sign_negative(sign) {
        -abs(magnitude)
    } else {
        abs(magnitude)
    }
}

/// Rounds half away from zero. Only valid for |x| < 2^62.
#[inline]
const fn round_to_i64(x: f64) -> i64 {
    if x < 0.0 {
        (x - 0.5) as i64
    } else {
        (x + 0.5) as i64
    }
}

/// 2^k for k in the normal exponent range.
#[inline]
const fn pow2(k: i32) -> f64 {
    f64::from_bits(((k + 1023) as u64) << 52)
}

/// x * 2^k without overflowing the intermediate power of two.
const fn scale_pow2(x: f64, k: i32) -> f64 {
    if k > 1023 || k < -1022 {
        let half = k / 2;
        x * pow2(half) * pow2(k - half)
    } else {
        x * pow2(k)
    }
}

/// Unbiased binary exponent of a finite, positive, non-zero `x`.
const fn exponent(x: f64) -> i32 {
    let biased = ((x.to_bits() >> 52) & 0x7ff) as i32;
    if biased == 0 {
        // Subnormal: renormalise first.
        exponent(x * pow2(54)) - 54
    } else {
        biased - 1023
    }
}

/// `num / den`, returning a signed infinity instead of dividing by zero.
pub const fn guarded_div(num: f64, den: f64) -> f64 {
    if den == 0.0 {
        if num == 0.0 || is_nan(num) {
            return NAN;
        }
        let negative = is_sign_negative(num) != is_sign_negative(den);
        return if negative { -INFINITY } else { INFINITY };
    }
    num / den
}

/// `1 / x` with the zero guard of [`guarded_div`].
pub const fn recip(x: f64) -> f64 {
    guarded_div(1.0, x)
}

#[inline]
const fn converged(term: f64, sum: f64) -> bool {
    abs(term) <= EPSILON * abs(sum)
}

// --- Series bodies ---
//
// Each helper carries the running sum and the next term as accumulators and
// recurses once per term. `n` counts terms already summed.

/// sin(r) = r - r^3/3! + r^5/5! - ...
const fn sin_series(r2: f64, n: usize, term: f64, sum: f64, max_terms: usize) -> f64 {
    if n >= max_terms {
        return sum;
    }
    let sum = sum + term;
    if converged(term, sum) {
        return sum;
    }
    let k = (2 * n + 2) as f64;
    sin_series(r2, n + 1, -term * r2 / (k * (k + 1.0)), sum, max_terms)
}

/// cos(r) = 1 - r^2/2! + r^4/4! - ...
const fn cos_series(r2: f64, n: usize, term: f64, sum: f64, max_terms: usize) -> f64 {
    if n >= max_terms {
        return sum;
    }
    let sum = sum + term;
    if converged(term, sum) {
        return sum;
    }
    let k = (2 * n + 1) as f64;
    cos_series(r2, n + 1, -term * r2 / (k * (k + 1.0)), sum, max_terms)
}

/// atan(x) = x - x^3/3 + x^5/5 - ... for |x| <= tan(pi/8).
const fn atan_series(x2: f64, n: usize, power: f64, sum: f64, max_terms: usize) -> f64 {
    if n >= max_terms {
        return sum;
    }
    let magnitude = power / (2 * n + 1) as f64;
    let term = if n % 2 == 0 { magnitude } else { -magnitude };
    let sum = sum + term;
    if converged(term, sum) {
        return sum;
    }
    atan_series(x2, n + 1, power * x2, sum, max_terms)
}

/// asin(x) = sum (2n)! / (4^n (n!)^2 (2n+1)) x^(2n+1) for |x| <= 1/2.
const fn asin_series(x2: f64, n: usize, term: f64, sum: f64, max_terms: usize) -> f64 {
    if n >= max_terms {
        return sum;
    }
    let sum = sum + term;
    if converged(term, sum) {
        return sum;
    }
    let odd = (2 * n + 1) as f64;
    let next = term * x2 * odd * odd / ((odd + 1.0) * (odd + 2.0));
    asin_series(x2, n + 1, next, sum, max_terms)
}

/// sinh(x) = x + x^3/3! + x^5/5! + ... used for |x| < 1.
const fn sinh_series(x2: f64, n: usize, term: f64, sum: f64, max_terms: usize) -> f64 {
    if n >= max_terms {
        return sum;
    }
    let sum = sum + term;
    if converged(term, sum) {
        return sum;
    }
    let k = (2 * n + 2) as f64;
    sinh_series(x2, n + 1, term * x2 / (k * (k + 1.0)), sum, max_terms)
}

/// e^r = sum r^i / i!
const fn exp_series(r: f64, n: usize, term: f64, sum: f64, max_terms: usize) -> f64 {
    if n >= max_terms {
        return sum;
    }
    let sum = sum + term;
    if converged(term, sum) {
        return sum;
    }
    exp_series(r, n + 1, term * r / (n + 1) as f64, sum, max_terms)
}

/// ln(m) = 2 * (z + z^3/3 + z^5/5 + ...) with z = (m - 1) / (m + 1).
const fn log_series(z2: f64, n: usize, power: f64, sum: f64, max_terms: usize) -> f64 {
    if n >= max_terms {
        return sum;
    }
    let term = power / (2 * n + 1) as f64;
    let sum = sum + term;
    if converged(term, sum) {
        return sum;
    }
    log_series(z2, n + 1, power * z2, sum, max_terms)
}

/// Newton-Raphson iteration for sqrt(m), m in [1, 4).
const fn sqrt_newton(m: f64, guess: f64, n: usize, max_terms: usize) -> f64 {
    if n >= max_terms {
        return guess;
    }
    let next = 0.5 * (guess + m / guess);
    if abs(next - guess) <= EPSILON * next {
        return next;
    }
    sqrt_newton(m, next, n + 1, max_terms)
}

// --- Trigonometric ---

/// 64 bits of [`TWO_OVER_PI`] starting at bit `start`; zero past the table.
const fn two_over_pi_bits(start: usize) -> u64 {
    let word = start / 64;
    let offset = start % 64;
    let hi = if word < TWO_OVER_PI.len() { TWO_OVER_PI[word] } else { 0 };
    if offset == 0 {
        return hi;
    }
    let lo = if word + 1 < TWO_OVER_PI.len() { TWO_OVER_PI[word + 1] } else { 0 };
    (hi << offset) | (lo >> (64 - offset))
}

/// 64 bits of a little-endian 256-bit integer starting at bit `start`.
const fn wide_bits(limbs: &[u64; 4], start: usize) -> u64 {
    let limb = start / 64;
    let offset = start % 64;
    if offset == 0 {
        return limbs[limb];
    }
    let mut bits = limbs[limb] >> offset;
    if limb + 1 < 4 {
        bits |= limbs[limb + 1] << (64 - offset);
    }
    bits
}

/// Quadrant reduction for finite `x >= MEDIUM_REDUCTION_LIMIT`.
///
/// With `x = m * 2^e`, only the bits of 2/pi from position `e - 1` on affect
/// `x * 2/pi mod 4`, so a 192-bit window of the table times the 53-bit
/// mantissa gives the quadrant and the fraction exactly enough.
const fn reduce_quadrant_large(x: f64) -> (f64, i64) {
    let bits = x.to_bits();
    let mantissa = (bits & ((1 << 52) - 1)) | (1 << 52);
    let e = ((bits >> 52) & 0x7ff) as i64 - 1075;
    // First table bit in the window, counting from 1 at 2^-1.
    let first = if e - 1 > 1 { e - 1 } else { 1 };
    let start = (first - 1) as usize;
    let window = [
        two_over_pi_bits(start),
        two_over_pi_bits(start + 64),
        two_over_pi_bits(start + 128),
    ];

    let m = mantissa as u128;
    let p = m * window[2] as u128;
    let l0 = p as u64;
    let p = m * window[1] as u128 + (p >> 64);
    let l1 = p as u64;
    let p = m * window[0] as u128 + (p >> 64);
    let product = [l0, l1, p as u64, (p >> 64) as u64];

    // Bits below `point` are the fraction of a quarter turn.
    let point = (first + 191 - e) as usize;
    let mut quadrant = (wide_bits(&product, point) & 3) as i64;
    // Read as signed, the fraction lands in [-1/2, 1/2).
    let fraction = wide_bits(&product, point - 64) as i64;
    if fraction < 0 {
        quadrant += 1;
    }
    let r = fraction as f64 * pow2(-64) * FRAC_PI_2;
    (r, quadrant & 3)
}

/// Reduces finite `x` to `r` in about [-pi/4, pi/4] and the quadrant
/// `q` in 0..4 with `x = r + (q + 4n) * pi/2`.
const fn reduce_quadrant(x: f64) -> (f64, i64) {
    let ax = abs(x);
    if ax >= MEDIUM_REDUCTION_LIMIT {
        let (r, quadrant) = reduce_quadrant_large(ax);
        return if x < 0.0 { (-r, (4 - quadrant) & 3) } else { (r, quadrant) };
    }
    let k = round_to_i64(x * (2.0 / PI));
    let kf = k as f64;
    let r = ((x - kf * PIO2_1) - kf * PIO2_2) - kf * PIO2_3;
    (r, k.rem_euclid(4))
}

/// Sine with an explicit term cap.
pub const fn sin_terms(x: f64, max_terms: usize) -> f64 {
    if is_nan(x) || abs(x) == INFINITY {
        return NAN;
    }
    if x == 0.0 {
        return x;
    }
    let (r, quadrant) = reduce_quadrant(x);
    let r2 = r * r;
    match quadrant {
        0 => sin_series(r2, 0, r, 0.0, max_terms),
        1 => cos_series(r2, 0, 1.0, 0.0, max_terms),
        2 => -sin_series(r2, 0, r, 0.0, max_terms),
        _ => -cos_series(r2, 0, 1.0, 0.0, max_terms),
    }
}

/// Cosine with an explicit term cap.
pub const fn cos_terms(x: f64, max_terms: usize) -> f64 {
    if is_nan(x) || abs(x) == INFINITY {
        return NAN;
    }
    let (r, quadrant) = reduce_quadrant(x);
    let r2 = r * r;
    match quadrant {
        0 => cos_series(r2, 0, 1.0, 0.0, max_terms),
        1 => -sin_series(r2, 0, r, 0.0, max_terms),
        2 => -cos_series(r2, 0, 1.0, 0.0, max_terms),
        _ => sin_series(r2, 0, r, 0.0, max_terms),
    }
}

pub const fn sin(x: f64) -> f64 {
    sin_terms(x, SERIES_TERM_CAP)
}

pub const fn cos(x: f64) -> f64 {
    cos_terms(x, SERIES_TERM_CAP)
}

pub const fn tan(x: f64) -> f64 {
    guarded_div(sin(x), cos(x))
}

/// Arcsine with an explicit term cap. NaN outside [-1, 1].
pub const fn asin_terms(x: f64, max_terms: usize) -> f64 {
    if is_nan(x) || x < -1.0 || x > 1.0 {
        return NAN;
    }
    if x == 0.0 {
        return x;
    }
    let ax = abs(x);
    if ax <= 0.5 {
        return asin_series(x * x, 0, x, 0.0, max_terms);
    }
    // asin(x) = pi/2 - 2 asin(sqrt((1 - x) / 2)) moves the argument below 1/2.
    let s = sqrt((1.0 - ax) * 0.5);
    let inner = asin_series(s * s, 0, s, 0.0, max_terms);
    copysign(FRAC_PI_2 - 2.0 * inner, x)
}

pub const fn asin(x: f64) -> f64 {
    asin_terms(x, SERIES_TERM_CAP)
}

/// Arccosine. NaN outside [-1, 1].
pub const fn acos(x: f64) -> f64 {
    let a = asin(x);
    if is_nan(a) {
        return NAN;
    }
    FRAC_PI_2 - a
}

/// Arctangent with an explicit term cap.
///
/// Arguments beyond 1 use `atan(x) = +-pi/2 - atan(1/x)`; arguments beyond
/// tan(pi/8) use `atan(x) = pi/4 + atan((x - 1) / (x + 1))`.
pub const fn atan_terms(x: f64, max_terms: usize) -> f64 {
    if is_nan(x) {
        return NAN;
    }
    if x == INFINITY {
        return FRAC_PI_2;
    }
    if x == -INFINITY {
        return -FRAC_PI_2;
    }
    if x > 1.0 {
        return FRAC_PI_2 - atan_terms(1.0 / x, max_terms);
    }
    if x < -1.0 {
        return -FRAC_PI_2 - atan_terms(1.0 / x, max_terms);
    }
    if x > TAN_PI_8 {
        return FRAC_PI_4 + atan_terms((x - 1.0) / (x + 1.0), max_terms);
    }
    if x < -TAN_PI_8 {
        return -FRAC_PI_4 + atan_terms((x + 1.0) / (1.0 - x), max_terms);
    }
    if x == 0.0 {
        return x;
    }
    atan_series(x * x, 0, x, 0.0, max_terms)
}

pub const fn atan(x: f64) -> f64 {
    atan_terms(x, SERIES_TERM_CAP)
}

/// Quadrant-aware arctangent of `y / x`.
///
/// `atan2(0, 0)` returns 0. The value is arbitrary and kept only so callers
/// get a finite answer.
pub const fn atan2(y: f64, x: f64) -> f64 {
    if is_nan(x) || is_nan(y) {
        return NAN;
    }
    if abs(x) == INFINITY {
        let angle = match (abs(y) == INFINITY, x > 0.0) {
            (true, true) => FRAC_PI_4,
            (true, false) => 3.0 * FRAC_PI_4,
            (false, true) => 0.0,
            (false, false) => PI,
        };
        return copysign(angle, y);
    }
    if abs(y) == INFINITY {
        return copysign(FRAC_PI_2, y);
    }
    if x > 0.0 {
        atan(y / x)
    } else if x < 0.0 {
        // The sign bit decides, so -0 lands on -pi like the host routine.
        if is_sign_negative(y) {
            atan(y / x) - PI
        } else {
            atan(y / x) + PI
        }
    } else if y > 0.0 {
        FRAC_PI_2
    } else if y < 0.0 {
        -FRAC_PI_2
    } else {
        0.0
    }
}

// --- Hyperbolic ---

/// Hyperbolic sine with an explicit term cap.
pub const fn sinh_terms(x: f64, max_terms: usize) -> f64 {
    // Zero and non-finite inputs map to themselves, keeping the sign of zero.
    if is_nan(x) || abs(x) == INFINITY || x == 0.0 {
        return x;
    }
    if abs(x) < 1.0 {
        return sinh_series(x * x, 0, x, 0.0, max_terms);
    }
    if abs(x) > HYPERBOLIC_TAIL {
        return copysign(half_exp(abs(x), max_terms), x);
    }
    0.5 * (exp_terms(x, max_terms) - exp_terms(-x, max_terms))
}

/// Hyperbolic cosine with an explicit term cap.
pub const fn cosh_terms(x: f64, max_terms: usize) -> f64 {
    if is_nan(x) {
        return NAN;
    }
    if abs(x) == INFINITY {
        return INFINITY;
    }
    if abs(x) > HYPERBOLIC_TAIL {
        return half_exp(abs(x), max_terms);
    }
    0.5 * (exp_terms(x, max_terms) + exp_terms(-x, max_terms))
}

/// e^x / 2 for positive `x`, finite up to ln(2 * f64::MAX).
const fn half_exp(x: f64, max_terms: usize) -> f64 {
    let root = exp_terms(0.5 * x, max_terms);
    0.5 * root * root
}

pub const fn sinh(x: f64) -> f64 {
    sinh_terms(x, SERIES_TERM_CAP)
}

pub const fn cosh(x: f64) -> f64 {
    cosh_terms(x, SERIES_TERM_CAP)
}

pub const fn tanh(x: f64) -> f64 {
    if is_nan(x) {
        return NAN;
    }
    if abs(x) > HYPERBOLIC_TAIL {
        return copysign(1.0, x);
    }
    guarded_div(sinh(x), cosh(x))
}

/// Inverse hyperbolic sine.
pub const fn asinh(x: f64) -> f64 {
    if is_nan(x) || abs(x) == INFINITY {
        return x;
    }
    let ax = abs(x);
    let magnitude = if ax > 1e150 {
        log(ax) + LN_2
    } else {
        log(ax + sqrt(ax * ax + 1.0))
    };
    copysign(magnitude, x)
}

/// Inverse hyperbolic cosine. NaN below 1.
pub const fn acosh(x: f64) -> f64 {
    if is_nan(x) || x < 1.0 {
        return NAN;
    }
    if x > 1e150 {
        return log(x) + LN_2;
    }
    log(x + sqrt(x * x - 1.0))
}

/// Inverse hyperbolic tangent. NaN outside [-1, 1], infinite at the ends.
pub const fn atanh(x: f64) -> f64 {
    if is_nan(x) || x < -1.0 || x > 1.0 {
        return NAN;
    }
    if x == 1.0 {
        return INFINITY;
    }
    if x == -1.0 {
        return -INFINITY;
    }
    0.5 * log((1.0 + x) / (1.0 - x))
}

// --- Exponential and logarithmic ---

/// e^x with an explicit term cap.
///
/// Reduces `x = k ln 2 + r` with |r| <= ln 2 / 2 and scales e^r by 2^k.
pub const fn exp_terms(x: f64, max_terms: usize) -> f64 {
    if is_nan(x) {
        return NAN;
    }
    if x > EXP_OVERFLOW {
        return INFINITY;
    }
    if x < EXP_UNDERFLOW {
        return 0.0;
    }
    let k = round_to_i64(x * LOG2_E);
    let kf = k as f64;
    let r = (x - kf * LN2_HI) - kf * LN2_LO;
    scale_pow2(exp_series(r, 0, 1.0, 0.0, max_terms), k as i32)
}

pub const fn exp(x: f64) -> f64 {
    exp_terms(x, SERIES_TERM_CAP)
}

pub const fn exp2(x: f64) -> f64 {
    exp(x * LN_2)
}

pub const fn exp10(x: f64) -> f64 {
    exp(x * LN_10)
}

/// Natural logarithm with an explicit term cap.
///
/// NaN for negative input, negative infinity at zero.
pub const fn log_terms(x: f64, max_terms: usize) -> f64 {
    if is_nan(x) || x < 0.0 {
        return NAN;
    }
    if x == 0.0 {
        return -INFINITY;
    }
    if x == INFINITY {
        return INFINITY;
    }
    if x == 1.0 {
        return 0.0;
    }
    // x = m * 2^e with m in [sqrt(1/2), sqrt(2)].
    let mut e = exponent(x);
    let mut m = scale_pow2(x, -e);
    if m > core::f64::consts::SQRT_2 {
        m *= 0.5;
        e += 1;
    }
    let z = (m - 1.0) / (m + 1.0);
    let ln_m = 2.0 * log_series(z * z, 0, z, 0.0, max_terms);
    e as f64 * LN_2 + ln_m
}

pub const fn log(x: f64) -> f64 {
    log_terms(x, SERIES_TERM_CAP)
}

pub const fn log2(x: f64) -> f64 {
    log(x) * LOG2_E
}

pub const fn log10(x: f64) -> f64 {
    log(x) * LOG10_E
}

// --- Power and root ---

/// Square root by Newton-Raphson on the mantissa.
pub const fn sqrt(x: f64) -> f64 {
    if is_nan(x) || x < 0.0 {
        return NAN;
    }
    if x == 0.0 || x == INFINITY {
        return x;
    }
    // x = m * 4^k with m in [1, 4).
    let k = exponent(x).div_euclid(2);
    let m = scale_pow2(x, -2 * k);
    let root = sqrt_newton(m, 0.5 * (1.0 + m), 0, SERIES_TERM_CAP);
    scale_pow2(root, k)
}

/// `1 / sqrt(x)`, positive infinity at zero.
pub const fn inverse_sqrt(x: f64) -> f64 {
    recip(sqrt(x))
}

/// Integer power by repeated squaring.
const fn powi(base: f64, exponent: u64) -> f64 {
    let mut result = 1.0;
    let mut base = base;
    let mut e = exponent;
    while e > 0 {
        if e & 1 == 1 {
            result *= base;
        }
        base *= base;
        e >>= 1;
    }
    result
}

/// `x^y`. Integral exponents are exact products and accept negative bases;
/// any other exponent of a finite negative base is NaN.
pub const fn pow(x: f64, y: f64) -> f64 {
    // One to any power and anything to the zeroth power are 1, even NaN.
    if y == 0.0 || x == 1.0 {
        return 1.0;
    }
    if is_nan(x) || is_nan(y) {
        return NAN;
    }
    let ay = abs(y);
    if ay == INFINITY {
        let ax = abs(x);
        return if ax == 1.0 {
            1.0
        } else if (ax > 1.0) == (y > 0.0) {
            INFINITY
        } else {
            0.0
        };
    }
    if ay < 9_007_199_254_740_992.0 && (ay as u64) as f64 == ay {
        let magnitude = powi(x, ay as u64);
        return if y < 0.0 { recip(magnitude) } else { magnitude };
    }
    if x == -INFINITY {
        return if y > 0.0 { INFINITY } else { 0.0 };
    }
    if x < 0.0 {
        return NAN;
    }
    if x == 0.0 {
        return if y > 0.0 { 0.0 } else { INFINITY };
    }
    exp(y * log(x))
}

// --- Rounding ---

// Every f64 at or beyond 2^52 in magnitude is already an integer.
const INTEGRAL_THRESHOLD: f64 = 4_503_599_627_370_496.0;

/// Rounds toward zero, keeping the sign of a zero result.
pub const fn trunc(x: f64) -> f64 {
    if is_nan(x) || abs(x) >= INTEGRAL_THRESHOLD {
        return x;
    }
    copysign((x as i64) as f64, x)
}

/// Largest integer not above `x`.
pub const fn floor(x: f64) -> f64 {
    let t = trunc(x);
    if t > x {
        t - 1.0
    } else {
        t
    }
}

/// Smallest integer not below `x`.
pub const fn ceil(x: f64) -> f64 {
    let t = trunc(x);
    if t < x {
        t + 1.0
    } else {
        t
    }
}

/// Nearest integer, halfway cases away from zero.
pub const fn round(x: f64) -> f64 {
    let t = trunc(x);
    // Exact below 2^52.
    if abs(x - t) >= 0.5 {
        t + copysign(1.0, x)
    } else {
        t
    }
}

// --- Interpolation ---

const fn clamp_unit(t: f64) -> f64 {
    if t < 0.0 {
        0.0
    } else if t > 1.0 {
        1.0
    } else {
        t
    }
}

/// Linear blend from `a` at `t = 0` to `b` at `t = 1`; `t` is clamped.
pub const fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let t = clamp_unit(t);
    a * (1.0 - t) + b * t
}

/// Hermite ease from 0 at `edge0` to 1 at `edge1`.
pub const fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    let t = clamp_unit((x - edge0) / (edge1 - edge0));
    t * t * (3.0 - 2.0 * t)
}

/// 0 below `edge`, 1 from `edge` on.
pub const fn step(edge: f64, x: f64) -> f64 {
    if x < edge {
        0.0
    } else {
        1.0
    }
}

// --- Reciprocal family ---

pub const fn csc(x: f64) -> f64 {
    recip(sin(x))
}

pub const fn sec(x: f64) -> f64 {
    recip(cos(x))
}

pub const fn cot(x: f64) -> f64 {
    guarded_div(cos(x), sin(x))
}

pub const fn csch(x: f64) -> f64 {
    recip(sinh(x))
}

pub const fn sech(x: f64) -> f64 {
    recip(cosh(x))
}

pub const fn coth(x: f64) -> f64 {
    guarded_div(cosh(x), sinh(x))
}

pub const fn acsc(x: f64) -> f64 {
    asin(recip(x))
}

pub const fn asec(x: f64) -> f64 {
    acos(recip(x))
}

pub const fn acot(x: f64) -> f64 {
    atan(recip(x))
}

pub const fn acsch(x: f64) -> f64 {
    asinh(recip(x))
}

pub const fn asech(x: f64) -> f64 {
    acosh(recip(x))
}

pub const fn acoth(x: f64) -> f64 {
    atanh(recip(x))
}

// --- Angles ---

/// Degrees to radians.
pub const fn radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Radians to degrees.
pub const fn degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}
