// src/kernel.rs

//! # Scalar Transcendental Kernel
//!
//! Each function exists once logically and twice physically:
//!
//! - the **constant-evaluation path**, the `const fn` series expansions in
//!   [`series`], usable to initialise `const` items;
//! - the **runtime path**, which delegates to the host's `f32`/`f64` math
//!   routines.
//!
//! The path is picked by an [`EvalContext`] type parameter. The choice is a
//! compile-time constant per call site, so the untaken branch is removed during
//! monomorphization. The plain free functions ([`sin`], [`atan2`], ...) use
//! [`RuntimeEval`]; the `*_in` variants take the context explicitly.
//!
//! The [`Transcendental`] trait is implemented for `f32`, `f64`, and
//! componentwise for [`Vector`](crate::Vector) and [`Matrix`](crate::Matrix),
//! so every function here accepts all of them.
//!
//! The reciprocal functions (`csc`, `sec`, `cot`, `csch`, `sech`, `coth`) and
//! their inverses are compositions of the primary functions with a
//! zero-guarded reciprocal: a zero denominator yields a signed infinity.

pub mod series;

use crate::traits::Float;
use core::ops::{Add, Mul};

// --- Evaluation Context ---

/// Compile-time marker selecting which implementation a kernel call uses.
pub trait EvalContext {
    /// `true` selects the series expansion, `false` the host routine.
    const CONSTANT: bool;
}

/// Selects the bounded series expansions of [`series`].
#[derive(Debug, Clone, Copy)]
pub enum ConstEval {}

/// Selects the host's runtime math routines.
#[derive(Debug, Clone, Copy)]
pub enum RuntimeEval {}

impl EvalContext for ConstEval {
    const CONSTANT: bool = true;
}

impl EvalContext for RuntimeEval {
    const CONSTANT: bool = false;
}

// --- Transcendental ---

/// Values the kernel functions apply to.
///
/// Scalars implement the primary functions directly; vectors and matrices
/// apply the component implementation to every element.
pub trait Transcendental: Copy {
    fn sin_in<C: EvalContext>(self) -> Self;
    fn cos_in<C: EvalContext>(self) -> Self;
    fn tan_in<C: EvalContext>(self) -> Self;
    fn asin_in<C: EvalContext>(self) -> Self;
    fn acos_in<C: EvalContext>(self) -> Self;
    fn atan_in<C: EvalContext>(self) -> Self;
    /// `self` is `y`; the argument is `x`.
    fn atan2_in<C: EvalContext>(self, x: Self) -> Self;

    fn sinh_in<C: EvalContext>(self) -> Self;
    fn cosh_in<C: EvalContext>(self) -> Self;
    fn tanh_in<C: EvalContext>(self) -> Self;
    fn asinh_in<C: EvalContext>(self) -> Self;
    fn acosh_in<C: EvalContext>(self) -> Self;
    fn atanh_in<C: EvalContext>(self) -> Self;

    fn exp_in<C: EvalContext>(self) -> Self;
    fn exp2_in<C: EvalContext>(self) -> Self;
    fn exp10_in<C: EvalContext>(self) -> Self;
    fn log_in<C: EvalContext>(self) -> Self;
    fn log2_in<C: EvalContext>(self) -> Self;
    fn log10_in<C: EvalContext>(self) -> Self;

    fn sqrt_in<C: EvalContext>(self) -> Self;
    fn inverse_sqrt_in<C: EvalContext>(self) -> Self;
    fn pow_in<C: EvalContext>(self, exponent: Self) -> Self;

    fn floor_in<C: EvalContext>(self) -> Self;
    fn ceil_in<C: EvalContext>(self) -> Self;
    fn round_in<C: EvalContext>(self) -> Self;
    fn trunc_in<C: EvalContext>(self) -> Self;

    /// `1 / self`, with a signed infinity for a zero input.
    fn recip_guarded(self) -> Self;

    /// `self / den`, with a signed infinity for a zero denominator.
    fn div_guarded(self, den: Self) -> Self;
}

macro_rules! dual {
    ($name:ident => $series:ident, |$x:ident| $host:expr) => {
        #[inline]
        fn $name<C: EvalContext>(self) -> Self {
            let $x = self;
            if C::CONSTANT {
                series::$series($x as f64) as Self
            } else {
                $host
            }
        }
    };
}

macro_rules! impl_transcendental_float {
    ($($t:ident),*) => {
        $(
            impl Transcendental for $t {
                dual!(sin_in => sin, |x| x.sin());
                dual!(cos_in => cos, |x| x.cos());
                dual!(tan_in => tan, |x| x.tan());
                dual!(asin_in => asin, |x| x.asin());
                dual!(acos_in => acos, |x| x.acos());
                dual!(atan_in => atan, |x| x.atan());

                #[inline]
                fn atan2_in<C: EvalContext>(self, x: Self) -> Self {
                    if C::CONSTANT {
                        series::atan2(self as f64, x as f64) as Self
                    } else if x == 0.0 && self == 0.0 {
                        // Matches the series path for every signed zero.
                        0.0
                    } else {
                        self.atan2(x)
                    }
                }

                dual!(sinh_in => sinh, |x| x.sinh());
                dual!(cosh_in => cosh, |x| x.cosh());
                dual!(tanh_in => tanh, |x| x.tanh());
                dual!(asinh_in => asinh, |x| x.asinh());
                dual!(acosh_in => acosh, |x| x.acosh());
                dual!(atanh_in => atanh, |x| x.atanh());

                dual!(exp_in => exp, |x| x.exp());
                dual!(exp2_in => exp2, |x| x.exp2());
                dual!(exp10_in => exp10, |x| (10.0 as $t).powf(x));
                dual!(log_in => log, |x| x.ln());
                dual!(log2_in => log2, |x| x.log2());
                dual!(log10_in => log10, |x| x.log10());

                dual!(sqrt_in => sqrt, |x| x.sqrt());
                dual!(inverse_sqrt_in => inverse_sqrt, |x| x.sqrt().recip_guarded());

                #[inline]
                fn pow_in<C: EvalContext>(self, exponent: Self) -> Self {
                    if C::CONSTANT {
                        series::pow(self as f64, exponent as f64) as Self
                    } else {
                        self.powf(exponent)
                    }
                }

                dual!(floor_in => floor, |x| x.floor());
                dual!(ceil_in => ceil, |x| x.ceil());
                dual!(round_in => round, |x| x.round());
                dual!(trunc_in => trunc, |x| x.trunc());

                #[inline]
                fn recip_guarded(self) -> Self {
                    (1.0 as $t).div_guarded(self)
                }

                #[inline]
                fn div_guarded(self, den: Self) -> Self {
                    if den == 0.0 && self != 0.0 && !self.is_nan() {
                        let sign = if self.is_sign_negative() != den.is_sign_negative() {
                            -1.0
                        } else {
                            1.0
                        };
                        return <$t as Float>::INFINITY.copysign(sign);
                    }
                    self / den
                }
            }
        )*
    };
}

impl_transcendental_float!(f32, f64);

// --- Free Functions ---

macro_rules! unary_fns {
    ($(#[$doc:meta] $name:ident, $name_in:ident;)*) => {
        $(
            #[$doc]
            #[inline]
            pub fn $name<T: Transcendental>(x: T) -> T {
                x.$name_in::<RuntimeEval>()
            }

            #[$doc]
            ///
            /// Evaluates in the context `C`.
            #[inline]
            pub fn $name_in<C: EvalContext, T: Transcendental>(x: T) -> T {
                x.$name_in::<C>()
            }
        )*
    };
}

unary_fns! {
    /// Sine of an angle in radians.
    sin, sin_in;
    /// Cosine of an angle in radians.
    cos, cos_in;
    /// Tangent of an angle in radians.
    tan, tan_in;
    /// Arcsine; NaN outside [-1, 1].
    asin, asin_in;
    /// Arccosine; NaN outside [-1, 1].
    acos, acos_in;
    /// Arctangent.
    atan, atan_in;
    /// Hyperbolic sine.
    sinh, sinh_in;
    /// Hyperbolic cosine.
    cosh, cosh_in;
    /// Hyperbolic tangent.
    tanh, tanh_in;
    /// Inverse hyperbolic sine.
    asinh, asinh_in;
    /// Inverse hyperbolic cosine; NaN below 1.
    acosh, acosh_in;
    /// Inverse hyperbolic tangent; NaN outside [-1, 1].
    atanh, atanh_in;
    /// e raised to `x`.
    exp, exp_in;
    /// 2 raised to `x`.
    exp2, exp2_in;
    /// 10 raised to `x`.
    exp10, exp10_in;
    /// Natural logarithm; NaN for negative input.
    log, log_in;
    /// Base-2 logarithm.
    log2, log2_in;
    /// Base-10 logarithm.
    log10, log10_in;
    /// Square root; NaN for negative input.
    sqrt, sqrt_in;
    /// `1 / sqrt(x)`.
    inverse_sqrt, inverse_sqrt_in;
    /// Largest integer not above `x`.
    floor, floor_in;
    /// Smallest integer not below `x`.
    ceil, ceil_in;
    /// Nearest integer; halfway cases round away from zero.
    round, round_in;
    /// Integer part of `x`, rounding toward zero.
    trunc, trunc_in;
}

/// Quadrant-aware arctangent of `y / x`. `atan2(0, 0)` is 0.
#[inline]
pub fn atan2<T: Transcendental>(y: T, x: T) -> T {
    y.atan2_in::<RuntimeEval>(x)
}

/// [`atan2`] evaluated in the context `C`.
#[inline]
pub fn atan2_in<C: EvalContext, T: Transcendental>(y: T, x: T) -> T {
    y.atan2_in::<C>(x)
}

/// `base` raised to `exponent`.
#[inline]
pub fn pow<T: Transcendental>(base: T, exponent: T) -> T {
    base.pow_in::<RuntimeEval>(exponent)
}

/// [`pow`] evaluated in the context `C`.
#[inline]
pub fn pow_in<C: EvalContext, T: Transcendental>(base: T, exponent: T) -> T {
    base.pow_in::<C>(exponent)
}

// --- Reciprocal Family ---

macro_rules! composed_fns {
    ($(#[$doc:meta] $name:ident, $name_in:ident => |$x:ident| $body:expr;)*) => {
        $(
            #[$doc]
            #[inline]
            pub fn $name<T: Transcendental>(x: T) -> T {
                $name_in::<RuntimeEval, T>(x)
            }

            #[$doc]
            ///
            /// Evaluates in the context `C`.
            #[inline]
            pub fn $name_in<C: EvalContext, T: Transcendental>($x: T) -> T {
                $body
            }
        )*
    };
}

composed_fns! {
    /// Cosecant, `1 / sin(x)`.
    csc, csc_in => |x| x.sin_in::<C>().recip_guarded();
    /// Secant, `1 / cos(x)`.
    sec, sec_in => |x| x.cos_in::<C>().recip_guarded();
    /// Cotangent, `cos(x) / sin(x)`.
    cot, cot_in => |x| x.cos_in::<C>().div_guarded(x.sin_in::<C>());
    /// Hyperbolic cosecant, `1 / sinh(x)`.
    csch, csch_in => |x| x.sinh_in::<C>().recip_guarded();
    /// Hyperbolic secant, `1 / cosh(x)`.
    sech, sech_in => |x| x.cosh_in::<C>().recip_guarded();
    /// Hyperbolic cotangent, `cosh(x) / sinh(x)`.
    coth, coth_in => |x| x.cosh_in::<C>().div_guarded(x.sinh_in::<C>());
    /// Inverse cosecant, `asin(1 / x)`.
    acsc, acsc_in => |x| x.recip_guarded().asin_in::<C>();
    /// Inverse secant, `acos(1 / x)`.
    asec, asec_in => |x| x.recip_guarded().acos_in::<C>();
    /// Inverse cotangent, `atan(1 / x)`.
    acot, acot_in => |x| x.recip_guarded().atan_in::<C>();
    /// Inverse hyperbolic cosecant, `asinh(1 / x)`.
    acsch, acsch_in => |x| x.recip_guarded().asinh_in::<C>();
    /// Inverse hyperbolic secant, `acosh(1 / x)`.
    asech, asech_in => |x| x.recip_guarded().acosh_in::<C>();
    /// Inverse hyperbolic cotangent, `atanh(1 / x)`.
    acoth, acoth_in => |x| x.recip_guarded().atanh_in::<C>();
}

// --- Angles ---

/// Half a turn in radians.
pub const PI: f64 = core::f64::consts::PI;
/// A quarter turn in radians.
pub const HALF_PI: f64 = core::f64::consts::FRAC_PI_2;
/// An eighth of a turn in radians.
pub const QUARTER_PI: f64 = core::f64::consts::FRAC_PI_4;
/// A full turn in radians.
pub const TAU: f64 = core::f64::consts::TAU;

/// Degrees to radians.
#[inline]
pub fn radians<T: Float>(degrees: T) -> T {
    degrees * T::from_f64(core::f64::consts::PI / 180.0)
}

/// Radians to degrees.
#[inline]
pub fn degrees<T: Float>(radians: T) -> T {
    radians * T::from_f64(180.0 / core::f64::consts::PI)
}

// --- Interpolation ---
//
// Plain arithmetic, identical on both paths; [`series::lerp`],
// [`series::smoothstep`] and [`series::step`] are the `const fn` forms.

fn clamp_unit<T: Float>(t: T) -> T {
    if t < T::ZERO {
        T::ZERO
    } else if t > T::ONE {
        T::ONE
    } else {
        t
    }
}

/// Linear blend from `a` at `t = 0` to `b` at `t = 1`, with `t` clamped to
/// [0, 1]. `a` and `b` may be scalars, vectors or matrices.
#[inline]
pub fn lerp<V, T>(a: V, b: V, t: T) -> V
where
    T: Float,
    V: Add<Output = V> + Mul<T, Output = V>,
{
    let t = clamp_unit(t);
    a * (T::ONE - t) + b * t
}

/// Hermite ease: 0 at or below `edge0`, 1 at or above `edge1`, smooth between.
#[inline]
pub fn smoothstep<T: Float>(edge0: T, edge1: T, x: T) -> T {
    let t = clamp_unit((x - edge0) / (edge1 - edge0));
    let two = T::ONE + T::ONE;
    t * t * (two + T::ONE - two * t)
}

/// 0 below `edge`, 1 from `edge` on.
#[inline]
pub fn step<T: Float>(edge: T, x: T) -> T {
    if x < edge {
        T::ZERO
    } else {
        T::ONE
    }
}
