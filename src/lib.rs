// src/lib.rs

//! # core-math
//!
//! The numeric kernel of a real-time renderer:
//!
//! - [`kernel`]: scalar transcendental functions, each available as a `const fn`
//!   series expansion and as a call into the host's math routines;
//! - [`vector`] and [`matrix`]: fixed-size `Vector<T, N>` / `Matrix<T, R, C>`
//!   value types with elementwise arithmetic, traversal primitives, swizzles
//!   and componentwise application of the kernel;
//! - [`morton`]: Z-order bit interleaving of 2 to 4 coordinates;
//! - [`packing`]: word packing and normalized fixed-point quantization;
//! - [`traits`]: compile-time classification of all of the above.
//!
//! Everything in those modules is pure and allocation-free. [`config`] and
//! [`report`] drive the series-versus-host accuracy report of the
//! `core-math` binary.

pub mod config;
pub mod kernel;
pub mod matrix;
pub mod morton;
pub mod packing;
pub mod report;
pub mod traits;
pub mod vector;

pub use kernel::{ConstEval, EvalContext, RuntimeEval, Transcendental};
pub use matrix::{Mat2, Mat3, Mat4, Matrix};
pub use traits::{Float, Integral, Scalar, Traits, TypeClass};
pub use vector::{vec1, vec2, vec3, vec4, Vec1, Vec2, Vec3, Vec4, Vector};
