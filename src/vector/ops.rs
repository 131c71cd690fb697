// src/vector/ops.rs

//! Elementwise operators for `Vector<T, N>`.
//!
//! Every binary operator accepts a same-length vector or a scalar on the right,
//! plus the compound-assignment form. Division asserts a non-zero divisor in
//! debug builds only; release builds follow IEEE (floats) or the integer
//! division rules of `T`.
//!
//! Bitwise operators require [`Integral`] components, so they do not exist for
//! floating-point vectors.

use super::Vector;
use crate::traits::{Integral, Scalar};
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

macro_rules! elementwise_op {
    ($bound:ident; $($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt;)*) => {
        $(
            impl<T: $bound, const N: usize> $trait for Vector<T, N> {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: Self) -> Self {
                    self.zip(rhs, |a, b| a $op b)
                }
            }

            impl<T: $bound, const N: usize> $trait<T> for Vector<T, N> {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: T) -> Self {
                    self.map(|a| a $op rhs)
                }
            }

            impl<T: $bound, const N: usize> $assign_trait for Vector<T, N> {
                #[inline]
                fn $assign_method(&mut self, rhs: Self) {
                    *self = *self $op rhs;
                }
            }

            impl<T: $bound, const N: usize> $assign_trait<T> for Vector<T, N> {
                #[inline]
                fn $assign_method(&mut self, rhs: T) {
                    *self = *self $op rhs;
                }
            }
        )*
    };
}

elementwise_op! {
    Scalar;
    Add, add, AddAssign, add_assign, +;
    Sub, sub, SubAssign, sub_assign, -;
    Mul, mul, MulAssign, mul_assign, *;
    Rem, rem, RemAssign, rem_assign, %;
}

elementwise_op! {
    Integral;
    BitAnd, bitand, BitAndAssign, bitand_assign, &;
    BitOr, bitor, BitOrAssign, bitor_assign, |;
    BitXor, bitxor, BitXorAssign, bitxor_assign, ^;
    Shl, shl, ShlAssign, shl_assign, <<;
    Shr, shr, ShrAssign, shr_assign, >>;
}

// Division is written out to carry the zero-divisor check.

impl<T: Scalar, const N: usize> Div for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        debug_assert!(
            rhs.none(|c| c == T::ZERO),
            "elementwise division by zero: {:?}",
            rhs
        );
        self.zip(rhs, |a, b| a / b)
    }
}

impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        debug_assert!(rhs != T::ZERO, "vector division by a zero scalar");
        self.map(|a| a / rhs)
    }
}

impl<T: Scalar, const N: usize> DivAssign for Vector<T, N> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<T: Scalar, const N: usize> DivAssign<T> for Vector<T, N> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

impl<T: Scalar + Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

impl<T: Integral, const N: usize> Not for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        self.map(|a| !a)
    }
}

// --- Scalar on the left ---

macro_rules! scalar_lhs_ops {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> Add<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn add(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                    rhs.map(|b| self + b)
                }
            }

            impl<const N: usize> Sub<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn sub(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                    rhs.map(|b| self - b)
                }
            }

            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn mul(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                    rhs.map(|b| self * b)
                }
            }

            impl<const N: usize> Div<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn div(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                    Vector::splat(self) / rhs
                }
            }
        )*
    };
}

scalar_lhs_ops!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);
