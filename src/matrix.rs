// src/matrix.rs

//! Column-major matrices built from [`Vector`] columns.
//!
//! `Matrix<T, R, C>` holds `C` columns of height `R`, both in 1..=4. Square
//! matrices add identity construction and `MulAssign` composition; any
//! `R x K` matrix multiplies any `K x C` matrix.
//!
//! Determinants and inverses live in [`determinant`](self::determinant),
//! affine transforms and projections in [`transform`](self::transform).

pub mod determinant;
pub mod transform;

pub use self::transform::project;

use crate::kernel::{EvalContext, Transcendental};
use crate::traits::{Scalar, TypeClass, Traits};
use crate::vector::Vector;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix<T, const R: usize, const C: usize>([Vector<T, R>; C]);

pub type Mat2<T> = Matrix<T, 2, 2>;
pub type Mat3<T> = Matrix<T, 3, 3>;
pub type Mat4<T> = Matrix<T, 4, 4>;
pub type Mat2x3<T> = Matrix<T, 2, 3>;
pub type Mat2x4<T> = Matrix<T, 2, 4>;
pub type Mat3x2<T> = Matrix<T, 3, 2>;
pub type Mat3x4<T> = Matrix<T, 3, 4>;
pub type Mat4x2<T> = Matrix<T, 4, 2>;
pub type Mat4x3<T> = Matrix<T, 4, 3>;

impl<T: Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Builds a matrix from its columns.
    #[inline]
    pub const fn from_columns(columns: [Vector<T, R>; C]) -> Self {
        const { assert!(C >= 1 && C <= 4, "matrices have 1 to 4 columns") };
        Matrix(columns)
    }

    /// Builds a matrix from column-major component arrays.
    #[inline]
    pub fn from_array(columns: [[T; R]; C]) -> Self {
        Self::from_columns(columns.map(Vector::new))
    }

    /// Broadcasts one value into every element.
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self::from_columns([Vector::splat(value); C])
    }

    /// Column `I`, checked at compile time.
    #[inline]
    pub const fn column<const I: usize>(&self) -> Vector<T, R> {
        const { assert!(I < C, "column index out of range") };
        self.0[I]
    }

    /// Column `index`.
    ///
    /// # Panics
    /// Panics if `index >= C`.
    #[inline]
    pub fn col(&self, index: usize) -> Vector<T, R> {
        self[index]
    }

    /// Row `index`, gathered across the columns.
    ///
    /// # Panics
    /// Panics if `index >= R`.
    #[inline]
    pub fn row(&self, index: usize) -> Vector<T, C> {
        assert!(index < R, "row {} out of range for a {}-row matrix", index, R);
        Vector::new(self.0.map(|column| column[index]))
    }

    #[inline]
    pub const fn columns(&self) -> &[Vector<T, R>; C] {
        &self.0
    }

    /// Swaps rows and columns.
    #[inline]
    pub fn transpose(&self) -> Matrix<T, C, R> {
        Matrix::from_columns(core::array::from_fn(|r| self.row(r)))
    }

    // --- Traversal ---

    /// Applies `f` to every element.
    #[inline]
    pub fn map<U: Copy>(self, mut f: impl FnMut(T) -> U) -> Matrix<U, R, C> {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    /// Combines two same-shape matrices elementwise.
    #[inline]
    pub fn zip<U: Copy, V: Copy>(
        self,
        other: Matrix<U, R, C>,
        mut f: impl FnMut(T, U) -> V,
    ) -> Matrix<V, R, C> {
        Matrix(core::array::from_fn(|c| self.0[c].zip(other.0[c], &mut f)))
    }

    /// Left fold over the elements in column-major order.
    #[inline]
    pub fn fold<A>(self, init: A, mut f: impl FnMut(A, T) -> A) -> A {
        self.0
            .into_iter()
            .fold(init, |acc, column| column.fold(acc, &mut f))
    }

    #[inline]
    pub fn any(self, mut pred: impl FnMut(T) -> bool) -> bool {
        self.0.into_iter().any(|column| column.any(&mut pred))
    }

    #[inline]
    pub fn all(self, mut pred: impl FnMut(T) -> bool) -> bool {
        self.0.into_iter().all(|column| column.all(&mut pred))
    }
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The zero matrix.
    #[inline]
    pub const fn zero() -> Self {
        Self::splat(T::ZERO)
    }

    /// `value` on the main diagonal, zero elsewhere.
    #[inline]
    pub fn from_diagonal(value: T) -> Self {
        let mut m = Self::zero();
        for i in 0..R.min(C) {
            m.0[i][i] = value;
        }
        m
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// The identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self::from_diagonal(T::ONE)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Copy, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    #[inline]
    fn index(&self, index: usize) -> &Vector<T, R> {
        assert!(index < C, "column {} out of range for a {}-column matrix", index, C);
        &self.0[index]
    }
}

impl<T: Copy, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Vector<T, R> {
        assert!(index < C, "column {} out of range for a {}-column matrix", index, C);
        &mut self.0[index]
    }
}

/// `(column, row)` element access.
impl<T: Copy, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (column, row): (usize, usize)) -> &T {
        &self[column][row]
    }
}

impl<T: Copy, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (column, row): (usize, usize)) -> &mut T {
        &mut self[column][row]
    }
}

impl<T: Copy, const R: usize, const C: usize> From<[[T; R]; C]> for Matrix<T, R, C> {
    #[inline]
    fn from(columns: [[T; R]; C]) -> Self {
        Self::from_array(columns)
    }
}

// --- Arithmetic ---

macro_rules! matrix_elementwise {
    ($($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt;)*) => {
        $(
            impl<T: Scalar, const R: usize, const C: usize> $trait for Matrix<T, R, C> {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: Self) -> Self {
                    self.zip(rhs, |a, b| a $op b)
                }
            }

            impl<T: Scalar, const R: usize, const C: usize> $trait<T> for Matrix<T, R, C> {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: T) -> Self {
                    self.map(|a| a $op rhs)
                }
            }

            impl<T: Scalar, const R: usize, const C: usize> $assign_trait for Matrix<T, R, C> {
                #[inline]
                fn $assign_method(&mut self, rhs: Self) {
                    *self = *self $op rhs;
                }
            }

            impl<T: Scalar, const R: usize, const C: usize> $assign_trait<T> for Matrix<T, R, C> {
                #[inline]
                fn $assign_method(&mut self, rhs: T) {
                    *self = *self $op rhs;
                }
            }
        )*
    };
}

matrix_elementwise! {
    Add, add, AddAssign, add_assign, +;
    Sub, sub, SubAssign, sub_assign, -;
}

impl<T: Scalar, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        self.map(|a| a * rhs)
    }
}

impl<T: Scalar, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar, const R: usize, const C: usize> Div<T> for Matrix<T, R, C> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        debug_assert!(rhs != T::ZERO, "matrix division by a zero scalar");
        self.map(|a| a / rhs)
    }
}

impl<T: Scalar, const R: usize, const C: usize> DivAssign<T> for Matrix<T, R, C> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

impl<T: Scalar + Neg<Output = T>, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

/// Matrix x column vector.
impl<T: Scalar, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    #[inline]
    fn mul(self, rhs: Vector<T, C>) -> Vector<T, R> {
        Vector::new(core::array::from_fn(|r| self.row(r).dot(rhs)))
    }
}

/// `R x K` times `K x C`: each element is a row of `self` dotted with a column
/// of `rhs`.
impl<T: Scalar, const R: usize, const K: usize, const C: usize> Mul<Matrix<T, K, C>>
    for Matrix<T, R, K>
{
    type Output = Matrix<T, R, C>;

    #[inline]
    fn mul(self, rhs: Matrix<T, K, C>) -> Matrix<T, R, C> {
        Matrix::from_columns(rhs.0.map(|column| self * column))
    }
}

impl<T: Scalar, const N: usize> MulAssign for Matrix<T, N, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// --- Reflection ---

impl<T: Scalar, const R: usize, const C: usize> Traits for Matrix<T, R, C> {
    type Component = T;
    const CLASS: TypeClass = T::CLASS.union(TypeClass::MATRIX);
    const ROWS: usize = R;
    const COLUMNS: usize = C;
}

// --- Componentwise kernel ---

macro_rules! columnwise {
    (unary: $($name:ident),*; binary: $($name2:ident),*) => {
        $(
            #[inline]
            fn $name<K: EvalContext>(self) -> Self {
                Matrix(self.0.map(|column| column.$name::<K>()))
            }
        )*
        $(
            #[inline]
            fn $name2<K: EvalContext>(self, other: Self) -> Self {
                Matrix(core::array::from_fn(|c| self.0[c].$name2::<K>(other.0[c])))
            }
        )*
    };
}

impl<T: Transcendental, const R: usize, const C: usize> Transcendental for Matrix<T, R, C> {
    columnwise!(
        unary: sin_in, cos_in, tan_in, asin_in, acos_in, atan_in,
            sinh_in, cosh_in, tanh_in, asinh_in, acosh_in, atanh_in,
            exp_in, exp2_in, exp10_in, log_in, log2_in, log10_in,
            sqrt_in, inverse_sqrt_in, floor_in, ceil_in, round_in, trunc_in;
        binary: atan2_in, pow_in
    );

    #[inline]
    fn recip_guarded(self) -> Self {
        Matrix(self.0.map(Vector::recip_guarded))
    }

    #[inline]
    fn div_guarded(self, den: Self) -> Self {
        Matrix(core::array::from_fn(|c| self.0[c].div_guarded(den.0[c])))
    }
}

#[cfg(test)]
mod tests;
