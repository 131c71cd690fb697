// src/matrix/determinant.rs

//! Determinants and inverses of square matrices.
//!
//! Both are written out by cofactor expansion for each size. The inverse is
//! `None` when the determinant is exactly zero; a nearly singular matrix
//! still inverts, with correspondingly large components.

use super::Matrix;
use crate::traits::{Float, Scalar};
use crate::vector::Vector;
use core::ops::Neg;

impl<T: Copy, const N: usize> Matrix<T, N, N> {
    /// Elements as `rows[r][c]`.
    #[inline]
    fn rows(&self) -> [[T; N]; N] {
        core::array::from_fn(|r| core::array::from_fn(|c| self.0[c].0[r]))
    }

    #[inline]
    fn from_rows(rows: [[T; N]; N]) -> Self {
        Matrix(core::array::from_fn(|c| Vector(core::array::from_fn(|r| rows[r][c]))))
    }
}

#[inline]
fn det2<T: Scalar>(a: T, b: T, c: T, d: T) -> T {
    a * d - b * c
}

// --- 2x2 ---

impl<T: Scalar + Neg<Output = T>> Matrix<T, 2, 2> {
    pub fn determinant(&self) -> T {
        let [[a, b], [c, d]] = self.rows();
        det2(a, b, c, d)
    }
}

impl<T: Float> Matrix<T, 2, 2> {
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == T::ZERO {
            return None;
        }
        let [[a, b], [c, d]] = self.rows();
        let s = T::ONE / det;
        Some(Self::from_rows([[d * s, -b * s], [-c * s, a * s]]))
    }
}

// --- 3x3 ---

impl<T: Scalar + Neg<Output = T>> Matrix<T, 3, 3> {
    pub fn determinant(&self) -> T {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.rows();
        a * det2(e, f, h, i) - b * det2(d, f, g, i) + c * det2(d, e, g, h)
    }
}

impl<T: Float> Matrix<T, 3, 3> {
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == T::ZERO {
            return None;
        }
        let [[a, b, c], [d, e, f], [g, h, i]] = self.rows();
        let s = T::ONE / det;
        // Transposed cofactors.
        Some(Self::from_rows([
            [det2(e, f, h, i) * s, det2(c, b, i, h) * s, det2(b, c, e, f) * s],
            [det2(f, d, i, g) * s, det2(a, c, g, i) * s, det2(c, a, f, d) * s],
            [det2(d, e, g, h) * s, det2(b, a, h, g) * s, det2(a, b, d, e) * s],
        ]))
    }
}

// --- 4x4 ---

/// 2x2 minors of the top two rows (`s`) and the bottom two rows (`c`),
/// indexed by column pair (01, 02, 03, 12, 13, 23).
struct Minors<T> {
    s: [T; 6],
    c: [T; 6],
}

impl<T: Scalar> Minors<T> {
    fn of(m: &[[T; 4]; 4]) -> Self {
        let pair = |r0: usize, r1: usize, i: usize, j: usize| {
            det2(m[r0][i], m[r0][j], m[r1][i], m[r1][j])
        };
        let pairs = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];
        Minors {
            s: pairs.map(|(i, j)| pair(0, 1, i, j)),
            c: pairs.map(|(i, j)| pair(2, 3, i, j)),
        }
    }
}

impl<T: Scalar + Neg<Output = T>> Minors<T> {
    /// Laplace expansion along the top two rows.
    fn determinant(&self) -> T {
        let (s, c) = (&self.s, &self.c);
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }
}

impl<T: Scalar + Neg<Output = T>> Matrix<T, 4, 4> {
    pub fn determinant(&self) -> T {
        Minors::of(&self.rows()).determinant()
    }
}

impl<T: Float> Matrix<T, 4, 4> {
    pub fn inverse(&self) -> Option<Self> {
        let m = self.rows();
        let minors = Minors::of(&m);
        let det = minors.determinant();
        if det == T::ZERO {
            return None;
        }
        let (s, c) = (minors.s, minors.c);
        let k = T::ONE / det;
        let adjugate = [
            [
                m[1][1] * c[5] - m[1][2] * c[4] + m[1][3] * c[3],
                -m[0][1] * c[5] + m[0][2] * c[4] - m[0][3] * c[3],
                m[3][1] * s[5] - m[3][2] * s[4] + m[3][3] * s[3],
                -m[2][1] * s[5] + m[2][2] * s[4] - m[2][3] * s[3],
            ],
            [
                -m[1][0] * c[5] + m[1][2] * c[2] - m[1][3] * c[1],
                m[0][0] * c[5] - m[0][2] * c[2] + m[0][3] * c[1],
                -m[3][0] * s[5] + m[3][2] * s[2] - m[3][3] * s[1],
                m[2][0] * s[5] - m[2][2] * s[2] + m[2][3] * s[1],
            ],
            [
                m[1][0] * c[4] - m[1][1] * c[2] + m[1][3] * c[0],
                -m[0][0] * c[4] + m[0][1] * c[2] - m[0][3] * c[0],
                m[3][0] * s[4] - m[3][1] * s[2] + m[3][3] * s[0],
                -m[2][0] * s[4] + m[2][1] * s[2] - m[2][3] * s[0],
            ],
            [
                -m[1][0] * c[3] + m[1][1] * c[1] - m[1][2] * c[0],
                m[0][0] * c[3] - m[0][1] * c[1] + m[0][2] * c[0],
                -m[3][0] * s[3] + m[3][1] * s[1] - m[3][2] * s[0],
                m[2][0] * s[3] - m[2][1] * s[1] + m[2][2] * s[0],
            ],
        ];
        Some(Self::from_rows(adjugate.map(|row| row.map(|x| x * k))))
    }
}
