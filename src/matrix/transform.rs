// src/matrix/transform.rs

//! Affine transforms and projections on `Mat4`.
//!
//! Conventions: column vectors, right-handed view space looking down `-z`,
//! and clip-space depth in [-1, 1]. `translate`, `rotate` and `scale` apply
//! their transform before `self`, so `m.translate(v) == m * from_translation(v)`.

use super::Matrix;
use crate::kernel::{self, Transcendental};
use crate::traits::Float;
use crate::vector::{vec4, Vec3, Vec4, Vector};

impl<T: Float + Transcendental> Matrix<T, 4, 4> {
    // --- Affine ---

    pub fn from_translation(offset: Vec3<T>) -> Self {
        let mut m = Self::identity();
        m.0[3] = vec4(offset.x(), offset.y(), offset.z(), T::ONE);
        m
    }

    pub fn from_scale(factors: Vec3<T>) -> Self {
        let mut m = Self::identity();
        for i in 0..3 {
            m.0[i].0[i] = factors.0[i];
        }
        m
    }

    /// Rotation by `angle` radians counter-clockwise about `axis`, which need
    /// not be normalized.
    pub fn from_axis_angle(axis: Vec3<T>, angle: T) -> Self {
        let [x, y, z] = axis.normalize().0;
        let (s, c) = (kernel::sin(angle), kernel::cos(angle));
        let t = T::ONE - c;
        let zero = T::ZERO;
        Matrix([
            vec4(t * x * x + c, t * x * y + s * z, t * x * z - s * y, zero),
            vec4(t * x * y - s * z, t * y * y + c, t * y * z + s * x, zero),
            vec4(t * x * z + s * y, t * y * z - s * x, t * z * z + c, zero),
            vec4(zero, zero, zero, T::ONE),
        ])
    }

    pub fn translate(&self, offset: Vec3<T>) -> Self {
        *self * Self::from_translation(offset)
    }

    pub fn rotate(&self, angle: T, axis: Vec3<T>) -> Self {
        *self * Self::from_axis_angle(axis, angle)
    }

    pub fn scale(&self, factors: Vec3<T>) -> Self {
        *self * Self::from_scale(factors)
    }

    // --- Projection ---

    /// Perspective projection with a vertical field of view `fov_y` in
    /// radians. `near` maps to depth -1 and `far` to +1.
    pub fn perspective(fov_y: T, aspect: T, near: T, far: T) -> Self {
        let two = T::ONE + T::ONE;
        let focal = T::ONE / kernel::tan(fov_y / two);
        let depth = near - far;
        let zero = T::ZERO;
        Matrix([
            vec4(focal / aspect, zero, zero, zero),
            vec4(zero, focal, zero, zero),
            vec4(zero, zero, (far + near) / depth, -T::ONE),
            vec4(zero, zero, two * far * near / depth, zero),
        ])
    }

    /// Orthographic projection of the box `[left, right] x [bottom, top]`
    /// between the `near` and `far` planes.
    pub fn orthographic(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let two = T::ONE + T::ONE;
        let (width, height, depth) = (right - left, top - bottom, far - near);
        let zero = T::ZERO;
        Matrix([
            vec4(two / width, zero, zero, zero),
            vec4(zero, two / height, zero, zero),
            vec4(zero, zero, -two / depth, zero),
            vec4(
                -(right + left) / width,
                -(top + bottom) / height,
                -(far + near) / depth,
                T::ONE,
            ),
        ])
    }
}

/// Maps object coordinates to window coordinates.
///
/// `viewport` is `(x, y, width, height)`. The returned depth is in [0, 1]
/// for points between the near and far planes.
pub fn project<T: Float>(
    object: Vec3<T>,
    model: &Matrix<T, 4, 4>,
    projection: &Matrix<T, 4, 4>,
    viewport: Vec4<T>,
) -> Vec3<T> {
    let clip = *projection * (*model * vec4(object.x(), object.y(), object.z(), T::ONE));
    let half = T::ONE / (T::ONE + T::ONE);
    let ndc = Vector::new([clip.x(), clip.y(), clip.z()]) / clip.w();
    let unit = ndc * half + half;
    Vector::new([
        unit.x() * viewport.z() + viewport.x(),
        unit.y() * viewport.w() + viewport.y(),
        unit.z(),
    ])
}
