// src/vector.rs

//! Fixed-arity vectors, generic over component type and length.
//!
//! `Vector<T, N>` is a transparent wrapper around `[T; N]` with `N` in 1..=4.
//! It is `Copy`, never allocates, and every traversal below works for any `N`
//! through the array itself rather than per-dimension code.
//!
//! Arithmetic operators live in [`ops`](self::ops), swizzling in
//! [`swizzle`](self::swizzle).

pub mod ops;
pub mod swizzle;

use crate::kernel::{EvalContext, RuntimeEval, Transcendental};
use crate::traits::{Float, Scalar, TypeClass, Traits};
use core::ops::{Index, IndexMut, Neg};

/// A value of `N` named components `x, y[, z][, w]`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize>(pub(crate) [T; N]);

pub type Vec1<T> = Vector<T, 1>;
pub type Vec2<T> = Vector<T, 2>;
pub type Vec3<T> = Vector<T, 3>;
pub type Vec4<T> = Vector<T, 4>;

/// Builds a one-component vector.
pub const fn vec1<T: Copy>(x: T) -> Vec1<T> {
    Vector([x])
}

/// Builds a two-component vector.
pub const fn vec2<T: Copy>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Builds a three-component vector.
pub const fn vec3<T: Copy>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Builds a four-component vector.
pub const fn vec4<T: Copy>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

// --- Construction and access ---

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Number of components.
    pub const LEN: usize = N;

    /// Builds a vector from its components in order.
    #[inline]
    pub const fn new(components: [T; N]) -> Self {
        const { assert!(N >= 1 && N <= 4, "vectors have 1 to 4 components") };
        Vector(components)
    }

    /// Broadcasts one value into every component.
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self::new([value; N])
    }

    /// Reads the component at `I`, checked at compile time.
    #[inline]
    pub const fn get<const I: usize>(&self) -> T {
        const { assert!(I < N, "component index out of range") };
        self.0[I]
    }

    /// Mutable access to the component at `I`, checked at compile time.
    #[inline]
    pub fn get_mut<const I: usize>(&mut self) -> &mut T {
        const { assert!(I < N, "component index out of range") };
        &mut self.0[I]
    }

    #[inline]
    pub const fn x(&self) -> T {
        self.get::<0>()
    }

    #[inline]
    pub const fn y(&self) -> T {
        self.get::<1>()
    }

    #[inline]
    pub const fn z(&self) -> T {
        self.get::<2>()
    }

    #[inline]
    pub const fn w(&self) -> T {
        self.get::<3>()
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline]
    pub const fn to_array(self) -> [T; N] {
        self.0
    }

    /// Iterates over the components by value.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.0.iter().copied()
    }

    // --- Traversal ---

    /// Calls `f` on every component in order.
    #[inline]
    pub fn for_each(self, f: impl FnMut(T)) {
        self.0.into_iter().for_each(f)
    }

    /// Applies `f` to every component.
    #[inline]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Vector<U, N> {
        Vector(self.0.map(f))
    }

    /// Combines two same-length vectors componentwise.
    #[inline]
    pub fn zip<U: Copy, V>(
        self,
        other: Vector<U, N>,
        mut f: impl FnMut(T, U) -> V,
    ) -> Vector<V, N> {
        Vector(core::array::from_fn(|i| f(self.0[i], other.0[i])))
    }

    /// Combines three same-length vectors componentwise.
    #[inline]
    pub fn zip3<U: Copy, V: Copy, W>(
        self,
        b: Vector<U, N>,
        c: Vector<V, N>,
        mut f: impl FnMut(T, U, V) -> W,
    ) -> Vector<W, N> {
        Vector(core::array::from_fn(|i| f(self.0[i], b.0[i], c.0[i])))
    }

    /// Left fold over the components.
    #[inline]
    pub fn fold<A>(self, init: A, f: impl FnMut(A, T) -> A) -> A {
        self.0.into_iter().fold(init, f)
    }

    /// True if `pred` holds for at least one component.
    #[inline]
    pub fn any(self, pred: impl FnMut(T) -> bool) -> bool {
        self.0.into_iter().any(pred)
    }

    /// True if `pred` holds for every component.
    #[inline]
    pub fn all(self, pred: impl FnMut(T) -> bool) -> bool {
        self.0.into_iter().all(pred)
    }

    /// True if `pred` holds for no component.
    #[inline]
    pub fn none(self, pred: impl FnMut(T) -> bool) -> bool {
        !self.any(pred)
    }

    /// Components in reverse order.
    #[inline]
    pub fn reverse(self) -> Self {
        let mut components = self.0;
        components.reverse();
        Vector(components)
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// The zero vector.
    #[inline]
    pub const fn zero() -> Self {
        Self::splat(T::ZERO)
    }

    /// Builds a vector from up to `N` leading values, zero-filling the rest.
    ///
    /// # Panics
    /// Panics if `values` holds more than `N` elements.
    pub fn from_slice(values: &[T]) -> Self {
        assert!(
            values.len() <= N,
            "{} values given for a {}-component vector",
            values.len(),
            N
        );
        let mut components = [T::ZERO; N];
        components[..values.len()].copy_from_slice(values);
        Self::new(components)
    }

    // --- Reductions ---

    /// Sum of the components.
    #[inline]
    pub fn sum(self) -> T {
        self.fold(T::ZERO, |acc, c| acc + c)
    }

    /// Sum of `f` applied to each component.
    #[inline]
    pub fn sum_by(self, mut f: impl FnMut(T) -> T) -> T {
        self.fold(T::ZERO, |acc, c| acc + f(c))
    }

    /// Smallest component.
    #[inline]
    pub fn min_component(self) -> T {
        self.fold(self.0[0], |acc, c| if c < acc { c } else { acc })
    }

    /// Largest component.
    #[inline]
    pub fn max_component(self) -> T {
        self.fold(self.0[0], |acc, c| if c > acc { c } else { acc })
    }

    /// Componentwise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        self.zip(other, |a, b| if b < a { b } else { a })
    }

    /// Componentwise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        self.zip(other, |a, b| if b > a { b } else { a })
    }

    /// Clamps every component into `[lo, hi]`.
    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }

    // --- Geometry ---

    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.zip(other, |a, b| a * b).sum()
    }

    #[inline]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }
}

impl<T: Scalar + Neg<Output = T>, const N: usize> Vector<T, N> {
    /// Componentwise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        self.map(|c| if c < T::ZERO { -c } else { c })
    }
}

impl<T: Float + Transcendental, const N: usize> Vector<T, N> {
    /// Euclidean length.
    #[inline]
    pub fn length(self) -> T {
        self.length_squared().sqrt_in::<RuntimeEval>()
    }

    /// The vector scaled to unit length.
    #[inline]
    pub fn normalize(self) -> Self {
        self * self.length_squared().inverse_sqrt_in::<RuntimeEval>()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Self) -> T {
        (self - other).length()
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Right-handed cross product.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = other.0;
        Vector([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Copy, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        assert!(index < N, "index {} out of range for a {}-component vector", index, N);
        &self.0[index]
    }
}

impl<T: Copy, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(index < N, "index {} out of range for a {}-component vector", index, N);
        &mut self.0[index]
    }
}

impl<T: Copy, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(components: [T; N]) -> Self {
        Self::new(components)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.0
    }
}

impl<T: Copy> From<(T, T)> for Vector<T, 2> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        vec2(x, y)
    }
}

impl<T: Copy> From<(T, T, T)> for Vector<T, 3> {
    #[inline]
    fn from((x, y, z): (T, T, T)) -> Self {
        vec3(x, y, z)
    }
}

impl<T: Copy> From<(T, T, T, T)> for Vector<T, 4> {
    #[inline]
    fn from((x, y, z, w): (T, T, T, T)) -> Self {
        vec4(x, y, z, w)
    }
}

// --- Reflection ---

impl<T: Scalar, const N: usize> Traits for Vector<T, N> {
    type Component = T;
    const CLASS: TypeClass = T::CLASS.union(TypeClass::VECTOR);
    const ROWS: usize = N;
    const COLUMNS: usize = 1;
}

// --- Componentwise kernel ---

macro_rules! componentwise {
    (unary: $($name:ident),*; binary: $($name2:ident),*) => {
        $(
            #[inline]
            fn $name<C: EvalContext>(self) -> Self {
                self.map(|c| c.$name::<C>())
            }
        )*
        $(
            #[inline]
            fn $name2<C: EvalContext>(self, other: Self) -> Self {
                self.zip(other, |a, b| a.$name2::<C>(b))
            }
        )*
    };
}

impl<T: Transcendental, const N: usize> Transcendental for Vector<T, N> {
    componentwise!(
        unary: sin_in, cos_in, tan_in, asin_in, acos_in, atan_in,
            sinh_in, cosh_in, tanh_in, asinh_in, acosh_in, atanh_in,
            exp_in, exp2_in, exp10_in, log_in, log2_in, log10_in,
            sqrt_in, inverse_sqrt_in, floor_in, ceil_in, round_in, trunc_in;
        binary: atan2_in, pow_in
    );

    #[inline]
    fn recip_guarded(self) -> Self {
        self.map(T::recip_guarded)
    }

    #[inline]
    fn div_guarded(self, den: Self) -> Self {
        self.zip(den, T::div_guarded)
    }
}
