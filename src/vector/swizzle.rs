// src/vector/swizzle.rs

//! Swizzling: building a 2-, 3- or 4-component vector by picking source
//! components by name.
//!
//! There is one primitive, an index-list shuffle. The `swizzleN` methods take
//! their indices as const generics so an index past the source length is
//! rejected at compile time, and the [`swizzle!`](crate::swizzle) macro maps
//! component letters onto those indices:
//!
//! ```
//! use core_math::{swizzle, vector::vec4};
//!
//! let v = vec4(1, 2, 3, 4);
//! assert_eq!(swizzle!(v, w z y x), vec4(4, 3, 2, 1));
//! assert_eq!(swizzle!(v, x x), core_math::vector::vec2(1, 1));
//! ```

use super::Vector;

/// Index of the `x` component.
pub const X: usize = 0;
/// Index of the `y` component.
pub const Y: usize = 1;
/// Index of the `z` component.
pub const Z: usize = 2;
/// Index of the `w` component.
pub const W: usize = 3;

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Gathers the components at `indices` into a new vector.
    #[inline]
    fn shuffle<const M: usize>(&self, indices: [usize; M]) -> Vector<T, M> {
        Vector::new(indices.map(|i| self.0[i]))
    }

    /// Two-component swizzle; `A` and `B` must be below `N`.
    #[inline]
    pub fn swizzle2<const A: usize, const B: usize>(&self) -> Vector<T, 2> {
        const { assert!(A < N && B < N, "swizzle reads past the source vector") };
        self.shuffle([A, B])
    }

    /// Three-component swizzle; every index must be below `N`.
    #[inline]
    pub fn swizzle3<const A: usize, const B: usize, const C: usize>(&self) -> Vector<T, 3> {
        const { assert!(A < N && B < N && C < N, "swizzle reads past the source vector") };
        self.shuffle([A, B, C])
    }

    /// Four-component swizzle; every index must be below `N`.
    #[inline]
    pub fn swizzle4<const A: usize, const B: usize, const C: usize, const D: usize>(
        &self,
    ) -> Vector<T, 4> {
        const {
            assert!(
                A < N && B < N && C < N && D < N,
                "swizzle reads past the source vector"
            )
        };
        self.shuffle([A, B, C, D])
    }
}

/// Maps a component letter onto its index. Used by [`swizzle!`](crate::swizzle).
#[doc(hidden)]
#[macro_export]
macro_rules! swizzle_index {
    (x) => {
        $crate::vector::swizzle::X
    };
    (y) => {
        $crate::vector::swizzle::Y
    };
    (z) => {
        $crate::vector::swizzle::Z
    };
    (w) => {
        $crate::vector::swizzle::W
    };
}

/// Swizzles a vector by component letters: `swizzle!(v, z y x)`.
#[macro_export]
macro_rules! swizzle {
    ($v:expr, $a:ident $b:ident) => {
        $v.swizzle2::<{ $crate::swizzle_index!($a) }, { $crate::swizzle_index!($b) }>()
    };
    ($v:expr, $a:ident $b:ident $c:ident) => {
        $v.swizzle3::<
            { $crate::swizzle_index!($a) },
            { $crate::swizzle_index!($b) },
            { $crate::swizzle_index!($c) },
        >()
    };
    ($v:expr, $a:ident $b:ident $c:ident $d:ident) => {
        $v.swizzle4::<
            { $crate::swizzle_index!($a) },
            { $crate::swizzle_index!($b) },
            { $crate::swizzle_index!($c) },
            { $crate::swizzle_index!($d) },
        >()
    };
}
