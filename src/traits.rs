// src/traits.rs

//! Compile-time classification of the types the kernel operates on.
//!
//! Every arithmetic primitive, every `Vector<T, N>` and every `Matrix<T, R, C>`
//! implements [`Traits`], a descriptor made only of associated constants. The
//! descriptor is computed from the type alone and is usable in `const`
//! contexts, so code can branch on "is this a vector?" without ever building a
//! value.

use bitflags::bitflags;
use core::fmt::Debug;
use core::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Shl, Shr, Sub};
use serde::{Deserialize, Serialize};

bitflags! {
    /// Classification bits reported by [`Traits::CLASS`].
    ///
    /// At most one of `VECTOR` / `MATRIX` is ever set. A type with neither is a
    /// scalar. Composite types inherit the numeric bits of their component.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct TypeClass: u8 {
        const INTEGRAL       = 0b0000_0001;
        const FLOATING_POINT = 0b0000_0010;
        const SIGNED         = 0b0000_0100;
        const VECTOR         = 0b0000_1000;
        const MATRIX         = 0b0001_0000;
    }
}

/// Type-level descriptor: component type, shape and classification.
pub trait Traits {
    /// The scalar each component is made of. `Self` for scalars.
    type Component: Scalar;

    /// Classification bits.
    const CLASS: TypeClass;

    /// Height of the value: 1 for scalars, `N` for vectors, `R` for matrices.
    const ROWS: usize;

    /// Width of the value: 1 for scalars and vectors, `C` for matrices.
    const COLUMNS: usize;

    /// Number of scalar components: 1, `N`, or `R * C`.
    const TOTAL_COMPONENTS: usize = Self::ROWS * Self::COLUMNS;
}

/// Any built-in arithmetic type.
pub trait Scalar:
    Traits<Component = Self>
    + Copy
    + Debug
    + Default
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
}

/// Integer primitives. The bitwise operators on vectors and matrices are only
/// implemented for components bounded by this trait.
pub trait Integral:
    Scalar
    + Eq
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Shl<Output = Self>
    + Shr<Output = Self>
{
}

/// IEEE floating-point primitives.
pub trait Float: Scalar + Neg<Output = Self> {
    /// Machine epsilon.
    const EPSILON: Self;
    /// Positive infinity.
    const INFINITY: Self;
    /// Quiet NaN.
    const NAN: Self;

    /// `self` with the sign of `sign`.
    fn copysign(self, sign: Self) -> Self;

    /// Lossless for `f64`, rounding for `f32`.
    fn to_f64(self) -> f64;

    /// Rounds to the nearest representable value of `Self`.
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_integral {
    ($class:expr; $($t:ty),* $(,)?) => {
        $(
            impl Traits for $t {
                type Component = $t;
                const CLASS: TypeClass = $class;
                const ROWS: usize = 1;
                const COLUMNS: usize = 1;
            }

            impl Scalar for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
            }

            impl Integral for $t {}
        )*
    };
}

impl_integral!(TypeClass::INTEGRAL; u8, u16, u32, u64, u128, usize);
impl_integral!(TypeClass::INTEGRAL.union(TypeClass::SIGNED); i8, i16, i32, i64, i128, isize);

macro_rules! impl_float {
    ($($t:ident),* $(,)?) => {
        $(
            impl Traits for $t {
                type Component = $t;
                const CLASS: TypeClass = TypeClass::FLOATING_POINT.union(TypeClass::SIGNED);
                const ROWS: usize = 1;
                const COLUMNS: usize = 1;
            }

            impl Scalar for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
            }

            impl Float for $t {
                const EPSILON: Self = $t::EPSILON;
                const INFINITY: Self = $t::INFINITY;
                const NAN: Self = $t::NAN;

                #[inline]
                fn copysign(self, sign: Self) -> Self {
                    $t::copysign(self, sign)
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_float!(f32, f64);

// --- Predicates ---

/// True for built-in arithmetic types.
pub const fn is_scalar<T: Traits>() -> bool {
    !T::CLASS.intersects(TypeClass::VECTOR.union(TypeClass::MATRIX))
}

/// True for `Vector<T, N>`.
pub const fn is_vector<T: Traits>() -> bool {
    T::CLASS.contains(TypeClass::VECTOR)
}

/// True for `Matrix<T, R, C>`.
pub const fn is_matrix<T: Traits>() -> bool {
    T::CLASS.contains(TypeClass::MATRIX)
}

/// True when the (component) type is an integer.
pub const fn is_integral<T: Traits>() -> bool {
    T::CLASS.contains(TypeClass::INTEGRAL)
}

/// True when the (component) type is `f32` or `f64`.
pub const fn is_floating_point<T: Traits>() -> bool {
    T::CLASS.contains(TypeClass::FLOATING_POINT)
}

/// True when the (component) type can represent negative values.
pub const fn is_signed<T: Traits>() -> bool {
    T::CLASS.contains(TypeClass::SIGNED)
}

/// Number of scalar components in `T`.
pub const fn total_components<T: Traits>() -> usize {
    T::TOTAL_COMPONENTS
}
