// src/packing.rs

//! # Fixed-Point Packing
//!
//! Two families of codecs:
//!
//! - **Word packing** concatenates 2 or 4 narrow integers into one wider word,
//!   first argument in the most significant field. Unpacking extracts the
//!   fields again; the round trip is exact. Signed fields are packed through
//!   their unsigned bit pattern, so a negative field never sign-extends into
//!   its neighbours.
//! - **Normalized quantization** maps a float in `[0, 1]` (unsigned) or
//!   `[-1, 1]` (signed) onto the full range of an 8- or 16-bit integer,
//!   rounding to nearest. The round trip is lossy: reconstruction is within
//!   half a quantization step, `1 / (2 * max)`, of the clamped input.

use crate::vector::{vec2, vec4, Vec2, Vec4};
use log::trace;

// --- Word packing ---

macro_rules! pack_pairs {
    ($($pack:ident, $unpack:ident: $field:ty => $word:ty;)*) => {
        $(
            #[doc = concat!("Packs two `", stringify!($field), "` fields into a `", stringify!($word), "`, `a` high.")]
            #[inline]
            pub const fn $pack(a: $field, b: $field) -> $word {
                ((a as $word) << <$field>::BITS) | (b as $word)
            }

            #[doc = concat!("Inverse of [`", stringify!($pack), "`].")]
            #[inline]
            pub const fn $unpack(word: $word) -> Vec2<$field> {
                const MASK: $word = <$field>::MAX as $word;
                vec2(
                    ((word >> <$field>::BITS) & MASK) as $field,
                    (word & MASK) as $field,
                )
            }
        )*
    };
}

macro_rules! pack_quads {
    ($($pack:ident, $unpack:ident: $field:ty => $word:ty;)*) => {
        $(
            #[doc = concat!("Packs four `", stringify!($field), "` fields into a `", stringify!($word), "`, `a` highest.")]
            #[inline]
            pub const fn $pack(a: $field, b: $field, c: $field, d: $field) -> $word {
                const BITS: u32 = <$field>::BITS;
                ((a as $word) << (3 * BITS))
                    | ((b as $word) << (2 * BITS))
                    | ((c as $word) << BITS)
                    | (d as $word)
            }

            #[doc = concat!("Inverse of [`", stringify!($pack), "`].")]
            #[inline]
            pub const fn $unpack(word: $word) -> Vec4<$field> {
                const BITS: u32 = <$field>::BITS;
                const MASK: $word = <$field>::MAX as $word;
                vec4(
                    ((word >> (3 * BITS)) & MASK) as $field,
                    ((word >> (2 * BITS)) & MASK) as $field,
                    ((word >> BITS) & MASK) as $field,
                    (word & MASK) as $field,
                )
            }
        )*
    };
}

pack_pairs! {
    pack_2x8_to_16, unpack_16_to_2x8: u8 => u16;
    pack_2x16_to_32, unpack_32_to_2x16: u16 => u32;
    pack_2x32_to_64, unpack_64_to_2x32: u32 => u64;
}

pack_quads! {
    pack_4x8_to_32, unpack_32_to_4x8: u8 => u32;
    pack_4x16_to_64, unpack_64_to_4x16: u16 => u64;
}

macro_rules! signed_pack_pairs {
    ($($pack:ident, $unpack:ident => $upack:ident, $uunpack:ident:
        $field:ty as $ufield:ty => $word:ty as $uword:ty;)*) => {
        $(
            #[doc = concat!("[`", stringify!($upack), "`] over the bit patterns of signed fields.")]
            #[inline]
            pub const fn $pack(a: $field, b: $field) -> $word {
                $upack(a as $ufield, b as $ufield) as $word
            }

            #[doc = concat!("Inverse of [`", stringify!($pack), "`].")]
            #[inline]
            pub const fn $unpack(word: $word) -> Vec2<$field> {
                let fields = $uunpack(word as $uword);
                vec2(fields.x() as $field, fields.y() as $field)
            }
        )*
    };
}

macro_rules! signed_pack_quads {
    ($($pack:ident, $unpack:ident => $upack:ident, $uunpack:ident:
        $field:ty as $ufield:ty => $word:ty as $uword:ty;)*) => {
        $(
            #[doc = concat!("[`", stringify!($upack), "`] over the bit patterns of signed fields.")]
            #[inline]
            pub const fn $pack(a: $field, b: $field, c: $field, d: $field) -> $word {
                $upack(a as $ufield, b as $ufield, c as $ufield, d as $ufield) as $word
            }

            #[doc = concat!("Inverse of [`", stringify!($pack), "`].")]
            #[inline]
            pub const fn $unpack(word: $word) -> Vec4<$field> {
                let fields = $uunpack(word as $uword);
                vec4(
                    fields.x() as $field,
                    fields.y() as $field,
                    fields.z() as $field,
                    fields.w() as $field,
                )
            }
        )*
    };
}

signed_pack_pairs! {
    pack_2x8_to_16_signed, unpack_16_to_2x8_signed => pack_2x8_to_16, unpack_16_to_2x8:
        i8 as u8 => i16 as u16;
    pack_2x16_to_32_signed, unpack_32_to_2x16_signed => pack_2x16_to_32, unpack_32_to_2x16:
        i16 as u16 => i32 as u32;
    pack_2x32_to_64_signed, unpack_64_to_2x32_signed => pack_2x32_to_64, unpack_64_to_2x32:
        i32 as u32 => i64 as u64;
}

signed_pack_quads! {
    pack_4x8_to_32_signed, unpack_32_to_4x8_signed => pack_4x8_to_32, unpack_32_to_4x8:
        i8 as u8 => i32 as u32;
    pack_4x16_to_64_signed, unpack_64_to_4x16_signed => pack_4x16_to_64, unpack_64_to_4x16:
        i16 as u16 => i64 as u64;
}

/// Vectors that pack into a single word.
pub trait Pack: Sized {
    type Word: Copy;

    fn pack(self) -> Self::Word;
    fn unpack(word: Self::Word) -> Self;
}

macro_rules! impl_pack {
    (2: $($field:ty => $word:ty, $pack:ident, $unpack:ident;)*) => {
        $(
            impl Pack for Vec2<$field> {
                type Word = $word;

                #[inline]
                fn pack(self) -> $word {
                    $pack(self.x(), self.y())
                }

                #[inline]
                fn unpack(word: $word) -> Self {
                    $unpack(word)
                }
            }
        )*
    };
    (4: $($field:ty => $word:ty, $pack:ident, $unpack:ident;)*) => {
        $(
            impl Pack for Vec4<$field> {
                type Word = $word;

                #[inline]
                fn pack(self) -> $word {
                    $pack(self.x(), self.y(), self.z(), self.w())
                }

                #[inline]
                fn unpack(word: $word) -> Self {
                    $unpack(word)
                }
            }
        )*
    };
}

impl_pack! {
    2:
    u8 => u16, pack_2x8_to_16, unpack_16_to_2x8;
    u16 => u32, pack_2x16_to_32, unpack_32_to_2x16;
    u32 => u64, pack_2x32_to_64, unpack_64_to_2x32;
    i8 => i16, pack_2x8_to_16_signed, unpack_16_to_2x8_signed;
    i16 => i32, pack_2x16_to_32_signed, unpack_32_to_2x16_signed;
    i32 => i64, pack_2x32_to_64_signed, unpack_64_to_2x32_signed;
}

impl_pack! {
    4:
    u8 => u32, pack_4x8_to_32, unpack_32_to_4x8;
    u16 => u64, pack_4x16_to_64, unpack_64_to_4x16;
    i8 => i32, pack_4x8_to_32_signed, unpack_32_to_4x8_signed;
    i16 => i64, pack_4x16_to_64_signed, unpack_64_to_4x16_signed;
}

// --- Normalized quantization ---

/// Clamps `value` into `[lo, hi]`, tracing inputs that had to move.
#[inline]
fn clamp_norm(value: f32, lo: f32, hi: f32) -> f32 {
    let clamped = value.clamp(lo, hi);
    if clamped != value && !value.is_nan() {
        trace!("normalized value {} clamped to {}", value, clamped);
    }
    clamped
}

macro_rules! norm_codec {
    ($($pack:ident, $unpack:ident: $int:ty, [$lo:expr, $hi:expr];)*) => {
        $(
            #[doc = concat!("Quantizes `value` in [", stringify!($lo), ", ", stringify!($hi),
                "] to a `", stringify!($int), "`; out-of-range input is clamped.")]
            #[inline]
            pub fn $pack(value: f32) -> $int {
                (clamp_norm(value, $lo, $hi) * <$int>::MAX as f32).round() as $int
            }

            #[doc = concat!("Reconstructs the float quantized by [`", stringify!($pack), "`].")]
            #[inline]
            pub fn $unpack(value: $int) -> f32 {
                value as f32 / <$int>::MAX as f32
            }
        )*
    };
}

norm_codec! {
    pack_norm_float_to_int8, unpack_int8_to_norm_float: i8, [-1.0, 1.0];
    pack_norm_float_to_uint8, unpack_uint8_to_norm_float: u8, [0.0, 1.0];
    pack_norm_float_to_int16, unpack_int16_to_norm_float: i16, [-1.0, 1.0];
    pack_norm_float_to_uint16, unpack_uint16_to_norm_float: u16, [0.0, 1.0];
}

#[cfg(test)]
mod tests;
