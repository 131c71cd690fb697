// src/morton.rs

//! # Morton (Z-order) Codes
//!
//! Interleaves the bits of 2, 3 or 4 equal-width coordinates into one integer
//! and undoes it exactly. Bit `i` of coordinate `d` lands at bit `i * dims + d`
//! of the code.
//!
//! The code is the narrowest native integer that holds every coordinate bit:
//!
//! | coordinates | code   |
//! |-------------|--------|
//! | 2 x 8       | `u16`  |
//! | 3 x 8, 4 x 8, 2 x 16 | `u32` |
//! | 3 x 16, 4 x 16, 2 x 32 | `u64` |
//! | 3 x 32, 4 x 32 | `u128` |
//!
//! Encoding spreads each coordinate with mask-and-shift passes whose chunk
//! width halves from half the coordinate width down to one bit; decoding runs
//! the same passes in reverse to compact one bit-plane back together.
//!
//! Signed coordinates reinterpret their bits as the unsigned type of the same
//! width, and signed codes are the unsigned code reinterpreted, so every value
//! survives an encode/decode round trip bit for bit.

use crate::vector::Vector;

/// `chunk` set bits repeated every `stride` bits across 128 bits.
const fn lane_mask(chunk: u32, stride: u32) -> u128 {
    let lane = if chunk >= 128 {
        u128::MAX
    } else {
        (1u128 << chunk) - 1
    };
    let mut mask = 0u128;
    let mut offset = 0;
    while offset < 128 {
        mask |= lane << offset;
        offset += stride;
    }
    mask
}

macro_rules! bit_spreading {
    ($($code:ty => $spread:ident, $compact:ident;)*) => {
        $(
            /// Moves the low `bits` bits of `v` to every `dims`-th bit.
            const fn $spread(v: $code, dims: u32, bits: u32) -> $code {
                let mut v = v;
                let mut chunk = bits / 2;
                while chunk > 0 {
                    let mask = lane_mask(chunk, chunk * dims) as $code;
                    v = (v | (v << (chunk * (dims - 1)))) & mask;
                    chunk /= 2;
                }
                v
            }

            /// Gathers every `dims`-th bit of `v` into the low `bits` bits.
            const fn $compact(v: $code, dims: u32, bits: u32) -> $code {
                let mut v = v & (lane_mask(1, dims) as $code);
                let mut chunk = 1;
                while chunk < bits {
                    let mask = lane_mask(chunk * 2, chunk * 2 * dims) as $code;
                    v = (v | (v >> (chunk * (dims - 1)))) & mask;
                    chunk *= 2;
                }
                v
            }
        )*
    };
}

bit_spreading! {
    u16 => spread_u16, compact_u16;
    u32 => spread_u32, compact_u32;
    u64 => spread_u64, compact_u64;
    u128 => spread_u128, compact_u128;
}

macro_rules! morton_2 {
    ($($encode:ident, $decode:ident: $coord:ty => $code:ty, $spread:ident, $compact:ident;)*) => {
        $(
            #[doc = concat!("Interleaves two `", stringify!($coord), "` coordinates into a `", stringify!($code), "`.")]
            pub const fn $encode(x: $coord, y: $coord) -> $code {
                const BITS: u32 = <$coord>::BITS;
                $spread(x as $code, 2, BITS) | ($spread(y as $code, 2, BITS) << 1)
            }

            #[doc = concat!("Inverse of [`", stringify!($encode), "`].")]
            pub const fn $decode(code: $code) -> ($coord, $coord) {
                const BITS: u32 = <$coord>::BITS;
                ($compact(code, 2, BITS) as $coord, $compact(code >> 1, 2, BITS) as $coord)
            }
        )*
    };
}

macro_rules! morton_3 {
    ($($encode:ident, $decode:ident: $coord:ty => $code:ty, $spread:ident, $compact:ident;)*) => {
        $(
            #[doc = concat!("Interleaves three `", stringify!($coord), "` coordinates into a `", stringify!($code), "`.")]
            pub const fn $encode(x: $coord, y: $coord, z: $coord) -> $code {
                const BITS: u32 = <$coord>::BITS;
                $spread(x as $code, 3, BITS)
                    | ($spread(y as $code, 3, BITS) << 1)
                    | ($spread(z as $code, 3, BITS) << 2)
            }

            #[doc = concat!("Inverse of [`", stringify!($encode), "`].")]
            pub const fn $decode(code: $code) -> ($coord, $coord, $coord) {
                const BITS: u32 = <$coord>::BITS;
                (
                    $compact(code, 3, BITS) as $coord,
                    $compact(code >> 1, 3, BITS) as $coord,
                    $compact(code >> 2, 3, BITS) as $coord,
                )
            }
        )*
    };
}

macro_rules! morton_4 {
    ($($encode:ident, $decode:ident: $coord:ty => $code:ty, $spread:ident, $compact:ident;)*) => {
        $(
            #[doc = concat!("Interleaves four `", stringify!($coord), "` coordinates into a `", stringify!($code), "`.")]
            pub const fn $encode(x: $coord, y: $coord, z: $coord, w: $coord) -> $code {
                const BITS: u32 = <$coord>::BITS;
                $spread(x as $code, 4, BITS)
                    | ($spread(y as $code, 4, BITS) << 1)
                    | ($spread(z as $code, 4, BITS) << 2)
                    | ($spread(w as $code, 4, BITS) << 3)
            }

            #[doc = concat!("Inverse of [`", stringify!($encode), "`].")]
            pub const fn $decode(code: $code) -> ($coord, $coord, $coord, $coord) {
                const BITS: u32 = <$coord>::BITS;
                (
                    $compact(code, 4, BITS) as $coord,
                    $compact(code >> 1, 4, BITS) as $coord,
                    $compact(code >> 2, 4, BITS) as $coord,
                    $compact(code >> 3, 4, BITS) as $coord,
                )
            }
        )*
    };
}

morton_2! {
    encode_2x8, decode_2x8: u8 => u16, spread_u16, compact_u16;
    encode_2x16, decode_2x16: u16 => u32, spread_u32, compact_u32;
    encode_2x32, decode_2x32: u32 => u64, spread_u64, compact_u64;
}

morton_3! {
    encode_3x8, decode_3x8: u8 => u32, spread_u32, compact_u32;
    encode_3x16, decode_3x16: u16 => u64, spread_u64, compact_u64;
    encode_3x32, decode_3x32: u32 => u128, spread_u128, compact_u128;
}

morton_4! {
    encode_4x8, decode_4x8: u8 => u32, spread_u32, compact_u32;
    encode_4x16, decode_4x16: u16 => u64, spread_u64, compact_u64;
    encode_4x32, decode_4x32: u32 => u128, spread_u128, compact_u128;
}

// --- Signed coordinates ---

macro_rules! signed_morton {
    ($($encode:ident, $decode:ident => $unsigned_encode:ident, $unsigned_decode:ident:
        $coord:ty as $ucoord:ty => $code:ty as $ucode:ty, [$($c:ident),+];)*) => {
        $(
            #[doc = concat!("[`", stringify!($unsigned_encode), "`] over the bit patterns of signed coordinates.")]
            pub const fn $encode($($c: $coord),+) -> $code {
                $unsigned_encode($($c as $ucoord),+) as $code
            }

            #[doc = concat!("Inverse of [`", stringify!($encode), "`].")]
            pub const fn $decode(code: $code) -> ($(signed_morton!(@coord $c $coord)),+) {
                let ($($c),+) = $unsigned_decode(code as $ucode);
                ($($c as $coord),+)
            }
        )*
    };
    (@coord $c:ident $coord:ty) => { $coord };
}

signed_morton! {
    encode_2x8_signed, decode_2x8_signed => encode_2x8, decode_2x8:
        i8 as u8 => i16 as u16, [x, y];
    encode_3x8_signed, decode_3x8_signed => encode_3x8, decode_3x8:
        i8 as u8 => i32 as u32, [x, y, z];
    encode_4x8_signed, decode_4x8_signed => encode_4x8, decode_4x8:
        i8 as u8 => i32 as u32, [x, y, z, w];
    encode_2x16_signed, decode_2x16_signed => encode_2x16, decode_2x16:
        i16 as u16 => i32 as u32, [x, y];
    encode_3x16_signed, decode_3x16_signed => encode_3x16, decode_3x16:
        i16 as u16 => i64 as u64, [x, y, z];
    encode_4x16_signed, decode_4x16_signed => encode_4x16, decode_4x16:
        i16 as u16 => i64 as u64, [x, y, z, w];
    encode_2x32_signed, decode_2x32_signed => encode_2x32, decode_2x32:
        i32 as u32 => i64 as u64, [x, y];
    encode_3x32_signed, decode_3x32_signed => encode_3x32, decode_3x32:
        i32 as u32 => i128 as u128, [x, y, z];
    encode_4x32_signed, decode_4x32_signed => encode_4x32, decode_4x32:
        i32 as u32 => i128 as u128, [x, y, z, w];
}

// --- Generic access ---

/// Coordinate types with Morton codecs for 2, 3 and 4 dimensions.
pub trait MortonCode: Copy {
    type Code2: Copy;
    type Code3: Copy;
    type Code4: Copy;

    fn encode2(x: Self, y: Self) -> Self::Code2;
    fn decode2(code: Self::Code2) -> (Self, Self);
    fn encode3(x: Self, y: Self, z: Self) -> Self::Code3;
    fn decode3(code: Self::Code3) -> (Self, Self, Self);
    fn encode4(x: Self, y: Self, z: Self, w: Self) -> Self::Code4;
    fn decode4(code: Self::Code4) -> (Self, Self, Self, Self);
}

macro_rules! impl_morton_code {
    ($($coord:ty => ($c2:ty, $c3:ty, $c4:ty):
        $e2:ident, $d2:ident, $e3:ident, $d3:ident, $e4:ident, $d4:ident;)*) => {
        $(
            impl MortonCode for $coord {
                type Code2 = $c2;
                type Code3 = $c3;
                type Code4 = $c4;

                #[inline]
                fn encode2(x: Self, y: Self) -> $c2 {
                    $e2(x, y)
                }

                #[inline]
                fn decode2(code: $c2) -> (Self, Self) {
                    $d2(code)
                }

                #[inline]
                fn encode3(x: Self, y: Self, z: Self) -> $c3 {
                    $e3(x, y, z)
                }

                #[inline]
                fn decode3(code: $c3) -> (Self, Self, Self) {
                    $d3(code)
                }

                #[inline]
                fn encode4(x: Self, y: Self, z: Self, w: Self) -> $c4 {
                    $e4(x, y, z, w)
                }

                #[inline]
                fn decode4(code: $c4) -> (Self, Self, Self, Self) {
                    $d4(code)
                }
            }
        )*
    };
}

impl_morton_code! {
    u8 => (u16, u32, u32):
        encode_2x8, decode_2x8, encode_3x8, decode_3x8, encode_4x8, decode_4x8;
    u16 => (u32, u64, u64):
        encode_2x16, decode_2x16, encode_3x16, decode_3x16, encode_4x16, decode_4x16;
    u32 => (u64, u128, u128):
        encode_2x32, decode_2x32, encode_3x32, decode_3x32, encode_4x32, decode_4x32;
    i8 => (i16, i32, i32):
        encode_2x8_signed, decode_2x8_signed, encode_3x8_signed, decode_3x8_signed,
        encode_4x8_signed, decode_4x8_signed;
    i16 => (i32, i64, i64):
        encode_2x16_signed, decode_2x16_signed, encode_3x16_signed, decode_3x16_signed,
        encode_4x16_signed, decode_4x16_signed;
    i32 => (i64, i128, i128):
        encode_2x32_signed, decode_2x32_signed, encode_3x32_signed, decode_3x32_signed,
        encode_4x32_signed, decode_4x32_signed;
}

// --- Vector wrappers ---

impl<T: MortonCode> Vector<T, 2> {
    #[inline]
    pub fn morton_encode(self) -> T::Code2 {
        T::encode2(self.x(), self.y())
    }

    #[inline]
    pub fn morton_decode(code: T::Code2) -> Self {
        let (x, y) = T::decode2(code);
        Vector::new([x, y])
    }
}

impl<T: MortonCode> Vector<T, 3> {
    #[inline]
    pub fn morton_encode(self) -> T::Code3 {
        T::encode3(self.x(), self.y(), self.z())
    }

    #[inline]
    pub fn morton_decode(code: T::Code3) -> Self {
        let (x, y, z) = T::decode3(code);
        Vector::new([x, y, z])
    }
}

impl<T: MortonCode> Vector<T, 4> {
    #[inline]
    pub fn morton_encode(self) -> T::Code4 {
        T::encode4(self.x(), self.y(), self.z(), self.w())
    }

    #[inline]
    pub fn morton_decode(code: T::Code4) -> Self {
        let (x, y, z, w) = T::decode4(code);
        Vector::new([x, y, z, w])
    }
}

#[cfg(test)]
mod tests;
