// src/morton/tests.rs

#[cfg(test)]
mod morton_tests {
    use crate::morton::*;
    use crate::vector::{vec2, vec3, vec4, Vector};
    use proptest::prelude::*;

    // --- Masks ---

    #[test_log::test]
    fn test_lane_masks() {
        assert_eq!(super::super::lane_mask(1, 2) as u16, 0x5555);
        assert_eq!(super::super::lane_mask(2, 4) as u16, 0x3333);
        assert_eq!(super::super::lane_mask(4, 8) as u16, 0x0F0F);
        assert_eq!(super::super::lane_mask(1, 3) as u32, 0x4924_9249);
        assert_eq!(super::super::lane_mask(64, 128), u64::MAX as u128);
    }

    // --- Known codes ---

    #[test_log::test]
    fn test_encode_2x8_alternating_bits() {
        assert_eq!(encode_2x8(0b1111_1111, 0), 0b0101_0101_0101_0101);
        assert_eq!(decode_2x8(0b0101_0101_0101_0101), (255, 0));
        assert_eq!(encode_2x8(0, 0b1111_1111), 0b1010_1010_1010_1010);
        assert_eq!(encode_2x8(255, 255), u16::MAX);
    }

    #[test_log::test]
    fn test_encode_3x8_known_value() {
        assert_eq!(encode_3x8(5, 9, 1), 0b0100_0100_0111);
        assert_eq!(decode_3x8(0b0100_0100_0111), (5, 9, 1));
    }

    #[test_log::test]
    fn test_bit_positions() {
        // Bit i of coordinate d lands at i * dims + d.
        assert_eq!(encode_3x16(0, 0, 1 << 15), 1u64 << (15 * 3 + 2));
        assert_eq!(encode_4x16(0, 1 << 15, 0, 0), 1u64 << (15 * 4 + 1));
        assert_eq!(encode_2x32(1 << 31, 0), 1u64 << 62);
        assert_eq!(encode_3x32(0, 0, 1 << 31), 1u128 << (31 * 3 + 2));
        assert_eq!(encode_4x32(0, 0, 0, 1 << 31), 1u128 << 127);
    }

    #[test_log::test]
    fn test_full_width_codes_fill_their_low_bits() {
        assert_eq!(encode_3x8(255, 255, 255), (1 << 24) - 1);
        assert_eq!(encode_4x8(255, 255, 255, 255), u32::MAX);
        assert_eq!(encode_3x16(u16::MAX, u16::MAX, u16::MAX), (1 << 48) - 1);
        assert_eq!(encode_4x16(u16::MAX, u16::MAX, u16::MAX, u16::MAX), u64::MAX);
        assert_eq!(encode_4x32(u32::MAX, u32::MAX, u32::MAX, u32::MAX), u128::MAX);
    }

    #[test_log::test]
    fn test_codes_usable_in_const_items() {
        const CODE: u32 = encode_3x8(5, 9, 1);
        const BACK: (u8, u8, u8) = decode_3x8(CODE);
        assert_eq!(CODE, 1095);
        assert_eq!(BACK, (5, 9, 1));
    }

    // --- Exhaustive 8-bit round trips ---

    #[test_log::test]
    fn test_round_trip_2x8_exhaustive() {
        for x in 0..=u8::MAX {
            for y in 0..=u8::MAX {
                assert_eq!(decode_2x8(encode_2x8(x, y)), (x, y));
            }
        }
    }

    #[test_log::test]
    fn test_round_trip_3x8_exhaustive() {
        for x in 0..=u8::MAX {
            for y in 0..=u8::MAX {
                for z in 0..=u8::MAX {
                    assert_eq!(decode_3x8(encode_3x8(x, y, z)), (x, y, z));
                }
            }
        }
    }

    #[test_log::test]
    fn test_round_trip_4x8_every_axis_value() {
        // Each axis takes all 256 values against a spread of the others.
        for a in 0..=u8::MAX {
            for b in (0..=u8::MAX).step_by(17) {
                for c in (0..=u8::MAX).step_by(51) {
                    assert_eq!(decode_4x8(encode_4x8(a, b, c, a ^ b)), (a, b, c, a ^ b));
                    assert_eq!(decode_4x8(encode_4x8(b, a, c, !a)), (b, a, c, !a));
                    assert_eq!(decode_4x8(encode_4x8(c, b, a, b)), (c, b, a, b));
                }
            }
        }
    }

    #[test_log::test]
    fn test_signed_round_trip_8_exhaustive() {
        for x in i8::MIN..=i8::MAX {
            for y in i8::MIN..=i8::MAX {
                assert_eq!(decode_2x8_signed(encode_2x8_signed(x, y)), (x, y));
                let z = x.wrapping_neg();
                assert_eq!(decode_3x8_signed(encode_3x8_signed(x, y, z)), (x, y, z));
                assert_eq!(
                    decode_4x8_signed(encode_4x8_signed(x, y, y, x)),
                    (x, y, y, x)
                );
            }
        }
    }

    #[test_log::test]
    fn test_signed_reinterprets_bits() {
        assert_eq!(encode_2x8_signed(-1, 0), encode_2x8(0xFF, 0) as i16);
        assert_eq!(encode_2x8_signed(-1, -1), -1);
        assert_eq!(encode_3x16_signed(-1, 0, 0), encode_3x16(u16::MAX, 0, 0) as i64);
    }

    // --- Generic access ---

    #[test_log::test]
    fn test_trait_matches_free_functions() {
        assert_eq!(u8::encode2(3, 7), encode_2x8(3, 7));
        assert_eq!(u16::encode3(300, 7, 9), encode_3x16(300, 7, 9));
        assert_eq!(i32::encode4(-5, 6, -7, 8), encode_4x32_signed(-5, 6, -7, 8));
        assert_eq!(i16::decode2(i16::encode2(-300, 300)), (-300, 300));
    }

    #[test_log::test]
    fn test_vector_wrappers() {
        let v = vec2(255u8, 0);
        assert_eq!(v.morton_encode(), 0b0101_0101_0101_0101);
        assert_eq!(Vector::<u8, 2>::morton_decode(v.morton_encode()), v);

        let p = vec3(5u8, 9, 1);
        assert_eq!(p.morton_encode(), 1095);
        assert_eq!(Vector::<u8, 3>::morton_decode(1095), p);

        let q = vec4(-1i16, 2, -3, 4);
        assert_eq!(Vector::<i16, 4>::morton_decode(q.morton_encode()), q);
    }

    // --- Sampled wide round trips ---

    proptest! {
        #[test]
        fn prop_round_trip_16(x in any::<u16>(), y in any::<u16>(), z in any::<u16>(), w in any::<u16>()) {
            prop_assert_eq!(decode_2x16(encode_2x16(x, y)), (x, y));
            prop_assert_eq!(decode_3x16(encode_3x16(x, y, z)), (x, y, z));
            prop_assert_eq!(decode_4x16(encode_4x16(x, y, z, w)), (x, y, z, w));
        }

        #[test]
        fn prop_round_trip_32(x in any::<u32>(), y in any::<u32>(), z in any::<u32>(), w in any::<u32>()) {
            prop_assert_eq!(decode_2x32(encode_2x32(x, y)), (x, y));
            prop_assert_eq!(decode_3x32(encode_3x32(x, y, z)), (x, y, z));
            prop_assert_eq!(decode_4x32(encode_4x32(x, y, z, w)), (x, y, z, w));
        }

        #[test]
        fn prop_signed_round_trip(x in any::<i32>(), y in any::<i32>(), z in any::<i16>(), w in any::<i16>()) {
            prop_assert_eq!(decode_2x32_signed(encode_2x32_signed(x, y)), (x, y));
            prop_assert_eq!(decode_3x32_signed(encode_3x32_signed(x, y, x)), (x, y, x));
            prop_assert_eq!(decode_4x32_signed(encode_4x32_signed(x, y, y, x)), (x, y, y, x));
            prop_assert_eq!(decode_2x16_signed(encode_2x16_signed(z, w)), (z, w));
            prop_assert_eq!(decode_3x16_signed(encode_3x16_signed(z, w, z)), (z, w, z));
            prop_assert_eq!(decode_4x16_signed(encode_4x16_signed(z, w, w, z)), (z, w, w, z));
        }

        #[test]
        fn prop_encoding_preserves_axis_order(x in any::<u16>(), y in any::<u16>()) {
            // Growing one coordinate never shrinks the code.
            if x < u16::MAX {
                prop_assert!(encode_2x16(x + 1, y) > encode_2x16(x, y));
            }
        }
    }
}
