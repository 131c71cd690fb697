// src/packing/tests.rs

#[cfg(test)]
mod packing_tests {
    use crate::packing::*;
    use crate::vector::{vec2, vec4, Vec2, Vec4};
    use proptest::prelude::*;

    // --- Word packing ---

    #[test_log::test]
    fn test_first_field_is_most_significant() {
        assert_eq!(pack_2x8_to_16(0xAB, 0xCD), 0xABCD);
        assert_eq!(pack_4x8_to_32(0x12, 0x34, 0x56, 0x78), 0x1234_5678);
        assert_eq!(pack_2x16_to_32(0xBEEF, 0x0001), 0xBEEF_0001);
        assert_eq!(pack_4x16_to_64(1, 2, 3, 4), 0x0001_0002_0003_0004);
        assert_eq!(pack_2x32_to_64(0xDEAD_BEEF, 7), 0xDEAD_BEEF_0000_0007);
    }

    #[test_log::test]
    fn test_unpack_extracts_every_field() {
        assert_eq!(unpack_16_to_2x8(0xABCD), vec2(0xAB, 0xCD));
        assert_eq!(unpack_32_to_4x8(0x1234_5678), vec4(0x12, 0x34, 0x56, 0x78));
        // The low field of a 4x16 word is a full 16 bits wide.
        assert_eq!(
            unpack_64_to_4x16(0xFFFF_EEEE_DDDD_CCCC),
            vec4(0xFFFF, 0xEEEE, 0xDDDD, 0xCCCC)
        );
        assert_eq!(unpack_64_to_2x32(u64::MAX), vec2(u32::MAX, u32::MAX));
    }

    #[test_log::test]
    fn test_negative_fields_do_not_clobber_neighbours() {
        let word = pack_2x8_to_16_signed(1, -1);
        assert_eq!(word as u16, 0x01FF);
        assert_eq!(unpack_16_to_2x8_signed(word), vec2(1, -1));

        let word = pack_4x16_to_64_signed(-1, 0, -2, 3);
        assert_eq!(word as u64, 0xFFFF_0000_FFFE_0003);
        assert_eq!(unpack_64_to_4x16_signed(word), vec4(-1, 0, -2, 3));
    }

    #[test_log::test]
    fn test_round_trip_2x8_exhaustive() {
        for a in 0..=u8::MAX {
            for b in 0..=u8::MAX {
                assert_eq!(unpack_16_to_2x8(pack_2x8_to_16(a, b)), vec2(a, b));
            }
        }
        for a in i8::MIN..=i8::MAX {
            for b in i8::MIN..=i8::MAX {
                assert_eq!(unpack_16_to_2x8_signed(pack_2x8_to_16_signed(a, b)), vec2(a, b));
            }
        }
    }

    #[test_log::test]
    fn test_vector_pack_trait() {
        let v: Vec4<u8> = vec4(1, 2, 3, 4);
        assert_eq!(v.pack(), 0x0102_0304);
        assert_eq!(Vec4::<u8>::unpack(v.pack()), v);

        let s: Vec2<i32> = vec2(i32::MIN, -1);
        assert_eq!(Vec2::<i32>::unpack(s.pack()), s);
    }

    #[test_log::test]
    fn test_packing_in_const_items() {
        const WORD: u32 = pack_2x16_to_32(0x1234, 0x5678);
        assert_eq!(WORD, 0x1234_5678);
        assert_eq!(unpack_32_to_2x16(WORD), vec2(0x1234, 0x5678));
    }

    proptest! {
        #[test]
        fn prop_round_trip_words(a in any::<u16>(), b in any::<u16>(), c in any::<u16>(), d in any::<u16>(),
                                 x in any::<u32>(), y in any::<u32>()) {
            prop_assert_eq!(unpack_32_to_2x16(pack_2x16_to_32(a, b)), vec2(a, b));
            prop_assert_eq!(unpack_64_to_4x16(pack_4x16_to_64(a, b, c, d)), vec4(a, b, c, d));
            prop_assert_eq!(unpack_64_to_2x32(pack_2x32_to_64(x, y)), vec2(x, y));
            let (p, q, r, s) = (a as u8, b as u8, c as u8, d as u8);
            prop_assert_eq!(unpack_32_to_4x8(pack_4x8_to_32(p, q, r, s)), vec4(p, q, r, s));
        }

        #[test]
        fn prop_round_trip_signed_words(a in any::<i16>(), b in any::<i16>(), c in any::<i16>(), d in any::<i16>(),
                                        x in any::<i32>(), y in any::<i32>()) {
            prop_assert_eq!(unpack_32_to_2x16_signed(pack_2x16_to_32_signed(a, b)), vec2(a, b));
            prop_assert_eq!(unpack_64_to_4x16_signed(pack_4x16_to_64_signed(a, b, c, d)), vec4(a, b, c, d));
            prop_assert_eq!(unpack_64_to_2x32_signed(pack_2x32_to_64_signed(x, y)), vec2(x, y));
            let (p, q, r, s) = (a as i8, b as i8, c as i8, d as i8);
            prop_assert_eq!(unpack_32_to_4x8_signed(pack_4x8_to_32_signed(p, q, r, s)), vec4(p, q, r, s));
        }
    }

    // --- Normalized quantization ---

    #[test_log::test]
    fn test_uint8_midpoint() {
        assert_eq!(pack_norm_float_to_uint8(0.5), 128);
        assert!((unpack_uint8_to_norm_float(128) - 0.5).abs() < 0.004);
    }

    #[test_log::test]
    fn test_range_endpoints() {
        assert_eq!(pack_norm_float_to_uint8(0.0), 0);
        assert_eq!(pack_norm_float_to_uint8(1.0), 255);
        assert_eq!(pack_norm_float_to_int8(-1.0), -127);
        assert_eq!(pack_norm_float_to_int8(1.0), 127);
        assert_eq!(pack_norm_float_to_uint16(1.0), u16::MAX);
        assert_eq!(pack_norm_float_to_int16(-1.0), -i16::MAX);
        assert_eq!(unpack_int16_to_norm_float(i16::MAX), 1.0);
    }

    #[test_log::test]
    fn test_out_of_range_input_is_clamped() {
        assert_eq!(pack_norm_float_to_uint8(2.0), 255);
        assert_eq!(pack_norm_float_to_uint8(-0.5), 0);
        assert_eq!(pack_norm_float_to_int8(-3.0), -127);
        assert_eq!(pack_norm_float_to_int16(7.5), i16::MAX);
        assert_eq!(pack_norm_float_to_uint16(-1.0), 0);
    }

    #[test_log::test]
    fn test_quantization_error_bound_8_bit() {
        // Reconstruction stays within half a step of the clamped input.
        let unsigned_bound = 1.0 / (2.0 * u8::MAX as f32) + 1e-6;
        let signed_bound = 1.0 / (2.0 * i8::MAX as f32) + 1e-6;
        for i in 0..=1000 {
            let v = i as f32 / 1000.0;
            let back = unpack_uint8_to_norm_float(pack_norm_float_to_uint8(v));
            assert!((back - v).abs() <= unsigned_bound, "uint8 {} -> {}", v, back);

            let s = v * 2.0 - 1.0;
            let back = unpack_int8_to_norm_float(pack_norm_float_to_int8(s));
            assert!((back - s).abs() <= signed_bound, "int8 {} -> {}", s, back);
        }
    }

    #[test_log::test]
    fn test_round_trip_is_lossy() {
        let v = 0.25;
        let back = unpack_uint8_to_norm_float(pack_norm_float_to_uint8(v));
        assert_ne!(back, v);
        assert!((back - v).abs() <= 1.0 / 510.0);
    }

    proptest! {
        #[test]
        fn prop_quantization_error_bound_16_bit(v in -2.0f32..2.0f32) {
            let bound = 1.0 / (2.0 * i16::MAX as f32) + 1e-6;
            let clamped = v.clamp(-1.0, 1.0);
            let back = unpack_int16_to_norm_float(pack_norm_float_to_int16(v));
            prop_assert!((back - clamped).abs() <= bound, "int16 {} -> {}", v, back);

            let bound = 1.0 / (2.0 * u16::MAX as f32) + 1e-6;
            let clamped = v.clamp(0.0, 1.0);
            let back = unpack_uint16_to_norm_float(pack_norm_float_to_uint16(v));
            prop_assert!((back - clamped).abs() <= bound, "uint16 {} -> {}", v, back);
        }
    }
}
