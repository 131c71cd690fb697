// src/matrix/tests.rs

#[cfg(test)]
mod matrix_tests {
    use crate::kernel::HALF_PI;
    use crate::matrix::{project, Mat2, Mat2x3, Mat3, Mat4, Matrix};
    use crate::vector::{vec2, vec3, vec4, Vec3, Vec4, Vector};
    use proptest::prelude::*;

    fn sample_3x3() -> Mat3<i32> {
        // Columns (1,2,3), (4,5,6), (7,8,10).
        Matrix::from_array([[1, 2, 3], [4, 5, 6], [7, 8, 10]])
    }

    #[test_log::test]
    fn test_construction() {
        assert_eq!(Mat2::<f32>::default(), Matrix::from_array([[0.0, 0.0], [0.0, 0.0]]));
        assert_eq!(Mat2::splat(3), Matrix::from_array([[3, 3], [3, 3]]));
        assert_eq!(
            Mat3::from_diagonal(2),
            Matrix::from_array([[2, 0, 0], [0, 2, 0], [0, 0, 2]])
        );
        assert_eq!(Mat2x3::from_diagonal(1), Matrix::from_array([[1, 0], [0, 1], [0, 0]]));
        assert_eq!(
            Mat3::<i32>::identity(),
            Matrix::from_columns([vec3(1, 0, 0), vec3(0, 1, 0), vec3(0, 0, 1)])
        );
        assert_eq!(Matrix::from([[1, 2], [3, 4]]), Mat2::from_array([[1, 2], [3, 4]]));
    }

    #[test_log::test]
    fn test_access() {
        let mut m = sample_3x3();
        assert_eq!(m.column::<1>(), vec3(4, 5, 6));
        assert_eq!(m.col(2), vec3(7, 8, 10));
        assert_eq!(m[0], vec3(1, 2, 3));
        assert_eq!(m.row(0), vec3(1, 4, 7));
        assert_eq!(m[(2, 1)], 8);
        m[(2, 2)] = 9;
        m[0][0] = 0;
        assert_eq!(m.row(2), vec3(3, 6, 9));
        assert_eq!(m.columns()[0], vec3(0, 2, 3));
    }

    #[test_log::test]
    #[should_panic(expected = "column 3 out of range for a 3-column matrix")]
    fn test_column_index_is_bounds_checked() {
        let m = sample_3x3();
        let _ = m[std::hint::black_box(3)];
    }

    #[test_log::test]
    fn test_transpose() {
        let m = Mat2x3::from_array([[1, 2], [3, 4], [5, 6]]);
        let t = m.transpose();
        assert_eq!(t, Matrix::<i32, 3, 2>::from_array([[1, 3, 5], [2, 4, 6]]));
        assert_eq!(t.transpose(), m);
    }

    #[test_log::test]
    fn test_elementwise_arithmetic() {
        let a = Mat2::from_array([[1, 2], [3, 4]]);
        let b = Mat2::from_array([[10, 20], [30, 40]]);
        assert_eq!(a + b, Mat2::from_array([[11, 22], [33, 44]]));
        assert_eq!(b - a, Mat2::from_array([[9, 18], [27, 36]]));
        assert_eq!(a * 3, Mat2::from_array([[3, 6], [9, 12]]));
        assert_eq!(b / 10, a);
        assert_eq!(a + 1, Mat2::from_array([[2, 3], [4, 5]]));
        assert_eq!(-a, Mat2::from_array([[-1, -2], [-3, -4]]));

        let mut c = a;
        c += b;
        c -= 1;
        c *= 2;
        c /= 2;
        assert_eq!(c, Mat2::from_array([[10, 21], [32, 43]]));
    }

    #[test_log::test]
    fn test_matrix_vector_product() {
        let m = sample_3x3();
        // Row i dotted with the vector.
        assert_eq!(m * vec3(1, 0, 0), vec3(1, 2, 3));
        assert_eq!(m * vec3(1, 1, 1), vec3(12, 15, 19));

        let wide = Mat2x3::from_array([[1, 2], [3, 4], [5, 6]]);
        assert_eq!(wide * vec3(1, 1, 1), vec2(9, 12));
    }

    #[test_log::test]
    fn test_matrix_product() {
        let a = Mat2::from_array([[1, 3], [2, 4]]); // rows (1,2), (3,4)
        let b = Mat2::from_array([[5, 7], [6, 8]]); // rows (5,6), (7,8)
        assert_eq!(a * b, Mat2::from_array([[19, 43], [22, 50]]));

        // 2x3 times 3x2 is 2x2.
        let wide = Mat2x3::from_array([[1, 4], [2, 5], [3, 6]]); // rows (1,2,3), (4,5,6)
        let tall = wide.transpose();
        assert_eq!(wide * tall, Mat2::from_array([[14, 32], [32, 77]]));

        let mut m = sample_3x3();
        m *= Mat3::identity();
        assert_eq!(m, sample_3x3());
    }

    #[test_log::test]
    fn test_traversal() {
        let m = sample_3x3();
        assert_eq!(m.fold(0, |acc, x| acc + x), 46);
        assert_eq!(m.map(|x| x % 2 == 0).fold(0, |acc, even| acc + even as i32), 5);
        assert!(m.any(|x| x == 10));
        assert!(m.all(|x| x > 0));
        assert_eq!(
            m.zip(Mat3::splat(1), |a, b| a - b).row(0),
            vec3(0, 3, 6)
        );
    }

    #[test_log::test]
    fn test_float_matrices() {
        let rotation = Mat2::from_columns([vec2(0.0f64, 1.0), vec2(-1.0, 0.0)]);
        assert_eq!(rotation * vec2(1.0, 0.0), vec2(0.0, 1.0));
        assert_eq!(rotation * rotation * rotation * rotation, Mat2::identity());

        let scale = Mat4::from_diagonal(2.0f32);
        assert_eq!(scale * vec4(1.0, 2.0, 3.0, 1.0), vec4(2.0, 4.0, 6.0, 2.0));
        assert_eq!(Vector::<f32, 4>::LEN, 4);
    }

    // --- Determinant and inverse ---

    fn assert_close<const N: usize>(a: Matrix<f64, N, N>, b: Matrix<f64, N, N>) {
        for c in 0..N {
            for r in 0..N {
                let (x, y) = (a[(c, r)], b[(c, r)]);
                assert!((x - y).abs() < 1e-12, "{:?} != {:?} at ({}, {})", a, b, c, r);
            }
        }
    }

    fn assert_vec_close<const N: usize>(a: Vector<f64, N>, b: Vector<f64, N>) {
        assert!((a - b).abs().max_component() < 1e-12, "{:?} != {:?}", a, b);
    }

    fn sample_4x4() -> Mat4<i32> {
        Matrix::from_array([[2, 0, 1, 3], [1, 3, 0, -1], [0, -2, 4, 1], [5, 1, -1, 2]])
    }

    #[test_log::test]
    fn test_determinant() {
        assert_eq!(Mat2::from_array([[1, 2], [3, 4]]).determinant(), -2);
        assert_eq!(sample_3x3().determinant(), -3);
        assert_eq!(sample_3x3().transpose().determinant(), -3);
        assert_eq!(sample_4x4().determinant(), -116);
        assert_eq!(Mat4::<i32>::identity().determinant(), 1);
        assert_eq!(Mat4::from_diagonal(2.0f64).determinant(), 16.0);
        // Two equal columns.
        assert_eq!(Mat3::from_array([[1, 2, 3], [1, 2, 3], [0, 1, 5]]).determinant(), 0);
    }

    #[test_log::test]
    fn test_inverse() {
        let m2 = Mat2::from_array([[4.0, 7.0], [2.0, 6.0]]);
        let inv2 = m2.inverse().expect("invertible");
        assert_close(inv2, Mat2::from_array([[0.6, -0.7], [-0.2, 0.4]]));
        assert_close(m2 * inv2, Mat2::identity());

        let m3 = sample_3x3().map(f64::from);
        let inv3 = m3.inverse().expect("invertible");
        assert_close(m3 * inv3, Mat3::identity());
        assert_close(inv3 * m3, Mat3::identity());

        let m4 = sample_4x4().map(f64::from);
        let inv4 = m4.inverse().expect("invertible");
        assert_close(m4 * inv4, Mat4::identity());
        assert_close(inv4 * m4, Mat4::identity());
        assert!((inv4.determinant() * m4.determinant() - 1.0).abs() < 1e-12);
    }

    #[test_log::test]
    fn test_singular_matrix_has_no_inverse() {
        assert_eq!(Mat2::from_array([[1.0f32, 2.0], [2.0, 4.0]]).inverse(), None);
        assert_eq!(Mat3::<f64>::default().inverse(), None);
        let mut m4 = sample_4x4().map(f64::from);
        m4[3] = m4[0] * 2.0;
        assert_eq!(m4.inverse(), None);
    }

    // --- Transforms ---

    fn apply(m: &Mat4<f64>, p: Vec3<f64>) -> Vec3<f64> {
        let h = *m * vec4(p.x(), p.y(), p.z(), 1.0);
        vec3(h.x(), h.y(), h.z()) / h.w()
    }

    #[test_log::test]
    fn test_affine_builders() {
        let p = vec3(1.0, 2.0, 3.0);
        let moved = Mat4::<f64>::identity().translate(vec3(1.0, -1.0, 0.5));
        assert_eq!(apply(&moved, p), vec3(2.0, 1.0, 3.5));

        let scaled = Mat4::from_scale(vec3(2.0, 3.0, -1.0));
        assert_eq!(apply(&scaled, p), vec3(2.0, 6.0, -3.0));

        // The rightmost transform applies first.
        let both = Mat4::from_translation(vec3(10.0, 0.0, 0.0)).scale(vec3(2.0, 2.0, 2.0));
        assert_eq!(apply(&both, p), vec3(12.0, 4.0, 6.0));

        let quarter = Mat4::<f64>::identity().rotate(HALF_PI, vec3(0.0, 0.0, 5.0));
        assert_vec_close(apply(&quarter, vec3(1.0, 0.0, 0.0)), vec3(0.0, 1.0, 0.0));
        assert_vec_close(apply(&quarter, vec3(0.0, 0.0, 2.0)), vec3(0.0, 0.0, 2.0));
        let about_x = Mat4::from_axis_angle(vec3(1.0, 0.0, 0.0), HALF_PI);
        assert_vec_close(apply(&about_x, vec3(0.0, 1.0, 0.0)), vec3(0.0, 0.0, 1.0));

        let rigid = moved * quarter;
        let undone = rigid.inverse().expect("rigid motions invert");
        assert_vec_close(apply(&undone, apply(&rigid, p)), p);
    }

    #[test_log::test]
    fn test_perspective_depth_range() {
        let projection = Mat4::perspective(HALF_PI, 2.0, 1.0, 10.0);
        assert_vec_close(apply(&projection, vec3(0.0, 0.0, -1.0)), vec3(0.0, 0.0, -1.0));
        assert_vec_close(apply(&projection, vec3(0.0, 0.0, -10.0)), vec3(0.0, 0.0, 1.0));
        // A 90 degree field of view reaches y = 1 at distance 1; the aspect halves x.
        assert_vec_close(apply(&projection, vec3(2.0, 1.0, -1.0)), vec3(1.0, 1.0, -1.0));
    }

    #[test_log::test]
    fn test_orthographic_maps_box_to_cube() {
        let projection = Mat4::orthographic(-2.0, 2.0, -1.0, 1.0, 0.5, 10.0);
        assert_vec_close(apply(&projection, vec3(2.0, 1.0, -0.5)), vec3(1.0, 1.0, -1.0));
        assert_vec_close(apply(&projection, vec3(-2.0, -1.0, -10.0)), vec3(-1.0, -1.0, 1.0));
        assert_vec_close(apply(&projection, vec3(0.0, 0.0, -5.25)), vec3(0.0, 0.0, 0.0));
    }

    #[test_log::test]
    fn test_project_to_viewport() {
        let viewport: Vec4<f64> = vec4(10.0, 20.0, 640.0, 480.0);
        let projection = Mat4::orthographic(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0);
        let to_window = |object, model: &Mat4<f64>| project(object, model, &projection, viewport);
        let model = Mat4::identity();
        assert_vec_close(to_window(vec3(0.0, 0.0, 0.0), &model), vec3(330.0, 260.0, 0.5));
        assert_vec_close(to_window(vec3(1.0, 1.0, -1.0), &model), vec3(650.0, 500.0, 1.0));
        let shifted = Mat4::from_translation(vec3(-1.0, -1.0, 1.0));
        assert_vec_close(to_window(vec3(0.0, 0.0, 0.0), &shifted), vec3(10.0, 20.0, 0.0));
    }

    fn mat3_strategy() -> impl Strategy<Value = Mat3<i64>> {
        any::<[[i16; 3]; 3]>()
            .prop_map(|columns| Matrix::from_array(columns.map(|c| c.map(i64::from))))
    }

    fn small_mat3_strategy() -> impl Strategy<Value = Mat3<i64>> {
        any::<[[i8; 3]; 3]>()
            .prop_map(|columns| Matrix::from_array(columns.map(|c| c.map(i64::from))))
    }

    proptest! {
        #[test]
        fn prop_identity_is_neutral(m in mat3_strategy()) {
            prop_assert_eq!(m * Mat3::identity(), m);
            prop_assert_eq!(Mat3::identity() * m, m);
        }

        #[test]
        fn prop_determinant_is_multiplicative(
            a in small_mat3_strategy(),
            b in small_mat3_strategy(),
        ) {
            prop_assert_eq!((a * b).determinant(), a.determinant() * b.determinant());
        }

        #[test]
        fn prop_transpose_keeps_determinant(columns in any::<[[i8; 4]; 4]>()) {
            let m = Matrix::from_array(columns.map(|c| c.map(i64::from)));
            prop_assert_eq!(m.transpose().determinant(), m.determinant());
        }

        #[test]
        fn prop_product_transpose(a in mat3_strategy(), b in mat3_strategy()) {
            prop_assert_eq!((a * b).transpose(), b.transpose() * a.transpose());
        }
    }
}
