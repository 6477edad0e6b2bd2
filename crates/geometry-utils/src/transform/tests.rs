use super::*;
use crate::error::GeometryError;
use crate::rotation::axis_angle_to_matrix;
use nalgebra::{dvector, matrix, vector, Vector2, Vector4};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn stack_rt_layout() {
    let r = axis_angle_to_matrix(&vector![0.0, 0.0, 1.0], 0.5);
    let t = vector![1.0, -2.0, 3.0];
    let m = stack_rt(&r, &t);
    assert_eq!(m.fixed_view::<3, 3>(0, 0), r);
    assert_eq!(m.column(3).xyz(), t);
    assert_eq!(m.row(3).transpose(), Vector4::new(0.0, 0.0, 0.0, 1.0));
    // apply to a homogeneous point
    let p = vector![1.0, 0.0, 0.0];
    let q = m * p.push(1.0);
    assert!((q.xyz() - (r * p + t)).norm() < 1e-12);
}

#[test]
fn similarity_transform_2d_and_3d() {
    let s = similarity_transform(2.5, &dvector![1.0, -1.0]);
    assert_eq!(s.shape(), (3, 3));
    assert_eq!(
        s,
        nalgebra::DMatrix::from_row_slice(3, 3, &[2.5, 0.0, 1.0, 0.0, 2.5, -1.0, 0.0, 0.0, 1.0])
    );
    let s3 = similarity_transform(0.5, &dvector![0.0, 4.0, 8.0]);
    assert_eq!(s3.shape(), (4, 4));
    assert_eq!(s3[(3, 3)], 1.0);
    assert_eq!(s3[(1, 1)], 0.5);
    assert_eq!(s3[(2, 3)], 8.0);
}

#[test]
fn volume_corners_z_major_order() {
    let c = volume_corners(&vector![1.0, 2.0, 3.0], &vector![10.0, 20.0, 30.0]);
    assert_eq!(c[0], vector![1.0, 2.0, 3.0]);
    assert_eq!(c[1], vector![11.0, 2.0, 3.0]);
    assert_eq!(c[2], vector![1.0, 22.0, 3.0]);
    assert_eq!(c[3], vector![11.0, 22.0, 3.0]);
    assert_eq!(c[4], vector![1.0, 2.0, 33.0]);
    assert_eq!(c[7], vector![11.0, 22.0, 33.0]);
}

#[test]
fn patch_corners_order() {
    let c = patch_corners_3d(&vector![0.0, 0.0, 1.0], &vector![1.0, 0.0, 0.0], &vector![0.0, 2.0, 0.0]);
    assert_eq!(c[0], vector![-1.0, -2.0, 1.0]);
    assert_eq!(c[1], vector![-1.0, 2.0, 1.0]);
    assert_eq!(c[2], vector![1.0, 2.0, 1.0]);
    assert_eq!(c[3], vector![1.0, -2.0, 1.0]);
}

#[test]
fn plane_to_image_scales_axes() {
    // patch in the z = 0 plane through the origin, 2 x 4 units -> 100 x 50 px
    let xf = compute_transform_3d_plane_to_2d(
        &vector![0.0, 0.0, 0.0],
        &vector![2.0, 0.0, 0.0],
        &vector![0.0, 4.0, 0.0],
        100,
        50,
    );
    let corner = xf * vector![2.0, 4.0, 0.0, 1.0];
    assert!((corner.x - 100.0).abs() < 1e-12);
    assert!((corner.y - 50.0).abs() < 1e-12);
    assert_eq!(corner.z, 0.0);
    let mid = xf * vector![1.0, 1.0, 0.0, 1.0];
    assert!((mid.x - 50.0).abs() < 1e-12);
    assert!((mid.y - 12.5).abs() < 1e-12);
    // third row is identically zero
    assert!(xf.row(2).iter().all(|&v| v == 0.0));
}

#[test]
fn plane_to_image_rotated_frame() {
    // axes along y and -x, origin at the world origin
    let xf = compute_transform_3d_plane_to_2d(
        &vector![0.0, 0.0, 0.0],
        &vector![0.0, 3.0, 0.0],
        &vector![-3.0, 0.0, 0.0],
        30,
        60,
    );
    let p = xf * vector![-1.5, 3.0, 0.0, 1.0];
    assert!((p.x - 30.0).abs() < 1e-12);
    assert!((p.y - 30.0).abs() < 1e-12);
}

#[test]
fn affine_recovers_known_matrix() {
    let h_true = matrix![
        1.2, -0.3, 4.0;
        0.5, 0.9, -2.0;
        0.0, 0.0, 1.0
    ];
    let mut rng = StdRng::seed_from_u64(11);
    for n in [3usize, 4, 10] {
        let from: Vec<Vector2<f64>> = (0..n)
            .map(|_| vector![rng.gen_range(-50.0..50.0), rng.gen_range(-20.0..80.0)])
            .collect();
        let to: Vec<Vector2<f64>> = from
            .iter()
            .map(|p| (h_true * p.push(1.0)).xy())
            .collect();
        let h = compute_2d_affine_xform(&from, &to).unwrap();
        assert!((h - h_true).amax() < 1e-8, "n={n}: {h}");
        assert_eq!(h[(2, 2)], 1.0);
    }
}

#[test]
fn affine_pure_translation() {
    let from = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0], vector![2.0, 3.0]];
    let to: Vec<_> = from.iter().map(|p| p + vector![5.0, -7.0]).collect();
    let h = compute_2d_affine_xform(&from, &to).unwrap();
    let want = matrix![1.0, 0.0, 5.0; 0.0, 1.0, -7.0; 0.0, 0.0, 1.0];
    assert!((h - want).amax() < 1e-10);
}

#[test]
fn affine_count_mismatch() {
    let from = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]];
    let to = vec![vector![0.0, 0.0], vector![1.0, 0.0]];
    assert_eq!(
        compute_2d_affine_xform(&from, &to),
        Err(GeometryError::CountMismatch { from: 3, to: 2 })
    );
}

#[test]
fn affine_degenerate_input() {
    let same = vec![vector![1.0, 1.0]; 4];
    assert_eq!(
        compute_2d_affine_xform(&same, &same),
        Err(GeometryError::DegenerateCorrespondences)
    );
    assert!(compute_2d_affine_xform(&[], &[]).is_err());
}
