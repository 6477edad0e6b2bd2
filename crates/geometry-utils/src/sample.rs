//! Point sampling on the unit sphere and voxel rasterization of a plane.

use std::f64::consts::PI;
use std::iter::FusedIterator;

use nalgebra::Vector3;

use crate::plane::Plane;

/// `n` points spread over the unit sphere along a golden-angle spiral.
///
/// Heights step down from `1 - dz/2` by `dz = 2/n`; longitude advances by
/// `π(3 - √5)` per point and is never wrapped.
pub fn sample_unit_sphere(n: usize) -> Vec<Vector3<f64>> {
    let dlong = PI * (3.0 - 5f64.sqrt());
    let dz = 2.0 / n as f64;
    let mut lon = 0.0f64;
    let mut z = 1.0 - dz / 2.0;
    let mut points = Vec::with_capacity(n);
    for _ in 0..n {
        let r = (1.0 - z * z).sqrt();
        points.push(Vector3::new(lon.cos() * r, lon.sin() * r, z));
        z -= dz;
        lon += dlong;
    }
    points
}

/// Visit every voxel `(i, j, k)` of a grid whose column intersects `plane`.
///
/// Axes are ordered by ascending |normal component| (stable): the two
/// flattest axes `d0`, `d1` are iterated exhaustively (`d0` outer), and the
/// plane equation is solved for the index along the steepest axis `d2`,
/// using cell corner coordinates `origin + vox_len·index`. Only solved indices
/// in `[0, grid_dims[d2])` are yielded.
///
/// The sequence is finite and restartable (call again for a fresh pass). A
/// zero normal component along `d2` is not guarded; the resulting non-finite
/// solutions are skipped.
pub fn rasterize_plane(
    grid_origin: &Vector3<f64>,
    grid_dims: [usize; 3],
    vox_len: f64,
    plane: &Plane,
) -> RasterizePlane {
    let abs = plane.normal.abs();
    let mut axes = [0usize, 1, 2];
    axes.sort_by(|&a, &b| abs[a].total_cmp(&abs[b]));
    RasterizePlane {
        origin: *grid_origin,
        dims: grid_dims,
        vox_len,
        plane: *plane,
        axes,
        i: 0,
        j: 0,
    }
}

/// Iterator returned by `rasterize_plane`.
#[derive(Clone, Debug)]
pub struct RasterizePlane {
    origin: Vector3<f64>,
    dims: [usize; 3],
    vox_len: f64,
    plane: Plane,
    axes: [usize; 3],
    i: usize,
    j: usize,
}

impl RasterizePlane {
    fn solve(&self, i: usize, j: usize) -> Option<[usize; 3]> {
        let [d0, d1, d2] = self.axes;
        let n = &self.plane.normal;
        let v0 = self.origin[d0] + self.vox_len * i as f64;
        let v1 = self.origin[d1] + self.vox_len * j as f64;
        let v2 = -(n[d0] * v0 + n[d1] * v1 + self.plane.d) / n[d2];
        let k = ((v2 - self.origin[d2]) / self.vox_len).floor();
        if !k.is_finite() || k < 0.0 || k >= self.dims[d2] as f64 {
            return None;
        }
        let mut cell = [0usize; 3];
        cell[d0] = i;
        cell[d1] = j;
        cell[d2] = k as usize;
        Some(cell)
    }
}

impl Iterator for RasterizePlane {
    type Item = [usize; 3];

    fn next(&mut self) -> Option<Self::Item> {
        let [d0, d1, _] = self.axes;
        while self.i < self.dims[d0] {
            if self.j >= self.dims[d1] {
                self.i += 1;
                self.j = 0;
                continue;
            }
            let (i, j) = (self.i, self.j);
            self.j += 1;
            if let Some(cell) = self.solve(i, j) {
                return Some(cell);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let [d0, d1, _] = self.axes;
        let total = self.dims[d0].saturating_mul(self.dims[d1]);
        let done = self
            .i
            .saturating_mul(self.dims[d1])
            .saturating_add(self.j)
            .min(total);
        (0, Some(total - done))
    }
}

impl FusedIterator for RasterizePlane {}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn sphere_points_are_unit_and_counted() {
        let pts = sample_unit_sphere(200);
        assert_eq!(pts.len(), 200);
        for p in &pts {
            assert!((p.norm() - 1.0).abs() < 1e-12);
        }
        // first point sits just below the north pole at longitude 0
        assert!((pts[0].z - (1.0 - 1.0 / 200.0)).abs() < 1e-12);
        assert!(pts[0].y.abs() < 1e-12 && pts[0].x > 0.0);
        // heights descend monotonically and stay symmetric
        assert!(pts.windows(2).all(|w| w[1].z < w[0].z));
        assert!((pts[0].z + pts[199].z).abs() < 1e-12);
    }

    #[test]
    fn sphere_sampling_is_balanced() {
        let pts = sample_unit_sphere(1000);
        let c = pts.iter().sum::<Vector3<f64>>() / 1000.0;
        assert!(c.norm() < 1e-2);
        assert!(sample_unit_sphere(0).is_empty());
    }

    #[test]
    fn rasterize_z0_layer() {
        let plane = Plane::new(vector![0.0, 0.0, 1.0], 0.0);
        let cells: Vec<[usize; 3]> =
            rasterize_plane(&vector![0.0, 0.0, 0.0], [4, 4, 4], 1.0, &plane).collect();
        assert_eq!(cells.len(), 16);
        let mut expected = Vec::new();
        for i in 0..4 {
            for j in 0..4 {
                expected.push([i, j, 0]);
            }
        }
        assert_eq!(cells, expected);
    }

    #[test]
    fn rasterize_x_plane_orders_axes() {
        // x = 2.5 with origin at 0, unit voxels -> solved index 2 along x
        let plane = Plane::new(vector![1.0, 0.0, 0.0], -2.5);
        let cells: Vec<_> =
            rasterize_plane(&vector![0.0, 0.0, 0.0], [5, 3, 2], 1.0, &plane).collect();
        // y (d0) outer, z (d1) inner
        assert_eq!(cells, vec![[2, 0, 0], [2, 0, 1], [2, 1, 0], [2, 1, 1], [2, 2, 0], [2, 2, 1]]);
    }

    #[test]
    fn rasterize_skips_cells_outside_grid() {
        // plane z = x with a 4x1x2 grid: only x in {0, 1} lands inside
        let n = vector![-1.0, 0.0, 1.0] / 2f64.sqrt();
        let plane = Plane::new(n, 0.0);
        let cells: Vec<_> =
            rasterize_plane(&vector![0.0, 0.0, 0.0], [4, 1, 2], 1.0, &plane).collect();
        assert_eq!(cells, vec![[0, 0, 0], [1, 0, 1]]);
    }

    #[test]
    fn rasterize_is_restartable_and_droppable() {
        let plane = Plane::new(vector![0.0, 0.0, 1.0], -1.5);
        let origin = vector![0.0, 0.0, 0.0];
        let mut it = rasterize_plane(&origin, [3, 3, 3], 1.0, &plane);
        let first = it.next();
        drop(it);
        let again: Vec<_> = rasterize_plane(&origin, [3, 3, 3], 1.0, &plane).collect();
        assert_eq!(first, Some(again[0]));
        assert_eq!(again.len(), 9);
        assert!(again.iter().all(|c| c[2] == 1));
    }

    #[test]
    fn rasterize_size_hint_saturates_on_huge_grid() {
        let plane = Plane::new(vector![0.0, 0.0, 1.0], 0.0);
        let it = rasterize_plane(&vector![0.0, 0.0, 0.0], [usize::MAX, 4, 4], 1.0, &plane);
        // x and y are the flat axes
        assert_eq!(it.size_hint(), (0, Some(usize::MAX)));
        let it = rasterize_plane(&vector![0.0, 0.0, 0.0], [3, 4, 4], 1.0, &plane);
        assert_eq!(it.size_hint(), (0, Some(12)));
    }

    #[test]
    fn rasterize_empty_grid() {
        let plane = Plane::new(vector![0.0, 0.0, 1.0], 0.0);
        assert_eq!(rasterize_plane(&vector![0.0, 0.0, 0.0], [0, 4, 4], 1.0, &plane).count(), 0);
    }
}
