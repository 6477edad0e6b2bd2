//! Axis-aligned boxes in D dimensions.
//!
//! Invariant: `max_pt >= min_pt` componentwise. Construction clamps any
//! violating `max_pt` component up to the matching `min_pt` component; it never
//! errors on inverted input. An "empty" box (e.g. a disjoint intersection)
//! therefore shows up as zero extent along some axis, and `area()` is 0.

use std::fmt;

use nalgebra::SVector;

/// N-D axis-aligned box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisAlignedBox<const D: usize> {
    min_pt: SVector<f64, D>,
    max_pt: SVector<f64, D>,
}

/// 2D specialization; identical behaviour, distinct textual form.
pub type Box2D = AxisAlignedBox<2>;

impl<const D: usize> AxisAlignedBox<D> {
    pub fn new(min_pt: SVector<f64, D>, max_pt: SVector<f64, D>) -> Self {
        Self {
            min_pt,
            max_pt: max_pt.zip_map(&min_pt, |hi, lo| if hi < lo { lo } else { hi }),
        }
    }

    /// Bounding box of `points`, `None` when empty.
    pub fn from_points(points: &[SVector<f64, D>]) -> Option<Self> {
        compute_bounding_box(points).map(|(lo, hi)| Self::new(lo, hi))
    }

    #[inline]
    pub fn min_pt(&self) -> &SVector<f64, D> {
        &self.min_pt
    }

    #[inline]
    pub fn max_pt(&self) -> &SVector<f64, D> {
        &self.max_pt
    }

    /// Product of extents; 0 if any extent is <= 0.
    pub fn area(&self) -> f64 {
        let dims = self.dims();
        if dims.iter().any(|&e| e <= 0.0) {
            return 0.0;
        }
        dims.product()
    }

    #[inline]
    pub fn centroid(&self) -> SVector<f64, D> {
        (self.min_pt + self.max_pt) * 0.5
    }

    #[inline]
    pub fn dims(&self) -> SVector<f64, D> {
        self.max_pt - self.min_pt
    }
}

impl<const D: usize> fmt::Display for AxisAlignedBox<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if D == 2 { "Box2D" } else { "AxisAlignedBox" };
        write!(
            f,
            "{name}: ({:?}, {:?})",
            self.min_pt.as_slice(),
            self.max_pt.as_slice()
        )
    }
}

/// Componentwise max of minima and min of maxima.
///
/// `None` if either input is `None`. Disjoint boxes yield zero extent along
/// the separating axis (see module invariant).
pub fn intersection<const D: usize>(
    a: Option<&AxisAlignedBox<D>>,
    b: Option<&AxisAlignedBox<D>>,
) -> Option<AxisAlignedBox<D>> {
    let (a, b) = (a?, b?);
    Some(AxisAlignedBox::new(
        a.min_pt.sup(&b.min_pt),
        a.max_pt.inf(&b.max_pt),
    ))
}

/// Componentwise min of minima and max of maxima; `None` acts as identity.
pub fn union<const D: usize>(
    a: Option<&AxisAlignedBox<D>>,
    b: Option<&AxisAlignedBox<D>>,
) -> Option<AxisAlignedBox<D>> {
    match (a, b) {
        (None, None) => None,
        (Some(a), None) => Some(*a),
        (None, Some(b)) => Some(*b),
        (Some(a), Some(b)) => Some(AxisAlignedBox::new(
            a.min_pt.inf(&b.min_pt),
            a.max_pt.sup(&b.max_pt),
        )),
    }
}

/// `(min_pt, max_pt)` over `points`, `None` when empty.
pub fn compute_bounding_box<const D: usize>(
    points: &[SVector<f64, D>],
) -> Option<(SVector<f64, D>, SVector<f64, D>)> {
    let (first, rest) = points.split_first()?;
    Some(
        rest.iter()
            .fold((*first, *first), |(lo, hi), p| (lo.inf(p), hi.sup(p))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{vector, Vector2, Vector3};
    use proptest::prelude::*;

    #[test]
    fn construction_clamps_inverted_max() {
        let b = Box2D::new(vector![0.0, 0.0], vector![-1.0, 5.0]);
        assert_eq!(*b.min_pt(), vector![0.0, 0.0]);
        assert_eq!(*b.max_pt(), vector![0.0, 5.0]);
        assert_eq!(b.area(), 0.0);
    }

    #[test]
    fn area_centroid_dims() {
        let b = AxisAlignedBox::new(vector![1.0, 2.0, 3.0], vector![3.0, 3.0, 7.0]);
        assert_eq!(b.dims(), vector![2.0, 1.0, 4.0]);
        assert_eq!(b.centroid(), vector![2.0, 2.5, 5.0]);
        assert!((b.area() - 8.0).abs() < 1e-12);
    }

    #[test]
    fn intersection_overlap_and_disjoint() {
        let a = Box2D::new(vector![0.0, 0.0], vector![2.0, 2.0]);
        let b = Box2D::new(vector![1.0, 1.0], vector![3.0, 4.0]);
        let i = intersection(Some(&a), Some(&b)).unwrap();
        assert_eq!(*i.min_pt(), vector![1.0, 1.0]);
        assert_eq!(*i.max_pt(), vector![2.0, 2.0]);
        assert!((i.area() - 1.0).abs() < 1e-12);

        let c = Box2D::new(vector![5.0, 0.0], vector![6.0, 1.0]);
        let empty = intersection(Some(&a), Some(&c)).unwrap();
        assert!(empty.dims().iter().any(|&e| e <= 0.0));
        assert_eq!(empty.area(), 0.0);

        assert!(intersection(None, Some(&a)).is_none());
        assert!(intersection(Some(&a), None).is_none());
    }

    #[test]
    fn union_with_none_is_identity() {
        let a = Box2D::new(vector![-1.0, 0.5], vector![2.0, 2.0]);
        assert_eq!(union(Some(&a), None), Some(a));
        assert_eq!(union(None, Some(&a)), Some(a));
        assert_eq!(union::<2>(None, None), None);

        let b = Box2D::new(vector![0.0, -3.0], vector![1.0, 1.0]);
        let u = union(Some(&a), Some(&b)).unwrap();
        assert_eq!(*u.min_pt(), vector![-1.0, -3.0]);
        assert_eq!(*u.max_pt(), vector![2.0, 2.0]);
    }

    #[test]
    fn bounding_box_of_points() {
        let pts = vec![
            Vector3::new(1.0, -2.0, 0.0),
            Vector3::new(-1.0, 4.0, 0.5),
            Vector3::new(0.0, 0.0, -3.0),
        ];
        let (lo, hi) = compute_bounding_box(&pts).unwrap();
        assert_eq!(lo, vector![-1.0, -2.0, -3.0]);
        assert_eq!(hi, vector![1.0, 4.0, 0.5]);
        assert!(compute_bounding_box::<3>(&[]).is_none());

        let b = AxisAlignedBox::from_points(&pts).unwrap();
        assert_eq!(*b.max_pt(), hi);
    }

    #[test]
    fn display_names() {
        let b = Box2D::new(vector![0.0, 0.0], vector![1.0, 2.0]);
        assert_eq!(b.to_string(), "Box2D: ([0.0, 0.0], [1.0, 2.0])");
        let c = AxisAlignedBox::new(vector![0.0, 0.0, 0.0], vector![1.0, 1.0, 1.0]);
        assert!(c.to_string().starts_with("AxisAlignedBox: "));
    }

    proptest! {
        #[test]
        fn prop_max_never_below_min(
            lo in prop::array::uniform2(-10.0..10.0f64),
            hi in prop::array::uniform2(-10.0..10.0f64),
        ) {
            let b = Box2D::new(Vector2::from(lo), Vector2::from(hi));
            prop_assert!(b.dims().iter().all(|&e| e >= 0.0));
            prop_assert!(b.area() >= 0.0);
        }
    }
}
