//! Euler angles ↔ rotation matrix (Graphics Gems IV closed forms).
//!
//! The conversion pair is parameterized by `EulerCfg`. Only the default
//! configuration (static frame, X-Y-Z, even parity, no repeated axis) is
//! validated against external references; other combinations are exposed
//! and mutually consistent but should be treated as experimental.

use nalgebra::{Matrix3, Vector3};

use crate::cfg::GIMBAL_EPS;

/// Axis order as a permutation of `(0, 1, 2)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisOrder {
    #[default]
    Xyz,
    Xzy,
    Yxz,
    Yzx,
    Zxy,
    Zyx,
}

impl AxisOrder {
    /// Axis indices `(i, j, k)`.
    #[inline]
    pub fn indices(self) -> [usize; 3] {
        match self {
            AxisOrder::Xyz => [0, 1, 2],
            AxisOrder::Xzy => [0, 2, 1],
            AxisOrder::Yxz => [1, 0, 2],
            AxisOrder::Yzx => [1, 2, 0],
            AxisOrder::Zxy => [2, 0, 1],
            AxisOrder::Zyx => [2, 1, 0],
        }
    }
}

/// Euler-angle convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EulerCfg {
    pub axis_order: AxisOrder,
    /// First and last rotation axes coincide (e.g. Z-X-Z).
    pub repeated_axis: bool,
    /// Even parity keeps angle signs; odd parity negates them.
    pub parity_even: bool,
    /// Static (extrinsic) frame; `false` reverses the angle order.
    pub static_frame: bool,
}

impl Default for EulerCfg {
    fn default() -> Self {
        Self {
            axis_order: AxisOrder::Xyz,
            repeated_axis: false,
            parity_even: true,
            static_frame: true,
        }
    }
}

/// Rotation matrix from Euler angles.
pub fn euler_angles_to_matrix(angles: &Vector3<f64>, cfg: EulerCfg) -> Matrix3<f64> {
    let mut a = *angles;
    if !cfg.static_frame {
        a = Vector3::new(a[2], a[1], a[0]);
    }
    if !cfg.parity_even {
        a = -a;
    }
    let (si, ci) = a[0].sin_cos();
    let (sj, cj) = a[1].sin_cos();
    let (sh, ch) = a[2].sin_cos();
    let (cc, cs) = (ci * ch, ci * sh);
    let (sc, ss) = (si * ch, si * sh);

    let [i, j, k] = cfg.axis_order.indices();
    let mut m = Matrix3::zeros();
    if cfg.repeated_axis {
        m[(i, i)] = cj;
        m[(i, j)] = sj * si;
        m[(i, k)] = sj * ci;
        m[(j, i)] = sj * sh;
        m[(j, j)] = -cj * ss + cc;
        m[(j, k)] = -cj * cs - sc;
        m[(k, i)] = -sj * ch;
        m[(k, j)] = cj * sc + cs;
        m[(k, k)] = cj * cc - ss;
    } else {
        m[(i, i)] = cj * ch;
        m[(i, j)] = sj * sc - cs;
        m[(i, k)] = sj * cc + ss;
        m[(j, i)] = cj * sh;
        m[(j, j)] = sj * ss + cc;
        m[(j, k)] = sj * cs - sc;
        m[(k, i)] = -sj;
        m[(k, j)] = cj * si;
        m[(k, k)] = cj * ci;
    }
    m
}

/// Euler angles from a rotation matrix.
///
/// Near gimbal lock (`cy` or `sy` ≤ 1e-6) one degree of freedom is lost; the
/// third angle is fixed at zero and the first absorbs the remaining rotation.
pub fn matrix_to_euler_angles(m: &Matrix3<f64>, cfg: EulerCfg) -> Vector3<f64> {
    let [i, j, k] = cfg.axis_order.indices();
    let mut e = if cfg.repeated_axis {
        let sy = m[(i, j)].hypot(m[(i, k)]);
        if sy > GIMBAL_EPS {
            Vector3::new(
                m[(i, j)].atan2(m[(i, k)]),
                sy.atan2(m[(i, i)]),
                m[(j, i)].atan2(-m[(k, i)]),
            )
        } else {
            Vector3::new((-m[(j, k)]).atan2(m[(j, j)]), sy.atan2(m[(i, i)]), 0.0)
        }
    } else {
        let cy = m[(i, i)].hypot(m[(j, i)]);
        if cy > GIMBAL_EPS {
            Vector3::new(
                m[(k, j)].atan2(m[(k, k)]),
                (-m[(k, i)]).atan2(cy),
                m[(j, i)].atan2(m[(i, i)]),
            )
        } else {
            Vector3::new((-m[(j, k)]).atan2(m[(j, j)]), (-m[(k, i)]).atan2(cy), 0.0)
        }
    };
    if !cfg.parity_even {
        e = -e;
    }
    if !cfg.static_frame {
        e = Vector3::new(e[2], e[1], e[0]);
    }
    e
}
