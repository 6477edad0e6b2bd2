//! Tolerance defaults (internal).
//!
//! Policy
//! - Fixed constants, not tunables. Callers that need a different threshold
//!   for RANSAC or Euler conversion use `RansacCfg` / `EulerCfg` instead.

/// Smallest homogeneous scale coordinate accepted by `nonhomogeneous`.
pub(crate) const HOMOGENEOUS_EPS: f64 = 1e-6;
/// Gimbal-lock threshold for the matrix → Euler branch switch.
pub(crate) const GIMBAL_EPS: f64 = 1e-6;
