//! Approximate reciprocal / square root / inverse square root.
//!
//! Each kernel reads the IEEE-754 bit pattern of an `f32` as a `u32`,
//! derives an initial guess with a magic constant (see `cfg`), and applies a
//! single Newton–Raphson step. Bit reinterpretation goes through
//! `f32::to_bits`/`f32::from_bits`; integer arithmetic wraps so no input
//! can panic.
//!
//! Accuracy
//! - Valid for positive, finite inputs. Over `[1e-6, 1e6]` the measured
//!   worst-case relative error is below 0.5% for every kernel; the documented
//!   bound is `cfg::APPROX_REL_TOL` (1%).
//! - Zero, negative, NaN or infinite inputs give an unspecified number.
//!   Use the `try_*` variants when the input is not known to be in range.

use std::fmt;

use crate::cfg::{RECIP_MAGIC, SQRT_MAGIC};

/// Approximate `1 / x`.
///
/// Guess `p0 = from_bits(RECIP_MAGIC - bits(x))`, then one Newton step for
/// `f(p) = 1/p - x`: `p1 = -p0·p0·x + 2·p0`.
#[inline]
pub fn approx_inverse(x: f32) -> f32 {
    let i = RECIP_MAGIC.wrapping_sub(x.to_bits());
    let p0 = f32::from_bits(i);
    -p0 * p0 * x + 2.0 * p0
}

/// Approximate `√x`.
///
/// Guess `p0 = from_bits(SQRT_MAGIC + bits(x) / 2)`, then one Heron step
/// `p1 = (p0 + x / p0) / 2` with the division done by [`approx_inverse`].
#[inline]
pub fn approx_sqrt(x: f32) -> f32 {
    let i = SQRT_MAGIC.wrapping_add(x.to_bits() >> 1);
    let p0 = f32::from_bits(i);
    0.5 * (p0 + x * approx_inverse(p0))
}

/// Approximate `1 / √x`, composed as `approx_inverse(approx_sqrt(x))`.
#[inline]
pub fn approx_inverse_sqrt(x: f32) -> f32 {
    approx_inverse(approx_sqrt(x))
}

/// Input rejected by a checked kernel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KernelError {
    /// The kernel is only defined for positive, finite input.
    OutOfDomain { op: &'static str, x: f32 },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::OutOfDomain { op, x } => {
                write!(f, "{op} needs a positive finite input, got {x}")
            }
        }
    }
}

impl std::error::Error for KernelError {}

#[inline]
fn check_domain(op: &'static str, x: f32) -> Result<f32, KernelError> {
    if x.is_finite() && x > 0.0 {
        Ok(x)
    } else {
        Err(KernelError::OutOfDomain { op, x })
    }
}

/// [`approx_inverse`] with the input domain checked.
pub fn try_approx_inverse(x: f32) -> Result<f32, KernelError> {
    check_domain("approx_inverse", x).map(approx_inverse)
}

/// [`approx_sqrt`] with the input domain checked.
pub fn try_approx_sqrt(x: f32) -> Result<f32, KernelError> {
    check_domain("approx_sqrt", x).map(approx_sqrt)
}

/// [`approx_inverse_sqrt`] with the input domain checked.
pub fn try_approx_inverse_sqrt(x: f32) -> Result<f32, KernelError> {
    check_domain("approx_inverse_sqrt", x).map(approx_inverse_sqrt)
}

/// `|approx - exact| / |exact|`, computed in `f64`.
#[inline]
pub fn relative_error(approx: f32, exact: f64) -> f64 {
    ((approx as f64 - exact) / exact).abs()
}
