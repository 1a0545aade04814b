//! Curated API surface (UNSTABLE).
//!
//! Important
//! - Convenience re-exports for callers such as the CLI and benches.
//!   Breaking changes are allowed; prefer these paths over deep module paths.

// Containers
pub use crate::seq::Sequence;
pub use crate::sorted::SortedSequence;
// Approximate kernels
pub use crate::fastmath::{
    approx_inverse, approx_inverse_sqrt, approx_sqrt, relative_error, try_approx_inverse,
    try_approx_inverse_sqrt, try_approx_sqrt, KernelError,
};
// 3D geometry
pub use crate::geom3::{
    angle_between, angle_x, angle_y, angle_z, cross, divide, dot, magnitude, multiply, negate,
    normalize, point, quick_divide, quick_magnitude, quick_normalize, subtract, subtract_into,
    vec3, Point, Vec3,
};

/// One row of a kernel accuracy table: input plus relative error per kernel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KernelErrorRow {
    pub x: f32,
    pub inverse: f64,
    pub sqrt: f64,
    pub inverse_sqrt: f64,
}

/// Pre: `min > 0`, `max >= min`, `steps >= 1`.
/// Post: `steps` rows at log-spaced inputs from `min` to `max` (inclusive).
/// Returns an empty table when the precondition does not hold.
pub fn kernel_error_table(min: f32, max: f32, steps: usize) -> Vec<KernelErrorRow> {
    if !(min > 0.0 && max >= min && min.is_finite() && max.is_finite()) || steps == 0 {
        return Vec::new();
    }
    let (lo, hi) = ((min as f64).ln(), (max as f64).ln());
    let denom = (steps.max(2) - 1) as f64;
    (0..steps)
        .map(|k| {
            let x = (lo + (hi - lo) * k as f64 / denom).exp() as f32;
            let exact_sqrt = (x as f64).sqrt();
            KernelErrorRow {
                x,
                inverse: relative_error(approx_inverse(x), 1.0 / x as f64),
                sqrt: relative_error(approx_sqrt(x), exact_sqrt),
                inverse_sqrt: relative_error(approx_inverse_sqrt(x), 1.0 / exact_sqrt),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfg::APPROX_REL_TOL;

    #[test]
    fn table_spans_range() {
        let rows = kernel_error_table(1e-3, 1e3, 7);
        assert_eq!(rows.len(), 7);
        assert!((rows[0].x - 1e-3).abs() < 1e-7);
        assert!((rows[6].x - 1e3).abs() < 1e-1);
        assert!(rows.windows(2).all(|w| w[0].x < w[1].x));
        let tol = APPROX_REL_TOL as f64;
        assert!(rows
            .iter()
            .all(|r| r.inverse < tol && r.sqrt < tol && r.inverse_sqrt < tol));
    }

    #[test]
    fn table_rejects_bad_range() {
        assert!(kernel_error_table(0.0, 1.0, 4).is_empty());
        assert!(kernel_error_table(2.0, 1.0, 4).is_empty());
        assert!(kernel_error_table(1.0, 2.0, 0).is_empty());
        assert_eq!(kernel_error_table(4.0, 4.0, 1).len(), 1);
    }
}
