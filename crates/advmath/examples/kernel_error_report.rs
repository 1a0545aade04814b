//! Accuracy report for the approximate kernels.
//!
//! Prints the worst relative error of each kernel over a log-spaced sweep,
//! so the bound quoted in `fastmath` can be rechecked after constant changes.
//!
//! Run: cargo run -p advmath --example kernel_error_report

use advmath::api::kernel_error_table;
use advmath::cfg::APPROX_REL_TOL;

fn main() {
    let rows = kernel_error_table(1e-6, 1e6, 20_001);
    let worst = |f: fn(&advmath::api::KernelErrorRow) -> f64| {
        rows.iter()
            .map(|r| (f(r), r.x))
            .fold((0.0f64, 0.0f32), |a, b| if b.0 > a.0 { b } else { a })
    };
    let (inv, inv_x) = worst(|r| r.inverse);
    let (sq, sq_x) = worst(|r| r.sqrt);
    let (rs, rs_x) = worst(|r| r.inverse_sqrt);
    println!("samples={} tol={APPROX_REL_TOL}", rows.len());
    println!("approx_inverse       max_rel_err={inv:.6} at x={inv_x:e}");
    println!("approx_sqrt          max_rel_err={sq:.6} at x={sq_x:e}");
    println!("approx_inverse_sqrt  max_rel_err={rs:.6} at x={rs_x:e}");
}
