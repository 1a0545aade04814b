//! Numeric constants for the approximate kernels (internal).
//!
//! Policy
//! - The magic constants are fixed; changing them changes every approximate
//!   result and the error figures quoted in `fastmath`.
//! - Tolerances are plain constants rather than a config struct; callers that
//!   need a different bound compare against their own value.

/// Initial-guess constant for the reciprocal: `bits(1/x) ≈ RECIP_MAGIC - bits(x)`.
pub const RECIP_MAGIC: u32 = 0x7EF4_FDF3;
/// Initial-guess constant for the square root: `bits(√x) ≈ SQRT_MAGIC + bits(x)/2`.
pub const SQRT_MAGIC: u32 = 0x1FBD_3F7D;
/// Documented relative error bound of every approximate kernel on positive,
/// finite inputs in `[1e-6, 1e6]`.
pub const APPROX_REL_TOL: f32 = 1e-2;
