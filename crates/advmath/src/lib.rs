//! Linked `f32` containers, fast approximate kernels, and 3D geometry.
//!
//! Layout
//! - `seq`: insertion-order singly linked list (`Sequence`).
//! - `sorted`: ascending doubly linked list (`SortedSequence`).
//! - `fastmath`: bit-level approximate reciprocal / sqrt / inverse sqrt.
//! - `geom3`: `Vec3`/`Point` operations, with `quick_*` variants on `fastmath`.
//!
//! API Policy
//! - `api` is the curated surface for callers; module paths may move.

pub mod api;
pub mod cfg;
pub mod fastmath;
pub mod geom3;
pub mod seq;
pub mod sorted;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom3::{Point, Vec3};
pub use seq::Sequence;
pub use sorted::SortedSequence;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::fastmath::{approx_inverse, approx_inverse_sqrt, approx_sqrt};
    pub use crate::geom3::{point, vec3, Point, Vec3};
    pub use crate::seq::Sequence;
    pub use crate::sorted::SortedSequence;
}
