//! Parametric curves for case wall geometry.
//!
//! This crate provides the curve primitives that wall and bridge solids are
//! lofted from: quadratic and cubic Bézier curves, uniform discretization,
//! and a bisection search for the point on a curve at a given height.
//!
//! # Capabilities
//!
//! - **Bézier curves**: quadratic and cubic, evaluated via the Bernstein
//!   form with the parameter clamped to `[0, 1]`
//! - **Discretization**: forward and seeded-reverse sampling, so two curves
//!   can be concatenated into one continuous boundary loop
//! - **Curve interpolation**: control-point-wise blending between two curves
//!   of the same degree, used to subdivide wall faces
//! - **Height search**: bounded bisection for the point at a target z
//!
//! # Quick Start
//!
//! ```
//! use case_curves::{Curve, QuadraticBezier};
//! use nalgebra::Point3;
//!
//! // An edge dropping from a key corner to the ground plane.
//! let edge = QuadraticBezier::new(
//!     Point3::new(0.0, 0.0, 10.0),
//!     Point3::new(0.0, 2.0, 10.0),
//!     Point3::new(0.0, 5.0, 0.0),
//! );
//!
//! assert_eq!(edge.point_at(0.0), edge.p0);
//! assert_eq!(edge.point_at(1.0), edge.p2);
//! ```
//!
//! # Coordinate System
//!
//! Right-handed, Z-up: X is width, Y is depth, Z is height. The ground
//! plane is z = 0. Units are millimeters by convention; nothing in this
//! crate enforces a unit.
//!
//! # Feature Flags
//!
//! - `serde`: derive `Serialize`/`Deserialize` for curve types

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::many_single_char_names,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::suboptimal_flops,
    clippy::missing_const_for_fn,
    clippy::doc_markdown,
    clippy::module_name_repetitions
)]

mod bezier;
mod sample;
mod search;
mod traits;

pub use bezier::{CubicBezier, QuadraticBezier};
pub use sample::{discretize, discretize_rev};
pub use search::{point_at_height, HeightSearch};
pub use traits::Curve;

// Re-export the math types used in public APIs.
pub use nalgebra::{Point3, Vector3};
