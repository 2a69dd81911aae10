//! Triangle-soup solids lofted from curve cross-sections.
//!
//! This crate owns the [`Solid`] type the wall generator emits and the two
//! surface generators that produce it:
//!
//! - [`loft`]: sample a clockwise ring of edges into columns and close them
//!   into a solid, coping with ragged per-edge step counts
//! - [`skin`]: close a sequence of equal-length cross-section rings
//!
//! "Union" at this layer is concatenation ([`Solid::merge`],
//! [`Solid::union_all`]): the generated parts deliberately overlap by a
//! small epsilon, and resolving those overlaps is the downstream boolean
//! kernel's job.
//!
//! # Quick Start
//!
//! ```
//! use case_curves::QuadraticBezier;
//! use case_loft::loft;
//! use nalgebra::Point3;
//!
//! // Four vertical edges at the corners of a unit square, clockwise
//! // viewed from outside the start face.
//! let corners = [
//!     [0.0, 0.0],
//!     [0.0, 1.0],
//!     [1.0, 1.0],
//!     [1.0, 0.0],
//! ];
//! let edges: Vec<QuadraticBezier> = corners
//!     .iter()
//!     .map(|&[x, y]| {
//!         QuadraticBezier::segment(Point3::new(x, y, 1.0), Point3::new(x, y, 0.0))
//!     })
//!     .collect();
//!
//! let solid = loft(&edges, &[4, 4, 4, 4]).unwrap();
//! assert!((solid.signed_volume() - 1.0).abs() < 1e-10);
//! ```
//!
//! # Winding
//!
//! Faces are counter-clockwise viewed from outside. Both generators take
//! their ring order as clockwise when viewed from outside the *start*
//! (first) cross-section, with sections advancing away from that viewpoint.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::similar_names)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

mod error;
mod loft;
mod solid;

pub use error::{LoftError, LoftResult};
pub use loft::{loft, skin};
pub use solid::Solid;

// Re-export the math types used in public APIs.
pub use nalgebra::{Point3, Vector3};
