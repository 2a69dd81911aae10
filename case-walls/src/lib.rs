//! Wall and bridge solids for keyboard case perimeters.
//!
//! Each key aperture on the edge of a switch plate gets a [`Wall`]: a solid
//! lofted from four quadratic Bézier edges that drop from the aperture's
//! corners to feet on the ground plane. Bridges close the gaps between
//! neighbouring walls, and the perimeter assemblers walk the whole board
//! and union everything into one (self-intersecting) triangle soup for a
//! downstream boolean kernel.
//!
//! # Capabilities
//!
//! - **Walls**: flared corner curves, configurable offsets, facet
//!   subdivision, per-edge step counts, optional screw eyelets
//! - **Bridges**: straight links, Bézier elbows, bowed cubics, S-curve
//!   snakes, inward elbows, and loft-free edge joins
//! - **Perimeters**: [`skeleton`] (bridged but open) and [`closed`]
//!   (boundary loops joined into a continuous ring)
//!
//! # Quick Start
//!
//! ```
//! use case_walls::{straight, Aperture, Points, StraightConfig, Wall, WallConfig};
//! use nalgebra::{Point3, Vector3};
//!
//! // Two key apertures on the north edge of a plate, both facing +Y.
//! let aperture = |x0: f64| Aperture {
//!     points: Points::new(
//!         Point3::new(x0, 20.0, 10.0),
//!         Point3::new(x0 + 4.0, 20.0, 10.0),
//!         Point3::new(x0, 20.0, 8.5),
//!         Point3::new(x0 + 4.0, 20.0, 8.5),
//!     ),
//!     outward: Vector3::y(),
//! };
//!
//! let config = WallConfig::default();
//! let left = Wall::build(&aperture(0.0), &config).unwrap();
//! let right = Wall::build(&aperture(8.0), &config).unwrap();
//!
//! // Span the gap between them.
//! let bridge = straight(&left, &right, &StraightConfig::default()).unwrap();
//! assert!(!bridge.faces.is_empty());
//! ```
//!
//! # Coordinate System
//!
//! Right-handed, Z-up: X is width, Y is depth, Z is height. The ground
//! plane is z = 0, and every wall lands feet there. A wall's *lateral
//! right* is `outward × +Z`.
//!
//! # Feature Flags
//!
//! - `serde`: derive `Serialize`/`Deserialize` for walls, grids, and
//!   strategy configs

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::similar_names)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![cfg_attr(test, allow(clippy::float_cmp))]

mod config;
mod connect;
mod corner;
mod error;
mod perimeter;
mod points;
mod wall;

pub use config::{
    BowConfig, ClosedConfig, ElbowConfig, EyeletBuilder, EyeletSpec, JoinConfig, SkeletonConfig,
    SnakeConfig, StepSpec, StraightConfig, WallConfig,
};
pub use connect::{
    bezier_elbow, boundary_loop, cubic_bow, inward_elbow, join_edges, snake_bow, straight,
    AttachSide, Bridge, JoinKind,
};
pub use corner::{Corner, Side};
pub use error::{WallError, WallResult};
pub use perimeter::{closed, skeleton, CaseWalls, ColumnWalls, WallGrid};
pub use points::{Edges, Points};
pub use wall::{Aperture, Eyelet, Wall};

// Re-export the geometry types used in public APIs.
pub use case_curves::{Curve, QuadraticBezier};
pub use case_loft::{LoftError, Solid};
pub use nalgebra::{Point3, Vector3};
