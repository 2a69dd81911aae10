//! Configuration for wall construction, bridge strategies, and assembly.
//!
//! Every tunable in this crate lives here, with its default value
//! documented on the field. The magnitudes are empirically chosen for
//! hand-sized keyboard cases measured in millimeters; none of them
//! change the meaning of an operation, only its shape.
//!
//! - [`WallConfig::default()`] - 2 mm / 5 mm flare, 1.5 mm clearance, one
//!   facet, four steps, no eyelet
//! - [`StraightConfig::default()`] - 11 mm bridge height, six steps
//! - [`ElbowConfig::default()`] / [`BowConfig::default()`] /
//!   [`SnakeConfig::default()`] - corner joins at the same height
//! - [`JoinConfig::default()`] - six steps, 2 mm wedge drop
//! - [`SkeletonConfig::default()`] / [`ClosedConfig::default()`] - per-site
//!   strategy configs, parallel evaluation on
//!
//! # Example
//!
//! ```
//! use case_walls::{SkeletonConfig, StepSpec, WallConfig};
//!
//! let wall = WallConfig::default()
//!     .with_steps(StepSpec::PerZ(2.0))
//!     .with_facets(2);
//! assert_eq!(wall.steps.resolve(8.0), 4);
//!
//! let assembly = SkeletonConfig::default().with_parallel(false);
//! assert!(!assembly.parallel);
//! ```

use case_curves::Point3;
use case_loft::Solid;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How many vertical steps to sample along a wall edge.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StepSpec {
    /// Fixed step count, independent of wall height.
    Flat(usize),
    /// One step per the given number of millimeters of wall height.
    PerZ(f64),
}

impl StepSpec {
    /// Resolves the step count for an edge starting `height` above the
    /// ground plane.
    ///
    /// `Flat(n)` resolves to `n` and `PerZ(d)` to `floor(height / d)`,
    /// both clamped to at least one step. Spacings at or below zero
    /// resolve to a single step.
    ///
    /// # Example
    ///
    /// ```
    /// use case_walls::StepSpec;
    ///
    /// assert_eq!(StepSpec::Flat(4).resolve(20.0), 4);
    /// assert_eq!(StepSpec::PerZ(4.0).resolve(8.0), 2);
    /// assert_eq!(StepSpec::PerZ(4.0).resolve(1.0), 1);
    /// ```
    #[must_use]
    pub fn resolve(&self, height: f64) -> usize {
        match *self {
            Self::Flat(n) => n.max(1),
            Self::PerZ(d) => {
                if d > f64::EPSILON {
                    ((height / d).floor() as usize).max(1)
                } else {
                    1
                }
            }
        }
    }
}

impl Default for StepSpec {
    fn default() -> Self {
        Self::Flat(4)
    }
}

/// Produces a screw-eyelet solid centred on the given anchor point.
///
/// Supplied by the fastener library in use; this crate only places the
/// anchor and merges whatever solid comes back.
pub type EyeletBuilder = fn(Point3<f64>) -> Solid;

/// Request to attach a screw eyelet at a wall's foot.
#[derive(Debug, Clone, Copy)]
pub struct EyeletSpec {
    /// Distance to pull the anchor inward from the inner foot midpoint.
    pub inset: f64,
    /// Builds the eyelet solid around the anchor.
    pub make: EyeletBuilder,
}

impl EyeletSpec {
    /// Creates an eyelet request.
    #[must_use]
    pub const fn new(inset: f64, make: EyeletBuilder) -> Self {
        Self { inset, make }
    }
}

/// Configuration for dropping a single wall from a key aperture.
#[derive(Debug, Clone, Copy)]
pub struct WallConfig {
    /// Outward flare of the Bezier control point, in mm. Default `2.0`.
    pub d1: f64,
    /// Outward flare of the ground target, in mm. Default `5.0`.
    pub d2: f64,
    /// Inward pull of the start corners off the aperture, in mm.
    /// Default `1.5`.
    pub clearance: f64,
    /// Lateral x offset applied to the foot, in mm. Default `0.0`.
    pub x_off: f64,
    /// Lateral y offset applied to the foot, in mm. Default `0.0`.
    pub y_off: f64,
    /// Vertical offset applied to the Bezier control point, in mm.
    /// Default `0.0`.
    pub z_off: f64,
    /// Cross-section subdivision count between each corner pair.
    /// Default `1` (corners only).
    pub facets: usize,
    /// Vertical sampling along each edge. Default [`StepSpec::Flat`]`(4)`.
    pub steps: StepSpec,
    /// Optional screw eyelet attached at the foot. Default `None`.
    pub eyelet: Option<EyeletSpec>,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            d1: 2.0,
            d2: 5.0,
            clearance: 1.5,
            x_off: 0.0,
            y_off: 0.0,
            z_off: 0.0,
            facets: 1,
            steps: StepSpec::default(),
            eyelet: None,
        }
    }
}

impl WallConfig {
    /// Set both outward flare distances.
    ///
    /// # Example
    ///
    /// ```
    /// use case_walls::WallConfig;
    ///
    /// let config = WallConfig::default().with_flare(3.0, 8.0);
    /// assert_eq!(config.d2, 8.0);
    /// ```
    #[must_use]
    pub const fn with_flare(mut self, d1: f64, d2: f64) -> Self {
        self.d1 = d1;
        self.d2 = d2;
        self
    }

    /// Set the inward clearance of the start corners.
    #[must_use]
    pub const fn with_clearance(mut self, clearance: f64) -> Self {
        self.clearance = clearance;
        self
    }

    /// Set the lateral foot offsets.
    #[must_use]
    pub const fn with_offsets(mut self, x_off: f64, y_off: f64) -> Self {
        self.x_off = x_off;
        self.y_off = y_off;
        self
    }

    /// Set the vertical control-point offset.
    #[must_use]
    pub const fn with_z_off(mut self, z_off: f64) -> Self {
        self.z_off = z_off;
        self
    }

    /// Set the cross-section subdivision count.
    #[must_use]
    pub const fn with_facets(mut self, facets: usize) -> Self {
        self.facets = facets;
        self
    }

    /// Set the vertical sampling spec.
    #[must_use]
    pub const fn with_steps(mut self, steps: StepSpec) -> Self {
        self.steps = steps;
        self
    }

    /// Attach a screw eyelet at the wall's foot.
    #[must_use]
    pub const fn with_eyelet(mut self, eyelet: EyeletSpec) -> Self {
        self.eyelet = Some(eyelet);
        self
    }
}

/// Configuration for [`straight`](crate::connect::straight) links.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StraightConfig {
    /// Height on each wall's side face the bridge attaches at, in mm.
    /// Default `11.0`.
    pub height: f64,
    /// Steps along the bridge span. Default `6`.
    pub steps: usize,
    /// Divisor taming the inner-face flare at steep approaches.
    /// Default `6.0`.
    pub fudge: f64,
    /// Minor-axis foot gap below which no inner-face flare is applied,
    /// in mm. Default `4.5`.
    pub min_gap: f64,
    /// Distance the attachment points sink into each wall, in mm.
    /// Default `0.01`.
    pub overlap: f64,
}

impl Default for StraightConfig {
    fn default() -> Self {
        Self { height: 11.0, steps: 6, fudge: 6.0, min_gap: 4.5, overlap: 0.01 }
    }
}

impl StraightConfig {
    /// Set the attachment height.
    #[must_use]
    pub const fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Set the step count along the span.
    #[must_use]
    pub const fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Set the inner-face flare divisor.
    #[must_use]
    pub const fn with_fudge(mut self, fudge: f64) -> Self {
        self.fudge = fudge;
        self
    }

    /// Set the flare-free minor-axis gap.
    #[must_use]
    pub const fn with_min_gap(mut self, min_gap: f64) -> Self {
        self.min_gap = min_gap;
        self
    }
}

/// Configuration for single-bend corner joins
/// ([`bezier_elbow`](crate::connect::bezier_elbow) and
/// [`inward_elbow`](crate::connect::inward_elbow)).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ElbowConfig {
    /// Height on each wall's side face the bridge attaches at, in mm.
    /// Default `11.0`.
    pub height: f64,
    /// Steps along the bend. Default `6`.
    pub steps: usize,
    /// Distance the attachment points sink into each wall, in mm.
    /// Default `0.01`.
    pub overlap: f64,
}

impl Default for ElbowConfig {
    fn default() -> Self {
        Self { height: 11.0, steps: 6, overlap: 0.01 }
    }
}

impl ElbowConfig {
    /// Set the attachment height.
    #[must_use]
    pub const fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Set the step count along the bend.
    #[must_use]
    pub const fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }
}

/// Configuration for [`cubic_bow`](crate::connect::cubic_bow) corner links.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BowConfig {
    /// Height on each wall's side face the bridge attaches at, in mm.
    /// Default `11.0`.
    pub height: f64,
    /// Steps along the bow. Default `6`.
    pub steps: usize,
    /// Outward push of the outer control-point pair, in mm. Default `2.0`.
    pub bow: f64,
    /// Distance the attachment points sink into each wall, in mm.
    /// Default `0.01`.
    pub overlap: f64,
}

impl Default for BowConfig {
    fn default() -> Self {
        Self { height: 11.0, steps: 6, bow: 2.0, overlap: 0.01 }
    }
}

impl BowConfig {
    /// Set the attachment height.
    #[must_use]
    pub const fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Set the outward bow magnitude.
    #[must_use]
    pub const fn with_bow(mut self, bow: f64) -> Self {
        self.bow = bow;
        self
    }

    /// Set the step count along the bow.
    #[must_use]
    pub const fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }
}

/// Configuration for [`snake_bow`](crate::connect::snake_bow) S-links.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SnakeConfig {
    /// Height on each wall's side face the bridge attaches at, in mm.
    /// Default `11.0`.
    pub height: f64,
    /// Steps along the S. Default `12`.
    pub steps: usize,
    /// Push of each control-point pair along its wall's outward, in mm.
    /// Default `3.0`.
    pub bow: f64,
    /// Distance the attachment points sink into each wall, in mm.
    /// Default `0.01`.
    pub overlap: f64,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self { height: 11.0, steps: 12, bow: 3.0, overlap: 0.01 }
    }
}

impl SnakeConfig {
    /// Set the attachment height.
    #[must_use]
    pub const fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Set the control-point push magnitude.
    #[must_use]
    pub const fn with_bow(mut self, bow: f64) -> Self {
        self.bow = bow;
        self
    }

    /// Set the step count along the S.
    #[must_use]
    pub const fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }
}

/// Configuration for [`join_edges`](crate::connect::join_edges) full-face
/// joins.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JoinConfig {
    /// Steps per boundary curve. Default `6`.
    pub steps: usize,
    /// Distance the boundary loops sink into each wall, in mm.
    /// Default `0.01`.
    pub overlap: f64,
    /// How far below the key-face start the wedge filler's third point
    /// sits on the outer edge, in mm. Default `2.0`.
    pub drop: f64,
}

impl Default for JoinConfig {
    fn default() -> Self {
        Self { steps: 6, overlap: 0.01, drop: 2.0 }
    }
}

impl JoinConfig {
    /// Set the steps per boundary curve.
    #[must_use]
    pub const fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Set the wedge filler drop.
    #[must_use]
    pub const fn with_drop(mut self, drop: f64) -> Self {
        self.drop = drop;
        self
    }
}

/// Per-site strategy configuration for the open skeletal perimeter.
///
/// Fields are named for the clockwise walk the assembly takes: up the west
/// side, across the north row, down the east side, back along the south
/// row, then out and around the thumb cluster.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SkeletonConfig {
    /// Straight links chaining walls along the west and east side rows.
    pub side_links: StraightConfig,
    /// Elbow turning the northwest corner.
    pub west_corner: ElbowConfig,
    /// Straight links across the north row of column walls.
    pub north_links: StraightConfig,
    /// Bow turning the northeast corner.
    pub east_corner: BowConfig,
    /// Elbow turning the southeast corner.
    pub south_corner: ElbowConfig,
    /// Straight links along the south row.
    pub south_links: StraightConfig,
    /// Inward elbow used at the far-column boundary on the south row.
    pub far_elbow: ElbowConfig,
    /// Column index whose westward south-row join uses the inward elbow.
    /// Default `4`.
    pub far_col: usize,
    /// Snake links bridging the body and the thumb cluster, both ways.
    pub thumb_links: SnakeConfig,
    /// Elbows turning the thumb cluster's own corners.
    pub thumb_corners: ElbowConfig,
    /// Evaluate bridges in parallel. Default `true`.
    pub parallel: bool,
}

impl Default for SkeletonConfig {
    fn default() -> Self {
        Self {
            side_links: StraightConfig::default(),
            west_corner: ElbowConfig::default(),
            north_links: StraightConfig::default(),
            east_corner: BowConfig::default(),
            south_corner: ElbowConfig::default(),
            south_links: StraightConfig::default(),
            far_elbow: ElbowConfig::default(),
            far_col: 4,
            thumb_links: SnakeConfig::default(),
            thumb_corners: ElbowConfig::default(),
            parallel: true,
        }
    }
}

impl SkeletonConfig {
    /// Set the far-column boundary index.
    #[must_use]
    pub const fn with_far_col(mut self, far_col: usize) -> Self {
        self.far_col = far_col;
        self
    }

    /// Enable or disable parallel bridge evaluation.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Strategy configuration for the closed perimeter.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClosedConfig {
    /// Full-face joins between column walls and around corners.
    pub joins: JoinConfig,
    /// Straight links along the side-wall rows, where faces already align.
    pub side_links: StraightConfig,
    /// Evaluate bridges in parallel. Default `true`.
    pub parallel: bool,
}

impl Default for ClosedConfig {
    fn default() -> Self {
        Self {
            joins: JoinConfig::default(),
            side_links: StraightConfig::default(),
            parallel: true,
        }
    }
}

impl ClosedConfig {
    /// Enable or disable parallel bridge evaluation.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
