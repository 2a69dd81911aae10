//! Wall construction: dropping a solid from a key aperture to the ground
//! plane.
//!
//! A wall's cross-section starts as the key face itself (a vertical
//! rectangle, plate thickness tall) and twists as it descends until it
//! lies flat on the ground, flared outward by the configured distances.
//! The four corner edges are quadratic Beziers; the outer pair lands one
//! plate thickness further out than the inner pair so the foot keeps the
//! plate's thickness instead of collapsing to a blade.

use case_curves::{Curve, Point3, QuadraticBezier, Vector3};
use case_loft::{loft, Solid};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{EyeletSpec, WallConfig};
use crate::corner::Side;
use crate::error::WallResult;
use crate::points::{Edges, Points};

/// One key face's four corners and its outward direction.
///
/// Produced by the upstream layout stage, one per key face that needs a
/// wall. Lateral `left`/`right` labels on [`Points`] follow `outward`:
/// right is `outward × +Z`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aperture {
    /// Corner points of the key face.
    pub points: Points,
    /// Unit direction facing out of the case at this key.
    pub outward: Vector3<f64>,
}

impl Aperture {
    /// Creates an aperture from its face corners and outward direction.
    #[must_use]
    pub const fn new(points: Points, outward: Vector3<f64>) -> Self {
        Self { points, outward }
    }
}

/// A screw eyelet merged into a wall, recorded so later stages can find
/// the screw centre.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Eyelet {
    /// Anchor point the eyelet was built around.
    pub centre: Point3<f64>,
    /// The attached solid, as produced by the builder.
    pub solid: Solid,
}

/// A solid wall hanging from one key aperture down to the ground plane.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Wall {
    /// The wall solid, eyelet included when one was requested.
    pub solid: Solid,
    /// Start corners at the aperture, after the clearance pull.
    pub start: Points,
    /// Foot corners on the ground plane (the corner edges at `t = 1`).
    pub foot: Points,
    /// The four corner edges, kept for bridge attachment.
    pub edges: Edges,
    /// The attached eyelet, if one was requested.
    pub eyelet: Option<Eyelet>,
}

impl Wall {
    /// Builds a wall under `aperture`.
    ///
    /// The cross-section ring is lofted from `2 × (facets + 1)` edges,
    /// each sampled with a step count resolved from its own start height,
    /// so tilted plates produce ragged rings. Corner and foot positions
    /// are recorded for bridge attachment.
    ///
    /// # Errors
    ///
    /// Returns an error if lofting the cross-section ring fails.
    pub fn build(aperture: &Aperture, config: &WallConfig) -> WallResult<Self> {
        let (start, edges) = corner_edges(aperture, config);

        let facets = config.facets.max(1);
        let mut ring: Vec<QuadraticBezier> = Vec::with_capacity(2 * (facets + 1));
        for k in 0..=facets {
            let t = k as f64 / facets as f64;
            ring.push(QuadraticBezier::lerp_between(&edges.top_left, &edges.top_right, t));
        }
        for k in 0..=facets {
            let t = k as f64 / facets as f64;
            ring.push(QuadraticBezier::lerp_between(&edges.bot_right, &edges.bot_left, t));
        }

        let steps: Vec<usize> = ring.iter().map(|edge| config.steps.resolve(edge.p0.z)).collect();
        let mut solid = loft(&ring, &steps)?;

        let foot = Points {
            top_left: edges.top_left.end(),
            top_right: edges.top_right.end(),
            bot_left: edges.bot_left.end(),
            bot_right: edges.bot_right.end(),
        };

        let eyelet = config
            .eyelet
            .as_ref()
            .map(|spec| attach_eyelet(&mut solid, &foot, &horizontal(&aperture.outward), spec));

        debug!(faces = solid.face_count(), eyelet = eyelet.is_some(), "built wall");

        Ok(Self { solid, start, foot, edges, eyelet })
    }

    /// Builds a wall at the end of a column, keeping its foot out of the
    /// neighboring column's footprint.
    ///
    /// Per-column tilt can flare an end wall's foot sideways into the
    /// next column. `side` names where the neighbor lies; when the foot
    /// would reach past the neighbor's near face, the lateral offset is
    /// corrected by the overhang so the layout's column spacing survives.
    /// With no neighbor, or a North/South neighbor (which cannot be
    /// overhung laterally), this is identical to [`Wall::build`].
    ///
    /// # Errors
    ///
    /// Returns an error if lofting the cross-section ring fails.
    pub fn column_end(
        aperture: &Aperture,
        neighbor: Option<&Aperture>,
        side: Side,
        config: &WallConfig,
    ) -> WallResult<Self> {
        let Some(neighbor) = neighbor else {
            return Self::build(aperture, config);
        };

        let (_, edges) = corner_edges(aperture, config);
        let feet = [
            edges.top_left.end(),
            edges.top_right.end(),
            edges.bot_left.end(),
            edges.bot_right.end(),
        ];

        let mut adjusted = *config;
        match side {
            Side::East => {
                let reach = feet.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
                let limit =
                    neighbor.points.to_array().iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
                let overhang = reach - limit;
                if overhang > 0.0 {
                    adjusted.x_off -= overhang;
                }
            }
            Side::West => {
                let reach = feet.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
                let limit = neighbor
                    .points
                    .to_array()
                    .iter()
                    .map(|p| p.x)
                    .fold(f64::NEG_INFINITY, f64::max);
                let overhang = limit - reach;
                if overhang > 0.0 {
                    adjusted.x_off += overhang;
                }
            }
            Side::North | Side::South => {}
        }

        Self::build(aperture, &adjusted)
    }

    /// Unit horizontal direction pointing out of the case at this wall,
    /// recovered from the foot corners (inner pair toward outer pair).
    #[must_use]
    pub fn foot_outward(&self) -> Vector3<f64> {
        let across = (self.foot.top_left.coords + self.foot.top_right.coords)
            - (self.foot.bot_left.coords + self.foot.bot_right.coords);
        horizontal(&across)
    }

    /// The recorded corner edge whose foot lies closest to `point`.
    #[must_use]
    pub fn edge_near(&self, point: &Point3<f64>) -> &QuadraticBezier {
        self.edges.get(self.edges.nearest(point))
    }
}

/// Projects `direction` onto the ground plane and normalizes it.
/// Vertical or zero directions come back as zero.
fn horizontal(direction: &Vector3<f64>) -> Vector3<f64> {
    Vector3::new(direction.x, direction.y, 0.0)
        .try_normalize(1e-12)
        .unwrap_or_else(Vector3::zeros)
}

/// Pulls the start corners inward by the clearance and drops one quadratic
/// Bezier from each, landing on the ground plane. Outer edges carry the
/// plate-thickness jog.
fn corner_edges(aperture: &Aperture, config: &WallConfig) -> (Points, Edges) {
    let outward = horizontal(&aperture.outward);
    let start = aperture.points.map(|p| p - outward * config.clearance);

    let thickness = (start.top_left - start.bot_left).norm();

    let edge = |p0: Point3<f64>, extra: f64| {
        let p1 = Point3::new(
            p0.x + outward.x * (config.d1 + extra),
            p0.y + outward.y * (config.d1 + extra),
            p0.z + config.z_off,
        );
        let p2 = Point3::new(
            p0.x + outward.x * (config.d2 + extra) + config.x_off,
            p0.y + outward.y * (config.d2 + extra) + config.y_off,
            0.0,
        );
        QuadraticBezier::new(p0, p1, p2)
    };

    let edges = Edges {
        top_left: edge(start.top_left, thickness),
        top_right: edge(start.top_right, thickness),
        bot_left: edge(start.bot_left, 0.0),
        bot_right: edge(start.bot_right, 0.0),
    };
    (start, edges)
}

/// Anchors the eyelet at the inner foot midpoint pulled `inset` inward,
/// builds it, and merges it into the wall solid.
fn attach_eyelet(
    solid: &mut Solid,
    foot: &Points,
    outward: &Vector3<f64>,
    spec: &EyeletSpec,
) -> Eyelet {
    let mid = Point3::from((foot.bot_left.coords + foot.bot_right.coords) / 2.0);
    let centre = mid - outward * spec.inset;
    let attachment = (spec.make)(centre);
    solid.merge(&attachment);
    Eyelet { centre, solid: attachment }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use case_curves::{Point3, Vector3};
    use case_loft::Solid;

    use crate::config::{EyeletSpec, StepSpec};

    fn north_aperture(x: f64, y: f64, width: f64) -> Aperture {
        Aperture::new(
            Points::new(
                Point3::new(x, y, 9.0),
                Point3::new(x + width, y, 9.0),
                Point3::new(x, y, 7.5),
                Point3::new(x + width, y, 7.5),
            ),
            Vector3::y(),
        )
    }

    #[test]
    fn start_corners_sit_clearance_inside_the_aperture() {
        let aperture = north_aperture(0.0, 20.0, 4.0);
        let wall = Wall::build(&aperture, &WallConfig::default()).unwrap();

        assert_relative_eq!(wall.start.top_left, Point3::new(0.0, 18.5, 9.0), epsilon = 1e-12);
        assert_relative_eq!(wall.start.bot_right, Point3::new(4.0, 18.5, 7.5), epsilon = 1e-12);
        assert_relative_eq!(wall.edges.top_left.start(), wall.start.top_left, epsilon = 1e-12);
        assert_relative_eq!(wall.edges.bot_right.start(), wall.start.bot_right, epsilon = 1e-12);
    }

    #[test]
    fn feet_land_on_the_ground_plane() {
        let aperture = north_aperture(0.0, 20.0, 4.0);
        let wall = Wall::build(&aperture, &WallConfig::default()).unwrap();

        for foot in wall.foot.to_array() {
            assert_relative_eq!(foot.z, 0.0, epsilon = 1e-12);
        }
        assert_relative_eq!(wall.foot.top_left, wall.edges.top_left.end(), epsilon = 1e-12);
        assert_relative_eq!(wall.foot.bot_left, wall.edges.bot_left.end(), epsilon = 1e-12);
    }

    #[test]
    fn outer_feet_keep_plate_thickness() {
        let aperture = north_aperture(0.0, 20.0, 4.0);
        let wall = Wall::build(&aperture, &WallConfig::default()).unwrap();

        // outer pair lands 1.5 (the plate thickness) beyond the inner pair
        let spread = wall.foot.top_left.y - wall.foot.bot_left.y;
        assert_relative_eq!(spread, 1.5, epsilon = 1e-9);
        assert!(wall.solid.signed_volume() > 0.0);
    }

    #[test]
    fn flat_steps_give_exact_mesh_counts() {
        let aperture = north_aperture(0.0, 20.0, 4.0);
        let config = WallConfig::default().with_steps(StepSpec::Flat(4));
        let wall = Wall::build(&aperture, &config).unwrap();

        // ring of 4 edges, 5 points each; 8 faces per adjacent pair plus
        // two fan caps of 2 faces each
        assert_eq!(wall.solid.point_count(), 20);
        assert_eq!(wall.solid.face_count(), 36);
    }

    #[test]
    fn facets_subdivide_the_cross_section() {
        let aperture = north_aperture(0.0, 20.0, 4.0);
        let config = WallConfig::default().with_steps(StepSpec::Flat(4)).with_facets(2);
        let wall = Wall::build(&aperture, &config).unwrap();

        assert_eq!(wall.solid.point_count(), 30);
        assert_eq!(wall.solid.face_count(), 56);
        assert!(wall.solid.signed_volume() > 0.0);
    }

    #[test]
    fn tilted_plate_resolves_ragged_steps() {
        let mut aperture = north_aperture(0.0, 20.0, 4.0);
        aperture.points.top_right.z += 3.0;
        aperture.points.bot_right.z += 3.0;
        let config = WallConfig::default().with_steps(StepSpec::PerZ(2.0));
        let wall = Wall::build(&aperture, &config).unwrap();

        assert!(wall.solid.signed_volume() > 0.0);
        for foot in wall.foot.to_array() {
            assert_relative_eq!(foot.z, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn foot_outward_recovers_the_aperture_direction() {
        let aperture = north_aperture(0.0, 20.0, 4.0);
        let wall = Wall::build(&aperture, &WallConfig::default()).unwrap();
        assert_relative_eq!(wall.foot_outward(), Vector3::y(), epsilon = 1e-9);
    }

    #[test]
    fn edge_near_picks_the_closest_foot() {
        let aperture = north_aperture(0.0, 20.0, 4.0);
        let wall = Wall::build(&aperture, &WallConfig::default()).unwrap();

        let near_left = wall.foot.top_left + Vector3::new(-0.2, 0.1, 0.0);
        assert_eq!(wall.edge_near(&near_left), &wall.edges.top_left);
    }

    fn tetra_post(centre: Point3<f64>) -> Solid {
        let mut solid = Solid::new();
        let o = solid.push_point(centre);
        let x = solid.push_point(centre + Vector3::new(1.0, 0.0, 0.0));
        let y = solid.push_point(centre + Vector3::new(0.0, 1.0, 0.0));
        let z = solid.push_point(centre + Vector3::new(0.0, 0.0, 1.0));
        solid.push_face([o, y, x]);
        solid.push_face([o, x, z]);
        solid.push_face([o, z, y]);
        solid.push_face([x, y, z]);
        solid
    }

    #[test]
    fn eyelet_is_anchored_inward_and_merged() {
        let aperture = north_aperture(0.0, 20.0, 4.0);
        let plain = Wall::build(&aperture, &WallConfig::default()).unwrap();
        let config = WallConfig::default().with_eyelet(EyeletSpec::new(2.0, tetra_post));
        let wall = Wall::build(&aperture, &config).unwrap();

        let eyelet = wall.eyelet.as_ref().unwrap();
        // inner feet sit at y = 23.5; the anchor is pulled 2 mm inward
        assert_relative_eq!(eyelet.centre, Point3::new(2.0, 21.5, 0.0), epsilon = 1e-9);
        assert_eq!(eyelet.solid.face_count(), 4);
        assert_eq!(wall.solid.face_count(), plain.solid.face_count() + 4);
        assert_relative_eq!(
            wall.solid.volume(),
            plain.solid.volume() + 1.0 / 6.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn column_end_without_neighbor_matches_build() {
        let aperture = north_aperture(0.0, 20.0, 4.0);
        let config = WallConfig::default();
        let plain = Wall::build(&aperture, &config).unwrap();
        let end = Wall::column_end(&aperture, None, Side::East, &config).unwrap();
        assert_eq!(plain.solid, end.solid);
    }

    #[test]
    fn column_end_pulls_the_foot_out_of_an_east_neighbor() {
        let aperture = north_aperture(0.0, 20.0, 4.0);
        let neighbor = north_aperture(5.0, 18.0, 4.0);
        let config = WallConfig::default().with_offsets(2.0, 0.0);

        let uncorrected = Wall::build(&aperture, &config).unwrap();
        assert_relative_eq!(uncorrected.foot.top_right.x, 6.0, epsilon = 1e-9);

        let corrected =
            Wall::column_end(&aperture, Some(&neighbor), Side::East, &config).unwrap();
        assert_relative_eq!(corrected.foot.top_right.x, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn column_end_pushes_the_foot_off_a_west_neighbor() {
        let aperture = north_aperture(0.0, 20.0, 4.0);
        let neighbor = north_aperture(-5.0, 18.0, 4.0);
        let config = WallConfig::default().with_offsets(-2.0, 0.0);

        let corrected =
            Wall::column_end(&aperture, Some(&neighbor), Side::West, &config).unwrap();
        assert_relative_eq!(corrected.foot.top_left.x, -1.0, epsilon = 1e-9);
    }

    #[test]
    fn column_end_ignores_row_neighbors() {
        let aperture = north_aperture(0.0, 20.0, 4.0);
        let neighbor = north_aperture(5.0, 18.0, 4.0);
        let config = WallConfig::default().with_offsets(2.0, 0.0);

        let plain = Wall::build(&aperture, &config).unwrap();
        let end = Wall::column_end(&aperture, Some(&neighbor), Side::North, &config).unwrap();
        assert_eq!(plain.solid, end.solid);
    }
}
