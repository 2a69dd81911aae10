//! Bridge strategies linking neighboring walls.
//!
//! Every strategy takes a source wall `w1`, a destination wall `w2`, and a
//! config, and produces a standalone [`Bridge`] solid spanning the gap.
//! Bridges attach to each wall's lateral face: ground curves run between
//! foot corners, top curves between points found on the recorded corner
//! edges at the configured height via [`point_at_height`]. All sampled
//! attachment points sink `overlap` into their wall, from the attachment
//! face toward the wall's body, so the downstream boolean union never sees
//! a zero-measure shared boundary.
//!
//! The four boundary curves are lofted in the order outer-ground,
//! outer-top, inner-top, inner-ground, which keeps the ring clockwise as
//! seen from behind the source wall and the result positively oriented.

use case_curves::{
    discretize, discretize_rev, point_at_height, CubicBezier, HeightSearch, Point3,
    QuadraticBezier, Vector3,
};
use case_loft::{loft, skin, Solid};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{BowConfig, ElbowConfig, JoinConfig, SnakeConfig, StraightConfig};
use crate::error::WallResult;
use crate::wall::Wall;

/// A standalone solid linking two walls.
pub type Bridge = Solid;

/// Which lateral face of a wall a bridge attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AttachSide {
    /// The face under the wall's right corner pair; bridges exit here.
    Right,
    /// The face under the wall's left corner pair; bridges enter here.
    Left,
}

/// The four sampled attachment points on one wall's lateral face.
struct Attach {
    outer_foot: Point3<f64>,
    outer_top: Point3<f64>,
    inner_top: Point3<f64>,
    inner_foot: Point3<f64>,
}

impl Attach {
    fn translate(&mut self, offset: Vector3<f64>) {
        self.outer_foot += offset;
        self.outer_top += offset;
        self.inner_top += offset;
        self.inner_foot += offset;
    }
}

/// Unit direction from the given lateral face into the wall's body.
fn lateral_into(wall: &Wall, side: AttachSide) -> Vector3<f64> {
    let across = match side {
        AttachSide::Right => wall.foot.top_left - wall.foot.top_right,
        AttachSide::Left => wall.foot.top_right - wall.foot.top_left,
    };
    across.try_normalize(1e-12).unwrap_or_else(Vector3::zeros)
}

fn attach(wall: &Wall, side: AttachSide, height: f64, overlap: f64) -> Attach {
    let sink = lateral_into(wall, side) * overlap;
    let search = HeightSearch::default();
    let (outer, inner, outer_foot, inner_foot) = match side {
        AttachSide::Right => (
            &wall.edges.top_right,
            &wall.edges.bot_right,
            wall.foot.top_right,
            wall.foot.bot_right,
        ),
        AttachSide::Left => (
            &wall.edges.top_left,
            &wall.edges.bot_left,
            wall.foot.top_left,
            wall.foot.bot_left,
        ),
    };
    Attach {
        outer_foot: outer_foot + sink,
        outer_top: point_at_height(outer, height, &search) + sink,
        inner_top: point_at_height(inner, height, &search) + sink,
        inner_foot: inner_foot + sink,
    }
}

/// Foot extent of a wall along the x or y axis.
fn foot_span(wall: &Wall, x_axis: bool) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for corner in wall.foot.to_array() {
        let v = if x_axis { corner.x } else { corner.y };
        min = min.min(v);
        max = max.max(v);
    }
    (min, max)
}

/// Links two near-parallel walls with a straight quadrilateral bridge.
///
/// When the lateral (minor-axis) foot gap exceeds `min_gap`, the inner
/// face is flared outward by the excess divided by `fudge`; steep
/// approaches otherwise leave it nearly coplanar with the outer face.
/// When the walls' footprints already interleave along the travel axis,
/// the start section backs off by `overlap` to keep the sections
/// distinct.
///
/// # Errors
///
/// Returns an error if lofting the bridge fails.
pub fn straight(w1: &Wall, w2: &Wall, config: &StraightConfig) -> WallResult<Bridge> {
    let mut a = attach(w1, AttachSide::Right, config.height, config.overlap);
    let mut b = attach(w2, AttachSide::Left, config.height, config.overlap);

    let delta = b.outer_foot - a.outer_foot;
    let x_major = delta.x.abs() >= delta.y.abs();
    let (major_gap, minor_gap) = if x_major { (delta.x, delta.y) } else { (delta.y, delta.x) };

    let extra = (minor_gap.abs() - config.min_gap).max(0.0) / config.fudge;
    if extra > 0.0 {
        let flare = w1.foot_outward() * extra;
        a.inner_top += flare;
        a.inner_foot += flare;
        let flare = w2.foot_outward() * extra;
        b.inner_top += flare;
        b.inner_foot += flare;
    }

    let (a_min, a_max) = foot_span(w1, x_major);
    let (b_min, b_max) = foot_span(w2, x_major);
    if a_max > b_min && b_max > a_min {
        let axis = if x_major { Vector3::x() } else { Vector3::y() };
        a.translate(axis * (-major_gap.signum() * config.overlap));
    }

    let ring = [
        QuadraticBezier::segment(a.outer_foot, b.outer_foot),
        QuadraticBezier::segment(a.outer_top, b.outer_top),
        QuadraticBezier::segment(a.inner_top, b.inner_top),
        QuadraticBezier::segment(a.inner_foot, b.inner_foot),
    ];
    Ok(loft(&ring, &[config.steps; 4])?)
}

/// Quadratic single-bend corner, control point placed at the corner of
/// the two endpoints' major-axis displacement.
fn elbow(from: Point3<f64>, to: Point3<f64>) -> QuadraticBezier {
    let delta = to - from;
    let control = if delta.x.abs() >= delta.y.abs() {
        Point3::new(to.x, from.y, (from.z + to.z) / 2.0)
    } else {
        Point3::new(from.x, to.y, (from.z + to.z) / 2.0)
    };
    QuadraticBezier::new(from, control, to)
}

/// Links two walls around a corner with a single quadratic bend.
///
/// # Errors
///
/// Returns an error if lofting the bridge fails.
pub fn bezier_elbow(w1: &Wall, w2: &Wall, config: &ElbowConfig) -> WallResult<Bridge> {
    let a = attach(w1, AttachSide::Right, config.height, config.overlap);
    let b = attach(w2, AttachSide::Left, config.height, config.overlap);

    let ring = [
        elbow(a.outer_foot, b.outer_foot),
        elbow(a.outer_top, b.outer_top),
        elbow(a.inner_top, b.inner_top),
        elbow(a.inner_foot, b.inner_foot),
    ];
    Ok(loft(&ring, &[config.steps; 4])?)
}

fn mean_outward(w1: &Wall, w2: &Wall) -> Vector3<f64> {
    (w1.foot_outward() + w2.foot_outward())
        .try_normalize(1e-12)
        .unwrap_or_else(|| w1.foot_outward())
}

/// Links two walls around a gentle convex corner with a cubic bow.
///
/// Only the outer pair of boundary curves is pushed outward by `bow`,
/// along the mean of the two walls' outward directions; the inner pair
/// keeps plain chord thirds.
///
/// # Errors
///
/// Returns an error if lofting the bridge fails.
pub fn cubic_bow(w1: &Wall, w2: &Wall, config: &BowConfig) -> WallResult<Bridge> {
    let a = attach(w1, AttachSide::Right, config.height, config.overlap);
    let b = attach(w2, AttachSide::Left, config.height, config.overlap);

    let push = mean_outward(w1, w2) * config.bow;
    let bowed = |from: Point3<f64>, to: Point3<f64>| {
        let mut curve = CubicBezier::segment(from, to);
        curve.p1 += push;
        curve.p2 += push;
        curve
    };

    let ring = [
        bowed(a.outer_foot, b.outer_foot),
        bowed(a.outer_top, b.outer_top),
        CubicBezier::segment(a.inner_top, b.inner_top),
        CubicBezier::segment(a.inner_foot, b.inner_foot),
    ];
    Ok(loft(&ring, &[config.steps; 4])?)
}

/// Links two distant, differently-facing walls with a cubic S.
///
/// Every boundary curve's first control point is pushed along `w1`'s
/// outward and its second along `w2`'s, producing the double bend that
/// reaches the thumb cluster.
///
/// # Errors
///
/// Returns an error if lofting the bridge fails.
pub fn snake_bow(w1: &Wall, w2: &Wall, config: &SnakeConfig) -> WallResult<Bridge> {
    let a = attach(w1, AttachSide::Right, config.height, config.overlap);
    let b = attach(w2, AttachSide::Left, config.height, config.overlap);

    let push_1 = w1.foot_outward() * config.bow;
    let push_2 = w2.foot_outward() * config.bow;
    let snaked = |from: Point3<f64>, to: Point3<f64>| {
        let mut curve = CubicBezier::segment(from, to);
        curve.p1 += push_1;
        curve.p2 += push_2;
        curve
    };

    let ring = [
        snaked(a.outer_foot, b.outer_foot),
        snaked(a.outer_top, b.outer_top),
        snaked(a.inner_top, b.inner_top),
        snaked(a.inner_foot, b.inner_foot),
    ];
    Ok(loft(&ring, &[config.steps; 4])?)
}

/// Links two walls with a single bend starting from `w1`'s inner face
/// rather than its outer corner.
///
/// Covers transitions where the outer-corner path would leave a gap,
/// such as the outer pinky corner. The start section lies on the inner
/// face, one foot thickness wide, and sinks into the wall along its
/// outward direction.
///
/// # Errors
///
/// Returns an error if lofting the bridge fails.
pub fn inward_elbow(w1: &Wall, w2: &Wall, config: &ElbowConfig) -> WallResult<Bridge> {
    let search = HeightSearch::default();
    let sink = w1.foot_outward() * config.overlap;
    let along = (w1.foot.bot_left - w1.foot.bot_right)
        .try_normalize(1e-12)
        .unwrap_or_else(Vector3::zeros)
        * (w1.foot.top_right - w1.foot.bot_right).norm();

    let outer_foot = w1.foot.bot_right + sink;
    let outer_top = point_at_height(&w1.edges.bot_right, config.height, &search) + sink;
    let a = Attach {
        outer_foot,
        outer_top,
        inner_top: outer_top + along,
        inner_foot: outer_foot + along,
    };
    let b = attach(w2, AttachSide::Left, config.height, config.overlap);

    let ring = [
        elbow(a.outer_foot, b.outer_foot),
        elbow(a.outer_top, b.outer_top),
        elbow(a.inner_top, b.inner_top),
        elbow(a.inner_foot, b.inner_foot),
    ];
    Ok(loft(&ring, &[config.steps; 4])?)
}

/// One wall's complete top-to-bottom boundary loop on the given lateral
/// face: the bottom edge discretized forward, then the top edge reversed
/// onto it, every point sunk `overlap` into the wall.
///
/// The loop has `2 × (steps + 1)` points, so two loops built with the
/// same step count always skin cleanly.
#[must_use]
pub fn boundary_loop(
    wall: &Wall,
    side: AttachSide,
    steps: usize,
    overlap: f64,
) -> Vec<Point3<f64>> {
    let (top, bot) = match side {
        AttachSide::Right => (&wall.edges.top_right, &wall.edges.bot_right),
        AttachSide::Left => (&wall.edges.top_left, &wall.edges.bot_left),
    };
    let sink = lateral_into(wall, side) * overlap;
    let mut points = discretize_rev(top, steps, discretize(bot, steps));
    for point in &mut points {
        *point += sink;
    }
    points
}

/// Fills the sliver left at the key-face start by independent wall tilt:
/// a small prism between matching start-face triangles, each third point
/// taken `drop` below the start on the outer edge.
fn start_wedge(w1: &Wall, w2: &Wall, config: &JoinConfig) -> WallResult<Solid> {
    let search = HeightSearch::default();
    let drop_1 = point_at_height(&w1.edges.top_right, w1.start.top_right.z - config.drop, &search);
    let drop_2 = point_at_height(&w2.edges.top_left, w2.start.top_left.z - config.drop, &search);
    let first = vec![w1.start.top_right, w1.start.bot_right, drop_1];
    let second = vec![w2.start.top_left, w2.start.bot_left, drop_2];
    Ok(skin(&[first, second])?)
}

/// Joins two walls across their full lateral faces.
///
/// Skins `w1`'s right boundary loop directly onto `w2`'s left loop, then
/// merges the start wedge filler. Used by the closed perimeter style,
/// where neighboring walls are close enough that their faces can be
/// mated edge to edge.
///
/// # Errors
///
/// Returns an error if skinning the loops or the wedge fails.
pub fn join_edges(w1: &Wall, w2: &Wall, config: &JoinConfig) -> WallResult<Bridge> {
    let exit = boundary_loop(w1, AttachSide::Right, config.steps, config.overlap);
    let entry = boundary_loop(w2, AttachSide::Left, config.steps, config.overlap);
    let mut bridge = skin(&[exit, entry])?;
    bridge.merge(&start_wedge(w1, w2, config)?);
    Ok(bridge)
}

/// A join site: which bridge strategy to apply between two walls.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum JoinKind {
    /// Near-planar straight link.
    Straight(StraightConfig),
    /// Single-bend outer corner.
    BezierElbow(ElbowConfig),
    /// Outward-bowed convex corner.
    CubicBow(BowConfig),
    /// S-shaped reach link.
    SnakeBow(SnakeConfig),
    /// Single bend starting from the source wall's inner face.
    InwardElbow(ElbowConfig),
    /// Full lateral-face join with wedge filler.
    JoinEdges(JoinConfig),
}

impl JoinKind {
    /// Builds the bridge this site describes.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying strategy fails.
    pub fn apply(&self, w1: &Wall, w2: &Wall) -> WallResult<Bridge> {
        let bridge = match self {
            Self::Straight(config) => straight(w1, w2, config),
            Self::BezierElbow(config) => bezier_elbow(w1, w2, config),
            Self::CubicBow(config) => cubic_bow(w1, w2, config),
            Self::SnakeBow(config) => snake_bow(w1, w2, config),
            Self::InwardElbow(config) => inward_elbow(w1, w2, config),
            Self::JoinEdges(config) => join_edges(w1, w2, config),
        }?;
        debug!(kind = self.label(), faces = bridge.face_count(), "built bridge");
        Ok(bridge)
    }

    fn label(self) -> &'static str {
        match self {
            Self::Straight(_) => "straight",
            Self::BezierElbow(_) => "bezier_elbow",
            Self::CubicBow(_) => "cubic_bow",
            Self::SnakeBow(_) => "snake_bow",
            Self::InwardElbow(_) => "inward_elbow",
            Self::JoinEdges(_) => "join_edges",
        }
    }
}
