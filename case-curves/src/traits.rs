//! The core curve trait.

use nalgebra::Point3;

/// A parametric curve mapping `t ∈ [0, 1]` to a point in space.
///
/// This is the edge abstraction the lofting layer consumes: wall corner
/// edges, bridge boundary curves, and interpolated facet edges all
/// implement it. Implementations clamp `t` to `[0, 1]`, so callers never
/// sample outside the curve.
pub trait Curve {
    /// Evaluate the curve at parameter `t`.
    ///
    /// `t` is clamped to `[0, 1]`.
    fn point_at(&self, t: f64) -> Point3<f64>;

    /// The curve's start point (t = 0).
    fn start(&self) -> Point3<f64> {
        self.point_at(0.0)
    }

    /// The curve's end point (t = 1).
    fn end(&self) -> Point3<f64> {
        self.point_at(1.0)
    }
}
