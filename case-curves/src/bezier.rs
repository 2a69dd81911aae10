//! Quadratic and cubic Bézier curves.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::Curve;

/// A quadratic Bézier curve defined by three control points.
///
/// This is the canonical wall corner edge: `p0` sits on the key face,
/// `p1` flares outward, and `p2` is the foot target on the ground plane.
/// The curve interpolates `p0` and `p2`; `p1` pulls the shape toward it
/// without being on the curve.
///
/// # Example
///
/// ```
/// use case_curves::{Curve, QuadraticBezier};
/// use nalgebra::Point3;
///
/// let curve = QuadraticBezier::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 2.0, 0.0),
///     Point3::new(2.0, 0.0, 0.0),
/// );
///
/// // The midpoint is pulled toward the control point.
/// let mid = curve.point_at(0.5);
/// assert!((mid.y - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuadraticBezier {
    /// Start point (t = 0).
    pub p0: Point3<f64>,
    /// Control point.
    pub p1: Point3<f64>,
    /// End point (t = 1).
    pub p2: Point3<f64>,
}

impl QuadraticBezier {
    /// Create a quadratic Bézier from its control points.
    #[inline]
    #[must_use]
    pub const fn new(p0: Point3<f64>, p1: Point3<f64>, p2: Point3<f64>) -> Self {
        Self { p0, p1, p2 }
    }

    /// A straight segment from `a` to `b`, expressed as a quadratic.
    ///
    /// The control point is the chord midpoint, which degenerates the
    /// curve to a line. Lets straight links share the lofting path used
    /// by curved ones.
    #[must_use]
    pub fn segment(a: Point3<f64>, b: Point3<f64>) -> Self {
        Self::new(a, lerp_point(&a, &b, 0.5), b)
    }

    /// Control-point-wise interpolation between two quadratics.
    ///
    /// At `t = 0` this is `a`, at `t = 1` it is `b`. Used to generate the
    /// interior facet edges of a wall between its corner edges.
    #[must_use]
    pub fn lerp_between(a: &Self, b: &Self, t: f64) -> Self {
        Self::new(
            lerp_point(&a.p0, &b.p0, t),
            lerp_point(&a.p1, &b.p1, t),
            lerp_point(&a.p2, &b.p2, t),
        )
    }

    /// First derivative at `t`.
    #[must_use]
    pub fn derivative_at(&self, t: f64) -> Vector3<f64> {
        let t = t.clamp(0.0, 1.0);
        let s = 1.0 - t;
        (self.p1 - self.p0) * (2.0 * s) + (self.p2 - self.p1) * (2.0 * t)
    }

    /// Unit tangent at `t`, or zero for a degenerate curve.
    #[must_use]
    pub fn tangent_at(&self, t: f64) -> Vector3<f64> {
        self.derivative_at(t)
            .try_normalize(f64::EPSILON)
            .unwrap_or_else(Vector3::zeros)
    }
}

impl Curve for QuadraticBezier {
    fn point_at(&self, t: f64) -> Point3<f64> {
        let t = t.clamp(0.0, 1.0);
        let s = 1.0 - t;
        Point3::from(
            self.p0.coords * (s * s) + self.p1.coords * (2.0 * s * t) + self.p2.coords * (t * t),
        )
    }
}

/// A cubic Bézier curve defined by four control points.
///
/// Bridges use cubics where a single bend is not enough: the bow link
/// pushes both interior control points outward, the snake link pushes
/// them in opposite directions for an S shape.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CubicBezier {
    /// Start point (t = 0).
    pub p0: Point3<f64>,
    /// First control point.
    pub p1: Point3<f64>,
    /// Second control point.
    pub p2: Point3<f64>,
    /// End point (t = 1).
    pub p3: Point3<f64>,
}

impl CubicBezier {
    /// Create a cubic Bézier from its control points.
    #[inline]
    #[must_use]
    pub const fn new(
        p0: Point3<f64>,
        p1: Point3<f64>,
        p2: Point3<f64>,
        p3: Point3<f64>,
    ) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// A straight segment from `a` to `b`, expressed as a cubic.
    ///
    /// Control points sit at the chord thirds.
    #[must_use]
    pub fn segment(a: Point3<f64>, b: Point3<f64>) -> Self {
        Self::new(
            a,
            lerp_point(&a, &b, 1.0 / 3.0),
            lerp_point(&a, &b, 2.0 / 3.0),
            b,
        )
    }

    /// Control-point-wise interpolation between two cubics.
    #[must_use]
    pub fn lerp_between(a: &Self, b: &Self, t: f64) -> Self {
        Self::new(
            lerp_point(&a.p0, &b.p0, t),
            lerp_point(&a.p1, &b.p1, t),
            lerp_point(&a.p2, &b.p2, t),
            lerp_point(&a.p3, &b.p3, t),
        )
    }

    /// First derivative at `t`.
    #[must_use]
    pub fn derivative_at(&self, t: f64) -> Vector3<f64> {
        let t = t.clamp(0.0, 1.0);
        let s = 1.0 - t;
        (self.p1 - self.p0) * (3.0 * s * s)
            + (self.p2 - self.p1) * (6.0 * s * t)
            + (self.p3 - self.p2) * (3.0 * t * t)
    }

    /// Unit tangent at `t`, or zero for a degenerate curve.
    #[must_use]
    pub fn tangent_at(&self, t: f64) -> Vector3<f64> {
        self.derivative_at(t)
            .try_normalize(f64::EPSILON)
            .unwrap_or_else(Vector3::zeros)
    }
}

impl Curve for CubicBezier {
    fn point_at(&self, t: f64) -> Point3<f64> {
        let t = t.clamp(0.0, 1.0);
        let s = 1.0 - t;
        Point3::from(
            self.p0.coords * (s * s * s)
                + self.p1.coords * (3.0 * s * s * t)
                + self.p2.coords * (3.0 * s * t * t)
                + self.p3.coords * (t * t * t),
        )
    }
}

/// Linear interpolation between two points.
fn lerp_point(a: &Point3<f64>, b: &Point3<f64>, t: f64) -> Point3<f64> {
    Point3::from(a.coords * (1.0 - t) + b.coords * t)
}
