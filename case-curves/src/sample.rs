//! Curve discretization.

use nalgebra::Point3;

use crate::traits::Curve;

/// Sample a curve at `steps + 1` evenly spaced parameter values.
///
/// Points are ordered from t = 0 to t = 1; the first point is exactly
/// `point_at(0.0)` and the last exactly `point_at(1.0)`. `steps` is
/// clamped to at least 1.
///
/// # Example
///
/// ```
/// use case_curves::{discretize, QuadraticBezier};
/// use nalgebra::Point3;
///
/// let seg = QuadraticBezier::segment(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(4.0, 0.0, 0.0),
/// );
///
/// let points = discretize(&seg, 4);
/// assert_eq!(points.len(), 5);
/// assert_eq!(points[1].x, 1.0);
/// ```
#[must_use]
pub fn discretize<C: Curve + ?Sized>(curve: &C, steps: usize) -> Vec<Point3<f64>> {
    let steps = steps.max(1);
    let mut points = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        points.push(curve.point_at(i as f64 / steps as f64));
    }
    points
}

/// Sample a curve in reverse parameter order, appending onto `seed`.
///
/// The `steps + 1` samples run from t = 1 down to t = 0 and are pushed
/// onto the end of `seed`, which is returned. Seeding with the forward
/// samples of another curve concatenates the two into one continuous
/// boundary loop.
///
/// # Example
///
/// ```
/// use case_curves::{discretize, discretize_rev, QuadraticBezier};
/// use nalgebra::Point3;
///
/// let top = QuadraticBezier::segment(
///     Point3::new(0.0, 0.0, 8.0),
///     Point3::new(0.0, 5.0, 0.0),
/// );
/// let bottom = QuadraticBezier::segment(
///     Point3::new(0.0, 0.0, 6.0),
///     Point3::new(0.0, 4.0, 0.0),
/// );
///
/// let loop_points = discretize_rev(&top, 4, discretize(&bottom, 4));
/// assert_eq!(loop_points.len(), 10);
/// ```
#[must_use]
pub fn discretize_rev<C: Curve + ?Sized>(
    curve: &C,
    steps: usize,
    mut seed: Vec<Point3<f64>>,
) -> Vec<Point3<f64>> {
    let steps = steps.max(1);
    seed.reserve(steps + 1);
    for i in (0..=steps).rev() {
        seed.push(curve.point_at(i as f64 / steps as f64));
    }
    seed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bezier::QuadraticBezier;
    use approx::assert_relative_eq;

    fn drop_edge() -> QuadraticBezier {
        QuadraticBezier::new(
            Point3::new(0.0, 0.0, 10.0),
            Point3::new(0.0, 2.0, 10.0),
            Point3::new(0.0, 5.0, 0.0),
        )
    }

    #[test]
    fn discretize_yields_steps_plus_one_points() {
        let points = discretize(&drop_edge(), 8);
        assert_eq!(points.len(), 9);
    }

    #[test]
    fn discretize_endpoints_are_exact() {
        let edge = drop_edge();
        let points = discretize(&edge, 5);

        assert_relative_eq!(points[0], edge.p0, epsilon = 1e-12);
        assert_relative_eq!(points[5], edge.p2, epsilon = 1e-12);
    }

    #[test]
    fn discretize_clamps_zero_steps() {
        let points = discretize(&drop_edge(), 0);
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn discretize_rev_reverses_order() {
        let edge = drop_edge();
        let forward = discretize(&edge, 4);
        let reversed = discretize_rev(&edge, 4, Vec::new());

        for (f, r) in forward.iter().zip(reversed.iter().rev()) {
            assert_relative_eq!(*f, *r, epsilon = 1e-12);
        }
    }

    #[test]
    fn discretize_rev_appends_to_seed() {
        let edge = drop_edge();
        let seed = discretize(&edge, 3);
        let joined = discretize_rev(&edge, 3, seed);

        assert_eq!(joined.len(), 8);
        // The seed's forward samples are untouched.
        assert_relative_eq!(joined[0], edge.p0, epsilon = 1e-12);
        // The reverse run starts at t = 1 and ends at t = 0.
        assert_relative_eq!(joined[4], edge.p2, epsilon = 1e-12);
        assert_relative_eq!(joined[7], edge.p0, epsilon = 1e-12);
    }
}
