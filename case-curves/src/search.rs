//! Bisection search for the point on a curve at a target height.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::Curve;

/// Parameters for the height bisection.
///
/// # Example
///
/// ```
/// use case_curves::HeightSearch;
///
/// let search = HeightSearch::default().with_tolerance(1e-4);
/// assert_eq!(search.max_iter, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeightSearch {
    /// Maximum number of bisection iterations.
    pub max_iter: usize,
    /// Accept a sample whose z is within this distance of the target.
    pub tolerance: f64,
}

impl Default for HeightSearch {
    fn default() -> Self {
        Self {
            max_iter: 100,
            tolerance: 1e-3,
        }
    }
}

impl HeightSearch {
    /// Set the iteration bound.
    #[must_use]
    pub const fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the acceptance tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance.abs();
        self
    }
}

/// Find the point on `curve` whose z coordinate is `z`.
///
/// Bisects `t ∈ [0, 1]`, assuming z is monotonic along the curve (true
/// for wall corner edges, which drop from the key face to the ground).
/// Works whether z increases or decreases with t.
///
/// If `max_iter` halvings do not reach `tolerance`, the point at the
/// final bisection midpoint is returned: the best estimate found. A
/// target outside the curve's z range therefore converges to the nearer
/// endpoint, which is the useful answer when a bridge is asked for a
/// height above a short wall.
///
/// # Example
///
/// ```
/// use case_curves::{point_at_height, HeightSearch, QuadraticBezier};
/// use nalgebra::Point3;
///
/// let edge = QuadraticBezier::new(
///     Point3::new(0.0, 0.0, 10.0),
///     Point3::new(0.0, 2.0, 10.0),
///     Point3::new(0.0, 5.0, 0.0),
/// );
///
/// let p = point_at_height(&edge, 5.0, &HeightSearch::default());
/// assert!((p.z - 5.0).abs() < 1e-3);
/// ```
#[must_use]
pub fn point_at_height<C: Curve + ?Sized>(
    curve: &C,
    z: f64,
    search: &HeightSearch,
) -> Point3<f64> {
    let descending = curve.start().z > curve.end().z;
    let mut lo = 0.0;
    let mut hi = 1.0;

    for _ in 0..search.max_iter {
        let mid = (lo + hi) / 2.0;
        let point = curve.point_at(mid);
        if (point.z - z).abs() < search.tolerance {
            return point;
        }
        if (point.z < z) == descending {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    curve.point_at((lo + hi) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bezier::QuadraticBezier;
    use approx::assert_relative_eq;

    fn descending_edge() -> QuadraticBezier {
        QuadraticBezier::new(
            Point3::new(0.0, 0.0, 10.0),
            Point3::new(0.0, 2.0, 10.0),
            Point3::new(0.0, 5.0, 0.0),
        )
    }

    #[test]
    fn finds_height_on_descending_curve() {
        let p = point_at_height(&descending_edge(), 4.0, &HeightSearch::default());
        assert_relative_eq!(p.z, 4.0, epsilon = 1e-3);
    }

    #[test]
    fn finds_height_on_ascending_curve() {
        let edge = QuadraticBezier::new(
            Point3::new(0.0, 5.0, 0.0),
            Point3::new(0.0, 2.0, 10.0),
            Point3::new(0.0, 0.0, 10.0),
        );

        let p = point_at_height(&edge, 7.5, &HeightSearch::default());
        assert_relative_eq!(p.z, 7.5, epsilon = 1e-3);
    }

    #[test]
    fn tighter_tolerance_is_honored() {
        let search = HeightSearch::default().with_tolerance(1e-8);
        let p = point_at_height(&descending_edge(), 2.5, &search);
        assert_relative_eq!(p.z, 2.5, epsilon = 1e-8);
    }

    #[test]
    fn target_above_range_returns_high_endpoint() {
        let p = point_at_height(&descending_edge(), 20.0, &HeightSearch::default());
        assert_relative_eq!(p.z, 10.0, epsilon = 1e-6);
    }

    #[test]
    fn target_below_range_returns_low_endpoint() {
        let p = point_at_height(&descending_edge(), -5.0, &HeightSearch::default());
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn exhausted_iterations_return_best_estimate() {
        let search = HeightSearch {
            max_iter: 4,
            tolerance: 1e-12,
        };

        // Four halvings cannot hit 1e-12, but the estimate is still close.
        let p = point_at_height(&descending_edge(), 5.0, &search);
        assert!((p.z - 5.0).abs() < 1.5);
    }
}
