//! Labelled quads of corner points and corner edges.

use case_curves::{Curve, Point3, QuadraticBezier};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::corner::Corner;

/// Four labelled corner points of a wall cross-section.
///
/// Lateral `left`/`right` follow the convention in [`Corner`]: as seen when
/// looking along the owning aperture's outward direction with +Z up.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Points {
    /// Outer plate surface, lateral left.
    pub top_left: Point3<f64>,
    /// Outer plate surface, lateral right.
    pub top_right: Point3<f64>,
    /// Inner plate surface, lateral left.
    pub bot_left: Point3<f64>,
    /// Inner plate surface, lateral right.
    pub bot_right: Point3<f64>,
}

impl Points {
    /// Creates a labelled quad from its four corners.
    #[must_use]
    pub const fn new(
        top_left: Point3<f64>,
        top_right: Point3<f64>,
        bot_left: Point3<f64>,
        bot_right: Point3<f64>,
    ) -> Self {
        Self { top_left, top_right, bot_left, bot_right }
    }

    /// Returns the corner point for `corner`.
    #[must_use]
    pub const fn get(&self, corner: Corner) -> Point3<f64> {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BotLeft => self.bot_left,
            Corner::BotRight => self.bot_right,
        }
    }

    /// The four corners in clockwise cross-section order.
    #[must_use]
    pub const fn to_array(&self) -> [Point3<f64>; 4] {
        [self.top_left, self.top_right, self.bot_right, self.bot_left]
    }

    /// Centroid of the four corners.
    #[must_use]
    pub fn centre(&self) -> Point3<f64> {
        Point3::from(
            (self.top_left.coords
                + self.top_right.coords
                + self.bot_left.coords
                + self.bot_right.coords)
                / 4.0,
        )
    }

    /// Applies `f` to every corner, preserving labels.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(Point3<f64>) -> Point3<f64>,
    {
        Self {
            top_left: f(self.top_left),
            top_right: f(self.top_right),
            bot_left: f(self.bot_left),
            bot_right: f(self.bot_right),
        }
    }
}

/// The four corner edges of a wall, one quadratic Bezier per corner.
///
/// Each edge runs from its corner at the aperture (`t = 0`) down to the
/// wall's foot on the ground plane (`t = 1`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edges {
    /// Edge descending from the top-left corner.
    pub top_left: QuadraticBezier,
    /// Edge descending from the top-right corner.
    pub top_right: QuadraticBezier,
    /// Edge descending from the bot-left corner.
    pub bot_left: QuadraticBezier,
    /// Edge descending from the bot-right corner.
    pub bot_right: QuadraticBezier,
}

impl Edges {
    /// Returns the corner edge for `corner`.
    #[must_use]
    pub const fn get(&self, corner: Corner) -> &QuadraticBezier {
        match corner {
            Corner::TopLeft => &self.top_left,
            Corner::TopRight => &self.top_right,
            Corner::BotLeft => &self.bot_left,
            Corner::BotRight => &self.bot_right,
        }
    }

    /// Classifies `point` by which edge's foot it lies closest to.
    #[must_use]
    pub fn nearest(&self, point: &Point3<f64>) -> Corner {
        let mut best = Corner::TopLeft;
        let mut best_dist = f64::INFINITY;
        for corner in Corner::ALL {
            let dist = (self.get(corner).end() - point).norm_squared();
            if dist < best_dist {
                best = corner;
                best_dist = dist;
            }
        }
        best
    }
}
