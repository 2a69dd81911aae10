//! Corner and side labels for key apertures and walls.
//!
//! A wall hangs from a rectangular key aperture, so its cross-section is
//! described by four labelled corners. `top`/`bot` select the outer and
//! inner plate surface, `left`/`right` are lateral positions as seen when
//! looking along the aperture's outward direction with +Z up.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the four corners of a wall cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Corner {
    /// Outer plate surface, lateral left.
    TopLeft,
    /// Outer plate surface, lateral right.
    TopRight,
    /// Inner plate surface, lateral left.
    BotLeft,
    /// Inner plate surface, lateral right.
    BotRight,
}

impl Corner {
    /// All four corners in clockwise cross-section order.
    pub const ALL: [Self; 4] = [Self::TopLeft, Self::TopRight, Self::BotRight, Self::BotLeft];

    /// Whether this corner lies on the outer plate surface.
    #[must_use]
    pub const fn is_outer(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }
}

/// Which side of the keyboard body a wall belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    /// The far row, away from the typist.
    North,
    /// The right-hand edge.
    East,
    /// The near row, toward the typist.
    South,
    /// The left-hand edge.
    West,
}
