use super::Region;
use crate::units::Px;
use serde::Serialize;

/// Margins are kept clear around the edges of the canvas when working out
/// the region text may be fitted into. Nothing stops content from
/// overflowing them: a fit that overflows its region overflows its margins.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize)]
pub struct Margins {
    pub top: Px,
    pub right: Px,
    pub bottom: Px,
    pub left: Px,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Px, right: Px, bottom: Px, left: Px) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Px>>(value: D) -> Margins {
        let value: Px = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Utility method to reserve extra space along the bottom edge,
    /// e.g. for a caption
    pub fn with_extra_bottom(&self, extra: Px) -> Margins {
        Margins {
            bottom: self.bottom + extra,
            ..*self
        }
    }

    /// The region left inside a canvas of the given size. The region can have
    /// no area (or a negative one) if the margins are wider than the canvas.
    pub fn inset(&self, width: Px, height: Px) -> Region {
        Region {
            width: width - self.left - self.right,
            height: height - self.top - self.bottom,
        }
    }
}
