use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Sub, SubAssign, Sum,
};
use serde::Serialize;

/// A distance in device units (pixels on the output canvas). Font sizes are
/// expressed as whole pixels per em; every measured or derived extent is a [Px].
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Mul,
    MulAssign,
    Div,
    DivAssign,
    Sum,
    From,
    Into,
    Display,
    Serialize,
)]
#[display("{_0}px")]
pub struct Px(pub f32);

impl Px {
    pub const ZERO: Px = Px(0.0);

    pub fn ceil(self) -> Px {
        Px(self.0.ceil())
    }

    pub fn floor(self) -> Px {
        Px(self.0.floor())
    }

    pub fn max(self, other: Px) -> Px {
        Px(self.0.max(other.0))
    }

    pub fn min(self, other: Px) -> Px {
        Px(self.0.min(other.0))
    }

    /// Whether this is a usable, strictly positive extent
    pub fn is_positive(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl From<u32> for Px {
    fn from(value: u32) -> Self {
        Px(value as f32)
    }
}

/// A point in device space. `y` grows downwards, as it does on a raster canvas.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize)]
pub struct Point {
    pub x: Px,
    pub y: Px,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Point {
        Point { x: Px(x), y: Px(y) }
    }

    /// Rotate the point counter-clockwise (as seen on screen) around the origin
    pub fn rotated(self, degrees: f32) -> Point {
        if degrees == 0.0 {
            return self;
        }
        let (sin, cos) = degrees.to_radians().sin_cos();
        let (x, y) = (self.x.0, self.y.0);
        Point {
            x: Px(x * cos + y * sin),
            y: Px(y * cos - x * sin),
        }
    }
}
