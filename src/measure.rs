use crate::units::{Point, Px};
use crate::FitError;
use serde::Serialize;

/// The glyph-metrics oracle every fitting algorithm is built on: "how large
/// would this text be at this size and angle?"
///
/// Implementations return the four corners of the rendered run in device
/// space (`y` grows downwards), ordered lower-left, lower-right, upper-right,
/// upper-left, relative to the pen position on the baseline where drawing
/// starts.
///
/// # Preconditions
///
/// The binary searches in [`crate::layout`] assume that measurements are
/// *deterministic* (identical inputs give identical corners) and *monotonic*:
/// growing the font size never shrinks the measured extents, and appending
/// characters never shrinks the measured width. Nothing verifies this; an
/// oracle that breaks it still produces a layout, just not the largest one.
pub trait Measure {
    /// The corners of `text` set at `size` and rotated `angle` degrees
    /// counter-clockwise
    fn bounding_polygon(&self, size: u32, angle: f32, text: &str) -> Result<[Point; 4], FitError>;
}

impl<M: Measure + ?Sized> Measure for &M {
    fn bounding_polygon(&self, size: u32, angle: f32, text: &str) -> Result<[Point; 4], FitError> {
        (**self).bounding_polygon(size, angle, text)
    }
}

/// The axis-aligned extents of a measured run of text
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub width: Px,
    pub height: Px,
    /// The raw corners reported by the oracle
    pub corners: [Point; 4],
    pub min: Point,
    pub max: Point,
}

impl Measurement {
    /// Reduce a (possibly rotated) polygon to its axis-aligned bounding box
    pub fn from_corners(corners: [Point; 4]) -> Measurement {
        let mut min = corners[0];
        let mut max = corners[0];
        for corner in corners.iter().skip(1) {
            min.x = min.x.min(corner.x);
            min.y = min.y.min(corner.y);
            max.x = max.x.max(corner.x);
            max.y = max.y.max(corner.y);
        }

        Measurement {
            width: max.x - min.x,
            height: max.y - min.y,
            corners,
            min,
            max,
        }
    }
}

/// Measure `text` at the given size and angle. Empty text measures as a
/// zero-area box without consulting the oracle.
pub fn measure<M: Measure + ?Sized>(
    oracle: &M,
    size: u32,
    angle: f32,
    text: &str,
) -> Result<Measurement, FitError> {
    if size == 0 {
        return Err(FitError::InvalidBounds(
            "font size must be at least 1".into(),
        ));
    }
    if text.is_empty() {
        return Ok(Measurement::default());
    }

    let corners = oracle.bounding_polygon(size, angle, text)?;
    Ok(Measurement::from_corners(corners))
}

/// Shorthand for the measured width of `text`
pub fn width_of_text<M: Measure + ?Sized>(
    oracle: &M,
    size: u32,
    angle: f32,
    text: &str,
) -> Result<Px, FitError> {
    measure(oracle, size, angle, text).map(|m| m.width)
}
