//! A deterministic oracle for exercising the fitting algorithms without a
//! real font: every character is `advance * size` wide and every run is
//! `height * size` tall.

use crate::units::{Point, Px};
use crate::{FitError, Measure};

#[derive(Debug, Copy, Clone)]
pub(crate) struct FixedAdvance {
    pub advance: f32,
    pub height: f32,
}

pub(crate) const ORACLE: FixedAdvance = FixedAdvance {
    advance: 0.5,
    height: 1.0,
};

impl Measure for FixedAdvance {
    fn bounding_polygon(&self, size: u32, angle: f32, text: &str) -> Result<[Point; 4], FitError> {
        let width = text.chars().count() as f32 * self.advance * size as f32;
        let height = self.height * size as f32;
        Ok([
            Point::new(0.0, 0.0).rotated(angle),
            Point::new(width, 0.0).rotated(angle),
            Point::new(width, -height).rotated(angle),
            Point::new(0.0, -height).rotated(angle),
        ])
    }
}

impl FixedAdvance {
    pub fn width(&self, size: u32, text: &str) -> Px {
        Px(text.chars().count() as f32 * self.advance * size as f32)
    }
}
