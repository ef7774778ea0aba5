use text_fit::{FitError, Measure, Point};

/// Every character is `advance * size` wide and every run is `height * size`
/// tall, so expected layouts can be worked out by hand.
#[derive(Debug, Copy, Clone)]
pub struct FixedAdvance {
    pub advance: f32,
    pub height: f32,
}

pub const ORACLE: FixedAdvance = FixedAdvance {
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

/// An oracle that cannot measure anything containing `bad`
pub struct MissingGlyph {
    pub bad: char,
}

impl Measure for MissingGlyph {
    fn bounding_polygon(&self, size: u32, angle: f32, text: &str) -> Result<[Point; 4], FitError> {
        if text.contains(self.bad) {
            return Err(FitError::MeasurementUnavailable {
                ch: self.bad,
                reason: "no glyph".into(),
            });
        }
        ORACLE.bounding_polygon(size, angle, text)
    }
}
