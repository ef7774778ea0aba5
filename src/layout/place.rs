use crate::measure::{measure, Measure};
use crate::units::{Point, Px};
use crate::FitError;
use serde::Serialize;

/// A line of text at a fixed size, positioned on the canvas. `origin` is the
/// pen position where drawing starts: `x` is the left edge of the run and `y`
/// is its baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedLine {
    pub text: String,
    pub size: u32,
    pub angle: f32,
    pub origin: Point,
}

/// Positions a block of lines so that the block is vertically centred on
/// `centre` and every line is horizontally centred on it on its own.
///
/// The block is `lines.len() * pitch` tall. Line `i` has its baseline at
/// `top + i * pitch + height(line)`, treating each line's measured height as
/// its ascent.
pub fn place_block<M: Measure + ?Sized, S: AsRef<str>>(
    oracle: &M,
    lines: &[S],
    pitch: Px,
    size: u32,
    angle: f32,
    centre: (Px, Px),
) -> Result<Vec<PlacedLine>, FitError> {
    let (centre_x, centre_y) = centre;
    let total_height = pitch * lines.len() as f32;
    let top = centre_y - total_height / 2.0;

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let line = line.as_ref();
            let m = measure(oracle, size, angle, line)?;
            Ok(PlacedLine {
                text: line.to_string(),
                size,
                angle,
                origin: Point {
                    x: centre_x - m.width / 2.0,
                    y: top + pitch * i as f32 + m.height,
                },
            })
        })
        .collect()
}

/// Positions a single horizontal line so that it ends at `right`, sitting on
/// `baseline`
pub fn place_right_aligned<M: Measure + ?Sized>(
    oracle: &M,
    text: &str,
    size: u32,
    right: Px,
    baseline: Px,
) -> Result<PlacedLine, FitError> {
    let m = measure(oracle, size, 0.0, text)?;
    Ok(PlacedLine {
        text: text.to_string(),
        size,
        angle: 0.0,
        origin: Point {
            x: right - m.width,
            y: baseline,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ORACLE;

    #[test]
    fn centres_each_line_on_its_own() {
        let centre = (Px(400.0), Px(300.0));
        let placed = place_block(&ORACLE, &["abcd", "ab"], Px(24.0), 20, 0.0, centre).unwrap();

        // block is 48 tall, so the top sits at 276
        assert_eq!(placed[0].origin, Point::new(380.0, 296.0));
        assert_eq!(placed[1].origin, Point::new(390.0, 320.0));
        assert_eq!(placed[0].text, "abcd");
        assert_eq!(placed[1].size, 20);
    }

    #[test]
    fn a_single_line_box_is_centred() {
        // with the pitch equal to the line's height, the line's box straddles the centre
        let centre = (Px(100.0), Px(50.0));
        let placed = place_block(&ORACLE, &["abcdef"], Px(10.0), 10, 0.0, centre).unwrap();
        assert_eq!(placed[0].origin, Point::new(85.0, 55.0));
    }

    #[test]
    fn preserves_reading_order() {
        let lines = vec!["one".to_string(), "two".to_string(), "three".to_string()];
        let placed = place_block(&ORACLE, &lines, Px(12.0), 10, 0.0, (Px(0.0), Px(0.0))).unwrap();
        let texts: Vec<&str> = placed.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, ["one", "two", "three"]);
        assert!(placed.windows(2).all(|w| w[0].origin.y < w[1].origin.y));
    }

    #[test]
    fn empty_blocks_place_nothing() {
        let lines: [&str; 0] = [];
        let placed = place_block(&ORACLE, &lines, Px(12.0), 10, 0.0, (Px(0.0), Px(0.0))).unwrap();
        assert!(placed.is_empty());
    }

    #[test]
    fn right_alignment() {
        let placed = place_right_aligned(&ORACLE, "(src)", 10, Px(1560.0), Px(860.0)).unwrap();
        assert_eq!(placed.origin, Point::new(1535.0, 860.0));
        assert_eq!(placed.angle, 0.0);
    }
}
