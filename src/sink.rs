use crate::colour::Colour;
use crate::layout::PlacedLine;
use crate::{Canvas, Font, RenderError};
use image::RgbaImage;

/// Something placed lines of text can be drawn onto. Sinks are write-only:
/// layout never reads anything back from them.
pub trait TextSink {
    fn draw_text(&mut self, line: &PlacedLine, colour: Colour) -> Result<(), RenderError>;
}

/// A single recorded [TextSink::draw_text] call
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub line: PlacedLine,
    pub colour: Colour,
}

/// A sink that only records what it was asked to draw
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl TextSink for DrawList {
    fn draw_text(&mut self, line: &PlacedLine, colour: Colour) -> Result<(), RenderError> {
        self.commands.push(DrawCommand {
            line: line.clone(),
            colour,
        });
        Ok(())
    }
}

/// Rasterizes glyphs straight onto a canvas, blending each glyph's coverage
/// over what is already there. Origins snap to the pixel grid by flooring.
/// Only horizontal text can be drawn.
///
/// Glyphs are chosen by [Font::resolve_glyph], the same lookup measurement
/// uses, so missing characters are drawn with the replacement glyph they were
/// measured with.
pub struct RasterSink<'a> {
    image: &'a mut RgbaImage,
    font: &'a Font,
    raster: fontdue::Font,
}

impl<'a> RasterSink<'a> {
    /// Draw onto `canvas` with the outlines of `font`
    pub fn new(canvas: &'a mut Canvas, font: &'a Font) -> Result<RasterSink<'a>, RenderError> {
        let raster = fontdue::Font::from_bytes(font.data(), fontdue::FontSettings::default())
            .map_err(|err| RenderError::Rasterizer(err.to_string()))?;

        Ok(RasterSink {
            image: &mut canvas.image,
            font,
            raster,
        })
    }

    fn blend(&mut self, x: i64, y: i64, coverage: u8, colour: Colour) {
        if coverage == 0
            || x < 0
            || y < 0
            || x >= self.image.width() as i64
            || y >= self.image.height() as i64
        {
            return;
        }

        let alpha = coverage as f32 / 255.0;
        let pixel = self.image.get_pixel_mut(x as u32, y as u32);
        for (dst, src) in pixel.0.iter_mut().zip([colour.r, colour.g, colour.b]) {
            *dst = (src as f32 * alpha + *dst as f32 * (1.0 - alpha)).round() as u8;
        }
    }
}

impl TextSink for RasterSink<'_> {
    fn draw_text(&mut self, line: &PlacedLine, colour: Colour) -> Result<(), RenderError> {
        if line.angle != 0.0 {
            return Err(RenderError::UnsupportedAngle(line.angle));
        }

        let px = line.size as f32;
        let baseline = line.origin.y.floor().0 as i64;
        let mut pen = line.origin.x.floor().0;

        for ch in line.text.chars() {
            let glyph = self.font.resolve_glyph(ch)?;
            let (metrics, coverage) = self.raster.rasterize_indexed(glyph, px);
            // ymin is the distance from the baseline up to the bitmap's bottom row
            let left = (pen + metrics.xmin as f32).round() as i64;
            let top = baseline - metrics.height as i64 - metrics.ymin as i64;

            if metrics.width > 0 {
                for (row, scanline) in coverage.chunks(metrics.width).enumerate() {
                    for (col, &value) in scanline.iter().enumerate() {
                        self.blend(left + col as i64, top + row as i64, value, colour);
                    }
                }
            }

            pen += metrics.advance_width;
        }

        tracing::trace!(text = %line.text, size = line.size, "rasterized line");
        Ok(())
    }
}
