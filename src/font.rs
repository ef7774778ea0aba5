use crate::units::{Point, Px};
use crate::{FitError, Measure, RenderError};
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};
use std::path::{Path, PathBuf};

/// A parsed, scalable outline font. Fonts can be TTF or OTF fonts.
///
/// A font is the "font resource" handed to every fitting function: it is
/// never mutated once loaded, so a single font can be shared between any
/// number of concurrent renders.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, RenderError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Read and parse a font file from disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Font, RenderError> {
        let bytes = std::fs::read(path)?;
        Self::load(bytes)
    }

    /// Resolve the first candidate that can be read and parsed, in priority order.
    /// Candidates that exist but fail to parse are skipped.
    pub fn first_available<P: AsRef<Path>>(
        candidates: &[P],
    ) -> Result<(PathBuf, Font), RenderError> {
        for candidate in candidates {
            let path = candidate.as_ref();
            if !path.is_file() {
                continue;
            }
            match Self::from_path(path) {
                Ok(font) => {
                    tracing::debug!(path = %path.display(), "resolved font");
                    return Ok((path.to_path_buf(), font));
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "skipping unusable font");
                }
            }
        }

        Err(RenderError::NoFontFound(
            candidates.iter().map(|c| c.as_ref().to_path_buf()).collect(),
        ))
    }

    /// The raw font file the face was parsed from
    pub fn data(&self) -> &[u8] {
        self.face.as_slice()
    }

    /// Obtain the full name of the font, if it has one
    pub fn name(&self) -> Option<String> {
        self.name_entry(owned_ttf_parser::name_id::FULL_NAME)
    }

    /// Obtain the family name of the font, if it has one
    pub fn family(&self) -> Option<String> {
        self.name_entry(owned_ttf_parser::name_id::FAMILY)
    }

    fn name_entry(&self, id: u16) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    fn scaling(&self, size: u32) -> f32 {
        size as f32 / self.face.as_face_ref().units_per_em() as f32
    }

    /// Look up the glyph for a character, if the font has one
    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    /// The glyph drawn in place of characters the font does not cover:
    /// U+FFFD if the font has it, otherwise `?`
    pub fn replacement_glyph_id(&self) -> Option<u16> {
        self.glyph_id('\u{FFFD}').or_else(|| self.glyph_id('?'))
    }

    /// The glyph used to both measure and draw `ch`, falling back to the
    /// replacement glyph
    pub fn resolve_glyph(&self, ch: char) -> Result<u16, FitError> {
        self.glyph_id(ch)
            .or_else(|| self.replacement_glyph_id())
            .ok_or_else(|| FitError::MeasurementUnavailable {
                ch,
                reason: "font has no glyph and no replacement glyph".into(),
            })
    }
}

impl Measure for Font {
    /// The ink box of the run: the union of every glyph's bounding box, each
    /// offset by the advances before it. Runs without ink (only spaces) span
    /// their advance width with zero height.
    fn bounding_polygon(&self, size: u32, angle: f32, text: &str) -> Result<[Point; 4], FitError> {
        let face = self.face.as_face_ref();
        let scaling = self.scaling(size);

        let mut pen = 0.0f32;
        let mut ink: Option<(f32, f32, f32, f32)> = None;
        for ch in text.chars() {
            let gid = GlyphId(self.resolve_glyph(ch)?);
            if let Some(bbox) = face.glyph_bounding_box(gid) {
                let x1 = pen + bbox.x_min as f32;
                let x2 = pen + bbox.x_max as f32;
                let (y1, y2) = (bbox.y_min as f32, bbox.y_max as f32);
                ink = Some(match ink {
                    Some((ix1, iy1, ix2, iy2)) => {
                        (ix1.min(x1), iy1.min(y1), ix2.max(x2), iy2.max(y2))
                    }
                    None => (x1, y1, x2, y2),
                });
            }
            pen += face.glyph_hor_advance(gid).unwrap_or_default() as f32;
        }

        let (x1, y1, x2, y2) = ink.unwrap_or((0.0, 0.0, pen, 0.0));

        // font units have y pointing up; the canvas has it pointing down
        let corner = |x: f32, y: f32| Point::new(x * scaling, -y * scaling).rotated(angle);
        Ok([
            corner(x1, y1),
            corner(x2, y1),
            corner(x2, y2),
            corner(x1, y2),
        ])
    }
}

/// The fonts tried when no font is configured, in priority order
pub fn default_font_candidates() -> Vec<PathBuf> {
    vec![
        PathBuf::from("assets/font.ttf"),
        PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
        PathBuf::from("/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf"),
        PathBuf::from("/usr/share/fonts/truetype/freefont/FreeSans.ttf"),
    ]
}
