use crate::colour::Colour;
use crate::{Diagnostics, RenderError};
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};
use serde_json::json;
use std::path::Path;

/// The image text is drawn onto, pre-filled with its background
pub struct Canvas {
    pub image: RgbaImage,
}

impl Canvas {
    /// A canvas filled with a single colour
    pub fn solid(width: u32, height: u32, colour: Colour) -> Canvas {
        Canvas {
            image: RgbaImage::from_pixel(width, height, colour.to_rgba()),
        }
    }

    /// A canvas filled with `colour`, then covered by the first background
    /// candidate that exists on disk. The image is scaled to cover the whole
    /// canvas and centre-cropped. A background that fails to load is logged
    /// and leaves the solid fill in place.
    pub fn with_background<P: AsRef<Path>>(
        width: u32,
        height: u32,
        colour: Colour,
        candidates: &[P],
        diagnostics: &mut Diagnostics,
    ) -> Canvas {
        let mut canvas = Canvas::solid(width, height, colour);

        let selected = candidates.iter().map(|p| p.as_ref()).find(|p| p.is_file());
        let loaded = match selected {
            Some(path) => match load_image(path) {
                Ok(background) => {
                    canvas.cover_with(&background);
                    true
                }
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        %err,
                        "unable to load background, using solid fill"
                    );
                    false
                }
            },
            None => false,
        };

        if diagnostics.is_enabled() {
            let tried: Vec<String> = candidates
                .iter()
                .map(|p| p.as_ref().display().to_string())
                .collect();
            diagnostics.record(
                "assets",
                json!({
                    "background_candidates": tried,
                    "background_selected": selected.map(|p| p.display().to_string()),
                    "background_loaded": loaded,
                }),
            );
        }

        canvas
    }

    /// Width of the canvas in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height of the canvas in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Scale `background` so it covers the canvas, then crop it about its centre
    pub fn cover_with(&mut self, background: &DynamicImage) {
        if background.width() == 0 || background.height() == 0 {
            return;
        }
        let covered = background
            .resize_to_fill(self.width(), self.height(), FilterType::CatmullRom)
            .to_rgba8();
        imageops::overlay(&mut self.image, &covered, 0, 0);
    }
}

fn load_image(path: &Path) -> Result<DynamicImage, RenderError> {
    let data = std::fs::read(path)?;
    let format = image::guess_format(&data)?;
    Ok(image::load_from_memory_with_format(&data, format)?)
}
