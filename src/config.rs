use crate::colour::{colours, Colour};
use crate::font::default_font_candidates;
use crate::RenderError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Everything that shapes a rendered card. Any field missing from a
/// configuration file keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Kept clear on every side of the main text
    pub margin: u32,
    /// Distance of the source caption from the bottom right corner
    pub source_margin: u32,
    pub max_font_size: u32,
    pub min_font_size: u32,
    /// The size the source caption starts shrinking from
    pub source_font_size: u32,
    /// The smallest size the source caption shrinks to
    pub source_min_font_size: u32,
    /// Extra room kept between the main text area and the caption
    pub source_padding: u32,
    /// The least height reserved for the caption when there is one
    pub min_bottom_reserve: u32,
    /// The main text area is never shorter than this, whatever the margins
    pub min_available_height: u32,
    /// Rotation of the main text, in degrees counter-clockwise
    pub angle: f32,
    /// Wrap the main text across lines, or keep it on one line
    pub wrap: bool,
    pub background_colour: Colour,
    pub text_colour: Colour,
    pub font_candidates: Vec<PathBuf>,
    pub background_candidates: Vec<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            canvas_width: 1600,
            canvas_height: 900,
            margin: 80,
            source_margin: 40,
            max_font_size: 120,
            min_font_size: 24,
            source_font_size: 28,
            source_min_font_size: 10,
            source_padding: 10,
            min_bottom_reserve: 70,
            min_available_height: 50,
            angle: 0.0,
            wrap: true,
            background_colour: colours::CHARCOAL,
            text_colour: colours::WHITE,
            font_candidates: default_font_candidates(),
            background_candidates: vec![
                PathBuf::from("assets/background.png"),
                PathBuf::from("assets/background.jpg"),
                PathBuf::from("assets/background.jpeg"),
            ],
        }
    }
}

impl RenderConfig {
    /// Parse a configuration. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<RenderConfig, RenderError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a configuration file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<RenderConfig, RenderError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// How much of the canvas bottom is set aside for a source caption
    pub fn bottom_reserve(&self, has_source: bool) -> u32 {
        if !has_source {
            return 0;
        }
        let caption = self.source_margin + self.source_font_size + self.source_padding;
        caption.max(self.min_bottom_reserve)
    }
}
