use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the fitting and layout algorithms themselves
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FitError {
    /// The measurement oracle could not measure the text. There is no
    /// fallback measurement, so this aborts the whole fit
    #[error("unable to measure {ch:?}: {reason}")]
    MeasurementUnavailable { ch: char, reason: String },

    /// The caller broke the contract of a fitting function, e.g. by passing
    /// a minimum size above the maximum or a region with no area
    #[error("invalid bounds: {0}")]
    InvalidBounds(String),
}

/// All errors that rendering a card can generate
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    /// Fitting the text failed
    Fit(#[from] FitError),

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [image] failed to decode a background or encode the output
    Image(#[from] image::ImageError),

    #[error(transparent)]
    /// A configuration file or diagnostics dump could not be (de)serialized
    Json(#[from] serde_json::Error),

    #[error("missing text to render")]
    /// The text was empty once surrounding whitespace was removed
    MissingText,

    #[error("no usable font found, tried {0:?}")]
    /// None of the font candidates could be read and parsed
    NoFontFound(Vec<PathBuf>),

    #[error("rasterizer failed: {0}")]
    /// The glyph rasterizer rejected the font
    Rasterizer(String),

    #[error("rotated text ({0} degrees) cannot be rasterized")]
    /// The raster sink only draws horizontal text
    UnsupportedAngle(f32),
}
