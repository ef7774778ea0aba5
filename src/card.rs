use crate::colour::Colour;
use crate::layout::{
    fit_label, fit_single_line, fit_with_wrap, place_right_aligned, Fit, LayoutResult, Margins,
    PlacedLine, Region, SizeBounds, WrapResult,
};
use crate::measure::{measure, Measure};
use crate::units::Px;
use crate::{Canvas, Diagnostics, Font, RasterSink, RenderConfig, RenderError, TextSink};
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, RgbaImage};
use serde::Serialize;
use serde_json::json;

/// The fitted source caption in the bottom right corner
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceLabel {
    pub fit: Fit,
    pub line: PlacedLine,
}

/// Everything needed to draw a card: the fitted main text, where each of its
/// lines goes, and the optional source caption
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardLayout {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub main: LayoutResult,
    pub lines: Vec<PlacedLine>,
    pub source: Option<SourceLabel>,
}

impl CardLayout {
    /// Emit every line of the card, main text first
    pub fn draw<S: TextSink + ?Sized>(
        &self,
        sink: &mut S,
        colour: Colour,
    ) -> Result<(), RenderError> {
        for line in &self.lines {
            sink.draw_text(line, colour)?;
        }
        if let Some(source) = &self.source {
            sink.draw_text(&source.line, colour)?;
        }
        Ok(())
    }
}

/// Lay out a card: fit `text` into the canvas inside its margins, centred,
/// with `source` (if any) as a parenthesised caption in the bottom right
/// corner. The main text is trimmed first and must not be empty.
pub fn compose<M: Measure + ?Sized>(
    config: &RenderConfig,
    font: &M,
    text: &str,
    source: Option<&str>,
    diagnostics: &mut Diagnostics,
) -> Result<CardLayout, RenderError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(RenderError::MissingText);
    }
    let source = source
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| format!("({s})"));

    let canvas_width = Px::from(config.canvas_width);
    let canvas_height = Px::from(config.canvas_height);
    let reserve = Px::from(config.bottom_reserve(source.is_some()));

    let margins = Margins::all(config.margin).with_extra_bottom(reserve);
    let inset = margins.inset(canvas_width, canvas_height);
    let region = Region::new(
        inset.width,
        inset.height.max(Px::from(config.min_available_height)),
    );
    let bounds = SizeBounds::new(config.min_font_size, config.max_font_size);

    let main = if config.wrap {
        fit_with_wrap(font, text, config.angle, region, bounds, diagnostics)?
    } else {
        let fit = fit_single_line(font, text, config.angle, region, bounds, diagnostics)?;
        // pitch equal to the line's own height centres its box exactly
        let pitch = measure(font, fit.size(), config.angle, text)?.height;
        LayoutResult {
            fit,
            wrap: WrapResult {
                lines: vec![text.to_string()],
                pitch,
            },
            region,
        }
    };

    let centre = (
        (canvas_width / 2.0).floor(),
        ((canvas_height - reserve) / 2.0).floor(),
    );
    let lines = main.place(font, config.angle, centre)?;

    diagnostics.record(
        "layout",
        json!({
            "canvas": { "width": config.canvas_width, "height": config.canvas_height },
            "available": region,
            "margins": { "outer": config.margin, "bottom_reserve": reserve },
            "font": { "main_size": main.size(), "angle": config.angle, "fit": main.fit },
            "wrap": { "lines": main.wrap.lines, "line_height": main.wrap.pitch },
        }),
    );

    let source = source
        .map(|source| -> Result<SourceLabel, RenderError> {
            let max_width = canvas_width - Px::from(config.source_margin) * 2.0;
            let fit = fit_label(
                font,
                &source,
                config.source_font_size,
                max_width,
                config.source_min_font_size,
                diagnostics,
            )?;
            let line = place_right_aligned(
                font,
                &source,
                fit.size(),
                canvas_width - Px::from(config.source_margin),
                canvas_height - Px::from(config.source_margin),
            )?;
            diagnostics.record(
                "label",
                json!({ "text": source, "size": fit.size(), "fit": fit }),
            );
            Ok(SourceLabel { fit, line })
        })
        .transpose()?;

    tracing::debug!(
        size = main.size(),
        lines = lines.len(),
        fitted = main.fit.is_fitted(),
        has_source = source.is_some(),
        "composed card"
    );

    Ok(CardLayout {
        canvas_width: config.canvas_width,
        canvas_height: config.canvas_height,
        main,
        lines,
        source,
    })
}

/// Resolve the first usable font in the configuration's candidates
pub fn resolve_font(
    config: &RenderConfig,
    diagnostics: &mut Diagnostics,
) -> Result<Font, RenderError> {
    let resolved = Font::first_available(&config.font_candidates);
    let selected = resolved.as_ref().ok().map(|(path, font)| {
        json!({
            "path": path,
            "name": font.name(),
            "family": font.family(),
        })
    });
    diagnostics.record(
        "fonts",
        json!({
            "candidates": config.font_candidates,
            "selected": selected,
        }),
    );
    resolved.map(|(_, font)| font)
}

/// Render a card into a new image: background, main text and caption
pub fn render_card(
    config: &RenderConfig,
    font: &Font,
    text: &str,
    source: Option<&str>,
    diagnostics: &mut Diagnostics,
) -> Result<RgbaImage, RenderError> {
    let layout = compose(config, font, text, source, diagnostics)?;

    let mut canvas = Canvas::with_background(
        config.canvas_width,
        config.canvas_height,
        config.background_colour,
        &config.background_candidates,
        diagnostics,
    );
    let mut sink = RasterSink::new(&mut canvas, font)?;
    layout.draw(&mut sink, config.text_colour)?;

    Ok(canvas.image)
}

/// Encode an image as PNG
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ColorType::Rgba8,
    )?;
    Ok(bytes)
}
