use super::{search_largest, wrap, Fit, PlacedLine, Region, SizeBounds};
use crate::measure::{measure, width_of_text, Measure};
use crate::units::Px;
use crate::{Diagnostics, FitError};
use serde::Serialize;
use serde_json::json;

/// Measured to find a line pitch: it has both ascenders and descenders, so the
/// pitch doesn't depend on which glyphs a given line happens to contain
pub const PITCH_PROBE: &str = "AyjgqH";

/// Extra room left between lines, as a multiple of the probe's height
pub const LINE_SPACING: f64 = 1.2;

/// How far [`fit_label`] shrinks per step
pub const LABEL_STEP: u32 = 2;

/// Lines of wrapped text and the vertical distance between them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WrapResult {
    pub lines: Vec<String>,
    pub pitch: Px,
}

impl WrapResult {
    /// The height of the whole block of lines
    pub fn height(&self) -> Px {
        self.pitch * self.lines.len() as f32
    }
}

/// The chosen size and line breaks for a block of text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutResult {
    pub fit: Fit,
    pub wrap: WrapResult,
    /// The region the layout was fitted into
    pub region: Region,
}

impl LayoutResult {
    pub fn size(&self) -> u32 {
        self.fit.size()
    }

    /// Centre the laid out lines on `centre`
    pub fn place<M: Measure + ?Sized>(
        &self,
        oracle: &M,
        angle: f32,
        centre: (Px, Px),
    ) -> Result<Vec<PlacedLine>, FitError> {
        super::place_block(
            oracle,
            &self.wrap.lines,
            self.wrap.pitch,
            self.size(),
            angle,
            centre,
        )
    }
}

/// Estimate a stable line pitch for the given size: the height of
/// [`PITCH_PROBE`] times [`LINE_SPACING`], rounded up to a whole pixel
pub fn estimate_pitch<M: Measure + ?Sized>(
    oracle: &M,
    size: u32,
    angle: f32,
) -> Result<Px, FitError> {
    let probe = measure(oracle, size, angle, PITCH_PROBE)?;
    Ok(Px((probe.height.0 as f64 * LINE_SPACING).ceil() as f32))
}

/// Find the largest size in `bounds` at which `text`, on a single line, fits
/// within `region`. If no size fits, the minimum size is returned as
/// [`Fit::Overflowed`].
pub fn fit_single_line<M: Measure + ?Sized>(
    oracle: &M,
    text: &str,
    angle: f32,
    region: Region,
    bounds: SizeBounds,
    diagnostics: &mut Diagnostics,
) -> Result<Fit, FitError> {
    bounds.validate()?;
    region.validate()?;

    let best = search_largest(bounds.min, bounds.max, |size| {
        let m = measure(oracle, size, angle, text)?;
        let feasible = m.width <= region.width && m.height <= region.height;
        tracing::trace!(size, width = %m.width, height = %m.height, feasible, "single line probe");
        diagnostics.push(
            "search",
            json!({
                "mode": "single",
                "size": size,
                "width": m.width,
                "height": m.height,
                "feasible": feasible,
            }),
        );
        Ok::<_, FitError>(feasible.then_some(()))
    })?;

    let fit = match best {
        Some((size, ())) => Fit::Fitted(size),
        None => Fit::Overflowed(bounds.min),
    };
    tracing::debug!(?fit, "fitted single line");
    Ok(fit)
}

/// Find the largest size in `bounds` at which `text`, wrapped with [`wrap`] to
/// the region's width, is no taller than the region.
///
/// Width is enforced by the wrapper, line by line; this search only checks the
/// block's height (`lines * pitch`). If no size fits, the layout produced at
/// the minimum size is returned as [`Fit::Overflowed`].
pub fn fit_with_wrap<M: Measure + ?Sized>(
    oracle: &M,
    text: &str,
    angle: f32,
    region: Region,
    bounds: SizeBounds,
    diagnostics: &mut Diagnostics,
) -> Result<LayoutResult, FitError> {
    bounds.validate()?;
    region.validate()?;

    let wrap_at = |size: u32| -> Result<WrapResult, FitError> {
        let lines = wrap(oracle, text, angle, size, region.width)?;
        let pitch = estimate_pitch(oracle, size, angle)?;
        Ok(WrapResult { lines, pitch })
    };

    let best = search_largest(bounds.min, bounds.max, |size| {
        let wrapped = wrap_at(size)?;
        let feasible = wrapped.height() <= region.height;
        tracing::trace!(
            size,
            lines = wrapped.lines.len(),
            pitch = %wrapped.pitch,
            feasible,
            "wrapped probe"
        );
        diagnostics.push(
            "search",
            json!({
                "mode": "wrap",
                "size": size,
                "lines": wrapped.lines.len(),
                "pitch": wrapped.pitch,
                "feasible": feasible,
            }),
        );
        Ok::<_, FitError>(feasible.then_some(wrapped))
    })?;

    let (fit, wrap) = match best {
        Some((size, wrapped)) => (Fit::Fitted(size), wrapped),
        None => (Fit::Overflowed(bounds.min), wrap_at(bounds.min)?),
    };
    tracing::debug!(?fit, lines = wrap.lines.len(), pitch = %wrap.pitch, "fitted wrapped text");

    Ok(LayoutResult { fit, wrap, region })
}

/// Shrink a short label from `start` in steps of [`LABEL_STEP`] until it is no
/// wider than `max_width`, never going below `floor`. Labels are measured
/// horizontally.
pub fn fit_label<M: Measure + ?Sized>(
    oracle: &M,
    text: &str,
    start: u32,
    max_width: Px,
    floor: u32,
    diagnostics: &mut Diagnostics,
) -> Result<Fit, FitError> {
    SizeBounds::new(floor, start).validate()?;

    let mut size = start;
    let fit = loop {
        let width = width_of_text(oracle, size, 0.0, text)?;
        let fits = width <= max_width;
        tracing::trace!(size, width = %width, fits, "label probe");
        diagnostics.push(
            "search",
            json!({ "mode": "label", "size": size, "width": width, "feasible": fits }),
        );

        if fits {
            break Fit::Fitted(size);
        }
        if size <= floor {
            break Fit::Overflowed(size);
        }
        size = size.saturating_sub(LABEL_STEP).max(floor);
    };

    tracing::debug!(?fit, "fitted label");
    Ok(fit)
}
