//! Font size fitting, line wrapping and placement.
//!
//! Everything in here is a pure function of its inputs and a [`Measure`]
//! oracle: nothing is cached between calls and nothing is shared between
//! requests.
//!
//! # Fitting functions
//!
//! - [`fit_single_line`](crate::layout::fit_single_line) - the largest size at which the text, unwrapped, fits a region
//! - [`fit_with_wrap`](crate::layout::fit_with_wrap) - the largest size at which the text, greedily wrapped, fits a region
//! - [`fit_label`](crate::layout::fit_label) - a short linear shrink for captions
//!
//! None of them fail when the text cannot fit: they fall back to the
//! smallest size allowed and say so with [`Fit::Overflowed`].
//!
//! # Example
//!
//! ```no_run
//! use text_fit::{Diagnostics, Font, Px};
//! use text_fit::layout::{fit_with_wrap, Region, SizeBounds};
//!
//! let font = Font::from_path("assets/font.ttf").expect("can load font");
//! let mut diagnostics = Diagnostics::disabled();
//!
//! let layout = fit_with_wrap(
//!     &font,
//!     "Hello, world!",
//!     0.0,
//!     Region::new(Px(1440.0), Px(740.0)),
//!     SizeBounds::new(24, 120),
//!     &mut diagnostics,
//! )
//! .expect("can measure text");
//!
//! let lines = layout.place(&font, 0.0, (Px(800.0), Px(450.0))).expect("can place text");
//! assert_eq!(lines.len(), layout.wrap.lines.len());
//! ```
//!
//! [`Measure`]: crate::Measure

mod fit;
mod margins;
mod place;
mod wrap;

pub use fit::*;
pub use margins::*;
pub use place::*;
pub use wrap::*;

use crate::units::Px;
use crate::FitError;
use serde::Serialize;

/// The inclusive range of font sizes a fitter may choose from
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct SizeBounds {
    pub min: u32,
    pub max: u32,
}

impl SizeBounds {
    /// Allow every size from `min` to `max`, inclusive
    pub fn new(min: u32, max: u32) -> SizeBounds {
        SizeBounds { min, max }
    }

    /// Sizes start at 1 and `min` must not exceed `max`
    pub fn validate(&self) -> Result<(), FitError> {
        if self.min == 0 {
            return Err(FitError::InvalidBounds(
                "minimum font size must be at least 1".into(),
            ));
        }
        if self.min > self.max {
            return Err(FitError::InvalidBounds(format!(
                "minimum font size {} exceeds maximum {}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// The area fitted content must stay within
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Region {
    pub width: Px,
    pub height: Px,
}

impl Region {
    /// Create a region of the given size
    pub fn new(width: Px, height: Px) -> Region {
        Region { width, height }
    }

    /// Both dimensions must be finite and positive
    pub fn validate(&self) -> Result<(), FitError> {
        if !self.width.is_positive() || !self.height.is_positive() {
            return Err(FitError::InvalidBounds(format!(
                "target region must have a positive area, got {} x {}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// The outcome of a font size search
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Fit {
    /// The content fits at this size
    Fitted(u32),
    /// Nothing in range fit; this is the best-effort size and the content
    /// will overflow its region
    Overflowed(u32),
}

impl Fit {
    /// The chosen size, whether or not the content fits at it
    pub fn size(self) -> u32 {
        match self {
            Fit::Fitted(size) | Fit::Overflowed(size) => size,
        }
    }

    pub fn is_fitted(self) -> bool {
        matches!(self, Fit::Fitted(_))
    }
}

/// Binary search the closed range `[low, high]` for the largest value the
/// probe accepts, returning it along with whatever the probe produced.
///
/// Acceptance must be monotonic: once a value is rejected, every larger value
/// is assumed to be rejected too.
pub(crate) fn search_largest<T, E>(
    low: u32,
    high: u32,
    mut probe: impl FnMut(u32) -> Result<Option<T>, E>,
) -> Result<Option<(u32, T)>, E> {
    let (mut low, mut high) = (low, high);
    let mut best = None;

    while low <= high {
        let mid = low + (high - low) / 2;
        match probe(mid)? {
            Some(found) => {
                best = Some((mid, found));
                match mid.checked_add(1) {
                    Some(next) => low = next,
                    None => break,
                }
            }
            None => match mid.checked_sub(1) {
                Some(prev) => high = prev,
                None => break,
            },
        }
    }

    Ok(best)
}
