mod canvas;
pub use canvas::*;

mod card;
pub use card::*;

mod colour;
pub use colour::*;

mod config;
pub use config::*;

mod diagnostics;
pub use diagnostics::*;

mod font;
pub use font::*;

/// Font size fitting, line wrapping and placement of text within a region
pub mod layout;

mod measure;
pub use measure::*;

mod sink;
pub use sink::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

#[cfg(test)]
pub(crate) mod testing;
