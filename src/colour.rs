use image::Rgba;
use serde::{Deserialize, Serialize};

/// An opaque colour in the sRGB space, one byte per channel.
///
/// Serialized as a `[r, g, b]` array so configuration files stay terse.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour, r, g, and b range from 0 to 255
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b }
    }

    /// Create a new shade of grey, g ranges from 0 to 255
    pub const fn new_grey(g: u8) -> Colour {
        Colour { r: g, g, b: g }
    }

    /// The opaque pixel value of the colour
    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 255])
    }
}

impl From<[u8; 3]> for Colour {
    fn from(c: [u8; 3]) -> Self {
        let [r, g, b] = c;
        Colour { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Colour {
    fn from(c: (u8, u8, u8)) -> Self {
        Colour {
            r: c.0,
            g: c.1,
            b: c.2,
        }
    }
}

impl From<Colour> for [u8; 3] {
    fn from(c: Colour) -> Self {
        [c.r, c.g, c.b]
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::new_grey(0);
    pub const WHITE: Colour = Colour::new_grey(255);
    /// The dark grey cards fall back to when there is no background image
    pub const CHARCOAL: Colour = Colour::new_grey(46);
    pub const RED: Colour = Colour::new_rgb(255, 0, 0);
}
