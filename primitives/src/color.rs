//! Packed colors and per-vertex paints.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use serde::{Deserialize, Serialize};

use crate::CodecError;

/// A color packed as `0xAARRGGBB`.
///
/// The viewer reads the low 24 bits as RGB. The high byte is an optional alpha
/// channel: [`Color::ALPHA_UNSET`] means no alpha was supplied and the color is
/// drawn opaque.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "i64")]
pub struct Color(pub u32);

impl Color {
    pub const RED: Self = Self(0x00ff_0000);
    pub const GREEN: Self = Self(0x0000_ff00);
    pub const BLUE: Self = Self(0x0000_00ff);
    pub const YELLOW: Self = Self(0x00ff_ff00);
    pub const MAGENTA: Self = Self(0x00ff_00ff);
    pub const CYAN: Self = Self(0x0000_ffff);
    pub const WHITE: Self = Self(0x00ff_ffff);
    pub const BLACK: Self = Self(0x0000_0000);
    /// Default stroke color of the viewer's own UI.
    pub const GRAY: Self = Self(0x0027_3142);

    /// No alpha supplied; drawn opaque.
    pub const ALPHA_UNSET: u8 = 0x00;
    /// Lowest explicit alpha. The primitive is effectively invisible.
    pub const ALPHA_INVISIBLE: u8 = 0x01;
    /// Half transparent.
    pub const ALPHA_HALF: u8 = 0x80;
    /// Explicitly opaque. Renders the same as [`Color::ALPHA_UNSET`].
    pub const ALPHA_OPAQUE: u8 = 0xff;

    /// Pack RGB channels with no alpha.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Pack RGB channels with an explicit alpha.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgb(r, g, b).with_alpha(a)
    }

    /// Replace the alpha byte, keeping the RGB channels.
    #[must_use]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0x00ff_ffff) | ((alpha as u32) << 24))
    }

    #[must_use]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[must_use]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[must_use]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[must_use]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

/// Signed values come from clients that pack ARGB into a signed 32-bit int.
impl TryFrom<i64> for Color {
    type Error = CodecError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if let Ok(unsigned) = u32::try_from(value) {
            return Ok(Self(unsigned));
        }
        match i32::try_from(value) {
            Ok(signed) => Ok(Self(signed.cast_unsigned())),
            Err(_) => Err(CodecError::ColorOutOfRange(value)),
        }
    }
}

/// Fill color of a rectangle or triangle: one color, or one per vertex.
///
/// A solid paint encodes as a bare integer, a per-vertex paint as an array.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Paint {
    /// One color for the whole shape.
    Solid(Color),
    /// One color per vertex, in vertex order.
    Vertex(Vec<Color>),
}

impl Paint {
    /// Colors in vertex order. A solid paint yields one color.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        match self {
            Self::Solid(color) => std::slice::from_ref(color),
            Self::Vertex(colors) => colors,
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

impl<const N: usize> From<[Color; N]> for Paint {
    fn from(colors: [Color; N]) -> Self {
        Self::Vertex(colors.to_vec())
    }
}
