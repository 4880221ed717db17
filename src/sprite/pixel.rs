//! Pixel and token types for the sprite text format.

use std::fmt;

use super::error::EncodeError;

/// Alpha value of a fully opaque pixel.
pub const OPAQUE: u8 = 255;

/// Largest token a packed RGB color can produce (0xFFFFFF).
pub const MAX_COLOR_TOKEN: i32 = 0x00FF_FFFF;

/// Token written for any pixel that is not fully opaque.
pub const TRANSPARENT_TOKEN: i32 = -1;

/// A single RGBA pixel with 8-bit channels.
///
/// Channels are `u8`, so out-of-range channel values cannot be
/// constructed; decoders truncate wider samples before building pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque pixel.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, OPAQUE)
    }

    pub const fn is_opaque(&self) -> bool {
        self.a == OPAQUE
    }

    /// Token for this pixel.
    pub fn token(self) -> Token {
        Token::from_pixel(self)
    }
}

impl From<[u8; 4]> for Pixel {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<(u8, u8, u8, u8)> for Pixel {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::new(r, g, b, a)
    }
}

/// One value of the sprite text format.
///
/// Either a packed 24-bit RGB color or the transparency sentinel `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Fully opaque pixel, red in the most significant byte.
    Color(u32),
    /// Any pixel whose alpha is not 255, partial alpha included.
    Transparent,
}

impl Token {
    /// Encode a pixel.
    ///
    /// Alpha strictly between 0 and 255 is treated the same as 0.
    pub fn from_pixel(pixel: Pixel) -> Self {
        if !pixel.is_opaque() {
            return Token::Transparent;
        }
        Token::Color(((pixel.r as u32) << 16) | ((pixel.g as u32) << 8) | pixel.b as u32)
    }

    pub fn is_transparent(&self) -> bool {
        matches!(self, Token::Transparent)
    }

    /// Signed integer value as written to the sprite text.
    pub fn value(&self) -> i32 {
        match *self {
            Token::Color(rgb) => rgb as i32,
            Token::Transparent => TRANSPARENT_TOKEN,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Color(rgb) => write!(f, "{}", rgb),
            Token::Transparent => write!(f, "{}", TRANSPARENT_TOKEN),
        }
    }
}

/// View a flat RGBA byte buffer as pixels.
///
/// Fails with [`EncodeError::ShapeMismatch`] when the byte count is not a
/// multiple of four.
pub fn pixels_from_rgba(bytes: &[u8]) -> Result<Vec<Pixel>, EncodeError> {
    if bytes.len() % 4 != 0 {
        return Err(EncodeError::ShapeMismatch {
            expected: bytes.len().div_ceil(4) * 4,
            actual: bytes.len(),
        });
    }

    Ok(bytes
        .chunks_exact(4)
        .map(|px| Pixel::new(px[0], px[1], px[2], px[3]))
        .collect())
}
