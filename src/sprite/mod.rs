//! Sprite text encoder.
//!
//! Turns a decoded RGBA pixel buffer into the line-oriented decimal token
//! format read by the game's sprite loader:
//!
//! - one line per image row, rows top to bottom
//! - one token per pixel, left to right, each followed by a single space
//! - opaque pixels become `(r << 16) | (g << 8) | b`
//! - every other pixel becomes `-1`
//!
//! ```text
//! 0 16777215 -1 \n
//! ```

mod encoder;
mod error;
mod pixel;

pub use encoder::{encode, encode_to, encode_with, EncodeOptions};
pub use error::EncodeError;
pub use pixel::{pixels_from_rgba, Pixel, Token, MAX_COLOR_TOKEN, OPAQUE, TRANSPARENT_TOKEN};
