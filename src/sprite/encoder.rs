//! Row-major serialization of pixel buffers into sprite text.

use std::fmt::Write as _;
use std::io;

use super::error::EncodeError;
use super::pixel::{Pixel, Token};

/// Longest token plus its separator ("16777215 ").
const MAX_TOKEN_WIDTH: usize = 9;

/// Options controlling the text layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Write a space after the last token of each line as well.
    ///
    /// Existing sprite readers were fed files with the trailing space, so
    /// this stays on unless explicitly configured off.
    pub trailing_space: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            trailing_space: true,
        }
    }
}

/// Encode a pixel buffer into sprite text with the default layout.
///
/// # Arguments
/// * `pixels` - Pixels in row-major order, exactly `width * height` of them
/// * `width` - Image width in pixels (tokens per line)
/// * `height` - Image height in pixels (number of lines)
///
/// # Returns
/// The sprite text: `height` lines of `width` decimal tokens, each token
/// followed by a space and each line terminated by `\n`.
///
/// # Example
/// ```
/// use png2spr::sprite::{encode, Pixel};
///
/// let pixels = [Pixel::opaque(255, 0, 0), Pixel::opaque(0, 255, 0)];
/// assert_eq!(encode(&pixels, 1, 2).unwrap(), "16711680 \n65280 \n");
/// ```
pub fn encode(pixels: &[Pixel], width: u32, height: u32) -> Result<String, EncodeError> {
    encode_with(pixels, width, height, EncodeOptions::default())
}

/// Encode a pixel buffer into sprite text using explicit options.
pub fn encode_with(
    pixels: &[Pixel],
    width: u32,
    height: u32,
    options: EncodeOptions,
) -> Result<String, EncodeError> {
    let row_len = validate(pixels, width, height)?;

    let mut out = String::with_capacity(pixels.len() * MAX_TOKEN_WIDTH + height as usize);
    for row in pixels.chunks_exact(row_len) {
        push_row(row, options, &mut out);
    }

    Ok(out)
}

/// Encode a pixel buffer straight into a writer.
///
/// Dimensions are validated before anything is written. Each row is
/// formatted into a reused line buffer and handed to the writer in one
/// call, so wrap unbuffered sinks in a `BufWriter` only for very wide
/// images.
pub fn encode_to<W: io::Write>(
    pixels: &[Pixel],
    width: u32,
    height: u32,
    options: EncodeOptions,
    writer: &mut W,
) -> Result<(), EncodeError> {
    let row_len = validate(pixels, width, height)?;

    let mut line = String::with_capacity(row_len * MAX_TOKEN_WIDTH + 1);
    for row in pixels.chunks_exact(row_len) {
        line.clear();
        push_row(row, options, &mut line);
        writer.write_all(line.as_bytes())?;
    }
    writer.flush()?;

    Ok(())
}

/// Check the buffer shape and return the row length.
fn validate(pixels: &[Pixel], width: u32, height: u32) -> Result<usize, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimension { width, height });
    }

    let expected = (width as usize)
        .checked_mul(height as usize)
        .ok_or(EncodeError::InvalidDimension { width, height })?;

    if pixels.len() != expected {
        return Err(EncodeError::ShapeMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    Ok(width as usize)
}

fn push_row(row: &[Pixel], options: EncodeOptions, out: &mut String) {
    let last = row.len() - 1;
    for (x, &pixel) in row.iter().enumerate() {
        // Writing into a String cannot fail
        let _ = write!(out, "{}", Token::from_pixel(pixel));
        if x != last || options.trailing_space {
            out.push(' ');
        }
    }
    out.push('\n');
}
