//! Encoder error types

/// Errors that can occur while encoding a pixel buffer.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// Width or height is zero
    #[error("invalid dimensions {width}x{height}: width and height must be greater than 0")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel count does not match width * height
    #[error("pixel buffer has {actual} entries, expected {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Writer failed during streaming output
    #[error("failed to write sprite text: {0}")]
    Io(#[from] std::io::Error),
}
