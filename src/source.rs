//! Source image decoding.
//!
//! Decodes PNG sprite artwork into an RGBA pixel buffer the encoder can
//! consume. Whatever layout the PNG uses is normalised the same way an
//! RGBA conversion would: gray is replicated into all three color
//! channels and images without alpha become fully opaque.

use std::path::{Path, PathBuf};

use zune_core::result::DecodingResult;
use zune_png::PngDecoder;

use crate::sprite::{self, EncodeError, EncodeOptions, Pixel, OPAQUE};

/// Errors that can occur while loading a source image.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read image '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode PNG '{}': {message}", path.display())]
    Decode { path: PathBuf, message: String },

    #[error("PNG header did not report image dimensions")]
    MissingHeader,

    #[error("unsupported pixel layout with {channels} channel(s) per pixel")]
    UnsupportedLayout { channels: usize },

    #[error("unsupported sample depth")]
    UnsupportedDepth,

    #[error(transparent)]
    Shape(#[from] EncodeError),
}

/// Channel layout of decoded samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Luma,
    LumaAlpha,
    Rgb,
    Rgba,
}

impl Layout {
    fn from_channels(channels: usize) -> Option<Self> {
        match channels {
            1 => Some(Layout::Luma),
            2 => Some(Layout::LumaAlpha),
            3 => Some(Layout::Rgb),
            4 => Some(Layout::Rgba),
            _ => None,
        }
    }

    pub fn channels(&self) -> usize {
        match self {
            Layout::Luma => 1,
            Layout::LumaAlpha => 2,
            Layout::Rgb => 3,
            Layout::Rgba => 4,
        }
    }

    fn pixel(&self, px: &[u8]) -> Pixel {
        match self {
            Layout::Luma => Pixel::new(px[0], px[0], px[0], OPAQUE),
            Layout::LumaAlpha => Pixel::new(px[0], px[0], px[0], px[1]),
            Layout::Rgb => Pixel::new(px[0], px[1], px[2], OPAQUE),
            Layout::Rgba => Pixel::new(px[0], px[1], px[2], px[3]),
        }
    }
}

/// A decoded image ready for encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Pixels in row-major order
    pub pixels: Vec<Pixel>,
}

impl SourceImage {
    /// Read and decode a PNG file.
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let bytes = std::fs::read(path).map_err(|e| SourceError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let image = Self::from_png_bytes(&bytes).map_err(|e| match e {
            SourceError::Decode { message, .. } => SourceError::Decode {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })?;

        log::debug!(
            "Decoded {:?}: {}x{} ({} bytes)",
            path,
            image.width,
            image.height,
            bytes.len()
        );
        Ok(image)
    }

    /// Decode an in-memory PNG.
    ///
    /// 16-bit samples are truncated to their high byte.
    pub fn from_png_bytes(bytes: &[u8]) -> Result<Self, SourceError> {
        let mut decoder = PngDecoder::new(bytes);
        decoder.decode_headers().map_err(|e| SourceError::Decode {
            path: PathBuf::new(),
            message: format!("{:?}", e),
        })?;

        let (width, height) = decoder.get_dimensions().ok_or(SourceError::MissingHeader)?;
        let samples = match decoder.decode().map_err(|e| SourceError::Decode {
            path: PathBuf::new(),
            message: format!("{:?}", e),
        })? {
            DecodingResult::U8(data) => data,
            DecodingResult::U16(data) => data.iter().map(|&s| (s >> 8) as u8).collect(),
            _ => return Err(SourceError::UnsupportedDepth),
        };

        Self::from_samples(width, height, &samples)
    }

    /// Build from a raw RGBA buffer (four bytes per pixel).
    pub fn from_rgba(width: u32, height: u32, bytes: &[u8]) -> Result<Self, SourceError> {
        if width == 0 || height == 0 {
            return Err(EncodeError::InvalidDimension { width, height }.into());
        }
        let pixels = sprite::pixels_from_rgba(bytes)?;
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(EncodeError::ShapeMismatch {
                expected,
                actual: pixels.len(),
            }
            .into());
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Interpret 8-bit samples whose layout is inferred from the sample count.
    fn from_samples(width: usize, height: usize, samples: &[u8]) -> Result<Self, SourceError> {
        let pixel_count = width * height;
        if pixel_count == 0 {
            return Err(EncodeError::InvalidDimension {
                width: width as u32,
                height: height as u32,
            }
            .into());
        }
        if samples.len() % pixel_count != 0 {
            return Err(SourceError::UnsupportedLayout {
                channels: samples.len() / pixel_count,
            });
        }

        let channels = samples.len() / pixel_count;
        let layout =
            Layout::from_channels(channels).ok_or(SourceError::UnsupportedLayout { channels })?;
        log::trace!("PNG layout {:?} ({} channels)", layout, channels);

        let pixels = samples
            .chunks_exact(layout.channels())
            .map(|px| layout.pixel(px))
            .collect();

        Ok(Self {
            width: width as u32,
            height: height as u32,
            pixels,
        })
    }

    /// Encode this image into sprite text.
    pub fn encode(&self, options: EncodeOptions) -> Result<String, EncodeError> {
        sprite::encode_with(&self.pixels, self.width, self.height, options)
    }

    /// Number of pixels that encode to the transparency sentinel.
    pub fn transparent_count(&self) -> usize {
        self.pixels.iter().filter(|p| !p.is_opaque()).count()
    }
}
