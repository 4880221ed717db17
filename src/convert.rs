//! Conversion pipeline: PNG file in, sprite text file out.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::paths::{PathError, SpritePaths};
use crate::source::{SourceError, SourceImage};
use crate::sprite::{EncodeError, EncodeOptions};

/// Errors that can occur while converting a single sprite.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("source image '{}' does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("failed to encode sprite: {0}")]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error("destination '{}' is the source image; refusing to overwrite it", path.display())]
    SameFile { path: PathBuf },

    #[error("failed to write sprite '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub width: u32,
    pub height: u32,
    pub bytes_written: usize,
    pub transparent: usize,
}

impl fmt::Display for ConvertSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({}x{}, {} transparent)",
            self.source.display(),
            self.destination.display(),
            self.width,
            self.height,
            self.transparent
        )
    }
}

/// Convert one PNG file into a sprite file.
///
/// The sprite text is encoded completely before the destination is
/// touched, so a failed decode or encode never leaves a partial file.
/// Missing parent directories of `dst` are created. A destination that
/// resolves to the source file is rejected before anything is read.
pub fn convert_file(
    src: &Path,
    dst: &Path,
    options: EncodeOptions,
) -> Result<ConvertSummary, ConvertError> {
    if !src.exists() {
        return Err(ConvertError::NotFound {
            path: src.to_path_buf(),
        });
    }
    if is_same_file(src, dst) {
        return Err(ConvertError::SameFile {
            path: dst.to_path_buf(),
        });
    }

    let image = SourceImage::open(src)?;
    let text = image.encode(options)?;

    let write_err = |e| ConvertError::Write {
        path: dst.to_path_buf(),
        source: e,
    };
    if let Some(parent) = dst.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(dst, &text).map_err(write_err)?;

    let summary = ConvertSummary {
        source: src.to_path_buf(),
        destination: dst.to_path_buf(),
        width: image.width,
        height: image.height,
        bytes_written: text.len(),
        transparent: image.transparent_count(),
    };
    log::info!("Wrote {} ({} bytes)", summary, summary.bytes_written);

    Ok(summary)
}

/// Whether both paths name the same existing file.
fn is_same_file(src: &Path, dst: &Path) -> bool {
    match (std::fs::canonicalize(src), std::fs::canonicalize(dst)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Convert a named sprite using the configured layout.
pub fn convert_sprite(
    paths: &SpritePaths,
    name: &str,
    options: EncodeOptions,
) -> Result<ConvertSummary, ConvertError> {
    let src = paths.source_for(name)?;
    let dst = paths.sprite_for(name)?;
    convert_file(&src, &dst, options)
}

/// Outcome of converting every discovered sprite.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<ConvertSummary>,
    pub failed: Vec<(String, ConvertError)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Convert every sprite under `paths.raw_dir`.
///
/// Failures are collected per sprite; only a failure to scan the source
/// tree aborts the batch.
pub fn convert_all(paths: &SpritePaths, options: EncodeOptions) -> Result<BatchReport, ConvertError> {
    let names = paths.discover()?;
    log::info!("Converting {} sprite(s) from {:?}", names.len(), paths.raw_dir);

    let mut report = BatchReport::default();
    for (i, name) in names.iter().enumerate() {
        log::debug!("[{}/{}] {}", i + 1, names.len(), name);
        match convert_sprite(paths, name, options) {
            Ok(summary) => report.converted.push(summary),
            Err(e) => {
                log::error!("Failed to convert '{}': {}", name, e);
                report.failed.push((name.clone(), e));
            }
        }
    }

    Ok(report)
}
