//! Sprite name resolution.
//!
//! Sprites are addressed by slash-separated names such as `menu/logo`.
//! A name maps to `<raw_dir>/menu/logo.png` on the source side and
//! `<sprite_dir>/menu/logo.spr` on the output side.

use std::path::{Component, Path, PathBuf};

/// Extension of source artwork.
pub const SOURCE_EXTENSION: &str = "png";

/// Default sprite file extension.
pub const DEFAULT_SPRITE_EXTENSION: &str = "spr";

/// Errors produced while resolving sprite names.
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("sprite name is empty")]
    EmptyName,

    #[error("sprite name '{0}' must be relative and must not contain '..'")]
    InvalidName(String),

    #[error("failed to scan '{}': {source}", path.display())]
    Scan {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Source and destination roots for named sprites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpritePaths {
    pub raw_dir: PathBuf,
    pub sprite_dir: PathBuf,
    pub extension: String,
}

impl Default for SpritePaths {
    fn default() -> Self {
        Self {
            raw_dir: PathBuf::from("raw_images"),
            sprite_dir: PathBuf::from("sprites"),
            extension: DEFAULT_SPRITE_EXTENSION.to_string(),
        }
    }
}

impl SpritePaths {
    pub fn new(raw_dir: impl Into<PathBuf>, sprite_dir: impl Into<PathBuf>) -> Self {
        Self {
            raw_dir: raw_dir.into(),
            sprite_dir: sprite_dir.into(),
            ..Self::default()
        }
    }

    /// Source PNG for a sprite name.
    pub fn source_for(&self, name: &str) -> Result<PathBuf, PathError> {
        validate_name(name)?;
        Ok(self.raw_dir.join(format!("{}.{}", name, SOURCE_EXTENSION)))
    }

    /// Destination sprite file for a sprite name.
    pub fn sprite_for(&self, name: &str) -> Result<PathBuf, PathError> {
        validate_name(name)?;
        Ok(self.sprite_dir.join(format!("{}.{}", name, self.extension)))
    }

    /// Sprite name for a source path under `raw_dir`.
    ///
    /// Returns `None` for paths outside `raw_dir` or without a `.png`
    /// extension.
    pub fn name_for_source(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.raw_dir).ok()?;
        let is_png = relative
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(SOURCE_EXTENSION));
        if !is_png {
            return None;
        }

        let stem = relative.with_extension("");
        let parts: Vec<&str> = stem
            .components()
            .map(|c| match c {
                Component::Normal(part) => part.to_str(),
                _ => None,
            })
            .collect::<Option<_>>()?;

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("/"))
        }
    }

    /// Every sprite name under `raw_dir`, sorted.
    pub fn discover(&self) -> Result<Vec<String>, PathError> {
        let mut names = Vec::new();
        self.scan_dir(&self.raw_dir, &mut names)?;
        names.sort();
        Ok(names)
    }

    fn scan_dir(&self, dir: &Path, names: &mut Vec<String>) -> Result<(), PathError> {
        let scan_err = |e| PathError::Scan {
            path: dir.to_path_buf(),
            source: e,
        };

        for entry in std::fs::read_dir(dir).map_err(scan_err)? {
            let path = entry.map_err(scan_err)?.path();
            if path.is_dir() {
                self.scan_dir(&path, names)?;
            } else if let Some(name) = self.name_for_source(&path) {
                names.push(name);
            }
        }

        Ok(())
    }
}

/// Reject names that would escape the sprite roots.
pub fn validate_name(name: &str) -> Result<(), PathError> {
    if name.is_empty() {
        return Err(PathError::EmptyName);
    }

    let escapes = Path::new(name)
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(PathError::InvalidName(name.to_string()));
    }

    Ok(())
}
