//! Configuration file handling for png2spr.
//!
//! Loads configuration from `~/.config/png2spr/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::paths::{SpritePaths, DEFAULT_SPRITE_EXTENSION};
use crate::sprite::EncodeOptions;

/// Configuration file structure for png2spr.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct PathsConfig {
    #[serde(default = "default_raw_dir")]
    pub raw_dir: PathBuf,
    #[serde(default = "default_sprite_dir")]
    pub sprite_dir: PathBuf,
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            raw_dir: default_raw_dir(),
            sprite_dir: default_sprite_dir(),
            extension: default_extension(),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub trailing_space: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            trailing_space: true,
        }
    }
}

fn default_raw_dir() -> PathBuf {
    PathBuf::from("raw_images")
}

fn default_sprite_dir() -> PathBuf {
    PathBuf::from("sprites")
}

fn default_extension() -> String {
    DEFAULT_SPRITE_EXTENSION.to_string()
}

fn default_true() -> bool {
    true
}

/// Commented default configuration written by `config init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# png2spr configuration

[paths]
# Root directory of source PNG artwork
raw_dir = "raw_images"
# Root directory for generated sprite files
sprite_dir = "sprites"
# Extension of generated sprite files
extension = "spr"

[output]
# Write a space after the last token of every line
trailing_space = true
"#;

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            Self::load_from_explicit(&path)
        } else {
            log::debug!("No config file at {:?}, using defaults", path);
            Ok(Config::default())
        }
    }

    /// Load configuration from a path that must exist.
    pub fn load_from_explicit(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn sprite_paths(&self) -> SpritePaths {
        SpritePaths {
            raw_dir: self.paths.raw_dir.clone(),
            sprite_dir: self.paths.sprite_dir.clone(),
            extension: self.paths.extension.clone(),
        }
    }

    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            trailing_space: self.output.trailing_space,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("png2spr").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/png2spr/config.toml")
        })
}
