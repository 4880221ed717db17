//! Subcommand handlers.

use std::path::{Path, PathBuf};

use super::args::{Args, Command, ConfigAction};
use crate::config::{self, Config, ConfigError, DEFAULT_CONFIG_TOML};
use crate::convert::{self, ConvertError};
use crate::paths::{PathError, SpritePaths};
use crate::sprite::EncodeOptions;

/// Errors reported by subcommands.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error("{failed} of {total} sprite(s) failed to convert")]
    BatchFailed { failed: usize, total: usize },

    #[error("Config file already exists: {}\nUse 'png2spr config show' to view current settings.", path.display())]
    ConfigExists { path: PathBuf },

    #[error("Failed to write config file '{}': {source}", path.display())]
    ConfigWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Effective settings: CLI args > config file > built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub paths: SpritePaths,
    pub options: EncodeOptions,
    pub config_path: PathBuf,
}

impl Settings {
    /// Load the config file named by `--config` (which must exist) or the
    /// default one (which may be absent), then apply CLI overrides.
    pub fn resolve(args: &Args) -> Result<Self, ConfigError> {
        let (cfg, config_path) = match &args.config {
            Some(path) => (Config::load_from_explicit(path)?, path.clone()),
            None => (Config::load(None)?, config::default_path()),
        };
        Ok(Self::merge(args, &cfg, config_path))
    }

    pub fn merge(args: &Args, cfg: &Config, config_path: PathBuf) -> Self {
        let mut paths = cfg.sprite_paths();
        if let Some(raw_dir) = &args.raw_dir {
            paths.raw_dir = raw_dir.clone();
        }
        if let Some(sprite_dir) = &args.sprite_dir {
            paths.sprite_dir = sprite_dir.clone();
        }

        let mut options = cfg.encode_options();
        if args.no_trailing_space {
            options.trailing_space = false;
        }

        Self {
            paths,
            options,
            config_path,
        }
    }
}

/// Run the parsed command.
pub fn run(args: &Args, settings: &Settings) -> Result<(), CommandError> {
    match &args.command {
        Command::Convert { input, output } => {
            let output = output
                .clone()
                .unwrap_or_else(|| default_output(input, &settings.paths.extension));
            let summary = convert::convert_file(input, &output, settings.options)?;
            println!("{}", summary);
            Ok(())
        }
        Command::Sprite { names } => {
            for name in names {
                let summary = convert::convert_sprite(&settings.paths, name, settings.options)?;
                println!("{}", summary);
            }
            Ok(())
        }
        Command::Batch => run_batch(settings),
        Command::List => list_sprites(&settings.paths),
        Command::Config { action } => handle_config_action(action, settings),
    }
}

/// Sprite path for a file converted outside the named layout.
pub fn default_output(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}

fn run_batch(settings: &Settings) -> Result<(), CommandError> {
    let report = convert::convert_all(&settings.paths, settings.options)?;

    for summary in &report.converted {
        println!("{}", summary);
    }
    for (name, err) in &report.failed {
        eprintln!("Failed: {}: {}", name, err);
    }

    let total = report.converted.len() + report.failed.len();
    println!("Converted {} of {} sprite(s).", report.converted.len(), total);

    if report.is_success() {
        Ok(())
    } else {
        Err(CommandError::BatchFailed {
            failed: report.failed.len(),
            total,
        })
    }
}

/// List sprites found under the raw directory and print them to stdout.
fn list_sprites(paths: &SpritePaths) -> Result<(), CommandError> {
    let names = paths.discover()?;
    if names.is_empty() {
        println!("No sprites found under {}.", paths.raw_dir.display());
        return Ok(());
    }

    println!("Sprites under {}:", paths.raw_dir.display());
    for name in names {
        let status = if paths.sprite_for(&name)?.exists() {
            "converted"
        } else {
            "pending"
        };
        println!("  {} ({})", name, status);
    }
    Ok(())
}

/// Handle config subcommand actions.
fn handle_config_action(action: &ConfigAction, settings: &Settings) -> Result<(), CommandError> {
    match action {
        ConfigAction::Show => {
            println!("Current configuration:");
            println!("  Raw directory: {}", settings.paths.raw_dir.display());
            println!("  Sprite directory: {}", settings.paths.sprite_dir.display());
            println!("  Sprite extension: {}", settings.paths.extension);
            println!(
                "  Trailing space: {}",
                if settings.options.trailing_space { "yes" } else { "no" }
            );
            println!();

            if settings.config_path.exists() {
                println!("Config file: {} (exists)", settings.config_path.display());
            } else {
                println!("Config file: {} (not found)", settings.config_path.display());
            }
            Ok(())
        }
        ConfigAction::Init => {
            init_config(&settings.config_path)?;
            println!("Created config file: {}", settings.config_path.display());
            Ok(())
        }
    }
}

/// Write the commented default config, refusing to overwrite.
pub fn init_config(path: &Path) -> Result<(), CommandError> {
    if path.exists() {
        return Err(CommandError::ConfigExists {
            path: path.to_path_buf(),
        });
    }

    let write_err = |e| CommandError::ConfigWrite {
        path: path.to_path_buf(),
        source: e,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, DEFAULT_CONFIG_TOML).map_err(write_err)?;
    log::info!("Wrote default config to {:?}", path);
    Ok(())
}
