//! CLI argument parsing with clap.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Convert PNG artwork into decimal-token sprite files
#[derive(Parser, Debug)]
#[command(name = "png2spr")]
#[command(version, about = "Convert PNG artwork into sprite text files", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Convert a single file (writes logo.spr next to it)
    png2spr convert logo.png

    # Convert named sprites from raw_images/ into sprites/
    png2spr sprite menu/logo menu/play_button

    # Convert everything under raw_images/
    png2spr batch")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Root directory of source PNG artwork
    #[arg(long, global = true)]
    pub raw_dir: Option<PathBuf>,

    /// Root directory for generated sprite files
    #[arg(long, global = true)]
    pub sprite_dir: Option<PathBuf>,

    /// Omit the space after the last token of each line
    #[arg(long, global = true)]
    pub no_trailing_space: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a single PNG file
    Convert {
        /// Source PNG file
        input: PathBuf,
        /// Destination sprite file (default: input with the sprite extension)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Convert sprites by name (e.g. menu/logo)
    Sprite {
        /// Sprite names relative to the raw directory, without extension
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Convert every PNG under the raw directory
    Batch,
    /// List sprites found under the raw directory
    List,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
