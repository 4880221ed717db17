//! png2spr library crate.
//!
//! Converts PNG artwork into the decimal-token sprite text format. The
//! encoder lives in [`sprite`]; the remaining modules decode source
//! images, resolve sprite names and drive conversions.

pub mod cli;
pub mod config;
pub mod convert;
pub mod paths;
pub mod source;
pub mod sprite;
