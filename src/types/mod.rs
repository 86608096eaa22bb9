//! Core domain types for geotile.
//!
//! This module contains the fundamental value types used throughout the
//! pipeline:
//! - `Colour` / `Hsl` - colour values and conversions
//! - `PatternKind` - the closed set of sixteen tiling styles

mod colour;
mod kind;

pub use colour::{Colour, Hsl};
pub use kind::PatternKind;
