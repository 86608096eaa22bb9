//! geotile - Tileable SVG pattern generation
//!
//! A library for deterministically deriving tileable geometric vector
//! patterns (and a background colour) from seed strings: the same seed and
//! options always produce byte-identical markup. Typical callers are
//! services generating placeholder avatars or backgrounds keyed by a user
//! id or content hash.

pub mod cli;
pub mod digest;
pub mod encode;
pub mod error;
pub mod output;
pub mod pattern;
pub mod svg;
pub mod types;

pub use digest::Digest;
pub use encode::{base64_string, uri_image};
pub use error::{GeotileError, Result};
pub use pattern::{generate, remap, Options, Pattern, Style};
pub use svg::{AttrList, AttrValue, NodeId, Svg, Transform};
pub use types::{Colour, Hsl, PatternKind};
