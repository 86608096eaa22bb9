//! The closed set of pattern kinds.

use std::fmt;
use std::str::FromStr;

use crate::error::{GeotileError, Result};

/// One of the sixteen geometric tiling styles.
///
/// Kinds are numbered 1-16 so that a single hex digit of the digest
/// (`0-15`, plus one) selects a kind when the caller names none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Octogons,
    OverlappingCircles,
    PlusSigns,
    Xes,
    SineWaves,
    Hexagons,
    OverlappingRings,
    Plaid,
    Triangles,
    Squares,
    ConcentricCircles,
    Diamonds,
    Tessellation,
    NestedSquares,
    MosaicSquares,
    Chevrons,
}

impl PatternKind {
    /// All kinds, in numbering order.
    pub const ALL: [PatternKind; 16] = [
        PatternKind::Octogons,
        PatternKind::OverlappingCircles,
        PatternKind::PlusSigns,
        PatternKind::Xes,
        PatternKind::SineWaves,
        PatternKind::Hexagons,
        PatternKind::OverlappingRings,
        PatternKind::Plaid,
        PatternKind::Triangles,
        PatternKind::Squares,
        PatternKind::ConcentricCircles,
        PatternKind::Diamonds,
        PatternKind::Tessellation,
        PatternKind::NestedSquares,
        PatternKind::MosaicSquares,
        PatternKind::Chevrons,
    ];

    /// The kind's canonical name.
    pub const fn name(self) -> &'static str {
        match self {
            PatternKind::Octogons => "Octogons",
            PatternKind::OverlappingCircles => "OverlappingCircles",
            PatternKind::PlusSigns => "PlusSigns",
            PatternKind::Xes => "Xes",
            PatternKind::SineWaves => "SineWaves",
            PatternKind::Hexagons => "Hexagons",
            PatternKind::OverlappingRings => "OverlappingRings",
            PatternKind::Plaid => "Plaid",
            PatternKind::Triangles => "Triangles",
            PatternKind::Squares => "Squares",
            PatternKind::ConcentricCircles => "ConcentricCircles",
            PatternKind::Diamonds => "Diamonds",
            PatternKind::Tessellation => "Tessellation",
            PatternKind::NestedSquares => "NestedSquares",
            PatternKind::MosaicSquares => "MosaicSquares",
            PatternKind::Chevrons => "Chevrons",
        }
    }

    /// The kind's number in the 1-16 selection range.
    pub fn number(self) -> u32 {
        PatternKind::ALL
            .iter()
            .position(|k| *k == self)
            .map(|i| i as u32 + 1)
            .unwrap_or(0)
    }

    /// Look up a kind by its 1-16 number.
    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1..=16 => Some(PatternKind::ALL[n as usize - 1]),
            _ => None,
        }
    }

    /// Look up a kind by name, case-insensitively.
    ///
    /// Unlike [`FromStr`], an unmatched name yields `None` rather than
    /// an error, for callers probing rather than resolving an option.
    pub fn lookup(name: &str) -> Option<Self> {
        PatternKind::ALL
            .iter()
            .copied()
            .find(|k| k.name().eq_ignore_ascii_case(name))
    }

    /// Whether this kind has a geometry generator wired in.
    pub const fn is_implemented(self) -> bool {
        matches!(self, PatternKind::Hexagons)
    }
}

impl FromStr for PatternKind {
    type Err = GeotileError;

    fn from_str(s: &str) -> Result<Self> {
        PatternKind::lookup(s).ok_or_else(|| GeotileError::UnknownGenerator {
            name: s.to_string(),
            help: Some("Run `geotile list` to see the known generators".to_string()),
        })
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
