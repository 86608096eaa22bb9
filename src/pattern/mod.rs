//! Pattern engine: options, background derivation, and generator dispatch.
//!
//! A [`Pattern`] is built once per generate call. It owns the digest, the
//! resolved options, the style constants, and the markup tree, and nothing
//! survives the call - identical inputs always produce identical output.

mod hexagons;

use crate::digest::Digest;
use crate::error::{GeotileError, Result};
use crate::svg::{AttrList, Svg};
use crate::types::{Colour, PatternKind};

/// Base colour used when the caller supplies neither `color` nor
/// `base_color`.
const DEFAULT_BASE_COLOR: &str = "#933c3c";

/// Caller-facing options for a generate call.
///
/// Defaults merge under caller values; the caller always wins.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Pattern kind name, matched case-insensitively. When absent the kind
    /// is selected from the digest.
    pub generator: Option<String>,

    /// Explicit background colour (hex). Overrides the derivation entirely.
    pub color: Option<String>,

    /// Base colour the background derivation starts from (hex).
    pub base_color: Option<String>,

    /// Pinned digest, used verbatim instead of hashing the seed.
    pub hash: Option<String>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build options from string key/value pairs, the mapping form of the
    /// API. Recognized keys: `generator`, `color`, `baseColor` (or
    /// `base_color`), `hash`. Unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut options = Self::default();
        for (key, value) in pairs {
            match key.as_ref() {
                "generator" => options.generator = Some(value.into()),
                "color" => options.color = Some(value.into()),
                "baseColor" | "base_color" => options.base_color = Some(value.into()),
                "hash" => options.hash = Some(value.into()),
                _ => {}
            }
        }
        options
    }

    pub fn with_generator(mut self, name: impl Into<String>) -> Self {
        self.generator = Some(name.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_base_color(mut self, color: impl Into<String>) -> Self {
        self.base_color = Some(color.into());
        self
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }
}

/// Style constants shared by all generators. Overridable from code only;
/// caller options never reach these.
#[derive(Debug, Clone)]
pub struct Style {
    pub fill_dark: String,
    pub fill_light: String,
    pub stroke_colour: String,
    pub stroke_opacity: f64,
    pub opacity_min: f64,
    pub opacity_max: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill_dark: "#222".to_string(),
            fill_light: "#ddd".to_string(),
            stroke_colour: "#000".to_string(),
            stroke_opacity: 0.02,
            opacity_min: 0.02,
            opacity_max: 0.15,
        }
    }
}

/// Linearly map `value` from `[v_min, v_max]` onto `[d_min, d_max]`.
pub fn remap(value: f64, v_min: f64, v_max: f64, d_min: f64, d_max: f64) -> f64 {
    (value - v_min) * (d_max - d_min) / (v_max - v_min) + d_min
}

/// One generated pattern: digest, options, style, and the markup tree.
#[derive(Debug, Clone)]
pub struct Pattern {
    pub(crate) digest: Digest,
    options: Options,
    pub(crate) style: Style,
    pub(crate) svg: Svg,
}

impl Pattern {
    /// Build a pattern with the default style.
    pub fn new(seed: &str, options: Options) -> Result<Self> {
        Self::with_style(seed, options, Style::default())
    }

    /// Build a pattern with an explicit style.
    pub fn with_style(seed: &str, options: Options, style: Style) -> Result<Self> {
        let digest = match &options.hash {
            Some(hash) => Digest::from_hex(hash.clone()),
            None => Digest::from_seed(seed),
        };

        let mut pattern = Self {
            digest,
            options,
            style,
            svg: Svg::new(),
        };

        pattern.draw_background()?;
        pattern.draw_pattern()?;

        Ok(pattern)
    }

    /// The digest driving this pattern.
    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    /// The markup tree.
    pub fn svg(&self) -> &Svg {
        &self.svg
    }

    /// Render the pattern to SVG text.
    pub fn svg_string(&self) -> String {
        self.svg.render()
    }

    /// Light fill for even digest values, dark for odd.
    pub(crate) fn fill_color(&self, val: u32) -> &str {
        if val % 2 == 0 {
            &self.style.fill_light
        } else {
            &self.style.fill_dark
        }
    }

    /// Map a single hex digit onto the configured opacity range.
    pub(crate) fn fill_opacity(&self, val: u32) -> f64 {
        remap(
            f64::from(val),
            0.0,
            15.0,
            self.style.opacity_min,
            self.style.opacity_max,
        )
    }

    fn draw_background(&mut self) -> Result<()> {
        let rgb = match &self.options.color {
            Some(color) => Colour::from_hex(color)?,
            None => self.derive_background()?,
        };

        self.svg.rect(
            0.0,
            0.0,
            "100%",
            "100%",
            AttrList::new().with("fill", rgb.to_css_string()),
        );

        Ok(())
    }

    /// Rotate the base colour's hue and shift its saturation, both driven
    /// by fixed digest positions.
    fn derive_background(&self) -> Result<Colour> {
        let hue_offset =
            remap(f64::from(self.digest.hex_value(14, 3)?), 0.0, 4095.0, 0.0, 359.0) as f32;
        let sat_offset = self.digest.at(17)?;

        let base = self
            .options
            .base_color
            .as_deref()
            .unwrap_or(DEFAULT_BASE_COLOR);
        let mut hsl = Colour::from_hex(base)?.to_hsl();

        hsl.hue = ((hsl.hue * 360.0 - hue_offset) + 360.0) % 360.0 / 360.0;

        hsl.saturation = if sat_offset % 2 == 0 {
            ((hsl.saturation * 100.0 + sat_offset as f32) / 100.0).min(1.0)
        } else {
            ((hsl.saturation * 100.0 - sat_offset as f32) / 100.0).max(0.0)
        };

        Ok(Colour::from_hsl(hsl))
    }

    fn draw_pattern(&mut self) -> Result<()> {
        match self.select_kind()? {
            PatternKind::Hexagons => hexagons::draw(self),
            other => Err(GeotileError::UnsupportedGenerator { kind: other }),
        }
    }

    fn select_kind(&self) -> Result<PatternKind> {
        match &self.options.generator {
            Some(name) => name.parse(),
            // A single digest digit (0-15) covers the 1-16 numbering exactly.
            None => Ok(PatternKind::ALL[self.digest.at(20)? as usize]),
        }
    }
}

/// Generate a pattern and return its SVG text.
pub fn generate(seed: &str, options: Options) -> Result<String> {
    Pattern::new(seed, options).map(|p| p.svg_string())
}
