use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::color::Rgb;
use crate::error::{ConfigError, ConfigResult};
use crate::palette::MAX_PALETTE_COLORS;

/// Where the palette sits relative to the painted shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteLayer {
    /// Shapes first, palette strip on top of them
    #[default]
    OverShapes,
    /// Palette first, shapes may paint over it
    BehindShapes,
}

/// Primitive(s) used to draw one painted shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StampShape {
    #[default]
    Circle,
    /// Circle plus a triangle offset up and to the right
    CircleWithTriangle,
}

/// Initial brush settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    pub color: Rgb,
    pub alpha: f32,
    pub size: f32,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            color: Rgb::new(1.0, 1.0, 0.0),
            alpha: 1.0,
            size: 5.0,
        }
    }
}

/// Everything that differs between the paint variants, plus window setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to the shipped variant
pub struct PaintConfig {
    pub window_size: [f32; 2],
    pub colors: Vec<Rgb>,
    pub brush: BrushConfig,
    pub size_step: f32,
    pub alpha_step: f32,
    /// Refuse alpha increases once alpha is above `1 - alpha_step`.
    /// When off, alpha can grow past 1.
    pub enforce_alpha_ceiling: bool,
    /// Store palette centers as integers, as the hit test sees them
    pub truncate_palette_coordinates: bool,
    pub palette_layer: PaletteLayer,
    pub stamp: StampShape,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            window_size: [500.0, 500.0],
            colors: vec![
                Rgb::new(1.0, 1.0, 0.0),
                Rgb::new(0.0, 1.0, 1.0),
                Rgb::new(1.0, 0.0, 1.0),
            ],
            brush: BrushConfig::default(),
            size_step: 5.0,
            alpha_step: 0.05,
            enforce_alpha_ceiling: false,
            truncate_palette_coordinates: true,
            palette_layer: PaletteLayer::default(),
            stamp: StampShape::default(),
        }
    }
}

impl PaintConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(text: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.colors.is_empty() {
            return Err(invalid("palette needs at least one color"));
        }
        if self.colors.len() > MAX_PALETTE_COLORS {
            return Err(invalid(format!(
                "palette has {} colors, at most {} fit",
                self.colors.len(),
                MAX_PALETTE_COLORS
            )));
        }
        if let Some(i) = self.colors.iter().position(|c| !c.is_normalized()) {
            return Err(invalid(format!("palette color {} has a channel outside [0, 1]", i)));
        }
        if !self.brush.color.is_normalized() {
            return Err(invalid("brush color has a channel outside [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.brush.alpha) {
            return Err(invalid(format!("brush alpha {} outside [0, 1]", self.brush.alpha)));
        }
        if !(self.brush.size > 0.0) {
            return Err(invalid("brush size must be positive"));
        }
        if !(self.size_step > 0.0) {
            return Err(invalid("size step must be positive"));
        }
        if !(self.alpha_step > 0.0 && self.alpha_step <= 1.0) {
            return Err(invalid("alpha step must be in (0, 1]"));
        }
        if !(self.window_size[0] > 0.0 && self.window_size[1] > 0.0) {
            return Err(invalid("window size must be positive"));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(msg.into())
}
