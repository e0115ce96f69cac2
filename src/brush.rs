use crate::color::{Rgb, Rgba};
use crate::config::PaintConfig;

/// Alpha values are snapped to this grid after every step.
const ALPHA_QUANTUM: f32 = 1e-4;
/// Slack for comparing alpha against its step thresholds.
const ALPHA_EPSILON: f32 = 1e-6;

fn snap_alpha(alpha: f32) -> f32 {
    ((alpha / ALPHA_QUANTUM).round() * ALPHA_QUANTUM).max(0.0)
}

/// Current tool state used for new painted shapes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    color: Rgba,
    alpha: f32,
    size: f32,
    size_step: f32,
    alpha_step: f32,
    enforce_alpha_ceiling: bool,
}

impl Default for Brush {
    fn default() -> Self {
        Self::from_config(&PaintConfig::default())
    }
}

impl Brush {
    pub fn from_config(config: &PaintConfig) -> Self {
        let alpha = snap_alpha(config.brush.alpha);
        Self {
            color: config.brush.color.with_alpha(alpha),
            alpha,
            size: config.brush.size,
            size_step: config.size_step,
            alpha_step: config.alpha_step,
            enforce_alpha_ceiling: config.enforce_alpha_ceiling,
        }
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn increase_size(&mut self) -> bool {
        self.size += self.size_step;
        true
    }

    /// Shrinks by one step unless that would take the size below 1.
    pub fn decrease_size(&mut self) -> bool {
        if self.size >= self.size_step + 1.0 {
            self.size -= self.size_step;
            true
        } else {
            false
        }
    }

    pub fn decrease_alpha(&mut self) -> bool {
        if self.alpha + ALPHA_EPSILON >= self.alpha_step {
            self.set_alpha(self.alpha - self.alpha_step);
            true
        } else {
            false
        }
    }

    /// Without the ceiling, alpha keeps growing past 1; drawing clamps it.
    pub fn increase_alpha(&mut self) -> bool {
        if self.enforce_alpha_ceiling && self.alpha > 1.0 - self.alpha_step + ALPHA_EPSILON {
            return false;
        }
        self.set_alpha(self.alpha + self.alpha_step);
        true
    }

    /// Take `rgb` with the current alpha.
    pub fn select_color(&mut self, rgb: Rgb) {
        self.color = rgb.with_alpha(self.alpha);
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = snap_alpha(alpha);
        if self.enforce_alpha_ceiling {
            self.alpha = self.alpha.min(1.0);
        }
        self.color.a = self.alpha;
    }
}
