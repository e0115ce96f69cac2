use egui::Color32;
use serde::{Deserialize, Serialize};

/// An opaque color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn gray(l: f32) -> Self {
        Self::new(l, l, l)
    }

    /// Attach an alpha channel.
    pub fn with_alpha(self, a: f32) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    pub fn is_normalized(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }

    pub fn to_color32(self) -> Color32 {
        self.with_alpha(1.0).to_color32()
    }
}

/// A color with straight (unmultiplied) alpha. Channels are clamped to `[0, 1]`
/// only when converted for drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Convert for drawing. Channels are taken as-is (no gamma conversion);
    /// egui premultiplies the alpha.
    pub fn to_color32(self) -> Color32 {
        Color32::from_rgba_unmultiplied(
            channel_u8(self.r),
            channel_u8(self.g),
            channel_u8(self.b),
            channel_u8(self.a),
        )
    }
}

fn channel_u8(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}
