use egui::{Pos2, pos2};

use crate::color::Rgb;

/// Horizontal distance between palette centers.
pub const PALETTE_SPACING: f32 = 55.0;
/// Vertical center of the palette row.
pub const PALETTE_Y: f32 = 35.0;
/// Display diameter of a palette circle.
pub const PALETTE_ENTRY_SIZE: f32 = 50.0;
/// Height of the strip drawn behind the palette.
pub const PALETTE_STRIP_HEIGHT: f32 = 70.0;
/// How many entries fit across the default window.
pub const MAX_PALETTE_COLORS: usize = 9;

/// Layout position of entry `index`, before any truncation.
pub fn entry_position(index: usize) -> Pos2 {
    // f64 keeps 55 * 2.6 at exactly 143 before truncation
    let x = f64::from(PALETTE_SPACING) * (index as f64 + 0.6);
    pos2(x as f32, PALETTE_Y)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteEntry {
    pub color: Rgb,
    pub center: Pos2,
    /// Display diameter. The clickable radius is half of it.
    pub size: f32,
}

impl PaletteEntry {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let dist = ((x - self.center.x).powi(2) + (y - self.center.y).powi(2)).sqrt();
        dist <= self.size / 2.0
    }
}

/// Fixed row of selectable colors along the top of the window
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    pub fn new(colors: &[Rgb], truncate_coordinates: bool) -> Self {
        let entries = colors
            .iter()
            .enumerate()
            .map(|(i, &color)| {
                let mut center = entry_position(i);
                if truncate_coordinates {
                    center = pos2(center.x.trunc(), center.y.trunc());
                }
                PaletteEntry {
                    color,
                    center,
                    size: PALETTE_ENTRY_SIZE,
                }
            })
            .collect();
        Self { entries }
    }

    /// Palette with a hand-made layout.
    pub fn from_entries(entries: Vec<PaletteEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry, in palette order, whose clickable radius contains the point.
    pub fn entry_at(&self, x: f32, y: f32) -> Option<(usize, &PaletteEntry)> {
        self.entries.iter().enumerate().find(|(_, e)| e.contains(x, y))
    }

    pub fn hit_test(&self, x: f32, y: f32) -> Option<Rgb> {
        self.entry_at(x, y).map(|(_, e)| e.color)
    }
}
