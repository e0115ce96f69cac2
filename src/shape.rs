use crate::brush::Brush;
use crate::color::Rgba;

/// One mark on the canvas. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintedShape {
    color: Rgba,
    size: f32,
    x: i32,
    y: i32,
}

impl PaintedShape {
    pub fn new(color: Rgba, size: f32, x: i32, y: i32) -> Self {
        Self { color, size, x, y }
    }

    /// Snapshot the brush at `(x, y)`.
    pub fn stamp(brush: &Brush, x: i32, y: i32) -> Self {
        Self::new(brush.color(), brush.size(), x, y)
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }
}
