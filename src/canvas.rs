use crate::brush::Brush;
use crate::config::PaintConfig;
use crate::shape::PaintedShape;

/// The painted shapes plus the brush that makes new ones
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    brush: Brush,
    shapes: Vec<PaintedShape>,
}

impl Canvas {
    pub fn new(config: &PaintConfig) -> Self {
        Self {
            brush: Brush::from_config(config),
            shapes: Vec::new(),
        }
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn brush_mut(&mut self) -> &mut Brush {
        &mut self.brush
    }

    /// Shapes in draw order.
    pub fn shapes(&self) -> &[PaintedShape] {
        &self.shapes
    }

    pub fn paint_at(&mut self, x: i32, y: i32) {
        self.shapes.push(PaintedShape::stamp(&self.brush, x, y));
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }
}
