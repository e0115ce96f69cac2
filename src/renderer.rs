use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke, pos2, vec2};

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::config::{PaintConfig, PaletteLayer, StampShape};
use crate::palette::{PALETTE_STRIP_HEIGHT, PALETTE_Y, Palette, entry_position};
use crate::shape::PaintedShape;

const BACKGROUND: Rgb = Rgb::new(0.95, 0.95, 0.95);
const PALETTE_STRIP: Rgb = Rgb::new(0.1, 0.1, 0.1);

/// Per-frame draw pass. Reads the canvas and palette, never mutates them.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    palette_layer: PaletteLayer,
    stamp: StampShape,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(&PaintConfig::default())
    }
}

impl Renderer {
    pub fn new(config: &PaintConfig) -> Self {
        Self {
            palette_layer: config.palette_layer,
            stamp: config.stamp,
        }
    }

    /// Renders the current frame into `rect`
    pub fn render(&self, painter: &Painter, rect: Rect, canvas: &Canvas, palette: &Palette) {
        painter.extend(self.frame_shapes(rect, canvas, palette));
    }

    /// Everything one frame draws, back to front.
    pub fn frame_shapes(&self, rect: Rect, canvas: &Canvas, palette: &Palette) -> Vec<Shape> {
        let mut shapes = vec![Shape::rect_filled(rect, 0.0, BACKGROUND.to_color32())];

        match self.palette_layer {
            PaletteLayer::OverShapes => {
                self.push_canvas(&mut shapes, rect.min, canvas);
                push_palette(&mut shapes, rect, palette);
            }
            PaletteLayer::BehindShapes => {
                push_palette(&mut shapes, rect, palette);
                self.push_canvas(&mut shapes, rect.min, canvas);
            }
        }

        shapes
    }

    fn push_canvas(&self, shapes: &mut Vec<Shape>, origin: Pos2, canvas: &Canvas) {
        for painted in canvas.shapes() {
            self.push_stamp(shapes, origin, painted);
        }
    }

    fn push_stamp(&self, shapes: &mut Vec<Shape>, origin: Pos2, painted: &PaintedShape) {
        let color = painted.color().to_color32();
        let size = painted.size();
        let center = origin + vec2(painted.x() as f32, painted.y() as f32);

        shapes.push(Shape::circle_filled(center, size / 2.0, color));

        if self.stamp == StampShape::CircleWithTriangle {
            let offset = center + vec2(size / 2.0, -size / 2.0);
            shapes.push(triangle(offset, size, size, color));
        }
    }
}

fn push_palette(shapes: &mut Vec<Shape>, rect: Rect, palette: &Palette) {
    let strip = Rect::from_center_size(
        rect.min + vec2(rect.width() / 2.0, PALETTE_Y),
        vec2(rect.width(), PALETTE_STRIP_HEIGHT),
    );
    shapes.push(Shape::rect_filled(strip, 0.0, PALETTE_STRIP.to_color32()));

    // Circles use the untruncated layout even when hit testing truncates.
    for (i, entry) in palette.entries().iter().enumerate() {
        let center = rect.min + entry_position(i).to_vec2();
        shapes.push(Shape::circle_filled(
            center,
            entry.size / 2.0,
            entry.color.to_color32(),
        ));
    }
}

/// Upward-pointing isosceles triangle centered on `center`.
fn triangle(center: Pos2, width: f32, height: f32, color: Color32) -> Shape {
    let points = vec![
        pos2(center.x - width / 2.0, center.y + height / 2.0),
        pos2(center.x + width / 2.0, center.y + height / 2.0),
        pos2(center.x, center.y - height / 2.0),
    ];
    Shape::convex_polygon(points, color, Stroke::NONE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;

    fn window() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(500.0, 500.0))
    }

    fn painted_canvas() -> Canvas {
        let mut canvas = Canvas::default();
        Command::PaintAt { x: 100, y: 100 }.execute(&mut canvas);
        Command::PaintAt { x: 120, y: 110 }.execute(&mut canvas);
        canvas
    }

    fn circle_center(shape: &Shape) -> Pos2 {
        match shape {
            Shape::Circle(c) => c.center,
            other => panic!("expected a circle, got {:?}", other),
        }
    }

    #[test]
    fn test_render_basics() {
        let ctx = egui::Context::default();
        let layer_id = egui::LayerId::background();
        let painter = egui::Painter::new(ctx.clone(), layer_id, window());
        let palette = Palette::new(&PaintConfig::default().colors, true);

        Renderer::default().render(&painter, window(), &painted_canvas(), &palette);
    }

    #[test]
    fn test_palette_drawn_over_shapes() {
        let palette = Palette::new(&PaintConfig::default().colors, true);
        let shapes = Renderer::default().frame_shapes(window(), &painted_canvas(), &palette);

        // background, 2 stamps, strip, 3 palette circles
        assert_eq!(shapes.len(), 7);
        assert_eq!(circle_center(&shapes[1]), pos2(100.0, 100.0));
        assert_eq!(circle_center(&shapes[2]), pos2(120.0, 110.0));
        assert!(matches!(shapes[3], Shape::Rect(_)));
        assert!((circle_center(&shapes[5]).x - 88.0).abs() < 1e-4);
    }

    #[test]
    fn test_palette_behind_shapes() {
        let config = PaintConfig {
            palette_layer: PaletteLayer::BehindShapes,
            ..Default::default()
        };
        let palette = Palette::new(&config.colors, true);
        let shapes = Renderer::new(&config).frame_shapes(window(), &painted_canvas(), &palette);

        assert!(matches!(shapes[1], Shape::Rect(_)));
        assert_eq!(circle_center(&shapes[5]), pos2(100.0, 100.0));
        assert_eq!(circle_center(&shapes[6]), pos2(120.0, 110.0));
    }

    #[test]
    fn test_triangle_stamp() {
        let config = PaintConfig {
            stamp: StampShape::CircleWithTriangle,
            ..Default::default()
        };
        let palette = Palette::new(&config.colors, true);
        let shapes = Renderer::new(&config).frame_shapes(window(), &painted_canvas(), &palette);

        assert_eq!(shapes.len(), 9);
        match &shapes[2] {
            Shape::Path(path) => {
                assert!(path.closed);
                assert_eq!(path.points.len(), 3);
                assert_eq!(path.points[2], pos2(102.5, 95.0));
            }
            other => panic!("expected a triangle, got {:?}", other),
        }
    }

    #[test]
    fn test_offset_canvas() {
        let rect = Rect::from_min_size(pos2(10.0, 20.0), vec2(200.0, 200.0));
        let palette = Palette::new(&[Rgb::new(1.0, 0.0, 0.0)], true);
        let shapes = Renderer::default().frame_shapes(rect, &painted_canvas(), &palette);

        assert_eq!(circle_center(&shapes[1]), pos2(110.0, 120.0));
        match &shapes[3] {
            Shape::Rect(strip) => {
                assert_eq!(strip.rect.min, pos2(10.0, 20.0));
                assert_eq!(strip.rect.max, pos2(210.0, 90.0));
            }
            other => panic!("expected the palette strip, got {:?}", other),
        }
    }
}
