use crate::canvas::Canvas;
use crate::color::Rgb;

/// Discrete transitions on the canvas. None of them can fail: a command whose
/// precondition does not hold leaves the canvas untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    IncreaseSize,
    DecreaseSize,
    DecreaseAlpha,
    IncreaseAlpha,
    ClearCanvas,
    /// A palette entry was clicked
    SelectColor(Rgb),
    /// Pointer moved with the primary button held
    PaintAt { x: i32, y: i32 },
}

impl Command {
    /// Apply the command and return a status line when it took effect.
    pub fn execute(&self, canvas: &mut Canvas) -> Option<String> {
        match *self {
            Command::IncreaseSize => {
                let brush = canvas.brush_mut();
                brush
                    .increase_size()
                    .then(|| format!("Pressed UP: Increase point size to {}", brush.size()))
            }
            Command::DecreaseSize => {
                let brush = canvas.brush_mut();
                brush
                    .decrease_size()
                    .then(|| format!("Pressed DOWN: Decrease point size to {}", brush.size()))
            }
            Command::DecreaseAlpha => {
                let brush = canvas.brush_mut();
                brush.decrease_alpha().then(|| {
                    format!("Pressed LEFT: Increase transparency to {}", display_alpha(brush.alpha()))
                })
            }
            Command::IncreaseAlpha => {
                let brush = canvas.brush_mut();
                brush.increase_alpha().then(|| {
                    format!("Pressed RIGHT: Decrease transparency to {}", display_alpha(brush.alpha()))
                })
            }
            Command::ClearCanvas => {
                canvas.clear();
                Some("Pressed C: Clear canvas".to_owned())
            }
            Command::SelectColor(rgb) => {
                canvas.brush_mut().select_color(rgb);
                Some(format!("Changed current color to {} {} {}", rgb.r, rgb.g, rgb.b))
            }
            Command::PaintAt { x, y } => {
                canvas.paint_at(x, y);
                None
            }
        }
    }
}

fn display_alpha(alpha: f32) -> f32 {
    (alpha * 10_000.0).round() / 10_000.0
}
