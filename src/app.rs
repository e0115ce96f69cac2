use crate::canvas::Canvas;
use crate::config::PaintConfig;
use crate::input::{InputEvent, InputHandler};
use crate::palette::Palette;
use crate::renderer::Renderer;

pub struct PaintApp {
    canvas: Canvas,
    palette: Palette,
    renderer: Renderer,
    input: InputHandler,
    logged_size: bool,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_config(&PaintConfig::default())
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &PaintConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: &PaintConfig) -> Self {
        Self {
            canvas: Canvas::new(config),
            palette: Palette::new(&config.colors, config.truncate_palette_coordinates),
            renderer: Renderer::new(config),
            input: InputHandler::new(egui::Rect::EVERYTHING),
            logged_size: false,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Apply input events in arrival order.
    pub fn handle_events(&mut self, events: &[InputEvent]) {
        for event in events {
            if let Some(command) = event.command(&self.palette) {
                log::debug!("{:?} -> {:?}", event, command);
                if let Some(status) = command.execute(&mut self.canvas) {
                    log::info!("{}", status);
                }
            }
        }
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let available_size = ui.available_size();
                let (response, painter) = ui.allocate_painter(available_size, egui::Sense::click_and_drag());
                let rect = response.rect;

                if !self.logged_size {
                    log::info!("Window size: {}, {}", rect.width(), rect.height());
                    self.logged_size = true;
                }

                self.input.set_canvas_rect(rect);
                let events = self.input.process_input(ctx);
                self.handle_events(&events);

                self.renderer.render(&painter, rect, &self.canvas, &self.palette);
            });
    }
}
