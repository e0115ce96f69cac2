#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod brush;
pub mod canvas;
pub mod color;
pub mod command;
pub mod config;
pub mod error;
pub mod input;
pub mod palette;
pub mod renderer;
pub mod shape;

pub use app::PaintApp;
pub use brush::Brush;
pub use canvas::Canvas;
pub use color::{Rgb, Rgba};
pub use command::Command;
pub use config::{PaintConfig, PaletteLayer, StampShape};
pub use error::{AppError, ConfigError};
pub use input::{InputEvent, InputHandler, InputLocation};
pub use palette::{Palette, PaletteEntry};
pub use renderer::Renderer;
pub use shape::PaintedShape;
