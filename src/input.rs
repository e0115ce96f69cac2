use egui::{Context, Event, Key, Modifiers, PointerButton, Pos2, Rect, Vec2};

use crate::command::Command;
use crate::palette::Palette;

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// Position relative to the top-left corner of the canvas
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Input events the paint program reacts to, in arrival order
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed
    PointerDown {
        location: InputLocation,
        button: PointerButton,
        modifiers: Modifiers,
    },
    /// Mouse button was released
    PointerUp {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse moved (with or without buttons pressed)
    PointerMove {
        location: InputLocation,
        delta: Vec2,
        /// Whether the primary button was held during the move
        primary_held: bool,
    },
    /// Key was pressed (repeats are not reported)
    KeyDown {
        key: Key,
        modifiers: Modifiers,
    },
}

impl InputEvent {
    /// The canvas command this event triggers, if any.
    pub fn command(&self, palette: &Palette) -> Option<Command> {
        match self {
            InputEvent::PointerDown {
                location,
                button: PointerButton::Primary,
                ..
            } if location.is_in_canvas => {
                let (index, entry) = palette.entry_at(location.position.x, location.position.y)?;
                log::debug!("Palette entry {} clicked", index);
                Some(Command::SelectColor(entry.color))
            }
            InputEvent::PointerMove {
                location,
                primary_held: true,
                ..
            } => Some(Command::PaintAt {
                x: location.position.x as i32,
                y: location.position.y as i32,
            }),
            InputEvent::KeyDown { key, .. } => command_for_key(*key),
            _ => None,
        }
    }
}

/// Keyboard bindings. Modifiers are ignored.
pub fn command_for_key(key: Key) -> Option<Command> {
    match key {
        Key::ArrowUp => Some(Command::IncreaseSize),
        Key::ArrowDown => Some(Command::DecreaseSize),
        Key::ArrowLeft => Some(Command::DecreaseAlpha),
        Key::ArrowRight => Some(Command::IncreaseAlpha),
        Key::C => Some(Command::ClearCanvas),
        _ => None,
    }
}

/// Converts raw egui input into our domain-specific InputEvents
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    primary_down: bool,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            primary_down: false,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: (pos - self.canvas_rect.min).to_pos2(),
            is_in_canvas: self.canvas_rect.contains(pos),
        }
    }

    /// Read this frame's raw events from egui.
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        ctx.input(|input| self.translate(&input.raw.events))
    }

    /// Translate raw events, keeping their order.
    pub fn translate(&mut self, raw: &[Event]) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for event in raw {
            match event {
                Event::PointerMoved(pos) => {
                    let delta = self.last_pointer_pos.map_or(Vec2::ZERO, |last| *pos - last);
                    events.push(InputEvent::PointerMove {
                        location: self.make_location(*pos),
                        delta,
                        primary_held: self.primary_down,
                    });
                    self.last_pointer_pos = Some(*pos);
                }
                Event::PointerButton {
                    pos,
                    button,
                    pressed,
                    modifiers,
                } => {
                    if *button == PointerButton::Primary {
                        self.primary_down = *pressed;
                    }
                    let location = self.make_location(*pos);
                    events.push(if *pressed {
                        InputEvent::PointerDown {
                            location,
                            button: *button,
                            modifiers: *modifiers,
                        }
                    } else {
                        InputEvent::PointerUp {
                            location,
                            button: *button,
                        }
                    });
                }
                Event::PointerGone => {
                    self.last_pointer_pos = None;
                }
                Event::WindowFocused(false) => {
                    // The release may never arrive once focus is gone
                    self.primary_down = false;
                }
                Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    modifiers,
                    ..
                } => {
                    events.push(InputEvent::KeyDown {
                        key: *key,
                        modifiers: *modifiers,
                    });
                }
                _ => {}
            }
        }

        events
    }
}
