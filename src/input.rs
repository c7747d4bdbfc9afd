use egui::{Context, Key, Modifiers, Pos2, Rect};

use crate::command::Command;

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position in screen coordinates
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Canvas input for one frame, already reduced to what the controller needs
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed
    PointerDown { location: InputLocation },
    /// Latest known pointer position, reported once per frame
    PointerMove { location: InputLocation },
    /// Primary button was released
    PointerUp { location: InputLocation },
    /// A key press (or repeat) mapped to a command
    Command(Command),
}

impl InputEvent {
    /// Helper to check if an input event occurred within the canvas
    pub fn is_in_canvas(&self) -> bool {
        match self {
            InputEvent::PointerDown { location }
            | InputEvent::PointerMove { location }
            | InputEvent::PointerUp { location } => location.is_in_canvas,
            InputEvent::Command(_) => false,
        }
    }
}

/// Maps a key press to a command.
///
/// `D` and `Delete` remove the selection; `Alt` + `=` / `Alt` + `-` cycle themes.
pub fn command_for_key(key: Key, modifiers: Modifiers) -> Option<Command> {
    match key {
        Key::D | Key::Delete => Some(Command::DeleteSelected),
        Key::Equals | Key::Plus if modifiers.alt => Some(Command::NextTheme),
        Key::Minus if modifiers.alt => Some(Command::PreviousTheme),
        _ => None,
    }
}

/// Handles converting raw egui input into our domain-specific InputEvents
#[derive(Debug, Clone)]
pub struct InputHandler {
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self { canvas_rect }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    /// Creates an InputLocation from a position
    fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: pos,
            is_in_canvas: self.canvas_rect.contains(pos),
        }
    }

    /// Process raw egui input and generate our InputEvents.
    ///
    /// Pointer events come out as press, move, release; a press outside the
    /// canvas is dropped, a release never is.
    pub fn process_input(&self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            if let Some(pos) = input.pointer.latest_pos() {
                let location = self.make_location(pos);

                if input.pointer.primary_pressed() && location.is_in_canvas {
                    events.push(InputEvent::PointerDown { location });
                }
                events.push(InputEvent::PointerMove { location });
                if input.pointer.primary_released() {
                    events.push(InputEvent::PointerUp { location });
                }
            }

            for event in &input.events {
                if let egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } = event
                {
                    if let Some(command) = command_for_key(*key, *modifiers) {
                        events.push(InputEvent::Command(command));
                    }
                }
            }
        });

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_frame(handler: &InputHandler, events: Vec<egui::Event>) -> Vec<InputEvent> {
        let mut raw = egui::RawInput::default();
        raw.screen_rect = Some(Rect::from_min_size(Pos2::ZERO, egui::vec2(800.0, 600.0)));
        raw.events = events;

        let ctx = Context::default();
        let mut out = Vec::new();
        let _ = ctx.run(raw, |ctx| {
            out = handler.process_input(ctx);
        });
        out
    }

    fn key_press(key: Key, modifiers: Modifiers) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers,
        }
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(command_for_key(Key::D, Modifiers::NONE), Some(Command::DeleteSelected));
        assert_eq!(command_for_key(Key::Delete, Modifiers::NONE), Some(Command::DeleteSelected));
        assert_eq!(command_for_key(Key::Equals, Modifiers::ALT), Some(Command::NextTheme));
        assert_eq!(command_for_key(Key::Minus, Modifiers::ALT), Some(Command::PreviousTheme));
    }

    #[test]
    fn test_theme_keys_require_alt() {
        assert_eq!(command_for_key(Key::Equals, Modifiers::NONE), None);
        assert_eq!(command_for_key(Key::Minus, Modifiers::CTRL), None);
        assert_eq!(command_for_key(Key::Minus, Modifiers::SHIFT), None);
    }

    #[test]
    fn test_key_events_become_commands() {
        let handler = InputHandler::new(Rect::from_min_size(Pos2::ZERO, egui::vec2(800.0, 600.0)));
        let events = run_frame(
            &handler,
            vec![key_press(Key::Equals, Modifiers::ALT), key_press(Key::A, Modifiers::NONE)],
        );

        assert_eq!(events, vec![InputEvent::Command(Command::NextTheme)]);
    }

    #[test]
    fn test_held_key_repeats_command() {
        let handler = InputHandler::new(Rect::from_min_size(Pos2::ZERO, egui::vec2(800.0, 600.0)));
        let repeat = egui::Event::Key {
            key: Key::D,
            physical_key: None,
            pressed: true,
            repeat: true,
            modifiers: Modifiers::NONE,
        };
        let events = run_frame(&handler, vec![repeat]);

        assert_eq!(events, vec![InputEvent::Command(Command::DeleteSelected)]);
    }

    #[test]
    fn test_press_outside_canvas_is_dropped() {
        let handler = InputHandler::new(Rect::from_min_size(Pos2::ZERO, egui::vec2(100.0, 100.0)));
        let pos = Pos2::new(300.0, 300.0);
        let events = run_frame(
            &handler,
            vec![
                egui::Event::PointerMoved(pos),
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed: true,
                    modifiers: Modifiers::NONE,
                },
            ],
        );

        assert!(!events.iter().any(|e| matches!(e, InputEvent::PointerDown { .. })));
        assert!(events.iter().all(|e| !e.is_in_canvas()));
    }

    #[test]
    fn test_press_inside_canvas() {
        let handler = InputHandler::new(Rect::from_min_size(Pos2::ZERO, egui::vec2(800.0, 600.0)));
        let pos = Pos2::new(30.0, 40.0);
        let events = run_frame(
            &handler,
            vec![
                egui::Event::PointerMoved(pos),
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed: true,
                    modifiers: Modifiers::NONE,
                },
            ],
        );

        let location = InputLocation {
            position: pos,
            is_in_canvas: true,
        };
        assert_eq!(
            events,
            vec![InputEvent::PointerDown { location }, InputEvent::PointerMove { location }]
        );
    }
}
