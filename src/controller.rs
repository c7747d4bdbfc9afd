//! Interaction state machine for the canvas.
//!
//! A pointer press either grabs the topmost rectangle under the cursor
//! (selecting it and raising it) or starts a marquee on empty canvas. Moving
//! the pointer drags the grabbed rectangle through the [`Snapper`]; releasing
//! commits the marquee as a new rectangle. Both gestures end on release.

use egui::{Pos2, Rect, Vec2};
use log::{debug, warn};

use crate::command::Command;
use crate::config::CanvasConfig;
use crate::error::ThemeError;
use crate::input::InputEvent;
use crate::shape::ShapeStore;
use crate::snapping::{SnapGuide, Snapper};
use crate::theme::ThemeStore;

/// The pointer gesture in progress. Dragging and selecting never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Moving a rectangle; `offset` is pointer minus rectangle origin at press time
    Dragging { index: usize, offset: Vec2 },
    /// Rubber-banding a new rectangle from `start`
    Selecting { start: Pos2 },
}

/// Owns everything the canvas mutates: shapes, themes and the current gesture
#[derive(Debug, Clone)]
pub struct CanvasController {
    shapes: ShapeStore,
    themes: ThemeStore,
    snapper: Snapper,
    gesture: Gesture,
    pointer: Option<Pos2>,
    guides: Vec<SnapGuide>,
}

impl CanvasController {
    pub fn new(themes: ThemeStore) -> Self {
        Self {
            shapes: ShapeStore::new(),
            themes,
            snapper: Snapper::default(),
            gesture: Gesture::Idle,
            pointer: None,
            guides: Vec::new(),
        }
    }

    /// Builds a controller with the built-in themes, starting on the configured theme.
    ///
    /// An unknown theme name is logged and the first theme is used instead.
    pub fn from_config(config: &CanvasConfig) -> Result<Self, ThemeError> {
        let mut themes = ThemeStore::builtin()?;
        if let Err(err) = themes.load(&config.theme) {
            warn!("{}", err);
        }

        Ok(Self::new(themes))
    }

    pub fn shapes(&self) -> &ShapeStore {
        &self.shapes
    }

    pub fn themes(&self) -> &ThemeStore {
        &self.themes
    }

    pub fn snapper(&self) -> &Snapper {
        &self.snapper
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Gesture::Dragging { .. })
    }

    pub fn is_selecting(&self) -> bool {
        matches!(self.gesture, Gesture::Selecting { .. })
    }

    /// Guides produced by the drag in the current frame
    pub fn guides(&self) -> &[SnapGuide] {
        &self.guides
    }

    /// Rubber-band outline from the marquee start to the latest pointer position
    pub fn marquee(&self) -> Option<Rect> {
        match (self.gesture, self.pointer) {
            (Gesture::Selecting { start }, Some(pointer)) => {
                Some(Rect::from_two_pos(start, pointer))
            }
            _ => None,
        }
    }

    /// Drops per-frame state. Call once before feeding a frame's input.
    pub fn begin_frame(&mut self) {
        self.guides.clear();
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { location } => self.pointer_down(location.position),
            InputEvent::PointerMove { location } => self.pointer_move(location.position),
            InputEvent::PointerUp { location } => self.pointer_up(location.position),
            InputEvent::Command(command) => self.execute(command),
        }
    }

    pub fn pointer_down(&mut self, pos: Pos2) {
        self.pointer = Some(pos);

        match self.shapes.hit_test(pos) {
            Some(index) => {
                if let Err(err) = self.shapes.select(index) {
                    warn!("Hit rectangle could not be selected: {}", err);
                    return;
                }
                let Some(rectangle) = self.shapes.get(index) else {
                    return;
                };
                self.gesture = Gesture::Dragging {
                    index,
                    offset: pos - rectangle.min(),
                };
            }
            None => {
                self.shapes.clear_selection();
                self.gesture = Gesture::Selecting { start: pos };
            }
        }
    }

    pub fn pointer_move(&mut self, pos: Pos2) {
        self.pointer = Some(pos);

        let Gesture::Dragging { index, offset } = self.gesture else {
            return;
        };

        if let Some(snap) = self.snapper.snap(&self.shapes, index, pos - offset) {
            if let Err(err) = self.shapes.move_to(index, snap.position) {
                warn!("Dragged rectangle vanished: {}", err);
                self.gesture = Gesture::Idle;
                return;
            }
            self.guides = snap.guides;
        }
    }

    pub fn pointer_up(&mut self, pos: Pos2) {
        self.pointer = Some(pos);

        if let Gesture::Selecting { start } = self.gesture {
            if self.shapes.selected().is_none() {
                let size = pos - start;
                match self.shapes.create(start.x, start.y, size.x, size.y) {
                    Ok(index) => debug!("Marquee committed as rectangle {}", index),
                    Err(err) => debug!("Marquee discarded: {}", err),
                }
            }
        }

        self.gesture = Gesture::Idle;
    }

    pub fn execute(&mut self, command: Command) {
        debug!("Executing command: {}", command.name());

        match command {
            Command::DeleteSelected => self.delete_selected(),
            Command::NextTheme => {
                self.themes.next_theme();
            }
            Command::PreviousTheme => {
                self.themes.previous_theme();
            }
            Command::LoadTheme(name) => {
                if let Err(err) = self.themes.load(&name) {
                    warn!("{}", err);
                }
            }
        }
    }

    fn delete_selected(&mut self) {
        let Some(index) = self.shapes.selected() else {
            debug!("Nothing selected to delete");
            return;
        };

        if let Err(err) = self.shapes.delete(index) {
            warn!("{}", err);
            return;
        }
        if matches!(self.gesture, Gesture::Dragging { .. }) {
            self.gesture = Gesture::Idle;
        }
    }
}
