#![warn(clippy::all, rust_2018_idioms)]

//! Interactive rectangle canvas: draw rectangles with a marquee, select and
//! drag them with edge snapping, delete them, and cycle color themes.

pub mod app;
pub mod color;
pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod renderer;
pub mod shape;
pub mod snapping;
pub mod theme;

pub use app::CanvasApp;
pub use color::{hex_to_color, Color};
pub use command::Command;
pub use config::CanvasConfig;
pub use controller::{CanvasController, Gesture};
pub use error::{ShapeError, ThemeError};
pub use input::{InputEvent, InputHandler, InputLocation};
pub use renderer::Renderer;
pub use shape::{Rectangle, ShapeStore, MAX_RECTANGLES};
pub use snapping::{Snap, SnapGuide, Snapper, SNAP_THRESHOLD};
pub use theme::{Theme, ThemeStore};
