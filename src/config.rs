use serde::{Deserialize, Serialize};

/// Canvas settings restored from eframe storage on startup.
///
/// Only the theme choice is persisted. Rectangles always start from an empty
/// canvas, and the shape capacity and snap threshold are fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct CanvasConfig {
    /// Name of the theme to start with
    pub theme: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            theme: "Molokai".to_owned(),
        }
    }
}
