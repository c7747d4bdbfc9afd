use thiserror::Error;

/// Errors raised while building or switching color themes
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThemeError {
    #[error("Theme '{0}' not found.")]
    UnknownTheme(String),
    #[error("Invalid hex color '{0}', expected #RRGGBB")]
    InvalidHex(String),
}

/// Errors returned by the shape model.
///
/// The interaction layer treats all of these as no-ops; they exist so callers
/// can tell whether a creation or deletion actually happened.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("Shape capacity of {0} reached")]
    CapacityReached(usize),
    #[error("Degenerate rectangle ({width} x {height})")]
    Degenerate { width: f32, height: f32 },
    #[error("No rectangle at index {0}")]
    IndexOutOfRange(usize),
}
