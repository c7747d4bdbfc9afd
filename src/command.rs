/// Keyboard-level actions the canvas controller can execute
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Removes the selected rectangle, if there is one
    DeleteSelected,
    NextTheme,
    PreviousTheme,
    /// Switches to the theme with this exact name
    LoadTheme(String),
}

impl Command {
    /// Short human-readable label, used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::DeleteSelected => "Delete Selected",
            Command::NextTheme => "Next Theme",
            Command::PreviousTheme => "Previous Theme",
            Command::LoadTheme(_) => "Load Theme",
        }
    }
}
