use log::info;

use crate::color::{hex_to_color, Color};
use crate::error::ThemeError;

/// Built-in palettes as (name, background, cursor, text, modeline).
const BUILTIN_THEMES: [(&str, [&str; 4]); 8] = [
    ("Molokai", ["#1C1E1F", "#FB2874", "#D6D6D4", "#2D2E2E"]),
    ("dark", ["#18181B", "#cd9575", "#e4e4e8", "#222225"]),
    ("Gum", ["#14171E", "#D6A0D1", "#D4D4D6", "#191D26"]),
    ("Ocean", ["#1A1A25", "#F2F2F2", "#E6E6E8", "#252534"]),
    ("Catppuccin", ["#1E1E2E", "#B4BEFE", "#CDD6F4", "#181825"]),
    ("Tokyonight", ["#1A1B26", "#7AA2F7", "#A9B1D6", "#161620"]),
    ("Doom-one", ["#282C34", "#51AFEF", "#BBC2CF", "#1D2026"]),
    ("City-lights", ["#1D252C", "#51AFEF", "#A0B3C5", "#181F25"]),
];

/// A named four-color palette applied to all canvas rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub background: Color,
    /// Accent used for the selection outline and snap guides
    pub cursor: Color,
    /// Fill color of rectangles and modeline text
    pub text: Color,
    pub modeline: Color,
}

impl Theme {
    pub fn from_hex(
        name: &str,
        [background, cursor, text, modeline]: [&str; 4],
    ) -> Result<Self, ThemeError> {
        Ok(Self {
            name: name.to_string(),
            background: hex_to_color(background)?,
            cursor: hex_to_color(cursor)?,
            text: hex_to_color(text)?,
            modeline: hex_to_color(modeline)?,
        })
    }
}

/// Fixed catalog of themes plus the index of the one currently in use.
///
/// The catalog never changes after construction; only the current index moves,
/// wrapping around at both ends.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    themes: Vec<Theme>,
    current: usize,
}

impl ThemeStore {
    /// Parses the compiled-in theme table. The first theme starts out current.
    pub fn builtin() -> Result<Self, ThemeError> {
        let themes = BUILTIN_THEMES
            .iter()
            .map(|(name, colors)| Theme::from_hex(name, *colors))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { themes, current: 0 })
    }

    pub fn current(&self) -> &Theme {
        &self.themes[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    pub fn next_theme(&mut self) -> &Theme {
        self.current = (self.current + 1) % self.themes.len();
        info!("Switched to next theme: {}", self.current().name);
        self.current()
    }

    pub fn previous_theme(&mut self) -> &Theme {
        self.current = self.current.checked_sub(1).unwrap_or(self.themes.len() - 1);
        info!("Switched to previous theme: {}", self.current().name);
        self.current()
    }

    /// Makes the theme with exactly this name current.
    ///
    /// On a miss the current theme is left untouched.
    pub fn load(&mut self, name: &str) -> Result<&Theme, ThemeError> {
        let index = self
            .themes
            .iter()
            .position(|theme| theme.name == name)
            .ok_or_else(|| ThemeError::UnknownTheme(name.to_string()))?;

        self.current = index;
        info!("Loaded theme: {}", name);
        Ok(self.current())
    }
}
