//! Colours used by the recipe screen.
//!
//! The screen only names semantic colours; the terminal renderer maps them to
//! `crossterm` colours when it draws.

use crossterm::style::Color as TermColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// The terminal's own foreground/background.
    Default,
    Red,
    Green,
    Blue,
    LightGray,
    Black,
}

impl Color {
    pub fn to_terminal(self) -> TermColor {
        match self {
            Color::Default => TermColor::Reset,
            Color::Red => TermColor::Red,
            Color::Green => TermColor::Green,
            Color::Blue => TermColor::Blue,
            Color::LightGray => TermColor::Grey,
            Color::Black => TermColor::Black,
        }
    }
}

/// Palette installed around the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    /// Colour of dividers and the favourite overlay background.
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Default,
            text: Color::Default,
            muted: Color::LightGray,
        }
    }
}
