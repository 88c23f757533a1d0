//! Light/dark theme toggle state.

use crate::constants::{THEME_BUTTON_DARK, THEME_BUTTON_LIGHT};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn to_dark(&mut self) {
        *self = Theme::Dark;
    }

    pub fn to_light(&mut self) {
        *self = Theme::Light;
    }

    pub fn toggle(&mut self) {
        match self {
            Theme::Light => self.to_dark(),
            Theme::Dark => self.to_light(),
        }
    }

    /// Glyph of the button that switches away from the current theme.
    pub fn button(&self) -> &'static str {
        match self {
            Theme::Light => THEME_BUTTON_LIGHT,
            Theme::Dark => THEME_BUTTON_DARK,
        }
    }

    /// Foreground and background colors for the theme view.
    pub fn palette(&self) -> (Color, Color) {
        match self {
            Theme::Light => (Color::Black, Color::White),
            Theme::Dark => (Color::White, Color::Black),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}
