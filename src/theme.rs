//! Dark theme state for the application's root element.

use serde::{Deserialize, Serialize};

/// Class applied to the root element while the dark theme is active.
pub const DARK_THEME_CLASS: &str = "dark-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeState {
    pub dark: bool,
}

impl ThemeState {
    pub fn light() -> Self {
        Self { dark: false }
    }

    pub fn dark() -> Self {
        Self { dark: true }
    }
}

/// Returns the state with the dark flag flipped.
pub fn toggle_dark_theme(state: ThemeState) -> ThemeState {
    ThemeState { dark: !state.dark }
}

/// Classes the root element carries for `state`.
pub fn root_classes(state: &ThemeState) -> Vec<&'static str> {
    if state.dark {
        vec![DARK_THEME_CLASS]
    } else {
        Vec::new()
    }
}
