//! Appearance - Light, Dark or Follow the System

use gpui::{App, Window};
use gpui_component::{Theme, ThemeMode};
use serde::{Deserialize, Serialize};

/// Theme preference persisted in settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    /// Fixed mode, `None` when the system appearance should be followed
    pub fn mode(self) -> Option<ThemeMode> {
        match self {
            ThemePreference::Light => Some(ThemeMode::Light),
            ThemePreference::Dark => Some(ThemeMode::Dark),
            ThemePreference::System => None,
        }
    }

    /// Apply to the component library theme
    pub fn apply(self, window: &mut Window, cx: &mut App) {
        match self.mode() {
            Some(mode) => Theme::change(mode, Some(window), cx),
            None => Theme::sync_system_appearance(Some(window), cx),
        }
    }
}
