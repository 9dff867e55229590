//! UI Constants
//!
//! Centralized constants for window setup, files and the utility class scale.

/// Window title
pub const APP_TITLE: &str = "Welcome";

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 800.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 600.0;
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 240.0;

/// Settings file name inside the config directory
pub const SETTINGS_FILE_NAME: &str = "welcome-gui.toml";

/// Log file prefix inside `<data dir>/logs`
pub const LOG_FILE_PREFIX: &str = "welcome-gui.log";

/// Pixels per spacing step (`p-1` = 4px)
pub const SPACING_UNIT_PX: f32 = 4.0;

/// Default entrance animation length in milliseconds
pub const DEFAULT_ANIMATION_MS: u64 = 150;

/// Distance an entrance slide travels, one line of body text
pub const SLIDE_DISTANCE_PX: f32 = 24.0;
