//! Theme - Palette and Appearance

pub mod mode;
pub mod palette;

pub use mode::ThemePreference;
pub use palette::{Palette, parse_hex_color};
