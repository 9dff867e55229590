//! Palette - Named Colors for `bg-*` Classes

use std::collections::BTreeMap;

use gpui::{rgb, rgba, Rgba};

use crate::error::{Error, Result};

/// Built-in colors, Tailwind 500 shades plus the basics
const BUILTIN: &[(&str, u32)] = &[
    ("white", 0xffffff),
    ("black", 0x000000),
    ("gray", 0x6b7280),
    ("red", 0xef4444),
    ("orange", 0xf97316),
    ("amber", 0xf59e0b),
    ("yellow", 0xeab308),
    ("green", 0x22c55e),
    ("teal", 0x14b8a6),
    ("blue", 0x3b82f6),
    ("indigo", 0x6366f1),
    ("purple", 0xa855f7),
    ("pink", 0xec4899),
];

/// Color lookup for background utilities
///
/// Built-in names win over user colors so a settings file can't repaint `white`.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    custom: BTreeMap<String, String>,
}

impl Palette {
    /// Create a palette extended with user colors (name -> `#rrggbb` / `#rgb`)
    pub fn with_custom(custom: BTreeMap<String, String>) -> Self {
        Self { custom }
    }

    /// Look up a color by name
    ///
    /// `Ok(None)` means the name is unknown; `Err` means a user color exists
    /// but its value can't be parsed.
    pub fn resolve(&self, name: &str) -> Result<Option<Rgba>> {
        if name == "transparent" {
            return Ok(Some(rgba(0x00000000)));
        }
        if let Some((_, hex)) = BUILTIN.iter().find(|(n, _)| *n == name) {
            return Ok(Some(rgb(*hex)));
        }
        match self.custom.get(name) {
            Some(value) => parse_hex_color(value).map(Some),
            None => Ok(None),
        }
    }
}

/// Parse `#rrggbb` or `#rgb`
pub fn parse_hex_color(value: &str) -> Result<Rgba> {
    let invalid = || Error::Invalid {
        message: format!("Invalid color {value:?}, expected #rrggbb or #rgb"),
    };

    let digits = value.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let hex = match digits.len() {
        6 => u32::from_str_radix(digits, 16).map_err(|_| invalid())?,
        3 => {
            let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
            u32::from_str_radix(&expanded, 16).map_err(|_| invalid())?
        }
        _ => return Err(invalid()),
    };

    Ok(rgb(hex))
}
