//! Utility Class Parsing
//!
//! Turns Tailwind-style class strings such as `"p-30"` or
//! `"animate-in slide-in-from-top duration-900"` into typed [`Utility`] values.
//! Tokens that aren't understood are collected, never rejected.

use std::time::Duration;

use crate::constants::{DEFAULT_ANIMATION_MS, SPACING_UNIT_PX};

/// Which edges a spacing utility touches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edges {
    All,
    Horizontal,
    Vertical,
    Top,
    Right,
    Bottom,
    Left,
}

impl Edges {
    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "" => Some(Edges::All),
            "x" => Some(Edges::Horizontal),
            "y" => Some(Edges::Vertical),
            "t" => Some(Edges::Top),
            "r" => Some(Edges::Right),
            "b" => Some(Edges::Bottom),
            "l" => Some(Edges::Left),
            _ => None,
        }
    }
}

/// Side an entrance slide starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

/// A single resolved utility class
#[derive(Debug, Clone, PartialEq)]
pub enum Utility {
    /// Padding in pixels
    Padding(Edges, f32),
    /// Margin in pixels
    Margin(Edges, f32),
    /// Background color by palette name
    Background(String),
    /// `animate-in`
    AnimateIn,
    /// `slide-in-from-*`
    SlideIn(Side),
    /// `fade-in`
    FadeIn,
    /// `duration-N`
    Duration(Duration),
}

/// Entrance animation assembled from the animation utilities
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub slide: Option<Side>,
    pub fade: bool,
    pub duration: Duration,
}

/// Parsed class string
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassList {
    utilities: Vec<Utility>,
    unknown: Vec<String>,
}

impl ClassList {
    /// Parse a whitespace separated class string
    pub fn parse(classes: &str) -> Self {
        let mut list = ClassList::default();
        for token in classes.split_ascii_whitespace() {
            match parse_token(token) {
                Some(utility) => list.utilities.push(utility),
                None => list.unknown.push(token.to_string()),
            }
        }
        list
    }

    pub fn utilities(&self) -> &[Utility] {
        &self.utilities
    }

    /// Tokens that didn't match any utility
    pub fn unknown(&self) -> &[String] {
        &self.unknown
    }

    pub fn is_empty(&self) -> bool {
        self.utilities.is_empty() && self.unknown.is_empty()
    }

    /// Entrance animation, only present when `animate-in` is listed
    pub fn entrance(&self) -> Option<Entrance> {
        if !self.utilities.contains(&Utility::AnimateIn) {
            return None;
        }

        let mut entrance = Entrance {
            slide: None,
            fade: false,
            duration: Duration::from_millis(DEFAULT_ANIMATION_MS),
        };
        // Later tokens override earlier ones, as in CSS
        for utility in &self.utilities {
            match utility {
                Utility::SlideIn(side) => entrance.slide = Some(*side),
                Utility::FadeIn => entrance.fade = true,
                Utility::Duration(duration) => entrance.duration = *duration,
                _ => {}
            }
        }
        Some(entrance)
    }
}

fn parse_token(token: &str) -> Option<Utility> {
    match token {
        "animate-in" => return Some(Utility::AnimateIn),
        "fade-in" => return Some(Utility::FadeIn),
        _ => {}
    }

    if let Some(side) = token.strip_prefix("slide-in-from-") {
        let side = match side {
            "top" => Side::Top,
            "right" => Side::Right,
            "bottom" => Side::Bottom,
            "left" => Side::Left,
            _ => return None,
        };
        return Some(Utility::SlideIn(side));
    }

    if let Some(ms) = token.strip_prefix("duration-") {
        return ms
            .parse::<u64>()
            .ok()
            .map(|ms| Utility::Duration(Duration::from_millis(ms)));
    }

    if let Some(name) = token.strip_prefix("bg-") {
        return (!name.is_empty()).then(|| Utility::Background(name.to_string()));
    }

    let (prefix, value) = token.split_once('-')?;
    let mut chars = prefix.chars();
    let kind = chars.next()?;
    let edges = Edges::from_suffix(chars.as_str())?;
    let pixels = parse_spacing(value)?;
    match kind {
        'p' => Some(Utility::Padding(edges, pixels)),
        'm' => Some(Utility::Margin(edges, pixels)),
        _ => None,
    }
}

/// Spacing scale value in pixels: `px` is 1px, numbers are steps of 4px
fn parse_spacing(value: &str) -> Option<f32> {
    if value == "px" {
        return Some(1.0);
    }
    let steps: f32 = value.parse().ok()?;
    (steps.is_finite() && steps >= 0.0).then_some(steps * SPACING_UNIT_PX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_scale() {
        let list = ClassList::parse("p-30");
        assert_eq!(list.utilities(), &[Utility::Padding(Edges::All, 120.0)]);
        assert!(list.unknown().is_empty());
    }

    #[test]
    fn test_spacing_variants() {
        let list = ClassList::parse("px-2 py-0.5 mt-px ml-4");
        assert_eq!(
            list.utilities(),
            &[
                Utility::Padding(Edges::Horizontal, 8.0),
                Utility::Padding(Edges::Vertical, 2.0),
                Utility::Margin(Edges::Top, 1.0),
                Utility::Margin(Edges::Left, 16.0),
            ]
        );
    }

    #[test]
    fn test_trailing_whitespace_ignored() {
        let list = ClassList::parse("bg-me ");
        assert_eq!(list.utilities(), &[Utility::Background("me".to_string())]);
        assert!(list.unknown().is_empty());
    }

    #[test]
    fn test_unknown_tokens_collected() {
        let list = ClassList::parse("flex p-2 pz-3 p--1 bg- slide-in-from-nowhere");
        assert_eq!(list.utilities(), &[Utility::Padding(Edges::All, 8.0)]);
        assert_eq!(
            list.unknown(),
            &["flex", "pz-3", "p--1", "bg-", "slide-in-from-nowhere"]
        );
    }

    #[test]
    fn test_empty_string() {
        assert!(ClassList::parse("   ").is_empty());
    }

    #[test]
    fn test_entrance_from_classes() {
        let list = ClassList::parse("animate-in slide-in-from-top duration-900");
        assert_eq!(
            list.entrance(),
            Some(Entrance {
                slide: Some(Side::Top),
                fade: false,
                duration: Duration::from_millis(900),
            })
        );
    }

    #[test]
    fn test_entrance_requires_animate_in() {
        let list = ClassList::parse("slide-in-from-top duration-900");
        assert_eq!(list.entrance(), None);
    }

    #[test]
    fn test_entrance_defaults() {
        let entrance = ClassList::parse("animate-in fade-in").entrance();
        assert_eq!(
            entrance,
            Some(Entrance {
                slide: None,
                fade: true,
                duration: Duration::from_millis(DEFAULT_ANIMATION_MS),
            })
        );
    }

    #[test]
    fn test_later_duration_wins() {
        let entrance = ClassList::parse("animate-in duration-100 duration-300").entrance();
        assert_eq!(entrance.map(|e| e.duration), Some(Duration::from_millis(300)));
    }
}
