//! Applying Utilities to GPUI Elements
//!
//! Classes are resolved against the palette once, when a view is built.
//! Applying the result is side-effect free, so it is safe on every frame.

use gpui::{
    Animation, AnimationExt, AnyElement, ElementId, IntoElement, Pixels, Rgba, Styled, ease_in_out,
    px,
};
use tracing::{debug, warn};

use super::classes::{ClassList, Edges, Entrance, Side, Utility};
use crate::constants::SLIDE_DISTANCE_PX;
use crate::theme::Palette;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Resolved {
    Padding(Edges, Pixels),
    Margin(Edges, Pixels),
    Background(Rgba),
}

/// Class list with colors looked up, ready to apply to elements
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedClasses {
    styles: Vec<Resolved>,
    entrance: Option<Entrance>,
}

impl ResolvedClasses {
    /// Resolve `classes` against `palette`
    ///
    /// Unknown tokens and colors are logged here and dropped.
    pub fn resolve(classes: &ClassList, palette: &Palette) -> Self {
        let mut styles = Vec::new();
        for utility in classes.utilities() {
            match utility {
                Utility::Padding(edges, value) => styles.push(Resolved::Padding(*edges, px(*value))),
                Utility::Margin(edges, value) => styles.push(Resolved::Margin(*edges, px(*value))),
                Utility::Background(name) => match palette.resolve(name) {
                    Ok(Some(color)) => styles.push(Resolved::Background(color)),
                    Ok(None) => debug!(color = %name, "Unknown background color, class ignored"),
                    Err(e) => {
                        warn!(color = %name, error = %e, "Invalid custom color, class ignored")
                    }
                },
                Utility::AnimateIn | Utility::SlideIn(_) | Utility::FadeIn | Utility::Duration(_) => {}
            }
        }

        for token in classes.unknown() {
            debug!(class = %token, "Unrecognized utility class");
        }

        Self {
            styles,
            entrance: classes.entrance(),
        }
    }

    /// Entrance animation, see [`with_entrance`]
    pub fn entrance(&self) -> Option<Entrance> {
        self.entrance
    }

    /// Apply the static styles to `element`; animation is not included
    pub fn apply<E: Styled>(&self, mut element: E) -> E {
        for style in &self.styles {
            element = match *style {
                Resolved::Padding(edges, value) => padding(element, edges, value),
                Resolved::Margin(edges, value) => margin(element, edges, value),
                Resolved::Background(color) => element.bg(color),
            };
        }
        element
    }
}

fn padding<E: Styled>(element: E, edges: Edges, value: Pixels) -> E {
    match edges {
        Edges::All => element.p(value),
        Edges::Horizontal => element.px(value),
        Edges::Vertical => element.py(value),
        Edges::Top => element.pt(value),
        Edges::Right => element.pr(value),
        Edges::Bottom => element.pb(value),
        Edges::Left => element.pl(value),
    }
}

fn margin<E: Styled>(element: E, edges: Edges, value: Pixels) -> E {
    match edges {
        Edges::All => element.m(value),
        Edges::Horizontal => element.mx(value),
        Edges::Vertical => element.my(value),
        Edges::Top => element.mt(value),
        Edges::Right => element.mr(value),
        Edges::Bottom => element.mb(value),
        Edges::Left => element.ml(value),
    }
}

/// Wrap `element` in its entrance animation
///
/// The animation state is keyed by `id`, so it plays once and later renders
/// show the settled element.
pub fn with_entrance<E>(element: E, id: impl Into<ElementId>, entrance: Entrance) -> AnyElement
where
    E: IntoElement + Styled + 'static,
{
    if entrance.duration.is_zero() {
        return element.into_any_element();
    }

    let animation = Animation::new(entrance.duration).with_easing(ease_in_out);
    element
        .relative()
        .with_animation(id, animation, move |element, delta| {
            let offset = px(SLIDE_DISTANCE_PX * (1.0 - delta));
            let element = match entrance.slide {
                Some(Side::Top) => element.top(-offset),
                Some(Side::Bottom) => element.top(offset),
                Some(Side::Left) => element.left(-offset),
                Some(Side::Right) => element.left(offset),
                None => element,
            };
            if entrance.fade {
                element.opacity(delta)
            } else {
                element
            }
        })
        .into_any_element()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::{DefiniteLength, div, rgb};
    use std::collections::BTreeMap;

    fn styled_div(classes: &str, palette: &Palette) -> gpui::Div {
        ResolvedClasses::resolve(&ClassList::parse(classes), palette).apply(div())
    }

    fn palette_with_me(value: &str) -> Palette {
        let mut custom = BTreeMap::new();
        custom.insert("me".to_string(), value.to_string());
        Palette::with_custom(custom)
    }

    fn length(value: f32) -> Option<DefiniteLength> {
        Some(px(value).into())
    }

    #[test]
    fn test_padding_all_edges() {
        let mut element = styled_div("p-30", &Palette::default());
        let padding = &element.style().padding;
        assert_eq!(padding.top, length(120.0));
        assert_eq!(padding.right, length(120.0));
        assert_eq!(padding.bottom, length(120.0));
        assert_eq!(padding.left, length(120.0));
    }

    #[test]
    fn test_padding_single_edges() {
        let mut element = styled_div("pt-1 pr-2 pb-3 pl-4", &Palette::default());
        let padding = &element.style().padding;
        assert_eq!(padding.top, length(4.0));
        assert_eq!(padding.right, length(8.0));
        assert_eq!(padding.bottom, length(12.0));
        assert_eq!(padding.left, length(16.0));
    }

    #[test]
    fn test_unknown_background_leaves_element_unchanged() {
        let mut element = styled_div("bg-me ", &Palette::default());
        assert!(element.style().background.is_none());
    }

    #[test]
    fn test_custom_background_is_painted() {
        let mut element = styled_div("bg-me", &palette_with_me("#112233"));
        let mut expected = div().bg(rgb(0x112233));
        assert!(element.style().background.is_some());
        assert!(element.style().background == expected.style().background);
    }

    #[test]
    fn test_invalid_custom_background_is_ignored() {
        let mut element = styled_div("bg-me", &palette_with_me("nope"));
        assert!(element.style().background.is_none());
    }

    #[test]
    fn test_resolution_drops_unresolved_colors() {
        let classes = ClassList::parse("bg-me p-1");
        let resolved = ResolvedClasses::resolve(&classes, &Palette::default());
        let expected = ResolvedClasses::resolve(&ClassList::parse("p-1"), &Palette::default());
        assert_eq!(resolved, expected);
    }

    #[test]
    fn test_entrance_carried_through() {
        let classes = ClassList::parse("animate-in slide-in-from-top duration-900");
        let resolved = ResolvedClasses::resolve(&classes, &Palette::default());
        assert_eq!(resolved.entrance(), classes.entrance());
        assert!(resolved.entrance().is_some());
    }
}
