//! Welcome View
//!
//! Root view of the window. Renders the tree from [`welcome_layout`].

use gpui::{AnyElement, Context, IntoElement, ParentElement, Render, Window, div};
use gpui_component::button::{Button, ButtonVariants};
use tracing::debug;

use crate::layout::{ButtonAppearance, Node, welcome_layout};
use crate::styling::{ClassList, ResolvedClasses, with_entrance};
use crate::theme::Palette;

/// Layout node with its classes resolved once, so frames don't re-parse
enum ViewNode {
    Container {
        style: ResolvedClasses,
        children: Vec<ViewNode>,
    },
    Text {
        content: &'static str,
        style: ResolvedClasses,
    },
    Button {
        id: &'static str,
        label: &'static str,
        appearance: ButtonAppearance,
        style: ResolvedClasses,
    },
}

impl ViewNode {
    fn build(node: &Node, palette: &Palette) -> Self {
        let resolve = |classes: &str| ResolvedClasses::resolve(&ClassList::parse(classes), palette);
        match node {
            Node::Container { classes, children } => ViewNode::Container {
                style: resolve(*classes),
                children: children.iter().map(|child| Self::build(child, palette)).collect(),
            },
            Node::Text { content, classes } => ViewNode::Text {
                content: *content,
                style: resolve(*classes),
            },
            Node::Button {
                id,
                label,
                appearance,
                classes,
            } => ViewNode::Button {
                id: *id,
                label: *label,
                appearance: *appearance,
                style: resolve(*classes),
            },
        }
    }

    fn render(&self) -> AnyElement {
        match self {
            ViewNode::Container { style, children } => style
                .apply(div())
                .children(children.iter().map(ViewNode::render))
                .into_any_element(),
            ViewNode::Text { content, style } => {
                let text = style.apply(div().child(*content));
                match style.entrance() {
                    // Text is unique on the screen, so it doubles as the animation key
                    Some(entrance) => with_entrance(text, *content, entrance),
                    None => text.into_any_element(),
                }
            }
            ViewNode::Button {
                id,
                label,
                appearance,
                style,
            } => {
                let button = Button::new(*id).label(*label);
                let button = match appearance {
                    ButtonAppearance::Default => button.primary(),
                    ButtonAppearance::Secondary => button,
                    ButtonAppearance::Destructive => button.danger(),
                    ButtonAppearance::Outline => button.outline(),
                    ButtonAppearance::Ghost => button.ghost(),
                    ButtonAppearance::Link => button.link(),
                };
                style.apply(button).into_any_element()
            }
        }
    }
}

/// Static welcome screen
pub struct WelcomeView {
    root: ViewNode,
}

impl WelcomeView {
    pub fn new(palette: Palette) -> Self {
        let layout = welcome_layout();
        debug!(nodes = layout.walk().len(), "Welcome view created");
        Self {
            root: ViewNode::build(&layout, &palette),
        }
    }
}

impl Render for WelcomeView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        self.root.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unstyled() -> ResolvedClasses {
        ResolvedClasses::default()
    }

    #[test]
    fn test_tree_built_from_layout() {
        let root = ViewNode::build(&welcome_layout(), &Palette::default());
        let ViewNode::Container { style, children } = &root else {
            panic!("root must be a container");
        };
        assert_eq!(style.entrance(), None);
        assert_eq!(children.len(), 2);

        match &children[0] {
            ViewNode::Text { content, style } => {
                assert_eq!(*content, "Welcome to This this project");
                assert!(style.entrance().is_some());
            }
            _ => panic!("first child must be the greeting"),
        }

        match &children[1] {
            ViewNode::Button {
                label,
                appearance,
                style,
                ..
            } => {
                assert_eq!(*label, "Hi");
                assert_eq!(*appearance, ButtonAppearance::Outline);
                // `bg-me` has no color by default and is dropped while building
                assert_eq!(*style, unstyled());
            }
            _ => panic!("second child must be the button"),
        }
    }
}
