//! Layout - The Welcome Screen as Plain Data
//!
//! The view renders whatever tree [`welcome_layout`] returns. Keeping the tree
//! as data lets its structure be checked without opening a window.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Style-variant selector for the button control
///
/// Names follow shadcn/ui. `Default` is the filled accent button, which is
/// gpui-component's `primary`; `Secondary` is gpui-component's plain button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonAppearance {
    #[default]
    Default,
    Secondary,
    Destructive,
    Outline,
    Ghost,
    Link,
}

impl ButtonAppearance {
    pub const ALL: [ButtonAppearance; 6] = [
        ButtonAppearance::Default,
        ButtonAppearance::Secondary,
        ButtonAppearance::Destructive,
        ButtonAppearance::Outline,
        ButtonAppearance::Ghost,
        ButtonAppearance::Link,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ButtonAppearance::Default => "default",
            ButtonAppearance::Secondary => "secondary",
            ButtonAppearance::Destructive => "destructive",
            ButtonAppearance::Outline => "outline",
            ButtonAppearance::Ghost => "ghost",
            ButtonAppearance::Link => "link",
        }
    }
}

impl fmt::Display for ButtonAppearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ButtonAppearance {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|appearance| appearance.name() == s)
            .ok_or_else(|| Error::Invalid {
                message: format!("Unknown button appearance: {s}"),
            })
    }
}

/// A node of the visual tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Layout element grouping its children
    Container {
        classes: &'static str,
        children: Vec<Node>,
    },
    /// Text label
    Text {
        content: &'static str,
        classes: &'static str,
    },
    /// Button from the component library, no click handler
    Button {
        id: &'static str,
        label: &'static str,
        appearance: ButtonAppearance,
        classes: &'static str,
    },
}

impl Node {
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Container { children, .. } => children,
            Node::Text { .. } | Node::Button { .. } => &[],
        }
    }

    /// Pre-order walk over this node and all descendants
    pub fn walk(&self) -> Vec<&Node> {
        let mut nodes = vec![self];
        for child in self.children() {
            nodes.extend(child.walk());
        }
        nodes
    }
}

pub const WELCOME_TEXT: &str = "Welcome to This this project";
pub const BUTTON_LABEL: &str = "Hi";

/// The welcome screen: a padded container with a sliding greeting and one
/// outline button
pub fn welcome_layout() -> Node {
    Node::Container {
        classes: "p-30",
        children: vec![
            Node::Text {
                content: WELCOME_TEXT,
                classes: "animate-in slide-in-from-top duration-900",
            },
            Node::Button {
                id: "welcome-hi",
                label: BUTTON_LABEL,
                appearance: ButtonAppearance::Outline,
                classes: "bg-me ",
            },
        ],
    }
}
