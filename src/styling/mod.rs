//! Styling - Utility Classes
//!
//! Presentation is written as short class strings and applied to any
//! `gpui::Styled` element.

pub mod apply;
pub mod classes;

pub use apply::{ResolvedClasses, with_entrance};
pub use classes::{ClassList, Edges, Entrance, Side, Utility};
