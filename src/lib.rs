//! Welcome GUI Library
//!
//! A single-window GPUI application showing a welcome message and one
//! outline button from `gpui-component`.

pub mod app;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod layout;
pub mod settings;
pub mod styling;
pub mod theme;
pub mod views;
