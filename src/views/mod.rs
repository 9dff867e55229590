//! Views

pub mod welcome;

pub use welcome::WelcomeView;
