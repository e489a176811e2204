//! Utility functions and helpers.

pub mod http;
pub mod text;

pub use text::normalize;
