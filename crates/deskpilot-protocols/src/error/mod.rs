//! Error types for the deskpilot protocol layer.

mod tool;

pub use tool::*;
