//! # deskpilot Protocols
//!
//! Core protocol definitions (traits) shared by the deskpilot crates.
//! Contains only interface definitions - no implementations.
//!
//! ## Core Traits
//!
//! - [`Tool`] - Trait for tool implementations

pub mod error;
pub mod tool;
pub mod types;

pub use error::ToolError;
pub use tool::{Tool, ToolContext, ToolDefinition, ToolResult};
pub use types::*;
