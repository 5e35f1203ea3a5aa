//! Tool catalog domain types
//!
//! Tools are supplied by the caller per request and are read-only to the
//! engine — this crate never executes them, it only selects one.

pub mod entities;

pub use entities::{ToolCallRequest, ToolCatalog, ToolDefinition, ToolParameter};
