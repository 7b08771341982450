//! Export module for rendering frames in external tool formats.
//!
//! Supported formats:
//! - **DOT**: Graphviz visualization with style-rule driven attributes
//! - **JSON**: D3.js and web-based tools

pub mod dot;
pub mod json;

pub use dot::{export_dot, export_dot_styled, export_dot_to_path, export_dot_to_writer, DotOptions};
pub use json::export_json;
