//! # framedot
//!
//! Style-driven Graphviz DOT export for stock-and-flow design frames.
//!
//! ## Core Principles
//!
//! - **Frame Agnostic**: Bring your own design store, we render the snapshot
//! - **Deterministic Output**: Same frame + same style = same text, always
//! - **Fail Fast**: Broken endpoint references abort the export, never produce partial files
//! - **Zero Magic**: Styling is an explicit ordered rule list, no implicit global state
//!
//! ## Architecture
//!
//! ```text
//! Design store (frame producer)
//!     ↓
//! Frame (objects, relationships, attributes)
//!     ↓
//! Style rules (predicate matching, overlay merging)
//!     ↓
//! Exporters (DOT, JSON)
//!     ↓
//! Sink (string, file, stream)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use framedot::{AttributeMap, Frame, Object};
//!
//! let mut frame = Frame::new();
//! frame.add_object(Object::new(
//!     "tank",
//!     "Stock",
//!     AttributeMap::new().with("name", "Water tank"),
//! )).unwrap();
//! frame.add_object(Object::new("tap", "FlowRate", AttributeMap::new())).unwrap();
//! frame.add_relationship("tap", "tank", "Flow", AttributeMap::new());
//!
//! // Render with the built-in stock-and-flow style
//! let dot = frame.export_dot().unwrap();
//! assert!(dot.starts_with("digraph output {"));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod export;
pub mod frame;
pub mod style;

// Re-export main types
pub use error::{FrameError, Result};
pub use export::{
    export_dot, export_dot_styled, export_dot_to_path, export_dot_to_writer, export_json,
    DotOptions,
};
pub use frame::{
    AttributeMap, AttributeValue, Element, Frame, Object, ObjectId, Relationship, RelationshipId,
};
pub use style::{resolve_attributes, DotStyle, StylePredicate, StyleRule};
