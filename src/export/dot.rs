//! DOT format export for Graphviz visualization.
//!
//! Renders a frame as a named `digraph` block: one node statement per object,
//! one edge statement per relationship, presentation attributes resolved from
//! an ordered style rule list. Output is deterministic for a given frame and
//! style.

use crate::error::{FrameError, Result};
use crate::frame::{Element, Frame};
use crate::style::{resolve_attributes, DotStyle};
use indexmap::IndexMap;
use log::{debug, info};
use std::io::Write;
use std::path::Path;

/// Options for styling DOT export.
#[derive(Debug, Clone)]
pub struct DotOptions {
    /// Name of the graph in the output file
    pub graph_name: String,
    /// Node attribute used as the node label
    pub label_attribute: String,
    /// Label used if a node has no label attribute
    pub missing_label: String,
    /// Node and edge style rules
    pub style: DotStyle,
}

impl Default for DotOptions {
    fn default() -> Self {
        DotOptions {
            graph_name: "output".to_string(),
            label_attribute: "id".to_string(),
            missing_label: "(none)".to_string(),
            style: DotStyle::default(),
        }
    }
}

/// Export a frame to Graphviz DOT format with the default options.
///
/// # Errors
///
/// Returns [`FrameError::DanglingReference`] if a relationship endpoint has
/// no object behind it; no output is produced in that case.
pub fn export_dot(frame: &Frame) -> Result<String> {
    export_dot_styled(frame, &DotOptions::default())
}

/// Export a frame to Graphviz DOT format with custom options.
///
/// Objects and relationships are emitted in the frame's own iteration order.
/// Each node statement carries the resolved style attributes plus a `label`
/// key computed from `options.label_attribute`; the computed label always
/// wins over a `label` set by a style rule.
///
/// # Errors
///
/// Returns [`FrameError::DanglingReference`] if a relationship endpoint has
/// no object behind it; no output is produced in that case.
pub fn export_dot_styled(frame: &Frame, options: &DotOptions) -> Result<String> {
    debug!(
        "Exporting frame to DOT: {} objects, {} relationships",
        frame.object_count(),
        frame.relationship_count()
    );

    let mut output = String::new();

    // Header
    output.push_str(&format!("digraph {} {{\n", format_id(&options.graph_name)));

    // Node statements
    for object in frame.objects() {
        let mut attributes = resolve_attributes(object, &options.style.node_rules);
        let label = resolve_label(object, &options.label_attribute, &options.missing_label);
        attributes.insert("label".to_string(), label);

        output.push_str(&format!(
            "    {}{};\n",
            format_id(&object.id),
            format_attribute_list(&attributes)
        ));
    }

    // Edge statements
    for relationship in frame.relationships() {
        for endpoint in [&relationship.source_id, &relationship.target_id] {
            if !frame.contains_object(endpoint) {
                return Err(FrameError::DanglingReference {
                    relationship_id: relationship.id,
                    object_id: endpoint.clone(),
                });
            }
        }

        let attributes = resolve_attributes(relationship, &options.style.edge_rules);

        output.push_str(&format!(
            "    {} -> {}{};\n",
            format_id(&relationship.source_id),
            format_id(&relationship.target_id),
            format_attribute_list(&attributes)
        ));
    }

    output.push_str("}\n");

    Ok(output)
}

/// Export a frame to a DOT file at the given path.
///
/// The full document is rendered (and all validation performed) before the
/// file is created, so a failed export never leaves a partial file behind.
///
/// # Errors
///
/// Returns [`FrameError::DanglingReference`] for a broken frame, or
/// [`FrameError::Sink`] if the destination cannot be written.
pub fn export_dot_to_path(frame: &Frame, options: &DotOptions, path: &Path) -> Result<()> {
    let output = export_dot_styled(frame, options)?;

    info!("Writing DOT output to {}", path.display());
    std::fs::write(path, output).map_err(|e| {
        FrameError::sink(
            format!("Failed to write DOT file: {}", path.display()),
            Some(e),
        )
    })
}

/// Export a frame as DOT to a writable stream.
///
/// The document is rendered up front and handed to the writer as a single
/// `write_all` call.
///
/// # Errors
///
/// Returns [`FrameError::DanglingReference`] for a broken frame, or
/// [`FrameError::Sink`] if the stream write fails.
pub fn export_dot_to_writer(
    frame: &Frame,
    options: &DotOptions,
    writer: &mut impl Write,
) -> Result<()> {
    let output = export_dot_styled(frame, options)?;

    writer
        .write_all(output.as_bytes())
        .map_err(|e| FrameError::sink("Failed to write DOT stream", Some(e)))
}

/// Resolve the display label for an element.
///
/// Looks up `label_attribute` in the element's attributes: strings are
/// returned as-is and numbers rendered in decimal form. A missing attribute
/// falls back to `missing_label` verbatim; resolution never fails.
fn resolve_label<E: Element>(element: &E, label_attribute: &str, missing_label: &str) -> String {
    match element.attributes().get(label_attribute) {
        Some(value) => value.to_string(),
        None => missing_label.to_string(),
    }
}

/// Format a resolved attribute mapping as ` [key="value", ...]`.
///
/// An empty mapping produces an empty string, so the statement carries no
/// bracket list at all.
fn format_attribute_list(attributes: &IndexMap<String, String>) -> String {
    if attributes.is_empty() {
        return String::new();
    }

    let body = attributes
        .iter()
        .map(|(key, value)| format!("{}=\"{}\"", key, escape_dot(value)))
        .collect::<Vec<_>>()
        .join(", ");

    format!(" [{body}]")
}

/// Format an identifier for a node statement or graph name.
///
/// Identifier-safe strings (alphanumeric/underscore, not digit-leading, or
/// purely numeric) are emitted bare; anything else is quoted and escaped.
/// DOT keywords are quoted even though they are identifier-shaped, otherwise
/// a node named `node` would parse as a default-attribute statement.
fn format_id(id: &str) -> String {
    if is_identifier(id) && !is_keyword(id) {
        id.to_string()
    } else {
        format!("\"{}\"", escape_dot(id))
    }
}

fn is_keyword(s: &str) -> bool {
    ["digraph", "edge", "graph", "node", "strict", "subgraph"]
        .iter()
        .any(|keyword| s.eq_ignore_ascii_case(keyword))
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    if first.is_ascii_digit() {
        s.chars().all(|c| c.is_ascii_digit())
    } else {
        (first.is_ascii_alphabetic() || first == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }
}

/// Escape special characters for quoted DOT strings.
fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{AttributeMap, Object};

    #[test]
    fn test_escape_dot() {
        assert_eq!(escape_dot("hello"), "hello");
        assert_eq!(escape_dot("back\\slash"), "back\\\\slash");
        assert_eq!(escape_dot("quote\"here"), "quote\\\"here");
    }

    #[test]
    fn test_format_id() {
        assert_eq!(format_id("water_level"), "water_level");
        assert_eq!(format_id("_tmp1"), "_tmp1");
        assert_eq!(format_id("42"), "42");
        assert_eq!(format_id("1st"), "\"1st\"");
        assert_eq!(format_id("fill rate"), "\"fill rate\"");
        assert_eq!(format_id(""), "\"\"");
    }

    #[test]
    fn test_format_id_quotes_keywords() {
        assert_eq!(format_id("node"), "\"node\"");
        assert_eq!(format_id("Graph"), "\"Graph\"");
        assert_eq!(format_id("nodes"), "nodes");
    }

    #[test]
    fn test_format_attribute_list_empty() {
        assert_eq!(format_attribute_list(&IndexMap::new()), "");
    }

    #[test]
    fn test_resolve_label_fallback() {
        let object = Object::new("tank", "Stock", AttributeMap::new());
        assert_eq!(resolve_label(&object, "name", "(none)"), "(none)");

        let object = Object::new(
            "tank",
            "Stock",
            AttributeMap::new().with("name", "Water tank"),
        );
        assert_eq!(resolve_label(&object, "name", "(none)"), "Water tank");
    }

    #[test]
    fn test_resolve_label_renders_numbers() {
        let object = Object::new("tank", "Stock", AttributeMap::new().with("level", 42i64));
        assert_eq!(resolve_label(&object, "level", "(none)"), "42");

        let object = Object::new("tank", "Stock", AttributeMap::new().with("level", 2.5));
        assert_eq!(resolve_label(&object, "level", "(none)"), "2.5");
    }
}
