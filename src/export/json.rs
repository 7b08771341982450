//! JSON format export for web-based visualization tools.
//!
//! Generates JSON with "nodes" and "links" arrays compatible with D3.js
//! force-directed layouts. No styling is applied; elements carry their raw
//! attribute mappings.

use crate::frame::{AttributeMap, AttributeValue, Frame};
use serde_json::{json, Value};

/// Export a frame to D3.js-compatible JSON format.
///
/// Nodes and links follow the frame's own iteration order. Serialization
/// itself cannot fail for frame data, so this returns the document directly.
pub fn export_json(frame: &Frame) -> String {
    let mut nodes_array = Vec::new();
    let mut links_array = Vec::new();

    for object in frame.objects() {
        nodes_array.push(json!({
            "id": object.id,
            "type": object.type_name,
            "attributes": attributes_to_json(&object.attributes),
        }));
    }

    for relationship in frame.relationships() {
        links_array.push(json!({
            "id": relationship.id,
            "source": relationship.source_id,
            "target": relationship.target_id,
            "type": relationship.type_name,
            "attributes": attributes_to_json(&relationship.attributes),
        }));
    }

    let result = json!({
        "nodes": nodes_array,
        "links": links_array,
    });

    // serde_json::to_string_pretty cannot fail for these value trees
    serde_json::to_string_pretty(&result).expect("Failed to serialize JSON")
}

/// Convert an AttributeMap to a JSON object.
fn attributes_to_json(attributes: &AttributeMap) -> Value {
    let mut obj = serde_json::Map::new();

    for (key, value) in attributes.iter() {
        let json_value = match value {
            AttributeValue::String(s) => json!(s),
            AttributeValue::Int(i) => json!(i),
            AttributeValue::Float(f) => json!(f),
            AttributeValue::Bool(b) => json!(b),
        };
        obj.insert(key.clone(), json_value);
    }

    Value::Object(obj)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_to_json() {
        let mut attributes = AttributeMap::new();
        attributes.insert("name", "tank");
        attributes.insert("capacity", 42);

        let json = attributes_to_json(&attributes);
        assert!(json.is_object());
        assert_eq!(json["name"], "tank");
        assert_eq!(json["capacity"], 42);
    }
}
