//! Core frame types: objects, relationships, IDs, and the element seam.

use super::attribute::{AttributeMap, AttributeValue};
use serde::{Deserialize, Serialize};

/// Unique identifier for an object (caller-supplied, opaque).
pub type ObjectId = String;

/// Unique identifier for a relationship (monotonic counter).
pub type RelationshipId = u64;

/// Common accessor seam over objects and relationships.
///
/// Style predicates and the label resolver operate on elements through this
/// trait, so node and edge styling share one matching model.
pub trait Element {
    /// The element's declared type tag, if it has one.
    fn type_name(&self) -> Option<&str>;

    /// The element's attribute mapping.
    fn attributes(&self) -> &AttributeMap;
}

/// An object (node) in a design frame.
///
/// Objects represent model entities like stocks, flow rates, and auxiliaries.
/// The set of valid type tags is owned by the modeling library that produces
/// frames; this crate treats them as opaque strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Object {
    /// Unique identifier (caller-supplied)
    pub id: ObjectId,
    /// Declared type tag, e.g. "Stock" or "FlowRate"
    pub type_name: Option<String>,
    /// Flexible key-value metadata
    pub attributes: AttributeMap,
}

impl Object {
    /// Create a new typed object.
    pub fn new(
        id: impl Into<ObjectId>,
        type_name: impl Into<String>,
        attributes: AttributeMap,
    ) -> Self {
        Self {
            id: id.into(),
            type_name: Some(type_name.into()),
            attributes,
        }
    }

    /// Create an object with no type tag.
    ///
    /// Untyped objects never match a type predicate, so they only pick up
    /// attributes from match-all style rules.
    pub fn untyped(id: impl Into<ObjectId>, attributes: AttributeMap) -> Self {
        Self {
            id: id.into(),
            type_name: None,
            attributes,
        }
    }

    /// Add or update an attribute.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        self.attributes.insert(key, value);
    }

    /// Get an attribute value.
    pub fn get_attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }
}

impl Element for Object {
    fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }
}

/// A directed relationship (edge) between two objects in a design frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relationship {
    /// Unique identifier (assigned by frame)
    pub id: RelationshipId,
    /// Source object ID
    pub source_id: ObjectId,
    /// Target object ID
    pub target_id: ObjectId,
    /// Declared type tag, e.g. "Flow" or "Parameter"
    pub type_name: Option<String>,
    /// Optional metadata
    pub attributes: AttributeMap,
}

impl Relationship {
    /// Create a new relationship (ID will be assigned by frame).
    pub fn new(
        id: RelationshipId,
        source_id: impl Into<ObjectId>,
        target_id: impl Into<ObjectId>,
        type_name: Option<String>,
        attributes: AttributeMap,
    ) -> Self {
        Self {
            id,
            source_id: source_id.into(),
            target_id: target_id.into(),
            type_name,
            attributes,
        }
    }

    /// Add or update an attribute.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        self.attributes.insert(key, value);
    }

    /// Get an attribute value.
    pub fn get_attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }
}

impl Element for Relationship {
    fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }
}
