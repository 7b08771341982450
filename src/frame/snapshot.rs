//! The frame container: an ordered, in-memory design graph snapshot.

use super::attribute::AttributeMap;
use super::types::{Object, ObjectId, Relationship, RelationshipId};
use crate::error::{FrameError, Result};
use log::{debug, trace};
use std::collections::HashMap;

/// A snapshot of a design graph: typed objects plus typed relationships.
///
/// Frames are produced by an external design store and consumed read-only by
/// the exporters. Objects and relationships iterate in insertion order, which
/// is the order the exporters emit them in. The container checks object ID
/// uniqueness but not relationship endpoints; endpoint integrity belongs to
/// the frame's producer, and the DOT exporter re-checks it before emitting
/// (see [`crate::export::export_dot_styled`]).
#[derive(Debug, Clone, Default)]
pub struct Frame {
    objects: Vec<Object>,
    // Object slot index for O(1) lookups by ID
    index: HashMap<ObjectId, usize>,
    relationships: Vec<Relationship>,
    relationship_counter: RelationshipId,
}

impl Frame {
    /// Create a new empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object to the frame.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::DuplicateObject`] if an object with the same ID
    /// is already present.
    pub fn add_object(&mut self, object: Object) -> Result<()> {
        if self.index.contains_key(&object.id) {
            return Err(FrameError::DuplicateObject {
                object_id: object.id.clone(),
            });
        }

        debug!(
            "Adding object: id={}, type={}",
            object.id,
            object.type_name.as_deref().unwrap_or("(untyped)")
        );
        self.index.insert(object.id.clone(), self.objects.len());
        self.objects.push(object);

        Ok(())
    }

    /// Add a relationship to the frame.
    ///
    /// Endpoints are recorded as given; they are not checked against the
    /// frame's objects here. A relationship whose endpoint never arrives
    /// surfaces as [`FrameError::DanglingReference`] at export time.
    ///
    /// # Returns
    ///
    /// The unique ID assigned to the created relationship.
    pub fn add_relationship(
        &mut self,
        source_id: impl Into<ObjectId>,
        target_id: impl Into<ObjectId>,
        type_name: impl Into<String>,
        attributes: AttributeMap,
    ) -> RelationshipId {
        let relationship_id = self.next_relationship_id();
        let relationship = Relationship::new(
            relationship_id,
            source_id,
            target_id,
            Some(type_name.into()),
            attributes,
        );

        debug!(
            "Adding relationship: id={}, source={}, target={}",
            relationship_id, relationship.source_id, relationship.target_id
        );
        self.relationships.push(relationship);
        trace!("Relationship {relationship_id} added successfully");

        relationship_id
    }

    /// Add a relationship with no type tag.
    ///
    /// Untyped relationships never match a type predicate, so they only pick
    /// up attributes from match-all style rules.
    pub fn add_untyped_relationship(
        &mut self,
        source_id: impl Into<ObjectId>,
        target_id: impl Into<ObjectId>,
        attributes: AttributeMap,
    ) -> RelationshipId {
        let relationship_id = self.next_relationship_id();
        let relationship =
            Relationship::new(relationship_id, source_id, target_id, None, attributes);

        self.relationships.push(relationship);

        relationship_id
    }

    /// Get an object by ID.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::ObjectNotFound`] if the object doesn't exist.
    pub fn get_object(&self, id: &str) -> Result<&Object> {
        self.index
            .get(id)
            .map(|slot| &self.objects[*slot])
            .ok_or_else(|| FrameError::ObjectNotFound {
                object_id: id.to_string(),
            })
    }

    /// Check if an object with the given ID exists.
    pub fn contains_object(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Iterate over all objects in insertion order.
    pub fn objects(&self) -> impl Iterator<Item = &Object> {
        self.objects.iter()
    }

    /// Iterate over all relationships in insertion order.
    pub fn relationships(&self) -> impl Iterator<Item = &Relationship> {
        self.relationships.iter()
    }

    /// Get the total number of objects in the frame.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Get the total number of relationships in the frame.
    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    // ===== Export Methods =====

    /// Export the frame to Graphviz DOT format with the default style.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::DanglingReference`] if a relationship endpoint
    /// has no object behind it.
    pub fn export_dot(&self) -> Result<String> {
        crate::export::export_dot(self)
    }

    /// Export the frame to Graphviz DOT format with custom options.
    pub fn export_dot_styled(&self, options: &crate::export::DotOptions) -> Result<String> {
        crate::export::export_dot_styled(self, options)
    }

    /// Export the frame to JSON (nodes/links arrays) for web-based viewers.
    pub fn export_json(&self) -> String {
        crate::export::export_json(self)
    }

    // Private helper methods

    fn next_relationship_id(&mut self) -> RelationshipId {
        let id = self.relationship_counter;
        self.relationship_counter += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_object_rejected() {
        let mut frame = Frame::new();
        frame
            .add_object(Object::new("tank", "Stock", AttributeMap::new()))
            .unwrap();

        let result = frame.add_object(Object::new("tank", "Stock", AttributeMap::new()));
        assert!(matches!(
            result,
            Err(FrameError::DuplicateObject { object_id }) if object_id == "tank"
        ));
    }

    #[test]
    fn test_objects_iterate_in_insertion_order() {
        let mut frame = Frame::new();
        for id in ["c", "a", "b"] {
            frame
                .add_object(Object::new(id, "Auxiliary", AttributeMap::new()))
                .unwrap();
        }

        let ids: Vec<&str> = frame.objects().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_relationship_ids_are_monotonic() {
        let mut frame = Frame::new();
        let first = frame.add_relationship("a", "b", "Flow", AttributeMap::new());
        let second = frame.add_relationship("b", "c", "Flow", AttributeMap::new());

        assert_eq!(first, 0);
        assert_eq!(second, 1);
    }
}
