// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Model arena: object and placement storage with stable ids.

use slotmap::SlotMap;

use crate::object::ObjectDefinition;
use crate::placement::ObjectPlacement;

slotmap::new_key_type! {
    /// Stable handle to an [`ObjectDefinition`] inside a [`Model`].
    pub struct ObjectId;

    /// Stable handle to an [`ObjectPlacement`] inside a [`Model`].
    pub struct PlacementId;
}

/// The parsed building-information hierarchy.
///
/// Read-only during a conversion build. Relations are directed
/// parent-to-child id lists stored on the parent object; the placement
/// graph is logically independent of the containment graph, so an object
/// contained under A may well be placed relative to an object under B.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Model {
    objects: SlotMap<ObjectId, ObjectDefinition>,
    placements: SlotMap<PlacementId, ObjectPlacement>,
    root: Option<ObjectId>,
    /// Schema identifier from the file header (e.g. "IFC4"), mirrored
    /// onto the scene root as metadata.
    pub schema_identifier: String,
    /// Originating system from the file header.
    pub originating_system: String,
    /// Factor from file length units to meters (e.g. 0.001 for
    /// millimeter models). Applied to every coordinate and translation
    /// copied into the scene graph.
    pub length_unit_scale: f64,
}

impl Model {
    /// Create an empty model in base meters.
    pub fn new() -> Self {
        Self {
            objects: SlotMap::with_key(),
            placements: SlotMap::with_key(),
            root: None,
            schema_identifier: String::new(),
            originating_system: String::new(),
            length_unit_scale: 1.0,
        }
    }

    /// Insert an object definition and return its handle.
    pub fn add_object(&mut self, object: ObjectDefinition) -> ObjectId {
        self.objects.insert(object)
    }

    /// Insert a placement and return its handle.
    pub fn add_placement(&mut self, placement: ObjectPlacement) -> PlacementId {
        self.placements.insert(placement)
    }

    /// Look up an object by handle.
    pub fn object(&self, id: ObjectId) -> Option<&ObjectDefinition> {
        self.objects.get(id)
    }

    /// Mutable object access, used while wiring up relations.
    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut ObjectDefinition> {
        self.objects.get_mut(id)
    }

    /// Look up a placement by handle.
    pub fn placement(&self, id: PlacementId) -> Option<&ObjectPlacement> {
        self.placements.get(id)
    }

    /// Set the root object (the project).
    pub fn set_root(&mut self, root: ObjectId) {
        self.root = Some(root);
    }

    /// The root object, if any.
    pub fn root(&self) -> Option<ObjectId> {
        self.root
    }

    /// Number of objects in the model.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}
