// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Object definitions: common attributes plus a capability-tagged kind
//! payload instead of a deep inheritance chain.

use crate::material::Material;
use crate::model::{ObjectId, PlacementId};
use crate::representation::Representation;

/// One object in the model graph.
///
/// Attributes shared by every kind live here; kind-specific attributes
/// (containment, voids, tags, project phase) live in the [`ObjectKind`]
/// variant payload.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectDefinition {
    /// IFC class name, e.g. "IfcWallStandardCase".
    pub class_name: String,
    pub name: String,
    pub description: String,
    /// Globally unique id string; may be empty for synthetic objects.
    pub guid: String,
    pub object_type: String,
    /// Decomposition relation, parent to children.
    pub decomposed_by: Vec<ObjectId>,
    /// Material association, if any.
    pub material: Option<Material>,
    pub kind: ObjectKind,
}

/// Kind-specific payload of an [`ObjectDefinition`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectKind {
    /// The project context. No placement, no representation.
    Project { phase: String },
    /// Spatial element (site, building, storey, space) owning
    /// containment relations to products.
    Spatial {
        long_name: String,
        /// Containment relation to contained products.
        contains: Vec<ObjectId>,
        product: ProductData,
    },
    /// Element with voiding relations to opening elements.
    Element {
        tag: String,
        voided_by: Vec<ObjectId>,
        product: ProductData,
    },
    /// Plain product without element or spatial capabilities.
    Product { product: ProductData },
}

/// Placement and representation shared by every product-like kind.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductData {
    pub placement: Option<PlacementId>,
    pub representation: Option<Representation>,
}

impl ObjectDefinition {
    /// Create an object with the given class name, name and kind; the
    /// remaining attributes start out empty.
    pub fn new(class_name: impl Into<String>, name: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            class_name: class_name.into(),
            name: name.into(),
            description: String::new(),
            guid: String::new(),
            object_type: String::new(),
            decomposed_by: Vec::new(),
            material: None,
            kind,
        }
    }

    /// Product payload for product-like kinds, `None` for projects.
    pub fn product(&self) -> Option<&ProductData> {
        match &self.kind {
            ObjectKind::Project { .. } => None,
            ObjectKind::Spatial { product, .. }
            | ObjectKind::Element { product, .. }
            | ObjectKind::Product { product } => Some(product),
        }
    }

    /// The object's placement, if it is a placed product.
    pub fn placement(&self) -> Option<PlacementId> {
        self.product().and_then(|p| p.placement)
    }

    /// The object's representation, if any.
    pub fn representation(&self) -> Option<&Representation> {
        self.product().and_then(|p| p.representation.as_ref())
    }
}
