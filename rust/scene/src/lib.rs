//! # IFC-Scenemap Scene
//!
//! Converts an in-memory IFC object graph into a renderable scene graph
//! and keeps a reverse lookup from rendered shapes back to the objects
//! that produced them.
//!
//! The conversion is a recursive depth-first build over the model's
//! decomposition/containment relations, followed by a fix-up pass that
//! reconciles scene-graph nesting with placement-relative semantics
//! (the placement graph is independent of the containment graph).
//!
//! Entry point is [`SceneMapping`]:
//!
//! ```rust,ignore
//! use ifc_scenemap_scene::SceneMapping;
//!
//! let mut mapping = SceneMapping::new();
//! let root = mapping.load(&model, "https://example.org/assets/");
//! // ... later, after the model changed:
//! let same_root = mapping.update(&model)?;
//! assert_eq!(root, same_root);
//! ```

pub mod appearance;
pub mod builders;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod mapping;
pub mod objects;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3};

pub use appearance::{AmbientAppearance, Appearance};
pub use builders::{BuildContext, ItemBuilder, ItemRouter};
pub use error::{Error, Result};
pub use geometry::{Extrusion, Geometry, IndexedFaceSet, LineSet};
pub use graph::{meta, NodeContent, NodeId, SceneGraph, SceneNode};
pub use mapping::{PlacementResolver, SceneMapping};
pub use objects::ObjectBuilder;
