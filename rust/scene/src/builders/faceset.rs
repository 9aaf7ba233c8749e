// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! PolygonalFaceSet builder - indexed face geometry.

use tracing::warn;

use ifc_scenemap_model::{ItemKind, RepresentationItem};

use super::{scale_points, BuildContext, ItemBuilder, ItemRouter};
use crate::geometry::{Geometry, IndexedFaceSet};

/// PolygonalFaceSet builder.
///
/// Face indices are resolved through the optional point-name
/// indirection table, translated from 1-based to 0-based, and each face
/// is terminated with a `-1` sentinel. Coordinates are copied wholesale
/// from the model's point list.
pub struct PolygonalFaceSetBuilder;

impl PolygonalFaceSetBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl ItemBuilder for PolygonalFaceSetBuilder {
    fn build(
        &self,
        item: &RepresentationItem,
        _router: &ItemRouter,
        ctx: &mut BuildContext,
    ) -> Option<Geometry> {
        let RepresentationItem::PolygonalFaceSet {
            coordinates,
            faces,
            pn_index,
        } = item
        else {
            return None;
        };

        let mut indices: Vec<i32> = Vec::new();
        for face in faces {
            for &raw in &face.indices {
                let resolved = match pn_index {
                    Some(table) => match table.get((raw as usize).wrapping_sub(1)) {
                        Some(&mapped) => mapped,
                        None => {
                            warn!(index = raw, "face index outside point-name table, skipping");
                            continue;
                        }
                    },
                    None => raw,
                };
                indices.push(resolved as i32 - 1);
            }
            indices.push(-1);
        }

        Some(Geometry::Faces(IndexedFaceSet {
            coordinates: scale_points(coordinates, ctx.scale),
            indices,
        }))
    }

    fn supported_kinds(&self) -> &'static [ItemKind] {
        &[ItemKind::PolygonalFaceSet]
    }
}
