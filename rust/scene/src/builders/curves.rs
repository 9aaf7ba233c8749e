// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Curve builders - Polyline and IndexedPolyCurve line geometry.

use tracing::warn;

use ifc_scenemap_model::{CurveSegment, ItemKind, RepresentationItem};

use super::{scale_points, BuildContext, ItemBuilder, ItemRouter};
use crate::geometry::{Geometry, LineSet};

/// Polyline builder: a line geometry listing the points in order, one
/// vertex per point.
pub struct PolylineBuilder;

impl PolylineBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl ItemBuilder for PolylineBuilder {
    fn build(
        &self,
        item: &RepresentationItem,
        _router: &ItemRouter,
        ctx: &mut BuildContext,
    ) -> Option<Geometry> {
        let RepresentationItem::Polyline { points } = item else {
            return None;
        };
        Some(Geometry::Lines(LineSet {
            points: scale_points(points, ctx.scale),
            indices: None,
        }))
    }

    fn supported_kinds(&self) -> &'static [ItemKind] {
        &[ItemKind::Polyline]
    }
}

/// IndexedPolyCurve builder.
///
/// Without segments the curve degrades to the straight-line behavior of
/// [`PolylineBuilder`] over its point list. With segments it becomes a
/// strip-mode indexed line set: each segment's 1-based index list is
/// appended 0-based and terminated with a `-1` sentinel.
pub struct IndexedPolyCurveBuilder;

impl IndexedPolyCurveBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl ItemBuilder for IndexedPolyCurveBuilder {
    fn build(
        &self,
        item: &RepresentationItem,
        _router: &ItemRouter,
        ctx: &mut BuildContext,
    ) -> Option<Geometry> {
        let RepresentationItem::IndexedPolyCurve { points, segments } = item else {
            return None;
        };

        if segments.is_empty() {
            return Some(Geometry::Lines(LineSet {
                points: scale_points(points, ctx.scale),
                indices: None,
            }));
        }

        let mut indices: Vec<i32> = Vec::new();
        for segment in segments {
            match segment {
                CurveSegment::LineIndex(segment_indices) => {
                    push_segment(&mut indices, segment_indices);
                }
                CurveSegment::ArcIndex(segment_indices) => {
                    push_segment(&mut indices, segment_indices);
                }
                CurveSegment::Unsupported(name) => {
                    warn!(segment = %name, "unsupported curve segment kind, skipping");
                }
            }
        }

        Some(Geometry::Lines(LineSet {
            points: scale_points(points, ctx.scale),
            indices: Some(indices),
        }))
    }

    fn supported_kinds(&self) -> &'static [ItemKind] {
        &[ItemKind::IndexedPolyCurve]
    }
}

/// Append one segment's indices (1-based in the model, 0-based on
/// output) followed by the `-1` terminator.
fn push_segment(indices: &mut Vec<i32>, segment: &[u32]) {
    for &index in segment {
        indices.push(index as i32 - 1);
    }
    indices.push(-1);
}
