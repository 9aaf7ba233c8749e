// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ExtrudedAreaSolid builder - extrusion of a harvested 2D cross-section.

use nalgebra::{Point2, Point3};
use tracing::warn;

use ifc_scenemap_model::{ItemKind, ProfileDef, RepresentationItem};

use super::{BuildContext, ItemBuilder, ItemRouter};
use crate::geometry::{Extrusion, Geometry};

/// ExtrudedAreaSolid builder.
///
/// The spine is two points, origin and `direction * depth`. The 2D
/// cross-section comes from build-and-harvest: the swept profile's
/// boundary curve is built through the router as if it were its own
/// shape, the resulting line geometry's point list is extracted, and
/// the throwaway result is discarded.
pub struct ExtrudedAreaSolidBuilder;

impl ExtrudedAreaSolidBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl ItemBuilder for ExtrudedAreaSolidBuilder {
    fn build(
        &self,
        item: &RepresentationItem,
        router: &ItemRouter,
        ctx: &mut BuildContext,
    ) -> Option<Geometry> {
        let RepresentationItem::ExtrudedAreaSolid {
            swept_area,
            direction,
            depth,
        } = item
        else {
            return None;
        };

        let cross_section = match swept_area {
            ProfileDef::ArbitraryClosed { outer_curve } => {
                harvest_cross_section(outer_curve, router, ctx)
            }
            ProfileDef::Unsupported(name) => {
                warn!(
                    profile = %name,
                    "unsupported swept-area kind, leaving cross-section empty"
                );
                Vec::new()
            }
        };

        let depth = depth * ctx.scale;
        Some(Geometry::Extrusion(Extrusion {
            cross_section,
            spine: [Point3::origin(), Point3::from(direction * depth)],
        }))
    }

    fn supported_kinds(&self) -> &'static [ItemKind] {
        &[ItemKind::ExtrudedAreaSolid]
    }
}

/// Build the boundary curve as a throwaway result and harvest its point
/// list as the 2D cross-section.
///
/// The point order follows the line geometry's index buffer when one is
/// present, split on the `-1` sentinel; only a single chain is
/// supported, extra chains are dropped with a warning.
fn harvest_cross_section(
    boundary: &RepresentationItem,
    router: &ItemRouter,
    ctx: &mut BuildContext,
) -> Vec<Point2<f64>> {
    let Some(geometry) = router.build_item(boundary, ctx) else {
        return Vec::new();
    };
    let Geometry::Lines(lines) = geometry else {
        warn!(
            kind = boundary.kind_name(),
            "swept profile boundary is not line geometry, leaving cross-section empty"
        );
        return Vec::new();
    };

    let chains = lines.chains();
    if chains.len() > 1 {
        warn!(
            chains = chains.len(),
            "swept profile boundary has multiple disjoint chains, only the first is supported"
        );
    }
    let Some(chain) = chains.into_iter().next() else {
        return Vec::new();
    };

    chain
        .into_iter()
        .filter_map(|index| lines.points.get(index))
        .map(|p| Point2::new(p.x, p.y))
        .collect()
}
