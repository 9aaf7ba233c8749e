// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tests for geometry item builders.

use nalgebra::{Point3, Vector3};
use smallvec::smallvec;

use ifc_scenemap_model::{
    CurveSegment, IndexedFace, Material, Model, ProfileDef, RepresentationItem,
};

use super::{BuildContext, ItemRouter};
use crate::appearance::Appearance;
use crate::geometry::Geometry;
use crate::graph::{NodeContent, SceneGraph};

fn build(item: &RepresentationItem) -> Option<Geometry> {
    let model = Model::new();
    let mut graph = SceneGraph::new();
    let mut ctx = BuildContext::new(&model, &mut graph, "");
    ItemRouter::new().build_item(item, &mut ctx)
}

#[test]
fn polyline_lists_points_in_order() {
    let points = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 2.0, 0.0),
    ];
    let geometry = build(&RepresentationItem::Polyline {
        points: points.clone(),
    })
    .unwrap();

    let Geometry::Lines(lines) = geometry else {
        panic!("expected line geometry");
    };
    assert_eq!(lines.points, points);
    assert_eq!(lines.vertex_count(), 3);
    assert!(lines.indices.is_none());
}

#[test]
fn poly_curve_without_segments_degrades_to_polyline() {
    let points = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(5.0, 0.0, 0.0)];
    let geometry = build(&RepresentationItem::IndexedPolyCurve {
        points: points.clone(),
        segments: Vec::new(),
    })
    .unwrap();

    let Geometry::Lines(lines) = geometry else {
        panic!("expected line geometry");
    };
    assert_eq!(lines.points, points);
    assert!(lines.indices.is_none());
}

#[test]
fn segment_indices_become_zero_based_with_terminator() {
    let geometry = build(&RepresentationItem::IndexedPolyCurve {
        points: vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ],
        segments: vec![CurveSegment::LineIndex(smallvec![1, 2, 3])],
    })
    .unwrap();

    let Geometry::Lines(lines) = geometry else {
        panic!("expected line geometry");
    };
    assert_eq!(lines.indices.as_deref(), Some(&[0, 1, 2, -1][..]));
}

#[test]
fn unsupported_segment_is_skipped() {
    let geometry = build(&RepresentationItem::IndexedPolyCurve {
        points: vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)],
        segments: vec![
            CurveSegment::Unsupported("IfcReparametrisedCompositeCurveSegment".to_string()),
            CurveSegment::LineIndex(smallvec![1, 2]),
        ],
    })
    .unwrap();

    let Geometry::Lines(lines) = geometry else {
        panic!("expected line geometry");
    };
    // Only the supported segment contributes
    assert_eq!(lines.indices.as_deref(), Some(&[0, 1, -1][..]));
}

#[test]
fn face_set_translates_indices_per_face() {
    let geometry = build(&RepresentationItem::PolygonalFaceSet {
        coordinates: vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ],
        faces: vec![IndexedFace::new([1, 2, 3]), IndexedFace::new([1, 3, 4])],
        pn_index: None,
    })
    .unwrap();

    let Geometry::Faces(faces) = geometry else {
        panic!("expected face geometry");
    };
    assert_eq!(faces.indices, vec![0, 1, 2, -1, 0, 2, 3, -1]);
    assert_eq!(faces.coordinates.len(), 4);
}

#[test]
fn face_set_resolves_point_name_indirection() {
    let geometry = build(&RepresentationItem::PolygonalFaceSet {
        coordinates: vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ],
        faces: vec![IndexedFace::new([1, 2, 3])],
        // Face index i names pn_index[i - 1], which indexes coordinates
        pn_index: Some(vec![3, 1, 2]),
    })
    .unwrap();

    let Geometry::Faces(faces) = geometry else {
        panic!("expected face geometry");
    };
    assert_eq!(faces.indices, vec![2, 0, 1, -1]);
}

#[test]
fn extrusion_harvests_cross_section_from_boundary_polyline() {
    let geometry = build(&RepresentationItem::ExtrudedAreaSolid {
        swept_area: ProfileDef::ArbitraryClosed {
            outer_curve: Box::new(RepresentationItem::Polyline {
                points: vec![
                    Point3::new(0.0, 0.0, 0.0),
                    Point3::new(2.0, 0.0, 0.0),
                    Point3::new(2.0, 1.0, 0.0),
                    Point3::new(0.0, 1.0, 0.0),
                ],
            }),
        },
        direction: Vector3::new(0.0, 0.0, 1.0),
        depth: 3.0,
    })
    .unwrap();

    let Geometry::Extrusion(extrusion) = geometry else {
        panic!("expected extrusion geometry");
    };
    assert_eq!(extrusion.cross_section.len(), 4);
    assert_eq!(extrusion.cross_section[1].x, 2.0);
    assert_eq!(extrusion.spine[0], Point3::origin());
    assert_eq!(extrusion.spine[1], Point3::new(0.0, 0.0, 3.0));
}

#[test]
fn extrusion_harvest_uses_first_chain_only() {
    // Boundary curve with two disjoint segments: only the first chain
    // becomes the cross-section.
    let geometry = build(&RepresentationItem::ExtrudedAreaSolid {
        swept_area: ProfileDef::ArbitraryClosed {
            outer_curve: Box::new(RepresentationItem::IndexedPolyCurve {
                points: vec![
                    Point3::new(0.0, 0.0, 0.0),
                    Point3::new(1.0, 0.0, 0.0),
                    Point3::new(5.0, 5.0, 0.0),
                    Point3::new(6.0, 5.0, 0.0),
                ],
                segments: vec![
                    CurveSegment::LineIndex(smallvec![1, 2]),
                    CurveSegment::LineIndex(smallvec![3, 4]),
                ],
            }),
        },
        direction: Vector3::new(0.0, 0.0, 1.0),
        depth: 1.0,
    })
    .unwrap();

    let Geometry::Extrusion(extrusion) = geometry else {
        panic!("expected extrusion geometry");
    };
    assert_eq!(extrusion.cross_section.len(), 2);
    assert_eq!(extrusion.cross_section[1].x, 1.0);
}

#[test]
fn extrusion_with_unsupported_profile_keeps_empty_cross_section() {
    let geometry = build(&RepresentationItem::ExtrudedAreaSolid {
        swept_area: ProfileDef::Unsupported("IfcCircleProfileDef".to_string()),
        direction: Vector3::new(0.0, 0.0, 1.0),
        depth: 2.0,
    })
    .unwrap();

    let Geometry::Extrusion(extrusion) = geometry else {
        panic!("expected extrusion geometry");
    };
    assert!(extrusion.cross_section.is_empty());
    assert_eq!(extrusion.spine[1], Point3::new(0.0, 0.0, 2.0));
}

#[test]
fn unsupported_item_contributes_nothing() {
    assert!(build(&RepresentationItem::Unsupported("IfcSweptDiskSolid".to_string())).is_none());
}

#[test]
fn build_shape_adopts_ambient_appearance_at_build_time() {
    let model = Model::new();
    let mut graph = SceneGraph::new();
    let mut ctx = BuildContext::new(&model, &mut graph, "");
    ctx.appearance
        .install(Appearance::from_material(&Material::new("Brick", [0.7, 0.3, 0.2]), ""));

    let router = ItemRouter::new();
    let parent = ctx.graph.insert(NodeContent::Group);
    let item = RepresentationItem::Polyline {
        points: vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)],
    };
    let shape = router.build_shape(&item, parent, &mut ctx).unwrap();

    let node = graph.node(shape).unwrap();
    assert_eq!(node.parent(), Some(parent));
    let NodeContent::Shape { appearance, .. } = &node.content else {
        panic!("expected shape node");
    };
    assert_eq!(appearance.name, "Brick");
}

#[test]
fn unit_scale_applies_to_copied_coordinates() {
    let mut model = Model::new();
    model.length_unit_scale = 0.001; // millimeter model
    let mut graph = SceneGraph::new();
    let mut ctx = BuildContext::new(&model, &mut graph, "");

    let geometry = ItemRouter::new()
        .build_item(
            &RepresentationItem::Polyline {
                points: vec![Point3::new(1500.0, 0.0, 0.0)],
            },
            &mut ctx,
        )
        .unwrap();

    let Geometry::Lines(lines) = geometry else {
        panic!("expected line geometry");
    };
    approx::assert_relative_eq!(lines.points[0], Point3::new(1.5, 0.0, 0.0), epsilon = 1e-12);
}
