use crate::meshes::{cube, triangulated_cube};
use approx::assert_relative_eq;
use meshslice3d::math::{Point, Real, Vector};
use meshslice3d::query::{bisect, SideSelector};
use meshslice3d::shape::{Plane, PolyMesh};
use meshslice3d::transformation::{slice_mesh, CapFill, SliceParameters};
use meshslice3d::utils::SortedPair;

fn last_face_normal(mesh: &PolyMesh) -> Vector<Real> {
    mesh.face_normal(mesh.num_faces() - 1).unwrap().into_inner()
}

#[test]
fn cube_discard_outer_is_capped() {
    let mut mesh = cube(0.5);
    let params = SliceParameters {
        side: SideSelector::DiscardOuter,
        ..SliceParameters::default()
    };

    let report = slice_mesh(&mut mesh, &params).unwrap();

    assert_eq!(report.new_vertices(), 4);
    assert_eq!(report.split_faces(), 4);
    assert_eq!(report.loops().len(), 1);
    assert!(report.loops()[0].closed);
    assert_eq!(report.loops()[0].vertices.len(), 4);

    let cap = report.cap.as_ref().unwrap();
    assert_eq!(cap.capped_loops, 1);
    assert_eq!(cap.faces_added, 1);
    assert!(cap.issues.is_empty());

    // 4 clipped sides, the bottom and the cap.
    assert_eq!(mesh.num_faces(), 6);
    assert_eq!(mesh.num_vertices(), 8);
    assert_eq!(mesh.num_edges(), 12);
    assert!(mesh.validate().is_ok());
    assert!(mesh.is_closed());

    let aabb = mesh.aabb();
    assert_relative_eq!(aabb.mins, Point::new(-0.5, -0.5, -0.5));
    assert_relative_eq!(aabb.maxs, Point::new(0.5, 0.5, 0.0), epsilon = 1.0e-6);
    assert_relative_eq!(last_face_normal(&mesh), Vector::z(), epsilon = 1.0e-6);
}

#[test]
fn cube_discard_inner_is_capped() {
    let mut mesh = cube(0.5);
    let params = SliceParameters {
        side: SideSelector::DiscardInner,
        ..SliceParameters::default()
    };

    let report = slice_mesh(&mut mesh, &params).unwrap();

    assert_eq!(report.loops().len(), 1);
    assert_eq!(mesh.num_faces(), 6);
    assert!(mesh.is_closed());

    let aabb = mesh.aabb();
    assert_relative_eq!(aabb.mins, Point::new(-0.5, -0.5, 0.0), epsilon = 1.0e-6);
    assert_relative_eq!(aabb.maxs, Point::new(0.5, 0.5, 0.5));
    assert_relative_eq!(last_face_normal(&mesh), -Vector::z(), epsilon = 1.0e-6);
}

#[test]
fn cube_keep_both_only_splits() {
    let original = cube(0.5);
    let mut mesh = original.clone();
    let plane = Plane::new(Point::origin(), Vector::z());

    let bisection = bisect(&mut mesh, &plane, SideSelector::KeepBoth).unwrap();

    assert_eq!(bisection.new_vertices, 4);
    assert_eq!(bisection.removed_faces, 0);
    assert_eq!(mesh.num_vertices(), 12);
    assert_eq!(mesh.num_faces(), 10);
    // 8 unsplit edges, 4 split edges in two halves, 4 chords.
    assert_eq!(mesh.num_edges(), 20);
    assert!(mesh.is_closed());

    // Original vertices keep their index.
    assert_eq!(&mesh.vertices()[..8], original.vertices());

    // Original edges are either kept or replaced by their two halves.
    for [a, b] in original.edges().iter().copied() {
        let kept = mesh.has_edge(a, b);
        let split = (8..12).any(|m| mesh.has_edge(a, m) && mesh.has_edge(m, b));
        assert!(kept || split, "edge {a}-{b} was lost");
    }

    assert_eq!(bisection.loops.len(), 1);
    assert!(bisection.loops[0].closed);
}

#[test]
fn cube_keep_both_capped_stays_closed() {
    let mut mesh = cube(0.5);
    let report = slice_mesh(&mut mesh, &SliceParameters::default()).unwrap();
    let cap = report.cap.as_ref().unwrap();

    // The cut is reported, but both halves still border every loop edge.
    assert_eq!(report.loops().len(), 1);
    assert_eq!(cap.faces_added, 0);
    assert_eq!(cap.capped_loops, 0);
    assert_eq!(cap.already_closed, 1);
    assert_eq!(mesh.num_faces(), 10);
    assert!(mesh.is_closed());

    let counts = mesh.edge_face_counts();
    for [a, b] in report.loops()[0].edges() {
        assert_eq!(counts[&SortedPair::new(a, b)], 2);
    }
}

#[test]
fn plane_missing_the_cube() {
    let original = cube(0.5);
    let above = SliceParameters {
        plane_location: Point::new(0.0, 0.0, 2.0),
        ..SliceParameters::default()
    };

    for side in [SideSelector::KeepBoth, SideSelector::DiscardOuter] {
        let mut mesh = original.clone();
        let params = SliceParameters { side, ..above };
        let report = slice_mesh(&mut mesh, &params).unwrap();

        assert!(report.loops().is_empty());
        assert_eq!(report.cap.as_ref().unwrap().faces_added, 0);
        assert_eq!(mesh, original);
    }

    let mut mesh = original.clone();
    let params = SliceParameters {
        side: SideSelector::DiscardInner,
        ..above
    };
    let report = slice_mesh(&mut mesh, &params).unwrap();

    assert!(report.loops().is_empty());
    assert!(mesh.is_empty());
    assert_eq!(mesh.num_faces(), 0);
    assert_eq!(mesh.num_edges(), 0);
}

#[test]
fn triangulated_cube_caps_with_every_fill() {
    for cap_fill in [CapFill::Polygon, CapFill::EarClipping, CapFill::CentroidFan] {
        let mut mesh = triangulated_cube(1.0);
        let params = SliceParameters {
            side: SideSelector::DiscardOuter,
            cap_fill,
            plane_location: Point::new(0.0, 0.0, 0.25),
            ..SliceParameters::default()
        };

        let report = slice_mesh(&mut mesh, &params).unwrap();
        let cap = report.cap.as_ref().unwrap();

        assert_eq!(report.loops().len(), 1);
        // The diagonals of the side faces cross the plane too.
        assert_eq!(report.loops()[0].vertices.len(), 8);
        assert!(cap.issues.is_empty(), "{cap_fill:?}: {:?}", cap.issues);
        assert!(mesh.validate().is_ok());
        assert!(mesh.is_closed(), "{cap_fill:?} left a hole");

        let expected_vertices = if cap_fill == CapFill::CentroidFan { 1 } else { 0 };
        assert_eq!(cap.vertices_added, expected_vertices);
        match cap_fill {
            CapFill::Polygon => assert_eq!(cap.faces_added, 1),
            CapFill::EarClipping => assert_eq!(cap.faces_added, 6),
            CapFill::CentroidFan => assert_eq!(cap.faces_added, 8),
        }

        for i in mesh.num_faces() - cap.faces_added..mesh.num_faces() {
            if let Some(normal) = mesh.face_normal(i) {
                assert!(normal.z > 0.99);
            }
        }
    }
}

#[test]
fn bisecting_twice_inserts_nothing() {
    let mut mesh = cube(0.5);
    let params = SliceParameters {
        side: SideSelector::DiscardOuter,
        ..SliceParameters::default()
    };
    let _ = slice_mesh(&mut mesh, &params).unwrap();
    let capped = mesh.clone();

    let report = slice_mesh(&mut mesh, &params).unwrap();

    assert_eq!(report.new_vertices(), 0);
    assert_eq!(report.bisection.coplanar_faces, 1);
    // The hole is already capped.
    assert!(report.loops().is_empty());
    assert_eq!(mesh, capped);
}
