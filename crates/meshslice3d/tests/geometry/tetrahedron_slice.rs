use crate::meshes::tetrahedron;
use meshslice3d::math::{Point, Vector};
use meshslice3d::query::{bisect, vertex_distances, SideSelector};
use meshslice3d::shape::Plane;
use meshslice3d::transformation::{cap, CapFill};

// The plane `y = z` contains the edge 0-1 and the midpoint of the edge 2-3.
fn cutting_plane() -> Plane {
    Plane::new(Point::origin(), Vector::new(0.0, 1.0, -1.0))
}

#[test]
fn tetrahedron_cut_through_an_edge() {
    let mut mesh = tetrahedron();
    let plane = cutting_plane();

    let bisection = bisect(&mut mesh, &plane, SideSelector::DiscardOuter).unwrap();

    assert_eq!(bisection.new_vertices, 1);
    assert_eq!(bisection.split_faces, 2);
    assert_eq!(bisection.removed_vertices, 1);
    assert_eq!(bisection.loops.len(), 1);

    let boundary = &bisection.loops[0];
    assert!(boundary.closed);
    assert_eq!(boundary.vertices.len(), 3);
    assert_eq!(boundary.num_edges(), 3);

    let distances = vertex_distances(&mesh, &plane).unwrap();
    for v in &boundary.vertices {
        assert!(distances[*v as usize].abs() <= bisection.epsilon);
    }

    let report = cap(&mut mesh, &bisection.loops, CapFill::Polygon);

    assert_eq!(report.faces_added, 1);
    assert_eq!(mesh.face(mesh.num_faces() - 1).len(), 3);
    assert_eq!(mesh.num_vertices(), 4);
    assert_eq!(mesh.num_faces(), 4);
    assert!(mesh.is_closed());

    let cap_normal = mesh.face_normal(mesh.num_faces() - 1).unwrap();
    let plane_normal = plane.normalized().unwrap().normal;
    assert!(cap_normal.dot(&plane_normal) > 0.99);
}

#[test]
fn tetrahedron_keep_both() {
    let mut mesh = tetrahedron();

    let bisection = bisect(&mut mesh, &cutting_plane(), SideSelector::KeepBoth).unwrap();

    assert_eq!(bisection.split_faces, 2);
    assert_eq!(mesh.num_vertices(), 5);
    assert_eq!(mesh.num_faces(), 6);
    assert!(mesh.is_closed());
    assert_eq!(bisection.loops.len(), 1);
    assert_eq!(bisection.loops[0].vertices.len(), 3);
}

#[test]
fn tetrahedron_discard_inner_faces_the_other_way() {
    let mut mesh = tetrahedron();
    let plane = cutting_plane();

    let bisection = bisect(&mut mesh, &plane, SideSelector::DiscardInner).unwrap();
    let report = cap(&mut mesh, &bisection.loops, CapFill::EarClipping);

    assert_eq!(report.faces_added, 1);
    assert!(mesh.is_closed());

    let cap_normal = mesh.face_normal(mesh.num_faces() - 1).unwrap();
    let plane_normal = plane.normalized().unwrap().normal;
    assert!(cap_normal.dot(&plane_normal) < -0.99);
}
