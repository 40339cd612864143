use crate::meshes::{cube, tetrahedron, triangulated_cube};
use meshslice3d::math::{Point, Real, Vector};
use meshslice3d::query::{bisect, bisect_with_tolerance, vertex_distances, SideSelector};
use meshslice3d::shape::{Plane, PolyMesh};
use meshslice3d::transformation::{cap, CapFill};
use oorandom::Rand32;

const NUM_PLANES: usize = 50;

fn rand_signed(rng: &mut Rand32) -> Real {
    rng.rand_float() as Real * 2.0 - 1.0
}

// A random plane through a point close to the origin, so it always crosses the meshes below.
fn random_plane(rng: &mut Rand32) -> Plane {
    let point = Point::new(rand_signed(rng), rand_signed(rng), rand_signed(rng)) * 0.3;

    loop {
        let normal = Vector::new(rand_signed(rng), rand_signed(rng), rand_signed(rng));
        if normal.norm() > 0.1 {
            return Plane::new(point, normal);
        }
    }
}

fn test_meshes() -> [PolyMesh; 3] {
    [cube(0.5), triangulated_cube(0.5), tetrahedron()]
}

#[test]
fn discarded_sides_partition_the_faces() {
    let mut rng = Rand32::new(42);

    for _ in 0..NUM_PLANES {
        let plane = random_plane(&mut rng);

        for original in test_meshes() {
            let mut both = original.clone();
            let mut inner = original.clone();
            let mut outer = original.clone();

            let split = bisect(&mut both, &plane, SideSelector::KeepBoth).unwrap();
            let kept_inner = bisect(&mut inner, &plane, SideSelector::DiscardOuter).unwrap();
            let kept_outer = bisect(&mut outer, &plane, SideSelector::DiscardInner).unwrap();

            assert_eq!(split.coplanar_faces, 0);
            assert_eq!(inner.num_faces() + outer.num_faces(), both.num_faces());
            assert_eq!(kept_inner.split_faces, split.split_faces);

            let eps = split.epsilon;
            let inner_distances = vertex_distances(&inner, &plane).unwrap();
            let outer_distances = vertex_distances(&outer, &plane).unwrap();
            assert!(inner_distances.iter().all(|d| *d <= eps));
            assert!(outer_distances.iter().all(|d| *d >= -eps));

            for boundary in kept_inner.loops.iter().chain(kept_outer.loops.iter()) {
                assert!(boundary.closed);
            }
        }
    }
}

#[test]
fn keep_both_preserves_original_vertices() {
    let mut rng = Rand32::new(1234);

    for _ in 0..NUM_PLANES {
        let plane = random_plane(&mut rng);

        for original in test_meshes() {
            let mut mesh = original.clone();
            let bisection = bisect(&mut mesh, &plane, SideSelector::KeepBoth).unwrap();

            assert_eq!(
                mesh.num_vertices(),
                original.num_vertices() + bisection.new_vertices
            );
            assert_eq!(
                &mesh.vertices()[..original.num_vertices()],
                original.vertices()
            );
            assert_eq!(
                mesh.num_faces(),
                original.num_faces() + bisection.split_faces
            );
            assert!(mesh.validate().is_ok());
            assert!(mesh.is_closed());
        }
    }
}

#[test]
fn loop_vertices_lie_on_the_plane() {
    let mut rng = Rand32::new(7);

    for _ in 0..NUM_PLANES {
        let plane = random_plane(&mut rng);

        for side in [
            SideSelector::KeepBoth,
            SideSelector::DiscardOuter,
            SideSelector::DiscardInner,
        ] {
            let mut mesh = triangulated_cube(0.5);
            let bisection = bisect(&mut mesh, &plane, side).unwrap();
            let distances = vertex_distances(&mesh, &plane).unwrap();

            assert_eq!(bisection.loops.len(), 1);
            for v in &bisection.loops[0].vertices {
                assert!(distances[*v as usize].abs() <= bisection.epsilon);
            }
        }
    }
}

#[test]
fn capping_closes_the_cut() {
    let mut rng = Rand32::new(2024);

    for _ in 0..NUM_PLANES {
        let plane = random_plane(&mut rng);

        for fill in [CapFill::Polygon, CapFill::EarClipping, CapFill::CentroidFan] {
            for original in test_meshes() {
                let mut mesh = original.clone();
                let bisection = bisect(&mut mesh, &plane, SideSelector::DiscardOuter).unwrap();
                let report = cap(&mut mesh, &bisection.loops, fill);

                assert_eq!(report.capped_loops, bisection.loops.len());
                assert!(report.faces_added >= report.capped_loops);
                assert!(mesh.validate().is_ok());
                assert!(mesh.is_closed(), "{fill:?} did not close the cut");

                let boundary = mesh.boundary_edges();
                for l in &bisection.loops {
                    for [a, b] in l.edges() {
                        assert!(!boundary.contains(&[a.min(b), a.max(b)]));
                    }
                }
            }
        }
    }
}

#[test]
fn bisecting_again_changes_nothing() {
    let mut rng = Rand32::new(99);

    for _ in 0..NUM_PLANES {
        let plane = random_plane(&mut rng);

        for side in [SideSelector::KeepBoth, SideSelector::DiscardOuter] {
            for original in test_meshes() {
                let mut mesh = original.clone();
                let first = bisect(&mut mesh, &plane, side).unwrap();
                let once = mesh.clone();

                let second =
                    bisect_with_tolerance(&mut mesh, &plane, side, Some(first.epsilon)).unwrap();

                assert_eq!(second.new_vertices, 0);
                assert_eq!(second.split_faces, 0);
                assert_eq!(second.loops.len(), first.loops.len());
                assert_eq!(mesh, once);
            }
        }
    }
}
