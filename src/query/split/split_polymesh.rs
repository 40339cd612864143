use super::boundary_loops::extract_boundary_loops;
use super::split_polygon::split_polygon;
use super::split_segment::segment_plane_intersection;
use super::{BisectError, Bisection, Side, SideSelector, DEFAULT_RELATIVE_EPSILON};
use crate::math::{Real, Vector, DEFAULT_EPSILON};
use crate::shape::{face_edges, Face, Plane, PolyMesh};
use crate::utils::hashmap::{HashMap, HashSet};
use crate::utils::{self, SortedPair};

/// The location of a face relative to the cutting plane.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum FaceSide {
    Inner,
    Outer,
    /// Every vertex lies on the plane.
    Coplanar,
    /// Vertices on both sides: the face still needs to be split.
    Crossing,
}

impl FaceSide {
    fn classify(face: &[u32], sides: &[Side]) -> Self {
        let mut inner = false;
        let mut outer = false;

        for v in face {
            match sides[*v as usize] {
                Side::Inner => inner = true,
                Side::Outer => outer = true,
                Side::On => {}
            }
        }

        match (inner, outer) {
            (true, true) => FaceSide::Crossing,
            (true, false) => FaceSide::Inner,
            (false, true) => FaceSide::Outer,
            (false, false) => FaceSide::Coplanar,
        }
    }

    fn from_side(side: Side) -> Self {
        match side {
            Side::Inner => FaceSide::Inner,
            Side::Outer => FaceSide::Outer,
            Side::On => FaceSide::Coplanar,
        }
    }
}

impl PolyMesh {
    /// The tolerance used by default to decide whether a vertex of this mesh lies on a
    /// cutting plane.
    ///
    /// This is [`DEFAULT_RELATIVE_EPSILON`] times the diagonal of the mesh bounding box, and
    /// never smaller than [`DEFAULT_EPSILON`].
    pub fn default_tolerance(&self) -> Real {
        (DEFAULT_RELATIVE_EPSILON * self.aabb().diagonal_length()).max(DEFAULT_EPSILON)
    }
}

/// Bisects `mesh` with `plane`, using the mesh's [default tolerance](PolyMesh::default_tolerance).
///
/// See [`bisect_with_tolerance`].
pub fn bisect(
    mesh: &mut PolyMesh,
    plane: &Plane,
    side: SideSelector,
) -> Result<Bisection, BisectError> {
    bisect_with_tolerance(mesh, plane, side, None)
}

/// Bisects `mesh` with `plane`, in-place.
///
/// Every edge crossing the plane gets a new vertex at the intersection point, and every
/// face crossing the plane is split into pieces lying on a single side. Then, depending
/// on `side`, the geometry on one side of the plane is removed.
///
/// Vertices closer to the plane than `epsilon` are considered to lie on it. If `epsilon`
/// is `None`, [`PolyMesh::default_tolerance`] is used.
///
/// Returns the boundary loops left on the plane, oriented so that a face filling them
/// points away from the inner side (or from the outer side when discarding the inner one).
///
/// # Errors
/// The mesh is validated and the plane normal checked before any modification: on error
/// `mesh` is left untouched.
pub fn bisect_with_tolerance(
    mesh: &mut PolyMesh,
    plane: &Plane,
    side: SideSelector,
    epsilon: Option<Real>,
) -> Result<Bisection, BisectError> {
    mesh.validate()?;
    let normal = plane
        .unit_normal(DEFAULT_EPSILON)
        .ok_or(BisectError::DegeneratePlane)?;
    let plane = Plane::new(plane.point, normal.into_inner());
    let epsilon = epsilon
        .map(Real::abs)
        .unwrap_or_else(|| mesh.default_tolerance());

    let mut result = Bisection {
        epsilon,
        ..Bisection::default()
    };

    // The plane misses the bounding box: the whole mesh lies on one side.
    let aabb = mesh.aabb();
    if aabb.is_valid() {
        let (min, max) = aabb.project_on_axis(&normal);
        let offset = plane.point.coords.dot(&normal);
        let mesh_side = if min - offset > epsilon {
            Some(Side::Outer)
        } else if max - offset < -epsilon {
            Some(Side::Inner)
        } else {
            None
        };

        if let Some(mesh_side) = mesh_side {
            if side.discarded_side() == Some(mesh_side) {
                result.removed_vertices = mesh.vertices.len();
                result.removed_faces = mesh.faces.len();
                *mesh = PolyMesh::default();
            }

            log::debug!("The cutting plane misses the mesh ({mesh_side:?} side).");
            return Ok(result);
        }
    }

    // 1. Vertex classification.
    let distances: Vec<Real> = mesh
        .vertices
        .iter()
        .map(|pt| plane.signed_distance(pt))
        .collect();
    let mut sides: Vec<Side> = distances
        .iter()
        .map(|d| Side::classify(*d, epsilon))
        .collect();
    let crosses_plane = sides.contains(&Side::Inner) && sides.contains(&Side::Outer);

    let mut faces = Vec::with_capacity(mesh.faces.len());
    let mut face_sides = Vec::with_capacity(mesh.faces.len());

    if crosses_plane {
        // 2. Split the crossing edges.
        let mut intersections: HashMap<SortedPair<u32>, u32> = HashMap::default();
        let mut new_edges = Vec::with_capacity(mesh.edges.len());

        for [a, b] in mesh.edges.iter().copied() {
            let (ia, ib) = (a as usize, b as usize);

            if !sides[ia].is_opposite(sides[ib]) {
                new_edges.push([a, b]);
                continue;
            }

            let key = SortedPair::new(a, b);
            let mid = if let Some(mid) = intersections.get(&key) {
                *mid
            } else {
                let Some((pt, _)) = segment_plane_intersection(
                    &mesh.vertices[ia],
                    &mesh.vertices[ib],
                    distances[ia],
                    distances[ib],
                ) else {
                    new_edges.push([a, b]);
                    continue;
                };

                let mid = mesh.vertices.len() as u32;
                mesh.vertices.push(pt);
                sides.push(Side::On);
                let _ = intersections.insert(key, mid);
                mid
            };

            new_edges.push([a, mid]);
            new_edges.push([mid, b]);
        }

        result.new_vertices = intersections.len();

        // 3. Rebuild the faces with the intersection points, and split them.
        let mut chords = vec![];

        for face in &mesh.faces {
            let face_side = FaceSide::classify(face, &sides);

            if face_side != FaceSide::Crossing {
                faces.push(face.clone());
                face_sides.push(face_side);
                continue;
            }

            let mut cycle = Face::new();
            for [a, b] in face_edges(face) {
                cycle.push(a);
                if let Some(mid) = intersections.get(&SortedPair::new(a, b)) {
                    cycle.push(*mid);
                }
            }

            let face_normal =
                utils::newell_normal(cycle.iter().map(|i| &mesh.vertices[*i as usize]));
            let cut_direction: Vector<Real> = plane.normal.cross(&face_normal);
            let pieces = split_polygon(
                &cycle,
                &sides,
                &mesh.vertices,
                &cut_direction,
                &mut chords,
            );

            if pieces.len() > 1 {
                result.split_faces += 1;
            }

            for piece in pieces {
                let piece_side = FaceSide::classify(&piece, &sides);
                if piece_side == FaceSide::Crossing {
                    log::debug!("A face could not be fully split by the cutting plane.");
                }
                faces.push(piece);
                face_sides.push(piece_side);
            }
        }

        if !chords.is_empty() {
            let mut known_edges: HashSet<SortedPair<u32>> = new_edges
                .iter()
                .map(|e| SortedPair::new(e[0], e[1]))
                .collect();

            for [a, b] in chords {
                if known_edges.insert(SortedPair::new(a, b)) {
                    new_edges.push([a, b]);
                }
            }
        }

        mesh.edges = new_edges;
    } else {
        faces.extend(mesh.faces.iter().cloned());
        face_sides.extend(mesh.faces.iter().map(|f| FaceSide::classify(f, &sides)));
    }

    result.coplanar_faces = face_sides
        .iter()
        .filter(|s| **s == FaceSide::Coplanar)
        .count();

    if result.coplanar_faces > 0 {
        log::warn!(
            "{} face(s) lie on the cutting plane: they are kept as-is.",
            result.coplanar_faces
        );
    }

    // 4. Remove the discarded side.
    if let Some(discarded) = side.discarded_side() {
        let keep: Vec<bool> = sides.iter().map(|s| *s != discarded).collect();
        let num_faces = faces.len();

        (faces, face_sides) = faces
            .into_iter()
            .zip(face_sides)
            .filter(|(face, _)| face.iter().all(|v| keep[*v as usize]))
            .unzip();
        result.removed_faces = num_faces - faces.len();

        mesh.edges.retain(|e| keep[e[0] as usize] && keep[e[1] as usize]);

        let remap = utils::remove_points(&mut mesh.vertices, &keep);
        result.removed_vertices = keep.iter().filter(|k| !**k).count();

        for face in &mut faces {
            for v in face.iter_mut() {
                *v = remap[*v as usize];
            }
        }

        for edge in &mut mesh.edges {
            edge[0] = remap[edge[0] as usize];
            edge[1] = remap[edge[1] as usize];
        }

        sides.retain(|s| *s != discarded);
    }

    // 5. Boundary loops.
    result.loops = extract_boundary_loops(
        &faces,
        &face_sides,
        &sides,
        FaceSide::from_side(side.reference_side()),
    );
    mesh.faces = faces;

    log::debug!(
        "Bisected mesh ({side}): {} new vertices, {} split faces, {} removed faces, {} boundary loops.",
        result.new_vertices,
        result.split_faces,
        result.removed_faces,
        result.loops.len()
    );

    Ok(result)
}

/// Signed distances between the vertices of `mesh` and `plane`, normalized.
///
/// Returns `None` if the plane normal is degenerate.
pub fn vertex_distances(mesh: &PolyMesh, plane: &Plane) -> Option<Vec<Real>> {
    let plane = plane.normalized()?;
    Some(
        mesh.vertices
            .iter()
            .map(|pt| plane.signed_distance(pt))
            .collect(),
    )
}
