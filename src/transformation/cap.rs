//! Filling of the planar holes left by a bisection.

use crate::math::{Point, Point2, Real, UnitVector};
use crate::query::BoundaryLoop;
use crate::shape::{face_edges, Face, PolyMesh};
use crate::transformation::ear_clipping::triangulate_ear_clipping;
use crate::utils::hashmap::HashSet;
use crate::utils::{self, SortedPair};

/// How a closed boundary loop is filled.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum CapFill {
    /// A single polygonal face with all the vertices of the loop.
    #[default]
    Polygon,
    /// Triangles computed by ear clipping of the loop projected on its best-fit plane.
    ///
    /// Falls back to [`CapFill::CentroidFan`] if the projected loop can't be triangulated.
    EarClipping,
    /// A new vertex at the centroid of the loop, and one triangle per loop edge.
    CentroidFan,
}

/// Problems encountered while capping a boundary loop.
///
/// These don't abort the capping of the other loops: they are collected in
/// [`CapReport::issues`]. Loops with a [fatal](CapError::is_fatal) issue are left open.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum CapError {
    /// The loop doesn't connect back to its first vertex.
    #[error("boundary loop {loop_id} is open and cannot be capped")]
    OpenLoop {
        /// The index of the loop in the list given to [`cap`].
        loop_id: usize,
    },
    /// The loop has fewer than three distinct vertices, or no area.
    #[error("boundary loop {loop_id} is degenerate ({num_vertices} vertices)")]
    DegenerateLoop {
        /// The index of the loop in the list given to [`cap`].
        loop_id: usize,
        /// The number of vertices of the loop.
        num_vertices: usize,
    },
    /// A vertex of the loop is farther than the tolerance from the loop's best-fit plane.
    /// The loop is capped anyway.
    #[error("boundary loop {loop_id} is not planar (deviation: {max_deviation})")]
    NonPlanarLoop {
        /// The index of the loop in the list given to [`cap`].
        loop_id: usize,
        /// The largest distance between a loop vertex and the best-fit plane.
        max_deviation: Real,
    },
    /// The loop references a vertex that doesn't exist in the mesh.
    #[error("boundary loop {loop_id} references the out-of-bounds vertex {vertex}")]
    VertexOutOfBounds {
        /// The index of the loop in the list given to [`cap`].
        loop_id: usize,
        /// The offending vertex index.
        vertex: u32,
    },
}

impl CapError {
    /// Was the loop left open because of this error?
    pub fn is_fatal(&self) -> bool {
        !matches!(self, CapError::NonPlanarLoop { .. })
    }
}

/// Summary of a capping operation.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CapReport {
    /// The number of loops that received a cap.
    pub capped_loops: usize,
    /// The number of faces added to the mesh.
    pub faces_added: usize,
    /// The number of vertices added to the mesh (centroids of fans).
    pub vertices_added: usize,
    /// The number of closed loops left alone because every one of their edges already
    /// borders two faces, e.g., the cut of a closed mesh bisected without discarding a side.
    pub already_closed: usize,
    /// The problems encountered, in loop order.
    pub issues: Vec<CapError>,
}

/// Fills each closed boundary loop of `mesh` with new faces.
///
/// The new faces use the winding of the loops, so the caps of loops returned by
/// [`bisect`](crate::query::bisect) face away from the retained geometry. Every edge of
/// the new faces is added to the mesh if it doesn't exist yet.
///
/// A loop whose edges all border two faces already is not a hole: it is skipped and
/// counted in [`CapReport::already_closed`].
///
/// The planarity check uses [`PolyMesh::default_tolerance`].
pub fn cap(mesh: &mut PolyMesh, loops: &[BoundaryLoop], fill: CapFill) -> CapReport {
    cap_with_tolerance(mesh, loops, fill, None)
}

/// Fills each closed boundary loop of `mesh`, with an explicit planarity tolerance.
///
/// See [`cap`].
pub fn cap_with_tolerance(
    mesh: &mut PolyMesh,
    loops: &[BoundaryLoop],
    fill: CapFill,
    epsilon: Option<Real>,
) -> CapReport {
    let mut report = CapReport::default();

    if loops.is_empty() {
        return report;
    }

    let epsilon = epsilon
        .map(Real::abs)
        .unwrap_or_else(|| mesh.default_tolerance());
    let mut known_edges: HashSet<SortedPair<u32>> = mesh
        .edges
        .iter()
        .map(|e| SortedPair::new(e[0], e[1]))
        .collect();
    let mut face_counts = mesh.edge_face_counts();

    for (loop_id, boundary) in loops.iter().enumerate() {
        let surrounded = boundary.edges().all(|[a, b]| {
            face_counts
                .get(&SortedPair::new(a, b))
                .is_some_and(|count| *count >= 2)
        });

        if boundary.closed && boundary.vertices.len() >= 3 && surrounded {
            log::debug!("Boundary loop {loop_id} is already closed, leaving it as is.");
            report.already_closed += 1;
            continue;
        }

        let faces = match fill_loop(mesh, loop_id, boundary, fill, epsilon, &mut report) {
            Ok(faces) => faces,
            Err(err) => {
                log::warn!("Skipping hole: {err}.");
                report.issues.push(err);
                continue;
            }
        };

        for face in &faces {
            for [a, b] in face_edges(face) {
                if known_edges.insert(SortedPair::new(a, b)) {
                    mesh.edges.push([a, b]);
                }
                *face_counts.entry(SortedPair::new(a, b)).or_insert(0) += 1;
            }
        }

        report.capped_loops += 1;
        report.faces_added += faces.len();
        mesh.faces.extend(faces);
    }

    log::debug!(
        "Capped {} of {} boundary loops with {} faces.",
        report.capped_loops,
        loops.len(),
        report.faces_added
    );

    report
}

fn fill_loop(
    mesh: &mut PolyMesh,
    loop_id: usize,
    boundary: &BoundaryLoop,
    fill: CapFill,
    epsilon: Real,
    report: &mut CapReport,
) -> Result<Vec<Face>, CapError> {
    let num_vertices = boundary.vertices.len();

    if !boundary.closed {
        return Err(CapError::OpenLoop { loop_id });
    }

    if let Some(vertex) = boundary
        .vertices
        .iter()
        .find(|v| **v as usize >= mesh.vertices.len())
    {
        return Err(CapError::VertexOutOfBounds {
            loop_id,
            vertex: *vertex,
        });
    }

    let mut distinct = HashSet::default();
    if num_vertices < 3 || !boundary.vertices.iter().all(|v| distinct.insert(*v)) {
        return Err(CapError::DegenerateLoop {
            loop_id,
            num_vertices,
        });
    }

    let points = boundary.points(mesh);
    let Some(normal) = utils::ccw_polygon_normal(&points) else {
        return Err(CapError::DegenerateLoop {
            loop_id,
            num_vertices,
        });
    };
    let centroid = utils::center(&points);

    let max_deviation = points
        .iter()
        .map(|pt| (pt - centroid).dot(&normal).abs())
        .fold(0.0, Real::max);

    if max_deviation > epsilon {
        let issue = CapError::NonPlanarLoop {
            loop_id,
            max_deviation,
        };
        log::warn!("{issue}, filling it anyway.");
        report.issues.push(issue);
    }

    let faces = match fill {
        CapFill::Polygon => vec![Face::from_slice(&boundary.vertices)],
        CapFill::EarClipping => {
            if let Some(faces) = ear_clip_loop(boundary, &points, &centroid, &normal) {
                faces
            } else {
                log::warn!(
                    "Ear clipping failed on boundary loop {loop_id}, using a centroid fan instead."
                );
                centroid_fan(mesh, boundary, centroid, report)
            }
        }
        CapFill::CentroidFan => centroid_fan(mesh, boundary, centroid, report),
    };

    Ok(faces)
}

fn ear_clip_loop(
    boundary: &BoundaryLoop,
    points: &[Point<Real>],
    centroid: &Point<Real>,
    normal: &UnitVector<Real>,
) -> Option<Vec<Face>> {
    // (u, v, normal) is right-handed: the projected loop is counter-clockwise.
    let [u, v] = utils::orthonormal_basis(normal);
    let projected: Vec<_> = points
        .iter()
        .map(|pt| {
            let dpt = pt - centroid;
            Point2::new(dpt.dot(&u), dpt.dot(&v))
        })
        .collect();

    let triangles = triangulate_ear_clipping(&projected)?;
    Some(
        triangles
            .iter()
            .map(|tri| Face::from_slice(&tri.map(|i| boundary.vertices[i as usize])))
            .collect(),
    )
}

fn centroid_fan(
    mesh: &mut PolyMesh,
    boundary: &BoundaryLoop,
    centroid: Point<Real>,
    report: &mut CapReport,
) -> Vec<Face> {
    let center_id = mesh.vertices.len() as u32;
    mesh.vertices.push(centroid);
    report.vertices_added += 1;

    boundary
        .edges()
        .map(|[a, b]| Face::from_slice(&[a, b, center_id]))
        .collect()
}
