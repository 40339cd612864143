use super::{PlaneMarker, SliceError, SliceParameters};
use crate::query::{bisect_with_tolerance, Bisection, BoundaryLoop};
use crate::shape::PolyMesh;
use crate::transformation::{cap_with_tolerance, CapReport};

/// The outcome of [`slice_mesh`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SliceReport {
    /// The result of the bisection, including the boundary loops left on the plane.
    pub bisection: Bisection,
    /// The result of the capping, if `cap_holes` was set.
    pub cap: Option<CapReport>,
    /// The rectangle a host may draw to display the cutting plane.
    pub marker: PlaneMarker,
}

impl SliceReport {
    /// The boundary loops found on the cutting plane.
    pub fn loops(&self) -> &[BoundaryLoop] {
        &self.bisection.loops
    }

    /// The number of vertices inserted where edges crossed the plane.
    pub fn new_vertices(&self) -> usize {
        self.bisection.new_vertices
    }

    /// The number of faces split by the plane.
    pub fn split_faces(&self) -> usize {
        self.bisection.split_faces
    }
}

/// Slices `mesh` in-place with the plane described by `params`.
///
/// The mesh is bisected, the side selected by `params.side` is removed, and the holes left
/// on the plane are capped if `params.cap_holes` is set. The plane marker is sized after
/// the mesh as it was before the cut.
///
/// # Errors
/// On error, `mesh` is left unmodified.
pub fn slice_mesh(
    mesh: &mut PolyMesh,
    params: &SliceParameters,
) -> Result<SliceReport, SliceError> {
    params.validate()?;

    let plane = params.plane();
    let marker = PlaneMarker::new(params, &mesh.aabb());
    let bisection = bisect_with_tolerance(mesh, &plane, params.side, params.epsilon)?;

    let cap = params.cap_holes.then(|| {
        cap_with_tolerance(
            mesh,
            &bisection.loops,
            params.cap_fill,
            Some(bisection.epsilon),
        )
    });

    log::debug!(
        "Sliced mesh: {} vertices, {} faces, {} boundary loops, {} caps.",
        mesh.num_vertices(),
        mesh.num_faces(),
        bisection.loops.len(),
        cap.as_ref().map_or(0, |c| c.capped_loops)
    );

    Ok(SliceReport {
        bisection,
        cap,
        marker,
    })
}
