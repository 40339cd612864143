use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, UnitVector};
use crate::utils::hashmap::{HashMap, HashSet};
use crate::utils::{self, SortedPair};
use smallvec::SmallVec;

/// The vertex indices of a polygonal face, in counter-clockwise order when seen from
/// outside the mesh.
pub type Face = SmallVec<[u32; 4]>;

/// Indicates an inconsistency in the topology of a [`PolyMesh`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum InvalidMesh {
    /// A face references fewer than 3 vertices.
    #[error("face {face} has {count} vertices, at least 3 are required")]
    TooFewVertices {
        /// The index of the faulty face.
        face: usize,
        /// The number of vertices of the faulty face.
        count: usize,
    },
    /// A face references the same vertex more than once.
    #[error("face {face} references vertex {vertex} more than once")]
    RepeatedVertex {
        /// The index of the faulty face.
        face: usize,
        /// The repeated vertex.
        vertex: u32,
    },
    /// A face references a vertex that doesn't exist.
    #[error("face {face} references vertex {vertex} but the mesh has {num_vertices} vertices")]
    FaceVertexOutOfBounds {
        /// The index of the faulty face.
        face: usize,
        /// The missing vertex.
        vertex: u32,
        /// The number of vertices of the mesh.
        num_vertices: usize,
    },
    /// An edge references a vertex that doesn't exist.
    #[error("edge {edge} references vertex {vertex} but the mesh has {num_vertices} vertices")]
    EdgeVertexOutOfBounds {
        /// The index of the faulty edge.
        edge: usize,
        /// The missing vertex.
        vertex: u32,
        /// The number of vertices of the mesh.
        num_vertices: usize,
    },
    /// An edge connects a vertex to itself.
    #[error("edge {edge} connects vertex {vertex} to itself")]
    DegenerateEdge {
        /// The index of the faulty edge.
        edge: usize,
        /// The vertex of the degenerate edge.
        vertex: u32,
    },
    /// A face uses an edge that isn't part of the mesh edge set.
    #[error("the edge {edge:?} of face {face} is missing from the edge set")]
    MissingEdge {
        /// The index of the faulty face.
        face: usize,
        /// The missing edge.
        edge: [u32; 2],
    },
}

/// A polygonal mesh made of vertices, edges, and faces.
///
/// Faces are ordered cycles of at least three distinct vertices; their winding defines
/// their outward normal. Edges are unordered vertex pairs. Every edge used by a face is
/// part of the edge set; the edge set may also contain loose edges used by no face.
///
/// Most constructors don't check the mesh topology: call [`PolyMesh::validate`] to do so.
/// Operations that modify the mesh, like [`crate::query::bisect`], validate it before
/// touching it.
///
/// # Example
///
/// ```
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use meshslice3d::math::Point;
/// use meshslice3d::shape::PolyMesh;
///
/// let square = PolyMesh::new(
///     vec![
///         Point::new(0.0, 0.0, 0.0),
///         Point::new(1.0, 0.0, 0.0),
///         Point::new(1.0, 1.0, 0.0),
///         Point::new(0.0, 1.0, 0.0),
///     ],
///     [[0, 1, 2, 3]],
/// );
///
/// assert_eq!(square.num_edges(), 4);
/// assert_eq!(square.boundary_edges().len(), 4);
/// assert!(square.validate().is_ok());
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PolyMesh {
    pub(crate) vertices: Vec<Point<Real>>,
    pub(crate) edges: Vec<[u32; 2]>,
    pub(crate) faces: Vec<Face>,
}

impl PolyMesh {
    /// Creates a new polygonal mesh, deriving its edge set from its faces.
    pub fn new<I>(vertices: Vec<Point<Real>>, faces: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<[u32]>,
    {
        let faces: Vec<Face> = faces
            .into_iter()
            .map(|face| Face::from_slice(face.as_ref()))
            .collect();
        let mut known = HashSet::default();
        let mut edges = vec![];

        for face in &faces {
            for [a, b] in face_edges(face) {
                if known.insert(SortedPair::new(a, b)) {
                    edges.push(*SortedPair::new(a, b));
                }
            }
        }

        Self {
            vertices,
            edges,
            faces,
        }
    }

    /// Creates a new polygonal mesh with an explicit edge set.
    ///
    /// The edge set may contain loose edges (used by no face).
    pub fn with_edges<I>(vertices: Vec<Point<Real>>, edges: Vec<[u32; 2]>, faces: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<[u32]>,
    {
        Self {
            vertices,
            edges,
            faces: faces
                .into_iter()
                .map(|face| Face::from_slice(face.as_ref()))
                .collect(),
        }
    }

    /// The vertex buffer of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The edge set of this mesh.
    #[inline]
    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    /// The faces of this mesh.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// The vertex indices of the `i`-th face.
    #[inline]
    pub fn face(&self, i: usize) -> &[u32] {
        &self.faces[i]
    }

    /// The number of vertices of this mesh.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// The number of edges of this mesh.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// The number of faces of this mesh.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Returns `true` if this mesh has no vertex, no edge and no face.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty() && self.faces.is_empty()
    }

    /// Consumes this mesh and returns its vertex buffer, edge set, and faces.
    pub fn into_parts(self) -> (Vec<Point<Real>>, Vec<[u32; 2]>, Vec<Face>) {
        (self.vertices, self.edges, self.faces)
    }

    /// The axis-aligned bounding box of this mesh's vertices.
    ///
    /// The result is invalid (see [`Aabb::is_valid`]) if the mesh has no vertex.
    pub fn aabb(&self) -> Aabb {
        Aabb::from_points_ref(&self.vertices)
    }

    /// The unit normal of the `i`-th face, computed with Newell's method.
    ///
    /// Returns `None` if the face is degenerate.
    pub fn face_normal(&self, i: usize) -> Option<UnitVector<Real>> {
        utils::ccw_polygon_normal(self.faces[i].iter().map(|id| &self.vertices[*id as usize]))
    }

    /// Is the edge between `a` and `b` (in any direction) part of this mesh's edge set?
    pub fn has_edge(&self, a: u32, b: u32) -> bool {
        let key = SortedPair::new(a, b);
        self.edges.iter().any(|e| SortedPair::new(e[0], e[1]) == key)
    }

    /// Counts, for each edge used by at least one face, the number of faces using it.
    pub fn edge_face_counts(&self) -> HashMap<SortedPair<u32>, usize> {
        let mut counts = HashMap::default();

        for face in &self.faces {
            for [a, b] in face_edges(face) {
                *counts.entry(SortedPair::new(a, b)).or_insert(0) += 1;
            }
        }

        counts
    }

    /// The edges used by exactly one face, sorted.
    pub fn boundary_edges(&self) -> Vec<[u32; 2]> {
        let mut result: Vec<_> = self
            .edge_face_counts()
            .into_iter()
            .filter(|(_, count)| *count == 1)
            .map(|(edge, _)| *edge)
            .collect();
        result.sort_unstable();
        result
    }

    /// Returns `true` if this mesh has at least one face and each edge used by a face is used
    /// by exactly two faces.
    pub fn is_closed(&self) -> bool {
        !self.faces.is_empty() && self.edge_face_counts().values().all(|count| *count == 2)
    }

    /// Checks the topological invariants of this mesh.
    ///
    /// Every face must reference at least three distinct existing vertices, every edge must
    /// connect two distinct existing vertices, and every edge used by a face must be part of
    /// the edge set.
    pub fn validate(&self) -> Result<(), InvalidMesh> {
        let num_vertices = self.vertices.len();
        let mut known_edges = HashSet::default();

        for (edge_id, edge) in self.edges.iter().enumerate() {
            if let Some(vertex) = edge.iter().find(|v| **v as usize >= num_vertices) {
                return Err(InvalidMesh::EdgeVertexOutOfBounds {
                    edge: edge_id,
                    vertex: *vertex,
                    num_vertices,
                });
            }

            if edge[0] == edge[1] {
                return Err(InvalidMesh::DegenerateEdge {
                    edge: edge_id,
                    vertex: edge[0],
                });
            }

            let _ = known_edges.insert(SortedPair::new(edge[0], edge[1]));
        }

        for (face_id, face) in self.faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(InvalidMesh::TooFewVertices {
                    face: face_id,
                    count: face.len(),
                });
            }

            if let Some(vertex) = face.iter().find(|v| **v as usize >= num_vertices) {
                return Err(InvalidMesh::FaceVertexOutOfBounds {
                    face: face_id,
                    vertex: *vertex,
                    num_vertices,
                });
            }

            let mut sorted = face.clone();
            sorted.sort_unstable();
            if let Some(pair) = sorted.windows(2).find(|pair| pair[0] == pair[1]) {
                return Err(InvalidMesh::RepeatedVertex {
                    face: face_id,
                    vertex: pair[0],
                });
            }

            let missing =
                face_edges(face).find(|e| !known_edges.contains(&SortedPair::new(e[0], e[1])));
            if let Some(edge) = missing {
                return Err(InvalidMesh::MissingEdge {
                    face: face_id,
                    edge,
                });
            }
        }

        Ok(())
    }
}

/// Iterates through the directed edges `[face[i], face[i + 1]]` of a face, including the
/// closing edge from its last vertex to its first vertex.
pub fn face_edges(face: &[u32]) -> impl Iterator<Item = [u32; 2]> + '_ {
    let n = face.len();
    (0..n).map(move |i| [face[i], face[(i + 1) % n]])
}
