use crate::math::{Point, Real};
use crate::shape::{InvalidMesh, PolyMesh};
use core::fmt;
use core::str::FromStr;

/// Default tolerance used to decide if a vertex lies on the cutting plane, relative to the
/// diagonal of the mesh bounding box.
pub const DEFAULT_RELATIVE_EPSILON: Real = 1.0e-5;

/// The location of a point relative to an oriented plane.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Side {
    /// Strictly on the side opposite to the plane normal.
    Inner,
    /// On the plane, up to the tolerance.
    On,
    /// Strictly on the side the plane normal points to.
    Outer,
}

impl Side {
    /// Classifies a signed distance to the plane, with the given tolerance.
    #[inline]
    pub fn classify(signed_distance: Real, epsilon: Real) -> Self {
        if signed_distance > epsilon {
            Side::Outer
        } else if signed_distance < -epsilon {
            Side::Inner
        } else {
            Side::On
        }
    }

    /// Is `self` strictly on one side and `other` strictly on the other side?
    #[inline]
    pub fn is_opposite(self, other: Side) -> bool {
        matches!(
            (self, other),
            (Side::Inner, Side::Outer) | (Side::Outer, Side::Inner)
        )
    }
}

/// Selects which side of the cutting plane, if any, is removed after a bisection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum SideSelector {
    /// Keep the geometry on both sides.
    #[default]
    #[cfg_attr(feature = "serde-serialize", serde(alias = "NO_SPLIT", alias = "SPLIT"))]
    KeepBoth,
    /// Remove the geometry on the outer side (the side the plane normal points to).
    #[cfg_attr(feature = "serde-serialize", serde(alias = "REMOVE_TOP"))]
    DiscardOuter,
    /// Remove the geometry on the inner side.
    #[cfg_attr(feature = "serde-serialize", serde(alias = "REMOVE_BOTTOM"))]
    DiscardInner,
}

impl SideSelector {
    /// The side removed by this selector, if any.
    pub fn discarded_side(self) -> Option<Side> {
        match self {
            SideSelector::KeepBoth => None,
            SideSelector::DiscardOuter => Some(Side::Outer),
            SideSelector::DiscardInner => Some(Side::Inner),
        }
    }

    /// The side whose faces delimit the boundary loops.
    ///
    /// Boundary loops are oriented so that a face filling them points away from this side.
    pub fn reference_side(self) -> Side {
        match self {
            SideSelector::KeepBoth | SideSelector::DiscardOuter => Side::Inner,
            SideSelector::DiscardInner => Side::Outer,
        }
    }
}

/// Error returned when parsing an unknown [`SideSelector`] name.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
#[error("unknown side selector `{0}`")]
pub struct UnknownSideSelector(pub String);

impl FromStr for SideSelector {
    type Err = UnknownSideSelector;

    /// Parses a selector from its name, case-insensitively.
    ///
    /// Besides the variant names (`keep_both`, `discard_outer`, `discard_inner`), the slice
    /// modes of the Mesh Slicer tool are accepted: `no_split` and `split` keep both sides,
    /// `remove_top` discards the outer side, and `remove_bottom` discards the inner side.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match name.as_str() {
            "keep_both" | "keepboth" | "no_split" | "nosplit" | "split" => {
                Ok(SideSelector::KeepBoth)
            }
            "discard_outer" | "discardouter" | "remove_top" | "removetop" => {
                Ok(SideSelector::DiscardOuter)
            }
            "discard_inner" | "discardinner" | "remove_bottom" | "removebottom" => {
                Ok(SideSelector::DiscardInner)
            }
            _ => Err(UnknownSideSelector(s.to_string())),
        }
    }
}

impl fmt::Display for SideSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            SideSelector::KeepBoth => "keep_both",
            SideSelector::DiscardOuter => "discard_outer",
            SideSelector::DiscardInner => "discard_inner",
        })
    }
}

/// A chain of edges lying on the cutting plane, produced by a bisection.
///
/// Consecutive vertices are connected by an edge of the mesh and, if the loop is closed,
/// the last vertex is connected to the first one. The vertex order is the winding a face
/// filling the loop must have to face away from the retained geometry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BoundaryLoop {
    /// The vertex indices of the loop, without repeating the first vertex at the end.
    pub vertices: Vec<u32>,
    /// Does the last vertex connect back to the first one?
    pub closed: bool,
}

impl BoundaryLoop {
    /// The number of edges of this loop.
    pub fn num_edges(&self) -> usize {
        if self.closed {
            self.vertices.len()
        } else {
            self.vertices.len().saturating_sub(1)
        }
    }

    /// Iterates through the directed edges of this loop.
    pub fn edges(&self) -> impl Iterator<Item = [u32; 2]> + '_ {
        let n = self.vertices.len();
        (0..self.num_edges()).map(move |i| [self.vertices[i], self.vertices[(i + 1) % n]])
    }

    /// The positions of the vertices of this loop.
    pub fn points(&self, mesh: &PolyMesh) -> Vec<Point<Real>> {
        self.vertices
            .iter()
            .map(|i| mesh.vertices()[*i as usize])
            .collect()
    }
}

/// The outcome of a successful bisection.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Bisection {
    /// The chains of edges lying on the plane that delimit the reference side.
    pub loops: Vec<BoundaryLoop>,
    /// The tolerance used to classify the vertices.
    pub epsilon: Real,
    /// The number of vertices inserted where an edge crossed the plane.
    pub new_vertices: usize,
    /// The number of faces that were split in two or more pieces.
    pub split_faces: usize,
    /// The number of faces lying entirely on the plane, left unsplit.
    pub coplanar_faces: usize,
    /// The number of vertices removed with the discarded side.
    pub removed_vertices: usize,
    /// The number of faces removed with the discarded side.
    pub removed_faces: usize,
}

impl Bisection {
    /// The boundary loops that are closed.
    pub fn closed_loops(&self) -> impl Iterator<Item = &BoundaryLoop> {
        self.loops.iter().filter(|l| l.closed)
    }
}

/// Errors preventing a bisection. The mesh is left untouched when one of these is returned.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum BisectError {
    /// The mesh topology is malformed.
    #[error("invalid mesh: {0}")]
    InvalidMesh(#[from] InvalidMesh),
    /// The plane normal is zero or close to zero.
    #[error("the normal of the cutting plane is degenerate")]
    DegeneratePlane,
}
