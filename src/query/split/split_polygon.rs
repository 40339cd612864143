use super::Side;
use crate::math::{Point, Real, Vector};
use crate::shape::Face;
use smallvec::SmallVec;

/// Splits a face crossing the cutting plane into pieces lying on a single side each.
///
/// The face `cycle` must already contain a vertex wherever one of its edges crossed the
/// plane, so that every crossing happens at a vertex classified as [`Side::On`]. The face
/// is cut along chords joining consecutive crossing vertices, sorted along `cut_direction`,
/// which must be parallel to the plane and to the face (the cross product of both normals).
///
/// The pieces keep the winding of `cycle`. Every chord actually used to split the face is
/// pushed to `chords`.
pub(crate) fn split_polygon(
    cycle: &[u32],
    sides: &[Side],
    vertices: &[Point<Real>],
    cut_direction: &Vector<Real>,
    chords: &mut Vec<[u32; 2]>,
) -> SmallVec<[Face; 2]> {
    let mut pieces = SmallVec::new();
    let mut crossings = crossing_vertices(cycle, sides);

    if crossings.len() < 2 {
        pieces.push(Face::from_slice(cycle));
        return pieces;
    }

    crossings.sort_by(|a, b| {
        let da = cut_direction.dot(&vertices[*a as usize].coords);
        let db = cut_direction.dot(&vertices[*b as usize].coords);
        da.total_cmp(&db)
    });

    pieces.push(Face::from_slice(cycle));

    for pair in crossings.chunks_exact(2) {
        let (a, b) = (pair[0], pair[1]);

        if a == b {
            continue;
        }

        // Find the piece containing both ends of the chord.
        let found = pieces.iter().enumerate().find_map(|(k, piece)| {
            let ia = piece.iter().position(|v| *v == a)?;
            let ib = piece.iter().position(|v| *v == b)?;
            Some((k, ia, ib))
        });

        let Some((k, ia, ib)) = found else {
            log::debug!("Chord {a}-{b} does not lie within a single piece, skipping it.");
            continue;
        };

        let n = pieces[k].len();
        if (ia + 1) % n == ib || (ib + 1) % n == ia {
            // The chord is already an edge of the piece.
            continue;
        }

        let (first, second) = cut_cycle(&pieces[k], ia, ib);
        pieces[k] = first;
        pieces.push(second);
        chords.push([a, b]);
    }

    pieces
}

/// Walks the face cycle and collects the vertices where it passes from one side of the
/// plane to the other.
///
/// A crossing through a run of several on-plane vertices is recorded at the last vertex of
/// the run.
fn crossing_vertices(cycle: &[u32], sides: &[Side]) -> SmallVec<[u32; 4]> {
    let mut result = SmallVec::new();
    let n = cycle.len();
    let side = |i: usize| sides[cycle[i % n] as usize];

    let Some(start) = (0..n).find(|i| side(*i) != Side::On) else {
        return result;
    };

    let mut current = side(start);
    let mut last_on = None;

    for k in 1..=n {
        let i = start + k;

        match side(i) {
            Side::On => last_on = Some(cycle[i % n]),
            s if s != current => {
                // Leaving through an on-plane vertex. Two consecutive vertices on opposite
                // sides can't happen since the crossing edges were split beforehand.
                if let Some(v) = last_on {
                    result.push(v);
                }
                current = s;
                last_on = None;
            }
            _ => last_on = None,
        }
    }

    result
}

/// Splits a cycle into the two cycles `ia..=ib` and `ib..=ia`.
fn cut_cycle(cycle: &[u32], ia: usize, ib: usize) -> (Face, Face) {
    let n = cycle.len();
    let walk = |from: usize, to: usize| {
        let len = (to + n - from) % n + 1;
        (0..len).map(|k| cycle[(from + k) % n]).collect::<Face>()
    };

    (walk(ia, ib), walk(ib, ia))
}
