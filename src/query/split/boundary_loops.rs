use super::split_polymesh::FaceSide;
use super::{BoundaryLoop, Side};
use crate::shape::{face_edges, Face};
use crate::utils::hashmap::{HashMap, HashSet};
use crate::utils::SortedPair;
use smallvec::SmallVec;

#[derive(Copy, Clone, Default)]
struct EdgeUse {
    reference_faces: u32,
    coplanar: bool,
    // The edge oriented the way a face filling the loop must traverse it.
    cap_direction: [u32; 2],
}

/// Extracts the chains of on-plane edges bordering exactly one face of the `reference` side.
///
/// Edges used by a face lying on the plane are ignored: these holes are already filled.
pub(crate) fn extract_boundary_loops(
    faces: &[Face],
    face_sides: &[FaceSide],
    vertex_sides: &[Side],
    reference: FaceSide,
) -> Vec<BoundaryLoop> {
    let mut uses: HashMap<SortedPair<u32>, EdgeUse> = HashMap::default();

    for (face, side) in faces.iter().zip(face_sides.iter()) {
        let coplanar = *side == FaceSide::Coplanar;

        if !coplanar && *side != reference {
            continue;
        }

        for [a, b] in face_edges(face) {
            if vertex_sides[a as usize] != Side::On || vertex_sides[b as usize] != Side::On {
                continue;
            }

            let edge_use = uses.entry(SortedPair::new(a, b)).or_default();

            if coplanar {
                edge_use.coplanar = true;
            } else {
                edge_use.reference_faces += 1;
                edge_use.cap_direction = [b, a];
            }
        }
    }

    let mut edges: Vec<_> = uses
        .values()
        .filter(|e| e.reference_faces == 1 && !e.coplanar)
        .map(|e| e.cap_direction)
        .collect();
    // Make the output independent from the hash map iteration order.
    edges.sort_unstable();

    chain_edges(&edges)
}

/// Chains directed edges sharing endpoints into loops.
///
/// Chains are started first from vertices without incoming edge, these chains are open.
/// The remaining edges form cycles. A vertex visited twice by the same chain closes the
/// cycle found so far, so loops touching at a vertex are reported separately.
pub(crate) fn chain_edges(edges: &[[u32; 2]]) -> Vec<BoundaryLoop> {
    let mut outgoing: HashMap<u32, SmallVec<[usize; 2]>> = HashMap::default();
    let mut has_incoming = HashSet::default();

    for (i, [a, b]) in edges.iter().enumerate() {
        outgoing.entry(*a).or_default().push(i);
        let _ = has_incoming.insert(*b);
    }

    let mut used = vec![false; edges.len()];
    let mut loops = vec![];

    for i in 0..edges.len() {
        if !used[i] && !has_incoming.contains(&edges[i][0]) {
            trace_chain(i, edges, &outgoing, &mut used, &mut loops);
        }
    }

    for i in 0..edges.len() {
        if !used[i] {
            trace_chain(i, edges, &outgoing, &mut used, &mut loops);
        }
    }

    loops
}

fn trace_chain(
    first_edge: usize,
    edges: &[[u32; 2]],
    outgoing: &HashMap<u32, SmallVec<[usize; 2]>>,
    used: &mut [bool],
    loops: &mut Vec<BoundaryLoop>,
) {
    let start = edges[first_edge][0];
    let mut chain = vec![start];
    let mut positions = HashMap::default();
    let _ = positions.insert(start, 0);
    let mut next_edge = Some(first_edge);

    while let Some(e) = next_edge {
        used[e] = true;
        let v = edges[e][1];

        if let Some(&p) = positions.get(&v) {
            let cycle = chain.split_off(p);
            for w in &cycle[1..] {
                let _ = positions.remove(w);
            }
            chain.push(v);
            loops.push(BoundaryLoop {
                vertices: cycle,
                closed: true,
            });
        } else {
            let _ = positions.insert(v, chain.len());
            chain.push(v);
        }

        next_edge = outgoing
            .get(&v)
            .and_then(|out| out.iter().copied().find(|e| !used[*e]));
    }

    if chain.len() > 1 {
        loops.push(BoundaryLoop {
            vertices: chain,
            closed: false,
        });
    }
}
