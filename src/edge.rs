use std::{
    collections::{HashMap, HashSet},
    fmt::{Debug, Display},
};

use glam::DVec2;

/**
 * An undirected edge between two uv indices.
 *
 * The endpoints are stored in canonical order, i.e. `lo <= hi`, so the edges
 * `{a, b}` and `{b, a}` compare and hash equal.
 */
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    lo: u32,
    hi: u32,
}

impl Edge {
    pub fn new(a: u32, b: u32) -> Self {
        let (lo, hi) = canonicalize(a, b);
        Edge { lo, hi }
    }

    pub fn lo(&self) -> u32 {
        self.lo
    }

    pub fn hi(&self) -> u32 {
        self.hi
    }

    pub fn vertices(&self) -> (u32, u32) {
        (self.lo, self.hi)
    }
}

impl From<(u32, u32)> for Edge {
    fn from((a, b): (u32, u32)) -> Self {
        Edge::new(a, b)
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "E({}, {})", self.lo, self.hi)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "E({}, {})", self.lo, self.hi)
    }
}

/// Order the pair of indices so that the smaller one comes first.
pub fn canonicalize(a: u32, b: u32) -> (u32, u32) {
    if a > b { (b, a) } else { (a, b) }
}

/// Edges of a face, as consecutive pairs of its uv indices including the pair
/// that wraps around from the last index to the first.
///
/// Each edge is reported once, together with the uv positions of its
/// endpoints, in the order it is first encountered. A face with a single index
/// yields one degenerate edge, and an empty face yields none. The caller must
/// make sure every index is within bounds of `positions`.
pub fn edges_of_face(face: &[u32], positions: &[DVec2]) -> Vec<(Edge, [DVec2; 2])> {
    // Small faces are deduplicated by scanning, larger ones with a set.
    const MAX_SCAN: usize = 8;
    let mut edges: Vec<(Edge, [DVec2; 2])> = Vec::with_capacity(face.len());
    let mut seen: HashSet<Edge> = if face.len() > MAX_SCAN {
        HashSet::with_capacity(face.len())
    } else {
        HashSet::new()
    };
    for (i, &a) in face.iter().enumerate() {
        let b = face[(i + 1) % face.len()];
        let edge = Edge::new(a, b);
        let repeated = if face.len() > MAX_SCAN {
            !seen.insert(edge)
        } else {
            edges.iter().any(|(e, _)| *e == edge)
        };
        if repeated {
            continue;
        }
        edges.push((
            edge,
            [positions[edge.lo as usize], positions[edge.hi as usize]],
        ));
    }
    edges
}

/// Bookkeeping for a single edge in [`EdgeCounts`].
#[derive(Debug, Copy, Clone)]
pub struct EdgeInfo {
    pub edge: Edge,
    /// The number of distinct faces that contain this edge.
    pub incidence: u32,
    /// Positions of the endpoints, in the order of `edge.vertices()`.
    pub ends: [DVec2; 2],
}

impl EdgeInfo {
    /// An edge that belongs to exactly one face lies on the silhouette of a
    /// uv island.
    pub fn is_boundary(&self) -> bool {
        self.incidence == 1
    }
}

/**
 * Accumulates the incidence count of every edge across the faces of a mesh.
 *
 * Edges are kept in the order they are first seen, so iteration over the
 * accumulated edges is deterministic.
 */
#[derive(Debug, Default, Clone)]
pub struct EdgeCounts {
    lookup: HashMap<Edge, usize>,
    entries: Vec<EdgeInfo>,
}

impl EdgeCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nedges: usize) -> Self {
        EdgeCounts {
            lookup: HashMap::with_capacity(nedges),
            entries: Vec::with_capacity(nedges),
        }
    }

    /// Count all edges of one face. The positions of the first occurrence of
    /// an edge are retained.
    pub fn add_face(&mut self, face: &[u32], positions: &[DVec2]) {
        for (edge, ends) in edges_of_face(face, positions) {
            match self.lookup.get(&edge) {
                Some(&i) => self.entries[i].incidence += 1,
                None => {
                    self.lookup.insert(edge, self.entries.len());
                    self.entries.push(EdgeInfo {
                        edge,
                        incidence: 1,
                        ends,
                    });
                }
            }
        }
    }

    pub fn incidence(&self, edge: Edge) -> u32 {
        self.lookup
            .get(&edge)
            .map(|&i| self.entries[i].incidence)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EdgeInfo> {
        self.entries.iter()
    }

    /// Edges used by exactly one face.
    pub fn boundary_edges(&self) -> impl Iterator<Item = Edge> + use<'_> {
        self.entries
            .iter()
            .filter(|e| e.is_boundary())
            .map(|e| e.edge)
    }

    /// Edges shared by more than one face.
    pub fn interior_edges(&self) -> impl Iterator<Item = Edge> + use<'_> {
        self.entries
            .iter()
            .filter(|e| !e.is_boundary())
            .map(|e| e.edge)
    }
}
