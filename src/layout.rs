use glam::DVec2;

use crate::{
    boundary::AdjacencyGraph,
    edge::{EdgeCounts, EdgeInfo},
    mesh::UvMesh,
    udim::{Udim, tile_of_many},
    winding::is_front_facing,
};

/// A face of the mesh, as its closed loop of uv positions.
#[derive(Debug, Clone)]
pub struct Polygon {
    pub points: Vec<DVec2>,
}

impl Polygon {
    pub fn is_front_facing(&self) -> bool {
        is_front_facing(&self.points)
    }

    /// The tile containing the whole polygon, if any.
    pub fn tile(&self) -> Option<Udim> {
        tile_of_many(self.points.iter().copied())
    }
}

/**
 * The classified uv layout of one mesh primitive.
 *
 * Holds every face as a polygon, the incidence count of every edge, and the
 * boundary loops of the uv islands.
 */
#[derive(Debug, Clone)]
pub struct UvLayout {
    polygons: Vec<Polygon>,
    edges: EdgeCounts,
    graph: AdjacencyGraph,
    loops: Vec<Vec<u32>>,
    positions: Vec<DVec2>,
}

impl UvLayout {
    /// Walk the faces of the mesh once, collecting polygons and edge
    /// incidence counts, then extract the boundary loops.
    pub fn build(mesh: &UvMesh) -> Self {
        let positions = mesh.uv_positions();
        let mut polygons = Vec::with_capacity(mesh.num_faces());
        let mut edges = EdgeCounts::with_capacity(mesh.uv_indices().len());
        for face in mesh.faces() {
            polygons.push(Polygon {
                points: mesh.positions_of(face).collect(),
            });
            edges.add_face(face, positions);
        }
        let graph = AdjacencyGraph::build(edges.boundary_edges());
        let loops = graph.extract_loops();
        UvLayout {
            polygons,
            edges,
            graph,
            loops,
            positions: positions.to_vec(),
        }
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn edges(&self) -> &EdgeCounts {
        &self.edges
    }

    pub fn boundary_edges(&self) -> impl Iterator<Item = &EdgeInfo> + use<'_> {
        self.edges.iter().filter(|e| e.is_boundary())
    }

    pub fn boundary_graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    /// Boundary loops as sequences of uv indices.
    pub fn loops(&self) -> &[Vec<u32>] {
        &self.loops
    }

    /// The uv positions along the loop.
    pub fn loop_points(&self, path: &[u32]) -> Vec<DVec2> {
        path.iter().map(|&i| self.positions[i as usize]).collect()
    }

    /// The tile containing the whole loop, if any.
    pub fn loop_tile(&self, path: &[u32]) -> Option<Udim> {
        tile_of_many(path.iter().map(|&i| self.positions[i as usize]))
    }
}
