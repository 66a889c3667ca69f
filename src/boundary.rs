/*!
Boundary loops of uv islands.

The edges that belong to exactly one face are collected into an undirected
graph. Every connected component of that graph is the silhouette of a uv
island, or of a hole inside one, and is extracted as a single loop.
*/

use std::collections::{HashMap, HashSet};

use crate::edge::Edge;

/**
 * Undirected graph over uv indices, stored as adjacency lists.
 *
 * Nodes are only ever created by adding an edge, so every node has at least
 * one neighbor. Nodes are remembered in the order they are first seen, which
 * makes loop extraction deterministic.
 */
#[derive(Debug, Default, Clone)]
pub struct AdjacencyGraph {
    neighbors: HashMap<u32, Vec<u32>>,
    order: Vec<u32>,
}

impl AdjacencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph from a list of edges.
    pub fn build<I, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut graph = Self::new();
        for e in edges {
            graph.add_edge(e.into());
        }
        graph
    }

    /// Record the edge in both directions.
    pub fn add_edge(&mut self, edge: Edge) {
        let (a, b) = edge.vertices();
        self.neighbors_mut(a).push(b);
        self.neighbors_mut(b).push(a);
    }

    fn neighbors_mut(&mut self, node: u32) -> &mut Vec<u32> {
        let order = &mut self.order;
        self.neighbors.entry(node).or_insert_with(|| {
            order.push(node);
            Vec::new()
        })
    }

    /// Neighbors of the node, in the order the edges were added.
    pub fn neighbors(&self, node: u32) -> &[u32] {
        self.neighbors.get(&node).map(|n| n.as_slice()).unwrap_or(&[])
    }

    pub fn degree(&self, node: u32) -> usize {
        self.neighbors(node).len()
    }

    /// All nodes in the order they were first seen.
    pub fn nodes(&self) -> &[u32] {
        &self.order
    }

    pub fn num_nodes(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Nodes with more than two neighbors. These appear where a uv island
    /// touches itself, or another island, at a single vertex. Loops through
    /// such nodes are not guaranteed to come out in cyclic order.
    pub fn junctions(&self) -> impl Iterator<Item = u32> + use<'_> {
        self.order
            .iter()
            .copied()
            .filter(|n| self.degree(*n) > 2)
    }

    /// Depth first traversal starting at `start`, skipping nodes already in
    /// `visited`. Returns the newly visited nodes in the order they are
    /// visited.
    fn traverse(&self, start: u32, visited: &mut HashSet<u32>) -> Vec<u32> {
        let mut path = Vec::new();
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            if !visited.insert(node) {
                continue;
            }
            path.push(node);
            stack.extend(
                self.neighbors(node)
                    .iter()
                    .copied()
                    .filter(|n| !visited.contains(n)),
            );
        }
        path
    }

    /// Split the graph into its connected components.
    ///
    /// Each component is returned as the sequence of its nodes in depth first
    /// visitation order, and every node appears in exactly one loop. For a
    /// component that is a simple cycle, which is what a clean uv island
    /// boundary looks like, the visitation order walks around the cycle.
    pub fn extract_loops(&self) -> Vec<Vec<u32>> {
        let mut visited = HashSet::with_capacity(self.order.len());
        let mut loops = Vec::new();
        for &node in &self.order {
            if !visited.contains(&node) {
                loops.push(self.traverse(node, &mut visited));
            }
        }
        loops
    }
}

/// Build the adjacency graph from the boundary edges and extract its loops.
pub fn boundary_loops<I>(boundary_edges: I) -> Vec<Vec<u32>>
where
    I: IntoIterator<Item = Edge>,
{
    AdjacencyGraph::build(boundary_edges).extract_loops()
}
