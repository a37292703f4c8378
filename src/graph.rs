//! # Graph
//!
//! An undirected graph over dense node ids `0..N-1`, stored as one ordered
//! neighbor list per node. Every edge `{u, v}` appears in both lists, so the
//! structure is symmetric by construction when built through this API.
//!
//! The engine only reads a graph; the editing operations exist for the host
//! that builds it.
//!
//! ## Example
//!
//! ```rust
//! use colorevo::graph::Graph;
//!
//! let mut graph = Graph::new();
//! let a = graph.add_node();
//! let b = graph.add_node();
//! graph.add_edge(a, b).unwrap();
//!
//! assert_eq!(graph.num_nodes(), 2);
//! assert_eq!(graph.num_edges(), 1);
//! assert_eq!(graph.neighbors(a), &[b]);
//! ```

use crate::error::{GeneticError, Result};

/// Adjacency-list graph over contiguous node ids.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<usize>>", into = "Vec<Vec<usize>>")
)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph from per-node neighbor lists.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::InvalidGraph`] if a neighbor id is out of range,
    /// a node lists itself, a neighbor is listed twice, or an edge is listed
    /// in only one direction.
    pub fn from_adjacency(adjacency: Vec<Vec<usize>>) -> Result<Self> {
        let num_nodes = adjacency.len();

        for (u, neighbors) in adjacency.iter().enumerate() {
            for (pos, &v) in neighbors.iter().enumerate() {
                if v >= num_nodes {
                    return Err(GeneticError::InvalidGraph(format!(
                        "Node {} lists neighbor {} but the graph has {} nodes",
                        u, v, num_nodes
                    )));
                }
                if v == u {
                    return Err(GeneticError::InvalidGraph(format!(
                        "Node {} lists itself as a neighbor",
                        u
                    )));
                }
                if neighbors[..pos].contains(&v) {
                    return Err(GeneticError::InvalidGraph(format!(
                        "Node {} lists neighbor {} more than once",
                        u, v
                    )));
                }
                if !adjacency[v].contains(&u) {
                    return Err(GeneticError::InvalidGraph(format!(
                        "Edge {} -> {} has no matching edge {} -> {}",
                        u, v, v, u
                    )));
                }
            }
        }

        Ok(Self { adjacency })
    }

    /// Creates a graph with `num_nodes` nodes and the given undirected edges.
    ///
    /// Repeated edges are inserted once.
    pub fn from_edges(num_nodes: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut graph = Self {
            adjacency: vec![Vec::new(); num_nodes],
        };
        for &(u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// The three-node cycle `{0:[1,2], 1:[0,2], 2:[0,1]}`.
    pub fn triangle() -> Self {
        Self {
            adjacency: vec![vec![1, 2], vec![0, 2], vec![0, 1]],
        }
    }

    /// The complete graph on `num_nodes` nodes.
    pub fn complete(num_nodes: usize) -> Self {
        let adjacency = (0..num_nodes)
            .map(|u| (0..num_nodes).filter(|&v| v != u).collect())
            .collect();
        Self { adjacency }
    }

    /// Appends an isolated node and returns its id.
    pub fn add_node(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    /// Connects `u` and `v`.
    ///
    /// Returns `Ok(false)` if the edge already exists.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::InvalidGraph`] for an unknown node id or a
    /// self loop.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<bool> {
        let num_nodes = self.num_nodes();
        if u >= num_nodes || v >= num_nodes {
            return Err(GeneticError::InvalidGraph(format!(
                "Edge ({}, {}) references a node outside 0..{}",
                u, v, num_nodes
            )));
        }
        if u == v {
            return Err(GeneticError::InvalidGraph(format!(
                "Self loop on node {} is not allowed",
                u
            )));
        }
        if self.adjacency[u].contains(&v) {
            return Ok(false);
        }

        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
        Ok(true)
    }

    /// Removes every node and edge.
    pub fn clear(&mut self) {
        self.adjacency.clear();
    }

    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    pub fn num_edges(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns the ordered neighbor list of `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a node of this graph.
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    /// Iterates over `(node, neighbors)` in node order.
    pub fn adjacency(&self) -> impl Iterator<Item = (usize, &[usize])> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(u, neighbors)| (u, neighbors.as_slice()))
    }

    /// Iterates over every undirected edge once, as `(u, v)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency().flat_map(|(u, neighbors)| {
            neighbors
                .iter()
                .copied()
                .filter(move |&v| u < v)
                .map(move |v| (u, v))
        })
    }
}

impl TryFrom<Vec<Vec<usize>>> for Graph {
    type Error = GeneticError;

    fn try_from(adjacency: Vec<Vec<usize>>) -> Result<Self> {
        Self::from_adjacency(adjacency)
    }
}

impl From<Graph> for Vec<Vec<usize>> {
    fn from(graph: Graph) -> Self {
        graph.adjacency
    }
}
