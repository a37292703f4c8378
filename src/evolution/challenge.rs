use std::fmt::Debug;

use crate::{coloring::Coloring, graph::Graph};

/// Fitness of a coloring. Never positive; `0` means a proper coloring.
pub type Fitness = i64;

/// Scores a coloring of a graph. Higher is better.
pub trait Challenge: Debug {
    fn score(&self, coloring: &Coloring, graph: &Graph) -> Fitness;
}

/// Negative count of edges whose endpoints share a color.
///
/// Each undirected edge is counted once, from its lower endpoint. The graph
/// must be symmetric; an edge listed only by its higher endpoint is missed.
///
/// ```rust
/// use colorevo::{coloring::Coloring, evolution::challenge::fitness, graph::Graph};
///
/// let graph = Graph::triangle();
/// assert_eq!(fitness(&Coloring::new(vec![0, 1, 2]), &graph), 0);
/// assert_eq!(fitness(&Coloring::new(vec![0, 0, 0]), &graph), -3);
/// ```
pub fn fitness(coloring: &Coloring, graph: &Graph) -> Fitness {
    -(coloring.conflicts(graph) as Fitness)
}

/// The default challenge: minimize same-colored adjacent pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConflictChallenge;

impl Challenge for ConflictChallenge {
    fn score(&self, coloring: &Coloring, graph: &Graph) -> Fitness {
        fitness(coloring, graph)
    }
}
