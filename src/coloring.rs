//! # Coloring
//!
//! A `Coloring` is one individual of the population: the color assigned to
//! each node of a [`Graph`], indexed by node id. Colorings are owned values;
//! anything the engine records (elites, the best individual, history
//! snapshots) is a clone, never a view into the working population.

use std::ops::Index;

use crate::graph::Graph;

/// Per-node color assignment.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Coloring {
    colors: Vec<usize>,
}

impl Coloring {
    pub fn new(colors: Vec<usize>) -> Self {
        Self { colors }
    }

    pub fn colors(&self) -> &[usize] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.colors
    }

    /// Counts edges whose endpoints share a color. Each undirected edge is
    /// counted once.
    ///
    /// # Panics
    ///
    /// Panics if the coloring is shorter than the graph's node count.
    pub fn conflicts(&self, graph: &Graph) -> usize {
        self.conflicting_edges(graph).count()
    }

    /// Iterates over the conflicting edges as `(u, v)` with `u < v`.
    pub fn conflicting_edges<'a>(
        &'a self,
        graph: &'a Graph,
    ) -> impl Iterator<Item = (usize, usize)> + 'a {
        graph
            .edges()
            .filter(move |&(u, v)| self.colors[u] == self.colors[v])
    }

    /// Whether no two adjacent nodes share a color.
    pub fn is_proper(&self, graph: &Graph) -> bool {
        self.conflicting_edges(graph).next().is_none()
    }
}

impl From<Vec<usize>> for Coloring {
    fn from(colors: Vec<usize>) -> Self {
        Self::new(colors)
    }
}

impl Index<usize> for Coloring {
    type Output = usize;

    fn index(&self, node: usize) -> &usize {
        &self.colors[node]
    }
}
