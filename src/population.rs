//! # Population
//!
//! Builds the first generation: `population_size` colorings whose genes are
//! drawn independently and uniformly from `[0, num_colors)`.

use tracing::trace;

use crate::{
    coloring::Coloring,
    error::{GeneticError, Result},
    graph::Graph,
    rng::RandomNumberGenerator,
};

/// Draws a random initial population for `graph`.
///
/// Each coloring has one gene per node of the graph. An empty graph yields
/// empty colorings.
///
/// # Errors
///
/// Returns [`GeneticError::InvalidParameter`] if `num_colors` is zero.
pub fn generate(
    graph: &Graph,
    num_colors: usize,
    population_size: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<Coloring>> {
    if num_colors == 0 {
        return Err(GeneticError::InvalidParameter(
            "Number of colors must be at least 1".to_string(),
        ));
    }

    let num_nodes = graph.num_nodes();
    trace!(num_nodes, num_colors, population_size, "generating initial population");

    Ok((0..population_size)
        .map(|_| Coloring::new((0..num_nodes).map(|_| rng.gen_color(num_colors)).collect()))
        .collect())
}
