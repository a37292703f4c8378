use crate::{
    coloring::Coloring,
    error::{GeneticError, Result},
};

/// Single-point crossover at the fixed midpoint.
///
/// The child takes the first `len / 2` genes (rounded down) from `parent1`
/// and the rest from `parent2`. The cut does not move between calls.
///
/// ```rust
/// use colorevo::{coloring::Coloring, strategy::crossover};
///
/// let child = crossover(
///     &Coloring::new(vec![0, 0, 0, 0, 0]),
///     &Coloring::new(vec![1, 1, 1, 1, 1]),
/// )
/// .unwrap();
/// assert_eq!(child.colors(), &[0, 0, 1, 1, 1]);
/// ```
///
/// # Errors
///
/// Returns [`GeneticError::InvalidParameter`] if the parents differ in length.
pub fn crossover(parent1: &Coloring, parent2: &Coloring) -> Result<Coloring> {
    if parent1.len() != parent2.len() {
        return Err(GeneticError::InvalidParameter(format!(
            "Crossover parents differ in length ({} vs {})",
            parent1.len(),
            parent2.len()
        )));
    }

    let cut = parent1.len() / 2;
    let mut genes = Vec::with_capacity(parent1.len());
    genes.extend_from_slice(&parent1.colors()[..cut]);
    genes.extend_from_slice(&parent2.colors()[cut..]);

    Ok(Coloring::new(genes))
}
