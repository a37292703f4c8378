use crate::{
    coloring::Coloring,
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
};

/// Per-gene random reset mutation.
///
/// Each gene is independently replaced, with probability `mutation_rate`, by
/// a color drawn uniformly from `[0, num_colors)`. The new color may equal
/// the old one. A rate of `0` returns an unchanged copy; a rate of `1`
/// redraws every gene.
///
/// # Errors
///
/// Returns [`GeneticError::InvalidParameter`] if `num_colors` is zero or
/// `mutation_rate` is not in `[0, 1]`.
pub fn mutate(
    individual: &Coloring,
    num_colors: usize,
    mutation_rate: f64,
    rng: &mut RandomNumberGenerator,
) -> Result<Coloring> {
    if num_colors == 0 {
        return Err(GeneticError::InvalidParameter(
            "Number of colors must be at least 1".to_string(),
        ));
    }
    if !(0.0..=1.0).contains(&mutation_rate) {
        return Err(GeneticError::InvalidParameter(format!(
            "Mutation rate must be between 0 and 1, got {}",
            mutation_rate
        )));
    }

    let genes = individual
        .colors()
        .iter()
        .map(|&color| {
            if rng.gen_probability() < mutation_rate {
                rng.gen_color(num_colors)
            } else {
                color
            }
        })
        .collect();

    Ok(Coloring::new(genes))
}
