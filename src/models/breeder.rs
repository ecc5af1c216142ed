use crate::models::{Genome, GenomeError, Selection};
use rand::RngCore;
use tracing::instrument;

/// Turns a [`Selection`] into the genomes of the next generation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Breeder {
    mutation_rate: f64,
}

impl Breeder {
    pub(crate) fn new(mutation_rate: f64) -> Self {
        Self { mutation_rate }
    }

    fn breed_child(
        &self,
        parent1: &dyn Genome,
        parent2: &dyn Genome,
        rng: &mut dyn RngCore,
    ) -> Result<Box<dyn Genome>, GenomeError> {
        let mut child = parent1.crossover(parent2, rng)?;
        child.mutate(self.mutation_rate, rng);

        Ok(child)
    }

    /// Breeds the next generation: the elite genome unchanged at index 0,
    /// followed by one mutated child per parent pair.
    ///
    /// `genomes` is indexed by population index, the same indices the
    /// selection refers to.
    #[instrument(level = "debug", skip(self, selection, genomes, rng), fields(mutation_rate = self.mutation_rate, elite = selection.elite, num_pairs = selection.parents.len() / 2))]
    pub(crate) fn breed_generation(
        &self,
        selection: &Selection,
        genomes: &[&dyn Genome],
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Box<dyn Genome>>, GenomeError> {
        let mut next_genomes = Vec::with_capacity(genomes.len());
        next_genomes.push(genomes[selection.elite].clone_genome());

        for (i, j) in selection.pairs() {
            next_genomes.push(self.breed_child(genomes[i], genomes[j], rng)?);
        }

        Ok(next_genomes)
    }
}
