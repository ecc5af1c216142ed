use crate::genepool::GenepoolListener;
use crate::models::{Agent, Genome, GenomeError};
use rand::RngCore;

/// The environment agents live in, and the factory that creates them.
///
/// A world is always notified of lifecycle events before any other listener,
/// which is where domain side effects such as stepping a simulation belong.
pub trait World: GenepoolListener {
    /// Creates an agent around `seed`, or around a fresh random genome when
    /// `seed` is `None`.
    ///
    /// Worlds that only host one genome kind should reject foreign seeds with
    /// [`GenomeError::TypeMismatch`], see [`downcast_genome`](crate::models::downcast_genome).
    fn create_agent(
        &mut self,
        seed: Option<Box<dyn Genome>>,
        rng: &mut dyn RngCore,
    ) -> Result<Box<dyn Agent>, GenomeError>;

    /// Releases an agent of a discarded generation.
    fn release_agent(&mut self, agent: Box<dyn Agent>) {
        drop(agent);
    }
}
