//! Genome capabilities.
//!
//! Domain code implements the statically typed [`Chromosome`] trait. Every
//! chromosome is automatically usable as a type-erased [`Genome`], which is
//! what agents, worlds and the controller pass around. The erased form is where
//! the kind check happens: crossing two genomes of different concrete types is
//! reported as [`GenomeError::TypeMismatch`] instead of being silently coerced.

use rand::RngCore;
use std::any::{Any, type_name};
use std::fmt::Debug;
use tracing::instrument;

/// A concrete candidate-solution representation.
///
/// Implementations decide what crossover and mutation mean for their genes.
/// Both operations receive the controller's generator so a seeded genepool is
/// fully reproducible.
///
/// # Examples
///
/// ```rust
/// use genepool::models::Chromosome;
/// use rand::{Rng, RngCore};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Bits(Vec<bool>);
///
/// impl Chromosome for Bits {
///     fn crossover(&self, other: &Self, rng: &mut dyn RngCore) -> Self {
///         let genes = self
///             .0
///             .iter()
///             .zip(other.0.iter())
///             .map(|(&lhs, &rhs)| if rng.random_bool(0.5) { lhs } else { rhs })
///             .collect();
///         Bits(genes)
///     }
///
///     fn mutate(&mut self, rate: f64, rng: &mut dyn RngCore) {
///         for gene in self.0.iter_mut() {
///             if rng.random::<f64>() < rate {
///                 *gene = !*gene;
///             }
///         }
///     }
/// }
/// ```
pub trait Chromosome: Clone + Debug + 'static {
    /// Produces a new, independent child from `self` and `other`.
    fn crossover(&self, other: &Self, rng: &mut dyn RngCore) -> Self;

    /// Mutates in place. `rate` is passed through unvalidated; values below 0.0
    /// are expected to never mutate and values above 1.0 to always mutate.
    fn mutate(&mut self, rate: f64, rng: &mut dyn RngCore);
}

/// Error raised by genome operations.
#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub enum GenomeError {
    /// Two genomes of different concrete kinds were combined, or a world was
    /// handed a seed genome it cannot host.
    #[error("TypeMismatch: expected={expected}, found={found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl GenomeError {
    pub(crate) fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch { expected, found }
    }
}

/// Type-erased genome as seen by the controller.
///
/// The controller never inspects genes. It only clones the elite, crosses
/// selected parents and mutates freshly bred children.
pub trait Genome: Debug {
    fn crossover(
        &self,
        other: &dyn Genome,
        rng: &mut dyn RngCore,
    ) -> Result<Box<dyn Genome>, GenomeError>;

    fn mutate(&mut self, rate: f64, rng: &mut dyn RngCore);

    fn clone_genome(&self) -> Box<dyn Genome>;

    /// Name of the concrete representation, used in mismatch reports.
    fn kind(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<C: Chromosome> Genome for C {
    #[instrument(level = "debug", skip(self, other, rng), fields(kind = type_name::<C>(), other_kind = other.kind()))]
    fn crossover(
        &self,
        other: &dyn Genome,
        rng: &mut dyn RngCore,
    ) -> Result<Box<dyn Genome>, GenomeError> {
        let other = other
            .as_any()
            .downcast_ref::<C>()
            .ok_or_else(|| GenomeError::type_mismatch(type_name::<C>(), other.kind()))?;

        Ok(Box::new(Chromosome::crossover(self, other, rng)))
    }

    fn mutate(&mut self, rate: f64, rng: &mut dyn RngCore) {
        Chromosome::mutate(self, rate, rng);
    }

    fn clone_genome(&self) -> Box<dyn Genome> {
        Box::new(self.clone())
    }

    fn kind(&self) -> &'static str {
        type_name::<C>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl Clone for Box<dyn Genome> {
    fn clone(&self) -> Self {
        self.clone_genome()
    }
}

impl<'a> dyn Genome + 'a {
    /// Borrows the concrete chromosome, if this genome is of kind `C`.
    pub fn downcast_ref<C: Chromosome>(&self) -> Option<&C> {
        self.as_any().downcast_ref::<C>()
    }
}

/// Recovers the concrete chromosome from an erased seed genome.
///
/// Worlds use this in [`World::create_agent`](crate::models::World::create_agent)
/// to reject seeds of a kind they cannot host.
pub fn downcast_genome<C: Chromosome>(genome: Box<dyn Genome>) -> Result<C, GenomeError> {
    let found = genome.kind();
    genome
        .into_any()
        .downcast::<C>()
        .map(|chromosome| *chromosome)
        .map_err(|_| GenomeError::type_mismatch(type_name::<C>(), found))
}
