//! A generational evolutionary-optimization controller.
//!
//! A [`Genepool`] owns a fixed-size population of [`Agent`](models::Agent)s,
//! each wrapping one [`Genome`](models::Genome). It drives their evaluation to
//! completion across as many ticks as the agents need, then advances the
//! generation: the best genome is carried over unchanged and the rest of the
//! population is bred from tournament-selected parents by crossover and
//! mutation.
//!
//! The controller never looks inside genomes or agents. Domain code supplies
//! them through three capabilities:
//!
//! - [`Chromosome`](models::Chromosome): crossover and mutation of a concrete
//!   genome kind.
//! - [`Agent`](models::Agent): stepwise evaluation producing a fitness.
//! - [`World`](models::World): the agent factory, notified of every lifecycle
//!   event before any other [`GenepoolListener`].
//!
//! All randomness flows from one generator owned by the genepool, so a seeded
//! [`GenepoolConfig`] reproduces a run exactly.

pub mod builder;
mod genepool;

pub mod models;

#[cfg(test)]
mod test_utilities;

pub use genepool::{
    AgentHandle, Commands, ConfigError, Error, Genepool, GenepoolBuilder, GenepoolConfig,
    GenepoolListener, Iteration, MIN_POPULATION_SIZE, Progress, State, Tick,
};
