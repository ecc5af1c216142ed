//! Elitist tournament selection.
//!
//! Selection turns an evaluated population into the plan for the next
//! generation: one elite that is carried forward untouched, and
//! `2 × (population_size − 1)` parents that are paired up for crossover.
//!
//! # Ranking
//!
//! The population is stable-sorted ascending by fitness. The elite is the last
//! agent of that ranking, so among agents tied for the best fitness the one
//! created last wins.
//!
//! # Tournaments
//!
//! Every parent is drawn by an independent tournament: `tournament_size`
//! positions of the ranking are sampled uniformly **with replacement**, the
//! sample is stable-sorted ascending and its last member wins. The same agent
//! may win any number of tournaments, including both tournaments of a pair.
//!
//! Tournament size guidelines:
//! - **Size 2-3**: Balanced exploration and exploitation
//! - **Size 4-5**: Moderate selection pressure for steady convergence
//! - **Size 6+**: High pressure for rapid convergence (risk of premature convergence)
//!
//! ```rust
//! use genepool::models::Selector;
//!
//! let selector = Selector::default();
//! assert_eq!(selector.tournament_size(), 3);
//!
//! let exploitative = Selector::tournament(6)?;
//! assert_eq!(exploitative.tournament_size(), 6);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::models::fitness::compare_fitness;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Tournament size used when none is configured.
pub const DEFAULT_TOURNAMENT_SIZE: usize = 3;

/// Population indices ordered by ascending fitness, ties in population order.
fn rank(fitness: &[f64]) -> Vec<usize> {
    let mut ranking: Vec<usize> = (0..fitness.len()).collect();
    ranking.sort_by(|&a, &b| compare_fitness(fitness[a], fitness[b]));
    ranking
}

/// Runs one tournament over the ranking and returns the winner's population index.
fn run_tournament(
    ranking: &[usize],
    fitness: &[f64],
    tournament_size: usize,
    rng: &mut dyn RngCore,
) -> usize {
    let mut winner = ranking[rng.random_range(0..ranking.len())];

    for _ in 1..tournament_size {
        let challenger = ranking[rng.random_range(0..ranking.len())];
        // Later draws win ties, as the last element of a stable ascending sort would
        if compare_fitness(fitness[challenger], fitness[winner]).is_ge() {
            winner = challenger;
        }
    }

    winner
}

/// Draws `count` parents by independent tournaments.
#[instrument(level = "debug", skip(ranking, fitness, rng), fields(count = count, tournament_size = tournament_size, num_candidates = ranking.len()))]
fn tournament_selection(
    count: usize,
    tournament_size: usize,
    ranking: &[usize],
    fitness: &[f64],
    rng: &mut dyn RngCore,
) -> Vec<usize> {
    (0..count)
        .map(|_| run_tournament(ranking, fitness, tournament_size, rng))
        .collect()
}

/// Errors that can occur during selection.
#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub enum SelectionError {
    /// There is nothing to select from.
    #[error("EmptyPopulation: cannot select from an empty population")]
    EmptyPopulation,

    /// A tournament needs at least one contestant.
    #[error("InvalidTournamentSize: tournament size must be at least 1, got {0}")]
    InvalidTournamentSize(usize),
}

/// Outcome of selecting over one evaluated generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Population index of the best agent.
    pub elite: usize,
    /// Fitness of the elite.
    pub best_fitness: f64,
    /// Population indices of the parents, consumed pairwise: `(0, 1)`, `(2, 3)`, ...
    pub parents: Vec<usize>,
}

impl Selection {
    /// Iterates over the parent pairs, one per child to breed.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.parents.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }
}

/// Configuration for elitist tournament selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selector {
    tournament_size: usize,
}

impl Default for Selector {
    fn default() -> Self {
        Self {
            tournament_size: DEFAULT_TOURNAMENT_SIZE,
        }
    }
}

impl Selector {
    /// Creates a selector running tournaments of `tournament_size` contestants.
    pub fn tournament(tournament_size: usize) -> Result<Self, SelectionError> {
        if tournament_size == 0 {
            return Err(SelectionError::InvalidTournamentSize(tournament_size));
        }

        Ok(Self { tournament_size })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Picks the elite and the `2 × (n − 1)` parents for a population of `n`
    /// agents with the given fitness values, in population order.
    #[instrument(level = "debug", skip(self, fitness, rng), fields(tournament_size = self.tournament_size, num_candidates = fitness.len()))]
    pub fn select(
        &self,
        fitness: &[f64],
        rng: &mut dyn RngCore,
    ) -> Result<Selection, SelectionError> {
        let ranking = rank(fitness);
        let elite = *ranking.last().ok_or(SelectionError::EmptyPopulation)?;

        let child_count = fitness.len() - 1;
        let parents = tournament_selection(
            child_count * 2,
            self.tournament_size,
            &ranking,
            fitness,
            rng,
        );

        Ok(Selection {
            elite,
            best_fitness: fitness[elite],
            parents,
        })
    }
}
