use crate::genepool::ConfigError;
use crate::models::{DEFAULT_TOURNAMENT_SIZE, Selector};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Smallest population that still yields at least one bred child.
pub const MIN_POPULATION_SIZE: usize = 2;

fn default_tournament_size() -> usize {
    DEFAULT_TOURNAMENT_SIZE
}

/// Configuration of a genepool.
///
/// `mutation_rate` is not validated. It is handed to genomes as-is, where
/// values below 0.0 mean "never mutate" and values above 1.0 mean "always
/// mutate".
///
/// # Examples
///
/// ```rust
/// use genepool::GenepoolConfig;
///
/// let config = GenepoolConfig::new(50, 0.02)?.with_seed(7);
/// assert_eq!(config.population_size(), 50);
/// assert_eq!(config.tournament_size(), 3);
///
/// assert!(GenepoolConfig::new(1, 0.02).is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenepoolConfig {
    pub(crate) population_size: usize,
    pub(crate) mutation_rate: f64,
    #[serde(default = "default_tournament_size")]
    pub(crate) tournament_size: usize,
    /// Seed of the genepool's generator. Seeded from the OS when absent.
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl GenepoolConfig {
    #[instrument(level = "debug")]
    pub fn new(population_size: usize, mutation_rate: f64) -> Result<Self, ConfigError> {
        let config = Self {
            population_size,
            mutation_rate,
            tournament_size: DEFAULT_TOURNAMENT_SIZE,
            seed: None,
        };
        config.validate()?;

        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_tournament_size(mut self, tournament_size: usize) -> Result<Self, ConfigError> {
        self.tournament_size = tournament_size;
        self.validate()?;

        Ok(self)
    }

    /// Checks the invariants `new` enforces. Used again at build time since a
    /// deserialized config never went through `new`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < MIN_POPULATION_SIZE {
            return Err(ConfigError::PopulationTooSmall {
                min: MIN_POPULATION_SIZE,
                provided: self.population_size,
            });
        }

        if self.tournament_size == 0 {
            return Err(ConfigError::InvalidTournamentSize(self.tournament_size));
        }

        Ok(())
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub(crate) fn selector(&self) -> Result<Selector, ConfigError> {
        Selector::tournament(self.tournament_size)
            .map_err(|_| ConfigError::InvalidTournamentSize(self.tournament_size))
    }
}
