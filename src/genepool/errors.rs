use crate::models::{GenomeError, SelectionError};

/// Rejected genepool configuration.
#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub enum ConfigError {
    #[error("PopulationTooSmall: population_size must be at least {min}, got {provided}")]
    PopulationTooSmall { min: usize, provided: usize },
    #[error("InvalidTournamentSize: tournament_size must be at least 1, got {0}")]
    InvalidTournamentSize(usize),
}

/// Errors that can occur while driving a genepool.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ConfigError: {0}")]
    ConfigError(#[from] ConfigError),
    #[error("SelectionError: {0}")]
    SelectionError(#[from] SelectionError),
    #[error("GenomeError: {0}")]
    GenomeError(#[from] GenomeError),
}
