mod commands;
mod config;
mod controller;
mod errors;
mod genepool_builder;
mod listeners;
mod population;
mod state;

pub use commands::{Commands, Iteration, Tick};
pub use config::{GenepoolConfig, MIN_POPULATION_SIZE};
pub use controller::Genepool;
pub use errors::{ConfigError, Error};
pub use genepool_builder::GenepoolBuilder;
pub use listeners::GenepoolListener;
pub use population::AgentHandle;
pub use state::{Progress, State};
