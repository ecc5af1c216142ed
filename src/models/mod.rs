mod agent;
mod breeder;
mod evaluation;
mod fitness;
mod genome;
mod selector;
mod world;

pub use agent::Agent;
pub use evaluation::Evaluation;
pub use genome::{Chromosome, Genome, GenomeError, downcast_genome};
pub use selector::{DEFAULT_TOURNAMENT_SIZE, Selection, SelectionError, Selector};
pub use world::World;

pub(crate) use breeder::Breeder;
pub(crate) use evaluation::step_population;
