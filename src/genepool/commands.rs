use crate::models::Evaluation;
use serde::{Deserialize, Serialize};

/// What a host asks the genepool to do on one external tick.
///
/// ```rust
/// use genepool::Commands;
///
/// // Evaluate one step per frame, advance as soon as evaluation completes
/// let per_frame = Commands::evaluate().and_iterate();
/// assert!(per_frame.evaluate && per_frame.iterate && !per_frame.quick_evaluate);
///
/// // Run whole generations per frame
/// let batch = Commands::quick_evaluate().and_iterate();
/// assert!(batch.evaluate && batch.quick_evaluate);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commands {
    /// Evaluate the population this tick.
    pub evaluate: bool,
    /// With `evaluate`, loop until the population is evaluated instead of
    /// stepping once.
    pub quick_evaluate: bool,
    /// Advance the generation if the population is evaluated.
    pub iterate: bool,
}

impl Commands {
    pub fn evaluate() -> Self {
        Self {
            evaluate: true,
            ..Self::default()
        }
    }

    pub fn quick_evaluate() -> Self {
        Self {
            evaluate: true,
            quick_evaluate: true,
            ..Self::default()
        }
    }

    pub fn iterate() -> Self {
        Self {
            iterate: true,
            ..Self::default()
        }
    }

    pub fn and_iterate(mut self) -> Self {
        self.iterate = true;
        self
    }
}

/// Result of asking the genepool to advance a generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Iteration {
    /// The call was a no-op: the population is not evaluated.
    Skipped,
    /// A new generation was created.
    Advanced { generation: u32, best_fitness: f64 },
}

impl Iteration {
    pub fn is_advanced(&self) -> bool {
        matches!(self, Self::Advanced { .. })
    }
}

/// What happened during one [`Genepool::tick`](crate::Genepool::tick).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub evaluation: Evaluation,
    pub iteration: Iteration,
}
