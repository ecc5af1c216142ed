/// Lifecycle state of a genepool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// No population exists yet.
    Uninitialized,
    /// A population exists and at least one agent has not evaluated.
    AwaitingEvaluation,
    /// Every agent of the current population has evaluated.
    Evaluated,
}

/// Read-only snapshot of a genepool handed to listeners with every notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub generation: u32,
    /// Best fitness of the most recently completed generation.
    pub best_fitness: Option<f64>,
    pub population_size: usize,
    pub state: State,
}
