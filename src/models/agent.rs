use crate::models::Genome;

/// An evaluatable wrapper around exactly one genome.
///
/// Evaluation may span many ticks. The controller calls
/// [`step_evaluation`](Agent::step_evaluation) once per tick until
/// [`has_evaluated`](Agent::has_evaluated) reports `true`; from then on the
/// agent must keep reporting `true` and its fitness must stay fixed.
pub trait Agent {
    /// Advances evaluation by one step. Must be a no-op once evaluated.
    fn step_evaluation(&mut self);

    fn has_evaluated(&self) -> bool;

    /// Fitness of the agent. Only meaningful once evaluated; higher is better.
    fn fitness(&self) -> f64;

    fn genome(&self) -> &dyn Genome;
}
