use crate::models::Agent;
use tracing::instrument;

/// Result of asking the genepool to evaluate its population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// The call was a no-op: the genepool is uninitialized or its population
    /// is already evaluated.
    Skipped,
    /// A tick ran but some agents are still evaluating.
    Pending { evaluated: usize, total: usize },
    /// Every agent has evaluated.
    Complete,
}

impl Evaluation {
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }
}

/// Runs one evaluation tick over the population, in population order.
///
/// Agents that already report evaluated are not stepped again. Completion is
/// recomputed from every agent on every tick and never cached.
#[instrument(level = "debug", skip(agents), fields(population_size = agents.len()))]
pub(crate) fn step_population(agents: &mut [Box<dyn Agent>]) -> Evaluation {
    let mut evaluated = 0;

    for agent in agents.iter_mut() {
        if !agent.has_evaluated() {
            agent.step_evaluation();
        }

        if agent.has_evaluated() {
            evaluated += 1;
        }
    }

    if evaluated == agents.len() {
        Evaluation::Complete
    } else {
        Evaluation::Pending {
            evaluated,
            total: agents.len(),
        }
    }
}
