use crate::models::Agent;

/// Index-stable reference to an agent of one particular population.
///
/// Handles are invalidated when the population they came from is replaced,
/// either by re-initialization or by a generation advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AgentHandle {
    epoch: u64,
    index: usize,
}

impl AgentHandle {
    /// Position of the agent in its population. The elite carried over from
    /// the previous generation is always at index 0.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Arena owning the agents of the current population.
#[derive(Default)]
pub(crate) struct Population {
    epoch: u64,
    agents: Vec<Box<dyn Agent>>,
}

impl Population {
    pub(crate) fn len(&self) -> usize {
        self.agents.len()
    }

    /// Removes every agent, invalidating all outstanding handles.
    pub(crate) fn drain(&mut self) -> Vec<Box<dyn Agent>> {
        self.epoch += 1;
        std::mem::take(&mut self.agents)
    }

    pub(crate) fn push(&mut self, agent: Box<dyn Agent>) {
        self.agents.push(agent);
    }

    pub(crate) fn agents_mut(&mut self) -> &mut [Box<dyn Agent>] {
        &mut self.agents
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &dyn Agent> + '_ {
        self.agents.iter().map(|agent| agent.as_ref())
    }

    pub(crate) fn handles(&self) -> impl Iterator<Item = AgentHandle> + '_ {
        (0..self.agents.len()).map(|index| AgentHandle {
            epoch: self.epoch,
            index,
        })
    }

    pub(crate) fn get(&self, handle: AgentHandle) -> Option<&dyn Agent> {
        if handle.epoch != self.epoch {
            return None;
        }

        self.agents.get(handle.index).map(|agent| agent.as_ref())
    }
}
