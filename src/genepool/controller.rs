use super::listeners::{LifecycleEvent, ListenerRegistry};
use super::population::Population;
use super::{
    AgentHandle, Commands, Error, GenepoolBuilder, GenepoolConfig, GenepoolListener, Iteration,
    Progress, State, Tick,
};
use crate::builder::Unset;
use crate::models::{Agent, Breeder, Evaluation, Genome, Selector, World, step_population};
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::instrument;

/// Generational evolutionary-optimization controller.
///
/// A genepool owns a fixed-size population of agents created by its
/// [`World`], drives their evaluation tick by tick and, once every agent has
/// evaluated, breeds the next generation by elitism and tournament selection.
///
/// All operations run synchronously to completion. Calls that are not valid in
/// the current [`State`] are no-ops that report themselves as skipped.
pub struct Genepool<W: World> {
    pub(super) config: GenepoolConfig,
    pub(super) selector: Selector,
    pub(super) breeder: Breeder,
    pub(super) world: W,
    pub(super) listeners: ListenerRegistry,
    pub(super) population: Population,
    pub(super) state: State,
    pub(super) generation: u32,
    pub(super) best_fitness: Option<f64>,
    pub(super) rng: StdRng,
}

impl<W: World> Genepool<W> {
    pub fn builder() -> GenepoolBuilder<Unset<W>, Unset<GenepoolConfig>> {
        GenepoolBuilder::new()
    }

    /// Registers an observer. Listeners are notified after the world, in
    /// registration order.
    pub fn add_listener<L: GenepoolListener + 'static>(&mut self, listener: Rc<RefCell<L>>) {
        self.listeners.register(listener);
    }

    /// Replaces any existing population with `population_size` agents holding
    /// fresh random genomes and resets the generation counter.
    ///
    /// Valid from any state. Fails only if the world cannot create an agent,
    /// in which case the genepool is left uninitialized with no agents.
    #[instrument(level = "info", skip(self), fields(population_size = self.config.population_size))]
    pub fn init_genepool(&mut self) -> Result<(), Error> {
        self.release_population();
        self.generation = 0;
        self.best_fitness = None;
        self.state = State::Uninitialized;

        self.populate((0..self.config.population_size).map(|_| None))?;
        self.state = State::AwaitingEvaluation;

        tracing::info!(
            "Genepool initialized with {} agents",
            self.config.population_size
        );
        self.notify(LifecycleEvent::InitGenepool);
        self.notify(LifecycleEvent::StartPopulation);

        Ok(())
    }

    /// Runs one evaluation tick over the population.
    ///
    /// Skipped unless the population is awaiting evaluation. Otherwise
    /// listeners see `pre_evaluate`, every unfinished agent is stepped once,
    /// and listeners see `post_evaluate` whatever the outcome.
    #[instrument(level = "debug", skip(self), fields(generation = self.generation, state = ?self.state))]
    pub fn evaluate_population(&mut self) -> Evaluation {
        if self.state != State::AwaitingEvaluation {
            tracing::debug!("Evaluation skipped");
            return Evaluation::Skipped;
        }

        self.notify(LifecycleEvent::PreEvaluateGeneration);

        let evaluation = step_population(self.population.agents_mut());
        if evaluation.is_complete() {
            self.state = State::Evaluated;
            tracing::info!("Generation {} evaluated", self.generation);
        }

        self.notify(LifecycleEvent::PostEvaluateGeneration);

        evaluation
    }

    /// Evaluates tick after tick until the whole population has evaluated.
    ///
    /// There is no cap: an agent that never finishes blocks this call forever.
    /// Use [`evaluate_for`](Self::evaluate_for) when a bound is needed.
    #[instrument(level = "debug", skip(self), fields(generation = self.generation))]
    pub fn quick_evaluate(&mut self) -> Evaluation {
        loop {
            match self.evaluate_population() {
                Evaluation::Pending { .. } => continue,
                evaluation => return evaluation,
            }
        }
    }

    /// Evaluates for at most `max_ticks` ticks, stopping early once complete.
    ///
    /// Returns the outcome of the last tick, or `Skipped` if none ran.
    #[instrument(level = "debug", skip(self), fields(generation = self.generation))]
    pub fn evaluate_for(&mut self, max_ticks: usize) -> Evaluation {
        let mut evaluation = Evaluation::Skipped;

        for _ in 0..max_ticks {
            evaluation = self.evaluate_population();
            if !matches!(evaluation, Evaluation::Pending { .. }) {
                break;
            }
        }

        evaluation
    }

    /// Breeds and creates the next generation.
    ///
    /// Skipped unless the population is evaluated. The best genome is carried
    /// over unmutated to index 0 and every other agent receives a mutated child
    /// of two tournament winners. Crossing genomes of different kinds aborts
    /// with [`GenomeError::TypeMismatch`](crate::models::GenomeError) before
    /// the current population is touched. If the world then fails to host one
    /// of the new genomes, the genepool is left uninitialized with no agents.
    #[instrument(level = "info", skip(self), fields(generation = self.generation))]
    pub fn iterate_generation(&mut self) -> Result<Iteration, Error> {
        if self.state != State::Evaluated {
            tracing::debug!("Iteration skipped");
            return Ok(Iteration::Skipped);
        }

        let fitness: Vec<f64> = self.population.iter().map(|agent| agent.fitness()).collect();
        let selection = self.selector.select(&fitness, &mut self.rng)?;
        tracing::info!(
            "Generation {} best fitness: {}",
            self.generation,
            selection.best_fitness
        );

        let genomes: Vec<&dyn Genome> = self.population.iter().map(|agent| agent.genome()).collect();
        let next_genomes = self
            .breeder
            .breed_generation(&selection, &genomes, &mut self.rng)?;

        self.release_population();
        self.state = State::Uninitialized;
        self.populate(next_genomes.into_iter().map(Some))?;

        self.generation += 1;
        self.best_fitness = Some(selection.best_fitness);
        self.state = State::AwaitingEvaluation;

        self.notify(LifecycleEvent::EndGeneration);
        self.notify(LifecycleEvent::StartPopulation);

        Ok(Iteration::Advanced {
            generation: self.generation,
            best_fitness: selection.best_fitness,
        })
    }

    /// Drives one external tick: evaluates if asked to (stepping once, or to
    /// completion with `quick_evaluate`), then advances the generation if asked
    /// to and the population is evaluated.
    #[instrument(level = "debug", skip(self))]
    pub fn tick(&mut self, commands: Commands) -> Result<Tick, Error> {
        let evaluation = match (commands.evaluate, commands.quick_evaluate) {
            (true, true) => self.quick_evaluate(),
            (true, false) => self.evaluate_population(),
            (false, _) => Evaluation::Skipped,
        };

        let iteration = if commands.iterate && self.state == State::Evaluated {
            self.iterate_generation()?
        } else {
            Iteration::Skipped
        };

        Ok(Tick {
            evaluation,
            iteration,
        })
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_initialized(&self) -> bool {
        self.state != State::Uninitialized
    }

    pub fn is_population_evaluated(&self) -> bool {
        self.state == State::Evaluated
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Best fitness of the most recently completed generation.
    pub fn best_fitness(&self) -> Option<f64> {
        self.best_fitness
    }

    pub fn population_size(&self) -> usize {
        self.population.len()
    }

    pub fn progress(&self) -> Progress {
        Progress {
            generation: self.generation,
            best_fitness: self.best_fitness,
            population_size: self.population.len(),
            state: self.state,
        }
    }

    pub fn config(&self) -> &GenepoolConfig {
        &self.config
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    /// Agents of the current population, in population order.
    pub fn agents(&self) -> impl Iterator<Item = &dyn Agent> + '_ {
        self.population.iter()
    }

    /// Handles to the agents of the current population, in population order.
    pub fn handles(&self) -> impl Iterator<Item = AgentHandle> + '_ {
        self.population.handles()
    }

    /// Resolves a handle, or `None` if its population has been replaced.
    pub fn agent(&self, handle: AgentHandle) -> Option<&dyn Agent> {
        self.population.get(handle)
    }

    /// Creates one agent per seed. If the world fails, every agent created so
    /// far is released again so the population is left empty.
    fn populate(
        &mut self,
        seeds: impl IntoIterator<Item = Option<Box<dyn Genome>>>,
    ) -> Result<(), Error> {
        for seed in seeds {
            match self.world.create_agent(seed, &mut self.rng) {
                Ok(agent) => self.population.push(agent),
                Err(err) => {
                    tracing::warn!(
                        "Agent creation failed after {} agents: {}",
                        self.population.len(),
                        err
                    );
                    self.release_population();
                    return Err(err.into());
                }
            }
        }

        Ok(())
    }

    fn release_population(&mut self) {
        for agent in self.population.drain() {
            self.world.release_agent(agent);
        }
    }

    fn notify(&mut self, event: LifecycleEvent) {
        let progress = self.progress();
        tracing::trace!(event = %event, "Notifying listeners");

        event.dispatch(&mut self.world, &progress);
        self.listeners.notify(event, &progress);
    }
}
