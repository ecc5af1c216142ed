//! Genomes, agents, worlds and listeners shared by unit tests.

use crate::genepool::{GenepoolListener, Progress};
use crate::models::{Agent, Chromosome, Genome, GenomeError, World, downcast_genome};
use rand::{Rng, RngCore};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Three numeric genes whose sum is the fitness.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Triple {
    pub(crate) genes: [f64; 3],
    pub(crate) mutations: u32,
}

impl Triple {
    pub(crate) fn new(genes: [f64; 3]) -> Self {
        Self {
            genes,
            mutations: 0,
        }
    }

    pub(crate) fn random(rng: &mut dyn RngCore) -> Self {
        Self::new([
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        ])
    }

    pub(crate) fn sum(&self) -> f64 {
        self.genes.iter().sum()
    }
}

impl Chromosome for Triple {
    fn crossover(&self, other: &Self, rng: &mut dyn RngCore) -> Self {
        let mut genes = [0.0; 3];
        for (i, gene) in genes.iter_mut().enumerate() {
            *gene = if rng.random_bool(0.5) {
                self.genes[i]
            } else {
                other.genes[i]
            };
        }
        Self::new(genes)
    }

    fn mutate(&mut self, rate: f64, rng: &mut dyn RngCore) {
        self.mutations += 1;
        for gene in self.genes.iter_mut() {
            if rng.random::<f64>() < rate {
                *gene = rng.random_range(-1.0..1.0);
            }
        }
    }
}

/// A genome of a different kind, for mismatch checks.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Marker(pub(crate) u8);

impl Chromosome for Marker {
    fn crossover(&self, other: &Self, _rng: &mut dyn RngCore) -> Self {
        Marker(self.0.max(other.0))
    }

    fn mutate(&mut self, _rate: f64, _rng: &mut dyn RngCore) {}
}

/// Evaluates after a fixed number of steps, or never when `steps_needed` is `None`.
pub(crate) struct StubAgent {
    genome: Triple,
    steps_needed: Option<u32>,
    steps: Rc<Cell<u32>>,
}

impl StubAgent {
    pub(crate) fn new(genome: Triple, steps_needed: Option<u32>) -> Self {
        Self {
            genome,
            steps_needed,
            steps: Rc::new(Cell::new(0)),
        }
    }

    /// Shared counter of `step_evaluation` calls.
    pub(crate) fn steps_handle(&self) -> Rc<Cell<u32>> {
        self.steps.clone()
    }
}

impl Agent for StubAgent {
    fn step_evaluation(&mut self) {
        if self.has_evaluated() {
            return;
        }

        self.steps.set(self.steps.get() + 1);
    }

    fn has_evaluated(&self) -> bool {
        self.steps_needed
            .is_some_and(|needed| self.steps.get() >= needed)
    }

    fn fitness(&self) -> f64 {
        self.genome.sum()
    }

    fn genome(&self) -> &dyn Genome {
        &self.genome
    }
}

/// Records `"{name}:{event}"` for every notification into a shared log.
pub(crate) struct Recorder {
    name: &'static str,
    log: Rc<RefCell<Vec<String>>>,
}

impl Recorder {
    pub(crate) fn new(name: &'static str, log: Rc<RefCell<Vec<String>>>) -> Self {
        Self { name, log }
    }

    fn record(&self, event: &str) {
        self.log.borrow_mut().push(format!("{}:{}", self.name, event));
    }
}

impl GenepoolListener for Recorder {
    fn on_init_genepool(&mut self, _progress: &Progress) {
        self.record("init_genepool");
    }

    fn on_start_population(&mut self, _progress: &Progress) {
        self.record("start_population");
    }

    fn on_pre_evaluate_generation(&mut self, _progress: &Progress) {
        self.record("pre_evaluate");
    }

    fn on_post_evaluate_generation(&mut self, _progress: &Progress) {
        self.record("post_evaluate");
    }

    fn on_end_generation(&mut self, _progress: &Progress) {
        self.record("end_generation");
    }
}

/// World creating [`StubAgent`]s around [`Triple`] genomes.
pub(crate) struct StubWorld {
    pub(crate) steps_needed: Option<u32>,
    pub(crate) created: usize,
    pub(crate) seeded: usize,
    pub(crate) released: usize,
    recorder: Recorder,
}

impl StubWorld {
    pub(crate) fn new(steps_needed: Option<u32>, log: Rc<RefCell<Vec<String>>>) -> Self {
        Self {
            steps_needed,
            created: 0,
            seeded: 0,
            released: 0,
            recorder: Recorder::new("world", log),
        }
    }
}

impl GenepoolListener for StubWorld {
    fn on_init_genepool(&mut self, progress: &Progress) {
        self.recorder.on_init_genepool(progress);
    }

    fn on_start_population(&mut self, progress: &Progress) {
        self.recorder.on_start_population(progress);
    }

    fn on_pre_evaluate_generation(&mut self, progress: &Progress) {
        self.recorder.on_pre_evaluate_generation(progress);
    }

    fn on_post_evaluate_generation(&mut self, progress: &Progress) {
        self.recorder.on_post_evaluate_generation(progress);
    }

    fn on_end_generation(&mut self, progress: &Progress) {
        self.recorder.on_end_generation(progress);
    }
}

impl World for StubWorld {
    fn create_agent(
        &mut self,
        seed: Option<Box<dyn Genome>>,
        rng: &mut dyn RngCore,
    ) -> Result<Box<dyn Agent>, GenomeError> {
        let genome = match seed {
            Some(seed) => {
                self.seeded += 1;
                downcast_genome::<Triple>(seed)?
            }
            None => Triple::random(rng),
        };
        self.created += 1;

        Ok(Box::new(StubAgent::new(genome, self.steps_needed)))
    }

    fn release_agent(&mut self, agent: Box<dyn Agent>) {
        self.released += 1;
        drop(agent);
    }
}
