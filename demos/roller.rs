//! # Roller Example
//!
//! Evolves rollers that have to reach a target on a plane. A roller's genome is
//! the sequence of pushes it applies, one per simulation step. Rollers that reach
//! the target score by how quickly they got there; the others score by how close
//! they ended up.
//!
//! ## Key Concepts
//!
//! - **Chromosome**: the push sequence, crossed over gene by gene
//! - **Agent**: one roller, simulated one step per evaluation tick
//! - **World**: creates rollers and counts simulated steps through its
//!   listener callbacks
//! - **Listener**: prints the best fitness of every generation

use anyhow::Result;
use genepool::models::{Agent, Chromosome, Genome, GenomeError, World, downcast_genome};
use genepool::{Commands, Genepool, GenepoolConfig, GenepoolListener, Iteration, Progress};
use rand::{Rng, RngCore};
use std::cell::RefCell;
use std::rc::Rc;

const PUSHES: usize = 64;
const MAX_PUSH: f32 = 0.25;
const TARGET: [f32; 2] = [6.0, 4.0];
const TARGET_RADIUS: f32 = 0.5;

fn random_push(rng: &mut dyn RngCore) -> [f32; 2] {
    [
        rng.random_range(-MAX_PUSH..=MAX_PUSH),
        rng.random_range(-MAX_PUSH..=MAX_PUSH),
    ]
}

#[derive(Debug, Clone)]
struct Pushes(Vec<[f32; 2]>);

impl Pushes {
    fn random(rng: &mut dyn RngCore) -> Self {
        Self((0..PUSHES).map(|_| random_push(rng)).collect())
    }
}

impl Chromosome for Pushes {
    fn crossover(&self, other: &Self, rng: &mut dyn RngCore) -> Self {
        let pushes = self
            .0
            .iter()
            .zip(other.0.iter())
            .map(|(&lhs, &rhs)| if rng.random_bool(0.5) { lhs } else { rhs })
            .collect();
        Self(pushes)
    }

    fn mutate(&mut self, rate: f64, rng: &mut dyn RngCore) {
        for push in self.0.iter_mut() {
            if rng.random::<f64>() < rate {
                *push = random_push(rng);
            }
        }
    }
}

struct Roller {
    pushes: Pushes,
    position: [f32; 2],
    velocity: [f32; 2],
    step: usize,
    reached: bool,
}

impl Roller {
    fn new(pushes: Pushes) -> Self {
        Self {
            pushes,
            position: [0.0; 2],
            velocity: [0.0; 2],
            step: 0,
            reached: false,
        }
    }

    fn distance_to_target(&self) -> f32 {
        let dx = TARGET[0] - self.position[0];
        let dy = TARGET[1] - self.position[1];
        (dx * dx + dy * dy).sqrt()
    }
}

impl Agent for Roller {
    fn step_evaluation(&mut self) {
        if self.has_evaluated() {
            return;
        }

        let Some(push) = self.pushes.0.get(self.step) else {
            return;
        };

        // Friction keeps velocities bounded
        self.velocity[0] = self.velocity[0] * 0.9 + push[0];
        self.velocity[1] = self.velocity[1] * 0.9 + push[1];
        self.position[0] += self.velocity[0];
        self.position[1] += self.velocity[1];
        self.step += 1;

        self.reached = self.distance_to_target() <= TARGET_RADIUS;
    }

    fn has_evaluated(&self) -> bool {
        self.reached || self.step >= self.pushes.0.len()
    }

    fn fitness(&self) -> f64 {
        if self.reached {
            1.0 + (self.pushes.0.len() - self.step) as f64 / self.pushes.0.len() as f64
        } else {
            1.0 / (1.0 + self.distance_to_target() as f64)
        }
    }

    fn genome(&self) -> &dyn Genome {
        &self.pushes
    }
}

/// Creates rollers and tracks how many evaluation ticks were simulated.
#[derive(Default)]
struct Plane {
    ticks: u64,
}

impl GenepoolListener for Plane {
    fn on_post_evaluate_generation(&mut self, _progress: &Progress) {
        self.ticks += 1;
    }
}

impl World for Plane {
    fn create_agent(
        &mut self,
        seed: Option<Box<dyn Genome>>,
        rng: &mut dyn RngCore,
    ) -> Result<Box<dyn Agent>, GenomeError> {
        let pushes = match seed {
            Some(seed) => downcast_genome::<Pushes>(seed)?,
            None => Pushes::random(rng),
        };

        Ok(Box::new(Roller::new(pushes)))
    }
}

/// Prints one line per finished generation.
struct GenerationLog;

impl GenepoolListener for GenerationLog {
    fn on_end_generation(&mut self, progress: &Progress) {
        if let Some(best_fitness) = progress.best_fitness {
            println!(
                "generation {:>3}  best fitness {:.4}",
                progress.generation, best_fitness
            );
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging to see generation summaries
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut genepool = Genepool::builder()
        .world(Plane::default())
        .config(GenepoolConfig::new(60, 0.03)?.with_seed(11))
        .listener(Rc::new(RefCell::new(GenerationLog)))
        .build()?;

    genepool.init_genepool()?;

    for _ in 0..50 {
        let tick = genepool.tick(Commands::quick_evaluate().and_iterate())?;
        match tick.iteration {
            Iteration::Advanced { best_fitness, .. } if best_fitness > 1.5 => break,
            _ => {}
        }
    }

    println!(
        "finished after {} generations and {} simulated ticks, best fitness {:?}",
        genepool.generation(),
        genepool.world().ticks,
        genepool.best_fitness()
    );

    Ok(())
}
