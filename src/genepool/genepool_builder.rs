use super::listeners::ListenerRegistry;
use super::population::Population;
use super::{Error, Genepool, GenepoolConfig, GenepoolListener, State};
use crate::builder::{Set, Unset};
use crate::models::{Breeder, World};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::instrument;

/// Builder for [`Genepool`]. `build` becomes available once both a world and a
/// config have been supplied.
///
/// ```rust
/// # use genepool::{Genepool, GenepoolConfig, GenepoolListener};
/// # use genepool::models::{Agent, Genome, GenomeError, World};
/// # struct Empty;
/// # impl GenepoolListener for Empty {}
/// # impl World for Empty {
/// #     fn create_agent(
/// #         &mut self,
/// #         _seed: Option<Box<dyn Genome>>,
/// #         _rng: &mut dyn rand::RngCore,
/// #     ) -> Result<Box<dyn Agent>, GenomeError> {
/// #         unimplemented!()
/// #     }
/// # }
/// let genepool = Genepool::builder()
///     .world(Empty)
///     .config(GenepoolConfig::new(20, 0.05)?.with_seed(7))
///     .build()?;
///
/// assert!(!genepool.is_initialized());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct GenepoolBuilder<W, C> {
    world: W,
    config: C,
    listeners: ListenerRegistry,
}

impl<W: World> GenepoolBuilder<Unset<W>, Unset<GenepoolConfig>> {
    pub(super) fn new() -> Self {
        Self {
            world: Unset::new(),
            config: Unset::new(),
            listeners: ListenerRegistry::new(),
        }
    }
}

impl<W, C> GenepoolBuilder<W, C> {
    /// Registers a listener, notified after the world in registration order.
    pub fn listener<L: GenepoolListener + 'static>(mut self, listener: Rc<RefCell<L>>) -> Self {
        self.listeners.register(listener);
        self
    }
}

impl<W: World, C> GenepoolBuilder<Unset<W>, C> {
    pub fn world(self, world: W) -> GenepoolBuilder<Set<W>, C> {
        GenepoolBuilder {
            world: Set::new(world),
            config: self.config,
            listeners: self.listeners,
        }
    }
}

impl<W> GenepoolBuilder<W, Unset<GenepoolConfig>> {
    pub fn config(self, config: GenepoolConfig) -> GenepoolBuilder<W, Set<GenepoolConfig>> {
        GenepoolBuilder {
            world: self.world,
            config: Set::new(config),
            listeners: self.listeners,
        }
    }
}

impl<W: World> GenepoolBuilder<Set<W>, Set<GenepoolConfig>> {
    /// Validates the config and creates an uninitialized genepool.
    #[instrument(level = "debug", skip(self), fields(config = ?self.config.as_ref_inner(), listeners = self.listeners.len()))]
    pub fn build(self) -> Result<Genepool<W>, Error> {
        let config = self.config.into_inner();
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Genepool {
            selector: config.selector()?,
            breeder: Breeder::new(config.mutation_rate),
            world: self.world.into_inner(),
            listeners: self.listeners,
            population: Population::default(),
            state: State::Uninitialized,
            generation: 0,
            best_fitness: None,
            rng,
            config,
        })
    }
}
