use crate::genepool::Progress;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Observer of genepool lifecycle events.
///
/// Every notification defaults to a no-op, so observers implement only what
/// they care about. The per-generation sequence is `pre_evaluate`,
/// `post_evaluate` (repeated per tick until evaluated), then `end_generation`
/// followed by `start_population`.
pub trait GenepoolListener {
    /// A fresh population of random agents replaced any previous one.
    fn on_init_genepool(&mut self, _progress: &Progress) {}

    /// A new population has been created and awaits evaluation.
    fn on_start_population(&mut self, _progress: &Progress) {}

    fn on_pre_evaluate_generation(&mut self, _progress: &Progress) {}

    fn on_post_evaluate_generation(&mut self, _progress: &Progress) {}

    /// The previous generation has been replaced. The population, generation
    /// counter and best fitness already describe the new generation.
    fn on_end_generation(&mut self, _progress: &Progress) {}
}

/// The fixed points at which listeners are notified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LifecycleEvent {
    InitGenepool,
    StartPopulation,
    PreEvaluateGeneration,
    PostEvaluateGeneration,
    EndGeneration,
}

impl LifecycleEvent {
    pub(crate) fn dispatch<L: GenepoolListener + ?Sized>(
        &self,
        listener: &mut L,
        progress: &Progress,
    ) {
        match self {
            Self::InitGenepool => listener.on_init_genepool(progress),
            Self::StartPopulation => listener.on_start_population(progress),
            Self::PreEvaluateGeneration => listener.on_pre_evaluate_generation(progress),
            Self::PostEvaluateGeneration => listener.on_post_evaluate_generation(progress),
            Self::EndGeneration => listener.on_end_generation(progress),
        }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InitGenepool => "init_genepool",
            Self::StartPopulation => "start_population",
            Self::PreEvaluateGeneration => "pre_evaluate_generation",
            Self::PostEvaluateGeneration => "post_evaluate_generation",
            Self::EndGeneration => "end_generation",
        };
        f.write_str(name)
    }
}

/// Append-only, ordered set of listeners. Registration order is call order.
#[derive(Default)]
pub(crate) struct ListenerRegistry {
    listeners: Vec<Rc<RefCell<dyn GenepoolListener>>>,
}

impl ListenerRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn register(&mut self, listener: Rc<RefCell<dyn GenepoolListener>>) {
        self.listeners.push(listener);
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }

    pub(crate) fn notify(&self, event: LifecycleEvent, progress: &Progress) {
        for listener in &self.listeners {
            event.dispatch(&mut *listener.borrow_mut(), progress);
        }
    }
}
