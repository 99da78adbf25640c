//! Observer interface for per-generation progress and score snapshots.

use crate::base::Genome;

/// Per-generation sinks the engine reports into.
///
/// Both methods default to no-ops and are invoked synchronously once per
/// generation; the engine never depends on what they do. Rendering,
/// plotting, and logging layers implement this outside the core.
pub trait Observer {
    /// Called with the generation index and the running best individual.
    fn report(&mut self, _generation: usize, _best_fitness: usize, _best: &Genome) {}

    /// Called with the full score array of the generation, concatenated
    /// across species in species order.
    fn visualize(&mut self, _scores: &[usize]) {}
}

/// Observer that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl Observer for NullObserver {}
