//! Tick-lifecycle hooks for embedders (logging, output writers, learning
//! updates).

use sim_core::Tick;
use sim_snapshot::Snapshot;

/// Every method defaults to a no-op so an observer only needs to
/// implement the hooks it cares about.
pub trait SimObserver {
    fn on_tick_start(&mut self, _tick: Tick) {}
    fn on_tick_end(&mut self, _tick: Tick) {}
    fn on_snapshot(&mut self, _tick: Tick, _snapshot: &Snapshot) {}
    fn on_sim_end(&mut self, _tick: Tick) {}
}

/// The default observer: observes nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
