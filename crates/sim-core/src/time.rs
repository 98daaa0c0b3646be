//! Simulation time model.
//!
//! Time is an integer `Tick` counter: no floating-point drift, O(1)
//! comparisons. There is deliberately no wall-clock mapping here — no
//! embedder in scope needs a tick-to-Unix-time conversion, and keeping
//! `Tick` a bare counter means a future embedder can layer one on without
//! touching the core.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }

    /// `true` if `self.0 % n == 0` (used for snapshot/validation cadence).
    #[inline]
    pub fn is_multiple_of(self, n: u64) -> bool {
        n != 0 && self.0 % n == 0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration: a typed record of every option the
/// core actually reads, in place of ad-hoc dotted-path config lookups.
///
/// Only the keys the core recognizes are represented; an embedder's own
/// config file format maps onto this struct however it likes (hence the
/// optional `serde` derive).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// `simulation.steps` — the exclusive upper bound tick, i.e. `end_step`.
    pub steps: u64,

    /// `simulation.log_directory` — base path under which
    /// `snapshot_tick_<N>.json` files are written.
    pub log_directory: String,

    /// `simulation.random_seed` — master RNG seed. `None` ⇒ OS-seeded,
    /// non-reproducible runs.
    pub random_seed: Option<u64>,

    /// `simulation.snapshot_interval` — snapshot cadence in ticks.
    pub snapshot_interval: u64,

    /// `simulation.validation_interval` — validator cadence in ticks.
    pub validation_interval: u64,
}

impl SimConfig {
    /// Build a config with the default cadences (`snapshot_interval = 50`,
    /// `validation_interval = 10`) and a given step count, seed, and log
    /// directory.
    pub fn new(steps: u64, log_directory: impl Into<String>, random_seed: Option<u64>) -> Self {
        Self {
            steps,
            log_directory: log_directory.into(),
            random_seed,
            snapshot_interval: 50,
            validation_interval: 10,
        }
    }

    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.steps)
    }
}
