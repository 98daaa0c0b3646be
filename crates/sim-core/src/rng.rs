//! Deterministic master RNG for the tick scheduler's per-tick shuffle.
//!
//! # Determinism strategy
//!
//! The only random decision that matters for reproducibility is the
//! per-tick shuffle of the active-entity list. Rather than carrying one
//! long-lived generator forward across ticks, [`SimRng::for_tick`] derives
//! a fresh, independent `SimRng` for every tick directly from
//! `(seed, tick)`. Two calls with the same arguments always produce the
//! same generator state, regardless of what happened on any other tick —
//! so a tick's shuffle order depends only on the run's seed and that
//! tick's number, never on how many shuffles preceded it.
//!
//! That also means resuming a run from a snapshot at tick `t` needs only
//! the seed, not any serialized generator state: `for_tick(seed, t)`
//! reproduces tick `t`'s shuffle without replaying ticks `0..t` first.
//!
//! If no seed is supplied, [`SimRng::from_entropy`] seeds from OS entropy
//! and runs are not reproducible.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Golden-ratio mixing constant used to combine the run seed with a tick
/// number into an independent per-tick seed.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// The simulation's master RNG.
///
/// `SimRng` is intentionally `!Sync` (the tick loop is single-threaded)
/// so there's no temptation to share it across concurrent System updates.
pub struct SimRng(SmallRng);

impl SimRng {
    /// Seed deterministically from `seed`.
    pub fn seeded(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy. Runs using this constructor are not
    /// reproducible — callers should log that fact.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Construct from the optional `simulation.random_seed` config value.
    pub fn from_config_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::from_entropy(),
        }
    }

    /// The shuffle RNG for one specific tick, as a pure function of
    /// `(seed, tick)`. Two calls with the same arguments always produce
    /// the same generator state, independent of anything done with the
    /// RNG on other ticks — this is what lets `resume_from_snapshot`
    /// reproduce tick `t`'s shuffle order without having replayed ticks
    /// `0..t` first.
    pub fn for_tick(seed: u64, tick: crate::time::Tick) -> Self {
        let mixed = seed ^ (tick.0.wrapping_mul(MIXING_CONSTANT));
        Self::seeded(mixed)
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    ///
    /// The tick scheduler calls this once per tick on the active-entity
    /// list.
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Choose a random element from a non-empty slice.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
