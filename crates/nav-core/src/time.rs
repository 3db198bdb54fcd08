//! Simulation time model.
//!
//! # Design
//!
//! Time advances in whole `Tick`s.  Each tick stands for a fixed slice of
//! simulated time held in `SimClock`:
//!
//!   elapsed = tick * tick_duration_ms
//!
//! The navigation controller performs exactly one state inspection per tick,
//! and the mobile body integrates `speed * tick_secs()` of motion per tick.
//! Changing `tick_duration_ms` therefore changes the per-tick travel distance,
//! which is why the controller's snap distance is recomputed from it.

use std::fmt;

use crate::{NavError, NavResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and the simulated duration of one tick.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Simulated milliseconds per tick.  Default: 16 (≈ 60 ticks/s).
    pub tick_duration_ms: u32,
    /// The current tick, advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(tick_duration_ms: u32) -> Self {
        Self { tick_duration_ms, current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Duration of one tick in seconds.
    #[inline]
    pub fn tick_secs(&self) -> f32 {
        self.tick_duration_ms as f32 / 1000.0
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current_tick.0 as f64 * self.tick_duration_ms as f64 / 1000.0
    }

    /// Change the tick resolution mid-run.  Returns `true` if it changed.
    pub fn set_tick_duration_ms(&mut self, ms: u32) -> bool {
        let changed = self.tick_duration_ms != ms;
        self.tick_duration_ms = ms;
        changed
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new(16)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3} s)", self.current_tick, self.elapsed_secs())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Typically built by the application crate (or read from JSON with the
/// `serde` feature) and passed to the simulation runner.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Simulated milliseconds per tick.
    pub tick_duration_ms: u32,

    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_duration_ms)
    }

    /// Reject configurations the tick loop cannot run.
    pub fn validate(&self) -> NavResult<()> {
        if self.tick_duration_ms == 0 {
            return Err(NavError::Config("tick_duration_ms must be > 0".into()));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { tick_duration_ms: 16, total_ticks: 3_600, seed: 0 }
    }
}
