//! Controller configuration and mode vocabulary.

use std::fmt;

use crate::{ControlError, ControlResult};

// ── NavMode / ModeToggle ──────────────────────────────────────────────────────

/// Top-level navigation mode, flipped by external toggles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavMode {
    /// Follow the patrol tour; detour only to goals within
    /// [`NavConfig::interest_radius`].
    #[default]
    Patrol,

    /// Goal seeking enabled: leave the tour for the closest goal at any
    /// distance.  With no goals in the world the agent idles in place.
    Hunt,
}

impl fmt::Display for NavMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavMode::Patrol => f.write_str("patrol"),
            NavMode::Hunt   => f.write_str("hunt"),
        }
    }
}

/// An externally delivered mode switch, passed into the tick.
///
/// Each variant names the mode to switch to, so delivering the same toggle
/// twice is harmless.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModeToggle {
    /// Disable goal seeking.  Abandons any detour on the same tick and
    /// restores default speed.
    Patrol,

    /// Enable goal seeking.  While patrolling with a goal pending, starts a
    /// detour toward the closest goal on the same tick.
    Hunt,
}

impl ModeToggle {
    pub fn mode(self) -> NavMode {
        match self {
            ModeToggle::Patrol => NavMode::Patrol,
            ModeToggle::Hunt   => NavMode::Hunt,
        }
    }
}

// ── NavConfig ─────────────────────────────────────────────────────────────────

/// Tunables for [`NavigationController`][crate::NavigationController].
///
/// All distances are planar world units.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Radius for opportunistic detours while patrolling in
    /// [`NavMode::Patrol`].  `0.0` means any distance.
    /// Default: 40.0
    pub interest_radius: f32,

    /// How close the agent must come to a goal (or to the resume node) for
    /// it to count as reached.
    /// Default: 2.0
    pub collect_distance: f32,

    /// Snap distance as a multiple of per-tick travel distance.
    /// Default: 1.5
    pub snap_factor: f32,

    /// Mode at construction.
    /// Default: `NavMode::Patrol`
    pub initial_mode: NavMode,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            interest_radius:  40.0,
            collect_distance: 2.0,
            snap_factor:      1.5,
            initial_mode:     NavMode::Patrol,
        }
    }
}

impl NavConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interest_radius(mut self, radius: f32) -> Self {
        self.interest_radius = radius;
        self
    }

    pub fn with_collect_distance(mut self, distance: f32) -> Self {
        self.collect_distance = distance;
        self
    }

    pub fn with_snap_factor(mut self, factor: f32) -> Self {
        self.snap_factor = factor;
        self
    }

    pub fn with_initial_mode(mut self, mode: NavMode) -> Self {
        self.initial_mode = mode;
        self
    }

    /// Reject values that would make the state machine misbehave.
    pub fn validate(&self) -> ControlResult<()> {
        if !self.interest_radius.is_finite() || self.interest_radius < 0.0 {
            return Err(ControlError::Config(format!(
                "interest_radius must be finite and >= 0, got {}",
                self.interest_radius
            )));
        }
        if !self.collect_distance.is_finite() || self.collect_distance <= 0.0 {
            return Err(ControlError::Config(format!(
                "collect_distance must be finite and > 0, got {}",
                self.collect_distance
            )));
        }
        if !self.snap_factor.is_finite() || self.snap_factor <= 0.0 {
            return Err(ControlError::Config(format!(
                "snap_factor must be finite and > 0, got {}",
                self.snap_factor
            )));
        }
        Ok(())
    }
}
