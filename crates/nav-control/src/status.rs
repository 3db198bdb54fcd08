//! Diagnostic view of the controller.

use std::fmt;

use nav_core::Vec3;

use crate::NavMode;

/// Which route currently supplies the movement target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavState {
    /// Following the patrol tour.
    #[default]
    Patrolling,
    /// Following a search route toward a goal.
    Seeking,
    /// Following a search route back to the resume node.
    Returning,
}

impl NavState {
    pub fn name(&self) -> &'static str {
        match self {
            NavState::Patrolling => "Patrolling",
            NavState::Seeking    => "Seeking",
            NavState::Returning  => "Returning",
        }
    }
}

impl fmt::Display for NavState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Snapshot of the controller after a tick, for display and observers.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavStatus {
    pub state:           NavState,
    pub mode:            NavMode,
    /// Position the agent is currently steering toward.
    pub target:          Vec3,
    /// Planar distance from the agent to `target` at the start of the tick.
    pub distance:        f32,
    /// Set between reaching a goal and getting back to the resume node.
    pub restart:         bool,
    /// Patrol tour cursor.
    pub tour_cursor:     usize,
    /// Nodes left on the active search route, counting the current one.
    pub route_remaining: Option<usize>,
    /// `true` while motion is suppressed.
    pub halted:          bool,
}

impl fmt::Display for NavStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) target {} distance {:5.2}",
            self.state, self.mode, self.target, self.distance
        )?;
        if let Some(n) = self.route_remaining {
            write!(f, " route {n} left")?;
        }
        if self.restart {
            f.write_str(" [restart]")?;
        }
        if self.halted {
            f.write_str(" [halted]")?;
        }
        Ok(())
    }
}
