//! Executes a tick's intents against a body.

use tracing::trace;

use nav_control::Intent;

use crate::MobileEntity;

/// What happened to the body during one [`MotionIntegrator::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionReport {
    /// Planar distance covered this tick.
    pub moved: f32,
    /// `true` if a `Halt` was applied.
    pub halted: bool,
    /// `true` if a `RestoreSpeed` was applied.
    pub restored: bool,
}

/// Applies [`Intent`]s in order and keeps a running odometer.
///
/// Speed changes take effect before any movement in the same batch, so a
/// `Halt` emitted after `MoveToward` still stops the body this tick.
#[derive(Debug, Default)]
pub struct MotionIntegrator {
    odometer: f64,
}

impl MotionIntegrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute `intents` against `body` for one tick of `tick_secs`.
    pub fn apply<B: MobileEntity + ?Sized>(
        &mut self,
        body:      &mut B,
        intents:   &[Intent],
        tick_secs: f32,
    ) -> MotionReport {
        let mut report = MotionReport::default();

        for intent in intents {
            match intent {
                Intent::Halt => {
                    body.halt();
                    report.halted = true;
                }
                Intent::RestoreSpeed => {
                    body.restore_default_speed();
                    report.restored = true;
                }
                Intent::FaceToward(_) | Intent::MoveToward(_) => {}
            }
        }

        for intent in intents {
            match *intent {
                Intent::FaceToward(p) => body.face_toward(p),
                Intent::MoveToward(p) => report.moved += body.move_toward(p, tick_secs),
                Intent::Halt | Intent::RestoreSpeed => {}
            }
        }

        if report.halted {
            trace!(position = %body.position(), "body halted");
        }
        self.odometer += f64::from(report.moved);
        report
    }

    /// Total planar distance covered since construction.
    pub fn odometer(&self) -> f64 {
        self.odometer
    }
}
