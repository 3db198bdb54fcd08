//! Unit tests for nav-mobility.

use nav_control::Intent;
use nav_core::Vec3;

use crate::{MobileEntity, MobilityError, MotionIntegrator, MotionState, SimpleBody};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn body_at_origin(speed: f32) -> SimpleBody {
    SimpleBody::new(Vec3::ZERO, speed).unwrap()
}

// ── MotionState ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod motion_state {
    use super::*;

    #[test]
    fn travel_per_tick_uses_default_speed() {
        let mut s = MotionState::at(Vec3::ZERO, 4.0);
        assert_eq!(s.travel_per_tick(0.5), 2.0);
        s.speed = 0.0;
        assert!(s.is_halted());
        assert_eq!(s.travel_per_tick(0.5), 2.0);
    }
}

// ── SimpleBody ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod simple_body {
    use super::*;

    #[test]
    fn rejects_bad_speed() {
        assert_eq!(SimpleBody::new(Vec3::ZERO, -1.0), Err(MobilityError::InvalidSpeed(-1.0)));
        assert!(SimpleBody::new(Vec3::ZERO, f32::INFINITY).is_err());
    }

    #[test]
    fn moves_at_speed_without_overshoot() {
        let mut b = body_at_origin(2.0);
        let moved = b.move_toward(Vec3::planar(3.0, 0.0), 1.0);
        assert_eq!(moved, 2.0);
        assert_eq!(b.position(), Vec3::planar(2.0, 0.0));
        let moved = b.move_toward(Vec3::planar(3.0, 0.0), 1.0);
        assert_eq!(moved, 1.0);
        assert_eq!(b.position(), Vec3::planar(3.0, 0.0));
    }

    #[test]
    fn keeps_own_height() {
        let mut b = SimpleBody::new(Vec3::new(0.0, 5.0, 0.0), 1.0).unwrap();
        b.move_toward(Vec3::new(10.0, 50.0, 0.0), 1.0);
        assert_eq!(b.position(), Vec3::new(1.0, 5.0, 0.0));
    }

    #[test]
    fn face_toward_sets_yaw() {
        let mut b = body_at_origin(1.0);
        b.face_toward(Vec3::planar(1.0, 0.0));
        assert!((b.yaw() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        // Directly overhead: heading unchanged.
        b.face_toward(Vec3::new(0.0, 10.0, 0.0));
        assert!((b.yaw() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn halt_and_restore() {
        let mut b = body_at_origin(3.0);
        b.halt();
        assert_eq!(b.move_toward(Vec3::planar(10.0, 0.0), 1.0), 0.0);
        assert_eq!(b.travel_per_tick(1.0), 3.0);
        b.restore_default_speed();
        assert_eq!(b.speed(), 3.0);
    }

    #[test]
    fn default_speed_change_respects_halt() {
        let mut b = body_at_origin(1.0);
        b.set_default_speed(2.0).unwrap();
        assert_eq!(b.speed(), 2.0);
        b.halt();
        b.set_default_speed(5.0).unwrap();
        assert_eq!(b.speed(), 0.0);
        b.restore_default_speed();
        assert_eq!(b.speed(), 5.0);
    }
}

// ── MotionIntegrator ──────────────────────────────────────────────────────────

#[cfg(test)]
mod integrator {
    use super::*;

    #[test]
    fn face_then_move() {
        let mut b = body_at_origin(1.0);
        let mut m = MotionIntegrator::new();
        let target = Vec3::planar(0.0, 5.0);
        let report = m.apply(&mut b, &[Intent::FaceToward(target), Intent::MoveToward(target)], 1.0);
        assert_eq!(report.moved, 1.0);
        assert_eq!(b.position(), Vec3::planar(0.0, 1.0));
        assert_eq!(b.yaw(), 0.0);
        assert_eq!(m.odometer(), 1.0);
    }

    #[test]
    fn halt_stops_same_tick() {
        let mut b = body_at_origin(1.0);
        let mut m = MotionIntegrator::new();
        let target = Vec3::planar(5.0, 0.0);
        let report = m.apply(&mut b, &[Intent::MoveToward(target), Intent::Halt], 1.0);
        assert!(report.halted);
        assert_eq!(report.moved, 0.0);
        assert_eq!(b.position(), Vec3::ZERO);
    }

    #[test]
    fn restore_then_move() {
        let mut b = body_at_origin(2.0);
        b.halt();
        let mut m = MotionIntegrator::new();
        let target = Vec3::planar(5.0, 0.0);
        let report = m.apply(&mut b, &[Intent::RestoreSpeed, Intent::MoveToward(target)], 0.5);
        assert!(report.restored);
        assert_eq!(b.position(), Vec3::planar(1.0, 0.0));
    }

    #[test]
    fn works_through_trait_object() {
        let mut b: Box<dyn MobileEntity> = Box::new(body_at_origin(1.0));
        let mut m = MotionIntegrator::new();
        m.apply(b.as_mut(), &[Intent::MoveToward(Vec3::planar(3.0, 4.0))], 5.0);
        assert_eq!(b.position(), Vec3::planar(3.0, 4.0));
        assert_eq!(m.odometer(), 5.0);
    }
}
