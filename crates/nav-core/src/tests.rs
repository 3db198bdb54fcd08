//! Unit tests for nav-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, GoalId, NodeId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::INVALID.0, u32::MAX);
        assert_eq!(GoalId::default(), GoalId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(GoalId(7).to_string(), "GoalId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::Vec3;

    #[test]
    fn planar_distance_ignores_height() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(3.0, 500.0, 4.0);
        assert_eq!(a.planar_distance(b), 5.0);
    }

    #[test]
    fn planar_distance_symmetric() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 9.0, 15.0);
        assert_eq!(a.planar_distance(b), b.planar_distance(a));
    }

    #[test]
    fn yaw_faces_axes() {
        let o = Vec3::ZERO;
        assert_eq!(o.yaw_toward(Vec3::planar(0.0, 5.0)), Some(0.0));
        let east = o.yaw_toward(Vec3::planar(5.0, 0.0)).unwrap();
        assert!((east - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(o.yaw_toward(Vec3::new(0.0, 10.0, 0.0)), None);
    }

    #[test]
    fn step_toward_never_overshoots() {
        let from = Vec3::new(0.0, 2.0, 0.0);
        let to = Vec3::planar(10.0, 0.0);

        let mid = from.step_toward(to, 4.0);
        assert!((mid.x - 4.0).abs() < 1e-6);
        assert_eq!(mid.y, 2.0, "height is carried over");

        let end = from.step_toward(to, 25.0);
        assert_eq!(end, Vec3::new(10.0, 2.0, 0.0));
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        assert!(Tick(3) < Tick(7));
        assert_eq!(Tick::default(), Tick::ZERO);
        assert_eq!(Tick(2).to_string(), "T2");
    }

    #[test]
    fn clock_tick_secs() {
        let mut clock = SimClock::new(250);
        assert_eq!(clock.tick_secs(), 0.25);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert!((clock.elapsed_secs() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn clock_duration_change_reported() {
        let mut clock = SimClock::new(100);
        assert!(!clock.set_tick_duration_ms(100));
        assert!(clock.set_tick_duration_ms(50));
        assert_eq!(clock.tick_secs(), 0.05);
    }

    #[test]
    fn config_validation() {
        let ok = SimConfig::default();
        assert!(ok.validate().is_ok());
        assert_eq!(ok.end_tick(), Tick(ok.total_ticks));

        let bad = SimConfig { tick_duration_ms: 0, ..SimConfig::default() };
        assert!(bad.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        let xs: Vec<usize> = (0..16).map(|_| a.index(1000)).collect();
        let ys: Vec<usize> = (0..16).map(|_| b.index(1000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn index_in_range() {
        let mut r = SimRng::new(1);
        for _ in 0..200 {
            assert!(r.index(7) < 7);
        }
    }
}
