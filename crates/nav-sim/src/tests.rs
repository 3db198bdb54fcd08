//! Unit and scenario tests for nav-sim.

use std::collections::BTreeSet;
use std::sync::Arc;

use nav_control::{
    BackgroundPlanner, ModeToggle, NavConfig, NavMode, NavState, NavStatus, NavigationController,
    NavigationStrategy, RoutePlanner,
};
use nav_core::{GoalId, SimConfig, Tick, Vec3};
use nav_mobility::{MobileEntity, SimpleBody};
use nav_spatial::{AStarPathFinder, GridPlacement, NavGraph, NavGraphBuilder};
use nav_tour::LoopPath;

use crate::{
    EventSchedule, GoalField, NoopObserver, SimBuilder, SimError, SimEvent, SimObserver,
    TransitionLog,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

const CELL: GridPlacement = GridPlacement::new(1.0, 0.0);

fn open_grid(n: u32) -> Arc<NavGraph> {
    Arc::new(NavGraphBuilder::grid(n, n, CELL, |_, _| false))
}

/// One-second ticks, so a body at speed 1.0 covers one unit per tick.
fn config(total_ticks: u64) -> SimConfig {
    SimConfig { tick_duration_ms: 1_000, total_ticks, seed: 0 }
}

fn controller(nav: NavConfig, cells: &[(i32, i32)]) -> NavigationController {
    let tour = LoopPath::from_grid(cells, CELL).unwrap();
    NavigationController::with_graph(nav, tour, open_grid(10)).unwrap()
}

fn body() -> SimpleBody {
    SimpleBody::new(Vec3::planar(0.0, 0.0), 1.0).unwrap()
}

fn line_patrol(nav: NavConfig) -> SimBuilder<NavigationController, SimpleBody> {
    SimBuilder::new(config(1_000), controller(nav, &[(0, 0), (9, 0)]), body())
}

// ── EventSchedule ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod events {
    use super::*;

    #[test]
    fn drains_in_tick_order() {
        let mut s = EventSchedule::new()
            .at(5, SimEvent::SetTickDuration(20))
            .at(2, SimEvent::Toggle(ModeToggle::Hunt))
            .at(2, SimEvent::Toggle(ModeToggle::Patrol));
        assert_eq!(s.len(), 3);
        assert_eq!(s.next_tick(), Some(Tick(2)));

        let at_two = s.drain_tick(Tick(2)).unwrap();
        assert_eq!(
            at_two,
            vec![SimEvent::Toggle(ModeToggle::Hunt), SimEvent::Toggle(ModeToggle::Patrol)]
        );
        assert_eq!(s.len(), 1);
        assert!(s.drain_tick(Tick(3)).is_none());
        assert_eq!(s.next_tick(), Some(Tick(5)));
    }

    #[test]
    fn empty_schedule() {
        let mut s = EventSchedule::new();
        assert!(s.is_empty());
        assert!(s.next_tick().is_none());
        assert!(s.drain_tick(Tick::ZERO).is_none());
    }
}

// ── GoalField ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod goal_field {
    use super::*;

    #[test]
    fn ids_are_fresh() {
        let mut f = GoalField::new(2.0);
        let a = f.spawn(Vec3::planar(1.0, 1.0));
        let b = f.spawn(Vec3::planar(2.0, 2.0));
        assert_eq!((a, b), (GoalId(0), GoalId(1)));
        assert!(f.remove(a));
        assert!(!f.remove(a));
        let c = f.spawn(Vec3::planar(3.0, 3.0));
        assert_eq!(c, GoalId(2));
        assert_eq!(f.len(), 2);
    }

    #[test]
    fn collect_is_inclusive_and_planar() {
        let mut f = GoalField::new(2.0);
        f.spawn(Vec3::new(2.0, 50.0, 0.0));
        f.spawn(Vec3::planar(2.01, 0.0));
        let taken = f.collect_near(Vec3::planar(0.0, 0.0));
        assert_eq!(taken.len(), 1);
        assert_eq!(taken[0].id, GoalId(0));
        assert_eq!(f.len(), 1);
        assert_eq!(f.collected(), 1);
    }

    #[test]
    fn removal_does_not_count_as_collection() {
        let mut f = GoalField::new(2.0);
        let id = f.spawn(Vec3::planar(0.0, 0.0));
        f.remove(id);
        assert!(f.is_empty());
        assert_eq!(f.collected(), 0);
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn rejects_zero_tick_duration() {
        let cfg = SimConfig { tick_duration_ms: 0, ..config(10) };
        let result = SimBuilder::new(cfg, controller(NavConfig::default(), &[(0, 0)]), body()).build();
        assert!(matches!(result, Err(SimError::Core(_))));
    }

    #[test]
    fn rejects_bad_collect_distance() {
        let result = line_patrol(NavConfig::default()).collect_distance(0.0).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn seeds_goals_and_events() {
        let sim = line_patrol(NavConfig::default())
            .goals([Vec3::planar(3.0, 3.0), Vec3::planar(4.0, 4.0)])
            .event(7, SimEvent::RemoveGoal(GoalId(0)))
            .build()
            .unwrap();
        assert_eq!(sim.goals.len(), 2);
        assert_eq!(sim.events.len(), 1);
        assert_eq!(sim.clock.current_tick, Tick::ZERO);
    }

    #[test]
    fn run_stops_at_total_ticks() {
        let mut sim = SimBuilder::new(config(10), controller(NavConfig::default(), &[(0, 0), (9, 0)]), body())
            .build()
            .unwrap();
        let mut log = TransitionLog::new();
        sim.run(&mut log).unwrap();
        assert_eq!(log.ticks, 10);
        assert_eq!(sim.clock.current_tick, Tick(10));
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use super::*;

    /// Remembers every tour cursor reported at the end of a tick.
    #[derive(Default)]
    struct CursorsSeen(BTreeSet<usize>);

    impl SimObserver for CursorsSeen {
        fn on_tick_end(&mut self, _tick: Tick, status: &NavStatus) {
            self.0.insert(status.tour_cursor);
        }
    }

    #[test]
    fn plain_patrol_laps_the_square() {
        let square = [(0, 0), (9, 0), (9, 9), (0, 9)];
        let mut sim = SimBuilder::new(config(100), controller(NavConfig::default(), &square), body())
            .build()
            .unwrap();
        let mut seen = CursorsSeen::default();
        sim.run(&mut seen).unwrap();

        assert_eq!(seen.0, BTreeSet::from([0, 1, 2, 3]));
        assert_eq!(sim.strategy.state(), NavState::Patrolling);
        assert!(sim.distance_travelled() > 90.0);
        let p = sim.body.position();
        assert!((-0.5..=9.5).contains(&p.x) && (-0.5..=9.5).contains(&p.z), "{p}");
    }

    #[test]
    fn detour_collects_goal_and_resumes() {
        let mut sim = line_patrol(NavConfig::default())
            .goals([Vec3::planar(5.0, 4.0)])
            .build()
            .unwrap();
        let mut log = TransitionLog::new();
        sim.run_ticks(60, &mut log).unwrap();

        assert_eq!(
            log.states(),
            vec![NavState::Patrolling, NavState::Seeking, NavState::Returning, NavState::Patrolling]
        );
        assert_eq!(log.transitions[0].0, Tick(0));
        assert_eq!(log.collected.len(), 1);
        assert_eq!(log.collected[0].1, GoalId(0));
        assert!(sim.goals.is_empty());
        assert_eq!(sim.goals.collected(), 1);
        assert!(!sim.strategy.restart_flag());
    }

    #[test]
    fn removed_goal_turns_agent_back() {
        let mut sim = line_patrol(NavConfig::default())
            .goals([Vec3::planar(5.0, 8.0)])
            .event(3, SimEvent::RemoveGoal(GoalId(0)))
            .build()
            .unwrap();
        let mut log = TransitionLog::new();
        sim.run_ticks(4, &mut log).unwrap();

        assert_eq!(
            log.transitions,
            vec![
                (Tick(0), NavState::Patrolling, NavState::Seeking),
                (Tick(3), NavState::Seeking, NavState::Returning),
            ]
        );
        assert!(log.collected.is_empty());
        assert!(sim.strategy.restart_flag());
    }

    #[test]
    fn patrol_toggle_abandons_detour() {
        let mut sim = line_patrol(NavConfig::default())
            .goals([Vec3::planar(5.0, 8.0)])
            .event(3, SimEvent::Toggle(ModeToggle::Patrol))
            .build()
            .unwrap();
        let mut log = TransitionLog::new();
        sim.run_ticks(6, &mut log).unwrap();

        assert_eq!(
            log.transitions,
            vec![
                (Tick(0), NavState::Patrolling, NavState::Seeking),
                (Tick(3), NavState::Seeking, NavState::Patrolling),
            ]
        );
        assert_eq!(sim.goals.len(), 1);
        assert!(sim.strategy.route().is_none());
        assert_eq!(sim.strategy.current_target().position(), Vec3::planar(9.0, 0.0));
    }

    #[test]
    fn hunt_without_goals_halts_until_one_spawns() {
        let nav = NavConfig::default().with_initial_mode(NavMode::Hunt);
        let mut sim = line_patrol(nav)
            .event(5, SimEvent::SpawnGoal(Vec3::planar(5.0, 4.0)))
            .build()
            .unwrap();
        let mut log = TransitionLog::new();

        sim.run_ticks(5, &mut log).unwrap();
        assert_eq!(sim.body.position(), Vec3::planar(0.0, 0.0));
        assert_eq!(sim.body.speed(), 0.0);
        assert!(sim.strategy.status().halted);
        assert!(log.transitions.is_empty());

        sim.run_ticks(3, &mut log).unwrap();
        assert_eq!(sim.body.speed(), 1.0);
        assert!(!sim.strategy.status().halted);
        assert_eq!(log.transitions[0], (Tick(5), NavState::Patrolling, NavState::Seeking));
        assert!(sim.body.position() != Vec3::planar(0.0, 0.0));
    }

    #[test]
    fn last_toggle_on_a_tick_wins() {
        let mut sim = line_patrol(NavConfig::default())
            .event(1, SimEvent::Toggle(ModeToggle::Hunt))
            .event(1, SimEvent::Toggle(ModeToggle::Patrol))
            .event(2, SimEvent::Toggle(ModeToggle::Patrol))
            .event(2, SimEvent::Toggle(ModeToggle::Hunt))
            .build()
            .unwrap();
        sim.run_ticks(2, &mut NoopObserver).unwrap();
        assert_eq!(sim.strategy.mode(), NavMode::Patrol);
        sim.run_ticks(1, &mut NoopObserver).unwrap();
        assert_eq!(sim.strategy.mode(), NavMode::Hunt);
    }

    #[test]
    fn tick_duration_change_rescales_snap() {
        let mut sim = line_patrol(NavConfig::default())
            .event(2, SimEvent::SetTickDuration(2_000))
            .event(4, SimEvent::SetTickDuration(0))
            .build()
            .unwrap();
        sim.run_ticks(2, &mut NoopObserver).unwrap();
        assert_eq!(sim.strategy.snap_distance(), 1.5);

        sim.run_ticks(3, &mut NoopObserver).unwrap();
        assert_eq!(sim.clock.tick_duration_ms, 2_000);
        assert_eq!(sim.strategy.snap_distance(), 3.0);
    }

    #[test]
    fn background_planner_reaches_seeking() {
        let tour = LoopPath::from_grid(&[(0, 0), (9, 0)], CELL).unwrap();
        let planner = BackgroundPlanner::spawn(open_grid(10), AStarPathFinder).unwrap();
        let ctl = NavigationController::new(NavConfig::default(), tour, planner).unwrap();
        let mut sim = SimBuilder::new(config(1_000), ctl, body())
            .goals([Vec3::planar(5.0, 4.0)])
            .build()
            .unwrap();

        let mut log = TransitionLog::new();
        sim.run_until(2_000, &mut log, |s| {
            std::thread::sleep(std::time::Duration::from_millis(1));
            s.strategy.state() == NavState::Seeking
        })
        .unwrap();

        assert_eq!(sim.strategy.state(), NavState::Seeking);
        assert!(!sim.strategy.planner().is_busy());
    }
}
