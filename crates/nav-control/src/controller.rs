//! Patrol/seek navigation state machine.
//!
//! # States
//!
//! ```text
//!                goal found, route ok            goal reached or vanished,
//!   Patrolling ───────────────────────▶ Seeking ──────────────────────────▶ Returning
//!       ▲                                  │         route back ok              │
//!       │        ModeToggle::Patrol        │                                    │
//!       ├──────────────────────────────────┘                                    │
//!       │        ModeToggle::Patrol or within collect distance of resume node   │
//!       └───────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Exactly one route supplies the target at any tick: the patrol tour while
//! `Patrolling` (or the saved resume node right after a return), the search
//! route otherwise.
//!
//! # Tick order
//!
//! 1. Recompute the snap distance if the per-tick travel distance changed.
//! 2. Apply the external toggle, if any.
//! 3. Collect a finished search from the planner.
//! 4. Motion suppression: `Hunt` mode with an empty goal set halts the agent
//!    and skips the state step.
//! 5. Run the state step (at most one cursor advance).
//! 6. Collect again, so inline searches take effect on the tick that
//!    triggered them.
//! 7. Emit `FaceToward(target)` then `MoveToward(target)`.
//!
//! # Toggling back to patrol
//!
//! `ModeToggle::Patrol` during a detour returns to the tour at once, and a
//! seek search still in flight is cancelled so it can never land.  Goal
//! detection stays disarmed until the next tour waypoint is reached, so the
//! goal that was just abandoned does not immediately pull the agent back.
//!
//! # Failed searches
//!
//! A search that finds no route leaves the state exactly as it was.  The
//! trigger that caused it fires again on a later tick, which retries.

use std::sync::Arc;

use tracing::{debug, info, trace, warn};

use nav_core::Vec3;
use nav_spatial::{GoalCandidate, GoalSelector, NavGraph, NavNode, SearchRoute, SpatialResult};
use nav_tour::LoopPath;

use crate::{
    ControlResult, InlinePlanner, Intent, ModeToggle, NavConfig, NavMode, NavState, NavStatus,
    NavigationStrategy, RoutePlanner, SearchRequest, TickContext,
};

/// What an outstanding search is for.
#[derive(Copy, Clone, Debug)]
enum PendingSearch {
    /// Leaving the tour for `goal`; `resume` is where the agent left it.
    Seek { goal: GoalCandidate, resume: NavNode },
    /// Heading back to the resume node.
    Return,
}

/// The patrol/seek controller for one agent.
///
/// Owns the patrol tour, the active search route, and the planner.  Feed it
/// one [`TickContext`] per tick through [`NavigationStrategy::tick`].
pub struct NavigationController<P: RoutePlanner = InlinePlanner> {
    config:  NavConfig,
    tour:    LoopPath,
    planner: P,

    mode:  NavMode,
    state: NavState,

    route:   Option<SearchRoute>,
    goal:    Option<GoalCandidate>,
    resume:  Option<NavNode>,
    restart: bool,
    /// Set after a return: the patrol target until it is reached.
    rejoin:  Option<NavNode>,
    pending: Option<PendingSearch>,
    /// Cleared when a toggle abandons a detour; re-armed at the next tour
    /// waypoint or by a `Hunt` toggle.
    seek_armed: bool,

    travel_per_tick: Option<f32>,
    snap_distance:   f32,
    halted:          bool,

    // Cached for `status()`.
    target:   Vec3,
    distance: f32,
}

impl NavigationController<InlinePlanner> {
    /// Controller with a synchronous A* planner over `graph`.
    pub fn with_graph(config: NavConfig, tour: LoopPath, graph: Arc<NavGraph>) -> ControlResult<Self> {
        Self::new(config, tour, InlinePlanner::astar(graph))
    }
}

impl<P: RoutePlanner> NavigationController<P> {
    pub fn new(config: NavConfig, tour: LoopPath, planner: P) -> ControlResult<Self> {
        config.validate()?;
        let target = tour.current().position();
        Ok(Self {
            mode: config.initial_mode,
            config,
            tour,
            planner,
            state: NavState::Patrolling,
            route: None,
            goal: None,
            resume: None,
            restart: false,
            rejoin: None,
            pending: None,
            seek_armed: true,
            travel_per_tick: None,
            snap_distance: 0.0,
            halted: false,
            target,
            distance: 0.0,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &NavConfig { &self.config }
    pub fn state(&self) -> NavState { self.state }
    pub fn mode(&self) -> NavMode { self.mode }
    pub fn tour(&self) -> &LoopPath { &self.tour }
    pub fn route(&self) -> Option<&SearchRoute> { self.route.as_ref() }
    pub fn goal(&self) -> Option<GoalCandidate> { self.goal }
    pub fn resume_node(&self) -> Option<NavNode> { self.resume }
    pub fn restart_flag(&self) -> bool { self.restart }
    pub fn snap_distance(&self) -> f32 { self.snap_distance }
    pub fn is_halted(&self) -> bool { self.halted }
    pub fn planner(&self) -> &P { &self.planner }

    /// `true` while a search has been submitted but not yet applied.
    pub fn search_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The node currently supplying the movement target.
    pub fn current_target(&self) -> NavNode {
        match self.state {
            NavState::Patrolling => self.rejoin.unwrap_or_else(|| self.tour.current()),
            NavState::Seeking | NavState::Returning => match &self.route {
                Some(route) => route.current(),
                None => self.tour.current(),
            },
        }
    }

    // ── Snap distance ─────────────────────────────────────────────────────

    fn update_snap_distance(&mut self, travel_per_tick: f32) {
        if self.travel_per_tick == Some(travel_per_tick) {
            return;
        }
        self.travel_per_tick = Some(travel_per_tick);
        self.snap_distance = self.config.snap_factor * travel_per_tick;
        debug!(travel_per_tick, snap_distance = self.snap_distance, "snap distance recomputed");
    }

    #[inline]
    fn within_snap(&self, node: NavNode, position: Vec3) -> bool {
        node.planar_distance(position) <= self.snap_distance
    }

    #[inline]
    fn within_collect(&self, node: NavNode, position: Vec3) -> bool {
        node.planar_distance(position) <= self.config.collect_distance
    }

    // ── Toggle ────────────────────────────────────────────────────────────

    fn apply_toggle(&mut self, toggle: ModeToggle, ctx: &TickContext<'_>, intents: &mut Vec<Intent>) {
        let previous = self.mode;
        self.mode = toggle.mode();
        if previous != self.mode {
            info!(tick = %ctx.tick, from = %previous, to = %self.mode, "navigation mode toggled");
        }

        match toggle {
            ModeToggle::Patrol => {
                if self.state != NavState::Patrolling {
                    self.abandon_detour(ctx);
                    self.seek_armed = false;
                } else if self.pending.take().is_some() {
                    // A seek still in flight must not land after this toggle.
                    debug!(tick = %ctx.tick, "pending seek cancelled by patrol toggle");
                    self.planner.cancel();
                    self.seek_armed = false;
                }
                intents.push(Intent::RestoreSpeed);
                self.halted = false;
            }
            ModeToggle::Hunt => {
                self.seek_armed = true;
                if self.state != NavState::Patrolling {
                    return;
                }
                let goals = GoalSelector::new(ctx.goals);
                if let Some(goal) = goals.closest_node(ctx.position, 0.0) {
                    // Supersede any opportunistic search already in flight.
                    self.planner.cancel();
                    self.pending = None;
                    self.begin_seek(ctx, goal);
                }
            }
        }
    }

    /// Drop the search route and go straight back to the tour.
    fn abandon_detour(&mut self, ctx: &TickContext<'_>) {
        info!(tick = %ctx.tick, from = %self.state, "detour abandoned, back to patrol");
        self.planner.cancel();
        self.pending = None;
        self.route = None;
        self.goal = None;
        self.resume = None;
        self.restart = false;
        self.rejoin = None;
        self.state = NavState::Patrolling;
    }

    // ── Searches ──────────────────────────────────────────────────────────

    fn begin_seek(&mut self, ctx: &TickContext<'_>, goal: GoalCandidate) {
        let resume = NavNode::new(ctx.position);
        trace!(tick = %ctx.tick, goal = %goal.id, "submitting seek search");
        self.pending = Some(PendingSearch::Seek { goal, resume });
        self.planner.submit(SearchRequest { from: ctx.position, goal: goal.node() });
    }

    fn begin_return(&mut self, ctx: &TickContext<'_>) {
        let Some(resume) = self.resume else {
            // No resume node means there is nothing to return to.
            self.abandon_detour(ctx);
            return;
        };
        trace!(tick = %ctx.tick, "submitting return search");
        self.pending = Some(PendingSearch::Return);
        self.planner.submit(SearchRequest { from: ctx.position, goal: resume });
    }

    /// Apply a finished search, if there is one.
    fn collect_search(&mut self, ctx: &TickContext<'_>) {
        let Some(result) = self.planner.poll() else {
            if !self.planner.is_busy() {
                self.pending = None;
            }
            return;
        };
        let Some(pending) = self.pending.take() else {
            return;
        };
        self.apply_search(ctx, pending, result);
    }

    fn apply_search(
        &mut self,
        ctx:     &TickContext<'_>,
        pending: PendingSearch,
        result:  SpatialResult<SearchRoute>,
    ) {
        match (pending, result) {
            (PendingSearch::Seek { goal, resume }, Ok(route)) => {
                if self.state != NavState::Patrolling {
                    return;
                }
                info!(
                    tick = %ctx.tick,
                    goal = %goal.id,
                    nodes = route.len(),
                    cost = route.total_cost(),
                    "patrolling → seeking"
                );
                self.state = NavState::Seeking;
                self.goal = Some(goal);
                self.resume = Some(resume);
                self.rejoin = None;
                self.route = Some(route);
            }
            (PendingSearch::Seek { goal, .. }, Err(e)) => {
                warn!(tick = %ctx.tick, goal = %goal.id, error = %e, "no route to goal, staying on patrol");
            }
            (PendingSearch::Return, Ok(route)) => {
                if self.state != NavState::Seeking {
                    return;
                }
                info!(tick = %ctx.tick, nodes = route.len(), "seeking → returning");
                self.state = NavState::Returning;
                self.restart = true;
                self.goal = None;
                self.route = Some(route);
            }
            (PendingSearch::Return, Err(e)) => {
                warn!(tick = %ctx.tick, error = %e, "no route back to resume node, will retry");
            }
        }
    }

    // ── State steps ───────────────────────────────────────────────────────

    fn patrol_step(&mut self, ctx: &TickContext<'_>) {
        let target = self.current_target();
        if self.within_snap(target, ctx.position) {
            if self.rejoin.take().is_some() {
                debug!(tick = %ctx.tick, cursor = self.tour.cursor(), "rejoined patrol tour");
            } else {
                let next = self.tour.next();
                self.seek_armed = true;
                debug!(tick = %ctx.tick, cursor = self.tour.cursor(), next = %next, "tour advanced");
            }
        }

        if self.pending.is_some() || !self.seek_armed {
            return;
        }
        let radius = match self.mode {
            NavMode::Patrol => self.config.interest_radius,
            NavMode::Hunt   => 0.0,
        };
        if let Some(goal) = GoalSelector::new(ctx.goals).closest_node(ctx.position, radius) {
            self.begin_seek(ctx, goal);
        }
    }

    fn seek_step(&mut self, ctx: &TickContext<'_>) {
        let Some(goal) = self.goal else {
            self.abandon_detour(ctx);
            return;
        };

        let vanished = GoalSelector::new(ctx.goals).get(goal.id).is_none();
        if vanished || self.within_collect(goal.node(), ctx.position) {
            if self.pending.is_none() {
                debug!(tick = %ctx.tick, goal = %goal.id, vanished, "goal reached");
                self.begin_return(ctx);
            }
            return;
        }

        self.advance_route(ctx);
    }

    fn return_step(&mut self, ctx: &TickContext<'_>) {
        if let Some(resume) = self.resume {
            if self.restart && self.within_collect(resume, ctx.position) {
                info!(tick = %ctx.tick, resume = %resume, "returning → patrolling");
                self.restart = false;
                self.state = NavState::Patrolling;
                self.route = None;
                self.rejoin = self.resume.take();
                return;
            }
        }
        self.advance_route(ctx);
    }

    fn advance_route(&mut self, ctx: &TickContext<'_>) {
        let snap = self.snap_distance;
        let Some(route) = self.route.as_mut() else { return };
        if route.current().planar_distance(ctx.position) <= snap {
            if let Some(next) = route.advance() {
                debug!(tick = %ctx.tick, cursor = route.cursor(), next = %next, "route advanced");
            }
        }
    }
}

impl<P: RoutePlanner> NavigationStrategy for NavigationController<P> {
    fn tick(&mut self, ctx: &TickContext<'_>, toggle: Option<ModeToggle>) -> Vec<Intent> {
        let mut intents = Vec::with_capacity(3);

        self.update_snap_distance(ctx.travel_per_tick);
        if let Some(toggle) = toggle {
            self.apply_toggle(toggle, ctx, &mut intents);
        }
        self.collect_search(ctx);

        if self.mode == NavMode::Hunt && ctx.goals.is_empty() {
            let target = self.current_target();
            self.target = target.position();
            self.distance = target.planar_distance(ctx.position);
            if !self.halted {
                debug!(tick = %ctx.tick, "no goals in hunt mode, halting");
            }
            self.halted = true;
            intents.push(Intent::FaceToward(self.target));
            intents.push(Intent::Halt);
            return intents;
        }
        if self.halted {
            self.halted = false;
            intents.push(Intent::RestoreSpeed);
        }

        match self.state {
            NavState::Patrolling => self.patrol_step(ctx),
            NavState::Seeking    => self.seek_step(ctx),
            NavState::Returning  => self.return_step(ctx),
        }
        self.collect_search(ctx);

        let target = self.current_target();
        self.target = target.position();
        self.distance = target.planar_distance(ctx.position);
        intents.push(Intent::FaceToward(self.target));
        intents.push(Intent::MoveToward(self.target));
        intents
    }

    fn status(&self) -> NavStatus {
        NavStatus {
            state:           self.state,
            mode:            self.mode,
            target:          self.target,
            distance:        self.distance,
            restart:         self.restart,
            tour_cursor:     self.tour.cursor(),
            route_remaining: self.route.as_ref().map(SearchRoute::remaining),
            halted:          self.halted,
        }
    }
}
