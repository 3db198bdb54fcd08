//! Route planners: where path searches actually run.
//!
//! The controller never calls a [`PathFinder`] directly.  It submits a
//! [`SearchRequest`] to a [`RoutePlanner`] and polls for the outcome, which
//! lets the same state machine drive either planner:
//!
//! | Planner               | Search runs                  | Result visible          |
//! |-----------------------|------------------------------|-------------------------|
//! | [`InlinePlanner`]     | inside `submit`              | the same tick           |
//! | [`BackgroundPlanner`] | on a dedicated worker thread | a later tick            |
//!
//! # Supersede semantics
//!
//! At most one search is outstanding.  Submitting a new request (or calling
//! `cancel`) makes any in-flight search stale; its result is dropped when it
//! arrives and never reaches the controller.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};

use tracing::{error, trace};

use nav_core::Vec3;
use nav_spatial::{AStarPathFinder, NavGraph, NavNode, PathFinder, SearchRoute, SpatialResult};

use crate::{ControlError, ControlResult};

/// One path search: from the agent's position to a goal node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchRequest {
    pub from: Vec3,
    pub goal: NavNode,
}

// ── RoutePlanner trait ────────────────────────────────────────────────────────

/// Asynchronous-capable search front end.
pub trait RoutePlanner: Send + 'static {
    /// Start a search, superseding any outstanding one.
    fn submit(&mut self, request: SearchRequest);

    /// Take the outcome of the outstanding search if it has finished.
    fn poll(&mut self) -> Option<SpatialResult<SearchRoute>>;

    /// Drop the outstanding search; its result will never be returned.
    fn cancel(&mut self);

    /// `true` while a submitted search has not yet been returned by `poll`.
    fn is_busy(&self) -> bool;
}

// ── InlinePlanner ─────────────────────────────────────────────────────────────

/// Runs each search to completion inside [`submit`](RoutePlanner::submit).
///
/// Suitable whenever a search over the whole graph fits comfortably in one
/// tick, which covers grid worlds of a few hundred thousand cells.
pub struct InlinePlanner<F: PathFinder = AStarPathFinder> {
    graph:  Arc<NavGraph>,
    finder: F,
    ready:  Option<SpatialResult<SearchRoute>>,
}

impl InlinePlanner<AStarPathFinder> {
    /// An inline planner using A*.
    pub fn astar(graph: Arc<NavGraph>) -> Self {
        Self::new(graph, AStarPathFinder)
    }
}

impl<F: PathFinder> InlinePlanner<F> {
    pub fn new(graph: Arc<NavGraph>, finder: F) -> Self {
        Self { graph, finder, ready: None }
    }

    pub fn graph(&self) -> &NavGraph {
        &self.graph
    }
}

impl<F: PathFinder + 'static> RoutePlanner for InlinePlanner<F> {
    fn submit(&mut self, request: SearchRequest) {
        self.ready = Some(self.finder.find_path(&self.graph, request.from, request.goal));
    }

    fn poll(&mut self) -> Option<SpatialResult<SearchRoute>> {
        self.ready.take()
    }

    fn cancel(&mut self) {
        self.ready = None;
    }

    fn is_busy(&self) -> bool {
        self.ready.is_some()
    }
}

// ── BackgroundPlanner ─────────────────────────────────────────────────────────

struct Job {
    generation: u64,
    request:    SearchRequest,
}

struct Done {
    generation: u64,
    result:     SpatialResult<SearchRoute>,
}

/// Runs searches on a dedicated worker thread.
///
/// Every submission is tagged with a generation number.  The worker skips
/// straight to the newest queued job, and results whose generation is not
/// the latest are discarded by [`poll`](RoutePlanner::poll).  Dropping the
/// planner closes the job channel and joins the worker.
pub struct BackgroundPlanner {
    jobs:        Option<Sender<Job>>,
    results:     Receiver<Done>,
    generation:  u64,
    outstanding: bool,
    worker:      Option<JoinHandle<()>>,
}

impl BackgroundPlanner {
    /// Spawn the worker thread.
    pub fn spawn<F>(graph: Arc<NavGraph>, finder: F) -> ControlResult<Self>
    where
        F: PathFinder + 'static,
    {
        let (job_tx, job_rx) = mpsc::channel::<Job>();
        let (done_tx, done_rx) = mpsc::channel::<Done>();

        let worker = thread::Builder::new()
            .name("nav-planner".into())
            .spawn(move || worker_loop(&graph, &finder, job_rx, done_tx))
            .map_err(ControlError::Spawn)?;

        Ok(Self {
            jobs:        Some(job_tx),
            results:     done_rx,
            generation:  0,
            outstanding: false,
            worker:      Some(worker),
        })
    }

    /// Generation of the most recent submission or cancellation.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl RoutePlanner for BackgroundPlanner {
    fn submit(&mut self, request: SearchRequest) {
        self.generation += 1;
        self.outstanding = true;
        let job = Job { generation: self.generation, request };
        let sent = self.jobs.as_ref().is_some_and(|tx| tx.send(job).is_ok());
        if !sent {
            error!("planner worker is gone; search request dropped");
            self.outstanding = false;
        }
    }

    fn poll(&mut self) -> Option<SpatialResult<SearchRoute>> {
        loop {
            match self.results.try_recv() {
                Ok(done) if self.outstanding && done.generation == self.generation => {
                    self.outstanding = false;
                    return Some(done.result);
                }
                Ok(done) => {
                    trace!(generation = done.generation, latest = self.generation, "discarding stale search result");
                }
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => {
                    if self.outstanding {
                        error!("planner worker exited with a search outstanding");
                        self.outstanding = false;
                    }
                    return None;
                }
            }
        }
    }

    fn cancel(&mut self) {
        self.generation += 1;
        self.outstanding = false;
    }

    fn is_busy(&self) -> bool {
        self.outstanding
    }
}

impl Drop for BackgroundPlanner {
    fn drop(&mut self) {
        // Closing the channel ends the worker loop.
        self.jobs.take();
        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }
}

fn worker_loop<F: PathFinder>(graph: &NavGraph, finder: &F, jobs: Receiver<Job>, done: Sender<Done>) {
    while let Ok(mut job) = jobs.recv() {
        // Only the newest request matters.
        while let Ok(newer) = jobs.try_recv() {
            job = newer;
        }
        let result = finder.find_path(graph, job.request.from, job.request.goal);
        if done.send(Done { generation: job.generation, result }).is_err() {
            break; // planner dropped the receiver
        }
    }
}
