//! The `NavigationStrategy` trait: the plug point between body and brain.

use crate::{Intent, ModeToggle, NavStatus, TickContext};

/// Pluggable navigation logic for one mobile entity.
///
/// The simulation owns a body (`MobileEntity` in nav-mobility) and a
/// strategy.  Each tick it builds a [`TickContext`], hands it to the strategy
/// together with any externally delivered [`ModeToggle`], and applies the
/// returned intents to the body.
///
/// # Thread safety
///
/// A strategy holds mutable per-agent state and is driven from one thread at
/// a time, so it only needs to be `Send`.
///
/// # Example
///
/// ```rust,ignore
/// struct StandStill;
///
/// impl NavigationStrategy for StandStill {
///     fn tick(&mut self, _ctx: &TickContext<'_>, _toggle: Option<ModeToggle>) -> Vec<Intent> {
///         vec![Intent::Halt]
///     }
///
///     fn status(&self) -> NavStatus { /* ... */ }
/// }
/// ```
pub trait NavigationStrategy: Send + 'static {
    /// Inspect the snapshot, update internal state, and return the intents
    /// for this tick.
    fn tick(&mut self, ctx: &TickContext<'_>, toggle: Option<ModeToggle>) -> Vec<Intent>;

    /// Read-only diagnostic view of the strategy's state after the most
    /// recent tick.
    fn status(&self) -> NavStatus;
}
