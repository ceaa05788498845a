//! The periodic-callback capability the controller scrolls on.
//!
//! Hosts supply a [`TickSource`]; the controller starts at most one ticker at
//! a time and discards its handle as soon as no direction is active. Each fire
//! must be reported back through [`AutoScroller::on_tick`](crate::AutoScroller::on_tick)
//! with the id the ticker was started with.

use std::time::Duration;

/// Time between scroll steps. `pixels_per_tick` is denominated in this unit.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Identifies one started ticker.
///
/// A new id is issued each time a ticker starts, so fires that were already
/// queued when a ticker was torn down can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickerId(u64);

impl TickerId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Something that can fire a callback periodically.
pub trait TickSource {
    /// Keeps the ticker alive. Dropping it must stop further fires.
    type Handle;

    /// Start firing every `period`, tagging each fire with `id`.
    ///
    /// The first fire should come one period after the call.
    fn start(&mut self, id: TickerId, period: Duration) -> Self::Handle;
}
