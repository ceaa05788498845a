//! Per-direction scroll state and the shared ticker.

use crate::config::validate_pixels_per_tick;
use crate::direction::{Direction, DirectionFlags};
use crate::error::Result;
use crate::geometry::ScrollOffset;
use crate::ticker::{TICK_INTERVAL, TickSource, TickerId};
use crate::viewport::Viewport;

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// The fire came from a ticker that is no longer live.
    Stale,
    /// Nothing moved. Directions already at their extent were deactivated.
    Idle,
    /// One offset request was issued with these offsets.
    Scrolled(ScrollOffset),
}

struct LiveTicker<H> {
    id: TickerId,
    _handle: H,
}

/// Owns the four direction flags and the single ticker driving them.
///
/// Invariant: a ticker is live exactly when at least one direction is
/// active. The ticker is created on the first activation and its handle is
/// dropped as soon as the last direction goes idle.
pub struct AxisScrollController<T: TickSource> {
    ticks: T,
    active: DirectionFlags,
    ticker: Option<LiveTicker<T::Handle>>,
    next_ticker: u64,
    pixels_per_tick: f64,
}

impl<T: TickSource> AxisScrollController<T> {
    pub fn new(ticks: T, pixels_per_tick: f64) -> Result<Self> {
        validate_pixels_per_tick(pixels_per_tick)?;
        Ok(Self {
            ticks,
            active: DirectionFlags::NONE,
            ticker: None,
            next_ticker: 0,
            pixels_per_tick,
        })
    }

    /// Start scrolling towards `direction`. Idempotent.
    pub fn activate(&mut self, direction: Direction) {
        if self.active.insert(direction) {
            log::trace!("autoscroll: {direction:?} active");
        }
        if self.ticker.is_none() {
            let id = TickerId::new(self.next_ticker);
            self.next_ticker += 1;
            let handle = self.ticks.start(id, TICK_INTERVAL);
            log::trace!("autoscroll: ticker {} started", id.get());
            self.ticker = Some(LiveTicker {
                id,
                _handle: handle,
            });
        }
        self.check_invariant();
    }

    /// Stop scrolling towards `direction`, and drop the ticker if nothing
    /// else is active.
    pub fn deactivate(&mut self, direction: Direction) {
        if self.active.remove(direction) {
            log::trace!("autoscroll: {direction:?} idle");
        }
        if self.active.is_empty() {
            self.drop_ticker();
        }
        self.check_invariant();
    }

    /// Deactivate every direction and drop the ticker.
    pub fn stop_all(&mut self) {
        self.active.clear();
        self.drop_ticker();
        self.check_invariant();
    }

    /// Advance the scroll by one step.
    ///
    /// Reads fresh offsets from `viewport`, then per axis handles right
    /// before left and down before up. A direction whose edge the viewport
    /// already sits on is deactivated instead of stepped. Both axes go out as
    /// one request, with the viewport's zoom factor passed back unchanged.
    pub fn tick<V: Viewport + ?Sized>(&mut self, id: TickerId, viewport: &mut V) -> TickOutcome {
        if self.ticker_id() != Some(id) {
            log::trace!("autoscroll: ignoring fire from ticker {}", id.get());
            return TickOutcome::Stale;
        }

        let snapshot = viewport.snapshot();
        let current = snapshot.offset;
        let next = ScrollOffset::new(
            self.step_axis(
                Direction::Right,
                Direction::Left,
                current.horizontal,
                snapshot.extent.width,
            ),
            self.step_axis(
                Direction::Down,
                Direction::Up,
                current.vertical,
                snapshot.extent.height,
            ),
        );

        if next == current {
            return TickOutcome::Idle;
        }
        let zoom = viewport.zoom_factor();
        viewport.request_offsets(next, zoom);
        log::trace!(
            "autoscroll: offsets ({}, {}) -> ({}, {})",
            current.horizontal,
            current.vertical,
            next.horizontal,
            next.vertical
        );
        TickOutcome::Scrolled(next)
    }

    fn step_axis(
        &mut self,
        forward: Direction,
        backward: Direction,
        current: f64,
        max: f64,
    ) -> f64 {
        let max = max.max(0.0);
        if self.active.contains(forward) {
            if current >= max {
                self.deactivate(forward);
                current
            } else {
                (current + self.pixels_per_tick).min(max)
            }
        } else if self.active.contains(backward) {
            if current <= 0.0 {
                self.deactivate(backward);
                current
            } else {
                (current - self.pixels_per_tick).max(0.0)
            }
        } else {
            current
        }
    }

    fn drop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            log::trace!("autoscroll: ticker {} stopped", ticker.id.get());
        }
    }

    fn check_invariant(&self) {
        debug_assert_eq!(
            self.ticker.is_some(),
            !self.active.is_empty(),
            "a ticker must be live exactly while a direction is active"
        );
    }

    pub fn is_active(&self, direction: Direction) -> bool {
        self.active.contains(direction)
    }

    pub fn active(&self) -> DirectionFlags {
        self.active
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    /// Id of the live ticker, if any.
    pub fn ticker_id(&self) -> Option<TickerId> {
        self.ticker.as_ref().map(|t| t.id)
    }

    pub fn pixels_per_tick(&self) -> f64 {
        self.pixels_per_tick
    }

    pub fn set_pixels_per_tick(&mut self, pixels: f64) -> Result<()> {
        validate_pixels_per_tick(pixels)?;
        self.pixels_per_tick = pixels;
        Ok(())
    }

    pub fn tick_source(&self) -> &T {
        &self.ticks
    }
}
