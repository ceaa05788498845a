//! Test doubles for driving an [`AutoScroller`] without a real host.
//!
//! - [`ManualTicker`] never fires on its own; tests read the live
//!   [`TickerId`] and call [`AutoScroller::on_tick`] when they want a step.
//! - [`RecordingPointerSource`] keeps a subscription table and a log of
//!   every host call.
//! - [`RecordingViewport`] wraps a [`ScrollState`] and records each offset
//!   request.
//! - [`deliver`] hands an event to the scroller only if its kind is
//!   subscribed, the way a host's dispatcher would.
//!
//! # Example
//! ```
//! use autoscroll::testing::{deliver, ManualTicker, RecordingPointerSource};
//! use autoscroll::{AutoScrollConfig, AutoScroller, Point, PointerDevice, PointerEvent, PointerId, ScrollState};
//!
//! let ticker = ManualTicker::new();
//! let mut scroller = AutoScroller::new(
//!     ScrollState::new(500.0, 500.0, 100.0, 100.0),
//!     RecordingPointerSource::new(),
//!     ticker.clone(),
//!     AutoScrollConfig::default(),
//! )
//! .unwrap();
//!
//! // Disabled: the press never reaches the scroller.
//! let press = PointerEvent::pressed(PointerId(1), PointerDevice::Mouse, Point::new(5.0, 5.0));
//! assert!(!deliver(&mut scroller, press));
//! assert_eq!(ticker.started_count(), 0);
//! ```

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

use crate::controller::TickOutcome;
use crate::geometry::{ScrollOffset, Size};
use crate::lifecycle::AutoScroller;
use crate::pointer::{PointerEvent, PointerEventKind, PointerId, PointerSource, SubscriptionId};
use crate::scroll::ScrollState;
use crate::ticker::{TickSource, TickerId};
use crate::viewport::Viewport;

// =============================================================================
// Ticker
// =============================================================================

#[derive(Debug, Default)]
struct ManualTickerState {
    started: Vec<(TickerId, Duration)>,
    live: Vec<TickerId>,
}

/// A [`TickSource`] that only fires when the test says so.
///
/// Clones share state, so keep one clone in the test and give the other to
/// the scroller.
#[derive(Debug, Clone, Default)]
pub struct ManualTicker {
    state: Rc<RefCell<ManualTickerState>>,
}

/// Keeps a [`ManualTicker`] id live until dropped.
#[derive(Debug)]
pub struct ManualTickHandle {
    id: TickerId,
    state: Rc<RefCell<ManualTickerState>>,
}

impl Drop for ManualTickHandle {
    fn drop(&mut self) {
        self.state.borrow_mut().live.retain(|id| *id != self.id);
    }
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many tickers have ever been started.
    pub fn started_count(&self) -> usize {
        self.state.borrow().started.len()
    }

    /// How many tickers are currently live.
    pub fn live_count(&self) -> usize {
        self.state.borrow().live.len()
    }

    /// The most recently started ticker, if it is still live.
    pub fn current(&self) -> Option<TickerId> {
        let state = self.state.borrow();
        let (last, _) = state.started.last()?;
        state.live.contains(last).then_some(*last)
    }

    pub fn last_period(&self) -> Option<Duration> {
        self.state.borrow().started.last().map(|(_, period)| *period)
    }
}

impl TickSource for ManualTicker {
    type Handle = ManualTickHandle;

    fn start(&mut self, id: TickerId, period: Duration) -> ManualTickHandle {
        let mut state = self.state.borrow_mut();
        state.started.push((id, period));
        state.live.push(id);
        ManualTickHandle {
            id,
            state: Rc::clone(&self.state),
        }
    }
}

/// Fire the live ticker `times` times, stopping early once it goes away.
pub fn run_ticks<V, P>(
    scroller: &mut AutoScroller<V, P, ManualTicker>,
    ticker: &ManualTicker,
    times: usize,
) -> Vec<TickOutcome>
where
    V: Viewport,
    P: PointerSource,
{
    let mut outcomes = Vec::with_capacity(times);
    for _ in 0..times {
        let Some(id) = ticker.current() else {
            break;
        };
        outcomes.push(scroller.on_tick(id));
    }
    outcomes
}

// =============================================================================
// Pointer source
// =============================================================================

/// A host call made by the scroller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceCall {
    Subscribe(PointerEventKind, SubscriptionId),
    Unsubscribe(SubscriptionId),
    Capture(PointerId),
    ReleaseCapture(PointerId),
    ResumeDirectManipulation(PointerId),
}

/// A [`PointerSource`] that records everything asked of it.
#[derive(Debug)]
pub struct RecordingPointerSource {
    next_id: u64,
    active: BTreeMap<SubscriptionId, PointerEventKind>,
    calls: Vec<SourceCall>,
    captured: Option<PointerId>,
    grant_capture: bool,
}

impl Default for RecordingPointerSource {
    fn default() -> Self {
        Self {
            next_id: 0,
            active: BTreeMap::new(),
            calls: Vec::new(),
            captured: None,
            grant_capture: true,
        }
    }
}

impl RecordingPointerSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse capture requests, like a host where another element holds it.
    pub fn refusing_capture() -> Self {
        Self {
            grant_capture: false,
            ..Self::default()
        }
    }

    pub fn is_subscribed(&self, kind: PointerEventKind) -> bool {
        self.subscription_count(kind) > 0
    }

    pub fn subscription_count(&self, kind: PointerEventKind) -> usize {
        self.active.values().filter(|k| **k == kind).count()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn captured(&self) -> Option<PointerId> {
        self.captured
    }

    /// Pointers handed back to native manipulation, in order.
    pub fn resumed(&self) -> Vec<PointerId> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SourceCall::ResumeDirectManipulation(pointer) => Some(*pointer),
                _ => None,
            })
            .collect()
    }

    pub fn calls(&self) -> &[SourceCall] {
        &self.calls
    }
}

impl PointerSource for RecordingPointerSource {
    fn subscribe(&mut self, kind: PointerEventKind) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_id);
        self.next_id += 1;
        self.active.insert(id, kind);
        self.calls.push(SourceCall::Subscribe(kind, id));
        id
    }

    fn unsubscribe(&mut self, subscription: SubscriptionId) {
        self.active.remove(&subscription);
        self.calls.push(SourceCall::Unsubscribe(subscription));
    }

    fn capture_pointer(&mut self, pointer: PointerId) -> bool {
        self.calls.push(SourceCall::Capture(pointer));
        if self.grant_capture {
            self.captured = Some(pointer);
        }
        self.grant_capture
    }

    fn release_pointer_capture(&mut self, pointer: PointerId) {
        self.calls.push(SourceCall::ReleaseCapture(pointer));
        if self.captured == Some(pointer) {
            self.captured = None;
        }
    }

    fn resume_direct_manipulation(&mut self, pointer: PointerId) {
        self.calls.push(SourceCall::ResumeDirectManipulation(pointer));
    }
}

/// Deliver `event` the way a host would: only to a subscribed handler.
///
/// Returns whether the scroller acted on it.
pub fn deliver<V, T>(
    scroller: &mut AutoScroller<V, RecordingPointerSource, T>,
    event: PointerEvent,
) -> bool
where
    V: Viewport,
    T: TickSource,
{
    if !scroller.pointer_source().is_subscribed(event.kind) {
        return false;
    }
    scroller.dispatch(&event)
}

// =============================================================================
// Viewport
// =============================================================================

/// A [`ScrollState`] that remembers every offset request it received.
#[derive(Debug, Clone, Default)]
pub struct RecordingViewport {
    pub state: ScrollState,
    pub requests: Vec<(ScrollOffset, f32)>,
}

impl RecordingViewport {
    pub fn new(state: ScrollState) -> Self {
        Self {
            state,
            requests: Vec::new(),
        }
    }
}

impl Viewport for RecordingViewport {
    fn offsets(&self) -> ScrollOffset {
        self.state.offsets()
    }

    fn extents(&self) -> Size {
        self.state.extents()
    }

    fn visible_size(&self) -> Size {
        self.state.visible_size()
    }

    fn zoom_factor(&self) -> f32 {
        self.state.zoom_factor()
    }

    fn request_offsets(&mut self, offset: ScrollOffset, zoom_factor: f32) {
        self.requests.push((offset, zoom_factor));
        self.state.request_offsets(offset, zoom_factor);
    }
}
