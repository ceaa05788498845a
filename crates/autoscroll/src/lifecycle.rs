//! Pointer subscription lifecycle.
//!
//! The auto-scroller is closed (waiting for a press) or open (tracking one
//! pointer). Opening detaches the press handler so further pointers cannot
//! start a second session; every way of closing (release, cancel, disable,
//! drop) goes through the same teardown, and all but disable/drop re-attach
//! the press handler afterwards.
//!
//! Everything here runs on the host's event thread. None of it is
//! synchronised: hosts with several threads must marshal pointer events,
//! ticks and configuration calls onto the thread that owns the scroller.

use crate::boundary::crossed_boundaries;
use crate::config::AutoScrollConfig;
use crate::controller::{AxisScrollController, TickOutcome};
use crate::direction::{Direction, DirectionFlags};
use crate::error::Result;
use crate::pointer::{
    PointerDevice, PointerEvent, PointerEventKind, PointerId, PointerSource, SubscriptionId,
};
use crate::ticker::{TickSource, TickerId};
use crate::viewport::Viewport;

/// One tracked pointer interaction, from press to release or cancel.
#[derive(Debug, Clone, Copy, PartialEq)]
struct InteractionSession {
    pointer: PointerId,
    device: PointerDevice,
    captured: bool,
    /// `None` for contacts that are not auto-scrolled (unhandled touch).
    moved: Option<SubscriptionId>,
    released: SubscriptionId,
    canceled: SubscriptionId,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum SessionState {
    Closed,
    Open(InteractionSession),
}

/// Scrolls a viewport while a pointer is dragged past one of its edges.
///
/// ```
/// use autoscroll::testing::{deliver, ManualTicker, RecordingPointerSource};
/// use autoscroll::{AutoScrollConfig, AutoScroller, Point, PointerDevice, PointerEvent, PointerId, ScrollState};
///
/// let ticker = ManualTicker::new();
/// let view = ScrollState::new(700.0, 700.0, 200.0, 200.0).with_offset(0.0, 100.0);
/// let mut scroller = AutoScroller::new(
///     view,
///     RecordingPointerSource::new(),
///     ticker.clone(),
///     AutoScrollConfig::default().with_enabled(true),
/// )
/// .unwrap();
///
/// let mouse = PointerId(1);
/// deliver(&mut scroller, PointerEvent::pressed(mouse, PointerDevice::Mouse, Point::new(50.0, 50.0)));
/// deliver(&mut scroller, PointerEvent::moved(mouse, PointerDevice::Mouse, Point::new(50.0, 230.0)));
///
/// scroller.on_tick(ticker.current().unwrap());
/// assert_eq!(scroller.viewport().offset_y, 120.0);
/// ```
pub struct AutoScroller<V: Viewport, P: PointerSource, T: TickSource> {
    viewport: V,
    source: P,
    controller: AxisScrollController<T>,
    config: AutoScrollConfig,
    press: Option<SubscriptionId>,
    session: SessionState,
}

impl<V: Viewport, P: PointerSource, T: TickSource> AutoScroller<V, P, T> {
    /// Create an auto-scroller for `viewport`.
    ///
    /// Subscribes the press handler right away when `config.enabled` is set.
    pub fn new(viewport: V, source: P, ticks: T, config: AutoScrollConfig) -> Result<Self> {
        config.validate()?;
        let controller = AxisScrollController::new(ticks, config.pixels_per_tick)?;
        let enabled = config.enabled;
        let mut scroller = Self {
            viewport,
            source,
            controller,
            config: AutoScrollConfig {
                enabled: false,
                ..config
            },
            press: None,
            session: SessionState::Closed,
        };
        scroller.set_enabled(enabled);
        Ok(scroller)
    }

    /// Turn auto-scrolling on or off.
    ///
    /// Enabling subscribes only the press handler. Disabling stops scrolling,
    /// ends any open session and removes every subscription. Repeating the
    /// current state does nothing.
    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled == self.config.enabled {
            return;
        }
        if enabled {
            self.press = Some(self.source.subscribe(PointerEventKind::Pressed));
            log::debug!("autoscroll: enabled");
        } else {
            self.controller.stop_all();
            let session = std::mem::replace(&mut self.session, SessionState::Closed);
            if let SessionState::Open(session) = session {
                self.teardown(session);
            }
            if let Some(press) = self.press.take() {
                self.source.unsubscribe(press);
            }
            log::debug!("autoscroll: disabled");
        }
        self.config.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Feed one pointer event from the host.
    ///
    /// Returns whether the event drove a transition. Events are never marked
    /// handled; the host keeps routing them to other handlers as usual.
    pub fn dispatch(&mut self, event: &PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Pressed => self.on_press(event),
            PointerEventKind::Moved => self.on_move(event),
            PointerEventKind::Released | PointerEventKind::Canceled => {
                self.on_release_or_cancel(event)
            }
        }
    }

    /// Report a fire of the ticker identified by `id`.
    pub fn on_tick(&mut self, id: TickerId) -> TickOutcome {
        self.controller.tick(id, &mut self.viewport)
    }

    fn on_press(&mut self, event: &PointerEvent) -> bool {
        let Some(press) = self.press.take() else {
            return false;
        };
        // Detach first: a second pointer must not open another session.
        self.source.unsubscribe(press);

        let tracking = !event.device.is_touch() || self.config.handle_touch_events;
        let captured = tracking
            && self.config.capture_pointer_on_press
            && self.source.capture_pointer(event.pointer);
        let moved = tracking.then(|| self.source.subscribe(PointerEventKind::Moved));
        let released = self.source.subscribe(PointerEventKind::Released);
        let canceled = self.source.subscribe(PointerEventKind::Canceled);

        self.session = SessionState::Open(InteractionSession {
            pointer: event.pointer,
            device: event.device,
            captured,
            moved,
            released,
            canceled,
        });
        log::debug!(
            "autoscroll: session opened for {:?} pointer {} (tracking: {}, captured: {})",
            event.device,
            event.pointer.0,
            tracking,
            captured
        );
        true
    }

    fn on_move(&mut self, event: &PointerEvent) -> bool {
        let SessionState::Open(session) = self.session else {
            return false;
        };
        if session.pointer != event.pointer || session.moved.is_none() {
            return false;
        }

        let snapshot = self.viewport.snapshot();
        let crossed = crossed_boundaries(event.position, &snapshot);
        for direction in Direction::ALL {
            if crossed.contains(direction) {
                self.controller.activate(direction);
            } else if self.controller.is_active(direction) {
                self.controller.deactivate(direction);
            }
        }
        true
    }

    fn on_release_or_cancel(&mut self, event: &PointerEvent) -> bool {
        let SessionState::Open(session) = self.session else {
            return false;
        };
        if session.pointer != event.pointer {
            return false;
        }

        self.session = SessionState::Closed;
        self.teardown(session);
        self.press = Some(self.source.subscribe(PointerEventKind::Pressed));
        log::debug!("autoscroll: session closed by {:?}", event.kind);
        true
    }

    fn teardown(&mut self, session: InteractionSession) {
        if session.device.is_touch() {
            self.source.resume_direct_manipulation(session.pointer);
        }
        if session.captured {
            self.source.release_pointer_capture(session.pointer);
        }
        if let Some(moved) = session.moved {
            self.source.unsubscribe(moved);
        }
        self.source.unsubscribe(session.released);
        self.source.unsubscribe(session.canceled);
        self.controller.stop_all();
    }

    pub fn is_session_open(&self) -> bool {
        matches!(self.session, SessionState::Open(_))
    }

    /// Pointer tracked by the open session.
    pub fn session_pointer(&self) -> Option<PointerId> {
        match self.session {
            SessionState::Open(session) => Some(session.pointer),
            SessionState::Closed => None,
        }
    }

    /// Whether the press handler is currently subscribed.
    pub fn is_listening_for_press(&self) -> bool {
        self.press.is_some()
    }

    pub fn active_directions(&self) -> DirectionFlags {
        self.controller.active()
    }

    pub fn is_scrolling(&self) -> bool {
        self.controller.is_ticking()
    }

    pub fn config(&self) -> &AutoScrollConfig {
        &self.config
    }

    /// Takes effect from the next press.
    pub fn set_capture_pointer_on_press(&mut self, capture: bool) {
        self.config.capture_pointer_on_press = capture;
    }

    /// Takes effect from the next press.
    pub fn set_handle_touch_events(&mut self, handle: bool) {
        self.config.handle_touch_events = handle;
    }

    /// Change the scroll rate, effective from the next tick.
    pub fn set_pixels_per_tick(&mut self, pixels: f64) -> Result<()> {
        self.controller.set_pixels_per_tick(pixels)?;
        self.config.pixels_per_tick = pixels;
        Ok(())
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn pointer_source(&self) -> &P {
        &self.source
    }

    pub fn controller(&self) -> &AxisScrollController<T> {
        &self.controller
    }
}

impl<V: Viewport, P: PointerSource, T: TickSource> Drop for AutoScroller<V, P, T> {
    fn drop(&mut self) {
        self.set_enabled(false);
    }
}
