//! Shared fixtures for the autoscroll integration tests.

use std::cell::RefCell;
use std::rc::Rc;

use autoscroll::testing::{ManualTicker, RecordingPointerSource, RecordingViewport};
use autoscroll::{
    AutoScrollConfig, AutoScroller, Point, PointerDevice, PointerEvent, PointerEventKind,
    PointerId, PointerSource, ScrollState, SubscriptionId,
};

pub const MOUSE: PointerId = PointerId(1);

pub type TestScroller = AutoScroller<RecordingViewport, RecordingPointerSource, ManualTicker>;

/// Scrollable extent 500x500 with a 200x200 visible area.
pub fn viewport_at(h: f64, v: f64) -> RecordingViewport {
    RecordingViewport::new(ScrollState::new(700.0, 700.0, 200.0, 200.0).with_offset(h, v))
}

/// An enabled scroller at the given offsets, stepping 20 px per tick.
pub fn enabled_scroller(h: f64, v: f64) -> (TestScroller, ManualTicker) {
    let ticker = ManualTicker::new();
    let scroller = AutoScroller::new(
        viewport_at(h, v),
        RecordingPointerSource::new(),
        ticker.clone(),
        AutoScrollConfig::default()
            .with_enabled(true)
            .with_pixels_per_tick(20.0),
    )
    .expect("valid config");
    (scroller, ticker)
}

pub fn press_at(x: f64, y: f64) -> PointerEvent {
    PointerEvent::pressed(MOUSE, PointerDevice::Mouse, Point::new(x, y))
}

pub fn move_to(x: f64, y: f64) -> PointerEvent {
    PointerEvent::moved(MOUSE, PointerDevice::Mouse, Point::new(x, y))
}

pub fn release_at(x: f64, y: f64) -> PointerEvent {
    PointerEvent::released(MOUSE, PointerDevice::Mouse, Point::new(x, y))
}

pub fn cancel_at(x: f64, y: f64) -> PointerEvent {
    PointerEvent::canceled(MOUSE, PointerDevice::Mouse, Point::new(x, y))
}

/// A pointer source whose state outlives the scroller that owns it.
#[derive(Clone, Default)]
pub struct SharedSource(pub Rc<RefCell<RecordingPointerSource>>);

impl SharedSource {
    pub fn is_subscribed(&self, kind: PointerEventKind) -> bool {
        self.0.borrow().is_subscribed(kind)
    }

    pub fn active_count(&self) -> usize {
        self.0.borrow().active_count()
    }
}

impl PointerSource for SharedSource {
    fn subscribe(&mut self, kind: PointerEventKind) -> SubscriptionId {
        self.0.borrow_mut().subscribe(kind)
    }

    fn unsubscribe(&mut self, subscription: SubscriptionId) {
        self.0.borrow_mut().unsubscribe(subscription)
    }

    fn capture_pointer(&mut self, pointer: PointerId) -> bool {
        self.0.borrow_mut().capture_pointer(pointer)
    }

    fn release_pointer_capture(&mut self, pointer: PointerId) {
        self.0.borrow_mut().release_pointer_capture(pointer)
    }

    fn resume_direct_manipulation(&mut self, pointer: PointerId) {
        self.0.borrow_mut().resume_direct_manipulation(pointer)
    }
}
