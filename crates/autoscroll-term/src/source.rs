//! Pointer delivery for a terminal viewport.
//!
//! Terminals report a single mouse with no touch or pen, so every event
//! comes from [`MOUSE_POINTER`].

use std::collections::HashMap;

use autoscroll::{
    Point, PointerDevice, PointerEvent, PointerEventKind, PointerId, PointerSource,
    SubscriptionId,
};
use crossterm::event::{MouseEvent, MouseEventKind};

use crate::region::Region;

/// The one pointer a terminal reports.
pub const MOUSE_POINTER: PointerId = PointerId(0);

/// Subscription table and capture state for a terminal viewport.
#[derive(Debug, Default)]
pub struct TerminalPointerSource {
    next_id: u64,
    subscriptions: HashMap<SubscriptionId, PointerEventKind>,
    captured: Option<PointerId>,
}

impl TerminalPointerSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether events of `kind` should be handed to the scroller.
    pub fn is_subscribed(&self, kind: PointerEventKind) -> bool {
        self.subscriptions.values().any(|k| *k == kind)
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn captured(&self) -> Option<PointerId> {
        self.captured
    }
}

impl PointerSource for TerminalPointerSource {
    fn subscribe(&mut self, kind: PointerEventKind) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_id);
        self.next_id += 1;
        self.subscriptions.insert(id, kind);
        id
    }

    fn unsubscribe(&mut self, subscription: SubscriptionId) {
        self.subscriptions.remove(&subscription);
    }

    fn capture_pointer(&mut self, pointer: PointerId) -> bool {
        self.captured = Some(pointer);
        true
    }

    fn release_pointer_capture(&mut self, pointer: PointerId) {
        if self.captured == Some(pointer) {
            self.captured = None;
        }
    }

    fn resume_direct_manipulation(&mut self, pointer: PointerId) {
        log::trace!("autoscroll-term: no native manipulation to resume for pointer {}", pointer.0);
    }
}

/// Turns crossterm mouse events into [`PointerEvent`]s for one region.
///
/// A press only counts inside the region. While a button is held the
/// terminal keeps reporting drags and the release wherever the mouse goes,
/// so those are passed on regardless of position. Plain motion outside the
/// region is passed on only while the pointer is captured.
#[derive(Debug, Clone, Default)]
pub struct MouseTranslator {
    region: Region,
    button_held: bool,
    last_position: Point,
}

impl MouseTranslator {
    pub fn new(region: Region) -> Self {
        Self {
            region,
            ..Self::default()
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn set_region(&mut self, region: Region) {
        self.region = region;
    }

    pub fn is_button_held(&self) -> bool {
        self.button_held
    }

    pub fn translate(&mut self, event: &MouseEvent, captured: bool) -> Option<PointerEvent> {
        let inside = self
            .region
            .contains_point(i32::from(event.column), i32::from(event.row));
        let kind = match event.kind {
            MouseEventKind::Down(_) if inside => {
                self.button_held = true;
                PointerEventKind::Pressed
            }
            MouseEventKind::Drag(_) if self.button_held => PointerEventKind::Moved,
            MouseEventKind::Moved if inside || captured => PointerEventKind::Moved,
            MouseEventKind::Up(_) if self.button_held => {
                self.button_held = false;
                PointerEventKind::Released
            }
            _ => return None,
        };

        let position = self.region.relative_point(event.column, event.row);
        self.last_position = position;
        Some(PointerEvent::new(kind, MOUSE_POINTER, PointerDevice::Mouse, position))
    }

    /// A cancel for the held button, e.g. when the terminal loses focus and
    /// the release will never arrive.
    pub fn cancel(&mut self) -> Option<PointerEvent> {
        if !self.button_held {
            return None;
        }
        self.button_held = false;
        Some(PointerEvent::canceled(
            MOUSE_POINTER,
            PointerDevice::Mouse,
            self.last_position,
        ))
    }
}
