//! The host event source interface.

use crate::geometry::Point;

/// Identifies one pointer (a mouse, a pen, or a single touch contact).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerDevice {
    Mouse,
    Pen,
    Touch,
}

impl PointerDevice {
    /// Touch contacts are panned natively by most hosts and are excluded from
    /// auto-scrolling unless configured otherwise.
    pub fn is_touch(self) -> bool {
        matches!(self, PointerDevice::Touch)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PointerEventKind {
    Pressed,
    Moved,
    Released,
    Canceled,
}

/// A pointer event as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub pointer: PointerId,
    pub device: PointerDevice,
    /// Position relative to the viewport's top-left corner.
    pub position: Point,
}

impl PointerEvent {
    pub fn new(
        kind: PointerEventKind,
        pointer: PointerId,
        device: PointerDevice,
        position: Point,
    ) -> Self {
        Self {
            kind,
            pointer,
            device,
            position,
        }
    }

    pub fn pressed(pointer: PointerId, device: PointerDevice, position: Point) -> Self {
        Self::new(PointerEventKind::Pressed, pointer, device, position)
    }

    pub fn moved(pointer: PointerId, device: PointerDevice, position: Point) -> Self {
        Self::new(PointerEventKind::Moved, pointer, device, position)
    }

    pub fn released(pointer: PointerId, device: PointerDevice, position: Point) -> Self {
        Self::new(PointerEventKind::Released, pointer, device, position)
    }

    pub fn canceled(pointer: PointerId, device: PointerDevice, position: Point) -> Self {
        Self::new(PointerEventKind::Canceled, pointer, device, position)
    }
}

/// Handle for one registered handler, returned by [`PointerSource::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Pointer event delivery as provided by the host.
///
/// The host should hand an event to the auto-scroller only while a
/// subscription for its kind is registered. Subscriptions must receive events
/// even when another handler has already marked them handled.
pub trait PointerSource {
    /// Register interest in `kind`.
    fn subscribe(&mut self, kind: PointerEventKind) -> SubscriptionId;

    /// Remove a registration. Unknown ids are ignored.
    fn unsubscribe(&mut self, subscription: SubscriptionId);

    /// Route all events of `pointer` to the viewport. Returns whether the
    /// capture was granted.
    fn capture_pointer(&mut self, pointer: PointerId) -> bool;

    fn release_pointer_capture(&mut self, pointer: PointerId);

    /// Hand a touch contact back to the host's native panning/zooming.
    fn resume_direct_manipulation(&mut self, pointer: PointerId);
}
