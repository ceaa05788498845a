//! Edge-triggered auto-scrolling for pointer drags.
//!
//! While a pointer is pressed over a scrollable viewport, dragging it past an
//! edge scrolls the viewport in that direction every [`TICK_INTERVAL`] until
//! the pointer comes back inside, the interaction ends, or the scroll extent
//! is reached.
//!
//! The crate is the state machine only. The host supplies three seams:
//!
//! - [`Viewport`]: offsets, extents and visible size, and accepts offset
//!   requests. [`ScrollState`] is a ready-made in-memory implementation.
//! - [`PointerSource`]: subscription-based pointer delivery, capture and
//!   touch hand-back.
//! - [`TickSource`]: a periodic callback. Fires come back through
//!   [`AutoScroller::on_tick`].
//!
//! All calls must come from the thread that owns the [`AutoScroller`].

pub mod boundary;
pub mod config;
pub mod controller;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod lifecycle;
mod log_init;
pub mod pointer;
pub mod scroll;
pub mod testing;
pub mod ticker;
pub mod viewport;

pub use boundary::{crossed_boundaries, crosses};
pub use config::{AutoScrollConfig, DEFAULT_PIXELS_PER_TICK};
pub use controller::{AxisScrollController, TickOutcome};
pub use direction::{Axis, Direction, DirectionFlags};
pub use error::{AutoScrollError, Result};
pub use geometry::{Point, ScrollOffset, Size};
pub use lifecycle::AutoScroller;
pub use log_init::{init_logger, init_logger_with_level};
pub use pointer::{
    PointerDevice, PointerEvent, PointerEventKind, PointerId, PointerSource, SubscriptionId,
};
pub use scroll::ScrollState;
pub use ticker::{TICK_INTERVAL, TickSource, TickerId};
pub use viewport::{Viewport, ViewportSnapshot};

// Re-export the log crate so hosts can match the level filters used here.
pub use log;
