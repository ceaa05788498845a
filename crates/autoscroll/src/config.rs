//! Configuration for the auto-scroll behaviour.

use crate::error::{AutoScrollError, Result};

/// Scroll rate used when none is configured, in pixels per tick.
pub const DEFAULT_PIXELS_PER_TICK: f64 = 20.0;

/// Options controlling an [`AutoScroller`](crate::AutoScroller).
///
/// Built with struct-update syntax or the `with_*` builder methods:
///
/// ```
/// use autoscroll::AutoScrollConfig;
///
/// let config = AutoScrollConfig::default()
///     .with_enabled(true)
///     .with_pixels_per_tick(12.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AutoScrollConfig {
    /// Whether the press handler is subscribed at all.
    pub enabled: bool,
    /// Capture the pointer on press.
    ///
    /// Needed when nothing inside the viewport captures the pointer itself,
    /// otherwise moves past the edge are never delivered.
    pub capture_pointer_on_press: bool,
    /// Apply auto-scrolling to touch contacts.
    ///
    /// Only enable this when the host's own touch panning is suppressed.
    pub handle_touch_events: bool,
    /// Distance scrolled per 100 ms tick while a direction is active.
    pub pixels_per_tick: f64,
}

impl Default for AutoScrollConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            capture_pointer_on_press: false,
            handle_touch_events: false,
            pixels_per_tick: DEFAULT_PIXELS_PER_TICK,
        }
    }
}

impl AutoScrollConfig {
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_capture_pointer_on_press(mut self, capture: bool) -> Self {
        self.capture_pointer_on_press = capture;
        self
    }

    pub fn with_handle_touch_events(mut self, handle: bool) -> Self {
        self.handle_touch_events = handle;
        self
    }

    pub fn with_pixels_per_tick(mut self, pixels: f64) -> Self {
        self.pixels_per_tick = pixels;
        self
    }

    /// Check that the configured values can drive a scroll.
    pub fn validate(&self) -> Result<()> {
        validate_pixels_per_tick(self.pixels_per_tick)
    }
}

pub(crate) fn validate_pixels_per_tick(pixels: f64) -> Result<()> {
    if pixels.is_finite() && pixels > 0.0 {
        Ok(())
    } else {
        Err(AutoScrollError::InvalidConfig(format!(
            "pixels_per_tick must be a positive finite number, got {pixels}"
        )))
    }
}
