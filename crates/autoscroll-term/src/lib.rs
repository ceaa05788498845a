//! Terminal host for the `autoscroll` state machine.
//!
//! Provides the three host seams for a crossterm application running on
//! tokio: a [`TerminalPointerSource`] fed from crossterm mouse events, an
//! [`IntervalTicker`] built on `tokio::time`, and a [`TerminalAutoScroll`]
//! driver that multiplexes both in the application's event loop.

pub mod driver;
pub mod interval;
pub mod region;
pub mod source;

pub use driver::{DriverEvent, TerminalAutoScroll, TerminalScroller};
pub use interval::{IntervalHandle, IntervalTicker};
pub use region::Region;
pub use source::{MOUSE_POINTER, MouseTranslator, TerminalPointerSource};
