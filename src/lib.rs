//! Edge-triggered auto-scrolling for pointer drags.
//!
//! Re-exports the `autoscroll` state machine and, under [`term`], the
//! crossterm/tokio host adapter.

pub use autoscroll::*;

pub mod term {
    pub use autoscroll_term::*;
}
