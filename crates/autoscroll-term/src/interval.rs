//! A tokio-backed [`TickSource`].

use std::time::Duration;

use autoscroll::{TickSource, TickerId};
use tokio::sync::{mpsc, oneshot};
use tokio::time::{Instant, MissedTickBehavior};

/// Starts one tokio task per ticker, sending its [`TickerId`] every period.
///
/// Must be used from within a tokio runtime.
#[derive(Debug, Clone)]
pub struct IntervalTicker {
    sender: mpsc::UnboundedSender<TickerId>,
}

impl IntervalTicker {
    pub fn new(sender: mpsc::UnboundedSender<TickerId>) -> Self {
        Self { sender }
    }

    /// A ticker together with the receiving end of its fires.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<TickerId>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl TickSource for IntervalTicker {
    type Handle = IntervalHandle;

    fn start(&mut self, id: TickerId, period: Duration) -> IntervalHandle {
        let sender = self.sender.clone();
        let (cancel_tx, mut cancel_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            // A stalled event loop should not produce a burst of catch-up steps.
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        if sender.send(id).is_err() {
                            break; // Receiver dropped
                        }
                    }
                    _ = &mut cancel_rx => {
                        break; // Cancelled or handle dropped
                    }
                }
            }
        });

        IntervalHandle {
            cancel_tx: Some(cancel_tx),
        }
    }
}

/// Handle to cancel a running interval.
///
/// The interval is automatically cancelled when this handle is dropped.
#[derive(Debug)]
pub struct IntervalHandle {
    cancel_tx: Option<oneshot::Sender<()>>,
}

impl IntervalHandle {
    /// Cancel the interval, stopping further fires from being sent.
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
