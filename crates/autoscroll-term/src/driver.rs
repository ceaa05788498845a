//! Event-loop glue between crossterm, tokio and the auto-scroller.

use std::io;

use autoscroll::{
    AutoScrollConfig, AutoScrollError, AutoScroller, PointerEvent, Result, TickOutcome, TickerId,
    Viewport,
};
use crossterm::event::{Event, MouseEvent};
use futures::{Stream, StreamExt};
use tokio::sync::mpsc;

use crate::interval::IntervalTicker;
use crate::region::Region;
use crate::source::{MouseTranslator, TerminalPointerSource};

/// What [`TerminalAutoScroll::next_event`] woke up for.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverEvent {
    /// A terminal event, already offered to the auto-scroller. Hosts should
    /// still handle it themselves.
    Terminal(Event),
    /// The scroll ticker fired.
    Tick(TickOutcome),
}

enum Wake {
    Terminal(Option<io::Result<Event>>),
    Tick(TickerId),
}

pub type TerminalScroller<V> = AutoScroller<V, TerminalPointerSource, IntervalTicker>;

/// Auto-scrolling for one viewport drawn in a terminal.
///
/// Terminal applications call [`next_event`](Self::next_event) in their
/// loop instead of polling crossterm directly; scroll ticks are interleaved
/// with terminal events and applied before being reported.
///
/// ```ignore
/// let mut events = crossterm::event::EventStream::new();
/// let mut auto = TerminalAutoScroll::new(state, region, config)?;
/// while let Some(event) = auto.next_event(&mut events).await? {
///     match event {
///         DriverEvent::Tick(TickOutcome::Scrolled(_)) => redraw(auto.scroller().viewport()),
///         DriverEvent::Terminal(event) => handle(event),
///         DriverEvent::Tick(_) => {}
///     }
/// }
/// ```
pub struct TerminalAutoScroll<V: Viewport> {
    scroller: TerminalScroller<V>,
    ticks: mpsc::UnboundedReceiver<TickerId>,
    translator: MouseTranslator,
}

impl<V: Viewport> TerminalAutoScroll<V> {
    pub fn new(viewport: V, region: Region, config: AutoScrollConfig) -> Result<Self> {
        let (ticker, ticks) = IntervalTicker::channel();
        let scroller = AutoScroller::new(viewport, TerminalPointerSource::new(), ticker, config)?;
        Ok(Self {
            scroller,
            ticks,
            translator: MouseTranslator::new(region),
        })
    }

    pub fn scroller(&self) -> &TerminalScroller<V> {
        &self.scroller
    }

    pub fn scroller_mut(&mut self) -> &mut TerminalScroller<V> {
        &mut self.scroller
    }

    pub fn region(&self) -> Region {
        self.translator.region()
    }

    /// Move or resize the viewport on screen.
    ///
    /// The viewport's own visible size is the host's to keep in sync.
    pub fn set_region(&mut self, region: Region) {
        self.translator.set_region(region);
    }

    /// Offer a terminal event to the auto-scroller.
    ///
    /// Returns whether it drove a transition.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::FocusLost => match self.translator.cancel() {
                Some(cancel) => self.deliver(cancel),
                None => false,
            },
            _ => false,
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> bool {
        let captured = self.scroller.pointer_source().captured().is_some();
        match self.translator.translate(mouse, captured) {
            Some(event) => self.deliver(event),
            None => false,
        }
    }

    fn deliver(&mut self, event: PointerEvent) -> bool {
        if !self.scroller.pointer_source().is_subscribed(event.kind) {
            return false;
        }
        self.scroller.dispatch(&event)
    }

    pub fn handle_tick(&mut self, id: TickerId) -> TickOutcome {
        self.scroller.on_tick(id)
    }

    /// Wait for the next terminal event or scroll tick.
    ///
    /// Returns `Ok(None)` once `events` ends.
    pub async fn next_event<S>(&mut self, events: &mut S) -> Result<Option<DriverEvent>>
    where
        S: Stream<Item = io::Result<Event>> + Unpin,
    {
        // NOTE: Don't use `biased` here - a busy mouse stream would starve ticks.
        let wake = tokio::select! {
            maybe_event = events.next() => Wake::Terminal(maybe_event),
            Some(id) = self.ticks.recv() => Wake::Tick(id),
        };

        match wake {
            Wake::Terminal(Some(Ok(event))) => {
                self.handle_event(&event);
                Ok(Some(DriverEvent::Terminal(event)))
            }
            Wake::Terminal(Some(Err(e))) => Err(AutoScrollError::IO(e)),
            Wake::Terminal(None) => Ok(None),
            Wake::Tick(id) => Ok(Some(DriverEvent::Tick(self.handle_tick(id)))),
        }
    }
}
