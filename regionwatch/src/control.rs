//! Region event dispatch.
//!
//! The widget's raw callbacks are converted into a [`RegionEvent`] and fed to a
//! [`RegionEventProcessor`], which hands each event to the registered
//! [`RegionEventHandler`]s in registration order. Handlers are plain state reducers; no
//! handler can stop propagation since region events carry no interaction to consume.

use maybe_sync::{MaybeSend, MaybeSync};

use crate::region::RegionFeature;

/// A region transition notification from the map widget.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionEvent {
    /// The viewport region is about to change.
    WillChange(RegionFeature),
    /// The viewport region finished changing.
    DidChange(RegionFeature),
}

impl RegionEvent {
    /// The feature carried by the event.
    pub fn feature(&self) -> &RegionFeature {
        match self {
            RegionEvent::WillChange(feature) | RegionEvent::DidChange(feature) => feature,
        }
    }
}

/// Region event consumer.
pub trait RegionEventHandler {
    /// Handle the event.
    fn handle(&mut self, event: &RegionEvent);
}

impl<T: for<'a> FnMut(&'a RegionEvent)> RegionEventHandler for T
where
    T: MaybeSync + MaybeSend,
{
    fn handle(&mut self, event: &RegionEvent) {
        self(event)
    }
}

/// Fans region events out to registered handlers.
#[derive(Default)]
pub struct RegionEventProcessor {
    handlers: Vec<Box<dyn RegionEventHandler>>,
}

impl RegionEventProcessor {
    /// Creates a processor with no handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a handler to the end of the dispatch list.
    pub fn add_handler(&mut self, handler: impl RegionEventHandler + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Dispatches the event to all handlers in registration order.
    pub fn dispatch(&mut self, event: &RegionEvent) {
        for handler in &mut self.handlers {
            handler.handle(event);
        }
    }
}
