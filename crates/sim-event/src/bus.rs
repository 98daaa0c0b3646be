//! The synchronous, in-process, topic-keyed event dispatcher.
//!
//! `EventBus` is a cheap-to-clone handle (`Rc<RefCell<_>>` internally):
//! every System and handler closure registered against it holds its own
//! clone, so a handler can publish a nested event — dispatch is
//! depth-first — without the caller needing to thread a `&mut EventBus`
//! through every collaborator. This is single-threaded by design: there is
//! no `Arc`/`Mutex` here because nothing ever touches the bus from more
//! than one task.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::error::HandlerError;
use crate::payload::Payload;

type Handler = Box<dyn FnMut(&Payload) -> Result<(), HandlerError>>;

#[derive(Default)]
struct Inner {
    subscribers: HashMap<String, Vec<Handler>>,
}

#[derive(Clone, Default)]
pub struct EventBus {
    inner: Rc<RefCell<Inner>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handler to `topic`'s subscriber list. Duplicate
    /// subscriptions are allowed and invoked in subscription order.
    pub fn subscribe<F>(&self, topic: impl Into<String>, handler: F)
    where
        F: FnMut(&Payload) -> Result<(), HandlerError> + 'static,
    {
        let topic = topic.into();
        trace!(%topic, "subscribing handler");
        self.inner
            .borrow_mut()
            .subscribers
            .entry(topic)
            .or_default()
            .push(Box::new(handler));
    }

    /// Invoke every handler subscribed to `topic`, in subscription order,
    /// synchronously on the caller's stack. An unsubscribed topic is a
    /// no-op. A handler error aborts the remaining handlers in this
    /// dispatch and propagates.
    ///
    /// The subscriber list for `topic` is taken out of the map for the
    /// duration of the call so a handler is free to publish (including
    /// re-publishing to its own topic) without re-entrant borrow
    /// conflicts; it is restored (with any subscriptions added during
    /// nested dispatch appended) once every handler has run.
    pub fn publish(&self, topic: &str, payload: &Payload) -> Result<(), HandlerError> {
        let mut handlers = match self.inner.borrow_mut().subscribers.remove(topic) {
            Some(h) => h,
            None => return Ok(()),
        };

        debug!(%topic, entity_id = %payload.entity_id, tick = %payload.current_tick, handlers = handlers.len(), "dispatching event");

        let mut result = Ok(());
        for handler in handlers.iter_mut() {
            if let Err(e) = handler(payload) {
                result = Err(e);
                break;
            }
        }

        let mut inner = self.inner.borrow_mut();
        let entry = inner.subscribers.entry(topic.to_string()).or_default();
        handlers.append(entry);
        *entry = handlers;

        result
    }

    /// Number of handlers currently subscribed to `topic` (test/debug aid).
    pub fn subscriber_count(&self, topic: &str) -> usize {
        self.inner
            .borrow()
            .subscribers
            .get(topic)
            .map(Vec::len)
            .unwrap_or(0)
    }
}
