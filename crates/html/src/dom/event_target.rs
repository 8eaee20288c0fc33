//! A flat listener list with duplicate suppression.
//!
//! There is no tree here, so dispatch only ever runs the at-target phase:
//! capturing and non-capturing listeners for the event type run in
//! registration order.

use super::event::Event;
use core::fmt::{Debug, Formatter, Result as FmtResult};
use log::trace;
use smallvec::SmallVec;
use std::rc::Rc;

/// A callback handle. Two handles are the same listener when they share the
/// same allocation, so clones of one handle compare equal.
#[derive(Clone)]
pub struct EventListener(Rc<dyn Fn(&Event)>);

impl EventListener {
    #[inline]
    pub fn new(callback: impl Fn(&Event) + 'static) -> Self {
        Self(Rc::new(callback))
    }

    #[inline]
    pub fn is_same(&self, other: &Self) -> bool {
        Rc::as_ptr(&self.0).cast::<()>() == Rc::as_ptr(&other.0).cast::<()>()
    }

    #[inline]
    pub fn call(&self, event: &Event) {
        (self.0)(event);
    }
}

impl Debug for EventListener {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "EventListener({:p})", Rc::as_ptr(&self.0).cast::<()>())
    }
}

#[derive(Clone, Debug)]
struct RegisteredListener {
    event_type: String,
    callback: EventListener,
    capture: bool,
    /// Slot owned by an `on<event>` handler attribute rather than `addEventListener`.
    handler_attribute: bool,
}

impl RegisteredListener {
    fn is(&self, event_type: &str, callback: &EventListener, capture: bool) -> bool {
        !self.handler_attribute
            && self.capture == capture
            && self.event_type == event_type
            && self.callback.is_same(callback)
    }
}

#[derive(Clone, Debug, Default)]
pub struct EventTarget {
    listeners: SmallVec<RegisteredListener, 2>,
}

impl EventTarget {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a listener unless an identical `(type, callback, capture)` entry
    /// already exists. Returns whether the listener was added.
    pub fn add_event_listener(
        &mut self,
        event_type: &str,
        callback: EventListener,
        capture: bool,
    ) -> bool {
        if self
            .listeners
            .iter()
            .any(|entry| entry.is(event_type, &callback, capture))
        {
            trace!("duplicate {event_type} listener ignored");
            return false;
        }
        self.listeners.push(RegisteredListener {
            event_type: event_type.to_owned(),
            callback,
            capture,
            handler_attribute: false,
        });
        true
    }

    #[inline]
    pub fn add_event_listener_without_options(
        &mut self,
        event_type: &str,
        callback: EventListener,
    ) -> bool {
        self.add_event_listener(event_type, callback, false)
    }

    /// Remove the matching listener, if any. Returns whether one was removed.
    pub fn remove_event_listener(
        &mut self,
        event_type: &str,
        callback: &EventListener,
        capture: bool,
    ) -> bool {
        let Some(index) = self
            .listeners
            .iter()
            .position(|entry| entry.is(event_type, callback, capture))
        else {
            return false;
        };
        self.listeners.remove(index);
        true
    }

    #[inline]
    pub fn remove_event_listener_without_options(
        &mut self,
        event_type: &str,
        callback: &EventListener,
    ) -> bool {
        self.remove_event_listener(event_type, callback, false)
    }

    /// Set or clear the `on<event_type>` handler attribute. The handler keeps
    /// the position of its first assignment until it is cleared.
    pub fn set_event_handler_attribute(
        &mut self,
        event_type: &str,
        handler: Option<EventListener>,
    ) {
        let slot = self
            .listeners
            .iter()
            .position(|entry| entry.handler_attribute && entry.event_type == event_type);
        match (slot, handler) {
            (Some(index), Some(callback)) => {
                if let Some(entry) = self.listeners.get_mut(index) {
                    entry.callback = callback;
                }
            }
            (Some(index), None) => {
                self.listeners.remove(index);
            }
            (None, Some(callback)) => self.listeners.push(RegisteredListener {
                event_type: event_type.to_owned(),
                callback,
                capture: false,
                handler_attribute: true,
            }),
            (None, None) => {}
        }
    }

    pub fn event_handler_attribute(&self, event_type: &str) -> Option<EventListener> {
        self.listeners
            .iter()
            .find(|entry| entry.handler_attribute && entry.event_type == event_type)
            .map(|entry| entry.callback.clone())
    }

    /// Number of listeners (handler attributes included) registered for a type.
    pub fn listener_count(&self, event_type: &str) -> usize {
        self.listeners
            .iter()
            .filter(|entry| entry.event_type == event_type)
            .count()
    }

    /// Invoke every listener registered for the event's type, in order.
    /// Returns how many listeners ran.
    pub fn dispatch_event(&self, event: &Event) -> usize {
        let mut invoked = 0usize;
        for entry in self
            .listeners
            .iter()
            .filter(|entry| entry.event_type == event.event_type())
        {
            entry.callback.call(event);
            invoked += 1;
        }
        trace!("dispatched {} to {invoked} listener(s)", event.event_type());
        invoked
    }
}
