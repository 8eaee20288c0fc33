//! `AbortController` and `AbortSignal`.
//! Spec: <https://dom.spec.whatwg.org/#aborting-ongoing-activities>

use super::event::{Event, event_names};
use super::event_target::{EventListener, EventTarget};
use core::fmt::{Debug, Formatter, Result as FmtResult};
use js::{CellId, JSError, JSValue, Realm, Trace, Visitor};
use log::debug;

type AbortAlgorithm = Box<dyn FnOnce(&JSValue)>;

/// A signal that can be aborted exactly once.
pub struct AbortSignal {
    cell: CellId,
    /// `None` while pending, the abort reason once signaled.
    reason: Option<JSValue>,
    abort_algorithms: Vec<AbortAlgorithm>,
    event_target: EventTarget,
}

impl AbortSignal {
    pub fn new(realm: &mut Realm) -> Self {
        Self {
            cell: realm.allocate(),
            reason: None,
            abort_algorithms: Vec::new(),
            event_target: EventTarget::new(),
        }
    }

    /// `AbortSignal.abort(reason)`: a signal that is already aborted.
    pub fn abort(realm: &mut Realm, reason: Option<JSValue>) -> Self {
        let mut signal = Self::new(realm);
        signal.signal_abort(reason);
        signal
    }

    #[inline]
    pub const fn cell(&self) -> CellId {
        self.cell
    }

    #[inline]
    pub const fn aborted(&self) -> bool {
        self.reason.is_some()
    }

    #[inline]
    pub const fn reason(&self) -> Option<&JSValue> {
        self.reason.as_ref()
    }

    /// Throw the abort reason if this signal is aborted.
    ///
    /// # Errors
    /// Returns `JSError::Thrown` carrying the abort reason once the signal has aborted.
    pub fn throw_if_aborted(&self) -> Result<(), JSError> {
        self.reason
            .as_ref()
            .map_or(Ok(()), |reason| Err(JSError::Thrown(reason.clone())))
    }

    /// Register a step to run when the signal aborts. Ignored once aborted.
    pub fn add_abort_algorithm(&mut self, algorithm: impl FnOnce(&JSValue) + 'static) {
        if self.aborted() {
            return;
        }
        self.abort_algorithms.push(Box::new(algorithm));
    }

    /// Signal abort with `reason`, defaulting to an `AbortError` exception.
    /// Only the first call has any effect.
    pub fn signal_abort(&mut self, reason: Option<JSValue>) {
        if self.aborted() {
            return;
        }
        let reason =
            reason.unwrap_or_else(|| JSValue::exception("AbortError", "Aborted without reason"));
        debug!("signal {:?} aborted: {reason}", self.cell);
        self.reason = Some(reason.clone());

        for algorithm in self.abort_algorithms.drain(..) {
            algorithm(&reason);
        }

        self.event_target
            .dispatch_event(&Event::new(event_names::ABORT));
    }

    #[inline]
    pub fn add_event_listener(&mut self, listener: Option<EventListener>) {
        if let Some(callback) = listener {
            self.event_target
                .add_event_listener_without_options(event_names::ABORT, callback);
        }
    }

    #[inline]
    pub fn remove_event_listener(&mut self, listener: Option<&EventListener>) {
        if let Some(callback) = listener {
            self.event_target
                .remove_event_listener_without_options(event_names::ABORT, callback);
        }
    }

    #[inline]
    pub fn set_onabort(&mut self, handler: Option<EventListener>) {
        self.event_target
            .set_event_handler_attribute(event_names::ABORT, handler);
    }

    #[inline]
    pub fn onabort(&self) -> Option<EventListener> {
        self.event_target
            .event_handler_attribute(event_names::ABORT)
    }
}

impl Debug for AbortSignal {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AbortSignal")
            .field("cell", &self.cell)
            .field("reason", &self.reason)
            .field("pending_algorithms", &self.abort_algorithms.len())
            .finish_non_exhaustive()
    }
}

/// Owns one `AbortSignal` and forwards `abort` to it.
#[derive(Debug)]
pub struct AbortController {
    cell: CellId,
    signal: AbortSignal,
}

impl AbortController {
    pub fn new(realm: &mut Realm) -> Self {
        let signal = AbortSignal::new(realm);
        Self {
            cell: realm.allocate(),
            signal,
        }
    }

    #[inline]
    pub const fn cell(&self) -> CellId {
        self.cell
    }

    #[inline]
    pub const fn signal(&self) -> &AbortSignal {
        &self.signal
    }

    #[inline]
    pub const fn signal_mut(&mut self) -> &mut AbortSignal {
        &mut self.signal
    }

    /// Signal abort on the owned signal with `reason`, passed through as given.
    #[inline]
    pub fn abort(&mut self, reason: Option<JSValue>) {
        self.signal.signal_abort(reason);
    }
}

impl Trace for AbortController {
    fn visit_edges(&self, visitor: &mut Visitor) {
        visitor.visit(self.signal.cell());
    }
}
