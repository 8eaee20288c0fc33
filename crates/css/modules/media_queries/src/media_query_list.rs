//! CSSOM View `MediaQueryList`.
//! Spec: <https://drafts.csswg.org/cssom-view/#the-mediaquerylist-interface>

use crate::{MediaPredicate, MediaQuery};
use html::{
    BrowsingContextHost, DocumentHandle, Event, EventListener, EventTarget, UpdateLayoutReason,
    event_names,
};
use js::{CellId, Trace, Visitor};
use log::{debug, trace};

/// CSSOM: serialize a media query list as each query in order, comma separated.
pub fn serialize_media_query_list<P: MediaPredicate>(media: &[P]) -> String {
    media
        .iter()
        .map(P::serialize)
        .collect::<Vec<_>>()
        .join(", ")
}

/// An ordered list of media queries bound to a document, with a derived
/// "any query matches" state and `change` listeners.
///
/// An empty list matches.
#[derive(Debug)]
pub struct MediaQueryList<P: MediaPredicate = MediaQuery> {
    cell: CellId,
    /// Non-owning; resolved through the host on every use.
    document: DocumentHandle,
    media: Vec<P>,
    /// Set when `matches` observed a transition; cleared by whoever reports it.
    has_changed_state: bool,
    event_target: EventTarget,
}

impl<P: MediaPredicate> MediaQueryList<P> {
    /// Create a list for `document` and evaluate it once. The first evaluation
    /// is the baseline and never counts as a change.
    pub fn create<H: BrowsingContextHost + ?Sized>(
        host: &mut H,
        document: DocumentHandle,
        media: Vec<P>,
    ) -> Self {
        let mut list = Self {
            cell: host.realm_mut().allocate(),
            document,
            media,
            has_changed_state: false,
            event_target: EventTarget::new(),
        };
        list.evaluate(&*host);
        debug!("created media query list {:?} for {:?}: {}", list.cell, document.id, list.media());
        list
    }

    #[inline]
    pub const fn cell(&self) -> CellId {
        self.cell
    }

    #[inline]
    pub const fn document(&self) -> DocumentHandle {
        self.document
    }

    #[inline]
    pub fn queries(&self) -> &[P] {
        &self.media
    }

    /// The `media` attribute.
    #[inline]
    pub fn media(&self) -> String {
        serialize_media_query_list(&self.media)
    }

    /// OR over the cached results. Never re-evaluates.
    fn cached_matches(&self) -> bool {
        self.media.is_empty() || self.media.iter().any(P::matches)
    }

    /// The `matches` attribute.
    ///
    /// Reads the cached state. If the document sits in a frame, the container's
    /// layout is brought up to date first (it may resize this document's
    /// viewport) and every query is re-evaluated. A difference between the
    /// readings before and after marks the list as changed.
    pub fn matches<H: BrowsingContextHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.media.is_empty() {
            return true;
        }

        let did_match = self.cached_matches();

        if let Some(container) = host.container_document(self.document.id) {
            host.update_layout(container, UpdateLayoutReason::MediaQueryListMatches);
            self.evaluate(&*host);
        }

        let now_matches = self.cached_matches();

        if did_match != now_matches {
            trace!("media query list {:?} changed: {did_match} -> {now_matches}", self.cell);
            self.has_changed_state = true;
        }

        now_matches
    }

    /// Re-evaluate every query against the document's window and return the
    /// aggregate. A document without a window matches nothing.
    pub fn evaluate<H: BrowsingContextHost + ?Sized>(&mut self, host: &H) -> bool {
        let Some(window) = host.window(self.document.id) else {
            return false;
        };

        if self.media.is_empty() {
            return true;
        }

        let mut now_matches = false;
        for query in &mut self.media {
            now_matches |= query.evaluate(window);
        }
        now_matches
    }

    #[inline]
    pub const fn has_changed_state(&self) -> bool {
        self.has_changed_state
    }

    #[inline]
    pub fn clear_changed_state(&mut self) {
        self.has_changed_state = false;
    }

    /// Re-evaluate and fire `change` if the aggregate moved since the last
    /// evaluation or `matches` already observed a transition. Clears the
    /// changed flag. Returns whether an event was fired.
    pub fn evaluate_and_report_changes<H: BrowsingContextHost + ?Sized>(
        &mut self,
        host: &H,
    ) -> bool {
        if host.window(self.document.id).is_none() {
            return false;
        }

        let did_match = self.cached_matches();
        let now_matches = self.evaluate(host);
        if did_match == now_matches && !self.has_changed_state {
            return false;
        }
        self.has_changed_state = false;

        let event = Event::media_query_list_change(self.media(), now_matches);
        let invoked = self.event_target.dispatch_event(&event);
        debug!(
            "media query list {:?} fired change (matches: {now_matches}) to {invoked} listener(s)",
            self.cell
        );
        true
    }

    /// `addListener(callback)`: a non-capturing `change` listener. Null and
    /// duplicate registrations are ignored.
    pub fn add_listener(&mut self, listener: Option<EventListener>) {
        let Some(callback) = listener else {
            return;
        };
        self.event_target
            .add_event_listener_without_options(event_names::CHANGE, callback);
    }

    /// `removeListener(callback)`.
    pub fn remove_listener(&mut self, listener: Option<&EventListener>) {
        if let Some(callback) = listener {
            self.event_target
                .remove_event_listener_without_options(event_names::CHANGE, callback);
        }
    }

    #[inline]
    pub fn set_onchange(&mut self, handler: Option<EventListener>) {
        self.event_target
            .set_event_handler_attribute(event_names::CHANGE, handler);
    }

    #[inline]
    pub fn onchange(&self) -> Option<EventListener> {
        self.event_target
            .event_handler_attribute(event_names::CHANGE)
    }

    #[inline]
    pub const fn event_target(&self) -> &EventTarget {
        &self.event_target
    }
}

impl<P: MediaPredicate> Trace for MediaQueryList<P> {
    fn visit_edges(&self, visitor: &mut Visitor) {
        visitor.visit(self.document.cell);
        for query in &self.media {
            query.visit_edges(visitor);
        }
    }
}
