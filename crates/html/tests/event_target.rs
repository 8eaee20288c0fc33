#![cfg(test)]
//! Tests for listener registration, deduplication and handler attributes.

use html::{Event, EventListener, EventTarget, event_names};
use std::cell::RefCell;
use std::rc::Rc;

fn recording_listener(log: &Rc<RefCell<Vec<String>>>, label: &str) -> EventListener {
    let sink = Rc::clone(log);
    let label = label.to_owned();
    EventListener::new(move |event| {
        sink.borrow_mut().push(format!("{label}:{}", event.event_type()));
    })
}

#[test]
fn duplicate_registration_is_ignored() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let listener = recording_listener(&log, "a");
    let mut target = EventTarget::new();

    assert!(target.add_event_listener_without_options(event_names::CHANGE, listener.clone()));
    assert!(!target.add_event_listener_without_options(event_names::CHANGE, listener));
    assert_eq!(target.dispatch_event(&Event::new(event_names::CHANGE)), 1);
    assert_eq!(*log.borrow(), vec!["a:change".to_owned()]);
}

#[test]
fn capture_flag_distinguishes_registrations() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let listener = recording_listener(&log, "a");
    let mut target = EventTarget::new();

    target.add_event_listener(event_names::CHANGE, listener.clone(), false);
    target.add_event_listener(event_names::CHANGE, listener.clone(), true);
    assert_eq!(target.listener_count(event_names::CHANGE), 2);

    assert!(target.remove_event_listener(event_names::CHANGE, &listener, true));
    assert!(!target.remove_event_listener(event_names::CHANGE, &listener, true));
    assert_eq!(target.listener_count(event_names::CHANGE), 1);
}

#[test]
fn distinct_closures_with_same_body_are_different_listeners() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut target = EventTarget::new();
    target.add_event_listener_without_options(event_names::CHANGE, recording_listener(&log, "a"));
    target.add_event_listener_without_options(event_names::CHANGE, recording_listener(&log, "a"));
    assert_eq!(target.dispatch_event(&Event::new(event_names::CHANGE)), 2);
}

#[test]
fn dispatch_only_reaches_matching_type_in_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut target = EventTarget::new();
    let first = recording_listener(&log, "first");
    let other = recording_listener(&log, "other");
    let second = recording_listener(&log, "second");
    target.add_event_listener_without_options(event_names::CHANGE, first);
    target.add_event_listener_without_options(event_names::ABORT, other);
    target.add_event_listener_without_options(event_names::CHANGE, second);

    target.dispatch_event(&Event::new(event_names::CHANGE));

    assert_eq!(
        *log.borrow(),
        vec!["first:change".to_owned(), "second:change".to_owned()]
    );
}

#[test]
fn handler_attribute_keeps_its_first_position() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut target = EventTarget::new();
    let initial = recording_listener(&log, "handler");
    let listener = recording_listener(&log, "listener");
    target.set_event_handler_attribute(event_names::CHANGE, Some(initial));
    target.add_event_listener_without_options(event_names::CHANGE, listener);
    let replacement = recording_listener(&log, "replaced");
    target.set_event_handler_attribute(event_names::CHANGE, Some(replacement.clone()));

    target.dispatch_event(&Event::new(event_names::CHANGE));
    assert_eq!(
        *log.borrow(),
        vec!["replaced:change".to_owned(), "listener:change".to_owned()]
    );
    assert!(
        target
            .event_handler_attribute(event_names::CHANGE)
            .is_some_and(|handler| handler.is_same(&replacement))
    );

    target.set_event_handler_attribute(event_names::CHANGE, None);
    assert!(target.event_handler_attribute(event_names::CHANGE).is_none());
    assert_eq!(target.listener_count(event_names::CHANGE), 1);
}

#[test]
fn handler_attribute_does_not_count_as_duplicate_listener() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let shared = recording_listener(&log, "shared");
    let mut target = EventTarget::new();
    target.set_event_handler_attribute(event_names::CHANGE, Some(shared.clone()));
    assert!(target.add_event_listener_without_options(event_names::CHANGE, shared.clone()));
    assert!(target.remove_event_listener_without_options(event_names::CHANGE, &shared));
    assert!(target.event_handler_attribute(event_names::CHANGE).is_some());
}
