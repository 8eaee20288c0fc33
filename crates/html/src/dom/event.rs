//! Events dispatched to an `EventTarget`.

/// Event type names used by platform objects.
pub mod event_names {
    pub const ABORT: &str = "abort";
    pub const CHANGE: &str = "change";
}

/// Extra data carried by specialised event interfaces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EventDetail {
    #[default]
    None,
    /// `MediaQueryListEvent`: the list's serialized media and its new match state.
    MediaQueryList { media: String, matches: bool },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    event_type: String,
    detail: EventDetail,
}

impl Event {
    #[inline]
    pub fn new(event_type: &str) -> Self {
        Self {
            event_type: event_type.to_owned(),
            detail: EventDetail::None,
        }
    }

    /// Build the `change` event a media query list fires on a transition.
    #[inline]
    pub fn media_query_list_change(media: String, matches: bool) -> Self {
        Self {
            event_type: event_names::CHANGE.to_owned(),
            detail: EventDetail::MediaQueryList { media, matches },
        }
    }

    #[inline]
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    #[inline]
    pub const fn detail(&self) -> &EventDetail {
        &self.detail
    }
}
