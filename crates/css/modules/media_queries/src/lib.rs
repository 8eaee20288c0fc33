//! Media Queries Level 4 and CSSOM View `MediaQueryList`.
//! Spec: <https://drafts.csswg.org/mediaqueries-4/>
//! Spec: <https://drafts.csswg.org/cssom-view/#the-mediaquerylist-interface>
//!
//! This module covers evaluating already-parsed media queries against a window
//! and tracking a list of them:
//! - `MediaPredicate`: the contract a single query fulfils (cached read, live re-evaluation)
//! - `MediaQuery`: media type plus a conjunction of width/height/orientation/color features
//! - `MediaQueryList`: the aggregate match state, transition tracking and `change` listeners
//!
//! Parsing media query text is handled elsewhere.
#![allow(
    clippy::min_ident_chars,
    reason = "Formatter parameters keep the trait's `f` name"
)]

mod media_query;
mod media_query_list;

pub use media_query::{MediaFeature, MediaQualifier, MediaQuery, MediaType, Orientation};
pub use media_query_list::{MediaQueryList, serialize_media_query_list};

use html::Window;
use js::Visitor;

/// A single boolean condition over the window, with a cached result.
pub trait MediaPredicate {
    /// The result of the last `evaluate`. Never recomputes.
    fn matches(&self) -> bool;

    /// Recompute against `window`, cache, and return the result.
    fn evaluate(&mut self, window: &Window) -> bool;

    /// Canonical text of this query.
    fn serialize(&self) -> String;

    /// Report collector-managed cells this predicate references. Plain values
    /// reference none.
    fn visit_edges(&self, _visitor: &mut Visitor) {}
}
