//! Host object model for Valor documents: the document arena, windows,
//! event targets and abort signalling.
#![allow(
    clippy::missing_inline_in_public_items,
    reason = "Inlining decisions left to compiler for this crate"
)]
#![allow(
    clippy::min_ident_chars,
    reason = "Formatter parameters keep the trait's `f` name"
)]

pub mod config;
pub mod dom;

pub use config::ViewportConfig;
pub use dom::abort::{AbortController, AbortSignal};
pub use dom::event::{Event, EventDetail, event_names};
pub use dom::event_target::{EventListener, EventTarget};
pub use dom::window::{ColorScheme, OutputMedium, Window};
pub use dom::{
    BrowsingContextHost, Document, DocumentHandle, DocumentId, DocumentTree, UpdateLayoutReason,
};
