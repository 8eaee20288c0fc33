//! Engine-agnostic JavaScript facade shared by the Valor DOM crates.
//! This crate centralizes the value types handed across the script boundary
//! and the tracing contract that platform objects implement for the collector.
#![allow(
    clippy::min_ident_chars,
    reason = "Formatter parameters keep the trait's `f` name"
)]

/// Script values and host-side errors.
pub mod values;
pub use values::{JSError, JSValue};

/// Cell identities and the tracing contract for platform objects.
pub mod gc;
pub use gc::{CellId, Realm, Trace, Visitor};
