use core::error::Error;
use core::fmt::{Display, Formatter, Result as FmtResult};

/// An engine-agnostic representation of JavaScript values.
/// This is intentionally small; only what platform objects hand back and forth.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum JSValue {
    /// The `undefined` value.
    #[default]
    Undefined,
    /// The `null` value.
    Null,
    /// A boolean primitive.
    Boolean(bool),
    /// A number (IEEE 754 double precision).
    Number(f64),
    /// A string value (UTF-8).
    String(String),
    /// A `DOMException` instance, identified by its name and message.
    Exception { name: String, message: String },
}

impl JSValue {
    /// Build a `DOMException` value.
    #[inline]
    pub fn exception(name: &str, message: &str) -> Self {
        Self::Exception {
            name: name.to_owned(),
            message: message.to_owned(),
        }
    }
}

impl From<&str> for JSValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

/// Formats the value the way `String(value)` would in script.
impl Display for JSValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Boolean(flag) => write!(f, "{flag}"),
            Self::Number(number) if number.is_infinite() => {
                let sign = if number.is_sign_negative() { "-" } else { "" };
                write!(f, "{sign}Infinity")
            }
            Self::Number(number) => write!(f, "{number}"),
            Self::String(text) => f.write_str(text),
            Self::Exception { name, message } => write!(f, "{name}: {message}"),
        }
    }
}

/// Error type used by host callbacks.
#[derive(Debug, Clone, PartialEq)]
pub enum JSError {
    /// An arbitrary value thrown back into script.
    Thrown(JSValue),
}

impl Display for JSError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Thrown(value) => write!(f, "Uncaught {value}"),
        }
    }
}

impl Error for JSError {}
