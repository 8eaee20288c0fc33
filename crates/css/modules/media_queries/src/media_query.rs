//! Evaluation and serialization of a single media query.
//! Spec: Section 2 — Media Queries; Section 4 — Viewport/Device Characteristics

use crate::MediaPredicate;
use core::fmt::{Display, Formatter, Result as FmtResult};
use html::{ColorScheme, OutputMedium, Window};

/// `not` / `only` prefix.
/// Spec: Section 2.2 — Media Query Modifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaQualifier {
    Not,
    Only,
}

/// Spec: Section 2.3 — Media Types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaType {
    All,
    Screen,
    Print,
}

impl MediaType {
    const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Screen => "screen",
            Self::Print => "print",
        }
    }

    const fn accepts(self, medium: OutputMedium) -> bool {
        matches!(
            (self, medium),
            (Self::All, _)
                | (Self::Screen, OutputMedium::Screen)
                | (Self::Print, OutputMedium::Print)
        )
    }
}

/// Spec: Section 4.4 — Orientation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Supported media features. Lengths are CSS pixels.
/// Spec: Section 4, 5.6, 11.5
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MediaFeature {
    MinWidth(f32),
    MaxWidth(f32),
    MinHeight(f32),
    MaxHeight(f32),
    Orientation(Orientation),
    /// Minimum bits per color component.
    MinColor(u8),
    PrefersColorScheme(ColorScheme),
}

impl MediaFeature {
    fn evaluate(self, window: &Window) -> bool {
        let width = window.inner_width();
        let height = window.inner_height();
        match self {
            Self::MinWidth(min) => width >= min,
            Self::MaxWidth(max) => width <= max,
            Self::MinHeight(min) => height >= min,
            Self::MaxHeight(max) => height <= max,
            // Spec: portrait when height is greater than or equal to width.
            Self::Orientation(Orientation::Portrait) => height >= width,
            Self::Orientation(Orientation::Landscape) => width > height,
            Self::MinColor(bits) => window.color_depth() >= bits,
            Self::PrefersColorScheme(scheme) => window.color_scheme() == scheme,
        }
    }
}

/// Spec: CSSOM, serialize a media feature as `(name: value)`.
impl Display for MediaFeature {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::MinWidth(px) => write!(f, "(min-width: {px}px)"),
            Self::MaxWidth(px) => write!(f, "(max-width: {px}px)"),
            Self::MinHeight(px) => write!(f, "(min-height: {px}px)"),
            Self::MaxHeight(px) => write!(f, "(max-height: {px}px)"),
            Self::Orientation(Orientation::Portrait) => f.write_str("(orientation: portrait)"),
            Self::Orientation(Orientation::Landscape) => f.write_str("(orientation: landscape)"),
            Self::MinColor(bits) => write!(f, "(min-color: {bits})"),
            Self::PrefersColorScheme(ColorScheme::Light) => {
                f.write_str("(prefers-color-scheme: light)")
            }
            Self::PrefersColorScheme(ColorScheme::Dark) => {
                f.write_str("(prefers-color-scheme: dark)")
            }
        }
    }
}

/// A parsed media query. Its match state is cached until the next `evaluate`.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaQuery {
    qualifier: Option<MediaQualifier>,
    media_type: MediaType,
    features: Vec<MediaFeature>,
    matches: bool,
}

impl MediaQuery {
    #[inline]
    pub const fn new(media_type: MediaType) -> Self {
        Self {
            qualifier: None,
            media_type,
            features: Vec::new(),
            matches: false,
        }
    }

    /// A query over every media type, e.g. `(min-width: 600px)`.
    #[inline]
    pub const fn all() -> Self {
        Self::new(MediaType::All)
    }

    #[inline]
    #[must_use]
    pub fn and(mut self, feature: MediaFeature) -> Self {
        self.features.push(feature);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_qualifier(mut self, qualifier: MediaQualifier) -> Self {
        self.qualifier = Some(qualifier);
        self
    }

    #[inline]
    pub const fn media_type(&self) -> MediaType {
        self.media_type
    }

    #[inline]
    pub fn features(&self) -> &[MediaFeature] {
        &self.features
    }
}

impl MediaPredicate for MediaQuery {
    #[inline]
    fn matches(&self) -> bool {
        self.matches
    }

    /// Spec: Section 3. A query is true when its media type and every
    /// feature are true; `not` negates the whole query.
    fn evaluate(&mut self, window: &Window) -> bool {
        let result = self.media_type.accepts(window.medium())
            && self.features.iter().all(|feature| feature.evaluate(window));
        self.matches = if self.qualifier == Some(MediaQualifier::Not) {
            !result
        } else {
            result
        };
        self.matches
    }

    /// CSSOM: serialize a media query.
    fn serialize(&self) -> String {
        let mut out = String::new();
        match self.qualifier {
            Some(MediaQualifier::Not) => out.push_str("not "),
            Some(MediaQualifier::Only) => out.push_str("only "),
            None => {}
        }
        let write_type = self.qualifier.is_some()
            || self.media_type != MediaType::All
            || self.features.is_empty();
        if write_type {
            out.push_str(self.media_type.as_str());
        }
        for (index, feature) in self.features.iter().enumerate() {
            if write_type || index > 0 {
                out.push_str(" and ");
            }
            out.push_str(&feature.to_string());
        }
        out
    }
}
