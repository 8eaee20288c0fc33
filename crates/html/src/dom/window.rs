//! The live execution context of a document, as seen by media queries.

use crate::config::ViewportConfig;
use log::debug;

/// Medium a document is being rendered to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputMedium {
    Screen,
    Print,
}

/// Preferred color scheme reported by the user agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    Light,
    Dark,
}

/// A window attached to a document.
#[derive(Clone, Debug, PartialEq)]
pub struct Window {
    viewport: ViewportConfig,
}

impl Window {
    #[inline]
    pub const fn new(viewport: ViewportConfig) -> Self {
        Self { viewport }
    }

    /// Viewport width in CSS pixels.
    #[inline]
    pub const fn inner_width(&self) -> f32 {
        self.viewport.width
    }

    /// Viewport height in CSS pixels.
    #[inline]
    pub const fn inner_height(&self) -> f32 {
        self.viewport.height
    }

    #[inline]
    pub const fn color_depth(&self) -> u8 {
        self.viewport.color_depth
    }

    #[inline]
    pub const fn color_scheme(&self) -> ColorScheme {
        self.viewport.color_scheme
    }

    #[inline]
    pub const fn medium(&self) -> OutputMedium {
        self.viewport.medium
    }

    /// Resize the viewport. Sizes are clamped to at least one pixel.
    pub fn resize(&mut self, width: f32, height: f32) {
        debug!("window resized to {width}x{height}");
        self.viewport.width = width.max(1.0);
        self.viewport.height = height.max(1.0);
    }

    pub fn set_color_scheme(&mut self, scheme: ColorScheme) {
        self.viewport.color_scheme = scheme;
    }

    pub fn set_medium(&mut self, medium: OutputMedium) {
        self.viewport.medium = medium;
    }
}
