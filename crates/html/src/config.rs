//! Viewport configuration for Valor windows.
//!
//! This module defines the environment a window exposes to media queries:
//! viewport size, color depth, preferred color scheme and output medium.
//! Configuration can be loaded from environment variables or constructed
//! programmatically.

use crate::dom::window::{ColorScheme, OutputMedium};
use std::env;

/// Default viewport width in CSS pixels.
const DEFAULT_WIDTH: f32 = 800.0;
/// Default viewport height in CSS pixels.
const DEFAULT_HEIGHT: f32 = 600.0;
/// Default bits per color component.
const DEFAULT_COLOR_DEPTH: u8 = 8;

/// Viewport settings a `Window` is created from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConfig {
    /// Viewport width in CSS pixels
    pub width: f32,
    /// Viewport height in CSS pixels
    pub height: f32,
    /// Bits per color component
    pub color_depth: u8,
    /// User preference reported to `prefers-color-scheme`
    pub color_scheme: ColorScheme,
    /// Medium the document is rendered to
    pub medium: OutputMedium,
}

impl ViewportConfig {
    /// Construct a screen viewport of the given size with default color settings.
    ///
    /// Width and height are clamped to at least one pixel.
    #[inline]
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            color_depth: DEFAULT_COLOR_DEPTH,
            color_scheme: ColorScheme::Light,
            medium: OutputMedium::Screen,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `VALOR_VIEWPORT_WIDTH`: Viewport width in CSS pixels (default: 800)
    /// - `VALOR_VIEWPORT_HEIGHT`: Viewport height in CSS pixels (default: 600)
    /// - `VALOR_COLOR_DEPTH`: Bits per color component (default: 8)
    /// - `VALOR_COLOR_SCHEME`: Set to "dark" to prefer a dark scheme (default: light)
    /// - `VALOR_MEDIA_TYPE`: Set to "print" to render as print (default: screen)
    #[inline]
    #[must_use]
    pub fn from_env() -> Self {
        let width = env::var("VALOR_VIEWPORT_WIDTH")
            .ok()
            .and_then(|val| val.parse::<f32>().ok())
            .unwrap_or(DEFAULT_WIDTH);
        let height = env::var("VALOR_VIEWPORT_HEIGHT")
            .ok()
            .and_then(|val| val.parse::<f32>().ok())
            .unwrap_or(DEFAULT_HEIGHT);
        let color_depth = env::var("VALOR_COLOR_DEPTH")
            .ok()
            .and_then(|val| val.parse::<u8>().ok())
            .unwrap_or(DEFAULT_COLOR_DEPTH);
        let color_scheme = if env::var("VALOR_COLOR_SCHEME").ok().as_deref() == Some("dark") {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        };
        let medium = if env::var("VALOR_MEDIA_TYPE").ok().as_deref() == Some("print") {
            OutputMedium::Print
        } else {
            OutputMedium::Screen
        };
        Self {
            color_depth,
            color_scheme,
            medium,
            ..Self::new(width, height)
        }
    }
}

impl Default for ViewportConfig {
    #[inline]
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
