use super::Color;

/// Round-capped stroke used by lines, circle outlines and dots.
///
/// For a dot, `width` is the diameter of the rendered point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    /// Negative widths are clamped to zero.
    #[inline]
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width: width.max(0.0) }
    }
}

/// Style of a text draw command.
///
/// The text position is the baseline anchor; the run is centered on it
/// horizontally.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    /// Font size in pixels.
    pub size: f32,
}

impl TextStyle {
    #[inline]
    pub fn centered(color: Color, size: f32) -> Self {
        Self { color, size: size.max(0.0) }
    }
}
