use std::fmt;

use super::measure::{ApproxTextMeasure, TextMeasure};

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading. The first loaded font is the primary
/// face used by the [`TextMeasure`] impl; with no fonts loaded, measurement
/// falls back to [`ApproxTextMeasure`].
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
    fallback: ApproxTextMeasure,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new(), fallback: ApproxTextMeasure::default() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    ///
    /// Returns the `FontId` that identifies the font.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("font loaded: id={} glyphs={}", id.0, self.fonts[id.0].glyph_count());
        Ok(id)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Tight ink height of `text` laid out in font `id` at `size` pixels.
    ///
    /// Returns `None` when `id` is unknown.
    #[must_use]
    pub fn ink_height(&self, text: &str, id: FontId, size: f32) -> Option<f32> {
        use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

        let font = self.get(id)?;
        if text.is_empty() || size <= 0.0 {
            return Some(0.0);
        }

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, size, 0));

        // Whitespace glyphs have empty bitmaps and must not stretch the box.
        let (top, bottom) = layout
            .glyphs()
            .iter()
            .filter(|g| g.height > 0)
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(top, bottom), g| {
                (top.min(g.y), bottom.max(g.y + g.height as f32))
            });

        if top.is_finite() && bottom.is_finite() {
            Some((bottom - top).max(0.0))
        } else {
            Some(0.0)
        }
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasure for FontSystem {
    fn text_height(&self, text: &str, size: f32) -> f32 {
        self.ink_height(text, FontId(0), size)
            .unwrap_or_else(|| self.fallback.text_height(text, size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_system_falls_back_to_estimate() {
        let fonts = FontSystem::new();
        assert!(fonts.is_empty());
        let expected = ApproxTextMeasure::default().text_height("XII", 20.0);
        assert_eq!(fonts.text_height("XII", 20.0), expected);
    }

    #[test]
    fn unknown_font_id_has_no_height() {
        assert_eq!(FontSystem::new().ink_height("I", FontId(3), 12.0), None);
    }

    #[test]
    fn garbage_bytes_fail_to_load() {
        let mut fonts = FontSystem::new();
        let err = fonts.load_font(b"definitely not a font").unwrap_err();
        assert!(err.to_string().starts_with("font load error"));
    }
}
