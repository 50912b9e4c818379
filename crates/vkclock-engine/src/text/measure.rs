/// Text measurement capability consumed by the widget layer.
pub trait TextMeasure {
    /// Height in pixels of the tight ink bounds of `text` at `size` pixels.
    fn text_height(&self, text: &str, size: f32) -> f32;
}

/// Font-less estimate: every run is as tall as a capital letter.
///
/// Clock numerals are Roman capitals, so cap height is the whole ink box.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ApproxTextMeasure {
    pub cap_height_ratio: f32,
}

impl ApproxTextMeasure {
    pub const DEFAULT_CAP_HEIGHT_RATIO: f32 = 0.7;

    #[inline]
    pub const fn new(cap_height_ratio: f32) -> Self {
        Self { cap_height_ratio }
    }
}

impl Default for ApproxTextMeasure {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAP_HEIGHT_RATIO)
    }
}

impl TextMeasure for ApproxTextMeasure {
    fn text_height(&self, text: &str, size: f32) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        (size * self.cap_height_ratio).max(0.0)
    }
}
