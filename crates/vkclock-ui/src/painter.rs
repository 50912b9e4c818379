use vkclock_engine::coords::Vec2;
use vkclock_engine::paint::{Stroke, TextStyle};
use vkclock_engine::scene::DrawList;
use vkclock_engine::text::TextMeasure;

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` and offsets every coordinate by `origin`, so
/// widgets draw in their own local space.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    text: &'a dyn TextMeasure,
    origin: Vec2,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, text: &'a dyn TextMeasure) -> Self {
        Self { draw_list, text, origin: Vec2::zero() }
    }

    /// Returns a painter whose local `(0, 0)` maps to `origin` in list space.
    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Moves the local origin. Containers use this to paint a child at its
    /// rect and restore their own origin afterwards.
    #[inline]
    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    // ── text measurement ──────────────────────────────────────────────────

    /// Tight ink height of `text` at `size` pixels.
    #[inline]
    pub fn text_height(&self, text: &str, size: f32) -> f32 {
        self.text.text_height(text, size)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    pub fn line(&mut self, start: Vec2, end: Vec2, stroke: Stroke) {
        self.draw_list.push_line(self.origin + start, self.origin + end, stroke);
    }

    /// Circle outline. Negative radii are drawn as zero.
    pub fn circle(&mut self, center: Vec2, radius: f32, stroke: Stroke) {
        self.draw_list.push_circle(self.origin + center, radius.max(0.0), stroke);
    }

    pub fn dot(&mut self, position: Vec2, stroke: Stroke) {
        self.draw_list.push_dot(self.origin + position, stroke);
    }

    /// Text centered horizontally on the baseline anchor `position`.
    pub fn text(&mut self, content: impl Into<String>, position: Vec2, style: TextStyle) {
        self.draw_list.push_text(content, self.origin + position, style);
    }
}
