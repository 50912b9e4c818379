use super::Vec2;

/// Widget canvas size in pixels.
///
/// Sizes are never negative: the constructor clamps them to zero. A zero-sized
/// viewport is valid and simply yields degenerate geometry.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width: sanitize(width), height: sanitize(height) }
    }

    /// Geometric center of the canvas.
    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[inline]
fn sanitize(v: f32) -> f32 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}
