use vkclock_engine::coords::Vec2;

/// Layout constraints passed down from the host during measure.
///
/// A widget may return any size in `[min, max]`. Hosts enforce their own
/// policy by calling [`Constraints::constrain`] on the returned size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Tight: widget must be exactly `size`.
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    /// Loose: widget can be anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    /// No constraint: widget can take any positive size.
    #[inline]
    pub fn unbounded() -> Self {
        Self { min: Vec2::zero(), max: Vec2::new(f32::INFINITY, f32::INFINITY) }
    }

    /// Clamp a size into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }

    /// Largest finite square that fits, or `fallback` per unbounded axis.
    #[must_use]
    pub fn largest_square(self, fallback: f32) -> Vec2 {
        let w = if self.max.x.is_finite() { self.max.x } else { fallback };
        let h = if self.max.y.is_finite() { self.max.y } else { fallback };
        let side = w.min(h).max(0.0);
        self.constrain(Vec2::new(side, side))
    }
}
