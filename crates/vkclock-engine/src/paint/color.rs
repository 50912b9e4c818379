/// Premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are multiplied by `a` (premultiplied alpha).
///
/// Style configuration speaks packed `0xAARRGGBB` integers; use
/// [`Color::from_argb`] / [`Color::to_argb`] at that boundary.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn black() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 }
    }

    /// Creates a premultiplied color from a packed `0xAARRGGBB` value.
    #[inline]
    pub fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self::from_srgb_u8(r, g, b, a)
    }

    /// Packs the color back into `0xAARRGGBB` (straight alpha, rounded).
    pub fn to_argb(self) -> u32 {
        let (r, g, b, a) = self.to_straight();
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        u32::from_be_bytes([q(a), q(r), q(g), q(b)])
    }

    /// Creates a premultiplied color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_opaque_red() {
        let c = Color::from_argb(0xFFE30611);
        assert_eq!(c.a, 1.0);
        assert!((c.r - 0xE3 as f32 / 255.0).abs() < 1e-6);
        assert_eq!(c.to_argb(), 0xFFE30611);
    }

    #[test]
    fn argb_black_is_black() {
        assert_eq!(Color::from_argb(0xFF000000), Color::black());
    }

    #[test]
    fn argb_translucent_is_premultiplied() {
        let c = Color::from_argb(0x80FFFFFF);
        assert!(c.r <= c.a + f32::EPSILON);
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn fully_transparent_packs_to_zero() {
        assert_eq!(Color::from_argb(0x00FF00FF).to_argb(), 0);
    }
}
