//! Clock-face geometry.
//!
//! Clock angles are in degrees, `0°` at 12 o'clock, increasing clockwise.

use vkclock_engine::coords::Vec2;
use vkclock_engine::time::TimeOfDay;

use crate::style::ResolvedStyle;

/// Degrees between adjacent hour marks.
pub const HOUR_ANGLE: f64 = 360.0 / 12.0;
/// Degrees between adjacent minute marks.
pub const MINUTE_ANGLE: f64 = 360.0 / 60.0;
pub const SECOND_ANGLE: f64 = 360.0 / 60.0;

/// Hour-mark labels, starting at 12 o'clock.
pub const NUMERALS: [&str; 12] = [
    "XII", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI",
];

/// Wraps any angle into `[0, 360)`.
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if a >= 360.0 { 0.0 } else { a }
}

#[inline]
pub fn hour_hand_angle(t: TimeOfDay) -> f64 {
    normalize_degrees(t.fractional_hour() * HOUR_ANGLE)
}

#[inline]
pub fn minute_hand_angle(t: TimeOfDay) -> f64 {
    normalize_degrees(t.minute() as f64 * MINUTE_ANGLE)
}

#[inline]
pub fn second_hand_angle(t: TimeOfDay) -> f64 {
    normalize_degrees(t.second() as f64 * SECOND_ANGLE)
}

/// Point at clock angle `angle` and distance `radius` from `center`.
///
/// The clock angle is mirrored into math space (`180° - angle`), so `0°`
/// lands straight up and `90°` to the right in a +Y-down canvas.
#[inline]
pub fn angle_to_point(center: Vec2, angle: f64, radius: f32) -> Vec2 {
    let radians = (-angle + 180.0).to_radians();
    let r = radius as f64;
    Vec2::new(
        center.x + (radians.sin() * r) as f32,
        center.y + (radians.cos() * r) as f32,
    )
}

/// Width-derived lengths of the hands and the face circle, in pixels.
///
/// Invariant: every field is `>= 0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClockGeometry {
    pub hour_len: f32,
    pub minute_len: f32,
    pub second_len: f32,
    pub circle_radius: f32,
}

impl ClockGeometry {
    /// Lengths used before the first size is known.
    pub fn initial(density: f32) -> Self {
        let minute_len = 30.0 * density;
        Self {
            hour_len: 20.0 * density,
            minute_len,
            second_len: 40.0 * density,
            circle_radius: minute_len + 20.0 * density,
        }
        .clamped()
    }

    /// Hands scale with the view width, minus the stroke of each part.
    pub fn for_width(width: f32, style: &ResolvedStyle) -> Self {
        Self {
            hour_len: width / 4.0 - style.hour_hand.width,
            minute_len: width / 3.0 - style.minute_hand.width,
            second_len: width / 2.5 - style.second_hand.width,
            circle_radius: width / 2.0 - style.circle.width,
        }
        .clamped()
    }

    fn clamped(self) -> Self {
        let c = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            hour_len: c(self.hour_len),
            minute_len: c(self.minute_len),
            second_len: c(self.second_len),
            circle_radius: c(self.circle_radius),
        }
    }
}
