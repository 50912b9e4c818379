use vkclock_engine::paint::{Color, Stroke, TextStyle};

use super::config::StyleConfig;

/// Pixel-space snapshot of a [`StyleConfig`] at a given display density.
///
/// Built whenever the style or density changes and handed by reference to
/// each render pass; nothing mutates it afterwards. All sizes are `>= 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    /// Center dot; `width` is the dot diameter (twice the center radius).
    pub center: Stroke,
    pub hour_hand: Stroke,
    pub minute_hand: Stroke,
    pub second_hand: Stroke,
    pub circle: Stroke,
    pub tick: Stroke,
    pub numeral: TextStyle,
    /// Length of an hour tick; minute ticks are half as long.
    pub tick_length: f32,
}

impl ResolvedStyle {
    pub fn resolve(style: &StyleConfig, density: f32) -> Self {
        let density = if density.is_finite() && density > 0.0 { density } else { 1.0 };
        let px = |d: super::Dimension| d.to_px(density);
        let stroke = |argb: u32, d| Stroke::new(Color::from_argb(argb), px(d));

        Self {
            center: Stroke::new(Color::from_argb(style.center_color), px(style.center_radius) * 2.0),
            hour_hand: stroke(style.hour_hand_color, style.hour_hand_width),
            minute_hand: stroke(style.minute_hand_color, style.minute_hand_width),
            second_hand: stroke(style.second_hand_color, style.second_hand_width),
            circle: stroke(style.circle_color, style.circle_width),
            tick: stroke(style.tick_color, style.tick_width),
            numeral: TextStyle::centered(
                Color::from_argb(style.numeral_color),
                px(style.numeral_text_size),
            ),
            tick_length: px(style.tick_length),
        }
    }
}
