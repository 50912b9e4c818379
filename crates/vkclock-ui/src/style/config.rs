use std::fmt;

use super::error::StyleError;

// ── Dimension ─────────────────────────────────────────────────────────────

/// Unit of a configured size.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Unit {
    /// Device-independent pixels, multiplied by display density.
    #[default]
    Dp,
    /// Physical pixels, used as-is.
    Px,
}

/// A configured size. Negative values are kept as entered and clamped to zero
/// when resolved into pixels.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Dimension {
    pub value: f32,
    pub unit: Unit,
}

impl Dimension {
    #[inline]
    pub const fn dp(value: f32) -> Self {
        Self { value, unit: Unit::Dp }
    }

    #[inline]
    pub const fn px(value: f32) -> Self {
        Self { value, unit: Unit::Px }
    }

    /// Pixel size at `density`, clamped to `>= 0`.
    #[inline]
    pub fn to_px(self, density: f32) -> f32 {
        let px = match self.unit {
            Unit::Dp => self.value * density,
            Unit::Px => self.value,
        };
        if px.is_finite() { px.max(0.0) } else { 0.0 }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Unit::Dp => write!(f, "{}dp", self.value),
            Unit::Px => write!(f, "{}px", self.value),
        }
    }
}

// ── Options ───────────────────────────────────────────────────────────────

/// Value of a single style option.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum StyleValue {
    /// Packed `0xAARRGGBB`.
    Color(u32),
    Size(Dimension),
}

/// Every recognized style option.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum StyleOption {
    CenterColor,
    HourHandColor,
    MinuteHandColor,
    SecondHandColor,
    CircleColor,
    TickColor,
    NumeralColor,
    CenterRadius,
    HourHandWidth,
    MinuteHandWidth,
    SecondHandWidth,
    CircleWidth,
    TickWidth,
    TickLength,
    NumeralTextSize,
}

impl StyleOption {
    pub const ALL: [StyleOption; 15] = [
        StyleOption::CenterColor,
        StyleOption::HourHandColor,
        StyleOption::MinuteHandColor,
        StyleOption::SecondHandColor,
        StyleOption::CircleColor,
        StyleOption::TickColor,
        StyleOption::NumeralColor,
        StyleOption::CenterRadius,
        StyleOption::HourHandWidth,
        StyleOption::MinuteHandWidth,
        StyleOption::SecondHandWidth,
        StyleOption::CircleWidth,
        StyleOption::TickWidth,
        StyleOption::TickLength,
        StyleOption::NumeralTextSize,
    ];

    /// Canonical attribute name.
    pub fn name(self) -> &'static str {
        match self {
            StyleOption::CenterColor => "centerColor",
            StyleOption::HourHandColor => "hourHandColor",
            StyleOption::MinuteHandColor => "minuteHandColor",
            StyleOption::SecondHandColor => "secondHandColor",
            StyleOption::CircleColor => "circleColor",
            StyleOption::TickColor => "tickColor",
            StyleOption::NumeralColor => "numeralColor",
            StyleOption::CenterRadius => "centerRadius",
            StyleOption::HourHandWidth => "hourHandWidth",
            StyleOption::MinuteHandWidth => "minuteHandWidth",
            StyleOption::SecondHandWidth => "secondHandWidth",
            StyleOption::CircleWidth => "circleWidth",
            StyleOption::TickWidth => "tickWidth",
            StyleOption::TickLength => "tickLength",
            StyleOption::NumeralTextSize => "numeralTextSize",
        }
    }

    /// Looks up an option by name. Accepts the canonical camelCase name and
    /// its snake_case spelling, case-insensitively.
    pub fn from_name(name: &str) -> Option<StyleOption> {
        let key: String = name
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|opt| opt.name().eq_ignore_ascii_case(&key))
    }

    #[inline]
    pub fn is_color(self) -> bool {
        matches!(
            self,
            StyleOption::CenterColor
                | StyleOption::HourHandColor
                | StyleOption::MinuteHandColor
                | StyleOption::SecondHandColor
                | StyleOption::CircleColor
                | StyleOption::TickColor
                | StyleOption::NumeralColor
        )
    }
}

impl fmt::Display for StyleOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── StyleConfig ───────────────────────────────────────────────────────────

/// Colors and sizes of the clock face.
///
/// Every field is independent; changing one never touches another. Sizes are
/// stored as entered and only turned into pixels by
/// [`ResolvedStyle::resolve`](super::ResolvedStyle::resolve).
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    pub center_color: u32,
    pub hour_hand_color: u32,
    pub minute_hand_color: u32,
    pub second_hand_color: u32,
    pub circle_color: u32,
    pub tick_color: u32,
    pub numeral_color: u32,

    pub center_radius: Dimension,
    pub hour_hand_width: Dimension,
    pub minute_hand_width: Dimension,
    pub second_hand_width: Dimension,
    pub circle_width: Dimension,
    pub tick_width: Dimension,
    pub tick_length: Dimension,
    pub numeral_text_size: Dimension,
}

impl StyleConfig {
    pub const ACCENT: u32 = 0xFFE3_0611;
    pub const INK: u32 = 0xFF00_0000;

    pub const DEFAULT_STROKE: Dimension = Dimension::dp(2.0);
    pub const DEFAULT_TICK_LENGTH: Dimension = Dimension::dp(10.0);
    pub const DEFAULT_NUMERAL_TEXT_SIZE: Dimension = Dimension::dp(20.0);

    pub fn new() -> Self {
        Self {
            center_color: Self::ACCENT,
            hour_hand_color: Self::INK,
            minute_hand_color: Self::INK,
            second_hand_color: Self::ACCENT,
            circle_color: Self::INK,
            tick_color: Self::INK,
            numeral_color: Self::INK,

            center_radius: Self::DEFAULT_STROKE,
            hour_hand_width: Self::DEFAULT_STROKE,
            minute_hand_width: Self::DEFAULT_STROKE,
            second_hand_width: Self::DEFAULT_STROKE,
            circle_width: Self::DEFAULT_STROKE,
            tick_width: Self::DEFAULT_STROKE,
            tick_length: Self::DEFAULT_TICK_LENGTH,
            numeral_text_size: Self::DEFAULT_NUMERAL_TEXT_SIZE,
        }
    }

    /// Reads one option.
    pub fn get(&self, option: StyleOption) -> StyleValue {
        use StyleOption::*;
        match option {
            CenterColor => StyleValue::Color(self.center_color),
            HourHandColor => StyleValue::Color(self.hour_hand_color),
            MinuteHandColor => StyleValue::Color(self.minute_hand_color),
            SecondHandColor => StyleValue::Color(self.second_hand_color),
            CircleColor => StyleValue::Color(self.circle_color),
            TickColor => StyleValue::Color(self.tick_color),
            NumeralColor => StyleValue::Color(self.numeral_color),
            CenterRadius => StyleValue::Size(self.center_radius),
            HourHandWidth => StyleValue::Size(self.hour_hand_width),
            MinuteHandWidth => StyleValue::Size(self.minute_hand_width),
            SecondHandWidth => StyleValue::Size(self.second_hand_width),
            CircleWidth => StyleValue::Size(self.circle_width),
            TickWidth => StyleValue::Size(self.tick_width),
            TickLength => StyleValue::Size(self.tick_length),
            NumeralTextSize => StyleValue::Size(self.numeral_text_size),
        }
    }

    /// Writes one option. Fails when the value kind does not match the option
    /// (a size given for a color or vice versa).
    pub fn set(&mut self, option: StyleOption, value: StyleValue) -> Result<(), StyleError> {
        use StyleOption::*;
        match (option, value) {
            (CenterColor, StyleValue::Color(c)) => self.center_color = c,
            (HourHandColor, StyleValue::Color(c)) => self.hour_hand_color = c,
            (MinuteHandColor, StyleValue::Color(c)) => self.minute_hand_color = c,
            (SecondHandColor, StyleValue::Color(c)) => self.second_hand_color = c,
            (CircleColor, StyleValue::Color(c)) => self.circle_color = c,
            (TickColor, StyleValue::Color(c)) => self.tick_color = c,
            (NumeralColor, StyleValue::Color(c)) => self.numeral_color = c,
            (CenterRadius, StyleValue::Size(d)) => self.center_radius = d,
            (HourHandWidth, StyleValue::Size(d)) => self.hour_hand_width = d,
            (MinuteHandWidth, StyleValue::Size(d)) => self.minute_hand_width = d,
            (SecondHandWidth, StyleValue::Size(d)) => self.second_hand_width = d,
            (CircleWidth, StyleValue::Size(d)) => self.circle_width = d,
            (TickWidth, StyleValue::Size(d)) => self.tick_width = d,
            (TickLength, StyleValue::Size(d)) => self.tick_length = d,
            (NumeralTextSize, StyleValue::Size(d)) => self.numeral_text_size = d,
            (opt, _) => {
                let expected = if opt.is_color() { "a color" } else { "a size" };
                return Err(StyleError::new(format!("{opt} expects {expected}"), 1, 1));
            }
        }
        Ok(())
    }

    /// Applies a single `name` / `value` attribute, e.g. `("hourHandWidth", "3dp")`.
    pub fn apply_attribute(&mut self, name: &str, value: &str) -> Result<(), StyleError> {
        let option = StyleOption::from_name(name)
            .ok_or_else(|| StyleError::new(format!("unknown style option {name:?}"), 1, 1))?;
        let value = super::sheet::parse_value(value)?;
        self.set(option, value)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let s = StyleConfig::default();
        assert_eq!(s.center_color, 0xFFE30611);
        assert_eq!(s.second_hand_color, 0xFFE30611);
        assert_eq!(s.hour_hand_color, 0xFF000000);
        assert_eq!(s.tick_length, Dimension::dp(10.0));
        assert_eq!(s.numeral_text_size, Dimension::dp(20.0));
        assert_eq!(s.circle_width, Dimension::dp(2.0));
    }

    #[test]
    fn option_names_round_trip() {
        for opt in StyleOption::ALL {
            assert_eq!(StyleOption::from_name(opt.name()), Some(opt));
        }
    }

    #[test]
    fn snake_case_aliases_resolve() {
        assert_eq!(StyleOption::from_name("hour_hand_width"), Some(StyleOption::HourHandWidth));
        assert_eq!(StyleOption::from_name("NUMERAL_COLOR"), Some(StyleOption::NumeralColor));
        assert_eq!(StyleOption::from_name("hourHand"), None);
    }

    #[test]
    fn setting_one_option_leaves_others_alone() {
        let mut s = StyleConfig::default();
        s.set(StyleOption::MinuteHandWidth, StyleValue::Size(Dimension::dp(5.0))).unwrap();
        let mut expected = StyleConfig::default();
        expected.minute_hand_width = Dimension::dp(5.0);
        assert_eq!(s, expected);
    }

    #[test]
    fn get_reads_back_what_set_wrote() {
        let mut s = StyleConfig::default();
        for opt in StyleOption::ALL {
            let value = if opt.is_color() {
                StyleValue::Color(0xFF123456)
            } else {
                StyleValue::Size(Dimension::px(7.5))
            };
            s.set(opt, value).unwrap();
            assert_eq!(s.get(opt), value, "{}", opt.name());
        }
        assert_eq!(StyleConfig::default().get(StyleOption::TickLength), StyleValue::Size(Dimension::dp(10.0)));
    }

    #[test]
    fn mismatched_value_kind_is_rejected() {
        let mut s = StyleConfig::default();
        let err = s.set(StyleOption::TickColor, StyleValue::Size(Dimension::dp(1.0))).unwrap_err();
        assert_eq!(err.message, "tickColor expects a color");
        assert_eq!(s, StyleConfig::default());
    }

    #[test]
    fn apply_attribute_parses_units() {
        let mut s = StyleConfig::default();
        s.apply_attribute("circle_width", "6px").unwrap();
        s.apply_attribute("numeralColor", "#336699").unwrap();
        assert_eq!(s.circle_width, Dimension::px(6.0));
        assert_eq!(s.numeral_color, 0xFF336699);
        assert!(s.apply_attribute("bogus", "1").is_err());
    }

    #[test]
    fn dimension_resolves_with_density_and_clamps() {
        assert_eq!(Dimension::dp(2.0).to_px(3.0), 6.0);
        assert_eq!(Dimension::px(2.0).to_px(3.0), 2.0);
        assert_eq!(Dimension::dp(-4.0).to_px(1.0), 0.0);
    }
}
