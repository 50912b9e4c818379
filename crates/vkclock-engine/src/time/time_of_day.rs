use std::fmt;

use chrono::Timelike;

/// A wall-clock time of day with second resolution.
///
/// Invariant: `hour < 24`, `minute < 60`, `second < 60`. Leap seconds reported
/// by the OS are folded into second 59.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hour: 0, minute: 0, second: 0 };

    /// Returns `None` when any field is out of range.
    pub const fn new(hour: u8, minute: u8, second: u8) -> Option<Self> {
        if hour < 24 && minute < 60 && second < 60 {
            Some(Self { hour, minute, second })
        } else {
            None
        }
    }

    /// Converts any chrono time-bearing value (e.g. `DateTime<Local>`).
    pub fn from_timelike<T: Timelike>(t: &T) -> Self {
        Self {
            hour: t.hour() as u8,
            minute: t.minute() as u8,
            second: t.second().min(59) as u8,
        }
    }

    #[inline]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    #[inline]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    #[inline]
    pub const fn second(self) -> u8 {
        self.second
    }

    /// Fractional hour of day: `hour + minute / 60`.
    #[inline]
    pub fn fractional_hour(self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn rejects_out_of_range_fields() {
        assert!(TimeOfDay::new(24, 0, 0).is_none());
        assert!(TimeOfDay::new(0, 60, 0).is_none());
        assert!(TimeOfDay::new(0, 0, 60).is_none());
        assert!(TimeOfDay::new(23, 59, 59).is_some());
    }

    #[test]
    fn fractional_hour_adds_minutes() {
        let t = TimeOfDay::new(0, 30, 0).unwrap();
        assert!((t.fractional_hour() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn from_chrono_time() {
        let nt = NaiveTime::from_hms_opt(15, 4, 5).unwrap();
        assert_eq!(TimeOfDay::from_timelike(&nt), TimeOfDay::new(15, 4, 5).unwrap());
    }

    #[test]
    fn leap_second_folds_into_59() {
        let nt = NaiveTime::from_hms_milli_opt(23, 59, 59, 1_500).unwrap();
        assert_eq!(TimeOfDay::from_timelike(&nt).second(), 59);
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(TimeOfDay::new(3, 7, 9).unwrap().to_string(), "03:07:09");
    }
}
