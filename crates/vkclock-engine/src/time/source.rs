use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use super::TimeOfDay;

/// Error returned when the wall clock cannot be read.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSourceError(pub String);

impl fmt::Display for TimeSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "time source unavailable: {}", self.0)
    }
}

impl std::error::Error for TimeSourceError {}

/// Capability for reading the current local time of day.
pub trait TimeSource {
    fn now(&self) -> Result<TimeOfDay, TimeSourceError>;
}

/// Local wall-clock time from the operating system (honors the current
/// timezone on every read, so timezone changes are picked up by the next tick).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl SystemTimeSource {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Result<TimeOfDay, TimeSourceError> {
        Ok(TimeOfDay::from_timelike(&chrono::Local::now()))
    }
}

/// Settable time source. Clones share the same reading.
///
/// `None` models an unavailable clock: [`TimeSource::now`] fails until a time
/// is set again.
#[derive(Debug, Clone, Default)]
pub struct FixedTimeSource {
    current: Rc<Cell<Option<TimeOfDay>>>,
}

impl FixedTimeSource {
    pub fn new(time: TimeOfDay) -> Self {
        Self { current: Rc::new(Cell::new(Some(time))) }
    }

    /// A source that fails until [`set`](Self::set) is called.
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn set(&self, time: TimeOfDay) {
        self.current.set(Some(time));
    }

    pub fn make_unavailable(&self) {
        self.current.set(None);
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> Result<TimeOfDay, TimeSourceError> {
        self.current
            .get()
            .ok_or_else(|| TimeSourceError("no time set".to_string()))
    }
}
