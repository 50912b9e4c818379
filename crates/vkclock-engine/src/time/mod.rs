//! Time subsystem.
//!
//! Provides injectable wall-clock reads and tick delivery so widgets can be
//! driven by a real clock in production and by hand in tests.
//! Intended usage:
//! - one `TimeSource` per widget, read on every tick
//! - one `TickScheduler` per widget, registered while the widget is attached
//! - the host drains [`TickTrigger`]s and forwards them to the widget

mod scheduler;
mod source;
mod time_of_day;

pub use scheduler::{
    IntervalScheduler, ManualScheduler, MAX_PERIOD, SchedulerError, TickScheduler, TickTrigger,
    TimeChangeSender,
};
pub use source::{FixedTimeSource, SystemTimeSource, TimeSource, TimeSourceError};
pub use time_of_day::TimeOfDay;
