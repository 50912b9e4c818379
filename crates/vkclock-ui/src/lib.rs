//! vkclock UI — the analog clock face widget on top of `vkclock-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use std::sync::mpsc;
//! use vkclock_ui::prelude::*;
//!
//! let (tx, rx) = mpsc::channel();
//! let mut clock = ClockFace::new(SystemTimeSource::new(), IntervalScheduler::new(tx))
//!     .with_style(StyleConfig::from_sheet("secondHandColor: #1e88e5")?)
//!     .with_density(2.0);
//!
//! clock.on_resize(300.0, 300.0);
//! clock.attach()?;
//! for trigger in rx {
//!     clock.handle_trigger(trigger);
//!     for cmd in clock.render() {
//!         // hand each DrawCmd to your canvas
//!     }
//! }
//! ```

pub mod clock_face;
pub mod constraints;
pub mod geometry;
pub mod painter;
pub mod style;
pub mod widget;

pub use clock_face::ClockFace;

/// Everything a host needs to embed the clock.
pub mod prelude {
    pub use crate::clock_face::{ClockFace, HandAngles, TickOutcome, PRIMITIVES_PER_FRAME, TICK_PERIOD};
    pub use crate::constraints::Constraints;
    pub use crate::geometry::{angle_to_point, ClockGeometry};
    pub use crate::painter::Painter;
    pub use crate::style::{Dimension, ResolvedStyle, StyleConfig, StyleError, StyleOption, StyleValue};
    pub use crate::widget::Widget;

    // Re-export the engine primitives everyone needs.
    pub use vkclock_engine::coords::{Rect, Vec2, Viewport};
    pub use vkclock_engine::paint::{Color, Stroke, TextStyle};
    pub use vkclock_engine::scene::{DrawCmd, DrawList};
    pub use vkclock_engine::text::{ApproxTextMeasure, FontSystem, TextMeasure};
    pub use vkclock_engine::time::{
        IntervalScheduler, SystemTimeSource, TickScheduler, TickTrigger, TimeChangeSender,
        TimeOfDay, TimeSource,
    };
}
