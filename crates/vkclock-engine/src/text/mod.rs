//! Text metrics.
//!
//! The widget only needs one measurement: the ink height of a short label, used
//! to center numerals vertically on their anchor point. [`TextMeasure`] is the
//! seam; [`FontSystem`] answers it from real glyph outlines and
//! [`ApproxTextMeasure`] from a fixed cap-height ratio.

mod font_system;
mod measure;

pub use font_system::{FontId, FontLoadError, FontSystem};
pub use measure::{ApproxTextMeasure, TextMeasure};
