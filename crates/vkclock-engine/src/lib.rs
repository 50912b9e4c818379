//! vkclock engine crate.
//!
//! This crate owns the renderer-agnostic pieces used by the clock widget:
//! geometry, colors, the recorded draw stream, text metrics and the time
//! plumbing (time sources and tick schedulers).

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod text;
pub mod time;
