//! Paint model shared between the widget and renderers.
//!
//! Scope:
//! - color representation (premultiplied alpha, packed ARGB interop)
//! - stroke and text styles carried by draw commands
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod style;

pub use color::Color;
pub use style::{Stroke, TextStyle};
