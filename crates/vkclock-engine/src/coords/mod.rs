//! Coordinate and geometry types shared by the engine and the widget layer.
//!
//! Canonical drawing space:
//! - pixels (density already applied)
//! - origin top-left
//! - +X right, +Y down

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
