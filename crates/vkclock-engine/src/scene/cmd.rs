use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::dot::DotCmd;
use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Line(LineCmd),
    Circle(CircleCmd),
    Text(TextCmd),
    Dot(DotCmd),
}

impl DrawCmd {
    /// Short variant name, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCmd::Line(_) => "line",
            DrawCmd::Circle(_) => "circle",
            DrawCmd::Text(_) => "text",
            DrawCmd::Dot(_) => "dot",
        }
    }
}
